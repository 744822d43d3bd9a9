use anyhow::Result;

use crate::cli::args::{Answer, FiltersCommand};
use crate::cli::context::CliContext;
use crate::domain::{mock_catalog, Facility, FilterCriteria, ServiceType};
use crate::screens::{FiltersScreen, SearchScreen};
use crate::storage::records;

/// Run the search command against the built-in catalog
pub async fn run_search_command(
    ctx: &CliContext,
    query: Option<String>,
    service_type: Option<ServiceType>,
) -> Result<()> {
    let mut screen = SearchScreen::new(ctx.store(), mock_catalog());
    screen.on_focus().await?;
    if let Some(kind) = service_type {
        screen.change_mode(kind).await?;
    }
    screen.apply_query(query.unwrap_or_default());

    let mode = screen
        .selected_type()
        .map(|t| t.as_str())
        .unwrap_or("전체");
    println!("[{mode}] {} results", screen.items().len());
    for facility in screen.items() {
        print_facility(facility);
    }
    Ok(())
}

fn print_facility(facility: &Facility) {
    let distance = facility
        .distance_km
        .map(|km| format!(" · {km:.1}km"))
        .unwrap_or_default();
    println!(
        "  #{} {} ({}) ★{:.1}{}",
        facility.id, facility.name, facility.kind, facility.rating, distance
    );
    println!("     {} · {}", facility.fee_range, facility.address);
}

/// Run a filters subcommand
pub async fn run_filters_command(ctx: &CliContext, command: FiltersCommand) -> Result<()> {
    match command {
        FiltersCommand::Show => {
            print_criteria(&records::load_filters(&*ctx.store()).await?);
        }
        FiltersCommand::Set {
            distance,
            service_type,
            fee_min,
            fee_max,
            rating,
            vehicle,
        } => {
            let mut screen = FiltersScreen::new(ctx.store());
            if let Some(km) = distance {
                screen.toggle_distance(km);
            }
            if let Some(kind) = service_type {
                screen.toggle_service_type(kind);
            }
            screen.set_fee_min(fee_min);
            screen.set_fee_max(fee_max);
            if let Some(min) = rating {
                screen.toggle_rating(min);
            }
            if let Some(answer) = vehicle {
                screen.toggle_vehicle(answer == Answer::Yes);
            }
            screen.apply().await?;
            print_criteria(&screen.criteria()?);
        }
        FiltersCommand::Reset => {
            let mut screen = FiltersScreen::new(ctx.store());
            screen.reset();
            screen.apply().await?;
            println!("Filters cleared");
        }
    }
    Ok(())
}

fn print_criteria(criteria: &FilterCriteria) {
    fn show<T: ToString>(value: Option<T>) -> String {
        value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
    }

    if criteria.is_empty() {
        println!("No filters saved");
        return;
    }
    println!("distance:  {}", criteria.distance_km.map(|km| format!("{km}km")).unwrap_or_else(|| "무제한".to_string()));
    println!("type:      {}", show(criteria.service_type));
    println!("fee:       {} ~ {}", show(criteria.fee_min), show(criteria.fee_max));
    println!("rating:    {}", show(criteria.rating_min));
    println!("vehicle:   {}", show(criteria.vehicle_service));
}
