//! Command routing and execution

use anyhow::Result;
use tracing::debug;

use crate::api::FacilityQuery;
use crate::cli::args::Commands;
use crate::cli::commands::*;
use crate::cli::context::CliContext;
use crate::config::CareFinderConfig;
use crate::error::Error;
use crate::navigation::{redirect_for_error, Navigation};

/// Execute a CLI command based on the parsed arguments
pub async fn execute_command(command: Commands, config: CareFinderConfig) -> Result<()> {
    // Pure commands need neither the store nor the network
    match command {
        Commands::Fee { grade, discount } => return run_fee_command(grade, discount),
        Commands::ServeMock { host, port } => return run_serve_mock_command(host, port).await,
        _ => {}
    }

    let ctx = CliContext::open(config).await?;

    let result = match command {
        Commands::Launch { no_splash } => run_launch_command(&ctx, no_splash).await,
        Commands::Onboard {
            has_grade,
            service_type,
            explain,
        } => run_onboard_command(&ctx, has_grade, service_type, explain).await,
        Commands::Search {
            query,
            service_type,
        } => run_search_command(&ctx, query, service_type).await,
        Commands::Filters { command } => run_filters_command(&ctx, command).await,
        Commands::Feed {
            query,
            service_type,
            page,
            page_size,
            lat,
            lng,
        } => {
            let query = FacilityQuery {
                q: query,
                service_type,
                page,
                page_size,
                lat,
                lng,
            };
            run_feed_command(&ctx, query).await
        }
        Commands::Find { query, featured } => run_find_command(&ctx, query, featured).await,
        Commands::Record { command } => run_record_command(&ctx, command).await,
        Commands::Facility { id } => run_facility_command(&ctx, id).await,
        Commands::Review {
            id,
            rating,
            content,
        } => run_review_command(&ctx, id, rating, content).await,
        Commands::Pay { id, months } => run_pay_command(&ctx, id, months).await,
        Commands::Register {
            username,
            email,
            password,
            phone,
        } => run_register_command(&ctx, username, email, password, phone).await,
        Commands::Login { username, password } => run_login_command(&ctx, username, password).await,
        Commands::Logout => run_logout_command(&ctx).await,
        Commands::Profile { command } => run_profile_command(&ctx, command).await,
        Commands::Fee { .. } | Commands::ServeMock { .. } => Ok(()),
    };

    if let Err(e) = &result {
        let redirect = e.downcast_ref::<Error>().and_then(redirect_for_error);
        if let Some(Navigation::Replace(route) | Navigation::Push(route)) = redirect {
            debug!("Redirecting to {}", route);
            eprintln!("`carefinder login` 으로 다시 로그인해주세요.");
        }
    }
    result
}
