use anyhow::Result;

use crate::cli::args::RecordCommand;
use crate::cli::context::CliContext;
use crate::core::care_record::{CareRecord, CareService};
use crate::domain::format_won;
use crate::screens::CareRecordScreen;

/// Run the record command
pub async fn run_record_command(ctx: &CliContext, command: RecordCommand) -> Result<()> {
    let mut screen = CareRecordScreen::new(ctx.store());
    screen.load().await?;

    match command {
        RecordCommand::Show => match screen.saved() {
            Some(record) => print_record(record, &screen.form().registration_label()),
            None => println!("저장된 기록이 없습니다."),
        },
        RecordCommand::Set {
            facility,
            date,
            today,
            payment_day,
            amount,
            services,
        } => {
            let form = screen.form_mut();
            if let Some(name) = facility {
                form.facility_name = name;
            }
            if today {
                form.pick_today();
            } else if let Some(date) = date {
                form.pick_date(date);
            }
            if let Some(day) = payment_day {
                form.payment_day = day;
            }
            if let Some(amount) = amount {
                form.average_amount = amount;
            }
            if let Some(selected) = services {
                for service in CareService::ALL {
                    let enabled = selected.iter().any(|s| CareService::from(*s) == service);
                    form.services.set(service, enabled);
                }
            }

            let label = form.registration_label();
            let record = screen.save().await?;
            print_record(record, &label);
            if let Some(message) = screen.message() {
                println!("{message}");
            }
        }
    }
    Ok(())
}

fn print_record(record: &CareRecord, registered: &str) {
    println!("시설명: {}", record.facility_name);
    println!("등록일: {registered}");
    println!("결제일: 매월 {}일", record.payment_day);
    println!("평균금액: {}원", format_won(record.average_amount as f64));
    let services: Vec<&str> = CareService::ALL
        .into_iter()
        .filter(|s| record.services.is_enabled(*s))
        .map(|s| s.label())
        .collect();
    println!("이용 서비스: {}", services.join(", "));
}
