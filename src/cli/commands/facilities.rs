use anyhow::{bail, Result};
use tracing::warn;

use crate::api::FacilityQuery;
use crate::cli::context::CliContext;
use crate::domain::{format_won, FacilityDetail, PaymentCalculation, Review};
use crate::screens::directory::MSG_NO_RESULTS;
use crate::screens::{
    FacilityDetailScreen, FacilityDirectory, FeedState, HomeFeed, PaymentCalculatorScreen,
};

/// Run the feed command
pub async fn run_feed_command(ctx: &CliContext, query: FacilityQuery) -> Result<()> {
    let mut feed = HomeFeed::new(ctx.api()?).with_query(query);

    match feed.load().await {
        FeedState::Loaded(items) if items.is_empty() => println!("표시할 시설이 없어요."),
        FeedState::Loaded(items) => {
            for item in items {
                let rating = item.rating.map(|r| format!(" ★{r:.1}")).unwrap_or_default();
                let fee = item.fee_range.as_deref().unwrap_or("-");
                println!("#{} {}{} · {}", item.id, item.name, rating, fee);
                if let Some(address) = &item.address {
                    println!("   {address}");
                }
            }
        }
        FeedState::Failed { message } => bail!("{message}"),
        FeedState::Loading => {}
    }
    Ok(())
}

/// Run the find command
pub async fn run_find_command(ctx: &CliContext, query: Option<String>, featured: bool) -> Result<()> {
    let mut directory = FacilityDirectory::new(ctx.api()?);
    let items = if featured {
        directory.featured().await
    } else {
        directory.search(query.as_deref().unwrap_or("")).await?
    };

    if items.is_empty() {
        println!("{MSG_NO_RESULTS}");
    }
    for item in items {
        let grade = item.grade.map(|g| g.to_string()).unwrap_or_else(|| "-".to_string());
        println!("#{} {} · 등급 {} · {}", item.facility_id, item.name, grade, item.price_label());
        println!("   {}", item.address.as_deref().unwrap_or("주소 정보 없음"));
    }
    Ok(())
}

/// Run the facility command
pub async fn run_facility_command(ctx: &CliContext, id: String) -> Result<()> {
    let mut screen = FacilityDetailScreen::new(ctx.api()?, id);
    screen.load().await?;

    if let Some(detail) = screen.detail() {
        print_detail(detail);
    }
    println!();
    if screen.reviews().is_empty() {
        println!("아직 후기가 없습니다.");
    }
    for review in screen.reviews() {
        print_review(review);
    }
    Ok(())
}

fn print_detail(detail: &FacilityDetail) {
    println!("{} · {}", detail.name, detail.price_label());
    println!("  주소: {}", detail.address.as_deref().unwrap_or("주소 정보 없음"));
    let grade = detail.grade.map(|g| g.to_string()).unwrap_or_else(|| "-".to_string());
    println!("  등급: ★ {grade}");
    if let Some(capacity) = detail.capacity {
        println!("  정원: {capacity}");
    }
    if let Some(phone) = &detail.phone {
        println!("  연락처: {phone}");
    }
}

fn print_review(review: &Review) {
    let date = review
        .created_date()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    println!("{} {} {}", review.stars(), review.author(), date);
    println!("  {}", review.content);
}

/// Run the review command
pub async fn run_review_command(ctx: &CliContext, id: String, rating: u8, content: String) -> Result<()> {
    let mut screen = FacilityDetailScreen::new(ctx.api()?, id);
    let created = screen.submit_review(&content, rating).await?;
    println!("등록되었습니다.");
    print_review(created);
    Ok(())
}

/// Run the pay command
pub async fn run_pay_command(ctx: &CliContext, id: Option<String>, months: String) -> Result<()> {
    let mut screen = PaymentCalculatorScreen::new(ctx.api()?);
    screen.load().await?;
    if let Some(id) = id {
        if !screen.options().iter().any(|f| f.facility_id == id) {
            warn!("Facility {} has no listed price", id);
        }
        screen.select(id);
    }
    screen.set_months_text(&months);

    print_calculation(screen.calculate().await?);
    Ok(())
}

fn print_calculation(calculation: &PaymentCalculation) {
    println!("{} · {}개월", calculation.facility_name, calculation.months);
    println!("  총액: {}원", format_won(calculation.total_amount));
    println!("  월 평균: {}원", format_won(calculation.average_monthly_amount));
    for payment in &calculation.monthly_payments {
        println!("  {}개월차: {}원", payment.month_index, format_won(payment.amount));
    }
}
