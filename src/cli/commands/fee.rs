use anyhow::Result;

use crate::core::fee::FeeCalculator;
use crate::domain::CareGrade;

/// Run the fee command
pub fn run_fee_command(grade: Option<u8>, discount: bool) -> Result<()> {
    let mut calculator = FeeCalculator::default();
    if let Some(level) = grade {
        calculator.select_grade(CareGrade::from_level(level));
    }
    if discount {
        calculator.toggle_discount();
    }

    let grade_label = calculator.grade().map(|g| g.label()).unwrap_or("등급 미선택");
    let discount_label = if calculator.discount() { "감경 적용" } else { "감경 없음" };
    println!("{grade_label} / {discount_label}");
    println!("월 예상 비용: {}", calculator.result());

    Ok(())
}
