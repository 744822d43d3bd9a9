//! Monthly fee calculator
//!
//! Maps a care grade and a discount flag to the expected monthly
//! out-of-pocket amount. Amounts are abstract whole units displayed with the
//! `만원` suffix.

use std::fmt;

use crate::domain::CareGrade;

/// Share of the base fee charged when the discount applies
pub const DISCOUNT_PERCENT: u32 = 80;

/// Suffix appended to displayed amounts
pub const AMOUNT_SUFFIX: &str = "만원";

/// Shown when no grade is selected
pub const NO_RESULT_PLACEHOLDER: &str = "-";

/// Result of the fee calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthlyFee {
    /// No grade selected yet
    NoResult,
    Amount(u32),
}

impl MonthlyFee {
    pub fn amount(&self) -> Option<u32> {
        match self {
            MonthlyFee::NoResult => None,
            MonthlyFee::Amount(amount) => Some(*amount),
        }
    }
}

impl fmt::Display for MonthlyFee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthlyFee::NoResult => f.write_str(NO_RESULT_PLACEHOLDER),
            MonthlyFee::Amount(amount) => write!(f, "{amount}{AMOUNT_SUFFIX}"),
        }
    }
}

/// Pure: base fee of a grade. Grades without a table entry cost 0.
pub fn base_fee(grade: CareGrade) -> u32 {
    match grade {
        CareGrade::Grade2 => 100,
        CareGrade::Grade3 => 80,
        CareGrade::Other => 0,
    }
}

/// Pure: apply the discount, rounding half up to a whole unit
pub fn apply_discount(base: u32) -> u32 {
    (base * DISCOUNT_PERCENT + 50) / 100
}

/// Pure: compute the monthly fee for the calculator screen
///
/// # Examples
///
/// ```
/// use carefinder::core::fee::{compute_monthly_fee, MonthlyFee};
/// use carefinder::domain::CareGrade;
///
/// assert_eq!(compute_monthly_fee(Some(CareGrade::Grade3), true), MonthlyFee::Amount(64));
/// assert_eq!(compute_monthly_fee(None, true).to_string(), "-");
/// ```
pub fn compute_monthly_fee(grade: Option<CareGrade>, discount: bool) -> MonthlyFee {
    let Some(grade) = grade else {
        return MonthlyFee::NoResult;
    };

    let base = base_fee(grade);
    let amount = if discount { apply_discount(base) } else { base };
    MonthlyFee::Amount(amount)
}

/// Calculator screen state: selected grade and discount toggle
#[derive(Debug, Clone, Default)]
pub struct FeeCalculator {
    pub facility_id: Option<String>,
    grade: Option<CareGrade>,
    discount: bool,
}

impl FeeCalculator {
    pub fn for_facility(facility_id: impl Into<String>) -> Self {
        Self {
            facility_id: Some(facility_id.into()),
            ..Self::default()
        }
    }

    pub fn select_grade(&mut self, grade: CareGrade) {
        self.grade = Some(grade);
    }

    pub fn toggle_discount(&mut self) {
        self.discount = !self.discount;
    }

    pub fn grade(&self) -> Option<CareGrade> {
        self.grade
    }

    pub fn discount(&self) -> bool {
        self.discount
    }

    pub fn result(&self) -> MonthlyFee {
        compute_monthly_fee(self.grade, self.discount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_table() {
        assert_eq!(compute_monthly_fee(Some(CareGrade::Grade2), false), MonthlyFee::Amount(100));
        assert_eq!(compute_monthly_fee(Some(CareGrade::Grade2), true), MonthlyFee::Amount(80));
        assert_eq!(compute_monthly_fee(Some(CareGrade::Grade3), false), MonthlyFee::Amount(80));
        assert_eq!(compute_monthly_fee(Some(CareGrade::Grade3), true), MonthlyFee::Amount(64));
    }

    #[test]
    fn test_unset_grade_is_no_result() {
        assert_eq!(compute_monthly_fee(None, true), MonthlyFee::NoResult);
        assert_eq!(compute_monthly_fee(None, false).amount(), None);
    }

    #[test]
    fn test_unlisted_grade_falls_back_to_zero() {
        assert_eq!(compute_monthly_fee(Some(CareGrade::Other), true), MonthlyFee::Amount(0));
        assert_eq!(compute_monthly_fee(Some(CareGrade::from_level(1)), false).to_string(), "0만원");
    }

    #[test]
    fn test_discount_rounds_half_up() {
        assert_eq!(apply_discount(100), 80);
        assert_eq!(apply_discount(81), 65); // 64.8
        assert_eq!(apply_discount(83), 66); // 66.4
    }

    #[test]
    fn test_display() {
        assert_eq!(MonthlyFee::Amount(64).to_string(), "64만원");
        assert_eq!(MonthlyFee::NoResult.to_string(), "-");
    }

    #[test]
    fn test_calculator_state() {
        let mut calc = FeeCalculator::for_facility("3");
        assert_eq!(calc.result(), MonthlyFee::NoResult);

        calc.toggle_discount();
        assert_eq!(calc.result(), MonthlyFee::NoResult);

        calc.select_grade(CareGrade::Grade2);
        assert_eq!(calc.result().to_string(), "80만원");

        calc.toggle_discount();
        calc.select_grade(CareGrade::Grade3);
        assert_eq!(calc.result().to_string(), "80만원");
        assert!(!calc.discount());
    }
}
