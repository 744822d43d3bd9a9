//! Pure validation of user input
//!
//! Everything here runs before a request is sent. Messages are the ones shown
//! in the blocking alert.

use crate::error::{Error, Result};

pub const MSG_REVIEW_EMPTY: &str = "후기를 입력해주세요.";
pub const MSG_RATING_RANGE: &str = "평점은 1~5 사이여야 합니다.";
pub const MSG_MONTHS_MIN: &str = "개월 수는 1 이상이어야 합니다.";
pub const MSG_MONTHS_MAX: &str = "개월 수는 24 이하여야 합니다.";
pub const MSG_FACILITY_REQUIRED: &str = "시설을 선택해주세요.";

/// Longest membership the calculator input accepts
pub const MAX_MEMBERSHIP_MONTHS: u32 = 24;

/// Validation result with errors and warnings
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Create a valid result
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add an error
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }

    /// Add a warning
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Convert into a `Result`, joining every error message
    pub fn into_result(self) -> Result<()> {
        if self.is_valid {
            Ok(())
        } else {
            Err(Error::Validation(self.errors.join(" ")))
        }
    }
}

/// Validate a review before submission
pub fn validate_review(content: &str, rating: u8) -> ValidationResult {
    let mut result = ValidationResult::valid();

    if content.trim().is_empty() {
        result.add_error(MSG_REVIEW_EMPTY);
    }
    if !(1..=5).contains(&rating) {
        result.add_error(MSG_RATING_RANGE);
    }

    result
}

/// Validate the membership length of a payment calculation
pub fn validate_months(months: i64) -> ValidationResult {
    let mut result = ValidationResult::valid();

    if months < 1 {
        result.add_error(MSG_MONTHS_MIN);
    } else if months > i64::from(MAX_MEMBERSHIP_MONTHS) {
        result.add_warning(format!(
            "{months}개월은 입력 범위를 넘어 {MAX_MEMBERSHIP_MONTHS}개월로 계산됩니다."
        ));
    }

    result
}

/// Normalize the months text field: unparsable input becomes 1, then clamp to 1..=24
pub fn clamp_months(input: &str) -> u32 {
    let parsed = input.trim().parse::<i64>().ok().filter(|n| *n != 0).unwrap_or(1);
    parsed.clamp(1, i64::from(MAX_MEMBERSHIP_MONTHS)) as u32
}

/// Parse an optional numeric text field. Empty text means unset.
pub fn parse_optional_number(field: &str, text: &str) -> std::result::Result<Option<f64>, String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .map(Some)
        .ok_or_else(|| format!("{field}: 숫자를 입력해주세요 ({trimmed:?})"))
}

/// Validate a fee range; an inverted range is allowed but flagged
pub fn validate_fee_range(min: Option<f64>, max: Option<f64>) -> ValidationResult {
    let mut result = ValidationResult::valid();

    for (name, value) in [("최소", min), ("최대", max)] {
        if value.is_some_and(|v| v < 0.0) {
            result.add_error(format!("{name} 금액은 0 이상이어야 합니다."));
        }
    }
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            result.add_warning("최소 금액이 최대 금액보다 큽니다.");
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_review() {
        assert!(validate_review("좋아요", 5).is_valid);

        let result = validate_review("   ", 0);
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec![MSG_REVIEW_EMPTY, MSG_RATING_RANGE]);

        assert!(!validate_review("별로", 6).is_valid);
    }

    #[test]
    fn test_validate_months() {
        assert!(validate_months(1).is_valid);
        assert!(!validate_months(0).is_valid);
        assert!(!validate_months(-3).is_valid);

        let long = validate_months(30);
        assert!(long.is_valid);
        assert_eq!(long.warnings.len(), 1);
    }

    #[test]
    fn test_clamp_months() {
        assert_eq!(clamp_months("6"), 6);
        assert_eq!(clamp_months(""), 1);
        assert_eq!(clamp_months("abc"), 1);
        assert_eq!(clamp_months("0"), 1);
        assert_eq!(clamp_months("-4"), 1);
        assert_eq!(clamp_months("99"), 24);
    }

    #[test]
    fn test_parse_optional_number() {
        assert_eq!(parse_optional_number("feeMin", ""), Ok(None));
        assert_eq!(parse_optional_number("feeMin", " 85 "), Ok(Some(85.0)));
        assert!(parse_optional_number("feeMin", "85만원").is_err());
        assert!(parse_optional_number("feeMin", "NaN").is_err());
    }

    #[test]
    fn test_validate_fee_range() {
        assert!(validate_fee_range(Some(60.0), Some(90.0)).warnings.is_empty());
        assert_eq!(validate_fee_range(Some(90.0), Some(60.0)).warnings.len(), 1);
        assert!(!validate_fee_range(Some(-1.0), None).is_valid);
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationResult::valid().into_result().is_ok());
        let err = validate_review("", 3).into_result().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains(MSG_REVIEW_EMPTY));
    }
}
