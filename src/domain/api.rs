//! Request and response bodies of the remote facility API

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use super::facility::string_or_number;

/// Facility as returned by `/facilities/list`, `/facilities/search` and `/facilities/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityDetail {
    #[serde(deserialize_with = "string_or_number")]
    pub facility_id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    /// Evaluation grade shown next to a star
    #[serde(default)]
    pub grade: Option<f64>,
    /// Monthly cost in won; facilities without one cannot be used in the calculator
    #[serde(default)]
    pub monthly_cost: Option<f64>,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl FacilityDetail {
    pub fn has_price(&self) -> bool {
        self.monthly_cost.is_some()
    }

    /// `"월 1,350,000원"`, or a placeholder when the facility has no price
    pub fn price_label(&self) -> String {
        match self.monthly_cost {
            Some(cost) => format!("월 {}원", format_won(cost)),
            None => "가격 정보 없음".to_string(),
        }
    }
}

/// Whole won with thousands separators
pub fn format_won(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        grouped.insert(0, '-');
    }
    grouped
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewAuthor {
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default, deserialize_with = "string_or_number")]
    pub review_id: String,
    #[serde(default)]
    pub user: Option<ReviewAuthor>,
    pub content: String,
    pub rating: u8,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Review {
    /// Author name, anonymous reviews show as "익명"
    pub fn author(&self) -> &str {
        self.user
            .as_ref()
            .map(|u| u.username.as_str())
            .unwrap_or("익명")
    }

    /// Calendar date of `created_at` when it parses as RFC 3339 or a plain date
    pub fn created_date(&self) -> Option<NaiveDate> {
        let raw = self.created_at.as_deref()?;
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.date_naive());
        }
        NaiveDate::parse_from_str(raw.get(..10)?, "%Y-%m-%d").ok()
    }

    /// Five-star strip such as `★★★☆☆`
    pub fn stars(&self) -> String {
        let filled = usize::from(self.rating.min(5));
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }
}

/// Body of `POST /reviews`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReview {
    pub facility_id: u64,
    pub content: String,
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// Body of `POST /payments/calculate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub facility_id: u64,
    pub membership_months: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPayment {
    pub month_index: u32,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentCalculation {
    pub facility_name: String,
    pub months: u32,
    pub total_amount: f64,
    pub average_monthly_amount: f64,
    #[serde(default)]
    pub monthly_payments: Vec<MonthlyPayment>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub username: String,
    pub email: String,
    pub phone: String,
}

/// Body of `POST /auth/register`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Body of `POST /auth/login`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(rating: u8, created_at: Option<&str>) -> Review {
        Review {
            review_id: "1".to_string(),
            user: None,
            content: "친절해요".to_string(),
            rating,
            photo_url: None,
            created_at: created_at.map(str::to_string),
        }
    }

    #[test]
    fn test_review_stars_and_anonymous_author() {
        let r = review(4, None);
        assert_eq!(r.stars(), "★★★★☆");
        assert_eq!(r.author(), "익명");
    }

    #[test]
    fn test_review_created_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 5, 1);
        assert_eq!(review(5, Some("2024-05-01T09:30:00+09:00")).created_date(), expected);
        assert_eq!(review(5, Some("2024-05-01 09:30:00")).created_date(), expected);
        assert_eq!(review(5, Some("yesterday")).created_date(), None);
    }

    #[test]
    fn test_facility_detail_lenient_fields() {
        let json = r#"{"facility_id": 12, "name": "소망요양원", "monthly_cost": 1350000}"#;
        let detail: FacilityDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.facility_id, "12");
        assert!(detail.has_price());
        assert_eq!(detail.address, None);
        assert_eq!(detail.price_label(), "월 1,350,000원");
    }

    #[test]
    fn test_format_won() {
        assert_eq!(format_won(0.0), "0");
        assert_eq!(format_won(950.0), "950");
        assert_eq!(format_won(1000.0), "1,000");
        assert_eq!(format_won(-1234567.4), "-1,234,567");
    }
}
