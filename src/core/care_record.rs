//! Care record form of the facilities tab
//!
//! Records which facility the family uses, when they registered, the monthly
//! payment day and amount, and which services are used.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::validation::ValidationResult;
use crate::domain::format_won;

/// Shown while no registration date is picked
pub const DATE_PLACEHOLDER: &str = "날짜 선택";

/// Latest payment day that exists in every month
pub const MAX_PAYMENT_DAY: u8 = 28;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CareService {
    DayCare,
    Bathing,
    HomeCare,
    Shuttle,
}

impl CareService {
    pub const ALL: [CareService; 4] = [
        CareService::DayCare,
        CareService::Bathing,
        CareService::HomeCare,
        CareService::Shuttle,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CareService::DayCare => "주야간보호",
            CareService::Bathing => "방문목욕",
            CareService::HomeCare => "방문요양",
            CareService::Shuttle => "송영(차량)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareServices {
    pub day_care: bool,
    pub bathing: bool,
    pub home_care: bool,
    pub shuttle: bool,
}

impl Default for CareServices {
    fn default() -> Self {
        Self {
            day_care: true,
            bathing: false,
            home_care: true,
            shuttle: false,
        }
    }
}

impl CareServices {
    pub fn is_enabled(&self, service: CareService) -> bool {
        match service {
            CareService::DayCare => self.day_care,
            CareService::Bathing => self.bathing,
            CareService::HomeCare => self.home_care,
            CareService::Shuttle => self.shuttle,
        }
    }

    pub fn set(&mut self, service: CareService, enabled: bool) {
        let flag = match service {
            CareService::DayCare => &mut self.day_care,
            CareService::Bathing => &mut self.bathing,
            CareService::HomeCare => &mut self.home_care,
            CareService::Shuttle => &mut self.shuttle,
        };
        *flag = enabled;
    }
}

/// Editable form state; numeric fields stay as typed text until validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CareRecordForm {
    pub facility_name: String,
    pub registered_on: Option<NaiveDate>,
    pub payment_day: String,
    pub average_amount: String,
    pub services: CareServices,
}

impl Default for CareRecordForm {
    fn default() -> Self {
        Self {
            facility_name: String::new(),
            registered_on: None,
            payment_day: "15".to_string(),
            average_amount: "350,000".to_string(),
            services: CareServices::default(),
        }
    }
}

/// Validated care record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareRecord {
    pub facility_name: String,
    pub registered_on: Option<NaiveDate>,
    pub payment_day: u8,
    pub average_amount: u64,
    pub services: CareServices,
}

impl CareRecordForm {
    /// Form prefilled from a saved record
    pub fn from_record(record: &CareRecord) -> Self {
        Self {
            facility_name: record.facility_name.clone(),
            registered_on: record.registered_on,
            payment_day: record.payment_day.to_string(),
            average_amount: format_won(record.average_amount as f64),
            services: record.services,
        }
    }

    pub fn pick_date(&mut self, date: NaiveDate) {
        self.registered_on = Some(date);
    }

    /// The "today" shortcut, in local time
    pub fn pick_today(&mut self) {
        self.pick_date(Local::now().date_naive());
    }

    pub fn registration_label(&self) -> String {
        self.registered_on
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| DATE_PLACEHOLDER.to_string())
    }

    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::valid();

        if self.facility_name.trim().is_empty() {
            result.add_error("시설명을 입력해주세요.");
        }
        if parse_payment_day(&self.payment_day).is_none() {
            result.add_error(format!("결제일은 1~{MAX_PAYMENT_DAY} 사이여야 합니다."));
        }
        if parse_amount(&self.average_amount).is_none() {
            result.add_error("평균금액은 숫자로 입력해주세요.");
        }
        if self.registered_on.is_none() {
            result.add_warning("등록일이 선택되지 않았습니다.");
        }

        result
    }

    /// Validate and convert into a record
    pub fn to_record(&self) -> crate::error::Result<CareRecord> {
        self.validate().into_result()?;
        Ok(CareRecord {
            facility_name: self.facility_name.trim().to_string(),
            registered_on: self.registered_on,
            payment_day: parse_payment_day(&self.payment_day).unwrap_or(1),
            average_amount: parse_amount(&self.average_amount).unwrap_or(0),
            services: self.services,
        })
    }
}

/// Parse a payment day in 1..=28
pub fn parse_payment_day(text: &str) -> Option<u8> {
    text.trim()
        .parse::<u8>()
        .ok()
        .filter(|d| (1..=MAX_PAYMENT_DAY).contains(d))
}

/// Parse an amount written with optional thousands separators, e.g. `"350,000"`
pub fn parse_amount(text: &str) -> Option<u64> {
    let digits: String = text.trim().chars().filter(|c| *c != ',').collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
