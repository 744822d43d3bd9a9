//! Facilities and the enums that classify them
//!
//! Service types and care grades parse from and print as the Korean labels
//! used by the API and the UI. Facility ids arrive as strings or numbers
//! depending on the endpoint.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of care a facility provides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    /// Institutional residential care
    #[serde(rename = "시설급여")]
    FacilityBased,
    /// In-home visiting care
    #[serde(rename = "재가급여")]
    HomeBased,
}

impl ServiceType {
    pub const ALL: [ServiceType; 2] = [ServiceType::FacilityBased, ServiceType::HomeBased];

    /// Persisted and displayed label
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::FacilityBased => "시설급여",
            ServiceType::HomeBased => "재가급여",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "시설급여" | "facility" | "facility-based" => Ok(ServiceType::FacilityBased),
            "재가급여" | "home" | "home-based" => Ok(ServiceType::HomeBased),
            other => Err(format!("unknown service type: {other:?}")),
        }
    }
}

/// Long-term-care eligibility tier, used only to pick a fee tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CareGrade {
    Grade2,
    Grade3,
    /// Any tier without a fee table entry
    Other,
}

impl CareGrade {
    /// Map a numeric tier; anything but 2 and 3 is `Other`
    pub fn from_level(level: u8) -> Self {
        match level {
            2 => CareGrade::Grade2,
            3 => CareGrade::Grade3,
            _ => CareGrade::Other,
        }
    }

    /// Parse a button label such as `"2등급"`. Unknown labels fall back to `Other`.
    pub fn from_label(label: &str) -> Self {
        let digits = label.trim().trim_end_matches("등급");
        digits
            .parse::<u8>()
            .map(Self::from_level)
            .unwrap_or(CareGrade::Other)
    }

    pub fn label(&self) -> &'static str {
        match self {
            CareGrade::Grade2 => "2등급",
            CareGrade::Grade3 => "3등급",
            CareGrade::Other => "기타",
        }
    }
}

/// A care provider as shown in search results.
///
/// Immutable once fetched; each screen owns its own copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    /// Display-only monthly fee range, e.g. `"85~110만원"`
    pub fee_range: String,
    /// 0 to 5
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    pub address: String,
    pub kind: ServiceType,
}

/// Facility row of the home feed. The feed endpoint does not report a kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilitySummary {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub fee_range: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub address: Option<String>,
}

impl From<Facility> for FacilitySummary {
    fn from(f: Facility) -> Self {
        Self {
            id: f.id,
            name: f.name,
            fee_range: Some(f.fee_range),
            rating: Some(f.rating),
            address: Some(f.address),
        }
    }
}

/// Identifiers arrive as strings from some endpoints and as integers from others
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Int(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Int(n) => n.to_string(),
    })
}
