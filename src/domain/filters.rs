//! Extended search criteria collected by the filters screen.
//!
//! Stored under the `filters` key as a JSON object with camelCase keys and
//! `null` for unset fields. There is no version field: unknown keys are
//! ignored and missing keys read back as unset.

use serde::{Deserialize, Serialize};

use super::facility::ServiceType;

/// Distance chips offered by the filters screen, in kilometres
pub const DISTANCE_CHOICES_KM: [f64; 4] = [1.0, 3.0, 5.0, 10.0];

/// Minimum-rating chips offered by the filters screen
pub const RATING_CHOICES: [f64; 3] = [3.0, 4.0, 4.5];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterCriteria {
    /// `None` means unlimited
    pub distance_km: Option<f64>,
    pub service_type: Option<ServiceType>,
    pub fee_min: Option<f64>,
    pub fee_max: Option<f64>,
    pub rating_min: Option<f64>,
    pub vehicle_service: Option<bool>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
