//! Extended filters screen. The criteria are saved for later use; the search
//! tab does not apply them yet.

use tracing::{info, warn};

use crate::core::validation::{parse_optional_number, validate_fee_range, ValidationResult};
use crate::domain::{FilterCriteria, ServiceType};
use crate::error::{Error, Result};
use crate::navigation::Navigation;
use crate::storage::{records, SharedStore};

pub struct FiltersScreen {
    store: SharedStore,
    distance_km: Option<f64>,
    service_type: Option<ServiceType>,
    fee_min: String,
    fee_max: String,
    rating_min: Option<f64>,
    vehicle_service: Option<bool>,
}

impl FiltersScreen {
    /// The screen always opens blank
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            distance_km: None,
            service_type: None,
            fee_min: String::new(),
            fee_max: String::new(),
            rating_min: None,
            vehicle_service: None,
        }
    }

    /// Distance chip; pressing the active chip falls back to unlimited
    pub fn toggle_distance(&mut self, km: f64) {
        self.distance_km = toggled(self.distance_km, km);
    }

    pub fn set_unlimited_distance(&mut self) {
        self.distance_km = None;
    }

    pub fn toggle_service_type(&mut self, kind: ServiceType) {
        self.service_type = toggled(self.service_type, kind);
    }

    pub fn toggle_rating(&mut self, min: f64) {
        self.rating_min = toggled(self.rating_min, min);
    }

    pub fn toggle_vehicle(&mut self, available: bool) {
        self.vehicle_service = toggled(self.vehicle_service, available);
    }

    pub fn set_fee_min(&mut self, text: impl Into<String>) {
        self.fee_min = text.into();
    }

    pub fn set_fee_max(&mut self, text: impl Into<String>) {
        self.fee_max = text.into();
    }

    pub fn reset(&mut self) {
        self.distance_km = None;
        self.service_type = None;
        self.fee_min.clear();
        self.fee_max.clear();
        self.rating_min = None;
        self.vehicle_service = None;
    }

    /// Current form contents as criteria, or every input error at once
    pub fn criteria(&self) -> Result<FilterCriteria> {
        let mut result = ValidationResult::valid();
        let mut fee = |field: &str, text: &str| match parse_optional_number(field, text) {
            Ok(value) => value,
            Err(e) => {
                result.add_error(e);
                None
            }
        };
        let fee_min = fee("feeMin", &self.fee_min);
        let fee_max = fee("feeMax", &self.fee_max);

        let range = validate_fee_range(fee_min, fee_max);
        for warning in &range.warnings {
            warn!("{}", warning);
        }
        for error in range.errors {
            result.add_error(error);
        }
        if !result.is_valid {
            return Err(Error::Validation(result.errors.join(" ")));
        }

        Ok(FilterCriteria {
            distance_km: self.distance_km,
            service_type: self.service_type,
            fee_min,
            fee_max,
            rating_min: self.rating_min,
            vehicle_service: self.vehicle_service,
        })
    }

    /// Save the criteria under `filters` and leave the screen
    pub async fn apply(&self) -> Result<Navigation> {
        let criteria = self.criteria()?;
        records::save_filters(&*self.store, &criteria).await?;
        info!("Saved search filters");
        Ok(Navigation::Back)
    }
}

fn toggled<T: PartialEq>(current: Option<T>, pressed: T) -> Option<T> {
    if current.as_ref() == Some(&pressed) {
        None
    } else {
        Some(pressed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::sync::Arc;

    fn screen() -> (FiltersScreen, MemoryStore) {
        let store = MemoryStore::new();
        (FiltersScreen::new(Arc::new(store.clone())), store)
    }

    #[test]
    fn test_pressing_active_chip_clears_it() {
        let (mut screen, _) = screen();
        screen.toggle_distance(3.0);
        screen.toggle_distance(5.0);
        assert_eq!(screen.criteria().unwrap().distance_km, Some(5.0));
        screen.toggle_distance(5.0);
        assert_eq!(screen.criteria().unwrap().distance_km, None);

        screen.toggle_vehicle(true);
        screen.toggle_vehicle(false);
        assert_eq!(screen.criteria().unwrap().vehicle_service, Some(false));
        screen.toggle_vehicle(false);
        assert_eq!(screen.criteria().unwrap().vehicle_service, None);
    }

    #[test]
    fn test_fee_text_must_be_numeric() {
        let (mut screen, _) = screen();
        screen.set_fee_min("60");
        screen.set_fee_max("구십");
        let err = screen.criteria().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("feeMax"));

        screen.set_fee_max("");
        assert_eq!(screen.criteria().unwrap().fee_max, None);
    }

    #[tokio::test]
    async fn test_apply_saves_and_goes_back() {
        let (mut screen, store) = screen();
        screen.toggle_distance(3.0);
        screen.toggle_service_type(ServiceType::HomeBased);
        screen.set_fee_min("60");
        screen.set_fee_max("90");
        screen.toggle_rating(4.5);

        assert_eq!(screen.apply().await.unwrap(), Navigation::Back);

        let saved = records::load_filters(&store).await.unwrap();
        assert_eq!(saved.distance_km, Some(3.0));
        assert_eq!(saved.service_type, Some(ServiceType::HomeBased));
        assert_eq!(saved.fee_min, Some(60.0));
        assert_eq!(saved.fee_max, Some(90.0));
        assert_eq!(saved.rating_min, Some(4.5));
        assert_eq!(saved.vehicle_service, None);
    }

    #[tokio::test]
    async fn test_reset_then_apply_saves_empty_criteria() {
        let (mut screen, store) = screen();
        screen.toggle_rating(3.0);
        screen.set_fee_min("10");
        screen.reset();
        screen.apply().await.unwrap();
        assert!(records::load_filters(&store).await.unwrap().is_empty());
    }
}
