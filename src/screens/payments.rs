use std::sync::Arc;
use tracing::{debug, warn};

use crate::api::ApiClient;
use crate::core::validation::{
    clamp_months, validate_months, MAX_MEMBERSHIP_MONTHS, MSG_FACILITY_REQUIRED,
};
use crate::domain::{FacilityDetail, PaymentCalculation, PaymentRequest};
use crate::error::{Error, Result};

/// Facilities offered in the picker
pub const OPTIONS_PER_PAGE: u32 = 50;

/// Monthly co-payment calculator
pub struct PaymentCalculatorScreen {
    api: Arc<ApiClient>,
    options: Vec<FacilityDetail>,
    selected: Option<String>,
    months: u32,
    result: Option<PaymentCalculation>,
}

impl PaymentCalculatorScreen {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            options: Vec::new(),
            selected: None,
            months: 1,
            result: None,
        }
    }

    pub fn options(&self) -> &[FacilityDetail] {
        &self.options
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn months(&self) -> u32 {
        self.months
    }

    pub fn result(&self) -> Option<&PaymentCalculation> {
        self.result.as_ref()
    }

    /// Load the priced facilities and preselect the first one
    pub async fn load(&mut self) -> Result<()> {
        let all = self.api.list_facilities(OPTIONS_PER_PAGE).await?;
        let total = all.len();
        self.options = all.into_iter().filter(FacilityDetail::has_price).collect();
        debug!("{} of {} facilities have a price", self.options.len(), total);
        self.selected = self.options.first().map(|f| f.facility_id.clone());
        Ok(())
    }

    pub fn select(&mut self, facility_id: impl Into<String>) {
        self.selected = Some(facility_id.into());
    }

    /// Text input for the months field, clamped to the allowed range
    pub fn set_months_text(&mut self, text: &str) {
        self.months = clamp_months(text);
    }

    /// Set months directly; `calculate` rejects 0 and caps long memberships
    pub fn set_months(&mut self, months: u32) {
        self.months = months;
    }

    pub async fn calculate(&mut self) -> Result<&PaymentCalculation> {
        let facility_id = self
            .selected
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| Error::Validation(MSG_FACILITY_REQUIRED.to_string()))?;
        let facility_id: u64 = facility_id
            .parse()
            .map_err(|_| Error::Validation(MSG_FACILITY_REQUIRED.to_string()))?;

        let check = validate_months(i64::from(self.months));
        for warning in &check.warnings {
            warn!("{}", warning);
        }
        check.into_result()?;
        self.months = self.months.min(MAX_MEMBERSHIP_MONTHS);

        let request = PaymentRequest {
            facility_id,
            membership_months: self.months,
        };
        self.result = None;
        let calculation = self.api.calculate_payments(&request).await?;
        Ok(self.result.insert(calculation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::MSG_MONTHS_MIN;
    use crate::storage::MemoryStore;
    use std::time::Duration;

    fn offline_screen() -> PaymentCalculatorScreen {
        let api = ApiClient::new("http://127.0.0.1:9/api", Duration::from_millis(50), Arc::new(MemoryStore::new()));
        PaymentCalculatorScreen::new(Arc::new(api.unwrap()))
    }

    #[tokio::test]
    async fn test_facility_is_required() {
        let mut screen = offline_screen();
        let err = screen.calculate().await.unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains(MSG_FACILITY_REQUIRED));
    }

    #[tokio::test]
    async fn test_months_must_be_positive() {
        let mut screen = offline_screen();
        screen.select("3");
        screen.set_months(0);
        let err = screen.calculate().await.unwrap_err();
        assert!(err.to_string().contains(MSG_MONTHS_MIN));
        assert!(screen.result().is_none());
    }

    #[test]
    fn test_months_text_is_clamped() {
        let mut screen = offline_screen();
        screen.set_months_text("36");
        assert_eq!(screen.months(), 24);
        screen.set_months_text("");
        assert_eq!(screen.months(), 1);
    }
}
