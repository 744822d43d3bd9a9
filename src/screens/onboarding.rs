use tracing::info;

use crate::core::consent::ConsentForm;
use crate::core::onboarding::{OnboardingInput, OnboardingStep, OnboardingWizard};
use crate::error::Result;
use crate::navigation::{Navigation, Route};
use crate::storage::{records, SharedStore};

/// Consent wizard shown before onboarding
#[derive(Debug, Default)]
pub struct ConsentScreen {
    form: ConsentForm,
}

impl ConsentScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ConsentForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ConsentForm {
        &mut self.form
    }

    /// Press Next; completing the last step moves on to onboarding
    pub fn next(&mut self) -> Option<Navigation> {
        self.form
            .next()
            .then_some(Navigation::Push(Route::Onboarding))
    }
}

/// Onboarding questions. The answers are persisted once, when the wizard
/// reaches its final step.
pub struct OnboardingScreen {
    store: SharedStore,
    wizard: OnboardingWizard,
}

impl OnboardingScreen {
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            wizard: OnboardingWizard::new(),
        }
    }

    pub fn step(&self) -> OnboardingStep {
        self.wizard.step()
    }

    pub async fn press(&mut self, input: OnboardingInput) -> Result<Option<Navigation>> {
        let Some(outcome) = self.wizard.apply(input) else {
            return Ok(None);
        };

        records::save_onboarding(&*self.store, &outcome).await?;
        info!(
            "Onboarding finished (has_grade: {}, service_type: {:?})",
            outcome.has_grade, outcome.service_type
        );
        Ok(Some(Navigation::Replace(Route::Home)))
    }
}
