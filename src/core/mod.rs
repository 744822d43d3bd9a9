//! Core business logic module with pure functions
//!
//! This module contains the app's domain logic without any I/O operations.
//! Following the "functional core, imperative shell" pattern, all functions here:
//! - Take inputs and return outputs
//! - Have no side effects
//! - Don't touch storage, the network or timers
//! - Are easily testable without mocks
//!
//! The screen controllers in [`crate::screens`] wire these functions to the
//! key-value store and the API client.

pub mod care_record;
pub mod consent;
pub mod fee;
pub mod filter;
pub mod onboarding;
pub mod validation;

pub use fee::{compute_monthly_fee, FeeCalculator, MonthlyFee};
pub use filter::filter_facilities;
pub use onboarding::{OnboardingInput, OnboardingOutcome, OnboardingStep, OnboardingWizard};
