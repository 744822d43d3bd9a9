//! Screen controllers
//!
//! Each controller owns the state of one screen, talks to the injected store
//! and API client, and answers user actions with an optional
//! [`Navigation`](crate::navigation::Navigation). Rendering is left to the
//! shell.

pub mod care_record;
pub mod directory;
pub mod facility;
pub mod filters;
pub mod grade;
pub mod home;
pub mod launch;
pub mod onboarding;
pub mod payments;
pub mod profile;
pub mod search;

pub use care_record::CareRecordScreen;
pub use directory::FacilityDirectory;
pub use facility::FacilityDetailScreen;
pub use filters::FiltersScreen;
pub use grade::GradeScreen;
pub use home::{FeedState, HomeAction, HomeFeed};
pub use launch::{resolve_launch_route, LaunchScreen};
pub use onboarding::{ConsentScreen, OnboardingScreen};
pub use payments::PaymentCalculatorScreen;
pub use profile::ProfileScreen;
pub use search::{LiveSearch, SearchScreen};
