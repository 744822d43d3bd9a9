//! Domain types shared by the core logic, screens and the API client

pub mod api;
pub mod catalog;
pub mod facility;
pub mod filters;

pub use api::{
    format_won, FacilityDetail, LoginRequest, MonthlyPayment, NewReview, PaymentCalculation,
    PaymentRequest, Profile, RegisterRequest, Review, ReviewAuthor,
};
pub use catalog::mock_catalog;
pub use facility::{CareGrade, Facility, FacilitySummary, ServiceType};
pub use filters::{FilterCriteria, DISTANCE_CHOICES_KM, RATING_CHOICES};
