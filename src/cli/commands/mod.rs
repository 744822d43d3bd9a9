//! Command implementation modules

pub mod account;
pub mod facilities;
pub mod fee;
pub mod mock;
pub mod onboarding;
pub mod record;
pub mod search;

pub use account::{run_login_command, run_logout_command, run_profile_command, run_register_command};
pub use facilities::{
    run_facility_command, run_feed_command, run_find_command, run_pay_command, run_review_command,
};
pub use fee::run_fee_command;
pub use mock::run_serve_mock_command;
pub use onboarding::{run_launch_command, run_onboard_command};
pub use record::run_record_command;
pub use search::{run_filters_command, run_search_command};
