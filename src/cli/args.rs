//! CLI argument structures

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::net::IpAddr;
use std::path::PathBuf;

use crate::core::care_record::CareService;
use crate::domain::ServiceType;

/// Find long-term care facilities, estimate fees and manage reviews
#[derive(Parser)]
#[command(name = "carefinder")]
#[command(about = "carefinder - elder-care facility finder", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a config file (defaults to the platform config directory)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Answer {
    Yes,
    No,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate the monthly fee for a care grade
    Fee {
        /// Care grade (2 or 3; other grades have no fee table entry)
        #[arg(short, long)]
        grade: Option<u8>,

        /// Apply the 20% reduced co-payment
        #[arg(short, long)]
        discount: bool,
    },

    /// Show where the app opens: home for onboarded users, welcome otherwise
    Launch {
        /// Skip the splash delay
        #[arg(long)]
        no_splash: bool,
    },

    /// Answer the onboarding questions and save the result
    Onboard {
        /// Do you already have a care grade?
        #[arg(long, value_enum)]
        has_grade: Answer,

        /// Preferred service type, required with `--has-grade yes`
        #[arg(long = "service")]
        service_type: Option<ServiceType>,

        /// Show the explanation of the service types first
        #[arg(long)]
        explain: bool,
    },

    /// Search the facility catalog
    Search {
        /// Text matched against facility names and addresses
        query: Option<String>,

        /// Switch the service type (saved for next time)
        #[arg(short = 't', long = "type")]
        service_type: Option<ServiceType>,
    },

    /// Show or change the saved search filters
    Filters {
        #[command(subcommand)]
        command: FiltersCommand,
    },

    /// Load the home feed from the API
    Feed {
        /// Text matched against facility names and addresses
        #[arg(short, long)]
        query: Option<String>,

        #[arg(short = 't', long = "type")]
        service_type: Option<ServiceType>,

        #[arg(long)]
        page: Option<u32>,

        #[arg(long)]
        page_size: Option<u32>,

        /// Latitude of the user's location (requires --lng)
        #[arg(long, requires = "lng", allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Longitude of the user's location (requires --lat)
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lng: Option<f64>,
    },

    /// Search the remote facility API; without a query, list facilities
    Find {
        query: Option<String>,

        /// Show the featured list of the home page instead
        #[arg(long, conflicts_with = "query")]
        featured: bool,
    },

    /// Show or edit the care record of the facilities tab
    Record {
        #[command(subcommand)]
        command: RecordCommand,
    },

    /// Show a facility with its reviews
    Facility {
        /// Facility id
        id: String,
    },

    /// Post a review for a facility (requires login)
    Review {
        /// Facility id
        id: String,

        /// Rating from 1 to 5
        #[arg(short, long, default_value = "5")]
        rating: u8,

        /// Review text
        #[arg(short = 'm', long)]
        content: String,
    },

    /// Calculate monthly payments for a facility
    Pay {
        /// Facility id (defaults to the first facility with a price)
        id: Option<String>,

        /// Membership length in months (1 to 24)
        #[arg(short, long, default_value = "1")]
        months: String,
    },

    /// Create an account
    Register {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
        #[arg(long)]
        phone: Option<String>,
    },

    /// Log in and store the access token
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },

    /// Forget the stored access token
    Logout,

    /// Show or update the profile (requires login)
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },

    /// Run the local mock facility API
    #[command(name = "serve-mock")]
    ServeMock {
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,

        #[arg(short, long, default_value = "5000")]
        port: u16,
    },
}

#[derive(Subcommand)]
pub enum FiltersCommand {
    /// Print the saved filters
    Show,

    /// Save new filters; unspecified options stay unset
    Set {
        /// Maximum distance in km (1, 3, 5 or 10)
        #[arg(long)]
        distance: Option<f64>,

        #[arg(short = 't', long = "type")]
        service_type: Option<ServiceType>,

        /// Minimum monthly fee in 만원
        #[arg(long, default_value = "")]
        fee_min: String,

        /// Maximum monthly fee in 만원
        #[arg(long, default_value = "")]
        fee_max: String,

        /// Minimum rating (3, 4 or 4.5)
        #[arg(long)]
        rating: Option<f64>,

        /// Require (yes) or exclude (no) a shuttle service
        #[arg(long, value_enum)]
        vehicle: Option<Answer>,
    },

    /// Save empty filters
    Reset,
}

#[derive(Subcommand)]
pub enum RecordCommand {
    /// Print the saved care record
    Show,

    /// Validate and save the care record; unspecified options keep their saved value
    Set {
        /// Name of the facility in use
        #[arg(short, long)]
        facility: Option<String>,

        /// Registration date (YYYY-MM-DD)
        #[arg(long, conflicts_with = "today")]
        date: Option<NaiveDate>,

        /// Use today's date as the registration date
        #[arg(long)]
        today: bool,

        /// Monthly payment day (1 to 28)
        #[arg(long)]
        payment_day: Option<String>,

        /// Average monthly amount, e.g. 350,000
        #[arg(long)]
        amount: Option<String>,

        /// Services in use, comma separated (day-care, bathing, home-care, shuttle)
        #[arg(long, value_delimiter = ',', value_enum)]
        services: Option<Vec<CareServiceArg>>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CareServiceArg {
    DayCare,
    Bathing,
    HomeCare,
    Shuttle,
}

impl From<CareServiceArg> for CareService {
    fn from(arg: CareServiceArg) -> Self {
        match arg {
            CareServiceArg::DayCare => CareService::DayCare,
            CareServiceArg::Bathing => CareService::Bathing,
            CareServiceArg::HomeCare => CareService::HomeCare,
            CareServiceArg::Shuttle => CareService::Shuttle,
        }
    }
}

#[derive(Subcommand)]
pub enum ProfileCommand {
    Show,

    Update {
        #[arg(short, long)]
        username: Option<String>,
        #[arg(short, long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_search_with_korean_type() {
        let cli = Cli::try_parse_from(["carefinder", "search", "요양원", "--type", "시설급여"]).unwrap();
        match cli.command {
            Commands::Search {
                query,
                service_type,
            } => {
                assert_eq!(query.as_deref(), Some("요양원"));
                assert_eq!(service_type, Some(ServiceType::FacilityBased));
            }
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn test_parse_feed_location_needs_both_coordinates() {
        let cli = Cli::try_parse_from(["carefinder", "feed", "--lat", "37.5", "--lng", "127.0"]).unwrap();
        match cli.command {
            Commands::Feed { lat, lng, .. } => assert_eq!((lat, lng), (Some(37.5), Some(127.0))),
            _ => panic!("expected feed"),
        }
        assert!(Cli::try_parse_from(["carefinder", "feed", "--lat", "37.5"]).is_err());
    }

    #[test]
    fn test_parse_record_services() {
        let cli = Cli::try_parse_from([
            "carefinder",
            "record",
            "set",
            "--date",
            "2024-03-09",
            "--services",
            "bathing,shuttle",
        ])
        .unwrap();
        match cli.command {
            Commands::Record {
                command: RecordCommand::Set { date, services, .. },
            } => {
                assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 9));
                assert_eq!(services, Some(vec![CareServiceArg::Bathing, CareServiceArg::Shuttle]));
            }
            _ => panic!("expected record set"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_type() {
        assert!(Cli::try_parse_from(["carefinder", "search", "--type", "hospital"]).is_err());
    }
}
