//! # CareFinder
//!
//! Client core for finding long-term elder-care facilities: the fee
//! calculator, catalog search, onboarding, saved filters and a client for
//! the remote facility API.
//!
//! ## Usage
//!
//! ```bash
//! carefinder fee --grade 3 --discount
//! carefinder search 요양원 --type 시설급여
//! carefinder serve-mock --port 5000
//! ```
//!
//! ## Modules
//!
//! - `core` - Pure domain logic: fees, filtering, onboarding and consent wizards, validation
//! - `domain` - Facilities, service types, filter criteria and API bodies
//! - `storage` - Injected key-value store with memory and JSON-file backends
//! - `api` - HTTP client for the facility API
//! - `screens` - Screen controllers wiring the core to storage, the API and timers
//! - `navigation` - Routes and navigation requests
//! - `timer` - Cancellable timers and the search debouncer
//! - `mock_server` - Local mock of the facility API
//! - `config` - Layered configuration
//! - `app` / `cli` - Command line shell
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod error;
pub mod mock_server;
pub mod navigation;
pub mod screens;
pub mod storage;
pub mod timer;

pub use error::{Error, Result};
