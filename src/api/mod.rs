//! HTTP client for the remote facility API
//!
//! Every request goes through [`ApiClient`], which attaches the stored bearer
//! token, unwraps `{data: ...}` envelopes and turns non-2xx responses into
//! [`crate::error::Error`] values. There is no retry, backoff or request
//! deduplication; callers decide whether to retry.

pub mod client;
pub mod response;

pub use client::{ApiClient, FacilityFeedSource, FacilityPage, FacilityQuery};
