//! Key-value storage layer
//!
//! The app persists a handful of small string values: onboarding answers,
//! the last chosen service type, the filter criteria and the bearer token.
//! Every consumer receives a [`SharedStore`]; tests use [`MemoryStore`] and
//! the CLI uses the JSON-file [`FileStore`].

pub mod backends;
pub mod error;
pub mod records;
pub mod traits;


pub use backends::{FileStore, MemoryStore};
pub use error::{StorageError, StorageResult};
pub use traits::{KeyValueStore, SharedStore};
