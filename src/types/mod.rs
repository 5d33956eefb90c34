//! All data types for the activity index.

pub mod activity;
pub mod config;
pub mod error;
pub mod hash;

pub use activity::{ActivityCounts, ActivityKind};
pub use config::IndexConfig;
pub use error::{ActivityError, ActivityResult};
pub use hash::{hash_key, HashKey, HASH_MULTIPLIER};

/// Number of labels a user's activity log keeps by default.
pub const DEFAULT_LOG_CAPACITY: usize = 5;
