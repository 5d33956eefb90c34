//! High-level operations — the activity manager and its queries.

pub mod manager;
pub mod query;

pub use manager::ActivityManager;
pub use query::{UserSummary, UserTotal};
