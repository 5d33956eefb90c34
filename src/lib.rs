//! Activity index — per-user activity history in a hash-ordered AVL tree.
//!
//! Users are indexed by a 31-multiplier string hash of their identifier. Each
//! entry keeps a bounded log of recent activity labels and four counters
//! (likes, comments, shares, posts). Entries are listed in hash key order,
//! never alphabetically, and identifiers whose hashes collide share one entry
//! owned by whichever was inserted first.

pub mod cli;
pub mod engine;
pub mod index;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{ActivityManager, UserSummary, UserTotal};
pub use index::{BalancedIndex, BoundedActivityLog, Entry, InOrder, InsertOutcome};
pub use types::{
    hash_key, ActivityCounts, ActivityError, ActivityKind, ActivityResult, HashKey, IndexConfig,
    DEFAULT_LOG_CAPACITY,
};
