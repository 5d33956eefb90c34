//! Index structures: the hash-ordered AVL tree and the per-user activity log it owns.

pub mod activity_log;
pub mod balanced_index;
pub mod entry;
pub mod traversal;

pub use activity_log::BoundedActivityLog;
pub use balanced_index::{BalancedIndex, InsertOutcome};
pub use entry::Entry;
pub use traversal::InOrder;
