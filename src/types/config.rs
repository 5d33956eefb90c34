//! Index configuration.

use serde::{Deserialize, Serialize};

use super::{ActivityError, ActivityResult, DEFAULT_LOG_CAPACITY};

/// Tunables for an activity index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Number of labels each user's activity log retains.
    pub log_capacity: usize,
}

impl IndexConfig {
    /// Check that the configuration can back an index.
    pub fn validate(&self) -> ActivityResult<()> {
        if self.log_capacity == 0 {
            return Err(ActivityError::InvalidCapacity(self.log_capacity));
        }
        Ok(())
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            log_capacity: DEFAULT_LOG_CAPACITY,
        }
    }
}
