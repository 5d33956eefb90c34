//! Activity manager — the user-facing facade over the balanced index.

use crate::index::{BalancedIndex, Entry, InsertOutcome};
use crate::types::{ActivityError, ActivityKind, ActivityResult, IndexConfig};

/// Registers users and records their activities.
///
/// Every operation that names a user fails with
/// [`ActivityError::UserNotFound`] when no entry holds that user's hash key.
/// Users can never be removed.
#[derive(Debug, Default)]
pub struct ActivityManager {
    pub(crate) index: BalancedIndex,
}

impl ActivityManager {
    /// Create a manager with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager from a validated configuration.
    pub fn with_config(config: IndexConfig) -> ActivityResult<Self> {
        config.validate()?;
        Ok(Self {
            index: BalancedIndex::with_capacity(config.log_capacity),
        })
    }

    /// Register a user.
    ///
    /// A hash collision with an existing user is not an error: the existing
    /// entry is kept and the returned outcome says so. Callers that want
    /// distinct names must check [`has_user`](Self::has_user) first.
    pub fn add_user(&mut self, identifier: &str) -> InsertOutcome {
        self.index.insert(identifier)
    }

    /// Whether the user is indexed.
    pub fn has_user(&self, identifier: &str) -> bool {
        self.index.contains(identifier)
    }

    /// Record an activity label for a user.
    ///
    /// Every label is logged; only like, comment, share and post bump a
    /// counter. Returns the counted category, if any.
    pub fn add_activity(
        &mut self,
        identifier: &str,
        label: &str,
    ) -> ActivityResult<Option<ActivityKind>> {
        let entry = self.entry_mut(identifier)?;
        Ok(entry.record_activity(label))
    }

    /// Remove the user's oldest logged activity and return it.
    ///
    /// This never picks a specific activity and never lowers a counter.
    pub fn remove_activity(&mut self, identifier: &str) -> ActivityResult<Option<String>> {
        let entry = self.entry_mut(identifier)?;
        Ok(entry.pop_oldest_activity())
    }

    /// The underlying index.
    pub fn index(&self) -> &BalancedIndex {
        &self.index
    }

    /// Number of registered users.
    pub fn user_count(&self) -> usize {
        self.index.len()
    }

    pub(crate) fn entry(&self, identifier: &str) -> ActivityResult<&Entry> {
        self.index
            .find(identifier)
            .ok_or_else(|| ActivityError::UserNotFound(identifier.to_string()))
    }

    fn entry_mut(&mut self, identifier: &str) -> ActivityResult<&mut Entry> {
        self.index
            .find_mut(identifier)
            .ok_or_else(|| ActivityError::UserNotFound(identifier.to_string()))
    }
}
