//! Read-only queries over the activity manager.

use serde::Serialize;

use crate::index::Entry;
use crate::types::{ActivityCounts, ActivityResult, HashKey};

use super::ActivityManager;

/// One user's state as listed by [`ActivityManager::list_all_users`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub identifier: String,
    pub hash: HashKey,
    /// Logged labels, oldest first.
    pub activities: Vec<String>,
    pub counts: ActivityCounts,
}

impl From<&Entry> for UserSummary {
    fn from(entry: &Entry) -> Self {
        Self {
            identifier: entry.identifier().to_string(),
            hash: entry.hash(),
            activities: entry.activities().iter().map(str::to_string).collect(),
            counts: entry.counts(),
        }
    }
}

/// The user with the largest counter total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserTotal {
    pub identifier: String,
    pub total: u64,
}

impl ActivityManager {
    /// Counters for one user.
    pub fn activity_counts(&self, identifier: &str) -> ActivityResult<ActivityCounts> {
        Ok(self.entry(identifier)?.counts())
    }

    /// Logged labels for one user, oldest first.
    pub fn list_activities(&self, identifier: &str) -> ActivityResult<Vec<String>> {
        let entry = self.entry(identifier)?;
        Ok(entry.activities().iter().map(str::to_string).collect())
    }

    /// The user's newest logged label, or None if the log is empty.
    pub fn most_recent_activity(&self, identifier: &str) -> ActivityResult<Option<String>> {
        let entry = self.entry(identifier)?;
        Ok(entry.activities().most_recent().map(str::to_string))
    }

    /// The label occurring most often in the user's log.
    ///
    /// Ties go to the label that appears first. None if the log is empty.
    pub fn most_frequent_activity(&self, identifier: &str) -> ActivityResult<Option<String>> {
        let entry = self.entry(identifier)?;
        Ok(entry.activities().most_frequent().map(str::to_string))
    }

    /// The user whose four counters sum highest.
    ///
    /// Users are visited in hash key order and only a strictly larger total
    /// takes the lead, so ties go to the smaller hash key. None when no user
    /// has a counted activity.
    pub fn highest_total_activity_user(&self) -> Option<UserTotal> {
        let mut best: Option<UserTotal> = None;
        let mut best_total = 0u64;

        for entry in self.index.iter() {
            let total = entry.counts().total();
            if total > best_total {
                best_total = total;
                best = Some(UserTotal {
                    identifier: entry.identifier().to_string(),
                    total,
                });
            }
        }

        best
    }

    /// Every user in hash key order (not alphabetical).
    pub fn list_all_users(&self) -> Vec<UserSummary> {
        self.index.iter().map(UserSummary::from).collect()
    }
}
