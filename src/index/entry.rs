//! Tree entry — one user's identifier, activity log, counters and subtree links.

use crate::types::{hash_key, ActivityCounts, ActivityKind, HashKey};

use super::BoundedActivityLog;

/// One indexed user.
///
/// An entry owns its children, so dropping the root releases the whole tree.
#[derive(Debug)]
pub struct Entry {
    identifier: String,
    hash: HashKey,
    activities: BoundedActivityLog,
    counts: ActivityCounts,
    /// 1 + the taller child's height; absent children count as 0.
    pub(crate) height: u32,
    pub(crate) left: Option<Box<Entry>>,
    pub(crate) right: Option<Box<Entry>>,
}

impl Entry {
    pub(crate) fn new(identifier: &str, log_capacity: usize) -> Self {
        Self {
            identifier: identifier.to_string(),
            hash: hash_key(identifier),
            activities: BoundedActivityLog::new(log_capacity),
            counts: ActivityCounts::default(),
            height: 1,
            left: None,
            right: None,
        }
    }

    /// The identifier this entry was created with.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The ordering key of this entry.
    pub fn hash(&self) -> HashKey {
        self.hash
    }

    /// Recent activity labels, oldest first.
    pub fn activities(&self) -> &BoundedActivityLog {
        &self.activities
    }

    /// Running per-category counters.
    pub fn counts(&self) -> ActivityCounts {
        self.counts
    }

    /// Height of the subtree rooted here.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Left subtree: entries with smaller keys.
    pub fn left(&self) -> Option<&Entry> {
        self.left.as_deref()
    }

    /// Right subtree: entries with larger keys.
    pub fn right(&self) -> Option<&Entry> {
        self.right.as_deref()
    }

    /// Height of the left subtree minus height of the right subtree.
    pub fn balance_factor(&self) -> i64 {
        i64::from(height_of(&self.left)) - i64::from(height_of(&self.right))
    }

    /// Log a label and bump its counter if it names a counted category.
    pub fn record_activity(&mut self, label: &str) -> Option<ActivityKind> {
        self.activities.push(label);
        let kind = ActivityKind::from_label(label)?;
        self.counts.increment(kind);
        Some(kind)
    }

    /// Drop the oldest logged label. Counters are left untouched.
    pub fn pop_oldest_activity(&mut self) -> Option<String> {
        self.activities.pop_oldest()
    }

    pub(crate) fn update_height(&mut self) {
        self.height = 1 + height_of(&self.left).max(height_of(&self.right));
    }
}

pub(crate) fn height_of(node: &Option<Box<Entry>>) -> u32 {
    node.as_ref().map_or(0, |n| n.height)
}
