//! Bounded activity log — the most recent labels recorded for one user.

use std::collections::VecDeque;
use std::fmt;

/// Fixed-capacity FIFO of activity labels, oldest first.
///
/// Pushing onto a full log evicts the oldest label, so the log always holds
/// the latest `capacity` pushes.
#[derive(Debug, Clone)]
pub struct BoundedActivityLog {
    entries: VecDeque<String>,
    capacity: usize,
}

impl BoundedActivityLog {
    /// Create an empty log. A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a label, evicting the oldest one first when full.
    pub fn push(&mut self, label: impl Into<String>) {
        if self.entries.len() >= self.capacity {
            if let Some(evicted) = self.entries.pop_front() {
                log::trace!("Evicted activity '{}' from full log", evicted);
            }
        }
        self.entries.push_back(label.into());
    }

    /// Remove the oldest label. Returns None when the log is empty.
    pub fn pop_oldest(&mut self) -> Option<String> {
        self.entries.pop_front()
    }

    /// The newest label, if any.
    pub fn most_recent(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    /// Labels from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(String::as_str)
    }

    /// Number of labels held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log holds no labels.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of labels retained.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Render the labels oldest first, separated by ", ".
    pub fn to_display_form(&self) -> String {
        self.to_string()
    }

    /// Label seen most often, ties going to the label that reached the
    /// winning count first.
    ///
    /// For every position the label there is counted from that position to
    /// the end, and only a strictly greater count replaces the leader.
    pub fn most_frequent(&self) -> Option<&str> {
        let mut best: Option<&str> = None;
        let mut best_count = 0usize;

        for (pos, label) in self.entries.iter().enumerate() {
            let count = self
                .entries
                .iter()
                .skip(pos)
                .filter(|other| *other == label)
                .count();
            if count > best_count {
                best = Some(label.as_str());
                best_count = count;
            }
        }

        best
    }
}

impl fmt::Display for BoundedActivityLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(label)?;
        }
        Ok(())
    }
}
