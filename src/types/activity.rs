//! Activity categories and per-user counters.

use serde::Serialize;

/// A counted activity category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    /// The user liked something.
    Like,
    /// The user commented on something.
    Comment,
    /// The user shared something.
    Share,
    /// The user published a post.
    Post,
}

impl ActivityKind {
    /// Every counted category, in counter order.
    pub const ALL: [ActivityKind; 4] = [Self::Like, Self::Comment, Self::Share, Self::Post];

    /// Return the canonical label for this category.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Like => "Like",
            Self::Comment => "Comment",
            Self::Share => "Share",
            Self::Post => "Post",
        }
    }

    /// Match an activity label against the canonical category names.
    /// Matching is exact, so "like" or "LIKE" is recorded but never counted.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Like" => Some(Self::Like),
            "Comment" => Some(Self::Comment),
            "Share" => Some(Self::Share),
            "Post" => Some(Self::Post),
            _ => None,
        }
    }
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Running totals for one user. Counters only ever grow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ActivityCounts {
    pub likes: u32,
    pub comments: u32,
    pub shares: u32,
    pub posts: u32,
}

impl ActivityCounts {
    /// Bump the counter for `kind`.
    pub fn increment(&mut self, kind: ActivityKind) {
        let counter = match kind {
            ActivityKind::Like => &mut self.likes,
            ActivityKind::Comment => &mut self.comments,
            ActivityKind::Share => &mut self.shares,
            ActivityKind::Post => &mut self.posts,
        };
        *counter = counter.saturating_add(1);
    }

    /// Counter value for `kind`.
    pub fn get(&self, kind: ActivityKind) -> u32 {
        match kind {
            ActivityKind::Like => self.likes,
            ActivityKind::Comment => self.comments,
            ActivityKind::Share => self.shares,
            ActivityKind::Post => self.posts,
        }
    }

    /// Sum of all four counters.
    pub fn total(&self) -> u64 {
        ActivityKind::ALL
            .iter()
            .map(|&kind| u64::from(self.get(kind)))
            .sum()
    }
}
