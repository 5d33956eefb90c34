//! AVL tree of user entries ordered by identifier hash.

use std::cmp::Ordering;

use crate::types::{hash_key, HashKey, DEFAULT_LOG_CAPACITY};

use super::entry::height_of;
use super::{Entry, InOrder};

/// What an insertion did to the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new entry was created.
    Inserted,
    /// The identifier was already indexed.
    AlreadyPresent,
    /// A different identifier already holds this hash key. The existing
    /// entry wins and nothing was changed.
    Collided {
        /// Identifier of the entry that owns the slot.
        existing: String,
    },
}

/// Self-balancing binary search tree keyed by [`hash_key`].
///
/// Entries are never removed. Identifiers with equal hash keys share one
/// slot, and the first one inserted keeps it.
#[derive(Debug)]
pub struct BalancedIndex {
    root: Option<Box<Entry>>,
    len: usize,
    log_capacity: usize,
}

impl BalancedIndex {
    /// Create an empty index whose entries keep the default number of activities.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_LOG_CAPACITY)
    }

    /// Create an empty index whose entries keep `log_capacity` activities.
    ///
    /// A capacity of zero is raised to one, matching [`BoundedActivityLog::new`].
    /// Use [`IndexConfig::validate`] to reject it instead.
    ///
    /// [`BoundedActivityLog::new`]: crate::index::BoundedActivityLog::new
    /// [`IndexConfig::validate`]: crate::types::IndexConfig::validate
    pub fn with_capacity(log_capacity: usize) -> Self {
        Self {
            root: None,
            len: 0,
            log_capacity: log_capacity.max(1),
        }
    }

    /// Insert an identifier, creating an entry unless its hash key is taken.
    pub fn insert(&mut self, identifier: &str) -> InsertOutcome {
        let hash = hash_key(identifier);
        let (root, outcome) = insert_node(self.root.take(), identifier, hash, self.log_capacity);
        self.root = Some(root);

        match &outcome {
            InsertOutcome::Inserted => {
                self.len += 1;
                log::debug!("Indexed '{}' under hash {}", identifier, hash);
            }
            InsertOutcome::Collided { existing } => {
                log::debug!(
                    "Dropped '{}': hash {} already held by '{}'",
                    identifier,
                    hash,
                    existing
                );
            }
            InsertOutcome::AlreadyPresent => {}
        }

        outcome
    }

    /// Find the entry whose hash key equals the identifier's.
    ///
    /// After a dropped collision the returned entry may carry a different
    /// identifier than the one asked for.
    pub fn find(&self, identifier: &str) -> Option<&Entry> {
        let hash = hash_key(identifier);
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match hash.cmp(&node.hash()) {
                Ordering::Equal => return Some(node),
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Mutable counterpart of [`find`](Self::find).
    pub fn find_mut(&mut self, identifier: &str) -> Option<&mut Entry> {
        let hash = hash_key(identifier);
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            current = match hash.cmp(&node.hash()) {
                Ordering::Equal => return Some(node),
                Ordering::Less => node.left.as_deref_mut(),
                Ordering::Greater => node.right.as_deref_mut(),
            };
        }
        None
    }

    /// Whether some entry holds the identifier's hash key.
    pub fn contains(&self, identifier: &str) -> bool {
        self.find(identifier).is_some()
    }

    /// Entries in ascending hash key order.
    pub fn iter(&self) -> InOrder<'_> {
        InOrder::new(self.root.as_deref())
    }

    /// The root entry, if any.
    pub fn root(&self) -> Option<&Entry> {
        self.root.as_deref()
    }

    /// Height of the tree; 0 when empty.
    pub fn height(&self) -> u32 {
        height_of(&self.root)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the index has no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Activity log capacity given to new entries.
    pub fn log_capacity(&self) -> usize {
        self.log_capacity
    }
}

impl Default for BalancedIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a BalancedIndex {
    type Item = &'a Entry;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn insert_node(
    node: Option<Box<Entry>>,
    identifier: &str,
    hash: HashKey,
    log_capacity: usize,
) -> (Box<Entry>, InsertOutcome) {
    let mut node = match node {
        Some(node) => node,
        None => {
            return (
                Box::new(Entry::new(identifier, log_capacity)),
                InsertOutcome::Inserted,
            )
        }
    };

    let outcome = match hash.cmp(&node.hash()) {
        Ordering::Less => {
            let (left, outcome) = insert_node(node.left.take(), identifier, hash, log_capacity);
            node.left = Some(left);
            outcome
        }
        Ordering::Greater => {
            let (right, outcome) = insert_node(node.right.take(), identifier, hash, log_capacity);
            node.right = Some(right);
            outcome
        }
        Ordering::Equal => {
            let outcome = if node.identifier() == identifier {
                InsertOutcome::AlreadyPresent
            } else {
                InsertOutcome::Collided {
                    existing: node.identifier().to_string(),
                }
            };
            return (node, outcome);
        }
    };

    node.update_height();
    (rebalance(node, hash), outcome)
}

/// Restore the AVL bound at `node` after inserting `hash` below it.
///
/// The rotation case is picked by comparing the inserted key with the key of
/// the heavy side's child.
fn rebalance(mut node: Box<Entry>, hash: HashKey) -> Box<Entry> {
    let balance = node.balance_factor();

    if balance > 1 {
        if let Some(left_hash) = node.left().map(Entry::hash) {
            if hash < left_hash {
                log::debug!("Left-left imbalance at hash {}", node.hash());
                return rotate_right(node);
            }
            if hash > left_hash {
                log::debug!("Left-right imbalance at hash {}", node.hash());
                node.left = node.left.take().map(rotate_left);
                return rotate_right(node);
            }
        }
    } else if balance < -1 {
        if let Some(right_hash) = node.right().map(Entry::hash) {
            if hash > right_hash {
                log::debug!("Right-right imbalance at hash {}", node.hash());
                return rotate_left(node);
            }
            if hash < right_hash {
                log::debug!("Right-left imbalance at hash {}", node.hash());
                node.right = node.right.take().map(rotate_right);
                return rotate_left(node);
            }
        }
    }

    node
}

fn rotate_right(mut node: Box<Entry>) -> Box<Entry> {
    let mut pivot = match node.left.take() {
        Some(pivot) => pivot,
        None => return node,
    };
    node.left = pivot.right.take();
    node.update_height();
    pivot.right = Some(node);
    pivot.update_height();
    pivot
}

fn rotate_left(mut node: Box<Entry>) -> Box<Entry> {
    let mut pivot = match node.right.take() {
        Some(pivot) => pivot,
        None => return node,
    };
    node.right = pivot.left.take();
    node.update_height();
    pivot.left = Some(node);
    pivot.update_height();
    pivot
}
