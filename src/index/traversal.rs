//! In-order traversal of the balanced index.

use super::Entry;

/// Lazy in-order walk over the index, yielding entries by ascending hash key.
///
/// The order follows hash keys, not identifiers, so it is not alphabetical.
pub struct InOrder<'a> {
    stack: Vec<&'a Entry>,
}

impl<'a> InOrder<'a> {
    pub(crate) fn new(root: Option<&'a Entry>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Entry>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node)
    }
}
