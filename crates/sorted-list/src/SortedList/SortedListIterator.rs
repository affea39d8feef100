use std::iter::FusedIterator;

use crate::error::SortedListError;
use crate::types::Node;

/// Forward-only in-order cursor over a [`super::SortedList`].
///
/// Holds the ancestors still waiting to be yielded: seeded with the leftmost
/// path from the root, refilled with the leftmost path of each yielded
/// node's right child. A spent iterator stays spent; call
/// [`super::SortedList::iter`] again to rescan.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left(root);
        iter
    }

    fn push_left(&mut self, mut curr: Option<&'a Node<T>>) {
        while let Some(node) = curr {
            self.stack.push(node);
            curr = node.left.as_deref();
        }
    }

    /// Structural edits are never allowed through an iterator, whatever the
    /// iterator's position and whether or not the list changed.
    pub fn remove(&mut self) -> Result<(), SortedListError> {
        Err(SortedListError::UnsupportedMutation)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
