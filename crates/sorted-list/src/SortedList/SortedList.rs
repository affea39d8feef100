use std::fmt;

use tracing::{debug, trace};

use super::sorted_list_iterator::Iter;
use crate::avl;
use crate::comparator::default_comparator;
use crate::error::SortedListError;
use crate::print::print_tree;
use crate::types::{Link, Node};
use crate::util::{self, find_route, slot_by_route, splice, walk_in_order};

/// Ordered sequence backed by a plain binary search tree.
///
/// Inserts go straight to a leaf and removals splice in place; neither keeps
/// the tree balanced. [`SortedList::rebalance`] restores the AVL shape on
/// demand. Values that tie under the comparator keep their insertion order.
///
/// Positional operations (`get`, `remove_at`, `slice`, ...) walk the tree in
/// order and cost O(n). Value lookups use `PartialEq`; the comparator only
/// decides placement.
pub struct SortedList<T, C = fn(&T, &T) -> i32>
where
    C: Fn(&T, &T) -> i32,
{
    root: Link<T>,
    len: usize,
    comparator: C,
}

impl<T> SortedList<T, fn(&T, &T) -> i32>
where
    T: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<T>)
    }
}

impl<T> Default for SortedList<T, fn(&T, &T) -> i32>
where
    T: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> SortedList<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            len: 0,
            comparator,
        }
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // ----------------------------------------------------------------- Insert

    /// Links `value` as a new leaf. Walks left while the current node sorts
    /// after `value`, right otherwise, so ties land after existing equals.
    pub fn insert(&mut self, value: T) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if (self.comparator)(&node.value, &value) > 0 {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Box::new(Node::new(value)));
        self.len += 1;
    }

    /// Inserts every value in iteration order. Returns `true` if anything was
    /// inserted.
    pub fn insert_all<I>(&mut self, values: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        let before = self.len;
        for value in values {
            self.insert(value);
        }
        self.len != before
    }

    // ----------------------------------------------------------------- Remove

    /// Unlinks the first node, in order, matching `pred` and returns its
    /// position and value.
    fn take_first<F>(&mut self, pred: F) -> Option<(usize, T)>
    where
        F: FnMut(usize, &T) -> bool,
    {
        let (index, route) = find_route(self.root.as_deref(), pred)?;
        let slot = slot_by_route(&mut self.root, &route)?;
        let value = splice(slot)?;
        self.len -= 1;
        Some((index, value))
    }

    /// Removes the first occurrence of `value`. Returns `false` when absent.
    pub fn remove_first(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.take_first(|_, v| v == value).is_some()
    }

    /// Removes every occurrence of `value`.
    pub fn remove_all(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut changed = false;
        while self.remove_first(value) {
            changed = true;
        }
        changed
    }

    /// Removes every occurrence of every value in `values`.
    pub fn remove_all_of(&mut self, values: &[T]) -> bool
    where
        T: PartialEq,
    {
        self.retain(|v| !values.contains(v))
    }

    /// Removes and returns the value at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, SortedListError> {
        let len = self.len;
        if index >= len {
            return Err(SortedListError::IndexOutOfBounds { index, len });
        }
        self.take_first(|i, _| i == index)
            .map(|(_, value)| value)
            .ok_or(SortedListError::IndexOutOfBounds { index, len })
    }

    /// Removes the value at `index`, then inserts `value` by the usual rule.
    ///
    /// The new value lands wherever the comparator puts it, which is not
    /// necessarily `index`. Returns the removed value.
    pub fn set_at(&mut self, index: usize, value: T) -> Result<T, SortedListError> {
        let removed = self.remove_at(index)?;
        self.insert(value);
        trace!(index, len = self.len, "set_at re-sorted value");
        Ok(removed)
    }

    /// Keeps only the values for which `keep` returns `true`.
    pub fn retain<F>(&mut self, mut keep: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        let mut start = 0;
        let mut changed = false;
        while let Some((index, _)) = self.take_first(|i, v| i >= start && !keep(v)) {
            start = index;
            changed = true;
        }
        changed
    }

    /// Keeps only values equal to some member of `values`.
    pub fn retain_only(&mut self, values: &[T]) -> bool
    where
        T: PartialEq,
    {
        self.retain(|v| values.contains(v))
    }

    pub fn clear(&mut self) {
        trace!(len = self.len, "clear");
        util::drop_link(self.root.take());
        self.len = 0;
    }

    // ------------------------------------------------------------------ Query

    /// Value at in-order position `index`.
    ///
    /// Never fails: any `index >= len`, including every index on an empty
    /// list, yields `None` instead of an out-of-bounds error.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        let mut found = None;
        let mut i = 0;
        walk_in_order(self.root.as_deref(), |_, node| {
            if i == index {
                found = Some(&node.value);
                return true;
            }
            i += 1;
            false
        });
        found
    }

    /// Position of the first (`from_first`) or last occurrence of `value`.
    pub fn position(&self, value: &T, from_first: bool) -> Option<usize>
    where
        T: PartialEq,
    {
        let mut found = None;
        let mut i = 0;
        walk_in_order(self.root.as_deref(), |_, node| {
            if node.value == *value {
                found = Some(i);
                if from_first {
                    return true;
                }
            }
            i += 1;
            false
        });
        found
    }

    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.position(value, true)
    }

    pub fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.position(value, false)
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.position(value, true).is_some()
    }

    pub fn contains_all(&self, values: &[T]) -> bool
    where
        T: PartialEq,
    {
        values.iter().all(|v| self.contains(v))
    }

    /// Smallest value.
    pub fn first(&self) -> Option<&T> {
        util::first(self.root.as_deref()).map(|n| &n.value)
    }

    /// Largest value; the last inserted among ties.
    pub fn last(&self) -> Option<&T> {
        util::last(self.root.as_deref()).map(|n| &n.value)
    }

    /// Snapshot of positions `start..end`.
    ///
    /// `start > end` yields an empty snapshot; `end > len` is out of bounds.
    pub fn slice(&self, start: usize, end: usize) -> Result<Vec<&T>, SortedListError> {
        if start > end {
            return Ok(Vec::new());
        }
        if end > self.len {
            return Err(SortedListError::IndexOutOfBounds {
                index: end,
                len: self.len,
            });
        }
        let mut out = Vec::with_capacity(end - start);
        let mut i = 0;
        walk_in_order(self.root.as_deref(), |_, node| {
            if i >= end {
                return true;
            }
            if i >= start {
                out.push(&node.value);
            }
            i += 1;
            false
        });
        Ok(out)
    }

    /// All values in order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.len);
        walk_in_order(self.root.as_deref(), |_, node| {
            out.push(node.value.clone());
            false
        });
        out
    }

    /// Copies the values into `out`, growing it to `len` if it is shorter.
    /// Every slot past the last value is reset to `None`.
    pub fn to_array_into(&self, mut out: Vec<Option<T>>) -> Vec<Option<T>>
    where
        T: Clone,
    {
        if out.len() < self.len {
            out.resize_with(self.len, || None);
        }
        let mut i = 0;
        walk_in_order(self.root.as_deref(), |_, node| {
            out[i] = Some(node.value.clone());
            i += 1;
            false
        });
        for slot in &mut out[self.len..] {
            *slot = None;
        }
        out
    }

    // --------------------------------------------------------------- Traverse

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// Visits values in order until `visit` returns `true`. Returns whether
    /// the walk was stopped early.
    pub fn for_each_in_order<F>(&self, mut visit: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        walk_in_order(self.root.as_deref(), |_, node| visit(&node.value))
    }

    // ------------------------------------------------------------- Structure

    /// Edges on the longest root-to-leaf path; `-1` when empty.
    pub fn height(&self) -> i32 {
        self.level_count() as i32 - 1
    }

    /// Nodes on the longest root-to-leaf path; `0` when empty.
    pub fn level_count(&self) -> usize {
        util::level_count(self.root.as_deref())
    }

    /// Restores the AVL property at every node. Nothing keeps it afterwards:
    /// the next insert or removal may break it again.
    pub fn rebalance(&mut self) {
        let levels_before = self.level_count();
        let (root, rotations) = avl::rebalance(self.root.take());
        self.root = root;
        debug!(
            len = self.len,
            levels_before,
            levels_after = self.root.as_ref().map_or(0, |n| n.height),
            rotations,
            "rebalanced"
        );
    }

    /// Whether every node's subtree heights differ by at most one.
    pub fn is_balanced(&self) -> bool {
        avl::check_balance(self.root.as_deref()).is_ok()
    }

    /// Checks ordering and the element count against the tree.
    pub fn assert_valid(&self) -> Result<(), String> {
        util::assert_ordered(self.root.as_deref(), self.len, &self.comparator)
    }

    /// Checks ordering, element count and AVL balance.
    pub fn assert_avl(&self) -> Result<(), String> {
        avl::assert_avl_tree(self.root.as_deref(), self.len, &self.comparator)
    }

    /// Indented dump of the tree shape.
    pub fn to_string_tree(&self, tab: &str) -> String
    where
        T: fmt::Display,
    {
        print_tree("SortedList", self.root.as_deref(), tab)
    }
}

impl<T, C> Drop for SortedList<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    fn drop(&mut self) {
        util::drop_link(self.root.take());
    }
}

impl<T, C> Extend<T> for SortedList<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<'a, T, C> IntoIterator for &'a SortedList<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C> fmt::Debug for SortedList<T, C>
where
    T: fmt::Debug,
    C: Fn(&T, &T) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
