//! Tree helpers shared by the container and the rebalancing engine.
//!
//! - [`walk`] - the in-order traversal primitive with parent reporting
//! - [`splice`] - successor-copy removal on an owning slot
//! - this module - leftmost / rightmost descent, subtree size, level count
//!   and iterative teardown
//!
//! Nothing here recurses on tree depth: an unbalanced tree can degrade to a
//! chain as long as the element count.

pub mod splice;
pub mod walk;

use std::collections::VecDeque;

use crate::types::{Link, Node};

pub use splice::splice;
pub use walk::{find_route, slot_by_route, walk_in_order, Walk};

/// Leftmost node under `root`.
pub fn first<T>(root: Option<&Node<T>>) -> Option<&Node<T>> {
    let mut curr = root?;
    while let Some(l) = curr.left.as_deref() {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node under `root`.
pub fn last<T>(root: Option<&Node<T>>) -> Option<&Node<T>> {
    let mut curr = root?;
    while let Some(r) = curr.right.as_deref() {
        curr = r;
    }
    Some(curr)
}

/// Number of nodes under `root`.
pub fn size<T>(root: Option<&Node<T>>) -> usize {
    let mut stack: Vec<&Node<T>> = root.into_iter().collect();
    let mut count = 0;
    while let Some(node) = stack.pop() {
        count += 1;
        stack.extend(node.left.as_deref());
        stack.extend(node.right.as_deref());
    }
    count
}

/// Number of nodes on the longest root-to-leaf path. `0` for an empty tree.
///
/// Recomputed from scratch by a level-order sweep on every call.
pub fn level_count<T>(root: Option<&Node<T>>) -> usize {
    let mut level: VecDeque<&Node<T>> = root.into_iter().collect();
    let mut levels = 0;
    while !level.is_empty() {
        levels += 1;
        for _ in 0..level.len() {
            let Some(node) = level.pop_front() else {
                break;
            };
            level.extend(node.left.as_deref());
            level.extend(node.right.as_deref());
        }
    }
    levels
}

/// Checks the ordering rule on every parent/child edge, that an in-order scan
/// never goes backwards and that exactly `len` nodes are reachable.
///
/// Edges are checked in the weak form (left <= parent <= right): insertion
/// sends ties right, but rebalancing rotations may lift a tie above its
/// left neighbour.
pub fn assert_ordered<T, C>(root: Option<&Node<T>>, len: usize, comparator: &C) -> Result<(), String>
where
    C: Fn(&T, &T) -> i32,
{
    let mut prev: Option<&T> = None;
    let mut error: Option<String> = None;
    walk_in_order(root, |parent, node| {
        if let Some(parent) = parent {
            let is_left = parent
                .left
                .as_deref()
                .is_some_and(|l| std::ptr::eq(l, node));
            let cmp = comparator(&node.value, &parent.value);
            if is_left && cmp > 0 {
                error = Some("Left child sorts after its parent".to_string());
            } else if !is_left && cmp < 0 {
                error = Some("Right child sorts before its parent".to_string());
            }
        }
        if let Some(prev) = prev {
            if comparator(prev, &node.value) > 0 {
                error = Some("Node order violated".to_string());
            }
        }
        prev = Some(&node.value);
        error.is_some()
    });
    if let Some(error) = error {
        return Err(error);
    }
    let count = size(root);
    if count != len {
        return Err(format!("Count mismatch: expected {len}, reachable {count}"));
    }
    Ok(())
}

/// Drops a subtree without recursing on its depth.
pub fn drop_link<T>(link: Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = link.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}
