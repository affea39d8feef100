//! Node and link definitions.
//!
//! Every node exclusively owns its two child slots, so the whole tree hangs
//! off a single [`Link`] held by the container. There are no parent links:
//! code that needs a parent either carries it on an explicit stack (see
//! [`crate::util::walk_in_order`]) or works on the owning slot directly.

/// An owning child slot. `None` is an empty subtree.
pub type Link<T> = Option<Box<Node<T>>>;

/// Which child slot a route step takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// A single tree node.
///
/// Dropping a node drops its subtree recursively. Long chains should be torn
/// down with [`crate::util::drop_link`].
pub struct Node<T> {
    pub value: T,
    pub left: Link<T>,
    pub right: Link<T>,
    /// Number of levels in this subtree as of the last rebalance.
    ///
    /// Only the rebalancing engine reads it, and it refreshes every node
    /// bottom-up before doing so. Inserts and removals leave it stale.
    pub(crate) height: u32,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            height: 1,
        }
    }
}
