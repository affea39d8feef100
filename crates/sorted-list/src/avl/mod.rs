//! AVL restoration for trees that are not kept balanced between calls.

pub mod util;

pub use util::{assert_avl_tree, check_balance, rebalance};
