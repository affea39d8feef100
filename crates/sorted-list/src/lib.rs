//! Ordered sequence container on a binary search tree with on-demand AVL
//! rebalancing.
//!
//! [`SortedList`] keeps its values sorted by a comparator fixed at
//! construction. Inserts and removals never rebalance; the tree may drift
//! into any shape, down to a single chain, until the owner calls
//! [`SortedList::rebalance`].
//!
//! ```
//! use sorted_list::{case_insensitive, SortedList};
//!
//! let mut names = SortedList::<&str, _>::with_comparator(case_insensitive);
//! names.insert_all(["Hank", "helga", "Adam", "billy"]);
//! names.rebalance();
//! assert_eq!(names.to_vec(), vec!["Adam", "billy", "Hank", "helga"]);
//! assert_eq!(names.get(1), Some(&"billy"));
//! assert!(names.iter().remove().is_err());
//! ```
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`], [`Link`] owning child slots |
//! [`comparator`] | default and case-insensitive comparators |
//! [`util`] | in-order walk, successor splice, size / level queries |
//! [`avl`] | rotations and the whole-tree rebalance pass |
//! [`sorted_list`] | [`SortedList`] and its [`Iter`] |
//! [`print`] | tree dumps |

pub mod avl;
pub mod comparator;
pub mod error;
pub mod print;
#[path = "SortedList/mod.rs"]
pub mod sorted_list;
pub mod types;
pub mod util;

pub use comparator::{case_insensitive, default_comparator, Comparator};
pub use error::SortedListError;
pub use sorted_list::{Iter, SortedList};
pub use types::{Link, Node, Side};
