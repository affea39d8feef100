//! The sorted list container and its iterator.

#[path = "SortedList.rs"]
#[allow(clippy::module_inception)]
pub mod sorted_list;
#[path = "SortedListIterator.rs"]
pub mod sorted_list_iterator;

pub use sorted_list::SortedList;
pub use sorted_list_iterator::Iter;
