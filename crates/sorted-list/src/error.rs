use thiserror::Error;

/// Errors raised by [`crate::SortedList`] and its iterator.
///
/// Everything else fails softly: removing a missing value returns `false`,
/// reading past the end returns `None`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SortedListError {
    #[error("INDEX_OUT_OF_BOUNDS: index {index}, len {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("UNSUPPORTED_MUTATION: cannot remove through an iterator")]
    UnsupportedMutation,
}
