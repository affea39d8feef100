//! Ordering functions.
//!
//! A comparator returns a negative number when `a` sorts before `b`, zero
//! when they tie and a positive number otherwise.

/// Comparator used by [`crate::SortedList`].
pub type Comparator<T> = dyn Fn(&T, &T) -> i32;

/// Natural ordering for any `PartialOrd` type. Incomparable pairs tie.
pub fn default_comparator<T: PartialOrd>(a: &T, b: &T) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else if a > b {
        1
    } else {
        0
    }
}

/// Case-insensitive string ordering.
///
/// Compares char by char after Unicode lowercasing, so `"adam"` and `"Adam"`
/// tie and keep their insertion order inside a [`crate::SortedList`].
pub fn case_insensitive<S: AsRef<str>>(a: &S, b: &S) -> i32 {
    let a = a.as_ref().chars().flat_map(char::to_lowercase);
    let b = b.as_ref().chars().flat_map(char::to_lowercase);
    match a.cmp(b) {
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
        std::cmp::Ordering::Greater => 1,
    }
}
