use sorted_list::{SortedList, SortedListError};

#[test]
fn iterates_in_order_matrix() {
    let mut list = SortedList::new();
    list.insert_all([8, 3, 10, 1, 6, 14, 4, 7, 13]);
    let values: Vec<i32> = list.iter().copied().collect();
    assert_eq!(values, vec![1, 3, 4, 6, 7, 8, 10, 13, 14]);

    let mut from_into_iter = Vec::new();
    for v in &list {
        from_into_iter.push(*v);
    }
    assert_eq!(from_into_iter, values);
}

#[test]
fn iterator_is_forward_only_and_spent_matrix() {
    let mut list = SortedList::new();
    list.insert_all([2, 1, 3]);
    let mut it = list.iter();
    assert_eq!(it.len(), 3);
    assert_eq!(it.next(), Some(&1));
    assert_eq!(it.len(), 2);
    assert_eq!(it.next(), Some(&2));
    assert_eq!(it.next(), Some(&3));
    assert_eq!(it.next(), None);
    assert_eq!(it.next(), None);
    assert_eq!(it.len(), 0);

    // A fresh iterator starts over.
    assert_eq!(list.iter().next(), Some(&1));
}

#[test]
fn remove_through_iterator_always_fails_matrix() {
    let empty = SortedList::<i32>::new();
    assert_eq!(
        empty.iter().remove(),
        Err(SortedListError::UnsupportedMutation)
    );

    let mut list = SortedList::new();
    list.insert_all([1, 2, 3]);
    let mut it = list.iter();
    assert_eq!(it.remove(), Err(SortedListError::UnsupportedMutation));
    it.next();
    assert_eq!(it.remove(), Err(SortedListError::UnsupportedMutation));
    while it.next().is_some() {}
    assert_eq!(it.remove(), Err(SortedListError::UnsupportedMutation));
    assert_eq!(list.len(), 3);
}

#[test]
fn iterator_after_rebalance_matrix() {
    let mut list = SortedList::new();
    list.insert_all((0..100).rev());
    list.rebalance();
    assert!(list.iter().copied().eq(0..100));
    assert_eq!(list.iter().size_hint(), (100, Some(100)));
}

#[test]
fn error_messages_matrix() {
    assert_eq!(
        SortedListError::IndexOutOfBounds { index: 3, len: 2 }.to_string(),
        "INDEX_OUT_OF_BOUNDS: index 3, len 2"
    );
    assert_eq!(
        SortedListError::UnsupportedMutation.to_string(),
        "UNSUPPORTED_MUTATION: cannot remove through an iterator"
    );
}
