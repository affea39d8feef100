use sorted_list::SortedList;

#[test]
fn height_and_levels_matrix() {
    let mut list = SortedList::new();
    assert_eq!(list.height(), -1);
    assert_eq!(list.level_count(), 0);

    list.insert(5);
    assert_eq!(list.height(), 0);
    assert_eq!(list.level_count(), 1);

    list.insert_all([3, 8]);
    assert_eq!(list.height(), 1);
    assert_eq!(list.level_count(), 2);

    list.insert_all([9, 10, 11]);
    assert_eq!(list.height(), 4);
    assert_eq!(list.level_count(), 5);
}

#[test]
fn sequential_inserts_degrade_to_chain_matrix() {
    let mut list = SortedList::new();
    list.insert_all(0..1000);
    assert_eq!(list.level_count(), 1000);
    assert!(!list.is_balanced());
    list.assert_valid().unwrap();

    list.rebalance();
    assert!(list.is_balanced());
    list.assert_avl().unwrap();
    assert!(list.level_count() <= 14);
    assert_eq!(list.to_vec(), (0..1000).collect::<Vec<_>>());
}

#[test]
fn large_degenerate_chain_matrix() {
    let n = 20_000u32;
    let mut list = SortedList::new();
    list.insert_all((0..n).rev());
    assert_eq!(list.len(), n as usize);
    assert_eq!(list.level_count(), n as usize);
    assert_eq!(list.get(0), Some(&0));
    assert_eq!(list.index_of(&(n - 1)), Some(n as usize - 1));
    assert!(list.remove_first(&0));
    assert_eq!(list.remove_at(0), Ok(1));
    list.assert_valid().unwrap();

    list.rebalance();
    list.assert_avl().unwrap();
    assert_eq!(list.first(), Some(&2));
    assert_eq!(list.last(), Some(&(n - 1)));
    // Dropping a chain must not recurse either.
    let mut chain = SortedList::new();
    chain.insert_all(0..n);
    drop(chain);
}

#[test]
fn rebalance_is_idempotent_matrix() {
    let mut list = SortedList::new();
    for i in 0..500 {
        list.insert((i * 7919) % 503);
    }
    list.rebalance();
    let height = list.height();
    let shape = list.to_string_tree("");
    list.rebalance();
    assert_eq!(list.height(), height);
    assert_eq!(list.to_string_tree(""), shape);
    list.assert_avl().unwrap();
}

#[test]
fn rebalance_leaves_balanced_tree_alone_matrix() {
    let mut list = SortedList::new();
    list.insert_all([4, 2, 6, 1, 3, 5, 7]);
    let before = list.to_string_tree("");
    assert!(list.is_balanced());
    list.rebalance();
    assert_eq!(list.to_string_tree(""), before);
}

#[test]
fn four_rotation_cases_matrix() {
    // left-left, left-right, right-left, right-right
    for order in [[3, 2, 1], [3, 1, 2], [1, 3, 2], [1, 2, 3]] {
        let mut list = SortedList::new();
        list.insert_all(order);
        assert_eq!(list.height(), 2);
        list.rebalance();
        assert_eq!(list.height(), 1);
        assert_eq!(list.to_string_tree(""), "SortedList\n└─ 2\n  ← 1\n  → 3");
    }
}

#[test]
fn balance_is_not_maintained_after_mutation_matrix() {
    let mut list = SortedList::new();
    list.insert_all(0..15);
    list.rebalance();
    assert!(list.is_balanced());
    list.insert_all(15..30);
    assert!(!list.is_balanced());
    list.assert_valid().unwrap();
    list.rebalance();
    assert!(list.is_balanced());

    for v in 0..10 {
        assert!(list.remove_first(&v));
    }
    list.assert_valid().unwrap();
    list.rebalance();
    list.assert_avl().unwrap();
    assert_eq!(list.to_vec(), (10..30).collect::<Vec<_>>());
}

#[test]
fn rebalance_empty_and_single_matrix() {
    let mut list = SortedList::<i32>::new();
    list.rebalance();
    assert_eq!(list.height(), -1);
    list.insert(1);
    list.rebalance();
    assert_eq!(list.height(), 0);
    list.assert_avl().unwrap();
}
