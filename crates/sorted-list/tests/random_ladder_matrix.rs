use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use sorted_list::SortedList;

/// Grows a list through random inserts and removals, checking it against a
/// sorted vector after every step. Sizes climb so skew builds up between
/// rebalances.
fn run_ladder(seed: u64, rungs: usize, per_rung: usize) {
    let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
    let mut list = SortedList::new();
    let mut model: Vec<u32> = Vec::new();

    for rung in 0..rungs {
        for _ in 0..per_rung * (rung + 1) {
            match rng.gen_range(0..10) {
                0..=5 => {
                    let v = rng.gen_range(0..200u32);
                    list.insert(v);
                    let at = model.partition_point(|x| *x <= v);
                    model.insert(at, v);
                }
                6 | 7 if !model.is_empty() => {
                    let v = model[rng.gen_range(0..model.len())];
                    assert!(list.remove_first(&v));
                    let pos = model.iter().position(|x| *x == v).unwrap();
                    model.remove(pos);
                }
                8 if !model.is_empty() => {
                    let i = rng.gen_range(0..model.len());
                    assert_eq!(list.remove_at(i), Ok(model.remove(i)));
                }
                _ => {
                    let probe = rng.gen_range(0..200u32);
                    assert_eq!(list.index_of(&probe), model.iter().position(|x| *x == probe));
                    assert_eq!(
                        list.last_index_of(&probe),
                        model.iter().rposition(|x| *x == probe)
                    );
                }
            }
        }
        list.assert_valid().unwrap();
        assert_eq!(list.len(), model.len());
        assert_eq!(list.to_vec(), model);

        list.rebalance();
        list.assert_avl().unwrap();
        assert_eq!(list.to_vec(), model);
        if !model.is_empty() {
            let i = rng.gen_range(0..model.len());
            assert_eq!(list.get(i), Some(&model[i]));
        }
    }
}

#[test]
fn random_ladder_matrix() {
    for seed in [1, 7, 42, 0xdead_beef] {
        run_ladder(seed, 8, 40);
    }
}

#[test]
fn ascending_ladder_rebalances_matrix() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(3);
    let mut list = SortedList::new();
    let mut next = 0u64;
    for _ in 0..20 {
        // Mostly ascending runs skew the tree to the right between rebalances.
        for _ in 0..rng.gen_range(10..60) {
            next += rng.gen_range(0..3);
            list.insert(next);
        }
        list.rebalance();
        assert!(list.is_balanced());
        let levels = list.level_count();
        let bound = (1.45 * ((list.len() + 2) as f64).log2()).ceil() as usize;
        assert!(levels <= bound, "levels {levels} over bound {bound}");
    }
    assert!(list.iter().zip(list.iter().skip(1)).all(|(a, b)| a <= b));
}
