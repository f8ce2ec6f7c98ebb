//! Property-based tests using proptest.
//!
//! These tests check the tournament search against a brute-force oracle on
//! randomly generated sequences and ranges, and check the shape of the
//! recursion itself.

mod common;

use common::{assert_matches_oracle, brute_force_min_max, leaf_coverage};
use extrema::{
    expected_comparisons, find_min_max, find_min_max_counted, leaves, min_max, naive_min_max,
    split_point, MinMax,
};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Non-empty sequences over the full i64 range.
fn sequence_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(any::<i64>(), 1..256)
}

/// Sequences drawn from a tiny alphabet, so ties are everywhere.
fn tied_sequence_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-2i64..=2, 1..128)
}

/// A sequence plus a valid inclusive range into it.
fn sequence_and_range() -> impl Strategy<Value = (Vec<i64>, usize, usize)> {
    sequence_strategy().prop_flat_map(|seq| {
        let len = seq.len();
        (Just(seq), 0..len).prop_flat_map(move |(seq, low)| (Just(seq), Just(low), low..len))
    })
}

// ============================================================================
// ORACLE AGREEMENT
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn full_range_matches_oracle(seq in sequence_strategy()) {
        let got = find_min_max(&seq, 0, seq.len() - 1);
        prop_assert_eq!(got, brute_force_min_max(&seq).unwrap());
    }

    #[test]
    fn any_sub_range_matches_oracle((seq, low, high) in sequence_and_range()) {
        assert_matches_oracle(&seq, low, high, find_min_max(&seq, low, high));
    }

    #[test]
    fn ties_resolve_to_the_shared_value(seq in tied_sequence_strategy()) {
        let got = min_max(&seq).unwrap();
        prop_assert_eq!(got, brute_force_min_max(&seq).unwrap());
        prop_assert!(seq.contains(&got.min));
        prop_assert!(seq.contains(&got.max));
    }

    #[test]
    fn single_element_ranges_are_the_element(seq in sequence_strategy()) {
        for (i, &value) in seq.iter().enumerate() {
            prop_assert_eq!(find_min_max(&seq, i, i), MinMax::splat(value));
        }
    }

    #[test]
    fn naive_scan_agrees(seq in sequence_strategy()) {
        let (naive, count) = naive_min_max(&seq).unwrap();
        prop_assert_eq!(naive, find_min_max(&seq, 0, seq.len() - 1));
        prop_assert_eq!(count.get(), 2 * (seq.len() as u64 - 1));
    }
}

// ============================================================================
// DETERMINISM
// ============================================================================

proptest! {
    #[test]
    fn repeated_searches_are_identical_and_do_not_mutate(
        (seq, low, high) in sequence_and_range(),
    ) {
        let snapshot = seq.clone();
        let first = find_min_max(&seq, low, high);
        for _ in 0..5 {
            prop_assert_eq!(find_min_max(&seq, low, high), first);
        }
        prop_assert_eq!(seq, snapshot);
    }
}

// ============================================================================
// RECURSION SHAPE
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1024))]

    /// Floor-division splits of odd-length ranges must neither skip nor
    /// double-count an index.
    #[test]
    fn leaves_cover_every_index_exactly_once(low in 0usize..10_000, len in 1usize..2_000) {
        let high = low + len - 1;
        let parts = leaves(low, high);

        let hits = leaf_coverage(low, high, &parts);
        prop_assert!(hits.iter().all(|&h| h == 1), "coverage {:?}", hits);

        // Leaves are contiguous, in order, and of length one or two.
        prop_assert_eq!(parts.first().map(|p| p.0), Some(low));
        prop_assert_eq!(parts.last().map(|p| p.1), Some(high));
        for window in parts.windows(2) {
            prop_assert_eq!(window[0].1 + 1, window[1].0);
        }
        for &(a, b) in &parts {
            prop_assert!(b == a || b == a + 1);
        }
    }

    #[test]
    fn split_point_is_floor_midpoint(low in 0usize..1_000_000, len in 2usize..1_000_000) {
        let high = low + len - 1;
        let mid = split_point(low, high);
        prop_assert_eq!(mid, (low + high) / 2);
        prop_assert!(low <= mid && mid < high);
        // The left half takes the extra element of an odd range.
        prop_assert_eq!(mid - low + 1, len - len / 2);
    }

    /// With positions as values, the extrema of a range are its endpoints.
    #[test]
    fn identity_sequence_yields_endpoints(low in 0usize..500, len in 1usize..500) {
        let seq: Vec<usize> = (0..low + len).collect();
        let high = low + len - 1;
        prop_assert_eq!(find_min_max(&seq, low, high), MinMax { min: low, max: high });
    }
}

// ============================================================================
// COMPARISON COUNTS
// ============================================================================

proptest! {
    #[test]
    fn counted_matches_expected((seq, low, high) in sequence_and_range()) {
        let (result, count) = find_min_max_counted(&seq, low, high);
        prop_assert_eq!(result, find_min_max(&seq, low, high));
        prop_assert_eq!(count.get(), expected_comparisons(high - low + 1));
    }
}

#[test]
fn expected_comparisons_small_values() {
    let table = [0, 0, 1, 3, 4, 6, 8, 9, 10, 12, 14, 16, 18];
    for (n, &expected) in table.iter().enumerate() {
        assert_eq!(expected_comparisons(n), expected, "n = {}", n);
    }
}

#[test]
fn expected_comparisons_stay_within_bounds() {
    for n in 2..5_000usize {
        let c = expected_comparisons(n);
        let n = n as u64;
        assert!(3 * c <= 5 * n - 6, "n = {}: {} above (5n - 6) / 3", n, c);
        assert!(c <= 2 * (n - 1), "n = {}: {} above naive", n, c);
        if n.is_power_of_two() {
            assert_eq!(c, 3 * n / 2 - 2, "n = {}", n);
        }
    }
}

#[test]
fn two_element_ranges_cost_one_comparison() {
    let (result, count) = find_min_max_counted(&[5, 3], 0, 1);
    assert_eq!(result, MinMax { min: 3, max: 5 });
    assert_eq!(count.get(), 1);

    let (result, count) = find_min_max_counted(&[3, 5], 0, 1);
    assert_eq!(result, MinMax { min: 3, max: 5 });
    assert_eq!(count.get(), 1);
}

// ============================================================================
// PARALLEL EVALUATION
// ============================================================================

#[cfg(feature = "parallel")]
mod parallel {
    use super::*;
    use extrema::{find_min_max_parallel, PARALLEL_GRAIN};

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn parallel_matches_sequential(
            seq in prop::collection::vec(any::<i64>(), 1..PARALLEL_GRAIN * 4),
        ) {
            let high = seq.len() - 1;
            prop_assert_eq!(find_min_max_parallel(&seq, 0, high), find_min_max(&seq, 0, high));
        }
    }
}
