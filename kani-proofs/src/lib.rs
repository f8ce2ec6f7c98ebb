// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the extrema tournament search.
//!
//! This standalone crate extracts the recursive min/max search and proves it
//! correct for every input of the classic ten-element size using Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: the search never indexes out of bounds on a valid range
//! 2. **Oracle agreement**: the result equals a linear scan of the range
//! 3. **Comparison count**: the search spends exactly `C(n)` comparisons

/// Default driver count (must match `DEFAULT_COUNT` in src/driver.rs)
pub const DEFAULT_COUNT: usize = 10;

// ============================================================================
// TOURNAMENT SEARCH (mirrors src/minmax.rs)
// ============================================================================

/// Floor midpoint of `[low, high]` without overflow.
pub fn split_point(low: usize, high: usize) -> usize {
    low + (high - low) / 2
}

/// Returns `(min, max, comparisons)` of `seq[low..=high]`.
pub fn find_min_max(seq: &[i32], low: usize, high: usize) -> (i32, i32, u32) {
    if low == high {
        return (seq[low], seq[low], 0);
    }

    if high == low + 1 {
        return if seq[low] < seq[high] {
            (seq[low], seq[high], 1)
        } else {
            (seq[high], seq[low], 1)
        };
    }

    let mid = split_point(low, high);
    let (lmin, lmax, lc) = find_min_max(seq, low, mid);
    let (rmin, rmax, rc) = find_min_max(seq, mid + 1, high);
    let min = if rmin < lmin { rmin } else { lmin };
    let max = if lmax < rmax { rmax } else { lmax };
    (min, max, lc + rc + 2)
}

/// Comparisons spent on `n` elements: `C(n) = C(ceil(n/2)) + C(floor(n/2)) + 2`.
pub fn expected_comparisons(n: usize) -> u32 {
    match n {
        0 | 1 => 0,
        2 => 1,
        _ => expected_comparisons(n - n / 2) + expected_comparisons(n / 2) + 2,
    }
}

/// Linear-scan oracle.
pub fn scan(seq: &[i32], low: usize, high: usize) -> (i32, i32) {
    let mut min = seq[low];
    let mut max = seq[low];
    let mut i = low + 1;
    while i <= high {
        if seq[i] < min {
            min = seq[i];
        }
        if seq[i] > max {
            max = seq[i];
        }
        i += 1;
    }
    (min, max)
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Any valid sub-range of any ten-element array: no panic, and the result
    /// matches the linear scan.
    #[kani::proof]
    #[kani::unwind(11)]
    fn verify_sub_range_matches_scan() {
        let seq: [i32; DEFAULT_COUNT] = kani::any();
        let low: usize = kani::any_where(|&l| l < DEFAULT_COUNT);
        let high: usize = kani::any_where(|&h| h >= low && h < DEFAULT_COUNT);

        let (min, max, _) = find_min_max(&seq, low, high);
        let (scan_min, scan_max) = scan(&seq, low, high);

        kani::assert(min == scan_min, "min must equal the linear scan");
        kani::assert(max == scan_max, "max must equal the linear scan");
        kani::assert(min <= max, "min must not exceed max");
    }

    /// The full ten-element range costs exactly 14 comparisons for every input.
    #[kani::proof]
    #[kani::unwind(11)]
    fn verify_full_range_comparison_count() {
        let seq: [i32; DEFAULT_COUNT] = kani::any();
        let (_, _, comparisons) = find_min_max(&seq, 0, DEFAULT_COUNT - 1);

        kani::assert(
            comparisons == expected_comparisons(DEFAULT_COUNT),
            "comparison count must be data independent",
        );
        kani::assert(comparisons == 14, "ten elements cost 14 comparisons");
    }

    /// The split point always leaves two non-empty halves.
    #[kani::proof]
    fn verify_split_point_partitions() {
        let low: usize = kani::any();
        let high: usize = kani::any_where(|&h| h > low);
        let mid = split_point(low, high);

        kani::assert(low <= mid, "mid must not precede low");
        kani::assert(mid < high, "right half must be non-empty");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_sequence() {
        let seq = [5, 7, 2, 9, 1, 8, 3, 6, 4, 0];
        assert_eq!(find_min_max(&seq, 0, 9), (0, 9, 14));
        assert_eq!(scan(&seq, 0, 9), (0, 9));
    }

    #[test]
    fn test_every_sub_range_matches_scan() {
        let seq = [3, -1, 4, 1, -5, 9, 2, -6, 5, 3];
        for low in 0..seq.len() {
            for high in low..seq.len() {
                let (min, max, count) = find_min_max(&seq, low, high);
                assert_eq!((min, max), scan(&seq, low, high));
                assert_eq!(count, expected_comparisons(high - low + 1));
            }
        }
    }
}
