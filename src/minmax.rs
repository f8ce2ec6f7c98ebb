// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tournament-style minimum/maximum search.
//!
//! Scanning a slice and testing every element against both the running
//! minimum and the running maximum costs `2(n - 1)` comparisons. Splitting the
//! range in half, solving each half, and merging with one comparison per end
//! brings that down to `3n/2 - 2` when `n` is a power of two. The two-element
//! base case is what makes the saving real: a pair costs one comparison
//! instead of the two a one-element base case would spend merging singletons.
//!
//! ```text
//!            [5 7 2 9 1 8 3 6 4 0]          merge: 2 comparisons
//!             /                  \
//!       [5 7 2 9 1]          [8 3 6 4 0]    merge: 2 + 2
//!        /      \              /      \
//!    [5 7 2]  [9 1]        [8 3 6]  [4 0]   pairs: 1 each
//!     /   \                 /   \
//!  [5 7]  [2]            [8 3]  [6]         singletons: free
//! ```
//!
//! Every entry point funnels into [`solve`], which takes the comparison as a
//! closure. The plain search passes `<`, the instrumented one passes a `<` that
//! counts, so the two cannot drift apart.

use std::fmt::Debug;

use crate::contracts::{check_range_valid, check_result_bounds, check_split_covers};
use crate::types::{Comparisons, MinMax};

/// Split point of the inclusive range `[low, high]`.
///
/// Equal to `(low + high) / 2` rounded down, without the overflow. The left
/// half `[low, mid]` gets the extra element when the length is odd.
#[inline]
pub fn split_point(low: usize, high: usize) -> usize {
    low + (high - low) / 2
}

/// Find the minimum and maximum of `seq[low..=high]`.
///
/// Requires `low <= high < seq.len()`. Debug builds check this (and the
/// result) through [`crate::contracts`]; release builds panic on the first
/// out-of-bounds index instead.
///
/// # Example
///
/// ```
/// use extrema::{find_min_max, MinMax};
///
/// let seq = [5, 7, 2, 9, 1, 8, 3, 6, 4, 0];
/// assert_eq!(find_min_max(&seq, 0, 9), MinMax { min: 0, max: 9 });
/// assert_eq!(find_min_max(&seq, 1, 3), MinMax { min: 2, max: 9 });
/// ```
pub fn find_min_max<T: Ord + Copy + Debug>(seq: &[T], low: usize, high: usize) -> MinMax<T> {
    check_range_valid(seq.len(), low, high);
    let result = solve(seq, low, high, &mut |a: &T, b: &T| a < b);
    check_result_bounds(seq, low, high, &result.min, &result.max);
    result
}

/// Extrema of the whole slice, or `None` when it is empty.
pub fn min_max<T: Ord + Copy + Debug>(seq: &[T]) -> Option<MinMax<T>> {
    if seq.is_empty() {
        return None;
    }
    Some(find_min_max(seq, 0, seq.len() - 1))
}

/// Same search as [`find_min_max`], also reporting how many element
/// comparisons it made.
///
/// The count depends only on the range length; see [`expected_comparisons`].
pub fn find_min_max_counted<T: Ord + Copy + Debug>(
    seq: &[T],
    low: usize,
    high: usize,
) -> (MinMax<T>, Comparisons) {
    check_range_valid(seq.len(), low, high);
    let mut count = 0u64;
    let result = solve(seq, low, high, &mut |a: &T, b: &T| {
        count += 1;
        a < b
    });
    check_result_bounds(seq, low, high, &result.min, &result.max);
    (result, Comparisons(count))
}

/// Recursive core shared by every entry point.
///
/// `less` is called exactly once per element comparison.
pub(crate) fn solve<T, F>(seq: &[T], low: usize, high: usize, less: &mut F) -> MinMax<T>
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    if low == high {
        return MinMax::splat(seq[low]);
    }

    if high == low + 1 {
        let (a, b) = (seq[low], seq[high]);
        return if less(&a, &b) {
            MinMax { min: a, max: b }
        } else {
            MinMax { min: b, max: a }
        };
    }

    let mid = split_point(low, high);
    check_split_covers(low, mid, high);

    let left = solve(seq, low, mid, less);
    let right = solve(seq, mid + 1, high, less);
    merge(left, right, less)
}

/// Combine the extrema of two adjacent ranges with two comparisons.
#[inline]
pub(crate) fn merge<T, F>(left: MinMax<T>, right: MinMax<T>, less: &mut F) -> MinMax<T>
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    let min = if less(&right.min, &left.min) {
        right.min
    } else {
        left.min
    };
    let max = if less(&left.max, &right.max) {
        right.max
    } else {
        left.max
    };
    MinMax { min, max }
}

/// Comparisons [`find_min_max`] spends on a range of `n` elements.
///
/// `C(1) = 0`, `C(2) = 1`, `C(n) = C(ceil(n/2)) + C(floor(n/2)) + 2`.
/// Empty ranges cost nothing.
pub fn expected_comparisons(n: usize) -> u64 {
    match n {
        0 | 1 => 0,
        2 => 1,
        _ => expected_comparisons(n - n / 2) + expected_comparisons(n / 2) + 2,
    }
}

/// Linear scan against both running extrema: `2(n - 1)` comparisons.
///
/// Kept as the baseline the tournament search is measured against.
pub fn naive_min_max<T: Ord + Copy>(seq: &[T]) -> Option<(MinMax<T>, Comparisons)> {
    let (&first, rest) = seq.split_first()?;
    let mut result = MinMax::splat(first);
    let mut count = 0u64;

    for &value in rest {
        count += 2;
        if value < result.min {
            result.min = value;
        }
        if value > result.max {
            result.max = value;
        }
    }

    Some((result, Comparisons(count)))
}

/// Base-case ranges the recursion bottoms out in, left to right.
///
/// Each entry is an inclusive `(low, high)` pair of length one or two. The
/// recursion splits with [`split_point`] exactly as [`find_min_max`] does, so
/// the leaves partition `[low, high]`.
pub fn leaves(low: usize, high: usize) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    collect_leaves(low, high, &mut out);
    out
}

fn collect_leaves(low: usize, high: usize, out: &mut Vec<(usize, usize)>) {
    if high <= low + 1 {
        out.push((low, high));
        return;
    }
    let mid = split_point(low, high);
    collect_leaves(low, mid, out);
    collect_leaves(mid + 1, high, out);
}
