// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fork-join evaluation of the tournament search.
//!
//! The two halves of every split read disjoint index ranges of an immutable
//! slice and return independent `MinMax` values, so they can run on separate
//! rayon workers with no locking. Only the merge waits for both.
//!
//! Forking has a cost, and a small range finishes faster than a task can be
//! stolen. Ranges at or below `PARALLEL_GRAIN` elements drop into the
//! sequential recursion, which also owns both base cases. The split points are
//! the same as the sequential search, so the result is bit-for-bit identical.

use std::fmt::Debug;

use crate::contracts::{check_range_valid, check_result_bounds, check_split_covers};
use crate::minmax::{merge, solve, split_point};
use crate::types::MinMax;

/// Range length at or below which the search stops forking.
pub const PARALLEL_GRAIN: usize = 4096;

/// Parallel [`find_min_max`](crate::find_min_max) over `seq[low..=high]`.
///
/// Same precondition and same result as the sequential search.
pub fn find_min_max_parallel<T>(seq: &[T], low: usize, high: usize) -> MinMax<T>
where
    T: Ord + Copy + Debug + Send + Sync,
{
    check_range_valid(seq.len(), low, high);
    let result = fork(seq, low, high);
    check_result_bounds(seq, low, high, &result.min, &result.max);
    result
}

fn fork<T>(seq: &[T], low: usize, high: usize) -> MinMax<T>
where
    T: Ord + Copy + Send + Sync,
{
    if high - low < PARALLEL_GRAIN {
        return solve(seq, low, high, &mut |a: &T, b: &T| a < b);
    }

    let mid = split_point(low, high);
    check_split_covers(low, mid, high);

    let (left, right) = rayon::join(|| fork(seq, low, mid), || fork(seq, mid + 1, high));
    merge(left, right, &mut |a: &T, b: &T| a < b)
}
