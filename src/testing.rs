//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::MinMax;

/// The classic ten-element exchange: `9` is the maximum and `0` the minimum.
pub const REFERENCE_SEQUENCE: [i64; 10] = [5, 7, 2, 9, 1, 8, 3, 6, 4, 0];

/// Oracle: extrema by iterator folds, obviously correct and independent of
/// the tournament recursion.
pub fn brute_force_min_max<T: Ord + Copy>(seq: &[T]) -> Option<MinMax<T>> {
    let min = *seq.iter().min()?;
    let max = *seq.iter().max()?;
    Some(MinMax { min, max })
}

/// Oracle over an inclusive sub-range.
pub fn brute_force_range<T: Ord + Copy>(seq: &[T], low: usize, high: usize) -> MinMax<T> {
    brute_force_min_max(&seq[low..=high]).expect("inclusive range is never empty")
}

/// How many times each index of `[low, high]` appears across `leaves`.
///
/// Index `i` of the returned vector counts position `low + i`.
pub fn leaf_coverage(low: usize, high: usize, leaves: &[(usize, usize)]) -> Vec<usize> {
    let mut hits = vec![0usize; high - low + 1];
    for &(a, b) in leaves {
        for i in a..=b {
            if (low..=high).contains(&i) {
                hits[i - low] += 1;
            }
        }
    }
    hits
}

/// Render values the way a user would type them.
pub fn as_input_line(values: &[i64]) -> String {
    let mut line = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    line.push('\n');
    line
}
