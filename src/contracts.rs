//! Runtime contracts for the divide-and-conquer search.
//!
//! Debug-mode assertions that check the properties the recursion relies on.
//! These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Name the violated property in the panic message
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function      | Property                                          |
//! |------------------------|---------------------------------------------------|
//! | `check_range_valid`    | `low <= high < len` before any indexing           |
//! | `check_split_covers`   | `[low, mid]` and `[mid + 1, high]` partition range |
//! | `check_result_bounds`  | `min <= max`, both drawn from the searched range   |
//!
//! # Usage
//!
//! ```ignore
//! use extrema::contracts::*;
//!
//! // In debug builds, this panics if the range is out of bounds
//! check_range_valid(seq.len(), low, high);
//!
//! // In release builds, this is a no-op
//! ```

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// The default run must read at least one value.
const _: () = {
    assert!(crate::driver::DEFAULT_COUNT >= 1);
};

/// Parallel splitting only happens above the grain, so every range it splits
/// has at least three elements and both halves are non-empty.
#[cfg(feature = "parallel")]
const _: () = {
    assert!(crate::parallel::PARALLEL_GRAIN >= 2);
};

// ============================================================================
// RANGE CONTRACTS
// ============================================================================

/// Check the finder's precondition: `low <= high < len`.
///
/// # Panics (debug builds only)
/// Panics if the range is inverted or runs past the end of the sequence.
#[inline]
pub fn check_range_valid(len: usize, low: usize, high: usize) {
    debug_assert!(
        low <= high,
        "Contract violation: Range.Ordered - low {} > high {}",
        low,
        high
    );
    debug_assert!(
        high < len,
        "Contract violation: Range.InBounds - high {} >= len {}",
        high,
        len
    );
}

/// Check that a split point divides `[low, high]` into two non-empty halves
/// that cover every index exactly once.
///
/// # Panics (debug builds only)
/// Panics if `mid` falls outside `[low, high)`.
#[inline]
pub fn check_split_covers(low: usize, mid: usize, high: usize) {
    debug_assert!(
        low <= mid && mid < high,
        "Contract violation: Split.Partition - mid {} not in [{}, {})",
        mid,
        low,
        high
    );
}

// ============================================================================
// RESULT CONTRACTS
// ============================================================================

/// Check that a result is ordered and drawn from the searched range.
///
/// Walks the whole range, so callers run it once per top-level search rather
/// than at every recursion level.
///
/// # Panics (debug builds only)
/// Panics if `min > max`, or if either value does not occur in
/// `seq[low..=high]`.
#[inline]
pub fn check_result_bounds<T: Ord + std::fmt::Debug>(
    seq: &[T],
    low: usize,
    high: usize,
    min: &T,
    max: &T,
) {
    debug_assert!(
        min <= max,
        "Contract violation: Result.Ordered - min {:?} > max {:?}",
        min,
        max
    );

    if cfg!(debug_assertions) {
        let range = &seq[low..=high];
        debug_assert!(
            range.contains(min),
            "Contract violation: Result.MinWitness - {:?} not in [{}, {}]",
            min,
            low,
            high
        );
        debug_assert!(
            range.contains(max),
            "Contract violation: Result.MaxWitness - {:?} not in [{}, {}]",
            max,
            low,
            high
        );
        debug_assert!(
            range.iter().all(|v| min <= v && v <= max),
            "Contract violation: Result.Extremal - a value in [{}, {}] lies outside [{:?}, {:?}]",
            low,
            high,
            min,
            max
        );
    }
}
