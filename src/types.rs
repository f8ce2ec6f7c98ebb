// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Value types shared by the finder, the driver, and the tests.

use serde::Serialize;
use std::fmt;

/// Extrema of an inclusive index range.
///
/// Only values are reported, never positions, so a range holding several
/// copies of its minimum (or maximum) produces one indistinguishable answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MinMax<T> {
    pub min: T,
    pub max: T,
}

impl<T: Copy> MinMax<T> {
    /// Extrema of a single element.
    #[inline]
    pub fn splat(value: T) -> Self {
        MinMax {
            min: value,
            max: value,
        }
    }
}

/// Number of element-to-element comparisons spent by a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Comparisons(pub u64);

impl Comparisons {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Comparisons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
