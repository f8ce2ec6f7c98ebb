//! Divide-and-conquer minimum and maximum search.
//!
//! This crate finds both extrema of an integer sequence with the classic
//! tournament recursion: split the range in half, solve each half, merge with
//! two comparisons. Pairs are settled with a single comparison, which is what
//! brings the cost from the naive `2n - 2` down to `3n/2 - 2` for powers of two.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  input.rs   │────▶│  driver.rs   │────▶│  minmax.rs   │
//! │(read_sequence)    │ (run, Config)│     │(find_min_max)│
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                            │                    │
//!                            ▼                    ▼
//!                     ┌──────────────┐     ┌──────────────┐
//!                     │ parallel.rs  │────▶│ contracts.rs │
//!                     │ (rayon::join)│     │(debug_assert)│
//!                     └──────────────┘     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use extrema::{find_min_max, min_max, MinMax};
//!
//! let seq = [5, 7, 2, 9, 1, 8, 3, 6, 4, 0];
//! assert_eq!(find_min_max(&seq, 0, seq.len() - 1), MinMax { min: 0, max: 9 });
//! assert_eq!(min_max::<i32>(&[]), None);
//! ```

// Module declarations
pub mod contracts;
pub mod driver;
pub mod input;
mod minmax;
#[cfg(feature = "parallel")]
mod parallel;
pub mod testing;
mod types;

// Re-exports for public API
pub use driver::{run, Config, DriverError, Evaluator, OutputFormat, Report, DEFAULT_COUNT};
pub use input::{read_sequence, InputError};
pub use minmax::{
    expected_comparisons, find_min_max, find_min_max_counted, leaves, min_max, naive_min_max,
    split_point,
};
#[cfg(feature = "parallel")]
pub use parallel::{find_min_max_parallel, PARALLEL_GRAIN};
pub use types::{Comparisons, MinMax};
