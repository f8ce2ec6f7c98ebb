// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prompt, read, search, print.
//!
//! The driver owns the sequence for the whole run. It reads `count` integers
//! from the input stream, runs the tournament search over `[0, count - 1]`,
//! and writes the maximum and then the minimum to the output stream.
//!
//! Streams are passed in rather than taken from the process so the whole
//! exchange can be driven from tests with in-memory buffers.

use std::error::Error;
use std::fmt;
use std::io::{self, BufRead, Write};

use serde::Serialize;

use crate::input::{read_sequence, InputError};
use crate::minmax::{expected_comparisons, find_min_max_counted, naive_min_max};
use crate::types::{Comparisons, MinMax};

/// Number of values read when no count is configured.
pub const DEFAULT_COUNT: usize = 10;

/// How the search is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Evaluator {
    /// Single-threaded recursion with comparison counting.
    #[default]
    Sequential,
    /// Fork-join recursion on the rayon pool.
    #[cfg(feature = "parallel")]
    Parallel,
}

/// How the results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `Maximum element: ..` and `Minimum element: ..` lines.
    #[default]
    Text,
    /// One JSON object: `{"max":..,"min":..}`.
    Json,
}

/// Driver settings. The default reproduces the classic ten-element exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub count: usize,
    pub prompt: bool,
    pub evaluator: Evaluator,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            count: DEFAULT_COUNT,
            prompt: true,
            evaluator: Evaluator::default(),
            format: OutputFormat::default(),
        }
    }
}

/// What a run computed, for callers that want more than the printed lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub result: MinMax<i64>,
    pub len: usize,
    pub comparisons: Comparisons,
    pub naive_comparisons: Comparisons,
}

#[derive(Debug)]
pub enum DriverError {
    /// The sequence could not be read.
    Input(InputError),
    /// Writing the prompt or the results failed.
    Output(io::Error),
    /// A zero count leaves nothing to search.
    EmptySequence,
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::Input(e) => write!(f, "{}", e),
            DriverError::Output(e) => write!(f, "failed to write output: {}", e),
            DriverError::EmptySequence => write!(f, "no elements to search"),
        }
    }
}

impl Error for DriverError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DriverError::Input(e) => Some(e),
            DriverError::Output(e) => Some(e),
            DriverError::EmptySequence => None,
        }
    }
}

impl From<InputError> for DriverError {
    fn from(e: InputError) -> Self {
        DriverError::Input(e)
    }
}

impl From<io::Error> for DriverError {
    fn from(e: io::Error) -> Self {
        DriverError::Output(e)
    }
}

impl From<serde_json::Error> for DriverError {
    fn from(e: serde_json::Error) -> Self {
        DriverError::Output(e.into())
    }
}

/// Field order matters: the maximum is reported first, as in the text output.
#[derive(Serialize)]
struct JsonOutput {
    max: i64,
    min: i64,
}

/// Run one prompt-read-search-print exchange.
pub fn run<R, W>(input: &mut R, output: &mut W, config: &Config) -> Result<Report, DriverError>
where
    R: BufRead,
    W: Write,
{
    if config.count == 0 {
        return Err(DriverError::EmptySequence);
    }

    if config.prompt {
        writeln!(output, "Enter {} elements of the array:", config.count)?;
        output.flush()?;
    }

    let values: Vec<i64> = read_sequence(input, config.count)?;
    let report = evaluate(&values, config.evaluator)?;

    write_result(output, &report.result, config.format)?;
    output.flush()?;

    Ok(report)
}

/// Search a sequence that is already in memory.
pub fn evaluate(values: &[i64], evaluator: Evaluator) -> Result<Report, DriverError> {
    let (_, naive_comparisons) = naive_min_max(values).ok_or(DriverError::EmptySequence)?;
    let high = values.len() - 1;

    let (result, comparisons) = match evaluator {
        Evaluator::Sequential => find_min_max_counted(values, 0, high),
        // Same split points as the sequential search, so the count is known
        // without threading a counter through the workers.
        #[cfg(feature = "parallel")]
        Evaluator::Parallel => (
            crate::parallel::find_min_max_parallel(values, 0, high),
            Comparisons(expected_comparisons(values.len())),
        ),
    };
    debug_assert_eq!(comparisons.get(), expected_comparisons(values.len()));

    Ok(Report {
        result,
        len: values.len(),
        comparisons,
        naive_comparisons,
    })
}

/// Write the extrema, maximum first.
pub fn write_result<W: Write>(
    output: &mut W,
    result: &MinMax<i64>,
    format: OutputFormat,
) -> Result<(), DriverError> {
    match format {
        OutputFormat::Text => {
            writeln!(output, "Maximum element: {}", result.max)?;
            writeln!(output, "Minimum element: {}", result.min)?;
        }
        OutputFormat::Json => {
            let json = JsonOutput {
                max: result.max,
                min: result.min,
            };
            serde_json::to_writer(&mut *output, &json)?;
            writeln!(output)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_with(input: &str, config: &Config) -> (Result<Report, DriverError>, String) {
        let mut reader = Cursor::new(input.to_string());
        let mut out = Vec::new();
        let result = run(&mut reader, &mut out, config);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn default_config_matches_reference_exchange() {
        let (result, out) = run_with("5 7 2 9 1 8 3 6 4 0\n", &Config::default());
        let report = result.unwrap();
        assert_eq!(report.result, MinMax { min: 0, max: 9 });
        assert_eq!(report.len, 10);
        assert_eq!(
            out,
            "Enter 10 elements of the array:\nMaximum element: 9\nMinimum element: 0\n"
        );
    }

    #[test]
    fn json_output_lists_max_first() {
        let config = Config {
            prompt: false,
            format: OutputFormat::Json,
            ..Config::default()
        };
        let (result, out) = run_with("5 7 2 9 1 8 3 6 4 0", &config);
        assert!(result.is_ok());
        assert_eq!(out, "{\"max\":9,\"min\":0}\n");
    }

    #[test]
    fn custom_count_reads_that_many() {
        let config = Config {
            count: 3,
            ..Config::default()
        };
        let (result, out) = run_with("-4\n12\n7\n", &config);
        assert_eq!(result.unwrap().result, MinMax { min: -4, max: 12 });
        assert!(out.starts_with("Enter 3 elements of the array:\n"));
    }

    #[test]
    fn zero_count_is_rejected_before_prompting() {
        let config = Config {
            count: 0,
            ..Config::default()
        };
        let (result, out) = run_with("1 2 3", &config);
        assert!(matches!(result, Err(DriverError::EmptySequence)));
        assert!(out.is_empty());
    }

    #[test]
    fn malformed_input_fails_after_prompt_without_results() {
        let (result, out) = run_with("1 2 x", &Config::default());
        assert!(matches!(
            result,
            Err(DriverError::Input(InputError::InvalidToken { position: 3, .. }))
        ));
        assert_eq!(out, "Enter 10 elements of the array:\n");
    }

    #[test]
    fn report_counts_fewer_comparisons_than_naive() {
        let report = evaluate(&[5, 7, 2, 9, 1, 8, 3, 6, 4, 0], Evaluator::Sequential).unwrap();
        assert_eq!(report.comparisons, Comparisons(14));
        assert_eq!(report.naive_comparisons, Comparisons(18));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_evaluator_agrees() {
        let values = [5, 7, 2, 9, 1, 8, 3, 6, 4, 0];
        let sequential = evaluate(&values, Evaluator::Sequential).unwrap();
        let parallel = evaluate(&values, Evaluator::Parallel).unwrap();
        assert_eq!(sequential, parallel);
    }
}
