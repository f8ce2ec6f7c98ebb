// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the extrema command-line interface.
//!
//! One command, no subcommands. Without flags it behaves like the classic
//! exercise: prompt for ten integers, print the maximum and the minimum. The
//! flags change how many values are read, how the search runs, and how the
//! answer is printed.

pub mod display;

use clap::builder::RangedU64ValueParser;
use clap::Parser;
use extrema::{Config, Evaluator, OutputFormat, DEFAULT_COUNT};

#[derive(Parser, Debug)]
#[command(
    name = "extrema",
    about = "Find the minimum and maximum of a sequence by divide and conquer",
    version
)]
pub struct Cli {
    /// Number of integers to read from stdin
    #[arg(
        short = 'n',
        long,
        default_value_t = DEFAULT_COUNT,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub count: usize,

    /// Split large ranges across threads (sequential without the `parallel` feature)
    #[arg(long)]
    pub parallel: bool,

    /// Print {"max":..,"min":..} instead of labeled lines
    #[arg(long)]
    pub json: bool,

    /// Do not print the input prompt
    #[arg(short, long)]
    pub quiet: bool,

    /// Report comparison counts on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn config(&self) -> Config {
        #[cfg(feature = "parallel")]
        let evaluator = if self.parallel {
            Evaluator::Parallel
        } else {
            Evaluator::Sequential
        };
        #[cfg(not(feature = "parallel"))]
        let evaluator = Evaluator::Sequential;

        Config {
            count: self.count,
            prompt: !self.quiet,
            evaluator,
            format: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
        }
    }
}
