//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::io::Write;
use std::process::{Command, Output, Stdio};

// Re-export canonical test utilities from extrema::testing
pub use extrema::testing::{
    as_input_line, brute_force_min_max, brute_force_range, leaf_coverage, REFERENCE_SEQUENCE,
};

/// Run the extrema binary with `args`, feeding `stdin` to it.
pub fn run_extrema(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_extrema"))
        .args(args)
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run extrema");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("failed to write stdin");

    child.wait_with_output().expect("failed to wait for extrema")
}

/// Assert that a result agrees with the brute-force oracle over `[low, high]`.
pub fn assert_matches_oracle(seq: &[i64], low: usize, high: usize, got: extrema::MinMax<i64>) {
    let expected = brute_force_range(seq, low, high);
    assert_eq!(
        got, expected,
        "range [{}, {}] of {:?}: got {:?}, expected {:?}",
        low, high, seq, got, expected
    );
}
