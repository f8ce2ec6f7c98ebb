//! Custom cargo commands for the extrema crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask kani      - Run Kani model checking proofs
//!   cargo xtask check     - Quick check (no Kani)
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("kani") => kani()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (tests + clippy + Kani + constant alignment)
  test      Run all Rust tests
  kani      Run Kani proofs only
  check     Quick check (cargo test + clippy, no Kani)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("extrema Verification Suite");
    println!("==========================================\n");

    println!("[1/5] Checking contract markers...");
    check_contract_markers()?;
    println!("✓ Contract markers present\n");

    println!("[2/5] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    run_cargo(&["test", "--quiet", "--no-default-features"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/5] Running Kani proofs...");
    kani()?;
    println!("✓ Kani proofs pass\n");

    println!("[5/5] Verifying constant alignment with kani-proofs...");
    verify_constants()?;
    println!("✓ Constants aligned\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Run Kani proofs in the standalone proof crate
fn kani() -> Result<()> {
    let kani_dir = project_root()?.join("kani-proofs");
    if !kani_dir.exists() {
        println!("  (no kani-proofs directory, skipping)");
        return Ok(());
    }

    let status = Command::new("cargo")
        .arg("kani")
        .current_dir(&kani_dir)
        .status()
        .context("Failed to run cargo kani (install with: cargo install --locked kani-verifier)")?;

    if !status.success() {
        bail!("Kani proofs failed");
    }

    Ok(())
}

/// Quick check (no Kani)
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn check_contract_markers() -> Result<()> {
    let root = project_root()?;
    let contracts = std::fs::read_to_string(root.join("src/contracts.rs"))
        .context("Failed to read src/contracts.rs")?;

    let count = contracts.matches("Contract violation:").count();

    if count < 6 {
        bail!(
            "Expected at least 6 contract assertions, found {}. Someone may have removed a check!",
            count
        );
    }

    Ok(())
}

/// The proof crate re-declares the default count; it must match the driver.
fn verify_constants() -> Result<()> {
    let root = project_root()?;

    let driver = std::fs::read_to_string(root.join("src/driver.rs"))
        .context("Failed to read src/driver.rs")?;
    let rust_count = extract_const(&driver, "DEFAULT_COUNT")
        .context("DEFAULT_COUNT not found in src/driver.rs")?;

    let proofs_path = root.join("kani-proofs/src/lib.rs");
    if !proofs_path.exists() {
        println!("  (no kani-proofs/src/lib.rs, skipping constant check)");
        return Ok(());
    }
    let proofs = std::fs::read_to_string(&proofs_path).context("Failed to read kani-proofs")?;
    let proof_count = extract_const(&proofs, "DEFAULT_COUNT")
        .context("DEFAULT_COUNT not found in kani-proofs/src/lib.rs")?;

    if rust_count != proof_count {
        bail!(
            "src/driver.rs DEFAULT_COUNT={} != kani-proofs DEFAULT_COUNT={}",
            rust_count,
            proof_count
        );
    }

    Ok(())
}

fn extract_const(content: &str, name: &str) -> Option<usize> {
    // Look for "pub const NAME: usize = 10;"
    let needle = format!("const {}:", name);
    content
        .lines()
        .find(|line| line.contains(&needle))
        .and_then(|line| line.split('=').nth(1))
        .map(|rhs| rhs.trim().trim_end_matches(';').trim().replace('_', ""))
        .and_then(|num| num.parse().ok())
}
