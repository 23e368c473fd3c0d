//! Custom cargo commands for the simile crate.
//!
//! Usage:
//!   cargo xtask verify          - Run full verification suite
//!   cargo xtask test            - Run all tests
//!   cargo xtask check           - Quick check (check + test + clippy)
//!   cargo xtask bench           - Run benchmarks
//!   cargo xtask fuzz [SECONDS]  - Run every fuzz target for a while

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Fuzz targets declared in fuzz/Cargo.toml
const FUZZ_TARGETS: &[&str] = &["edit_distance", "word_alignment", "term_vector"];

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => {
            let seconds = match args.next() {
                Some(raw) => raw
                    .parse()
                    .with_context(|| format!("Invalid fuzz duration {:?}", raw))?,
                None => 30,
            };
            fuzz(seconds)?;
        }
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (contracts + tests + clippy + no-default-features build)
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
  fuzz      Run each fuzz target for N seconds (default 30, needs cargo-fuzz)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("simile Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking contract call sites...");
    check_contract_calls()?;
    println!("✓ Contracts wired in\n");

    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Building library without the CLI...");
    run_cargo(&["build", "--quiet", "--lib", "--no-default-features"])?;
    println!("✓ Library builds without CLI dependencies\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

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

/// Run every fuzz target for a fixed time
fn fuzz(seconds: u64) -> Result<()> {
    let fuzz_dir = project_root()?.join("fuzz");
    let max_time = format!("-max_total_time={}", seconds);

    for (i, target) in FUZZ_TARGETS.iter().enumerate() {
        println!("[{}/{}] fuzzing {} for {}s...", i + 1, FUZZ_TARGETS.len(), target, seconds);
        let status = Command::new("cargo")
            .args(["+nightly", "fuzz", "run", target, "--", &max_time])
            .current_dir(&fuzz_dir)
            .status()
            .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;

        if !status.success() {
            bail!("fuzz target {} failed", target);
        }
    }

    println!("\n✓ No fuzz failures");
    Ok(())
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

/// Each distance module must call into `contracts`, so the debug checks run
/// under the test suite.
fn check_contract_calls() -> Result<()> {
    let root = project_root()?;

    for file in [
        "src/distance/levenshtein.rs",
        "src/distance/damerau.rs",
        "src/distance/words.rs",
        "src/vsm.rs",
    ] {
        let source = std::fs::read_to_string(root.join(file))
            .with_context(|| format!("Failed to read {}", file))?;
        if !source.contains("contracts::") {
            bail!("{} no longer calls any contract check", file);
        }
    }

    Ok(())
}
