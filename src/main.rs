//! Sort Property Suite Runner
//!
//! Runs the six property checks against the standard library sort and
//! reports pass/fail per check. The RNG seed is taken from the first
//! command-line argument when given, otherwise drawn from entropy; either
//! way it is printed, so any run can be reproduced exactly.

use std::process::ExitCode;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use sort_props::properties::{
    check_contains_all_elements, check_idempotence, check_length_preservation,
    check_never_decreasing, check_non_decreasing, check_purity, CheckFailure,
};
use sort_props::report::{CheckResult, SuiteReport};
use sort_props::sorter::StdSorter;

fn main() -> ExitCode {
    println!("Sort Property Suite");
    println!("===================\n");

    let args: Vec<String> = std::env::args().collect();
    let seed: u64 = if args.len() > 1 {
        match args[1].parse() {
            Ok(seed) => seed,
            Err(_) => {
                eprintln!("Invalid seed '{}': expected a u64", args[1]);
                return ExitCode::FAILURE;
            }
        }
    } else {
        rand::thread_rng().next_u64()
    };
    println!("Seed: {seed} (pass as first argument to reproduce this run)\n");

    let sorter = StdSorter;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut report = SuiteReport::new();

    run_check(&mut report, "length preservation", || {
        check_length_preservation(&sorter, &mut rng)
    });
    run_check(&mut report, "non-decreasing (weak)", || {
        check_non_decreasing(&sorter, &mut rng)
    });
    run_check(&mut report, "non-decreasing (negated)", || {
        check_never_decreasing(&sorter, &mut rng)
    });
    run_check(&mut report, "element containment", || {
        check_contains_all_elements(&sorter, &mut rng)
    });
    run_check(&mut report, "idempotence", || {
        check_idempotence(&sorter, &mut rng)
    });
    run_check(&mut report, "purity", || check_purity(&sorter, &mut rng));

    println!("{}", report.summary());

    if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Run one check, print its outcome, and record it in the report.
///
/// A failing check never stops the run; the remaining checks still execute
/// with the RNG state they would have seen anyway.
fn run_check<F>(report: &mut SuiteReport, name: &str, check: F)
where
    F: FnOnce() -> Result<(), CheckFailure>,
{
    println!("--- {name} ---");
    let start = Instant::now();
    let outcome = check();
    let duration = start.elapsed();

    match &outcome {
        Ok(()) => println!("OK ({:.3} ms)\n", duration.as_secs_f64() * 1000.0),
        Err(failure) => println!("FAILED: {failure}\n"),
    }

    report.record(CheckResult {
        name: name.to_string(),
        passed: outcome.is_ok(),
        duration,
        detail: outcome.err().map(|f| f.to_string()),
    });
}
