//! Conformance entry point.
//!
//! Replays the fixed vector table against the live register devices
//! and prints one block per vector followed by the tally. Mismatches
//! are reported as FAIL and never stop the run; only a device error
//! aborts.

use std::process;

use present80_harness::output::terminal;
use present80_harness::{run_vectors, CipherClient, MiscDeviceBus, VECTORS};

fn main() {
    println!("Total tests: {}\n", VECTORS.len());

    let client = CipherClient::new(MiscDeviceBus::default());

    let report = match run_vectors(&client, &VECTORS) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("conformance run failed: {}", err);
            process::exit(1);
        }
    };

    for (i, outcome) in report.outcomes.iter().enumerate() {
        print!("{}", terminal::format_vector(i, outcome));
        println!();
    }

    print!("{}", terminal::format_conformance_summary(&report));
}
