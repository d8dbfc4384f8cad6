//! Comparative benchmark entry point.
//!
//! Builds each candidate module, runs the benchmark subprocess five
//! times per candidate, and writes one CSV comparison artifact per
//! metric. A candidate whose build fails is skipped; its column is
//! absent from the tables.

use std::fs;
use std::process;

use present80_harness::{run_comparison, tabulate, CompareConfig, Metric, SystemRunner};

/// Output file name, parameterized by the metric tag.
const RESULTS_FILE: &str = "result_{}.csv";

fn main() {
    let config = CompareConfig::default();
    let runner = SystemRunner::new();

    let outcome = run_comparison(&runner, &config);

    if outcome.series.is_empty() {
        eprintln!("no candidate produced results");
        process::exit(1);
    }

    for metric in [Metric::AvgEncryptionTimeUs, Metric::TotalTimeSecs] {
        let table = tabulate(&outcome, metric);
        let path = RESULTS_FILE.replace("{}", metric.file_tag());

        if let Err(err) = fs::write(&path, table.to_csv()) {
            eprintln!("failed to write {}: {}", path, err);
            process::exit(1);
        }
    }

    println!("Results are written into the related CSV files.");
}
