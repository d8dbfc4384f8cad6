//! Benchmark entry point.
//!
//! Runs the full corpus workload against the live register devices and
//! prints either the human-readable block (default) or, with the
//! `json` argument, the single-line structured payload the comparative
//! driver consumes.

use std::env;
use std::process;

use present80_harness::output::{json, terminal};
use present80_harness::{BenchConfig, BenchmarkEngine, CipherClient, MiscDeviceBus};

fn main() {
    let json_mode = env::args().nth(1).map(|arg| arg == "json").unwrap_or(false);

    let client = CipherClient::new(MiscDeviceBus::default());
    let engine = BenchmarkEngine::new(client, BenchConfig::default());

    let result = match engine.run() {
        Ok(result) => result,
        Err(err) => {
            eprintln!("benchmark failed: {}", err);
            process::exit(1);
        }
    };

    if json_mode {
        match json::to_json(&result) {
            Ok(payload) => println!("{}", payload),
            Err(err) => {
                eprintln!("failed to serialize result: {}", err);
                process::exit(1);
            }
        }
    } else {
        print!("{}", terminal::format_benchmark(&result));
    }
}
