//! Comparative driver against a scripted process runner.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use present80_harness::output::json;
use present80_harness::{
    run_comparison, tabulate, BenchmarkResult, Candidate, CompareConfig, HarnessError, Metric,
    ProcessRunner,
};

/// Runner that replays queued outputs per program name.
///
/// An exhausted or unknown program simulates a spawn failure.
struct ScriptedRunner {
    queues: Mutex<HashMap<String, Vec<present80_harness::compare::ProcessOutput>>>,
}

impl ScriptedRunner {
    fn new() -> Self {
        Self {
            queues: Mutex::new(HashMap::new()),
        }
    }

    fn enqueue(&self, program: &str, output: present80_harness::compare::ProcessOutput) {
        self.queues
            .lock()
            .unwrap()
            .entry(program.to_string())
            .or_default()
            .push(output);
    }
}

impl ProcessRunner for ScriptedRunner {
    fn run(
        &self,
        program: &str,
        _args: &[String],
        _cwd: &Path,
    ) -> io::Result<present80_harness::compare::ProcessOutput> {
        let mut queues = self.queues.lock().unwrap();
        match queues.get_mut(program) {
            Some(queue) if !queue.is_empty() => Ok(queue.remove(0)),
            _ => Err(io::Error::new(io::ErrorKind::NotFound, "no such program")),
        }
    }
}

fn ok(stdout: &str) -> present80_harness::compare::ProcessOutput {
    present80_harness::compare::ProcessOutput {
        success: true,
        code: Some(0),
        stdout: stdout.to_string(),
        stderr: String::new(),
    }
}

fn failed(stderr: &str) -> present80_harness::compare::ProcessOutput {
    present80_harness::compare::ProcessOutput {
        success: false,
        code: Some(1),
        stdout: String::new(),
        stderr: stderr.to_string(),
    }
}

fn candidate(name: &str, build: &str, bench: &str) -> Candidate {
    Candidate {
        name: name.to_string(),
        build_dir: PathBuf::from("."),
        build_command: vec![build.to_string()],
        bench_dir: PathBuf::from("."),
        bench_command: vec![bench.to_string(), "json".to_string()],
    }
}

fn payload(avg_us: f64, total_s: f64) -> String {
    let result = BenchmarkResult::from_timings(10, 10, total_s * 1e9, avg_us * 1e3 * 100.0);
    json::to_json(&result).unwrap()
}

#[test]
fn measures_every_candidate_in_order() {
    let runner = ScriptedRunner::new();
    runner.enqueue("build-a", ok(""));
    runner.enqueue("build-b", ok(""));
    for i in 0..3 {
        runner.enqueue("bench-a", ok(&payload(1.0 + i as f64, 2.0)));
        runner.enqueue("bench-b", ok(&payload(4.0 + i as f64, 3.0)));
    }

    let config = CompareConfig::new(vec![
        candidate("A", "build-a", "bench-a"),
        candidate("B", "build-b", "bench-b"),
    ])
    .repetitions(3);

    let outcome = run_comparison(&runner, &config);

    assert!(outcome.skipped.is_empty());
    assert_eq!(outcome.series.len(), 2);
    assert!(outcome.series.iter().all(|s| s.results.len() == 3));

    let table = tabulate(&outcome, Metric::AvgEncryptionTimeUs);
    assert_eq!(table.columns, vec!["A", "B"]);
    assert_eq!(table.rows[2][1], Some(6.0));
}

#[test]
fn a_failed_build_skips_only_that_candidate() {
    let runner = ScriptedRunner::new();
    runner.enqueue("build-a", failed("missing toolchain"));
    runner.enqueue("build-b", ok(""));
    for _ in 0..2 {
        runner.enqueue("bench-b", ok(&payload(2.5, 1.0)));
    }

    let config = CompareConfig::new(vec![
        candidate("A", "build-a", "bench-a"),
        candidate("B", "build-b", "bench-b"),
    ])
    .repetitions(2);

    let outcome = run_comparison(&runner, &config);

    assert_eq!(outcome.skipped.len(), 1);
    assert_eq!(outcome.skipped[0].0, "A");
    assert!(matches!(
        outcome.skipped[0].1,
        HarnessError::BuildFailed { .. }
    ));

    // The failed candidate is absent from the table; the survivor's
    // column is complete.
    let table = tabulate(&outcome, Metric::TotalTimeSecs);
    assert_eq!(table.columns, vec!["B"]);
    assert_eq!(table.rows.len(), 2);
    assert!(table.rows.iter().all(|row| row[0] == Some(1.0)));
}

#[test]
fn a_bad_repetition_leaves_a_hole_not_a_crash() {
    let runner = ScriptedRunner::new();
    runner.enqueue("build-a", ok(""));
    runner.enqueue("bench-a", ok(&payload(1.5, 2.0)));
    runner.enqueue("bench-a", ok("this is not a payload"));
    runner.enqueue("bench-a", ok(&payload(1.7, 2.1)));

    let config = CompareConfig::new(vec![candidate("A", "build-a", "bench-a")]).repetitions(3);

    let outcome = run_comparison(&runner, &config);
    let series = &outcome.series[0];

    assert_eq!(series.results.len(), 3);
    assert!(series.results[0].is_some());
    assert!(series.results[1].is_none());
    assert!(series.results[2].is_some());

    let csv = tabulate(&outcome, Metric::AvgEncryptionTimeUs).to_csv();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[1], "#1,1.50");
    assert_eq!(lines[2], "#2,");
    assert_eq!(lines[3], "#3,1.70");
}

#[test]
fn a_spawn_failure_on_build_skips_the_candidate() {
    let runner = ScriptedRunner::new();
    // Nothing queued: every invocation fails like a missing binary.
    let config = CompareConfig::new(vec![candidate("A", "build-a", "bench-a")]).repetitions(2);

    let outcome = run_comparison(&runner, &config);
    assert!(outcome.series.is_empty());
    assert_eq!(outcome.skipped.len(), 1);
}
