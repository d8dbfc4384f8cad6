//! Build → benchmark → collect, one candidate at a time.

use std::path::{Path, PathBuf};

use crate::compare::process::{ProcessOutput, ProcessRunner};
use crate::error::HarnessError;
use crate::stats::BenchmarkResult;

/// One implementation under comparison.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Display name, also the column header in the report.
    pub name: String,
    /// Working directory for the build/start action.
    pub build_dir: PathBuf,
    /// Build/start command, program first.
    pub build_command: Vec<String>,
    /// Working directory for the benchmark subprocess.
    pub bench_dir: PathBuf,
    /// Benchmark command, program first; must emit the structured
    /// payload on stdout.
    pub bench_command: Vec<String>,
}

impl Candidate {
    /// Candidate whose module is built in `build_dir` by `./run` and
    /// measured with the shared benchmark binary in machine-readable
    /// mode.
    pub fn module(name: impl Into<String>, build_dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            build_dir: build_dir.into(),
            build_command: vec!["./run".to_string()],
            bench_dir: PathBuf::from("."),
            bench_command: vec!["./benchmark".to_string(), "json".to_string()],
        }
    }
}

/// Configuration for a comparative run.
#[derive(Debug, Clone)]
pub struct CompareConfig {
    /// Benchmark repetitions per candidate (default: 5).
    pub repetitions: usize,
    /// Candidates in measurement order.
    pub candidates: Vec<Candidate>,
}

impl CompareConfig {
    /// Configuration over an explicit candidate list.
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self {
            repetitions: 5,
            candidates,
        }
    }

    /// Set the repetition count.
    pub fn repetitions(mut self, n: usize) -> Self {
        self.repetitions = n;
        self
    }
}

impl Default for CompareConfig {
    /// The repository's shown instance: the C and Rust kernel modules.
    fn default() -> Self {
        Self::new(vec![
            Candidate::module("C", "../c/"),
            Candidate::module("Rust", "../rust/"),
        ])
    }
}

/// Result series of one candidate.
///
/// `results[i]` is `None` when repetition `i` failed; the remaining
/// repetitions are unaffected.
#[derive(Debug, Clone)]
pub struct CandidateSeries {
    /// Candidate name.
    pub name: String,
    /// One entry per repetition, in order.
    pub results: Vec<Option<BenchmarkResult>>,
}

/// Everything a comparative run produced.
#[derive(Debug)]
pub struct ComparisonOutcome {
    /// Series for every candidate that built successfully.
    pub series: Vec<CandidateSeries>,
    /// Candidates excluded by a failed build, with the failure.
    pub skipped: Vec<(String, HarnessError)>,
}

/// Run the comparison protocol against every configured candidate.
///
/// A failed build skips that candidate only; a failed repetition
/// leaves a hole in that candidate's series only. The function itself
/// never fails; partial results are the point.
pub fn run_comparison<R: ProcessRunner>(runner: &R, config: &CompareConfig) -> ComparisonOutcome {
    let mut series = Vec::new();
    let mut skipped = Vec::new();

    for candidate in &config.candidates {
        println!("Benchmarking {}...", candidate.name);

        if let Err(err) = build(runner, candidate) {
            eprintln!("{} skipped: {}", candidate.name, err);
            skipped.push((candidate.name.clone(), err));
            continue;
        }

        let mut results = Vec::with_capacity(config.repetitions);

        for i in 0..config.repetitions {
            match bench_once(runner, candidate) {
                Ok(result) => {
                    results.push(Some(result));
                    println!("Benchmark #{} completed.", i + 1);
                }
                Err(err) => {
                    eprintln!("Benchmark #{} failed: {}", i + 1, err);
                    results.push(None);
                }
            }
        }

        series.push(CandidateSeries {
            name: candidate.name.clone(),
            results,
        });
        println!();
    }

    ComparisonOutcome { series, skipped }
}

fn build<R: ProcessRunner>(runner: &R, candidate: &Candidate) -> Result<(), HarnessError> {
    let output = invoke(runner, &candidate.build_command, &candidate.build_dir).map_err(
        |detail| HarnessError::BuildFailed {
            name: candidate.name.clone(),
            detail,
        },
    )?;

    if !output.success {
        return Err(HarnessError::BuildFailed {
            name: candidate.name.clone(),
            detail: exit_detail(&output),
        });
    }

    Ok(())
}

fn bench_once<R: ProcessRunner>(
    runner: &R,
    candidate: &Candidate,
) -> Result<BenchmarkResult, HarnessError> {
    let output = invoke(runner, &candidate.bench_command, &candidate.bench_dir)
        .map_err(HarnessError::MalformedToolOutput)?;

    if !output.success {
        return Err(HarnessError::MalformedToolOutput(exit_detail(&output)));
    }

    serde_json::from_str(output.stdout.trim())
        .map_err(|e| HarnessError::MalformedToolOutput(format!("benchmark payload: {}", e)))
}

fn invoke<R: ProcessRunner>(
    runner: &R,
    command: &[String],
    cwd: &Path,
) -> Result<ProcessOutput, String> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| "empty command".to_string())?;

    runner
        .run(program, args, cwd)
        .map_err(|e| format!("{}: {}", program, e))
}

fn exit_detail(output: &ProcessOutput) -> String {
    let stderr = output.stderr.trim();
    match (output.code, stderr.is_empty()) {
        (Some(code), true) => format!("exited with status {}", code),
        (Some(code), false) => format!("exited with status {}: {}", code, stderr),
        (None, true) => "terminated by signal".to_string(),
        (None, false) => format!("terminated by signal: {}", stderr),
    }
}
