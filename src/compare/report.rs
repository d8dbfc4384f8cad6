//! Comparison table assembly and CSV serialization.

use crate::compare::driver::ComparisonOutcome;
use crate::stats::BenchmarkResult;

/// Metric extracted from each repetition for tabulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Average per-encryption time, in microseconds.
    AvgEncryptionTimeUs,
    /// Total run duration, in seconds.
    TotalTimeSecs,
}

impl Metric {
    /// Pull this metric out of a benchmark result.
    pub fn extract(&self, result: &BenchmarkResult) -> f64 {
        match self {
            Metric::AvgEncryptionTimeUs => result.avg_encryption_time.us,
            Metric::TotalTimeSecs => result.total_time.s,
        }
    }

    /// Tag used in the output file name, `result_<tag>.csv`.
    pub fn file_tag(&self) -> &'static str {
        match self {
            Metric::AvgEncryptionTimeUs => "avg_enc_time_us",
            Metric::TotalTimeSecs => "total_enc_time_s",
        }
    }
}

/// Tabulated comparison, keyed by run index with one column per
/// candidate that was measured.
#[derive(Debug, Clone)]
pub struct ComparisonTable {
    /// Column headers, one per candidate.
    pub columns: Vec<String>,
    /// One row per repetition; a `None` cell marks a failed
    /// repetition.
    pub rows: Vec<Vec<Option<f64>>>,
}

impl ComparisonTable {
    /// Serialize as CSV: header row `benchmark_no` plus candidate
    /// names, one data row per repetition, cells rounded to two
    /// fraction digits, failed repetitions left empty.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();

        out.push_str("benchmark_no");
        for name in &self.columns {
            out.push(',');
            out.push_str(name);
        }
        out.push('\n');

        for (i, row) in self.rows.iter().enumerate() {
            out.push_str(&format!("#{}", i + 1));
            for cell in row {
                out.push(',');
                if let Some(value) = cell {
                    out.push_str(&format!("{:.2}", value));
                }
            }
            out.push('\n');
        }

        out
    }
}

/// Assemble the comparison table for one metric.
///
/// Skipped candidates are absent; their columns never appear.
pub fn tabulate(outcome: &ComparisonOutcome, metric: Metric) -> ComparisonTable {
    let columns: Vec<String> = outcome.series.iter().map(|s| s.name.clone()).collect();

    let repetitions = outcome
        .series
        .iter()
        .map(|s| s.results.len())
        .max()
        .unwrap_or(0);

    let rows = (0..repetitions)
        .map(|i| {
            outcome
                .series
                .iter()
                .map(|s| {
                    s.results
                        .get(i)
                        .and_then(|r| r.as_ref())
                        .map(|r| metric.extract(r))
                })
                .collect()
        })
        .collect();

    ComparisonTable { columns, rows }
}
