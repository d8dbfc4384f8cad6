//! Timing statistics and unit conversion.
//!
//! A benchmark run produces two durations: the wall-clock time of the
//! whole run and the accumulated per-encryption time. Both are carried
//! in every unit down to seconds; conversion is pure division with no
//! rounding until presentation.

use serde::{Deserialize, Serialize};

/// A duration expressed in nanoseconds through seconds.
///
/// The field names are part of the structured-output wire format and
/// must not change: the comparative driver parses them back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeBreakdown {
    /// Nanoseconds.
    pub ns: f64,
    /// Microseconds (`ns / 1e3`).
    pub us: f64,
    /// Milliseconds (`ns / 1e6`).
    pub ms: f64,
    /// Seconds (`ns / 1e9`).
    pub s: f64,
}

impl TimeBreakdown {
    /// Convert a nanosecond duration into all reported units.
    pub fn from_ns(ns: f64) -> Self {
        Self {
            ns,
            us: ns / 1e3,
            ms: ns / 1e6,
            s: ns / 1e9,
        }
    }
}

/// Aggregate result of one benchmark run.
///
/// Serialized as the single-line structured payload emitted in `json`
/// mode and parsed back by the comparative benchmark driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Number of keys in the corpus.
    pub total_key: usize,
    /// Number of plaintext blocks in the corpus.
    pub total_plaintext: usize,
    /// Total encryption operations performed (`total_key * total_plaintext`).
    pub total_encryption: usize,
    /// Wall-clock duration of the whole run, including key-set
    /// overhead and endpoint churn.
    pub total_time: TimeBreakdown,
    /// Average duration of a single encryption, measured over the
    /// write+read pair only.
    pub avg_encryption_time: TimeBreakdown,
}

impl BenchmarkResult {
    /// Assemble a result from raw counters.
    ///
    /// `encrypt_time_ns` is the accumulated per-operation sum; the
    /// average is `sum / total_encryption`, or zero for an empty run.
    pub fn from_timings(
        total_key: usize,
        total_plaintext: usize,
        total_time_ns: f64,
        encrypt_time_ns: f64,
    ) -> Self {
        let total_encryption = total_key * total_plaintext;
        let avg_ns = if total_encryption == 0 {
            0.0
        } else {
            encrypt_time_ns / total_encryption as f64
        };

        Self {
            total_key,
            total_plaintext,
            total_encryption,
            total_time: TimeBreakdown::from_ns(total_time_ns),
            avg_encryption_time: TimeBreakdown::from_ns(avg_ns),
        }
    }
}
