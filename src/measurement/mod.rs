//! Timed execution of the benchmark workload.
//!
//! The measured interval covers only the write+read pair of each
//! encryption; endpoint open/close and key-set cost are excluded from
//! the per-operation samples but included in the total run duration,
//! which is intentionally coarser.

use std::time::Instant;

use crate::config::BenchConfig;
use crate::corpus;
use crate::device::{CipherClient, RegisterBus};
use crate::error::HarnessError;
use crate::stats::BenchmarkResult;

/// Measure a single closure invocation in nanoseconds.
///
/// The timestamp is taken immediately before and immediately after the
/// call; nothing else runs inside the measured interval.
#[inline]
pub fn time_ns<T>(f: impl FnOnce() -> T) -> (T, u64) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed().as_nanos() as u64)
}

/// Runs the full cross-product workload against one implementation.
///
/// All operations are synchronous and single-threaded: every
/// encryption completes before the next begins, so samples never
/// overlap.
pub struct BenchmarkEngine<B: RegisterBus> {
    client: CipherClient<B>,
    config: BenchConfig,
}

impl<B: RegisterBus> BenchmarkEngine<B> {
    /// Engine over the given client and configuration.
    pub fn new(client: CipherClient<B>, config: BenchConfig) -> Self {
        Self { client, config }
    }

    /// Generate a fresh corpus and run the benchmark.
    ///
    /// For each key: open a session, set the key once, then encrypt
    /// every plaintext, timing only the encrypt call. Any client
    /// error aborts the run and propagates unchanged; there are no
    /// retries.
    pub fn run(&self) -> Result<BenchmarkResult, HarnessError> {
        let keys = corpus::generate_keys(self.config.total_keys);
        let plaintexts = corpus::generate_plaintexts(self.config.total_plaintexts);

        let run_start = Instant::now();
        let mut encrypt_time_ns: u128 = 0;

        for key in &keys {
            let mut session = self.client.session()?;
            session.set_key(key)?;

            for plaintext in &plaintexts {
                let (result, elapsed) = time_ns(|| session.encrypt(plaintext));
                result?;
                encrypt_time_ns += u128::from(elapsed);
            }
            // Session drop closes both endpoints before the next key.
        }

        let total_time_ns = run_start.elapsed().as_nanos();

        Ok(BenchmarkResult::from_timings(
            self.config.total_keys,
            self.config.total_plaintexts,
            total_time_ns as f64,
            encrypt_time_ns as f64,
        ))
    }
}
