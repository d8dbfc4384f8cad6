//! # present80-harness
//!
//! Measurement and conformance harness for a fixed-block cipher exposed
//! through a stateful, file-like register interface: a key register
//! taking exactly 10 bytes and an encrypt register taking an 8-byte
//! block and yielding the 8-byte ciphertext on read-back.
//!
//! The harness provides:
//! - functional verification against known `(key, plaintext,
//!   ciphertext)` vectors,
//! - per-operation latency and aggregate throughput measurement over
//!   large synthetic corpora,
//! - a comparative driver that builds, runs, and tabulates multiple
//!   independently built implementations of the same interface,
//! - code-size inspection of the compiled module artifacts.
//!
//! The cipher itself is an opaque black box behind the register
//! protocol; the harness never computes a ciphertext on its own.
//!
//! ## Quick start
//!
//! ```ignore
//! use present80_harness::{BenchConfig, BenchmarkEngine, CipherClient, MiscDeviceBus};
//!
//! let client = CipherClient::new(MiscDeviceBus::default());
//! let result = BenchmarkEngine::new(client, BenchConfig::default()).run()?;
//! println!("{:.2}us per encryption", result.avg_encryption_time.us);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod error;
mod stats;

pub mod compare;
pub mod conformance;
pub mod corpus;
pub mod device;
pub mod measurement;
pub mod output;
pub mod size;

pub use compare::{
    run_comparison, tabulate, Candidate, CompareConfig, ComparisonTable, Metric, ProcessRunner,
    SystemRunner,
};
pub use config::BenchConfig;
pub use conformance::{run_vectors, ConformanceReport, ConformanceVector, VECTORS};
pub use device::{
    CipherClient, CipherSession, InMemoryBus, MiscDeviceBus, RegisterBus, RegisterEndpoint,
    BLOCK_SIZE, KEY_SIZE,
};
pub use error::HarnessError;
pub use measurement::BenchmarkEngine;
pub use size::{ModuleArtifact, SectionFilter, SizeInspector};
pub use stats::{BenchmarkResult, TimeBreakdown};
