//! Comparative benchmark driver.
//!
//! Builds each candidate implementation, runs its benchmark entry
//! point as a subprocess a fixed number of times, and tabulates the
//! parsed results into a comparison report. Candidates run strictly
//! sequentially; overlapping them would let CPU contention skew the
//! measured timings.

mod driver;
mod process;
mod report;

pub use driver::{run_comparison, Candidate, CandidateSeries, CompareConfig, ComparisonOutcome};
pub use process::{ProcessOutput, ProcessRunner, SystemRunner};
pub use report::{tabulate, ComparisonTable, Metric};
