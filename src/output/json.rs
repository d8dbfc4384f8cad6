//! Structured single-line payload for machine consumption.

use crate::stats::BenchmarkResult;

/// Serialize a benchmark result to the compact single-line payload
/// the comparative driver parses.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// `BenchmarkResult`).
pub fn to_json(result: &BenchmarkResult) -> Result<String, serde_json::Error> {
    serde_json::to_string(result)
}

/// Serialize a benchmark result as pretty-printed JSON.
pub fn to_json_pretty(result: &BenchmarkResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_result() -> BenchmarkResult {
        BenchmarkResult::from_timings(1_000, 1_000, 4.2e9, 1.9e9)
    }

    #[test]
    fn payload_is_a_single_line() {
        let json = to_json(&make_result()).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains("\"total_encryption\":1000000"));
        assert!(json.contains("\"total_time\""));
        assert!(json.contains("\"avg_encryption_time\""));
    }

    #[test]
    fn payload_parses_back() {
        let json = to_json(&make_result()).unwrap();
        let parsed: BenchmarkResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.total_key, 1_000);
    }

    #[test]
    fn pretty_payload_has_newlines() {
        let json = to_json_pretty(&make_result()).unwrap();
        assert!(json.contains('\n'));
    }
}
