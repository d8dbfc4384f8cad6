//! Human-readable terminal formatting.

use colored::Colorize;

use crate::conformance::{ConformanceReport, VectorOutcome};
use crate::size::SizeReport;
use crate::stats::BenchmarkResult;

/// Width of the title column in padded rows.
const TITLE_WIDTH: usize = 22;

/// A row with the title left-justified to a fixed column width.
pub fn padded(title: &str, text: &str) -> String {
    format!("{:<width$}{}", title, text, width = TITLE_WIDTH)
}

/// Lowercase hex rendering of a byte string.
pub fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Format a benchmark result as the default human-readable block.
pub fn format_benchmark(result: &BenchmarkResult) -> String {
    let mut out = String::new();

    out.push_str(&padded("TOTAL KEY", &result.total_key.to_string()));
    out.push('\n');
    out.push_str(&padded("TOTAL PLAINTEXT", &result.total_plaintext.to_string()));
    out.push('\n');
    out.push_str(&padded("TOTAL ENCRYPTION", &result.total_encryption.to_string()));
    out.push('\n');
    out.push_str(&padded(
        "TOTAL TIME",
        &format!("{:.2}sec / {:.2}ms", result.total_time.s, result.total_time.ms),
    ));
    out.push('\n');
    out.push_str(&padded(
        "AVG. ENCRYPTION TIME",
        &format!(
            "{:.2}ns / {:.2}us",
            result.avg_encryption_time.ns, result.avg_encryption_time.us
        ),
    ));
    out.push('\n');

    out
}

/// Format one conformance vector block: inputs, expectation, observed
/// result, and the colored verdict.
pub fn format_vector(index: usize, outcome: &VectorOutcome) -> String {
    let mut out = String::new();

    out.push_str(&format!("[Test {}]\n", index + 1));
    out.push_str(&padded("Key:", &hex(&outcome.vector.key)));
    out.push('\n');
    out.push_str(&padded("Plaintext:", &hex(&outcome.vector.plaintext)));
    out.push('\n');
    out.push_str(&padded("Ciphertext:", &hex(&outcome.vector.ciphertext)));
    out.push('\n');

    let observed = outcome
        .observed
        .as_deref()
        .map(hex)
        .unwrap_or_else(|| "-".to_string());
    out.push_str(&padded("Result:", &observed));
    out.push('\n');
    out.push('\n');

    if outcome.passed() {
        out.push_str(&format!("{}\n", "TEST SUCCESS!".green().bold()));
    } else {
        out.push_str(&format!("{}\n", "TEST FAILED!".red().bold()));
    }

    out
}

/// Format the final conformance tally.
pub fn format_conformance_summary(report: &ConformanceReport) -> String {
    format!(
        "Total: {}  Passed: {}  Failed: {}\n",
        report.total(),
        report.passed(),
        report.failed()
    )
}

/// Format a per-section size breakdown with its grand total.
///
/// Empty reports produce no output, matching the zero-size exclusion
/// rule.
pub fn format_size_breakdown(report: &SizeReport) -> String {
    if report.records.is_empty() {
        return String::new();
    }

    let mut out = String::new();

    out.push_str(&format!("{:<32}{:<8}{}\n", "[Section]", "[Size]", "[Name]"));
    for record in &report.records {
        out.push_str(&format!(
            " {:<32}{:<8}{}\n",
            record.section, record.size, record.name
        ));
    }

    out.push('\n');
    out.push_str(&format!("Total size: {}\n", report.total));
    out.push('\n');

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conformance::VECTORS;
    use crate::size::SymbolRecord;

    #[test]
    fn padded_rows_align_at_the_title_width() {
        let row = padded("TOTAL KEY", "1000");
        assert_eq!(row, "TOTAL KEY             1000");
    }

    #[test]
    fn hex_is_lowercase_and_zero_padded() {
        assert_eq!(hex(&[0x00, 0x0f, 0xab]), "000fab");
        assert_eq!(hex(&VECTORS[0].ciphertext), "5579c1387b228445");
    }

    #[test]
    fn benchmark_block_lists_every_row() {
        let result = BenchmarkResult::from_timings(1_000, 1_000, 3.21e9, 1.2e9);
        let block = format_benchmark(&result);

        assert!(block.contains("TOTAL KEY             1000"));
        assert!(block.contains("TOTAL ENCRYPTION      1000000"));
        assert!(block.contains("TOTAL TIME            3.21sec"));
        assert!(block.contains("AVG. ENCRYPTION TIME  1200.00ns / 1.20us"));
    }

    #[test]
    fn empty_size_report_prints_nothing() {
        let report = SizeReport {
            records: Vec::new(),
            total: 0,
        };
        assert_eq!(format_size_breakdown(&report), "");
    }

    #[test]
    fn size_breakdown_ends_with_the_total() {
        let report = SizeReport {
            records: vec![SymbolRecord {
                address: 0x10,
                flags: vec!["g".to_string(), "F".to_string()],
                section: ".text".to_string(),
                size: 0x24,
                name: "init_module".to_string(),
            }],
            total: 0x24,
        };

        let block = format_size_breakdown(&report);
        assert!(block.starts_with("[Section]"));
        assert!(block.contains(" .text"));
        assert!(block.contains("init_module"));
        assert!(block.contains("Total size: 36"));
    }
}
