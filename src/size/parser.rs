//! Parser for `objdump -t` symbol-table output.
//!
//! The dump is positional text: an address column, an optional run of
//! single-character flag columns, then section, size, and name. Any
//! line that does not match this shape is a fatal parse error; there
//! is no partial recovery.

use crate::error::HarnessError;

/// Fixed number of header lines before the first symbol record.
pub const HEADER_LINES: usize = 4;

/// Fixed number of trailer lines after the last symbol record.
pub const FOOTER_LINES: usize = 3;

/// One validated line of the symbol table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolRecord {
    /// Symbol address.
    pub address: u64,
    /// Flag columns between the address and the section, if any.
    pub flags: Vec<String>,
    /// Section the symbol lives in (`.text`, `*ABS*`, ...).
    pub section: String,
    /// Symbol size in bytes.
    pub size: u64,
    /// Demangled symbol name; empty for section entries.
    pub name: String,
}

/// Parse a complete `objdump -t` dump into symbol records.
///
/// Skips the fixed header and footer, then requires every remaining
/// line to parse.
pub fn parse_symbol_table(output: &str) -> Result<Vec<SymbolRecord>, HarnessError> {
    let lines: Vec<&str> = output.split('\n').collect();

    if lines.len() < HEADER_LINES + FOOTER_LINES {
        return Err(HarnessError::MalformedToolOutput(format!(
            "symbol table dump has {} lines, expected at least {}",
            lines.len(),
            HEADER_LINES + FOOTER_LINES
        )));
    }

    lines[HEADER_LINES..lines.len() - FOOTER_LINES]
        .iter()
        .map(|line| parse_line(line))
        .collect()
}

/// Section and `*ABS*`-style pseudo-section columns both lead with a
/// marker character.
fn is_section_column(column: &str) -> bool {
    column.starts_with('.') || column.starts_with('*')
}

fn malformed(line: &str, why: &str) -> HarnessError {
    HarnessError::MalformedToolOutput(format!("{}: {:?}", why, line))
}

fn parse_line(line: &str) -> Result<SymbolRecord, HarnessError> {
    let columns: Vec<&str> = line.split_whitespace().collect();

    if columns.len() < 3 {
        return Err(malformed(line, "unexpected column count"));
    }

    let address = u64::from_str_radix(columns[0], 16)
        .map_err(|_| malformed(line, "address is not hexadecimal"))?;

    let section_index = columns[1..]
        .iter()
        .position(|c| is_section_column(c))
        .map(|i| i + 1)
        .ok_or_else(|| malformed(line, "no section column"))?;

    let size_column = columns
        .get(section_index + 1)
        .ok_or_else(|| malformed(line, "unexpected column count"))?;
    let size = u64::from_str_radix(size_column, 16)
        .map_err(|_| malformed(line, "size is not hexadecimal"))?;

    Ok(SymbolRecord {
        address,
        flags: columns[1..section_index]
            .iter()
            .map(|c| c.to_string())
            .collect(),
        section: columns[section_index].to_string(),
        size,
        name: columns[section_index + 2..].join(" "),
    })
}
