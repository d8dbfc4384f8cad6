//! Code-size inspection of compiled module artifacts.
//!
//! Invokes an external symbol-table dump (`objdump -t`), parses its
//! tabular text into validated records, and sums the sizes of the
//! sections a caller asks about.

mod inspector;
mod parser;

pub use inspector::{ModuleArtifact, SectionFilter, SizeInspector, SizeReport};
pub use parser::{parse_symbol_table, SymbolRecord, HEADER_LINES, FOOTER_LINES};
