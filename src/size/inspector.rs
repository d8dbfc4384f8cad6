//! Section filtering and size summation.

use std::path::{Path, PathBuf};

use crate::compare::{ProcessOutput, ProcessRunner};
use crate::error::HarnessError;
use crate::size::parser::{parse_symbol_table, SymbolRecord};

/// A compiled artifact whose symbol table can be dumped.
#[derive(Debug, Clone)]
pub struct ModuleArtifact {
    /// Directory containing the artifact.
    pub dir: PathBuf,
    /// Artifact file name.
    pub file: String,
    /// Whether to ask the dump tool to demangle symbol names.
    pub demangle: bool,
}

impl ModuleArtifact {
    /// The C kernel module.
    pub fn c() -> Self {
        Self {
            dir: PathBuf::from("../c/"),
            file: "c_misc_dev.ko".to_string(),
            demangle: false,
        }
    }

    /// The Rust kernel module. Symbol names are mangled, so the dump
    /// is demangled.
    pub fn rust() -> Self {
        Self {
            dir: PathBuf::from("../rust/"),
            file: "rust_misc_dev.ko".to_string(),
            demangle: true,
        }
    }
}

/// Which sections to count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionFilter {
    /// Every section (`"*"`).
    All,
    /// Sections whose name contains any of the given substrings.
    Substrings(Vec<String>),
}

impl SectionFilter {
    /// Filter on a list of section-name substrings.
    pub fn substrings(names: &[&str]) -> Self {
        SectionFilter::Substrings(names.iter().map(|n| n.to_string()).collect())
    }

    /// Whether `section` matches this filter.
    pub fn matches(&self, section: &str) -> bool {
        match self {
            SectionFilter::All => true,
            SectionFilter::Substrings(names) => names.iter().any(|n| section.contains(n.as_str())),
        }
    }
}

/// Matching records and their summed size.
///
/// Zero-size records are excluded from both the listing and the sum.
#[derive(Debug, Clone)]
pub struct SizeReport {
    /// Matching nonzero-size records, in dump order.
    pub records: Vec<SymbolRecord>,
    /// Sum of the record sizes in bytes.
    pub total: u64,
}

/// Invokes the symbol-dump tool and sums matching sections.
#[derive(Debug, Clone)]
pub struct SizeInspector<R: ProcessRunner> {
    runner: R,
}

impl<R: ProcessRunner> SizeInspector<R> {
    /// Inspector over the given process runner.
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Dump `artifact`'s symbol table and sum the sizes of records
    /// whose section matches `filter`.
    pub fn size_of(
        &self,
        artifact: &ModuleArtifact,
        filter: &SectionFilter,
    ) -> Result<SizeReport, HarnessError> {
        let output = self.dump(artifact)?;
        let records = parse_symbol_table(&output.stdout)?;

        let records: Vec<SymbolRecord> = records
            .into_iter()
            .filter(|r| r.size > 0 && filter.matches(&r.section))
            .collect();
        let total = records.iter().map(|r| r.size).sum();

        Ok(SizeReport { records, total })
    }

    fn dump(&self, artifact: &ModuleArtifact) -> Result<ProcessOutput, HarnessError> {
        let mut args = vec!["-t".to_string(), artifact.file.clone()];
        if artifact.demangle {
            args.push("--demangle".to_string());
        }

        let output = self
            .runner
            .run("objdump", &args, Path::new(&artifact.dir))
            .map_err(|e| HarnessError::MalformedToolOutput(format!("objdump: {}", e)))?;

        if !output.success {
            return Err(HarnessError::MalformedToolOutput(format!(
                "objdump exited with status {:?}: {}",
                output.code,
                output.stderr.trim()
            )));
        }

        Ok(output)
    }
}
