//! Module-size entry point.
//!
//! Dumps the symbol table of a compiled kernel-module artifact and
//! prints grouped section breakdowns (`c`, `rust`) or the full
//! per-section listing (`c-all`, `rust-all`).

use std::env;
use std::process;

use present80_harness::output::terminal;
use present80_harness::{HarnessError, ModuleArtifact, SectionFilter, SizeInspector, SystemRunner};

/// Section groups reported by the non-`all` keywords.
const SECTION_GROUPS: [&[&str]; 4] = [
    &[".text"],
    &[".data", ".rodata"],
    &[".bss"],
    &[".debug"],
];

fn main() {
    let keyword = env::args().nth(1).unwrap_or_default();

    let (artifact, breakdown_only) = match keyword.as_str() {
        "c" => (ModuleArtifact::c(), false),
        "c-all" => (ModuleArtifact::c(), true),
        "rust" => (ModuleArtifact::rust(), false),
        "rust-all" => (ModuleArtifact::rust(), true),
        _ => {
            println!("Usage: module_size <c | rust | c-all | rust-all>");
            println!("Example: module_size rust");
            return;
        }
    };

    let inspector = SizeInspector::new(SystemRunner::new());

    let outcome = if breakdown_only {
        print_all(&inspector, &artifact)
    } else {
        print_grouped(&inspector, &artifact)
    };

    if let Err(err) = outcome {
        eprintln!("size inspection failed: {}", err);
        process::exit(1);
    }
}

fn print_all(
    inspector: &SizeInspector<SystemRunner>,
    artifact: &ModuleArtifact,
) -> Result<(), HarnessError> {
    let report = inspector.size_of(artifact, &SectionFilter::All)?;
    print!("{}", terminal::format_size_breakdown(&report));
    Ok(())
}

fn print_grouped(
    inspector: &SizeInspector<SystemRunner>,
    artifact: &ModuleArtifact,
) -> Result<(), HarnessError> {
    for group in SECTION_GROUPS {
        let report = inspector.size_of(artifact, &SectionFilter::substrings(group))?;
        print!("{}", terminal::format_size_breakdown(&report));
    }

    let all = inspector.size_of(artifact, &SectionFilter::All)?;
    println!("Total size of all sections in the module: {}", all.total);
    Ok(())
}
