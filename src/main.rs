//! jdoc — extract JavaDoc comments from annotated Java sources.
//!
//! Scans the fixed source root for `.java` files, parses each into a
//! declaration tree, reports marker-annotation presence per declaration, and
//! rewrites `javadoc.txt` after each file with every documentation comment
//! collected so far. Paths, marker names, and the scanned suffix are
//! compile-time constants; the binary takes no arguments.

mod classify;
mod discover;
mod error;
mod extract;
mod model;
mod parser;
mod report;

use anyhow::Result;
use clap::Parser;
use std::fs;
use std::path::Path;

/// Root of the scanned source tree, relative to the working directory.
const SCAN_ROOT: &str = "src/main/java";

/// Report artifact, relative to the working directory.
const REPORT_PATH: &str = "javadoc.txt";

#[derive(Parser)]
#[command(
    name = "jdoc",
    version,
    about = "Extract JavaDoc comments from annotated Java sources into a single report"
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    run(Path::new(SCAN_ROOT), Path::new(REPORT_PATH));
    Ok(())
}

/// Drive the pipeline: discovery, then per file parse → classify → extract →
/// rewrite of the report.
///
/// A discovery failure is fatal and leaves no artifact. A parse or write
/// failure is diagnosed and the run continues with the next file; records
/// already accumulated are never lost.
fn run(root: &Path, report_path: &Path) {
    let files = match discover::discover(root) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("error: {e}");
            return;
        }
    };

    let mut records: Vec<model::Record> = Vec::new();
    for path in &files {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("warning: skipping {}: {}", path.display(), e);
                continue;
            }
        };
        match parser::parse_file(path, &content) {
            Ok(unit) => extract::extract_unit(&unit, &mut records),
            Err(e) => {
                eprintln!("warning: skipping {}: {}", path.display(), e);
                continue;
            }
        }
        if let Err(e) = report::write_report(report_path, &records) {
            eprintln!("warning: {e}");
        }
    }
}
