//! Report artifact writer.
//!
//! The full accumulated record list is rewritten after every processed file,
//! create-or-truncate, as one buffered write. This trades I/O volume for
//! crash resilience: an interrupted run still leaves a valid report covering
//! every file that completed before the interruption.

use crate::error::WriteError;
use crate::model::Record;
use std::fs;
use std::path::Path;

/// Serialize the entire record list to `path`, overwriting prior content.
pub fn write_report(path: &Path, records: &[Record]) -> Result<(), WriteError> {
    let mut out = String::new();
    for record in records {
        out.push_str(&record.render());
        out.push('\n');
    }
    fs::write(path, out).map_err(|source| WriteError {
        path: path.to_path_buf(),
        source,
    })
}
