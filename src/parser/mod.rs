//! Parser module — dispatch by file extension.

pub mod java;

use crate::error::ParseError;
use crate::model::ParsedUnit;
use std::path::Path;

/// Parse a source file into a ParsedUnit based on its extension.
pub fn parse_file(path: &Path, content: &str) -> Result<ParsedUnit, ParseError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("java") => java::parse(content),
        _ => Err(ParseError::UnsupportedFile(path.to_path_buf())),
    }
}
