//! Source file discovery — recursive walk of the scan root.

use crate::error::DiscoveryError;
use std::path::{Path, PathBuf};

/// File name suffix of scanned source files (case-sensitive exact match).
pub const SOURCE_SUFFIX: &str = ".java";

/// Enumerate every regular `.java` file under `root`, at any depth.
///
/// Directories and non-matching files are skipped silently. Any traversal
/// failure (missing root, permission, I/O) is fatal to the whole run, so no
/// partial listing is returned.
pub fn discover(root: &Path) -> Result<Vec<PathBuf>, DiscoveryError> {
    if !root.is_dir() {
        return Err(DiscoveryError::MissingRoot(root.to_path_buf()));
    }

    // The root is literal, not a pattern: escape any glob metacharacters
    // it happens to contain.
    let root_literal = glob::Pattern::escape(&root.display().to_string());
    let pattern = format!("{root_literal}/**/*{SOURCE_SUFFIX}");
    let mut files = Vec::new();
    for entry in glob::glob(&pattern)? {
        let path = entry?;
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}
