//! Error taxonomy for the scan pipeline.
//!
//! Discovery failures are fatal to the whole run; parse and write failures
//! are diagnosed and recovered per file.

use std::path::PathBuf;
use thiserror::Error;

/// Root traversal failed. Fatal: the run aborts before any file is
/// processed and no report is written.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("scan root is not a directory: {}", .0.display())]
    MissingRoot(PathBuf),
    #[error("invalid scan pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("failed to read directory entry: {0}")]
    Walk(#[from] glob::GlobError),
}

/// One file's text could not be structurally parsed. The file is skipped
/// and the run continues.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unterminated block comment")]
    UnterminatedComment,
    #[error("unterminated annotation arguments")]
    UnterminatedAnnotation,
    #[error("unbalanced braces")]
    UnbalancedBraces,
    #[error("unsupported file type: {}", .0.display())]
    UnsupportedFile(PathBuf),
}

/// The report artifact could not be written after a file. The in-memory
/// record list is preserved and the next successful write catches up.
#[derive(Debug, Error)]
#[error("failed to write report {}: {}", .path.display(), .source)]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
