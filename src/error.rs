//! Error types for table-of-contents generation.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a run before a table of contents is produced.
///
/// Heading extraction itself never fails; these errors come from the
/// surrounding input, output and configuration layers.
#[derive(Debug, Error)]
pub enum TocError {
    /// The target path does not exist.
    #[error("Invalid path or destination: {}", .0.display())]
    InvalidPath(PathBuf),

    /// The target exists but is not a `.md` / `.markdown` file.
    #[error("Expected file format is '.md' or '.markdown': {}", .0.display())]
    NotMarkdown(PathBuf),

    /// The file could not be opened or read.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Extraction produced no entries.
    #[error("No Headers found.")]
    NoHeadingsFound,

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

/// A requested heading level outside `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("[-w] Invalid argument: {0}")]
    OutOfRange(i64),
}

pub type Result<T> = std::result::Result<T, TocError>;
