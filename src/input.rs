//! Input handling for file and stdin sources.

use crate::error::{Result, TocError};
use crate::levels::HeadingLevelSet;
use crate::parser;
use crate::toc::TocEntry;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

const MARKDOWN_EXTENSIONS: [&str; 2] = ["md", "markdown"];

/// Where the markdown comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// `-` selects stdin, anything else is a file path.
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(arg.to_path_buf())
        }
    }

    fn display_path(&self) -> PathBuf {
        match self {
            InputSource::File(path) => path.clone(),
            InputSource::Stdin => PathBuf::from("<stdin>"),
        }
    }
}

/// Whether `path` has a `.md` or `.markdown` extension, ignoring case.
///
/// ```
/// # use mdtoc::input::is_markdown_path;
/// # use std::path::Path;
/// assert!(is_markdown_path(Path::new("README.md")));
/// assert!(is_markdown_path(Path::new("notes.MARKDOWN")));
/// assert!(!is_markdown_path(Path::new("notes.txt")));
/// ```
pub fn is_markdown_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            MARKDOWN_EXTENSIONS
                .iter()
                .any(|md| ext.eq_ignore_ascii_case(md))
        })
        .unwrap_or(false)
}

/// Check that `path` exists and names a markdown file.
pub fn validate_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(TocError::InvalidPath(path.to_path_buf()));
    }
    if !is_markdown_path(path) {
        return Err(TocError::NotMarkdown(path.to_path_buf()));
    }
    Ok(())
}

/// Validate the source, then stream it through the heading extractor.
///
/// An empty result is returned as-is; whether that is a failure is up to the
/// caller.
pub fn read_toc(source: &InputSource, levels: &HeadingLevelSet) -> Result<Vec<TocEntry>> {
    let io_error = |err: io::Error| TocError::Io {
        path: source.display_path(),
        source: err,
    };

    let entries = match source {
        InputSource::File(path) => {
            validate_path(path)?;
            log::debug!("reading {}", path.display());
            let file = File::open(path).map_err(io_error)?;
            parser::parse_reader(BufReader::new(file), levels).map_err(io_error)?
        }
        InputSource::Stdin => {
            log::debug!("reading markdown from stdin");
            parser::parse_reader(io::stdin().lock(), levels).map_err(io_error)?
        }
    };

    log::debug!("extracted {} entries with levels {}", entries.len(), levels);
    Ok(entries)
}
