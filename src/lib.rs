//! # mdtoc
//!
//! Builds a markdown table of contents from a document's headings.
//!
//! Every heading outside a backtick fenced code block becomes a clickable
//! anchor link, optionally restricted to a set of heading levels.
//!
//! ## Example
//!
//! ```rust
//! use mdtoc::{HeadingLevelSet, parse_markdown, render_toc};
//!
//! let markdown = "# My project name\nsome text\n## Installation\n\
//!                 ```bash\n# not a heading\n```\n## Usage\n";
//!
//! let entries = parse_markdown(markdown, &HeadingLevelSet::all());
//! assert_eq!(
//!     render_toc(&entries),
//!     "[My project name](#my-project-name)\n[Installation](#installation)\n[Usage](#usage)"
//! );
//! ```

/// Clipboard capability used by the presentation layer.
pub mod clipboard;

/// Configuration module for persisting user preferences.
pub mod config;

pub mod error;

/// Input handling module for stdin and file sources.
///
/// Validates markdown paths and streams their lines into the extractor.
pub mod input;

/// Heading levels and whitelist resolution.
pub mod levels;

pub mod output;

/// Heading extraction from markdown lines.
pub mod parser;

/// Table-of-contents entries and link rendering.
pub mod toc;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::{TocError, Result};
pub use levels::{HeadingLevel, HeadingLevelSet};
pub use parser::{extract_headings, parse_markdown};
pub use toc::{TocEntry, render_toc};
