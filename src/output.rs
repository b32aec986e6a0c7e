//! Presentation of extracted entries: console rendering and clipboard copy.

use crate::clipboard::Clipboard;
use crate::error::{Result, TocError};
use crate::toc::{self, TocEntry};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Console rendering of the table of contents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `[title](#anchor)` link per line
    #[default]
    Plain,
    /// Pretty-printed JSON array of `{ "title", "anchor" }` objects
    Json,
}

/// What to do with the extracted entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    pub alphabetical: bool,
    pub console: bool,
    pub clipboard: bool,
    pub format: OutputFormat,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            alphabetical: false,
            console: true,
            clipboard: true,
            format: OutputFormat::Plain,
        }
    }
}

/// Order the entries, then send them to the enabled sinks.
///
/// The clipboard always receives the plain link rendering, whatever the
/// console format.
pub fn present<W, C>(
    mut entries: Vec<TocEntry>,
    options: &OutputOptions,
    out: &mut W,
    clipboard: &mut C,
) -> Result<()>
where
    W: Write + ?Sized,
    C: Clipboard + ?Sized,
{
    if options.alphabetical {
        toc::sort_alphabetical(&mut entries);
    }

    if options.console {
        write_console(&entries, options.format, out).map_err(|source| TocError::Io {
            path: "<stdout>".into(),
            source,
        })?;
    }

    if options.clipboard {
        clipboard.copy_text(&toc::render_toc(&entries))?;
    }

    Ok(())
}

fn write_console<W: Write + ?Sized>(
    entries: &[TocEntry],
    format: OutputFormat,
    out: &mut W,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Plain => {
            for entry in entries {
                writeln!(out, "{}", entry)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, entries)?;
            writeln!(out)?;
        }
    }
    out.flush()
}
