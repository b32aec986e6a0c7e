//! Heading extraction.
//!
//! Walks a markdown document line by line, skipping anything inside
//! backtick fenced code blocks, and turns every heading whose marker is in
//! the requested [`HeadingLevelSet`] into a [`TocEntry`].
//!
//! This is deliberately not a markdown parser: fences are a plain toggle on
//! lines starting with three backticks, and headings are recognized by their
//! first whitespace-separated token only.

pub mod utils;

use crate::levels::HeadingLevelSet;
use crate::toc::TocEntry;
use std::io::BufRead;

/// Line-at-a-time extraction state.
///
/// Feed lines in document order; each call returns the entry for that line,
/// if any. Useful when lines arrive lazily, e.g. from a reader.
#[derive(Debug, Clone)]
pub struct Extractor<'a> {
    levels: &'a HeadingLevelSet,
    in_fence: bool,
}

impl<'a> Extractor<'a> {
    pub fn new(levels: &'a HeadingLevelSet) -> Self {
        Self {
            levels,
            in_fence: false,
        }
    }

    /// Whether the last line fed left an unclosed fence open.
    pub fn in_fence(&self) -> bool {
        self.in_fence
    }

    pub fn feed(&mut self, line: &str) -> Option<TocEntry> {
        if utils::is_fence(line) {
            self.in_fence = !self.in_fence;
            return None;
        }
        if self.in_fence {
            return None;
        }

        let (marker, words) = utils::split_heading(line)?;
        if !self.levels.contains_marker(marker) {
            return None;
        }
        Some(TocEntry::from_tokens(words))
    }
}

/// Extract table-of-contents entries from a sequence of lines, in document order.
///
/// # Examples
///
/// ```
/// use mdtoc::levels::HeadingLevelSet;
/// use mdtoc::parser::extract_headings;
///
/// let lines = ["# Title", "```sh", "# comment", "```", "## Usage"];
/// let entries = extract_headings(lines, &HeadingLevelSet::all());
/// let links: Vec<_> = entries.iter().map(|e| e.link()).collect();
/// assert_eq!(links, ["[Title](#title)", "[Usage](#usage)"]);
/// ```
pub fn extract_headings<I, S>(lines: I, levels: &HeadingLevelSet) -> Vec<TocEntry>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut extractor = Extractor::new(levels);
    lines
        .into_iter()
        .filter_map(|line| extractor.feed(line.as_ref()))
        .collect()
}

/// Extract entries from markdown content held in memory.
pub fn parse_markdown(content: &str, levels: &HeadingLevelSet) -> Vec<TocEntry> {
    extract_headings(content.lines(), levels)
}

/// Extract entries from a buffered reader, one line at a time.
///
/// # Errors
///
/// Returns the first read error, including invalid UTF-8.
pub fn parse_reader<R: BufRead>(reader: R, levels: &HeadingLevelSet) -> std::io::Result<Vec<TocEntry>> {
    let mut extractor = Extractor::new(levels);
    let mut entries = Vec::new();

    for line in reader.lines() {
        if let Some(entry) = extractor.feed(&line?) {
            entries.push(entry);
        }
    }

    Ok(entries)
}
