//! Table-of-contents entries and their markdown rendering.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One extracted heading: its display title and the anchor it links to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    pub title: String,
    pub anchor: String,
}

impl TocEntry {
    pub fn new(title: impl Into<String>, anchor: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            anchor: anchor.into(),
        }
    }

    /// Build an entry from the whitespace-separated words following a heading marker.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mdtoc::toc::TocEntry;
    /// let entry = TocEntry::from_tokens(["My", "Project", "Name"]);
    /// assert_eq!(entry.title, "My Project Name");
    /// assert_eq!(entry.anchor, "my-project-name");
    /// ```
    pub fn from_tokens<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let words: Vec<&str> = tokens.into_iter().collect();
        Self {
            title: words.join(" "),
            anchor: words.join("-").to_lowercase(),
        }
    }

    /// Markdown link to the heading, e.g. `[Usage](#usage)`.
    pub fn link(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TocEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}](#{})", self.title, self.anchor)
    }
}

/// Anchor slug for a heading title: words joined with hyphens, lowercased.
///
/// ```
/// # use mdtoc::toc::anchor;
/// assert_eq!(anchor("My Project Name"), "my-project-name");
/// assert_eq!(anchor("Setup"), "setup");
/// ```
pub fn anchor(title: &str) -> String {
    TocEntry::from_tokens(title.split_whitespace()).anchor
}

/// Re-sort entries by title. Stable, so equal titles keep document order.
pub fn sort_alphabetical(entries: &mut [TocEntry]) {
    entries.sort_by(|a, b| a.title.cmp(&b.title));
}

/// One link per line, without a trailing newline.
pub fn render_toc(entries: &[TocEntry]) -> String {
    entries
        .iter()
        .map(TocEntry::link)
        .collect::<Vec<_>>()
        .join("\n")
}
