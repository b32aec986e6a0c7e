//! Clipboard access.
//!
//! The presentation layer only needs to copy text, so it talks to a
//! [`Clipboard`] rather than the platform directly.

use crate::error::{Result, TocError};

/// Something that can receive the rendered table of contents.
pub trait Clipboard {
    fn copy_text(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard, via arboard.
///
/// The platform handle is opened on first use so that runs which never copy
/// work without a display server.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn copy_text(&mut self, text: &str) -> Result<()> {
        let clipboard = match &mut self.inner {
            Some(clipboard) => clipboard,
            empty => empty.insert(
                arboard::Clipboard::new().map_err(|e| TocError::Clipboard(e.to_string()))?,
            ),
        };

        clipboard
            .set_text(text.to_string())
            .map_err(|e| TocError::Clipboard(e.to_string()))?;
        log::debug!("copied {} bytes to the system clipboard", text.len());
        Ok(())
    }
}

/// Keeps the last copied text in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn copy_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
