// cleanmark/src/utils/clipboard.rs
//! Clipboard access behind a narrow trait, so the editor controller can be
//! driven with a fake in tests and the system backend stays feature-gated.

use anyhow::Result;

/// Read side of the clipboard, used by the plain-text-paste shortcut.
pub trait ClipboardRead {
    fn read_text(&mut self) -> Result<String>;
}

/// System clipboard backed by `arboard`.
#[cfg(feature = "clipboard")]
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

#[cfg(feature = "clipboard")]
impl SystemClipboard {
    pub fn new() -> Result<Self> {
        Ok(Self {
            inner: arboard::Clipboard::new()?,
        })
    }
}

#[cfg(feature = "clipboard")]
impl ClipboardRead for SystemClipboard {
    fn read_text(&mut self) -> Result<String> {
        Ok(self.inner.get_text()?)
    }
}

/// Copies `content` to the system clipboard (used by `clean --clipboard`).
#[cfg(feature = "clipboard")]
pub fn copy_to_clipboard(content: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(content)?;
    Ok(())
}

#[cfg(not(feature = "clipboard"))]
pub fn copy_to_clipboard(_content: &str) -> Result<()> {
    anyhow::bail!("cleanmark was built without clipboard support")
}
