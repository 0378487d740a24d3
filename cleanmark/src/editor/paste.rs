// cleanmark/src/editor/paste.rs
//! Paste payload handling.
//!
//! A paste event carries up to two clipboard flavors plus the gesture hint
//! that distinguishes a "paste as plain text" from a rich paste.

/// Clipboard content delivered by the host surface on a paste event.
#[derive(Debug, Clone, Default)]
pub struct PastePayload {
    /// The `text/html` flavor, when the source offered one.
    pub html: Option<String>,
    /// The `text/plain` flavor.
    pub plain: Option<String>,
    /// True for the "paste as plain text" gesture.
    pub plain_text_gesture: bool,
}

impl PastePayload {
    /// Picks the raw content for this paste: the plain-text gesture forces
    /// paragraph conversion of the plain flavor; a rich paste prefers the
    /// html flavor and falls back to plain.
    pub(crate) fn raw_content(&self) -> String {
        if self.plain_text_gesture {
            self.plain
                .as_deref()
                .map(plain_text_to_paragraphs)
                .unwrap_or_default()
        } else {
            self.html
                .clone()
                .or_else(|| self.plain.clone())
                .unwrap_or_default()
        }
    }
}

/// Wraps each non-blank trimmed line in its own `<p>`, after normalizing
/// line endings.
pub fn plain_text_to_paragraphs(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| format!("<p>{line}</p>"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_each_line_and_drops_blanks() {
        assert_eq!(
            plain_text_to_paragraphs("one\r\n\r\n  two  \n\nthree"),
            "<p>one</p><p>two</p><p>three</p>"
        );
        assert_eq!(plain_text_to_paragraphs("\n \n"), "");
    }

    #[test]
    fn rich_paste_prefers_html_flavor() {
        let payload = PastePayload {
            html: Some("<p>rich</p>".to_string()),
            plain: Some("plain".to_string()),
            plain_text_gesture: false,
        };
        assert_eq!(payload.raw_content(), "<p>rich</p>");
    }

    #[test]
    fn plain_gesture_ignores_html_flavor() {
        let payload = PastePayload {
            html: Some("<p>rich</p>".to_string()),
            plain: Some("a\nb".to_string()),
            plain_text_gesture: true,
        };
        assert_eq!(payload.raw_content(), "<p>a</p><p>b</p>");
    }
}
