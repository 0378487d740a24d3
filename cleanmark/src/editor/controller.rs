// cleanmark/src/editor/controller.rs
//! Dual-mode editor controller.
//!
//! Owns the visual/html buffer pair for one logical document, intercepts
//! paste payloads, and schedules the debounced cleanup that runs after a
//! quiet second of editing. The controller is tick-driven: the host loop
//! passes the current `Instant` into `edit` and `on_tick`, so there is no
//! hidden timer and tests can drive a fake clock.
//!
//! Invariants: outside an in-flight edit both buffers hold the same string,
//! and at most one cleanup deadline is pending; every new edit replaces it
//! (trailing-edge debounce).

use std::time::{Duration, Instant};

use cleanmark_core::{clean_for_final_save, clean_for_paste, CleanerConfig};
use log::{debug, warn};
use tokio::sync::mpsc;

use crate::editor::paste::{plain_text_to_paragraphs, PastePayload};
use crate::utils::clipboard::ClipboardRead;

/// Quiet period after the last edit before the final-save cleanup runs.
pub const CLEANUP_DEBOUNCE: Duration = Duration::from_millis(1000);

/// The two editing surfaces over one logical document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Visual,
    Html,
}

/// Policy for merging pasted content into the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasteMode {
    /// Overwrite the whole buffer. The default: inserting at an unknown
    /// cursor offset under a re-rendered surface risks corrupting structure.
    #[default]
    Replace,
    /// Append the cleaned fragment after a newline.
    Insert,
}

/// Controller options supplied by the host surface.
#[derive(Debug, Clone)]
pub struct EditorOptions {
    /// Master switch for paste-time and debounce-time cleaning.
    pub auto_clean: bool,
    pub paste_mode: PasteMode,
    /// Whether the host renders a read-only preview pane. Pass-through;
    /// the controller itself does nothing with it.
    pub show_preview: bool,
    /// Accepted for forward compatibility; not yet threaded into the
    /// internal clean calls, which use the named presets.
    pub cleaner_options: Option<CleanerConfig>,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            auto_clean: true,
            paste_mode: PasteMode::Replace,
            show_preview: false,
            cleaner_options: None,
        }
    }
}

/// State machine owning the buffer pair and the pending cleanup deadline.
pub struct EditorController {
    visual_value: String,
    html_value: String,
    mode: EditorMode,
    options: EditorOptions,
    cleanup_due: Option<Instant>,
    change_tx: Option<mpsc::Sender<String>>,
}

impl EditorController {
    pub fn new(initial: &str, options: EditorOptions) -> Self {
        Self {
            visual_value: initial.to_string(),
            html_value: initial.to_string(),
            mode: EditorMode::Visual,
            options,
            cleanup_due: None,
            change_tx: None,
        }
    }

    /// Registers a channel notified with the new value on every change the
    /// controller produces (edits, pastes, debounced cleanups).
    pub fn set_change_tx(&mut self, tx: mpsc::Sender<String>) {
        self.change_tx = Some(tx);
    }

    /// The current document. Both buffers agree outside an in-flight edit.
    pub fn value(&self) -> &str {
        &self.visual_value
    }

    pub fn visual_value(&self) -> &str {
        &self.visual_value
    }

    pub fn html_value(&self) -> &str {
        &self.html_value
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    /// External value change: both buffers reset to the new value, no merge
    /// (last-writer-wins from the host).
    pub fn set_value(&mut self, next: &str) {
        self.visual_value = next.to_string();
        self.html_value = next.to_string();
    }

    /// An edit on either surface: both buffers update immediately, the
    /// change propagates out, and the cleanup deadline restarts.
    pub fn edit(&mut self, mode: EditorMode, next: &str, now: Instant) {
        self.mode = mode;
        self.visual_value = next.to_string();
        self.html_value = next.to_string();
        self.notify();
        if self.options.auto_clean {
            self.cleanup_due = Some(now + CLEANUP_DEBOUNCE);
        }
    }

    /// Switching surfaces force-resyncs the buffer being switched *to* from
    /// the one being switched away from, so the views never diverge.
    pub fn switch_tab(&mut self, to: EditorMode) {
        if to != self.mode {
            match to {
                EditorMode::Html => self.html_value = self.visual_value.clone(),
                EditorMode::Visual => self.visual_value = self.html_value.clone(),
            }
            self.mode = to;
        }
    }

    /// Host tick. Runs the debounced final-save cleanup once the quiet
    /// period has elapsed; returns true when a cleanup changed the buffers.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        let due = match self.cleanup_due {
            Some(due) if now >= due => due,
            _ => return false,
        };
        self.cleanup_due = None;
        if !self.options.auto_clean {
            return false;
        }
        debug!("Debounced cleanup firing ({:?} after last edit)", now - due + CLEANUP_DEBOUNCE);

        let cleaned = clean_for_final_save(&self.visual_value);
        if cleaned != self.visual_value {
            self.visual_value = cleaned.clone();
            self.html_value = cleaned;
            self.notify();
            return true;
        }
        false
    }

    /// A paste on the visual surface (the host suppresses the default
    /// browser insertion and hands the payload here).
    pub fn paste(&mut self, payload: &PastePayload) {
        let raw = payload.raw_content();
        if raw.is_empty() {
            return;
        }
        let content = if self.options.auto_clean {
            clean_for_paste(&raw)
        } else {
            raw
        };
        self.apply_paste(content);
    }

    /// The explicit "paste as plain text" shortcut: reads the clipboard
    /// directly, converts to paragraphs, cleans, applies. A failed read is
    /// logged and mutates nothing; the user retries.
    pub fn paste_plain_from_clipboard(&mut self, clipboard: &mut dyn ClipboardRead) {
        let text = match clipboard.read_text() {
            Ok(text) => text,
            Err(err) => {
                warn!("Clipboard read failed; leaving buffers untouched: {err}");
                return;
            }
        };
        let converted = plain_text_to_paragraphs(&text);
        if converted.is_empty() {
            return;
        }
        let content = if self.options.auto_clean {
            clean_for_paste(&converted)
        } else {
            converted
        };
        self.apply_paste(content);
    }

    fn apply_paste(&mut self, fragment: String) {
        let next = match self.options.paste_mode {
            PasteMode::Replace => fragment,
            PasteMode::Insert => format!("{}\n{}", self.visual_value, fragment),
        };
        self.visual_value = next.clone();
        self.html_value = next;
        self.notify();
    }

    fn notify(&self) {
        if let Some(tx) = &self.change_tx {
            let _ = tx.try_send(self.visual_value.clone());
        }
    }
}
