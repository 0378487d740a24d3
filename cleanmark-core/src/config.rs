//! Configuration management for `CleanMark-core`.
//!
//! This module defines the `CleanerConfig` value struct that controls one
//! sanitization run, the two named presets used by the editor (paste-time
//! and final-save), and loading of partial YAML configs that merge over the
//! documented defaults.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Options for a single cleaning run.
///
/// A pure value: the engine never mutates it and never retains it past one
/// call. Every field is an independent toggle unless noted. Deserialization
/// is partial-merge: any field missing from a YAML/fragment config takes its
/// documented default, so callers can override just the flags they care
/// about.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CleanerConfig {
    /// Strip every element attribute not listed in `allowed_attributes`.
    pub remove_attributes: bool,
    /// Attribute names kept when `remove_attributes` is on.
    pub allowed_attributes: Vec<String>,
    /// Always drop `style` attributes, even if allow-listed.
    pub remove_inline_styles: bool,
    /// Always drop `class` and `id` attributes, even if allow-listed.
    pub remove_classes_and_ids: bool,
    /// Collapse runs of two or more `&nbsp;` into a single space.
    pub remove_successive_nbsp: bool,
    /// Remove "spacer" elements whose entire text content is one `&nbsp;`.
    pub remove_tags_with_only_nbsp: bool,
    /// Unwrap `<span>` elements, keeping their children in place.
    pub remove_span_tags: bool,
    /// Delete `<img>` elements entirely.
    pub remove_images: bool,
    /// Unwrap `<a>` elements, keeping the link text.
    pub remove_links: bool,
    /// Delete the table tag family (`table` through `th`) entirely.
    pub remove_tables: bool,
    /// Remove all comment nodes.
    pub remove_comments: bool,
    /// Escape `& < > " '` outside existing tags and entities (best-effort).
    pub encode_special_chars: bool,
    /// Re-indent the cleaned markup with one tag or text run per line.
    pub format_with_line_breaks: bool,
    /// Tab-repeat count per indent level. Must be at least 1.
    pub indent_size: usize,
    /// Informational allow-list of tags this configuration expects to keep.
    /// Not enforced as a removal filter; only `allowed_attributes` is
    /// enforced per element.
    pub allowed_tags: Vec<String>,
    /// Run the structural converter when the input contains no tags.
    pub convert_plain_text_to_html: bool,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            remove_attributes: true,
            allowed_attributes: string_vec(&[
                "href", "src", "alt", "title", "target", "rel", "colspan", "rowspan",
            ]),
            remove_inline_styles: true,
            remove_classes_and_ids: true,
            remove_successive_nbsp: true,
            remove_tags_with_only_nbsp: true,
            remove_span_tags: true,
            remove_images: false,
            remove_links: false,
            remove_tables: false,
            remove_comments: true,
            encode_special_chars: false,
            format_with_line_breaks: true,
            indent_size: 1,
            allowed_tags: string_vec(&[
                "h1", "h2", "h3", "h4", "h5", "h6", "p", "div", "ul", "ol", "li",
                "strong", "em", "br", "a", "blockquote", "table", "thead", "tbody",
                "tr", "td", "th", "img", "footer",
            ]),
            convert_plain_text_to_html: false,
        }
    }
}

impl CleanerConfig {
    /// Preset applied to pasted content: keeps links and tables, converts
    /// plain-text paste payloads into structured HTML, and strips images.
    pub fn paste() -> Self {
        Self {
            remove_images: true,
            convert_plain_text_to_html: true,
            ..Self::default()
        }
    }

    /// Preset applied by the debounced cleanup before content is handed
    /// back to the host for saving: keeps links, tables and images; no
    /// plain-text conversion, no character encoding.
    pub fn final_save() -> Self {
        Self::default()
    }

    /// Loads a (possibly partial) cleaner configuration from a YAML file.
    /// Missing fields keep their documented defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading cleaner config from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: CleanerConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()?;
        debug!("Loaded cleaner config from {}.", path.display());
        Ok(config)
    }

    /// Validates configuration integrity.
    pub fn validate(&self) -> Result<()> {
        if self.indent_size == 0 {
            return Err(anyhow!("`indent_size` must be a positive integer"));
        }
        if self.remove_attributes && self.allowed_attributes.is_empty() {
            warn!("`remove_attributes` is on with an empty allow-list; all attributes will be stripped.");
        }
        Ok(())
    }

    /// True when any of the element-level passes needs a parsed tree.
    pub(crate) fn needs_dom_pass(&self) -> bool {
        self.remove_attributes
            || self.remove_inline_styles
            || self.remove_classes_and_ids
            || self.remove_span_tags
            || self.remove_images
            || self.remove_links
            || self.remove_tables
            || self.remove_comments
    }
}

fn string_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
