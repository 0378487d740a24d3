//! Defines the cleaning pipeline and its public entry points.
//!
//! The pipeline runs in a fixed order, each stage gated by its config flag:
//! plain-text structural conversion, the element-level passes (attributes,
//! tag families, comments), then the string-level passes (nbsp collapsing,
//! spacer removal, character encoding, re-indentation).
//!
//! The public `clean` call is fail-safe, not fail-fast: any internal error
//! logs a warning and returns the original input unchanged, so a bad
//! fragment can never block an editing flow.
//!
//! License: MIT OR Apache-2.0

use log::{debug, warn};

use crate::config::CleanerConfig;
use crate::errors::CleanError;
use crate::{dom, formatter, text};

/// Cleans `html` according to `config`. Never fails and never panics on
/// malformed input; the worst case is the input coming back unchanged.
pub fn clean(html: &str, config: &CleanerConfig) -> String {
    match try_clean(html, config) {
        Ok(cleaned) => cleaned,
        Err(err) => {
            warn!("Cleaning failed; returning content unchanged: {err}");
            html.to_string()
        }
    }
}

/// `clean` with the paste preset: keeps links and tables, converts
/// plain-text payloads into structured HTML, strips images.
pub fn clean_for_paste(html: &str) -> String {
    clean(html, &CleanerConfig::paste())
}

/// `clean` with the final-save preset. Idempotent: cleaning already-clean
/// content yields it back byte for byte.
pub fn clean_for_final_save(html: &str) -> String {
    clean(html, &CleanerConfig::final_save())
}

fn try_clean(html: &str, config: &CleanerConfig) -> Result<String, CleanError> {
    let mut content = html.to_string();

    if config.convert_plain_text_to_html && !cleanmark_structure::looks_like_html(content.trim()) {
        debug!("Input has no tags; running structural conversion.");
        content = cleanmark_structure::convert_plain_text_to_html(&content);
    }

    if config.needs_dom_pass() {
        content = dom::apply_dom_passes(&content, config)?;
    }

    if config.remove_successive_nbsp {
        content = text::collapse_successive_nbsp(&content);
    }
    if config.remove_tags_with_only_nbsp {
        content = text::remove_nbsp_only_tags(&content);
    }
    if config.encode_special_chars {
        content = text::encode_special_chars(&content);
    }
    if config.format_with_line_breaks {
        content = formatter::reindent(&content, config.indent_size);
    }

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(clean_for_final_save(""), "");
        assert_eq!(clean_for_paste(""), "");
    }

    #[test]
    fn unbalanced_markup_never_panics() {
        let mangled = "<div><p>open<strong>bold</div><td>stray";
        let cleaned = clean_for_final_save(mangled);
        assert!(cleaned.contains("open"));
        assert!(cleaned.contains("bold"));
    }

    #[test]
    fn disabled_flags_leave_content_alone() {
        let config = CleanerConfig {
            remove_attributes: false,
            remove_inline_styles: false,
            remove_classes_and_ids: false,
            remove_span_tags: false,
            remove_comments: false,
            remove_successive_nbsp: false,
            remove_tags_with_only_nbsp: false,
            format_with_line_breaks: false,
            ..CleanerConfig::default()
        };
        let html = r#"<p class="x">a&nbsp;&nbsp;b</p>"#;
        assert_eq!(clean(html, &config), html);
    }
}
