//! text.rs - String-level cleaning passes.
//!
//! These passes run on the serialized markup after the element-level work:
//! collapsing `&nbsp;` runs, dropping nbsp-only "spacer" elements injected
//! by rich-text sources, and the best-effort special-character encoding.
//!
//! License: MIT OR Apache-2.0

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    /// Two or more consecutive `&nbsp;` (entity or raw U+00A0), optionally
    /// separated by whitespace.
    static ref NBSP_RUN_RE: Regex = Regex::new(r"(?:(?:&nbsp;|\x{A0})\s*){2,}")
        .expect("NBSP_RUN_RE: hardcoded regex is valid");

    /// A tag pair whose entire text content is nbsp (whitespace-tolerant).
    /// Tag-name equality is checked in code; the regex crate has no
    /// backreferences.
    static ref NBSP_ONLY_TAG_RE: Regex = Regex::new(
        r"<([a-zA-Z][a-zA-Z0-9]*)[^>]*>(?:\s*(?:&nbsp;|\x{A0}))+\s*</([a-zA-Z][a-zA-Z0-9]*)>"
    )
    .expect("NBSP_ONLY_TAG_RE: hardcoded regex is valid");

    /// A complete entity: `&name;`, `&#1234;` or `&#x1F9B7;`.
    static ref ENTITY_RE: Regex =
        Regex::new(r"^&(?:[a-zA-Z][a-zA-Z0-9]{1,15};|#[0-9]{1,7};|#x[0-9a-fA-F]{1,6};)")
            .expect("ENTITY_RE: hardcoded regex is valid");
}

/// Collapses runs of two or more `&nbsp;` into a single plain space.
/// A lone `&nbsp;` is left alone.
pub(crate) fn collapse_successive_nbsp(html: &str) -> String {
    NBSP_RUN_RE.replace_all(html, " ").into_owned()
}

/// Removes any element pair whose entire text content is nbsp. Runs to a
/// fixpoint (bounded) so spacers nested directly inside spacers also go.
pub(crate) fn remove_nbsp_only_tags(html: &str) -> String {
    let mut current = html.to_string();
    for _ in 0..8 {
        let next = NBSP_ONLY_TAG_RE
            .replace_all(&current, |caps: &Captures| {
                if caps[1].eq_ignore_ascii_case(&caps[2]) {
                    String::new()
                } else {
                    caps[0].to_string()
                }
            })
            .into_owned();
        if next == current {
            break;
        }
        current = next;
    }
    current
}

/// Escapes `& < > " '` to entities, skipping characters inside a tag
/// delimiter and `&` occurrences that already start a complete entity.
///
/// This is a substring lookahead heuristic, not a parse: a `<` is treated
/// as a tag opener when followed by a letter, `/` or `!`, and a bare
/// `&amp` without its `;` is re-escaped. Both behaviors are intentional.
pub(crate) fn encode_special_chars(html: &str) -> String {
    let mut out = String::with_capacity(html.len() + 16);
    let mut in_tag = false;

    for (idx, ch) in html.char_indices() {
        match ch {
            '<' => {
                if !in_tag && starts_tag(&html[idx + 1..]) {
                    in_tag = true;
                    out.push('<');
                } else if in_tag {
                    out.push('<');
                } else {
                    out.push_str("&lt;");
                }
            }
            '>' => {
                if in_tag {
                    in_tag = false;
                    out.push('>');
                } else {
                    out.push_str("&gt;");
                }
            }
            '&' if !in_tag => {
                if ENTITY_RE.is_match(&html[idx..]) {
                    out.push('&');
                } else {
                    out.push_str("&amp;");
                }
            }
            '"' if !in_tag => out.push_str("&quot;"),
            '\'' if !in_tag => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn starts_tag(rest: &str) -> bool {
    matches!(
        rest.chars().next(),
        Some(c) if c.is_ascii_alphabetic() || c == '/' || c == '!'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_nbsp_runs_to_one_space() {
        assert_eq!(collapse_successive_nbsp("a&nbsp;&nbsp;&nbsp;b"), "a b");
        assert_eq!(collapse_successive_nbsp("a&nbsp; &nbsp;b"), "a b");
        // A single nbsp is not touched.
        assert_eq!(collapse_successive_nbsp("a&nbsp;b"), "a&nbsp;b");
    }

    #[test]
    fn removes_spacer_tags() {
        assert_eq!(
            remove_nbsp_only_tags("<p>keep</p><div>&nbsp;</div><p>keep</p>"),
            "<p>keep</p><p>keep</p>"
        );
        assert_eq!(
            remove_nbsp_only_tags("<div> &nbsp; </div>"),
            ""
        );
        // An element with real text survives.
        assert_eq!(
            remove_nbsp_only_tags("<p>a&nbsp;b</p>"),
            "<p>a&nbsp;b</p>"
        );
    }

    #[test]
    fn mismatched_pair_is_left_alone() {
        let html = "<div>&nbsp;</p>";
        assert_eq!(remove_nbsp_only_tags(html), html);
    }

    #[test]
    fn encodes_outside_tags_only() {
        assert_eq!(
            encode_special_chars("<p>Tom & \"Jerry\"</p>"),
            "<p>Tom &amp; &quot;Jerry&quot;</p>"
        );
    }

    #[test]
    fn keeps_existing_entities_and_reescapes_incomplete_ones() {
        assert_eq!(encode_special_chars("a &amp; b"), "a &amp; b");
        assert_eq!(encode_special_chars("a &#x1F9B7; b"), "a &#x1F9B7; b");
        // A bare `&amp` without `;` is treated as a plain ampersand.
        assert_eq!(encode_special_chars("a &amp b"), "a &amp;amp b");
    }

    #[test]
    fn stray_angle_brackets_are_escaped() {
        assert_eq!(encode_special_chars("1 < 2 > 0"), "1 &lt; 2 &gt; 0");
    }
}
