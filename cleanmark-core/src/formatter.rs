//! formatter.rs - Tag-boundary re-indentation of cleaned markup.
//!
//! Splits the markup on tag boundaries and rebuilds it line by line: block
//! tags each get their own line and drive an indent counter (floored at
//! zero), inline tags and text stay in the current line, and whitespace
//! that only exists as earlier formatting is normalized away so repeated
//! passes are stable.
//!
//! License: MIT OR Apache-2.0

use lazy_static::lazy_static;
use regex::Regex;

/// Tags that open/close an indented line of their own.
const BLOCK_TAGS: &[&str] = &[
    "div", "p", "h1", "h2", "h3", "h4", "h5", "h6", "ul", "ol", "li", "blockquote", "section",
    "article", "header", "footer", "main", "nav", "aside", "form", "fieldset", "table", "thead",
    "tbody", "tfoot", "tr", "td", "th",
];

/// Void elements: no closing tag, never affect the indent counter.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

lazy_static! {
    static ref TAG_TOKEN_RE: Regex =
        Regex::new(r"<[^>]+>").expect("TAG_TOKEN_RE: hardcoded regex is valid");
    static ref NEWLINE_RUN_RE: Regex =
        Regex::new(r"\s*\n\s*").expect("NEWLINE_RUN_RE: hardcoded regex is valid");
    static ref BLANK_LINES_RE: Regex =
        Regex::new(r"\n(?:[ \t]*\n)+").expect("BLANK_LINES_RE: hardcoded regex is valid");
}

enum Token<'a> {
    Tag(&'a str),
    Text(&'a str),
}

/// Re-indents `html` with `indent_size` tabs per nesting level.
pub(crate) fn reindent(html: &str, indent_size: usize) -> String {
    let unit = "\t".repeat(indent_size.max(1));
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut depth: usize = 0;

    for token in tokenize(html) {
        match token {
            Token::Tag(raw) => {
                let name = tag_name(raw);
                let closing = raw.starts_with("</");
                let voidish = raw.ends_with("/>") || VOID_TAGS.contains(&name.as_str());

                if BLOCK_TAGS.contains(&name.as_str()) {
                    flush(&mut lines, &mut current);
                    if closing {
                        depth = depth.saturating_sub(1);
                        lines.push(format!("{}{}", unit.repeat(depth), raw));
                    } else {
                        lines.push(format!("{}{}", unit.repeat(depth), raw));
                        if !voidish {
                            depth += 1;
                        }
                    }
                } else {
                    if current.is_empty() {
                        current.push_str(&unit.repeat(depth));
                    }
                    current.push_str(raw);
                }
            }
            Token::Text(text) => {
                if text.trim().is_empty() {
                    continue;
                }
                let text = NEWLINE_RUN_RE.replace_all(text, " ");
                if current.is_empty() {
                    current.push_str(&unit.repeat(depth));
                    current.push_str(text.trim_start());
                } else {
                    current.push_str(&text);
                }
            }
        }
    }
    flush(&mut lines, &mut current);

    let joined = lines.join("\n");
    BLANK_LINES_RE
        .replace_all(&joined, "\n")
        .trim_matches('\n')
        .to_string()
}

fn flush(lines: &mut Vec<String>, current: &mut String) {
    if !current.trim().is_empty() {
        lines.push(current.trim_end().to_string());
    }
    current.clear();
}

fn tokenize(html: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut last = 0;
    for m in TAG_TOKEN_RE.find_iter(html) {
        if m.start() > last {
            tokens.push(Token::Text(&html[last..m.start()]));
        }
        tokens.push(Token::Tag(m.as_str()));
        last = m.end();
    }
    if last < html.len() {
        tokens.push(Token::Text(&html[last..]));
    }
    tokens
}

fn tag_name(raw: &str) -> String {
    raw.trim_start_matches('<')
        .trim_start_matches('/')
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indents_blocks_and_keeps_inline_runs_together() {
        let out = reindent("<ul><li>Brush <strong>twice</strong> daily.</li></ul>", 1);
        assert_eq!(
            out,
            "<ul>\n\t<li>\n\t\tBrush <strong>twice</strong> daily.\n\t</li>\n</ul>"
        );
    }

    #[test]
    fn respects_indent_size() {
        let out = reindent("<div><p>x</p></div>", 2);
        assert_eq!(out, "<div>\n\t\t<p>\n\t\t\t\tx\n\t\t</p>\n</div>");
    }

    #[test]
    fn void_and_self_closing_tags_do_not_indent() {
        let out = reindent("<div><br><p>x</p></div>", 1);
        // br is inline-ish: it stays in the flow, never changes depth.
        assert!(out.contains("<br>"));
        assert!(out.ends_with("</div>"));
        assert!(!out.contains("\t\t\t"));
    }

    #[test]
    fn unbalanced_close_tags_floor_at_zero() {
        let out = reindent("</div></div><p>x</p>", 1);
        assert!(out.contains("<p>"));
        assert!(out.contains("\tx"));
    }

    #[test]
    fn reindent_is_stable() {
        let html = "<div><h3>4. <strong>Care</strong></h3><ul><li>a</li><li>b</li></ul></div>";
        let once = reindent(html, 1);
        assert_eq!(reindent(&once, 1), once);
    }
}
