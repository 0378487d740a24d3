// cleanmark-structure/src/markers.rs
//! Compiled marker patterns shared by the parser.
//!
//! The converter recognizes a small, fixed marker grammar: a `##` document
//! title, `### N.` numbered sections, `#### X.` lettered subsections,
//! `- ` bullets, `> ` quotes, `---` rules and `|`-delimited table rows.
//!
//! License: MIT OR Apache-2.0

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Anything that looks like markup. Input matching this is passed
    /// through untouched by the converter.
    pub(crate) static ref TAG_RE: Regex =
        Regex::new(r"</?[a-zA-Z][^>]*>").expect("TAG_RE: hardcoded regex is valid");

    /// A `##` line that is not a deeper heading, e.g. `## 🦷 Title`.
    pub(crate) static ref TITLE_RE: Regex =
        Regex::new(r"(?m)^##[ \t]+([^#\n].*)$").expect("TITLE_RE: hardcoded regex is valid");

    /// Start of a numbered section, used as a split point: `### 3.`
    pub(crate) static ref SECTION_MARK_RE: Regex =
        Regex::new(r"(?m)^###[ \t]+\d+\.").expect("SECTION_MARK_RE: hardcoded regex is valid");

    /// Full section header line: `### 3. **Long-Term Care**`
    pub(crate) static ref SECTION_HEADER_RE: Regex =
        Regex::new(r"^###[ \t]+(\d+)\.[ \t]*(.*)$")
            .expect("SECTION_HEADER_RE: hardcoded regex is valid");

    /// Start of a lettered subsection, used as a split point: `#### B.`
    pub(crate) static ref SUBSECTION_MARK_RE: Regex =
        Regex::new(r"(?m)^####[ \t]+[A-Za-z]\.")
            .expect("SUBSECTION_MARK_RE: hardcoded regex is valid");

    /// Full subsection header line: `#### B. Oral Hygiene`
    pub(crate) static ref SUBSECTION_HEADER_RE: Regex =
        Regex::new(r"^####[ \t]+([A-Za-z])\.[ \t]*(.*)$")
            .expect("SUBSECTION_HEADER_RE: hardcoded regex is valid");

    /// The closing checklist marker line, e.g. `## ✅ Summary Checklist`.
    pub(crate) static ref CHECKLIST_RE: Regex =
        Regex::new(r"(?m)^##[ \t][^#\n]*Summary Checklist.*$")
            .expect("CHECKLIST_RE: hardcoded regex is valid");

    /// `**bold**` spans; the converter degrades these to plain text.
    pub(crate) static ref BOLD_RE: Regex =
        Regex::new(r"\*\*([^*]*)\*\*").expect("BOLD_RE: hardcoded regex is valid");

    /// A `---` horizontal rule line.
    pub(crate) static ref RULE_RE: Regex =
        Regex::new(r"^-{3,}$").expect("RULE_RE: hardcoded regex is valid");
}

/// Strips `**` bold markers, keeping the span text.
pub(crate) fn strip_bold(text: &str) -> String {
    BOLD_RE.replace_all(text, "$1").replace("**", "")
}
