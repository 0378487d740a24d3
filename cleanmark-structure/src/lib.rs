// cleanmark-structure/src/lib.rs
//! Marker-driven plain-text-to-HTML structural conversion.
//!
//! Turns a loosely-markdown instructional document (a `##` title, numbered
//! `###` sections, lettered `####` subsections with `- ` bullets, `> `
//! quotes and a closing `## ✅ Summary Checklist` pipe table) into a fixed
//! HTML skeleton of headings, paragraphs, lists and one table.
//!
//! The converter never fails: content that does not match the marker
//! grammar degrades to loose paragraphs, and input that already contains
//! markup is returned unchanged.
//!
//! License: MIT OR Apache-2.0

pub mod document;
mod markers;
mod parser;
mod render;

pub use document::{BodyBlock, ChecklistTable, Section, StructuredDocument, Subsection};
pub use render::DOCUMENT_FOOTER;

/// Returns true when `text` contains anything that reads as an HTML tag.
pub fn looks_like_html(text: &str) -> bool {
    markers::TAG_RE.is_match(text)
}

/// Converts a marker-structured plain-text document into an HTML fragment.
///
/// Idempotent on markup: input that already contains tags is returned
/// unchanged. Otherwise the result carries at most one `<h1>` (title), an
/// intro `<p>`, numbered `<h2>`/lettered `<h3>` headings, `<ul>` lists,
/// `<p>` blocks, an optional `<table>` and the fixed closing footer.
pub fn convert_plain_text_to_html(text: &str) -> String {
    if looks_like_html(text.trim()) {
        return text.to_string();
    }
    render::render(&parser::parse_document(text))
}
