// cleanmark-structure/src/document.rs
//! Parsed representation of a marker-structured instructional document.
//!
//! License: MIT OR Apache-2.0

/// The whole parsed document: title, intro, numbered sections and an
/// optional closing checklist table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructuredDocument {
    /// Text of the `##` title line, markers stripped.
    pub title: Option<String>,
    /// Intro text found between the title and the first section.
    pub intro: Option<String>,
    pub sections: Vec<Section>,
    pub checklist: Option<ChecklistTable>,
}

/// A `### N.` numbered section.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub number: u32,
    pub title: String,
    pub subsections: Vec<Subsection>,
}

/// A `#### X.` lettered subsection, or an untitled run of body content.
///
/// `label`/`title` are `None` for content that precedes the first lettered
/// subsection of a section, and for subsection chunks whose header line
/// could not be parsed; the body is kept either way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Subsection {
    pub label: Option<String>,
    pub title: Option<String>,
    pub blocks: Vec<BodyBlock>,
}

/// One block of subsection body content.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyBlock {
    /// A loose line of text, bold markers stripped.
    Paragraph(String),
    /// A `> ` line, prefix stripped.
    Quote(String),
    /// A contiguous run of `- ` bullets, bold markers stripped.
    List(Vec<String>),
}

/// The `## ✅ Summary Checklist` pipe table: one header row plus body rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChecklistTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}
