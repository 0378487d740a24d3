// cleanmark-structure/src/parser.rs
//! Splits a marker-structured plain-text document into its parts.
//!
//! The grammar is loose by design: the input is typically an LLM-style
//! instructional document, so every parse step degrades instead of failing.
//! A section chunk whose header never parses is dropped; a subsection chunk
//! without a parseable header keeps its body as untitled blocks.
//!
//! License: MIT OR Apache-2.0

use regex::Regex;

use crate::document::{BodyBlock, ChecklistTable, Section, StructuredDocument, Subsection};
use crate::markers::{
    strip_bold, CHECKLIST_RE, RULE_RE, SECTION_HEADER_RE, SECTION_MARK_RE, SUBSECTION_HEADER_RE,
    SUBSECTION_MARK_RE, TITLE_RE,
};

/// Parses the full document. Never fails; unrecognized content degrades to
/// loose paragraphs.
pub(crate) fn parse_document(text: &str) -> StructuredDocument {
    // The checklist sits after the last section; cut it off first so the
    // section splitter never sees it.
    let (main, checklist_block) = match CHECKLIST_RE.find(text) {
        Some(m) => (&text[..m.start()], Some(&text[m.end()..])),
        None => (text, None),
    };

    let title = TITLE_RE
        .captures(main)
        .map(|caps| strip_bold(caps[1].trim()));

    let chunks = split_at_marks(main, &SECTION_MARK_RE);
    let intro = parse_intro(chunks.first().copied().unwrap_or(""), title.as_deref());

    let sections = chunks
        .iter()
        .skip(1)
        .filter_map(|chunk| parse_section(chunk))
        .collect();

    StructuredDocument {
        title,
        intro,
        sections,
        checklist: checklist_block.and_then(parse_checklist),
    }
}

/// Slices `text` at every match of `mark`. The first slice is the preamble
/// before the first mark (possibly empty).
fn split_at_marks<'t>(text: &'t str, mark: &Regex) -> Vec<&'t str> {
    let starts: Vec<usize> = mark.find_iter(text).map(|m| m.start()).collect();
    if starts.is_empty() {
        return vec![text];
    }
    let mut chunks = Vec::with_capacity(starts.len() + 1);
    chunks.push(&text[..starts[0]]);
    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(text.len());
        chunks.push(&text[start..end]);
    }
    chunks
}

/// Collapses the preamble (minus the title line and any `---` rule) into a
/// single intro paragraph.
fn parse_intro(preamble: &str, title: Option<&str>) -> Option<String> {
    let mut parts = Vec::new();
    for line in preamble.lines() {
        let line = line.trim();
        if line.is_empty() || RULE_RE.is_match(line) {
            continue;
        }
        if let Some(title) = title {
            if line.starts_with("##") && strip_bold(line.trim_start_matches('#').trim()) == *title {
                continue;
            }
        }
        parts.push(strip_bold(line));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

/// Parses one `### N.` chunk. Returns `None` when the header carries no
/// usable title; the whole section is dropped in that case.
fn parse_section(chunk: &str) -> Option<Section> {
    let mut lines = chunk.lines();
    let header = lines.next().unwrap_or("");
    let caps = SECTION_HEADER_RE.captures(header)?;
    let number: u32 = caps[1].parse().ok()?;
    let title = strip_bold(caps[2].trim());
    if title.is_empty() {
        return None;
    }

    let body = &chunk[header.len().min(chunk.len())..];
    let sub_chunks = split_at_marks(body, &SUBSECTION_MARK_RE);

    let mut subsections = Vec::new();
    if let Some(lead) = sub_chunks.first() {
        let blocks = parse_blocks(lead);
        if !blocks.is_empty() {
            subsections.push(Subsection {
                label: None,
                title: None,
                blocks,
            });
        }
    }
    for sub in sub_chunks.iter().skip(1) {
        subsections.push(parse_subsection(sub));
    }

    Some(Section {
        number,
        title,
        subsections,
    })
}

/// Parses one `#### X.` chunk. A header that does not parse still keeps its
/// body, just without a heading.
fn parse_subsection(chunk: &str) -> Subsection {
    let mut lines = chunk.lines();
    let header = lines.next().unwrap_or("");
    let body = &chunk[header.len().min(chunk.len())..];

    match SUBSECTION_HEADER_RE.captures(header) {
        Some(caps) => {
            let title = strip_bold(caps[2].trim());
            Subsection {
                label: Some(caps[1].to_string()),
                title: if title.is_empty() { None } else { Some(title) },
                blocks: parse_blocks(body),
            }
        }
        None => Subsection {
            label: None,
            title: None,
            blocks: parse_blocks(chunk),
        },
    }
}

/// Walks body lines into paragraph / quote / list blocks. Contiguous `- `
/// runs fold into one list; everything else is line-per-block.
fn parse_blocks(body: &str) -> Vec<BodyBlock> {
    let mut blocks = Vec::new();
    let mut bullets: Vec<String> = Vec::new();

    for line in body.lines() {
        let line = line.trim();
        if let Some(item) = line.strip_prefix("- ") {
            bullets.push(strip_bold(item.trim()));
            continue;
        }
        if !bullets.is_empty() {
            blocks.push(BodyBlock::List(std::mem::take(&mut bullets)));
        }
        if line.is_empty() || line.starts_with('#') || RULE_RE.is_match(line) {
            continue;
        }
        if let Some(quote) = line.strip_prefix("> ") {
            blocks.push(BodyBlock::Quote(quote.trim().to_string()));
        } else {
            blocks.push(BodyBlock::Paragraph(strip_bold(line)));
        }
    }
    if !bullets.is_empty() {
        blocks.push(BodyBlock::List(bullets));
    }
    blocks
}

/// Parses the pipe rows following the checklist marker. The first pipe row
/// is the header; `|---|---|` separator rows are skipped.
fn parse_checklist(block: &str) -> Option<ChecklistTable> {
    let mut header: Option<Vec<String>> = None;
    let mut rows = Vec::new();

    for line in block.lines() {
        let line = line.trim();
        if !line.contains('|') {
            continue;
        }
        let cells = split_pipe_row(line);
        if cells.is_empty() {
            continue;
        }
        if is_separator_row(&cells) {
            continue;
        }
        match header {
            None => header = Some(cells),
            Some(_) => rows.push(cells),
        }
    }

    header.map(|header| ChecklistTable { header, rows })
}

/// Splits on `|`, trimming each cell and dropping the empty edge cells that
/// leading/trailing pipes produce.
fn split_pipe_row(line: &str) -> Vec<String> {
    let mut cells: Vec<String> = line.split('|').map(|c| c.trim().to_string()).collect();
    if cells.first().is_some_and(|c| c.is_empty()) {
        cells.remove(0);
    }
    if cells.last().is_some_and(|c| c.is_empty()) {
        cells.pop();
    }
    cells
}

fn is_separator_row(cells: &[String]) -> bool {
    cells
        .iter()
        .all(|c| !c.is_empty() && c.chars().all(|ch| ch == '-' || ch == ':'))
}
