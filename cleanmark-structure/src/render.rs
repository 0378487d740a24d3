// cleanmark-structure/src/render.rs
//! Emits the HTML skeleton for a parsed document.
//!
//! License: MIT OR Apache-2.0

use html_escape::encode_text;

use crate::document::{BodyBlock, StructuredDocument};

/// Appended to every converted document.
pub const DOCUMENT_FOOTER: &str =
    "<footer>© Brightline Dental Clinic. All rights reserved.</footer>";

/// Renders the document as an HTML fragment, one top-level element per line.
pub(crate) fn render(doc: &StructuredDocument) -> String {
    let mut out: Vec<String> = Vec::new();

    if let Some(title) = &doc.title {
        out.push(format!("<h1>{}</h1>", encode_text(title)));
    }
    if let Some(intro) = &doc.intro {
        out.push(format!("<p>{}</p>", encode_text(intro)));
    }

    for section in &doc.sections {
        out.push(format!(
            "<h2>{}. {}</h2>",
            section.number,
            encode_text(&section.title)
        ));
        for sub in &section.subsections {
            if let (Some(label), Some(title)) = (&sub.label, &sub.title) {
                out.push(format!("<h3>{}. {}</h3>", label, encode_text(title)));
            }
            for block in &sub.blocks {
                out.push(render_block(block));
            }
        }
    }

    if let Some(table) = &doc.checklist {
        let mut html = String::from("<table><thead><tr>");
        for cell in &table.header {
            html.push_str(&format!("<th>{}</th>", encode_text(cell)));
        }
        html.push_str("</tr></thead><tbody>");
        for row in &table.rows {
            html.push_str("<tr>");
            for cell in row {
                html.push_str(&format!("<td>{}</td>", encode_text(cell)));
            }
            html.push_str("</tr>");
        }
        html.push_str("</tbody></table>");
        out.push(html);
    }

    out.push(DOCUMENT_FOOTER.to_string());
    out.join("\n")
}

fn render_block(block: &BodyBlock) -> String {
    match block {
        BodyBlock::Paragraph(text) | BodyBlock::Quote(text) => {
            format!("<p>{}</p>", encode_text(text))
        }
        BodyBlock::List(items) => {
            let mut html = String::from("<ul>");
            for item in items {
                html.push_str(&format!("<li>{}</li>", encode_text(item)));
            }
            html.push_str("</ul>");
            html
        }
    }
}
