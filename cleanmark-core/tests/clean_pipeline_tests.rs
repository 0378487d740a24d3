// cleanmark-core/tests/clean_pipeline_tests.rs
//! End-to-end properties of the cleaning pipeline: preset behavior,
//! idempotence, allow-list enforcement, tag-family removal and the
//! plain-text structural conversion scenario.

use cleanmark_core::{
    clean, clean_for_final_save, clean_for_paste, convert_plain_text_to_html, CleanerConfig,
};

/// A fragment in the shape rich-text sources actually paste: vendor
/// tracking attributes, utility classes and an nbsp spacer element.
const PASTED_FRAGMENT: &str = concat!(
    r#"<h3 data-spm-anchor-id="x">4. <strong data-spm-anchor-id="y">Long-Term Care</strong></h3>"#,
    r#"<div class="my-2">&nbsp;</div>"#,
    r#"<h4>A. Oral Hygiene</h4>"#,
    r#"<ul><li>Brush twice daily.</li></ul>"#
);

#[test]
fn paste_cleanup_strips_noise_and_keeps_structure() {
    let cleaned = clean_for_paste(PASTED_FRAGMENT);

    // Vendor attributes and classes are gone.
    assert!(!cleaned.contains("data-spm-anchor-id"));
    assert!(!cleaned.contains("class"));
    // The nbsp-only spacer div is gone entirely.
    assert!(!cleaned.contains("&nbsp;"));
    assert_eq!(cleaned.matches("<div").count(), 0);
    // Structure and text survive verbatim.
    assert!(cleaned.contains("4. <strong>Long-Term Care</strong>"));
    assert!(cleaned.contains("<h3>"));
    assert!(cleaned.contains("<h4>"));
    assert!(cleaned.contains("A. Oral Hygiene"));
    assert!(cleaned.contains("<li>"));
    assert!(cleaned.contains("Brush twice daily."));
}

#[test]
fn final_save_cleanup_is_idempotent() {
    for input in [
        PASTED_FRAGMENT,
        "<p>plain</p>",
        "<ul><li>a</li><li>b&nbsp;&nbsp;c</li></ul>",
        "<div><div><p>nested <em>inline</em> text</p></div></div>",
        "text without any markup at all",
    ] {
        let once = clean_for_final_save(input);
        let twice = clean_for_final_save(&once);
        assert_eq!(twice, once, "not idempotent for input: {input}");
    }
}

#[test]
fn only_allow_listed_attributes_survive() {
    let html = concat!(
        r#"<a href="/a" onclick="x()" data-id="7" target="_blank">link</a>"#,
        r#"<img src="/i.png" alt="pic" width="800" style="border:0">"#
    );
    let cleaned = clean_for_final_save(html);

    assert!(cleaned.contains(r#"href="/a""#));
    assert!(cleaned.contains(r#"target="_blank""#));
    assert!(cleaned.contains(r#"src="/i.png""#));
    assert!(cleaned.contains(r#"alt="pic""#));
    assert!(!cleaned.contains("onclick"));
    assert!(!cleaned.contains("data-id"));
    assert!(!cleaned.contains("width"));
    assert!(!cleaned.contains("style"));
}

#[test]
fn image_removal_leaves_no_img_behind() {
    let config = CleanerConfig {
        remove_images: true,
        ..CleanerConfig::default()
    };
    for input in [
        r#"<p><img src="a.png"></p>"#,
        r#"<img src="a.png"><img src="b.png">"#,
        r#"<div><figure><img src="c.jpg" alt="x"></figure></div>"#,
    ] {
        let cleaned = clean(input, &config);
        assert!(!cleaned.contains("<img"), "img survived in: {cleaned}");
    }
}

#[test]
fn table_removal_takes_the_whole_family() {
    let config = CleanerConfig {
        remove_tables: true,
        ..CleanerConfig::default()
    };
    let cleaned = clean(
        "<p>before</p><table><thead><tr><th>h</th></tr></thead><tbody><tr><td>d</td></tr></tbody></table><p>after</p>",
        &config,
    );
    for tag in ["<table", "<thead", "<tbody", "<tr", "<td", "<th"] {
        assert!(!cleaned.contains(tag));
    }
    assert!(cleaned.contains("before"));
    assert!(cleaned.contains("after"));
}

#[test]
fn span_unwrap_preserves_text_content() {
    let config = CleanerConfig {
        format_with_line_breaks: false,
        ..CleanerConfig::default()
    };
    let cleaned = clean("<p>Hello <span>brave <span>new</span></span> world</p>", &config);
    assert_eq!(cleaned, "<p>Hello brave new world</p>");
}

#[test]
fn link_unwrap_keeps_the_link_text() {
    let config = CleanerConfig {
        remove_links: true,
        format_with_line_breaks: false,
        ..CleanerConfig::default()
    };
    let cleaned = clean(r#"<p>See <a href="/pricing">our pricing</a>.</p>"#, &config);
    assert_eq!(cleaned, "<p>See our pricing.</p>");
}

#[test]
fn comments_are_removed() {
    let cleaned = clean_for_final_save("<div><!-- internal note --><p>visible</p></div>");
    assert!(!cleaned.contains("internal note"));
    assert!(cleaned.contains("visible"));
}

#[test]
fn successive_nbsp_collapse_to_one_space() {
    let config = CleanerConfig {
        format_with_line_breaks: false,
        ..CleanerConfig::default()
    };
    assert_eq!(clean("a&nbsp;&nbsp;&nbsp;b", &config), "a b");
}

#[test]
fn malformed_input_never_panics() {
    for input in [
        "<div><p>unclosed",
        "</p></p></div>",
        "<a href=\"broken",
        "<<<<>>>>",
        "<table><li>misnested</table></li>",
    ] {
        // Fail-safe contract: best-effort result or the original string,
        // never a panic.
        let _ = clean_for_final_save(input);
        let _ = clean_for_paste(input);
    }
}

#[test]
fn encoding_pass_escapes_specials_outside_tags() {
    let config = CleanerConfig {
        encode_special_chars: true,
        format_with_line_breaks: false,
        ..CleanerConfig::default()
    };
    let cleaned = clean("<p>5 > 3 & 'so on'</p>", &config);
    assert!(cleaned.contains("&amp;"));
    assert!(cleaned.contains("&#39;so on&#39;"));
    assert!(cleaned.contains("<p>"));
    assert!(cleaned.contains("</p>"));
}

const PLAIN_DOC: &str = "\
## 🦷 Aftercare For A New Crown

A short guide for the first weeks with your new crown.

---

### 1. **Daily Habits**

#### A. Cleaning

- Brush **twice** daily.
- Floss gently around the crown.

> Call us if the bite feels off.

## ✅ Summary Checklist

| Task | How often |
|---|---|
| Brush | Twice a day |
| Floss | Daily |
";

#[test]
fn plain_text_paste_becomes_structured_html() {
    let cleaned = clean_for_paste(PLAIN_DOC);

    assert_eq!(cleaned.matches("<h1>").count(), 1);
    assert_eq!(cleaned.matches("<h2>").count(), 1);
    assert_eq!(cleaned.matches("<h3>").count(), 1);
    assert_eq!(cleaned.matches("<ul>").count(), 1);
    assert_eq!(cleaned.matches("<table>").count(), 1);

    assert!(cleaned.contains("🦷 Aftercare For A New Crown"));
    assert!(cleaned.contains("1. Daily Habits"));
    assert!(cleaned.contains("A. Cleaning"));
    // Bold markers degrade to plain text.
    assert!(cleaned.contains("Brush twice daily."));
    assert!(!cleaned.contains("**"));
    // The checklist table survives cell for cell.
    for cell in ["Task", "How often", "Brush", "Twice a day", "Floss", "Daily"] {
        assert!(cleaned.contains(cell), "missing cell {cell}");
    }
    assert!(cleaned.contains("<thead>"));
    assert!(cleaned.contains("<tbody>"));
}

#[test]
fn converter_is_a_no_op_on_markup() {
    let html = "<p>already html</p>";
    assert_eq!(convert_plain_text_to_html(html), html);
}
