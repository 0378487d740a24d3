//! dom.rs - Element-level cleaning passes over a parsed tree.
//!
//! Parses a fragment into a mutable DOM (kuchiki), applies the attribute
//! allow-list filter, the tag-family removals/unwraps and comment stripping,
//! then serializes the body children back to a fragment string. Each pass
//! mutates nodes collected up front, so a malformed node never aborts the
//! walk.
//!
//! License: MIT OR Apache-2.0

use kuchiki::traits::TendrilSink;
use kuchiki::NodeRef;

use crate::config::CleanerConfig;
use crate::errors::CleanError;

/// Tags deleted together when `remove_tables` is set.
const TABLE_FAMILY_SELECTOR: &str = "table, thead, tbody, tfoot, tr, td, th";

/// Runs all element-level passes and returns the serialized fragment.
pub(crate) fn apply_dom_passes(html: &str, config: &CleanerConfig) -> Result<String, CleanError> {
    let document = kuchiki::parse_html().one(html);

    if config.remove_attributes || config.remove_inline_styles || config.remove_classes_and_ids {
        filter_attributes(&document, config);
    }

    if config.remove_images {
        remove_by_selector(&document, "img");
    }
    if config.remove_tables {
        remove_by_selector(&document, TABLE_FAMILY_SELECTOR);
    }
    if config.remove_span_tags {
        unwrap_by_selector(&document, "span");
    }
    if config.remove_links {
        unwrap_by_selector(&document, "a");
    }
    if config.remove_comments {
        strip_comments(&document);
    }

    serialize_fragment(&document)
}

/// Applies the attribute allow-list to every element. `style`, `class` and
/// `id` are dropped unconditionally when their dedicated flags are set,
/// regardless of the allow-list.
fn filter_attributes(document: &NodeRef, config: &CleanerConfig) {
    if let Ok(elements) = document.select("*") {
        for element in elements {
            let mut attrs = element.attributes.borrow_mut();
            if config.remove_attributes {
                attrs.map.retain(|name, _| {
                    config
                        .allowed_attributes
                        .iter()
                        .any(|allowed| allowed.eq_ignore_ascii_case(&name.local))
                });
            }
            if config.remove_inline_styles {
                attrs.remove("style");
            }
            if config.remove_classes_and_ids {
                attrs.remove("class");
                attrs.remove("id");
            }
        }
    }
}

/// Deletes matching elements with their whole subtree.
fn remove_by_selector(document: &NodeRef, selector: &str) {
    if let Ok(matches) = document.select(selector) {
        let nodes: Vec<NodeRef> = matches.map(|m| m.as_node().clone()).collect();
        for node in nodes {
            node.detach();
        }
    }
}

/// Replaces matching elements with their children, discarding the wrapper
/// tag but keeping inner content and position.
fn unwrap_by_selector(document: &NodeRef, selector: &str) {
    if let Ok(matches) = document.select(selector) {
        let nodes: Vec<NodeRef> = matches.map(|m| m.as_node().clone()).collect();
        for node in nodes {
            let children: Vec<NodeRef> = node.children().collect();
            for child in children {
                node.insert_before(child);
            }
            node.detach();
        }
    }
}

/// Detaches every comment node in the tree.
fn strip_comments(document: &NodeRef) {
    let comments: Vec<NodeRef> = document
        .inclusive_descendants()
        .filter(|node| node.as_comment().is_some())
        .collect();
    for comment in comments {
        comment.detach();
    }
}

/// Serializes the children of `<body>` back into a fragment string. The
/// parser always provides a body, even for bare text input.
fn serialize_fragment(document: &NodeRef) -> Result<String, CleanError> {
    let body = document
        .select_first("body")
        .map_err(|()| CleanError::MissingBody)?;

    let mut out = Vec::new();
    for child in body.as_node().children() {
        child.serialize(&mut out)?;
    }
    Ok(String::from_utf8(out)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passes(html: &str, config: &CleanerConfig) -> String {
        apply_dom_passes(html, config).expect("dom passes")
    }

    #[test]
    fn strips_disallowed_attributes_only() {
        let config = CleanerConfig::default();
        let out = passes(
            r#"<a href="/x" data-track="1" class="btn">go</a>"#,
            &config,
        );
        assert!(out.contains(r#"href="/x""#));
        assert!(!out.contains("data-track"));
        assert!(!out.contains("class"));
    }

    #[test]
    fn style_is_dropped_even_when_allow_listed() {
        let config = CleanerConfig {
            allowed_attributes: vec!["style".to_string()],
            ..CleanerConfig::default()
        };
        let out = passes(r#"<p style="color:red">x</p>"#, &config);
        assert!(!out.contains("style"));
    }

    #[test]
    fn unwrap_keeps_children_in_place() {
        let config = CleanerConfig::default();
        let out = passes("<p>a<span>b<strong>c</strong></span>d</p>", &config);
        assert!(!out.contains("<span>"));
        assert!(out.contains("ab<strong>c</strong>d"));
    }

    #[test]
    fn removes_image_subtree_entirely() {
        let config = CleanerConfig {
            remove_images: true,
            ..CleanerConfig::default()
        };
        let out = passes(r#"<p>before<img src="x.png">after</p>"#, &config);
        assert!(!out.contains("<img"));
        assert!(out.contains("beforeafter"));
    }

    #[test]
    fn strips_comment_nodes() {
        let config = CleanerConfig::default();
        let out = passes("<div><!-- note --><p>kept</p></div>", &config);
        assert!(!out.contains("note"));
        assert!(out.contains("<p>kept</p>"));
    }
}
