//! Text and density metrics over a subtree.
//!
//! Lengths are counted in Unicode scalar values.

use crate::dom::{Document, NodeData, NodeId};
use crate::patterns::NORMALIZE;

/// Weight of a same-page (`href="#..."`) link's text in [`link_density`].
const HASH_LINK_WEIGHT: f64 = 0.3;

/// Concatenated text of `node` and its descendants.
///
/// A single space is inserted between adjacent children once the running
/// text is non-empty, so words in sibling elements do not glue together.
/// The result is trimmed; with `normalize_spaces` runs of two or more
/// whitespace characters collapse to one space.
#[must_use]
pub fn inner_text(doc: &Document, node: NodeId, normalize_spaces: bool) -> String {
    let text = collect_text(doc, node);
    if normalize_spaces {
        NORMALIZE.replace_all(&text, " ").into_owned()
    } else {
        text
    }
}

fn collect_text(doc: &Document, node: NodeId) -> String {
    match doc.node(node).data() {
        NodeData::Text(text) => text.trim().to_string(),
        NodeData::Element(el) => {
            let mut text = String::new();
            for (i, &child) in el.children.iter().enumerate() {
                if i > 0 && !text.is_empty() {
                    text.push(' ');
                }
                match doc.node(child).data() {
                    NodeData::Text(t) => text.push_str(t),
                    NodeData::Element(_) => text.push_str(&collect_text(doc, child)),
                }
            }
            text.trim().to_string()
        }
    }
}

/// Character length of [`inner_text`].
#[inline]
#[must_use]
pub fn text_length(doc: &Document, node: NodeId, normalize_spaces: bool) -> usize {
    inner_text(doc, node, normalize_spaces).chars().count()
}

/// Share of an element's text that sits inside links.
///
/// Each `<a>` contributes its normalized text length, weighted 0.3 when its
/// `href` starts with `#`. The sum is divided by the element's own
/// normalized text length; an element without text has density 0.
#[must_use]
pub fn link_density(doc: &Document, element: NodeId) -> f64 {
    let text_length = text_length(doc, element, true);
    if text_length == 0 {
        return 0.0;
    }

    let link_length: usize = doc
        .elements_by_tag_name(element, "a")
        .into_iter()
        .map(|link| {
            let coefficient = if doc.attr(link, "href").is_some_and(|h| h.starts_with('#')) {
                HASH_LINK_WEIGHT
            } else {
                1.0
            };
            // truncated per link
            (text_length_f64(doc, link) * coefficient) as usize
        })
        .sum();

    link_length as f64 / text_length as f64
}

fn text_length_f64(doc: &Document, node: NodeId) -> f64 {
    text_length(doc, node, true) as f64
}

/// Normalized text length per direct child element.
///
/// Text-only children are not counted; with no child elements the divisor
/// is 1. An element without text has density 0.
#[must_use]
pub fn text_density(doc: &Document, element: NodeId) -> f64 {
    let text_length = text_length(doc, element, true);
    if text_length == 0 {
        return 0.0;
    }
    let child_elements = doc.element_children(element).count().max(1);
    text_length as f64 / child_elements as f64
}
