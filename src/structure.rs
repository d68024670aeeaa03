//! Structural landmarks for pages where no content root was found.
//!
//! When a page is an article but no single candidate holds enough text,
//! callers still get hints: the page header, the page footer and any other
//! visible landmark containers outside them.

use tracing::debug;

use crate::classify::{is_semantic_tag, is_significant_node};
use crate::dom::{Document, NodeId};

/// Landmark tags collected first, in this order.
const LANDMARK_TAGS: &[&str] = &["main", "article", "section", "aside", "nav"];

/// Class/id fragments of content-ish containers.
const SIGNIFICANT_CLASS_FRAGMENTS: &[&str] = &[
    "content",
    "main",
    "article",
    "post",
    "entry",
    "body",
    "text",
    "story",
    "container",
    "wrapper",
    "page",
    "blog",
    "section",
];

/// Header, footer and other landmarks found in a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuralElements {
    pub header: Option<NodeId>,
    pub footer: Option<NodeId>,
    /// Visible landmarks outside the header and footer, without duplicates.
    pub other_significant_nodes: Vec<NodeId>,
}

/// Locate the page header, footer and other significant landmarks.
#[must_use]
pub fn find_structural_elements(doc: &Document) -> StructuralElements {
    let header = find_header(doc);
    let footer = find_footer(doc, header);
    let other_significant_nodes = find_significant_nodes(doc, header, footer);

    debug!(
        header = header.is_some(),
        footer = footer.is_some(),
        others = other_significant_nodes.len(),
        "found structural elements"
    );

    StructuralElements {
        header,
        footer,
        other_significant_nodes,
    }
}

/// The single `<header>` if there is exactly one; otherwise the first
/// banner-like element, preferring direct children of the body.
fn find_header(doc: &Document) -> Option<NodeId> {
    let tags = doc.elements_by_tag_name(doc.root(), "header");
    if tags.len() == 1 {
        return Some(tags[0]);
    }

    let body = doc.body();
    let mut header: Option<NodeId> = None;
    for el in doc.elements_by_tag_name(body, "*") {
        if !is_header_like(doc, el) {
            continue;
        }
        match header {
            None => header = Some(el),
            Some(current) => {
                if doc.parent(el) == Some(body) && doc.parent(current) != Some(body) {
                    header = Some(el);
                }
            }
        }
    }
    header
}

fn is_header_like(doc: &Document, el: NodeId) -> bool {
    let role = doc.attr(el, "role").unwrap_or_default().to_lowercase();
    let id = doc.id(el).to_lowercase();
    let class = doc.class_name(el).to_lowercase();

    role == "banner"
        || id == "header"
        || id == "masthead"
        || class.contains("header")
        || class.contains("masthead")
}

/// The single `<footer>` if there is exactly one; otherwise the last
/// footer-like element in document order that is not inside the header.
fn find_footer(doc: &Document, header: Option<NodeId>) -> Option<NodeId> {
    let tags = doc.elements_by_tag_name(doc.root(), "footer");
    if tags.len() == 1 {
        return Some(tags[0]);
    }

    let body = doc.body();
    doc.elements_by_tag_name(body, "*")
        .into_iter()
        .rev()
        .filter(|&el| is_footer_like(doc, el))
        .find(|&el| !header.is_some_and(|h| is_within(doc, el, h, body)))
}

fn is_footer_like(doc: &Document, el: NodeId) -> bool {
    let role = doc.attr(el, "role").unwrap_or_default().to_lowercase();
    let id = doc.id(el).to_lowercase();
    let class = doc.class_name(el).to_lowercase();

    role == "contentinfo"
        || id == "footer"
        || id == "colophon"
        || class.contains("footer")
        || class.contains("site-info")
}

/// Whether `container` is `node` or one of its ancestors below `body`.
fn is_within(doc: &Document, node: NodeId, container: NodeId, body: NodeId) -> bool {
    let mut current = Some(node);
    while let Some(n) = current {
        if n == body {
            return false;
        }
        if n == container {
            return true;
        }
        current = doc.parent(n);
    }
    false
}

fn find_significant_nodes(
    doc: &Document,
    header: Option<NodeId>,
    footer: Option<NodeId>,
) -> Vec<NodeId> {
    let body = doc.body();
    let mut potential: Vec<NodeId> = LANDMARK_TAGS
        .iter()
        .flat_map(|tag| doc.elements_by_tag_name(body, tag))
        .collect();
    add_significant_by_class_or_id(doc, &mut potential);

    let mut significant: Vec<NodeId> = Vec::new();
    for node in potential {
        let inside = [header, footer]
            .into_iter()
            .flatten()
            .any(|landmark| is_within(doc, node, landmark, body));
        if inside || significant.contains(&node) {
            continue;
        }
        if doc.is_probably_visible(node)
            && (is_significant_node(doc, node) || is_semantic_tag(doc, node))
        {
            significant.push(node);
        }
    }
    significant
}

/// Append every element under the body whose class or id contains a
/// content-container fragment and is not yet listed.
pub fn add_significant_by_class_or_id(doc: &Document, potential: &mut Vec<NodeId>) {
    for el in doc.elements_by_tag_name(doc.body(), "*") {
        let combined = format!("{} {}", doc.class_name(el), doc.id(el)).to_lowercase();
        if SIGNIFICANT_CLASS_FRAGMENTS.iter().any(|f| combined.contains(f)) && !potential.contains(&el) {
            potential.push(el);
        }
    }
}
