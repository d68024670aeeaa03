//! HTML parsing into the arena tree.
//!
//! `dom_query` (html5ever underneath) does the tokenizing and tree
//! construction; this module copies the resulting elements and text nodes
//! into a [`Document`]. Comments, doctypes and processing instructions are
//! dropped.

use dom_query::NodeRef;
use tendril::StrTendril;
use tracing::trace;

use crate::dom::{Document, NodeId};
use crate::error::{Error, Result};

/// Parse an HTML string into a [`Document`].
///
/// `base_uri` is stored on the document for the classifier's URL rules; it
/// is never resolved or fetched.
///
/// # Errors
///
/// Returns [`Error::ParseError`] if the parsed tree has no root element.
pub fn parse_html(html: &str, base_uri: Option<&str>) -> Result<Document> {
    let source = dom_query::Document::from(html);
    let html_sel = source.select("html");
    let Some(html_node) = html_sel.nodes().first() else {
        return Err(Error::ParseError("document has no root element".to_string()));
    };

    let mut doc = Document::new();
    let root = doc.root();
    // Document::new() seeds an empty body; drop it and take the parsed one.
    let placeholder_body = doc.body();
    doc.detach(placeholder_body);

    copy_attributes(&mut doc, root, html_node);
    for child in html_node.children() {
        copy_node(&mut doc, root, &child);
    }

    let parsed_body = doc.element_children(root).find(|&c| doc.is_tag(c, "body"));
    match parsed_body {
        Some(body) => doc.set_body(body),
        None => {
            let body = doc.create_element("body");
            doc.append_child(root, body);
            doc.set_body(body);
        }
    }

    doc.set_base_uri(base_uri.map(str::to_string));
    trace!(nodes = doc.arena_len(), "parsed html");
    Ok(doc)
}

fn copy_node(doc: &mut Document, parent: NodeId, node: &NodeRef) {
    if node.is_element() {
        let tag = node.node_name().unwrap_or_default();
        let element = doc.create_element(&tag);
        copy_attributes(doc, element, node);
        doc.append_child(parent, element);
        for child in node.children() {
            copy_node(doc, element, &child);
        }
    } else if node.is_text() {
        let text: StrTendril = node.text();
        let text_node = doc.create_text(&text);
        doc.append_child(parent, text_node);
    }
}

fn copy_attributes(doc: &mut Document, element: NodeId, node: &NodeRef) {
    for attr in node.attrs() {
        doc.set_attr(element, &attr.name.local, &attr.value);
    }
}
