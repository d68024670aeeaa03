//! Serialization of arena nodes back to HTML and text.
//!
//! Attributes are written in sorted order so output is deterministic.

use std::fmt::Write as _;

use crate::dom::{Document, NodeData, NodeId};
use crate::metrics::inner_text;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// HTML of `node` including its own tag.
#[must_use]
pub fn outer_html(doc: &Document, node: NodeId) -> String {
    let mut out = String::new();
    write_node(doc, node, false, &mut out);
    out
}

/// HTML of the whole document, prefixed with a doctype.
#[must_use]
pub fn document_html(doc: &Document) -> String {
    format!("<!DOCTYPE html>\n{}", outer_html(doc, doc.root()))
}

/// Plain text of `node` with whitespace runs collapsed.
#[must_use]
pub fn text_content(doc: &Document, node: NodeId) -> String {
    inner_text(doc, node, true)
}

fn write_node(doc: &Document, node: NodeId, raw_text: bool, out: &mut String) {
    match doc.node(node).data() {
        NodeData::Text(text) => {
            if raw_text {
                out.push_str(text);
            } else {
                out.push_str(&escape_html(text));
            }
        }
        NodeData::Element(el) => {
            out.push('<');
            out.push_str(&el.tag);

            let mut attrs: Vec<_> = el.attrs.iter().collect();
            attrs.sort();
            for (name, value) in attrs {
                let _ = write!(out, " {name}=\"{}\"", escape_html(value));
            }

            if VOID_ELEMENTS.contains(&el.tag.as_str()) && el.children.is_empty() {
                out.push_str("/>");
                return;
            }
            out.push('>');

            let raw = RAW_TEXT_ELEMENTS.contains(&el.tag.as_str());
            for &child in &el.children {
                write_node(doc, child, raw, out);
            }

            out.push_str("</");
            out.push_str(&el.tag);
            out.push('>');
        }
    }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
