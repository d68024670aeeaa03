//! Arena-backed DOM
//!
//! A minimal element/text tree. The [`Document`] owns every node in a flat
//! arena and hands out [`NodeId`] indices; parents own their children through
//! the child list, and the parent link is a plain index used for lookups.
//! Detaching a node cuts it (and its subtree) out of the parent's child list
//! and clears its parent link. The detached nodes stay in the arena but are
//! unreachable from the root.

use std::collections::HashMap;

/// Index of a node inside its [`Document`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Raw arena index.
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Element payload: lowercase tag name, attributes and ordered children.
#[derive(Debug, Clone, Default)]
pub struct ElementData {
    pub tag: String,
    pub attrs: HashMap<String, String>,
    pub children: Vec<NodeId>,
}

/// The two node kinds of the tree.
#[derive(Debug, Clone)]
pub enum NodeData {
    Element(ElementData),
    Text(String),
}

/// A node in the arena.
#[derive(Debug, Clone)]
pub struct Node {
    parent: Option<NodeId>,
    data: NodeData,
}

impl Node {
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    #[must_use]
    pub fn data(&self) -> &NodeData {
        &self.data
    }
}

/// A parsed HTML document.
///
/// `root` is the `<html>` element and `body` the designated body element.
/// `base_uri` is only consulted by the page classifier's URL heuristics.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
    body: NodeId,
    base_uri: Option<String>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document holding an empty `<html><body></body></html>`.
    #[must_use]
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            root: NodeId(0),
            body: NodeId(0),
            base_uri: None,
        };
        let root = doc.create_element("html");
        let body = doc.create_element("body");
        doc.append_child(root, body);
        doc.root = root;
        doc.body = body;
        doc
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    #[must_use]
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Designate another element as the body. Used by the parser when the
    /// source markup supplies its own `<body>`.
    pub fn set_body(&mut self, body: NodeId) {
        self.body = body;
    }

    #[must_use]
    pub fn base_uri(&self) -> Option<&str> {
        self.base_uri.as_deref()
    }

    pub fn set_base_uri(&mut self, uri: Option<String>) {
        self.base_uri = uri.filter(|u| !u.is_empty());
    }

    /// Number of nodes ever allocated, reachable or not.
    #[must_use]
    pub fn arena_len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    // === Construction ===

    /// Allocate a detached element. The tag name is lowercased.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeData::Element(ElementData {
            tag: tag.to_ascii_lowercase(),
            ..ElementData::default()
        }))
    }

    /// Allocate a detached text node.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeData::Text(text.to_string()))
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node { parent: None, data });
        id
    }

    /// Append `child` to `parent`, detaching it from any previous parent.
    ///
    /// Text nodes cannot have children; appending to one is a no-op.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent == child || !self.is_element(parent) {
            return;
        }
        self.detach(child);
        if let NodeData::Element(el) = &mut self.nodes[parent.0].data {
            el.children.push(child);
        }
        self.nodes[child.0].parent = Some(parent);
    }

    /// Remove `node` (with its whole subtree) from its parent's child list.
    ///
    /// Returns `true` if the node was attached.
    pub fn detach(&mut self, node: NodeId) -> bool {
        let Some(parent) = self.nodes[node.0].parent.take() else {
            return false;
        };
        if let NodeData::Element(el) = &mut self.nodes[parent.0].data {
            if let Some(pos) = el.children.iter().position(|&c| c == node) {
                el.children.remove(pos);
                return true;
            }
        }
        false
    }

    pub fn set_attr(&mut self, node: NodeId, name: &str, value: &str) {
        if let NodeData::Element(el) = &mut self.nodes[node.0].data {
            el.attrs.insert(name.to_ascii_lowercase(), value.to_string());
        }
    }

    // === Inspection ===

    #[inline]
    #[must_use]
    pub fn is_element(&self, node: NodeId) -> bool {
        matches!(self.nodes[node.0].data, NodeData::Element(_))
    }

    #[inline]
    #[must_use]
    pub fn is_text(&self, node: NodeId) -> bool {
        matches!(self.nodes[node.0].data, NodeData::Text(_))
    }

    #[inline]
    #[must_use]
    pub fn element(&self, node: NodeId) -> Option<&ElementData> {
        match &self.nodes[node.0].data {
            NodeData::Element(el) => Some(el),
            NodeData::Text(_) => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn text(&self, node: NodeId) -> Option<&str> {
        match &self.nodes[node.0].data {
            NodeData::Text(text) => Some(text),
            NodeData::Element(_) => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    /// Child nodes in order. Empty for text nodes.
    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.element(node).map_or(&[], |el| el.children.as_slice())
    }

    /// Direct children that are elements.
    pub fn element_children(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(node)
            .iter()
            .copied()
            .filter(|&c| self.is_element(c))
    }

    /// Tag name, or `""` for text nodes.
    #[must_use]
    pub fn tag_name(&self, node: NodeId) -> &str {
        self.element(node).map_or("", |el| el.tag.as_str())
    }

    #[inline]
    #[must_use]
    pub fn is_tag(&self, node: NodeId, tag: &str) -> bool {
        self.tag_name(node) == tag
    }

    #[must_use]
    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node)
            .and_then(|el| el.attrs.get(name))
            .map(String::as_str)
    }

    #[must_use]
    pub fn has_attr(&self, node: NodeId, name: &str) -> bool {
        self.element(node).is_some_and(|el| el.attrs.contains_key(name))
    }

    /// `id` attribute, empty when absent.
    #[must_use]
    pub fn id(&self, node: NodeId) -> &str {
        self.attr(node, "id").unwrap_or_default()
    }

    /// `class` attribute, empty when absent.
    #[must_use]
    pub fn class_name(&self, node: NodeId) -> &str {
        self.attr(node, "class").unwrap_or_default()
    }

    // === Traversal ===

    /// Elements under `start` (inclusive) whose tag is `tag`, in document
    /// order. `"*"` matches every element.
    #[must_use]
    pub fn elements_by_tag_name(&self, start: NodeId, tag: &str) -> Vec<NodeId> {
        self.elements_by_tag_names(start, &[tag])
    }

    /// Elements under `start` (inclusive) matching any of `tags`.
    #[must_use]
    pub fn elements_by_tag_names(&self, start: NodeId, tags: &[&str]) -> Vec<NodeId> {
        let wanted: Vec<String> = tags.iter().map(|t| t.to_ascii_lowercase()).collect();
        let any = wanted.iter().any(|t| t == "*");
        self.descendant_elements(start)
            .into_iter()
            .filter(|&n| any || wanted.iter().any(|t| t == self.tag_name(n)))
            .collect()
    }

    /// `start` (if an element) followed by every descendant element, in
    /// document order.
    #[must_use]
    pub fn descendant_elements(&self, start: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            let Some(el) = self.element(node) else {
                continue;
            };
            out.push(node);
            stack.extend(el.children.iter().rev().copied());
        }
        out
    }

    /// Ancestor elements nearest first. `max_depth == 0` walks to the root.
    #[must_use]
    pub fn ancestors(&self, node: NodeId, max_depth: usize) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut current = self.parent(node);
        while let Some(parent) = current {
            if max_depth > 0 && out.len() >= max_depth {
                break;
            }
            out.push(parent);
            current = self.parent(parent);
        }
        out
    }

    /// Whether any ancestor within `max_depth` levels has tag `tag`.
    /// `max_depth == 0` checks every ancestor.
    #[must_use]
    pub fn has_ancestor_tag(&self, node: NodeId, tag: &str, max_depth: usize) -> bool {
        let tag = tag.to_ascii_lowercase();
        self.ancestors(node, max_depth)
            .into_iter()
            .any(|a| self.tag_name(a) == tag)
    }

    /// Whether `ancestor` is `node` itself or one of its ancestors.
    #[must_use]
    pub fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            if n == ancestor {
                return true;
            }
            current = self.parent(n);
        }
        false
    }

    /// Whether `node` is still reachable from the document root.
    #[must_use]
    pub fn is_attached(&self, node: NodeId) -> bool {
        self.is_ancestor_or_self(self.root, node)
    }

    /// The element itself plus every descendant node, text included.
    /// `None` counts as zero.
    #[must_use]
    pub fn count_nodes(&self, node: Option<NodeId>) -> usize {
        let Some(node) = node else {
            return 0;
        };
        1 + self
            .children(node)
            .iter()
            .map(|&c| self.count_nodes(Some(c)))
            .sum::<usize>()
    }

    /// Heuristic visibility from inline style and hiding attributes.
    #[must_use]
    pub fn is_probably_visible(&self, node: NodeId) -> bool {
        let style = self.attr(node, "style").unwrap_or_default();
        !(style.contains("display: none")
            || style.contains("visibility: hidden")
            || self.has_attr(node, "hidden")
            || self.attr(node, "aria-hidden") == Some("true"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Document, NodeId, NodeId, NodeId) {
        let mut doc = Document::new();
        let body = doc.body();
        let div = doc.create_element("DIV");
        let p = doc.create_element("p");
        let text = doc.create_text("hello");
        doc.append_child(body, div);
        doc.append_child(div, p);
        doc.append_child(p, text);
        (doc, div, p, text)
    }

    #[test]
    fn test_tags_are_lowercased() {
        let (doc, div, _, _) = sample();
        assert_eq!(doc.tag_name(div), "div");
    }

    #[test]
    fn test_parent_links_follow_append() {
        let (doc, div, p, text) = sample();
        assert_eq!(doc.parent(p), Some(div));
        assert_eq!(doc.parent(text), Some(p));
        assert_eq!(doc.parent(doc.body()), Some(doc.root()));
        assert_eq!(doc.parent(doc.root()), None);
    }

    #[test]
    fn test_detach_removes_subtree() {
        let (mut doc, div, p, text) = sample();
        assert!(doc.detach(div));
        assert!(doc.children(doc.body()).is_empty());
        assert_eq!(doc.parent(div), None);
        // the subtree below stays intact but is unreachable
        assert_eq!(doc.parent(p), Some(div));
        assert!(!doc.is_attached(text));
        assert!(!doc.detach(div));
    }

    #[test]
    fn test_append_reparents() {
        let (mut doc, div, p, _) = sample();
        let body = doc.body();
        doc.append_child(body, p);
        assert!(doc.children(div).is_empty());
        assert_eq!(doc.parent(p), Some(body));
        assert_eq!(doc.children(body), &[div, p]);
    }

    #[test]
    fn test_elements_by_tag_name_includes_start_in_document_order() {
        let (mut doc, div, p, _) = sample();
        let span = doc.create_element("span");
        doc.append_child(div, span);
        let all = doc.elements_by_tag_name(doc.body(), "*");
        assert_eq!(all, vec![doc.body(), div, p, span]);
        assert_eq!(doc.elements_by_tag_name(div, "DIV"), vec![div]);
        assert_eq!(doc.elements_by_tag_names(doc.root(), &["span", "p"]), vec![p, span]);
    }

    #[test]
    fn test_ancestors_respect_depth() {
        let (doc, div, p, text) = sample();
        assert_eq!(doc.ancestors(text, 2), vec![p, div]);
        assert_eq!(doc.ancestors(text, 0).len(), 4);
        assert!(doc.has_ancestor_tag(text, "DIV", 0));
        assert!(!doc.has_ancestor_tag(text, "div", 1));
    }

    #[test]
    fn test_count_nodes() {
        let (doc, div, _, _) = sample();
        assert_eq!(doc.count_nodes(Some(div)), 3);
        assert_eq!(doc.count_nodes(None), 0);
    }

    #[test]
    fn test_visibility() {
        let (mut doc, div, p, _) = sample();
        assert!(doc.is_probably_visible(div));
        doc.set_attr(div, "style", "color: red; display: none");
        assert!(!doc.is_probably_visible(div));
        doc.set_attr(p, "aria-hidden", "true");
        assert!(!doc.is_probably_visible(p));
    }

    #[test]
    fn test_attributes_default_to_empty() {
        let (mut doc, div, _, text) = sample();
        assert_eq!(doc.id(div), "");
        assert_eq!(doc.class_name(text), "");
        doc.set_attr(div, "Class", "post");
        assert_eq!(doc.class_name(div), "post");
        assert!(doc.has_attr(div, "class"));
    }
}
