//! Page classification.
//!
//! [`classify_page_type`] runs an ordered cascade of rules over the URL,
//! the page structure and the ranked candidates. The first rule that fires
//! decides. Every rule reads the document and never modifies it, so the
//! same inputs always produce the same answer.

use tracing::debug;

use crate::dom::{Document, NodeId};
use crate::metrics::{inner_text, link_density};
use crate::patterns::DEFAULT_CHAR_THRESHOLD;
use crate::result::PageType;
use crate::scoring::Candidates;
use crate::url_utils::{has_articles_path, UrlShape};

/// More list-like elements than this marks an index page.
const MAX_LIST_ELEMENTS: usize = 10;

/// More h1–h3 headings than this marks an index page.
const MAX_HEADINGS: usize = 10;

/// Link density above which a candidate is not article text.
const MAX_LINK_DENSITY: f64 = 0.5;

/// Text length below which a semantic candidate is rejected outright.
const MIN_SEMANTIC_TEXT: usize = 100;

/// Text length the final fallback rule requires.
const MIN_FALLBACK_TEXT: usize = 140;

/// Second-to-first score ratio above which the ranking is ambiguous.
const SCORE_PARITY_RATIO: f64 = 0.8;

/// Class fragments of direct body children counted as list items.
const CARD_CLASS_FRAGMENTS: &[&str] = &["card", "item", "entry"];

/// Element counts over the body used by the index-page rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageStats {
    /// `h1` + `h2` + `h3`.
    pub headings: usize,
    pub images: usize,
    pub links: usize,
    /// `article` + `li` + direct body children with a card-like class.
    pub list_like: usize,
}

impl PageStats {
    #[must_use]
    pub fn collect(doc: &Document) -> Self {
        let body = doc.body();
        let count = |tag: &str| doc.elements_by_tag_name(body, tag).len();

        let cards = doc
            .element_children(body)
            .filter(|&child| {
                let class = doc.class_name(child).to_lowercase();
                CARD_CLASS_FRAGMENTS.iter().any(|f| class.contains(f))
            })
            .count();

        Self {
            headings: count("h1") + count("h2") + count("h3"),
            images: count("img"),
            links: count("a"),
            list_like: count("article") + count("li") + cards,
        }
    }

    /// Many list items, a wall of links and images, too many headings, or
    /// none at all.
    #[must_use]
    pub fn looks_like_index(&self) -> bool {
        self.list_like > MAX_LIST_ELEMENTS
            || (self.links > 50 && self.images > 20)
            || self.headings > MAX_HEADINGS
            || self.headings == 0
    }

    fn too_many_list_items(&self) -> bool {
        self.list_like > MAX_LIST_ELEMENTS
    }
}

/// Classify a document as an article or something else.
///
/// `char_threshold` of 0 means the default of 500. `url`, when given,
/// feeds the URL-shape rules that run before anything else.
#[must_use]
pub fn classify_page_type(
    doc: &Document,
    candidates: &Candidates,
    char_threshold: usize,
    url: Option<&str>,
) -> PageType {
    let threshold = if char_threshold == 0 {
        DEFAULT_CHAR_THRESHOLD
    } else {
        char_threshold
    };

    let (page_type, rule) = decide(doc, candidates, threshold, url.filter(|u| !u.is_empty()));
    debug!(%page_type, rule, "classified page");
    page_type
}

fn decide(
    doc: &Document,
    candidates: &Candidates,
    threshold: usize,
    url: Option<&str>,
) -> (PageType, &'static str) {
    let article_if_candidates = if candidates.is_empty() {
        PageType::Other
    } else {
        PageType::Article
    };

    if let Some(url) = url {
        if has_articles_path(url) {
            return (article_if_candidates, "url-articles-path");
        }

        let shape = UrlShape::of(url);
        if shape.has_article_id() {
            return (article_if_candidates, "url-article-id");
        }

        if shape.is_shallow() {
            let strong_content = candidates.top().is_some_and(|top| {
                text_len(doc, top.node) > threshold * 2 && link_density(doc, top.node) < 0.3
            });
            let page_type = if strong_content {
                PageType::Article
            } else {
                PageType::Other
            };
            return (page_type, "url-shallow-path");
        }
    }

    let Some(top) = candidates.top().map(|c| c.node) else {
        return (PageType::Other, "no-candidates");
    };

    let stats = PageStats::collect(doc);
    if stats.looks_like_index() {
        return (PageType::Other, "index-structure");
    }

    let text_length = text_len(doc, top);
    let density = link_density(doc, top);

    if is_semantic_tag(doc, top) {
        if text_length >= threshold / 2 && density <= MAX_LINK_DENSITY {
            if stats.too_many_list_items() {
                return (PageType::Other, "semantic-list");
            }
            return (PageType::Article, "semantic-content");
        }
        if text_length < MIN_SEMANTIC_TEXT {
            return (PageType::Other, "semantic-too-short");
        }
    }

    if text_length >= threshold
        && density <= MAX_LINK_DENSITY
        && (1..=MAX_HEADINGS).contains(&stats.headings)
    {
        return (PageType::Article, "length-density-headings");
    }

    if let Some(second) = candidates.get(1) {
        let top_score = candidates.score_of(top).unwrap_or(0.0);
        let second_score = candidates.score_of(second.node).unwrap_or(0.0);
        let ratio = if top_score > 0.0 {
            second_score / top_score
        } else {
            1.0
        };

        if ratio > SCORE_PARITY_RATIO {
            let body_text = text_len(doc, doc.body());
            let body_link_ratio = if body_text > 0 {
                stats.links as f64 / body_text as f64
            } else {
                0.0
            };
            if body_link_ratio > 0.25 || density > 0.3 {
                return (PageType::Other, "score-parity");
            }
        }
    }

    let body_text = text_len(doc, doc.body());
    if stats.links > 30 && (body_text as f64) < threshold as f64 * 1.5 {
        return (PageType::Other, "link-heavy-body");
    }

    if text_length >= MIN_FALLBACK_TEXT && density <= MAX_LINK_DENSITY {
        if stats.too_many_list_items() {
            return (PageType::Other, "fallback-list");
        }
        return (PageType::Article, "fallback-content");
    }

    (PageType::Other, "fallback")
}

fn text_len(doc: &Document, node: NodeId) -> usize {
    inner_text(doc, node, false).chars().count()
}

/// Whether an element is, or directly wraps, a `main`/`article`, or names
/// itself content in its class or id.
#[must_use]
pub fn is_semantic_tag(doc: &Document, element: NodeId) -> bool {
    if matches!(doc.tag_name(element), "main" | "article") {
        return true;
    }

    if doc.class_name(element).to_lowercase().contains("content")
        || doc.id(element).to_lowercase().contains("content")
    {
        return true;
    }

    doc.element_children(element)
        .any(|child| matches!(doc.tag_name(child), "main" | "article"))
}

/// Class/id fragments that mark an element as structurally significant.
const SIGNIFICANT_FRAGMENTS: &[&str] = &[
    "header",
    "footer",
    "main",
    "content",
    "article",
    "navigation",
    "nav",
    "sidebar",
    "menu",
    "banner",
];

/// Whether an element plays a recognizable structural role: a landmark
/// tag, a landmark ARIA role, or a landmark-like class or id.
#[must_use]
pub fn is_significant_node(doc: &Document, element: NodeId) -> bool {
    if matches!(
        doc.tag_name(element),
        "header" | "footer" | "main" | "article" | "aside" | "nav"
    ) {
        return true;
    }

    let role = doc.attr(element, "role").unwrap_or_default().to_lowercase();
    if matches!(
        role.as_str(),
        "banner" | "contentinfo" | "main" | "navigation" | "complementary"
    ) {
        return true;
    }

    let class = doc.class_name(element).to_lowercase();
    let id = doc.id(element).to_lowercase();
    SIGNIFICANT_FRAGMENTS
        .iter()
        .any(|f| class.contains(f) || id.contains(f))
}
