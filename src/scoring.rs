//! Candidate scoring.
//!
//! Every scorable element with enough text hands a contribution to its
//! parent, grandparent and great-grandparent, decaying with distance. The
//! ancestors that received score become candidates; their scores are then
//! damped by link density, nudged by text density, promoted to better-scored
//! containers and ranked.
//!
//! Scores live in a [`ContentScores`] side map keyed by [`NodeId`], so the
//! tree itself is never touched. An element without an entry has not been
//! scored, which is distinct from a score of zero.

use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::{debug, trace};

use crate::dom::{Document, NodeId};
use crate::metrics::{inner_text, link_density, text_density};
use crate::patterns::{
    COMMAS, DEFAULT_TOP_CANDIDATES, NEGATIVE, OK_MAYBE_ITS_A_CANDIDATE, POSITIVE, TAGS_TO_SCORE,
    UNLIKELY_CANDIDATES,
};

/// Elements with less text than this neither score nor contribute.
pub const MIN_SCORABLE_TEXT: usize = 25;

/// How many ancestor levels receive a leaf's contribution.
pub const ANCESTOR_LEVELS: usize = 3;

/// Tags that short-circuit scoring when exactly one exists.
const SEMANTIC_SHORTCUT_TAGS: &[&str] = &["article", "main"];

const CLASS_WEIGHT: f64 = 25.0;

/// Accumulated content scores, keyed by element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentScores {
    scores: HashMap<NodeId, f64>,
}

impl ContentScores {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Score of `node`, or `None` if it was never scored.
    #[must_use]
    pub fn get(&self, node: NodeId) -> Option<f64> {
        self.scores.get(&node).copied()
    }

    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.scores.contains_key(&node)
    }

    pub fn insert(&mut self, node: NodeId, score: f64) {
        self.scores.insert(node, score);
    }

    /// Add `delta` to an already scored node. Unscored nodes are left alone.
    pub fn add(&mut self, node: NodeId, delta: f64) {
        if let Some(score) = self.scores.get_mut(&node) {
            *score += delta;
        }
    }

    /// Multiply an already scored node's score by `factor`.
    pub fn scale(&mut self, node: NodeId, factor: f64) {
        if let Some(score) = self.scores.get_mut(&node) {
            *score *= factor;
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Forget every score.
    pub fn clear(&mut self) {
        self.scores.clear();
    }
}

/// A candidate element with its ranking score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub node: NodeId,
    /// Score at the time the candidate was ranked. 0 for candidates that
    /// were never scored (semantic shortcut and body fallback).
    pub score: f64,
}

/// Ranked candidates plus the score annotations produced while ranking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Candidates {
    ranked: Vec<Candidate>,
    scores: ContentScores,
}

impl Candidates {
    #[must_use]
    pub fn new(ranked: Vec<Candidate>, scores: ContentScores) -> Self {
        Self { ranked, scores }
    }

    /// Unscored candidates in the given order.
    #[must_use]
    pub fn from_nodes(nodes: &[NodeId]) -> Self {
        Self {
            ranked: nodes.iter().map(|&node| Candidate { node, score: 0.0 }).collect(),
            scores: ContentScores::default(),
        }
    }

    #[must_use]
    pub fn top(&self) -> Option<&Candidate> {
        self.ranked.first()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Candidate> {
        self.ranked.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.ranked.iter()
    }

    /// Candidate elements, best first.
    #[must_use]
    pub fn nodes(&self) -> Vec<NodeId> {
        self.ranked.iter().map(|c| c.node).collect()
    }

    #[must_use]
    pub fn scores(&self) -> &ContentScores {
        &self.scores
    }

    /// Current annotation of `node`; `None` if it was never scored.
    #[must_use]
    pub fn score_of(&self, node: NodeId) -> Option<f64> {
        self.scores.get(node)
    }
}

/// Find the elements most likely to hold the main content, best first.
///
/// Returns at most `top_n` candidates (`0` means the default of 5) and at
/// least one: if nothing scores, the body is returned alone.
#[must_use]
pub fn find_candidates(doc: &Document, top_n: usize) -> Candidates {
    let top_n = if top_n == 0 { DEFAULT_TOP_CANDIDATES } else { top_n };

    if let Some(semantic) = single_semantic_element(doc) {
        debug!(tag = doc.tag_name(semantic), "single semantic element, skipping scoring");
        return Candidates::from_nodes(&[semantic]);
    }

    let mut scores = ContentScores::new();
    let discovered = score_elements(doc, &mut scores);
    let mut ranked = adjust_and_promote(doc, &discovered, &mut scores);

    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked.truncate(top_n);

    debug!(
        scored = scores.len(),
        ranked = ranked.len(),
        "ranked content candidates"
    );

    if ranked.is_empty() {
        return Candidates::new(
            vec![Candidate {
                node: doc.body(),
                score: 0.0,
            }],
            scores,
        );
    }

    Candidates::new(ranked, scores)
}

/// The only `<article>`, or failing that the only `<main>`, in the document.
fn single_semantic_element(doc: &Document) -> Option<NodeId> {
    SEMANTIC_SHORTCUT_TAGS.iter().find_map(|tag| {
        let found = doc.elements_by_tag_name(doc.root(), tag);
        (found.len() == 1).then(|| found[0])
    })
}

/// Distribute leaf contributions to ancestors. Returns the newly scored
/// ancestors in discovery order.
fn score_elements(doc: &Document, scores: &mut ContentScores) -> Vec<NodeId> {
    let body = doc.body();
    let mut discovered = Vec::new();

    let leaves = TAGS_TO_SCORE
        .iter()
        .flat_map(|tag| doc.elements_by_tag_name(body, tag));

    for leaf in leaves {
        let text = inner_text(doc, leaf, false);
        let Some(contribution) = content_contribution(&text) else {
            continue;
        };

        for (level, ancestor) in doc.ancestors(leaf, ANCESTOR_LEVELS).into_iter().enumerate() {
            if !scores.contains(ancestor) {
                scores.insert(ancestor, initial_score(doc, ancestor));
                discovered.push(ancestor);
            }
            scores.add(ancestor, contribution / ancestor_divisor(level));
        }
    }

    discovered
}

/// Base contribution of a scorable element's text: 1, plus one per comma,
/// plus one per full 100 characters up to 3. `None` for text shorter than
/// [`MIN_SCORABLE_TEXT`].
#[must_use]
pub fn content_contribution(text: &str) -> Option<f64> {
    let length = text.chars().count();
    if length < MIN_SCORABLE_TEXT {
        return None;
    }
    let commas = COMMAS.find_iter(text).count();
    Some(1.0 + commas as f64 + (length / 100).min(3) as f64)
}

/// Divisor applied to a contribution at ancestor `level` (0 = parent).
#[must_use]
pub fn ancestor_divisor(level: usize) -> f64 {
    match level {
        0 => 1.0,
        1 => 2.0,
        _ => (level * 3) as f64,
    }
}

/// Apply density adjustments and parent promotion to every discovered
/// candidate, returning distinct promoted candidates in discovery order.
fn adjust_and_promote(
    doc: &Document,
    discovered: &[NodeId],
    scores: &mut ContentScores,
) -> Vec<Candidate> {
    let mut promoted: Vec<Candidate> = Vec::new();

    for &candidate in discovered {
        scores.scale(candidate, 1.0 - link_density(doc, candidate));

        let density = text_density(doc, candidate);
        if density > 0.0 {
            scores.scale(candidate, 1.0 + (density / 10.0).min(0.1));
        }

        let best = promote(doc, candidate, scores);
        let Some(score) = scores.get(best) else {
            continue;
        };
        if promoted.iter().any(|c| c.node == best) {
            continue;
        }
        if best != candidate {
            trace!(from = candidate.index(), to = best.index(), "promoted candidate to ancestor");
        }
        promoted.push(Candidate { node: best, score });
    }

    promoted
}

/// Walk from `candidate` towards the body, switching to any scored ancestor
/// whose score beats the best seen so far.
fn promote(doc: &Document, candidate: NodeId, scores: &ContentScores) -> NodeId {
    let mut best = candidate;
    let mut parent = doc.parent(candidate);
    while let Some(ancestor) = parent {
        if doc.is_tag(ancestor, "body") {
            break;
        }
        if let (Some(ancestor_score), Some(best_score)) = (scores.get(ancestor), scores.get(best)) {
            if ancestor_score > best_score {
                best = ancestor;
            }
        }
        parent = doc.parent(ancestor);
    }
    best
}

/// Starting score of a newly scored element: a tag bonus plus its class
/// weight.
#[must_use]
pub fn initial_score(doc: &Document, element: NodeId) -> f64 {
    let tag_score = match doc.tag_name(element) {
        "div" => 5.0,
        "pre" | "td" | "blockquote" => 3.0,
        "address" | "ol" | "ul" | "dl" | "dd" | "dt" | "li" | "form" => -3.0,
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "th" => -5.0,
        _ => 0.0,
    };
    tag_score + class_weight(doc, element)
}

/// Score adjustment from `class` and `id`: each attribute independently
/// gains 25 on a positive match and loses 25 on a negative match.
#[must_use]
pub fn class_weight(doc: &Document, element: NodeId) -> f64 {
    [doc.class_name(element), doc.id(element)]
        .into_iter()
        .filter(|value| !value.is_empty())
        .map(|value| {
            let mut weight = 0.0;
            if NEGATIVE.is_match(value) {
                weight -= CLASS_WEIGHT;
            }
            if POSITIVE.is_match(value) {
                weight += CLASS_WEIGHT;
            }
            weight
        })
        .sum()
}

/// Quick check whether a single element reads like content: visible, not
/// named like boilerplate, at least 140 characters, link density at most
/// 0.5 and text density at least 0.1.
#[must_use]
pub fn is_probably_content(doc: &Document, element: NodeId) -> bool {
    if !doc.is_probably_visible(element) {
        return false;
    }

    let match_string = format!("{} {}", doc.class_name(element), doc.id(element));
    if UNLIKELY_CANDIDATES.is_match(&match_string) && !OK_MAYBE_ITS_A_CANDIDATE.is_match(&match_string) {
        return false;
    }

    if inner_text(doc, element, false).chars().count() < 140 {
        return false;
    }

    if link_density(doc, element) > 0.5 {
        return false;
    }

    text_density(doc, element) >= 0.1
}
