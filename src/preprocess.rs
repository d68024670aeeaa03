//! Noise removal before scoring.
//!
//! Two passes, in order: every element whose tag is in [`NOISE_TAGS`] is cut
//! out with its subtree, then every element under the body that looks like
//! an ad (class/id fragments or ad attributes) is cut out. Running the
//! preprocessor again finds nothing left to remove.

use tracing::debug;

use crate::dom::{Document, NodeId};
use crate::patterns::{AD_ATTRIBUTE, AD_PATTERNS, NOISE_TAGS};

/// Remove noise elements from the document in place.
///
/// Returns the same document for chaining.
pub fn preprocess(doc: &mut Document) -> &mut Document {
    let tags = remove_noise_tags(doc);
    let ads = remove_ads(doc);
    debug!(noise_tags = tags, ads, "preprocessed document");
    doc
}

/// Cut out every element whose tag is a noise tag. Returns the number of
/// elements detached.
fn remove_noise_tags(doc: &mut Document) -> usize {
    let mut removed = 0;
    for tag in NOISE_TAGS {
        for element in doc.elements_by_tag_name(doc.root(), tag) {
            if doc.detach(element) {
                removed += 1;
            }
        }
    }
    removed
}

/// Cut out every element under the body that looks like an ad. The body
/// itself is never removed.
fn remove_ads(doc: &mut Document) -> usize {
    let body = doc.body();
    let ads: Vec<NodeId> = doc
        .elements_by_tag_name(body, "*")
        .into_iter()
        .filter(|&el| el != body && is_likely_ad(doc, el))
        .collect();

    // Descendants of an already removed ad are gone with it.
    ads.into_iter()
        .filter(|&el| doc.is_attached(el) && doc.detach(el))
        .count()
}

/// Whether an element looks like an advertisement.
///
/// Checks the combined `class` + `id` string against the ad patterns, then
/// `role="advertisement"` and `data-ad` / `data-ad-*` attributes.
#[must_use]
pub fn is_likely_ad(doc: &Document, element: NodeId) -> bool {
    let combined = format!("{} {}", doc.class_name(element), doc.id(element));
    let combined = combined.trim();
    if !combined.is_empty() && AD_PATTERNS.iter().any(|p| p.is_match(combined)) {
        return true;
    }

    if doc.attr(element, "role") == Some("advertisement") {
        return true;
    }

    doc.element(element).is_some_and(|el| {
        el.attrs.keys().any(|name| {
            name == AD_ATTRIBUTE
                || name
                    .strip_prefix(AD_ATTRIBUTE)
                    .is_some_and(|rest| rest.starts_with('-'))
        })
    })
}
