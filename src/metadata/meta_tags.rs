//! Byline from HTML meta tags.
//!
//! Dublin Core, `author`, Parse.ly and Open Graph article tags are
//! collected by normalized key; later tags with the same key win.

use std::collections::HashMap;

use crate::dom::Document;
use crate::metadata::json_ld::json_ld;
use crate::patterns::{META_NAME, META_PROPERTY, NAMED_ENTITY, NUMERIC_ENTITY};

/// Keys checked for a byline, in priority order.
const BYLINE_KEYS: &[&str] = &["dc:creator", "dcterm:creator", "author", "parsely-author"];

/// Author line for the article: JSON-LD first, then meta tags. Empty when
/// neither names an author.
#[must_use]
pub fn article_byline(doc: &Document) -> String {
    let structured = json_ld(doc);
    if !structured.byline.is_empty() {
        return structured.byline;
    }
    meta_byline(doc)
}

/// Author line from meta tags only.
///
/// `article:author` overrides the other keys unless it holds a profile URL.
#[must_use]
pub fn meta_byline(doc: &Document) -> String {
    let values = collect_meta_values(doc);

    let mut byline = BYLINE_KEYS
        .iter()
        .find_map(|key| values.get(*key).filter(|v| !v.is_empty()))
        .cloned()
        .unwrap_or_default();

    if let Some(author) = values.get("article:author") {
        if !author.is_empty() && !is_url(author) {
            byline.clone_from(author);
        }
    }

    unescape_html_entities(&byline)
}

/// Meta tag contents keyed by normalized `property` / `name`.
fn collect_meta_values(doc: &Document) -> HashMap<String, String> {
    let mut values = HashMap::new();

    for meta in doc.elements_by_tag_name(doc.root(), "meta") {
        let content = doc.attr(meta, "content").unwrap_or_default();
        if content.is_empty() {
            continue;
        }

        if let Some(property) = doc.attr(meta, "property").filter(|p| !p.is_empty()) {
            if let Some(found) = META_PROPERTY.find(property) {
                values.insert(normalize_key(found.as_str()), content.to_string());
            }
        }

        if let Some(name) = doc.attr(meta, "name").filter(|n| !n.is_empty()) {
            if META_NAME.is_match(name) {
                values.insert(normalize_key(name).replace('.', ":"), content.to_string());
            }
        }
    }

    values
}

fn normalize_key(key: &str) -> String {
    key.to_lowercase().split_whitespace().collect()
}

/// Whether a string looks like an http(s) URL.
#[must_use]
pub fn is_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// Decode the five XML named entities and numeric character references.
///
/// Invalid code points (zero, surrogates, beyond U+10FFFF) become U+FFFD.
#[must_use]
pub fn unescape_html_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }

    let named = NAMED_ENTITY.replace_all(s, |caps: &regex::Captures<'_>| {
        match &caps[1] {
            "quot" => "\"",
            "amp" => "&",
            "apos" => "'",
            "lt" => "<",
            _ => ">",
        }
        .to_string()
    });

    NUMERIC_ENTITY
        .replace_all(&named, |caps: &regex::Captures<'_>| {
            let code = match (caps.get(1), caps.get(2)) {
                (Some(hex), _) => u32::from_str_radix(hex.as_str(), 16).ok(),
                (None, Some(dec)) => dec.as_str().parse::<u32>().ok(),
                (None, None) => None,
            };
            code.filter(|&c| c != 0)
                .and_then(char::from_u32)
                .unwrap_or('\u{FFFD}')
                .to_string()
        })
        .into_owned()
}
