//! Article title from the `<title>` element.
//!
//! Page titles usually carry the site name after a separator
//! (`Story | Site`, `Site: Story`). The heuristics below strip it when the
//! remainder still reads like a title.

use crate::dom::Document;
use crate::metrics::inner_text;
use crate::patterns::{NORMALIZE, TITLE_HIERARCHICAL_SEPARATOR, TITLE_SEPARATOR, TITLE_SEPARATOR_CHARS};

/// Titles shorter or longer than this are swapped for the page's only h1.
const MIN_TITLE_LEN: usize = 15;
const MAX_TITLE_LEN: usize = 150;

fn word_count(s: &str) -> usize {
    s.split_whitespace().count()
}

/// Best guess at the article title, or an empty string.
#[must_use]
pub fn article_title(doc: &Document) -> String {
    let root = doc.root();
    let original = doc
        .elements_by_tag_name(root, "title")
        .first()
        .map(|&t| inner_text(doc, t, false))
        .unwrap_or_default();

    let mut current = original.clone();
    let mut had_hierarchical_separator = false;

    if TITLE_SEPARATOR.is_match(&current) {
        had_hierarchical_separator = TITLE_HIERARCHICAL_SEPARATOR.is_match(&current);

        if let Some(last) = TITLE_SEPARATOR.find_iter(&original).last() {
            current = original[..last.start()].to_string();
        }

        if word_count(&current) < 3 {
            let parts: Vec<&str> = TITLE_SEPARATOR.split(&original).collect();
            if parts.len() > 1 {
                current = parts[1..].join(" ");
            }
        }
    } else if current.contains(": ") {
        let trimmed = current.trim();
        let heading_matches = doc
            .elements_by_tag_names(root, &["h1", "h2"])
            .into_iter()
            .any(|h| inner_text(doc, h, false).trim() == trimmed);

        if !heading_matches {
            current = title_after_colon(&original);
        }
    } else {
        let length = current.chars().count();
        if !(MIN_TITLE_LEN..=MAX_TITLE_LEN).contains(&length) {
            let h1s = doc.elements_by_tag_name(root, "h1");
            if let [only] = h1s.as_slice() {
                current = inner_text(doc, *only, false);
            }
        }
    }

    let current = NORMALIZE.replace_all(current.trim(), " ").into_owned();

    // Short results are only trusted when a breadcrumb-style title lost
    // exactly its last crumb.
    let words = word_count(&current);
    let original_words = word_count(&TITLE_SEPARATOR_CHARS.replace_all(&original, ""));
    if words <= 4
        && (!had_hierarchical_separator || original_words.checked_sub(1) != Some(words))
    {
        return NORMALIZE.replace_all(original.trim(), " ").into_owned();
    }

    current
}

/// Text after the last colon, or after the first one when that leaves
/// too few words. Falls back to the whole title when the part before the
/// first colon is long.
fn title_after_colon(original: &str) -> String {
    let Some(last) = original.rfind(':') else {
        return original.to_string();
    };
    let after_last = &original[last + 1..];
    if word_count(after_last) >= 3 {
        return after_last.to_string();
    }

    let Some(first) = original.find(':') else {
        return after_last.to_string();
    };
    if word_count(&original[..first]) > 5 {
        original.to_string()
    } else {
        original[first + 1..].to_string()
    }
}
