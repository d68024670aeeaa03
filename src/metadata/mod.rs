//! Metadata extraction.
//!
//! Title and byline come from the document head: the `<title>` element,
//! meta tags and Schema.org JSON-LD. JSON-LD lives in `<script>` elements,
//! so metadata must be read before preprocessing strips them.

pub mod json_ld;
pub mod meta_tags;
pub mod title;

use crate::dom::Document;
use crate::result::Metadata;

pub use json_ld::json_ld;
pub use meta_tags::{article_byline, is_url, unescape_html_entities};
pub use title::article_title;

/// Extract all metadata from a document.
///
/// The title is derived from `<title>` (with JSON-LD `name`/`headline` as a
/// fallback when the page has no title at all). The byline prefers JSON-LD
/// authors over meta tags. Excerpt, site name and published time come from
/// JSON-LD only.
#[must_use]
pub fn extract_metadata(doc: &Document) -> Metadata {
    let structured = json_ld(doc);

    let mut title = article_title(doc);
    if title.is_empty() {
        title.clone_from(&structured.title);
    }

    let byline = if structured.byline.is_empty() {
        meta_tags::meta_byline(doc)
    } else {
        structured.byline.clone()
    };

    Metadata {
        title,
        byline,
        excerpt: structured.excerpt,
        site_name: structured.site_name,
        published_time: structured.published_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_html;

    fn parse(html: &str) -> Document {
        match parse_html(html, None) {
            Ok(doc) => doc,
            Err(err) => panic!("parse failed: {err:?}"),
        }
    }

    #[test]
    fn test_extract_metadata_combines_sources() {
        let doc = parse(
            r#"<html><head><title>How the Tide Pools Were Mapped | Coastal Review</title>
            <meta name="author" content="R. Okafor">
            <script type="application/ld+json">{"@context":"https://schema.org","@type":"NewsArticle",
              "headline":"Mapping tide pools","description":"A field report.",
              "publisher":{"name":"Coastal Review"},"datePublished":"2024-05-01"}</script>
            </head><body></body></html>"#,
        );
        let metadata = extract_metadata(&doc);
        assert_eq!(metadata.title, "How the Tide Pools Were Mapped");
        assert_eq!(metadata.byline, "R. Okafor");
        assert_eq!(metadata.excerpt, "A field report.");
        assert_eq!(metadata.site_name, "Coastal Review");
        assert_eq!(metadata.published_time, "2024-05-01");
    }

    #[test]
    fn test_json_ld_title_used_when_no_title_element() {
        let doc = parse(
            r#"<html><head><script type="application/ld+json">
            {"@context":"http://schema.org/","@type":"BlogPosting","name":" Notes on Gardening "}
            </script></head><body></body></html>"#,
        );
        assert_eq!(extract_metadata(&doc).title, "Notes on Gardening");
    }

    #[test]
    fn test_empty_document_has_empty_metadata() {
        let doc = parse("<html><body><p>x</p></body></html>");
        assert_eq!(extract_metadata(&doc), Metadata::default());
    }
}
