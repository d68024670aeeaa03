//! # rs-readability
//!
//! Readability-style content extraction and page classification.
//!
//! The library finds the element holding a page's main readable content,
//! discarding navigation, ads and boilerplate, and classifies the page as an
//! article or something else (index pages, landing pages, error pages).
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_readability::{extract, PageType};
//!
//! let paragraph = "Readable prose with enough words to count as content. ".repeat(12);
//! let html = format!(
//!     "<html><head><title>Field Notes on Tide Pools</title></head>\
//!      <body><nav><a href='/'>Home</a></nav><article><p>{paragraph}</p></article></body></html>"
//! );
//!
//! let extraction = extract(&html)?;
//! assert_eq!(extraction.result.page_type, PageType::Article);
//! assert!(extraction.content_text().is_some_and(|t| t.starts_with("Readable prose")));
//! # Ok::<(), rs_readability::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! - **Preprocess**: cut noise tags (`nav`, `script`, `form`, ...) and ad
//!   containers out of the tree.
//! - **Score**: scorable elements hand a text-based contribution to their
//!   three nearest ancestors; candidates are damped by link density,
//!   promoted to better-scored containers and ranked.
//! - **Classify**: URL shape, index-page structure, semantic tags and the
//!   score spread decide between article and other.
//! - **Fallback**: articles without a content root get header, footer and
//!   landmark hints instead.
//!
//! Each stage is available on its own for callers that manage the
//! [`Document`] themselves.

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// Arena-backed element/text tree.
pub mod dom;

/// HTML parsing into the arena tree.
pub mod parser;

/// HTML and text serialization of arena nodes.
pub mod serialize;

/// Inner text, link density and text density.
pub mod metrics;

/// Noise and ad removal before scoring.
pub mod preprocess;

/// Candidate scoring and ranking.
pub mod scoring;

/// Article/other page classification.
pub mod classify;

/// Header, footer and landmark hints.
pub mod structure;

/// Title, byline and JSON-LD metadata.
pub mod metadata;

/// URL shape heuristics.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use classify::{classify_page_type, is_semantic_tag, is_significant_node, PageStats};
pub use dom::{Document, NodeId};
pub use error::{Error, Result};
pub use extract::{extract_content, Extraction, Extractor};
pub use options::Options;
pub use parser::parse_html;
pub use patterns::{DEFAULT_CHAR_THRESHOLD, DEFAULT_TOP_CANDIDATES};
pub use preprocess::preprocess;
pub use result::{ExtractResult, Metadata, PageContent, PageType, ParsePageTypeError};
pub use scoring::{class_weight, find_candidates, is_probably_content, Candidate, Candidates, ContentScores};
pub use structure::{find_structural_elements, StructuralElements};
pub use url_utils::{analyze_url_pattern, expected_page_type_by_url, UrlPattern};

/// Extracts main content from an HTML document using default options.
///
/// # Example
///
/// ```rust
/// use rs_readability::extract;
///
/// let extraction = extract("<html><body></body></html>")?;
/// assert!(extraction.result.root.is_none());
/// # Ok::<(), rs_readability::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract(html: &str) -> Result<Extraction> {
    extract_with_options(html, &Options::default())
}

/// Extracts main content from an HTML document with custom options.
///
/// Returns [`Error::InvalidUrl`] if `options.url` is set to anything but an
/// absolute http(s) URL.
///
/// # Example
///
/// ```rust
/// use rs_readability::{extract_with_options, Options, PageType};
///
/// let options = Options {
///     url: Some("https://example.com/articles/42".to_string()),
///     ..Options::default()
/// };
/// let html = "<html><body><div><p>A teaser that is too short to extract.</p></div></body></html>";
/// let extraction = extract_with_options(html, &options)?;
/// assert_eq!(extraction.result.page_type, PageType::Article);
/// # Ok::<(), rs_readability::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_with_options(html: &str, options: &Options) -> Result<Extraction> {
    Extractor::new(options.clone()).extract(html)
}

/// Extracts main content from HTML bytes with automatic encoding detection.
///
/// The charset comes from a byte order mark or a `<meta>` declaration in
/// the first 1024 bytes, defaulting to UTF-8. Invalid sequences are
/// replaced with U+FFFD rather than causing errors.
///
/// # Example
///
/// ```rust
/// use rs_readability::extract_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"><title>Caf\xE9 review</title></head><body></body></html>";
/// let extraction = extract_bytes(html)?;
/// assert_eq!(extraction.result.title, "Caf\u{e9} review");
/// # Ok::<(), rs_readability::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_bytes(html: &[u8]) -> Result<Extraction> {
    extract_bytes_with_options(html, &Options::default())
}

/// [`extract_bytes`] with custom options.
#[allow(clippy::missing_errors_doc)]
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> Result<Extraction> {
    Extractor::new(options.clone()).extract_bytes(html)
}
