//! Extraction pipeline.
//!
//! Preprocess, rank candidates, pick the content root, decide the page
//! type and, for articles without a content root, collect structural
//! hints. [`extract_content`] runs the decision steps on a document the
//! caller already parsed; [`Extractor`] and the crate-level `extract*`
//! functions run the whole pipeline from HTML.

use tracing::debug;

use crate::classify::classify_page_type;
use crate::dom::{Document, NodeId};
use crate::encoding;
use crate::error::{Error, Result};
use crate::metadata::extract_metadata;
use crate::metrics::{inner_text, link_density};
use crate::options::Options;
use crate::parser::parse_html;
use crate::preprocess::preprocess;
use crate::result::{ExtractResult, Metadata, PageType};
use crate::scoring::{find_candidates, Candidates};
use crate::serialize::{outer_html, text_content};
use crate::structure::{find_structural_elements, StructuralElements};
use crate::url_utils::is_absolute_url;

/// Highest link density a content root may have.
const MAX_CONTENT_LINK_DENSITY: f64 = 0.5;

/// Run candidate selection, classification and the structural fallback
/// over an already preprocessed document.
///
/// Title and byline are read from whatever the document still contains;
/// preprocessing removes JSON-LD scripts, so callers starting from HTML
/// should prefer [`Extractor`] or [`crate::extract_with_options`].
///
/// The URL rules see `options.url` if set, else the document's base URI.
#[must_use]
pub fn extract_content(doc: &Document, options: &Options) -> ExtractResult {
    extract_content_with_metadata(doc, options, &extract_metadata(doc))
}

/// [`extract_content`] with metadata read beforehand.
#[must_use]
pub(crate) fn extract_content_with_metadata(
    doc: &Document,
    options: &Options,
    metadata: &Metadata,
) -> ExtractResult {
    let threshold = options.effective_char_threshold();
    let candidates = find_candidates(doc, options.effective_top_candidates());
    let root = select_content_root(doc, &candidates, threshold);

    let page_type = match (options.forced_page_type, root) {
        (Some(forced), _) => forced,
        (None, Some(_)) => PageType::Article,
        (None, None) => {
            let url = options.url.as_deref().or(doc.base_uri());
            classify_page_type(doc, &candidates, threshold, url)
        }
    };

    let structure = if page_type == PageType::Article && root.is_none() {
        find_structural_elements(doc)
    } else {
        StructuralElements::default()
    };

    debug!(
        candidates = candidates.len(),
        has_root = root.is_some(),
        %page_type,
        "extracted content"
    );

    ExtractResult {
        title: metadata.title.clone(),
        byline: metadata.byline.clone(),
        root,
        node_count: doc.count_nodes(root),
        page_type,
        header: structure.header,
        footer: structure.footer,
        other_significant_nodes: structure.other_significant_nodes,
    }
}

/// The top candidate, if it has at least `threshold` characters of text
/// and a link density of at most 0.5.
fn select_content_root(doc: &Document, candidates: &Candidates, threshold: usize) -> Option<NodeId> {
    let top = candidates.top()?.node;
    let text_length = inner_text(doc, top, false).chars().count();
    (text_length >= threshold && link_density(doc, top) <= MAX_CONTENT_LINK_DENSITY).then_some(top)
}

/// A parsed and preprocessed document together with what was extracted
/// from it.
///
/// Node ids in [`ExtractResult`] refer to `document`.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub document: Document,
    pub result: ExtractResult,
    /// Full metadata, read before preprocessing.
    pub metadata: Metadata,
}

impl Extraction {
    /// HTML of the content root, if one was found.
    #[must_use]
    pub fn content_html(&self) -> Option<String> {
        self.result.root.map(|root| outer_html(&self.document, root))
    }

    /// Normalized text of the content root, if one was found.
    #[must_use]
    pub fn content_text(&self) -> Option<String> {
        self.result.root.map(|root| text_content(&self.document, root))
    }

    /// HTML of the structural header hint.
    #[must_use]
    pub fn header_html(&self) -> Option<String> {
        self.result.header.map(|node| outer_html(&self.document, node))
    }

    /// HTML of the structural footer hint.
    #[must_use]
    pub fn footer_html(&self) -> Option<String> {
        self.result.footer.map(|node| outer_html(&self.document, node))
    }
}

/// Reusable extraction with fixed options.
///
/// # Example
///
/// ```rust
/// use rs_readability::{Extractor, Options};
///
/// let extractor = Extractor::new(Options {
///     char_threshold: 50,
///     ..Options::default()
/// });
/// let html = "<html><body><article><p>A short note that is long enough for a low threshold.</p></article></body></html>";
/// let extraction = extractor.extract(html)?;
/// assert!(extraction.result.has_content());
/// # Ok::<(), rs_readability::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    options: Options,
}

impl Extractor {
    /// Create an extractor.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Parse, preprocess and extract `html`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if `options.url` is set but is not an
    /// absolute http(s) URL, and [`Error::ParseError`] if the HTML yields
    /// no root element.
    pub fn extract(&self, html: &str) -> Result<Extraction> {
        let url = self.validated_url()?;

        debug!(html_len = html.len(), "starting extraction");
        let mut document = parse_html(html, url)?;

        // JSON-LD lives in <script>, which preprocessing removes.
        let metadata = extract_metadata(&document);
        preprocess(&mut document);

        let result = extract_content_with_metadata(&document, &self.options, &metadata);

        Ok(Extraction {
            document,
            result,
            metadata,
        })
    }

    /// [`Extractor::extract`] for raw bytes in any charset declared by a
    /// meta tag.
    ///
    /// # Errors
    ///
    /// Same as [`Extractor::extract`].
    pub fn extract_bytes(&self, html: &[u8]) -> Result<Extraction> {
        let html = encoding::transcode_to_utf8(html);
        self.extract(&html)
    }

    fn validated_url(&self) -> Result<Option<&str>> {
        match self.options.url.as_deref() {
            None => Ok(None),
            Some(url) => {
                let (is_absolute, _) = is_absolute_url(url);
                if is_absolute {
                    Ok(Some(url.trim()))
                } else {
                    Err(Error::InvalidUrl(url.to_string()))
                }
            }
        }
    }
}
