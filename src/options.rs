//! Configuration options for content extraction.
//!
//! The `Options` struct controls the extraction threshold, how many
//! candidates are ranked, and whether the page type is forced.

use crate::patterns::{DEFAULT_CHAR_THRESHOLD, DEFAULT_TOP_CANDIDATES};
use crate::result::PageType;

/// Configuration options for content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_readability::{Options, PageType};
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     char_threshold: 300,
///     forced_page_type: Some(PageType::Article),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Minimum text length (characters) the top candidate needs to be
    /// returned as the content root.
    ///
    /// A value of `0` falls back to the default.
    ///
    /// Default: `500`
    pub char_threshold: usize,

    /// Number of ranked candidates handed to the classifier.
    ///
    /// A value of `0` falls back to the default.
    ///
    /// Default: `5`
    pub top_candidates: usize,

    /// Skip classification and report this page type.
    ///
    /// Default: `None`
    pub forced_page_type: Option<PageType>,

    /// Source URL of the document.
    ///
    /// Stored as the document's base URI and used by the classifier's URL
    /// shape rules. Must be an absolute http(s) URL when set.
    ///
    /// Default: `None`
    pub url: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            char_threshold: DEFAULT_CHAR_THRESHOLD,
            top_candidates: DEFAULT_TOP_CANDIDATES,
            forced_page_type: None,
            url: None,
        }
    }
}

impl Options {
    /// Character threshold with `0` mapped to the default.
    #[must_use]
    pub fn effective_char_threshold(&self) -> usize {
        if self.char_threshold == 0 {
            DEFAULT_CHAR_THRESHOLD
        } else {
            self.char_threshold
        }
    }

    /// Candidate count with `0` mapped to the default.
    #[must_use]
    pub fn effective_top_candidates(&self) -> usize {
        if self.top_candidates == 0 {
            DEFAULT_TOP_CANDIDATES
        } else {
            self.top_candidates
        }
    }
}
