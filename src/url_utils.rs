//! URL shape heuristics.
//!
//! The classifier never resolves or fetches URLs. It only looks at the
//! shape of the path: how deep it is and what the trailing segment looks
//! like. Query strings and fragments are ignored.

use std::fmt;

use url::Url;

use crate::patterns::{ALPHANUMERIC, ALPHA_ONLY, DIGITS_ONLY};
use crate::result::PageType;

/// Minimum length of a mixed letters-and-digits segment to count as an ID.
const MIN_ALPHANUMERIC_ID_LEN: usize = 5;

/// Check if a string is an absolute http(s) URL with a host.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if s.is_empty() {
        return (false, None);
    }

    if !s.starts_with("http://") && !s.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) => {
            if url.host().is_some() {
                (true, Some(url))
            } else {
                (false, None)
            }
        }
        Err(_) => (false, None),
    }
}

/// Parse a URL string into a Url object.
///
/// # Returns
/// * `Some(Url)` if valid absolute URL, `None` otherwise
#[must_use]
pub fn parse_url(url_str: &str) -> Option<Url> {
    let (is_abs, parsed) = is_absolute_url(url_str);
    if is_abs {
        parsed
    } else {
        None
    }
}

/// The parts of a URL the classifier cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlShape {
    /// Last path segment with any file extension removed. Empty for a
    /// trailing slash or bare domain.
    pub trailing_segment: String,

    /// Number of path segments, ignoring one trailing slash. `None` when
    /// the string is not an absolute http(s) URL.
    pub depth: Option<usize>,
}

impl UrlShape {
    /// Split `url` into its trailing segment and path depth.
    ///
    /// Strings that do not parse as absolute http(s) URLs fall back to a
    /// raw split on `/` and carry no depth.
    #[must_use]
    pub fn of(url: &str) -> Self {
        match parse_url(url) {
            Some(parsed) => {
                let mut segments: Vec<&str> = parsed
                    .path_segments()
                    .map(Iterator::collect)
                    .unwrap_or_default();
                let last = segments.last().copied().unwrap_or_default();
                let trailing_segment = strip_extension(last).to_string();
                if segments.last().is_some_and(|s| s.is_empty()) {
                    segments.pop();
                }
                Self {
                    trailing_segment,
                    depth: Some(segments.len()),
                }
            }
            None => {
                let without_query = url
                    .split(['?', '#'])
                    .next()
                    .unwrap_or_default();
                let last = without_query.rsplit('/').next().unwrap_or_default();
                Self {
                    trailing_segment: strip_extension(last).to_string(),
                    depth: None,
                }
            }
        }
    }

    /// Whether the trailing segment looks like an article identifier: all
    /// digits, or at least five letters/digits/`-`/`_` including a digit.
    #[must_use]
    pub fn has_article_id(&self) -> bool {
        is_article_id(&self.trailing_segment)
    }

    /// A bare domain or a single path segment such as `/about`.
    #[must_use]
    pub fn is_shallow(&self) -> bool {
        self.depth.is_some_and(|d| d <= 1)
    }
}

fn strip_extension(segment: &str) -> &str {
    segment.split('.').next().unwrap_or_default()
}

/// Whether `segment` looks like a generated article identifier.
#[must_use]
pub fn is_article_id(segment: &str) -> bool {
    if DIGITS_ONLY.is_match(segment) {
        return true;
    }
    ALPHANUMERIC.is_match(segment)
        && segment.chars().any(|c| c.is_ascii_digit())
        && segment.len() >= MIN_ALPHANUMERIC_ID_LEN
}

/// Whether the URL path contains an `/articles/` directory.
#[must_use]
pub fn has_articles_path(url: &str) -> bool {
    url.contains("/articles/")
}

/// Page type suggested by the URL alone.
///
/// `/articles/` paths, paths two or more segments deep, and paths ending
/// in an article identifier are articles. Everything else, including top
/// pages and single-segment user pages, is `Other`.
#[must_use]
pub fn expected_page_type_by_url(url: &str) -> PageType {
    if has_articles_path(url) {
        return PageType::Article;
    }

    let shape = UrlShape::of(url);
    if shape.depth.is_some_and(|d| d >= 2) || shape.has_article_id() {
        return PageType::Article;
    }

    PageType::Other
}

/// Classification of a URL's trailing path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlPattern {
    /// No trailing segment (bare domain or trailing slash).
    Empty,
    /// Digits only.
    Numeric(String),
    /// Letters, digits, `-` and `_`, with at least one digit.
    AlphaNumeric(String),
    /// Letters, `-` and `_` only.
    Alphabetic(String),
    /// Anything else.
    Other(String),
}

impl fmt::Display for UrlPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty"),
            Self::Numeric(s) => write!(f, "numeric ({s})"),
            Self::AlphaNumeric(s) => write!(f, "alphanumeric ({s})"),
            Self::Alphabetic(s) => write!(f, "alphabetic ({s})"),
            Self::Other(s) => write!(f, "other ({s})"),
        }
    }
}

/// Describe the trailing segment of `url`. Useful when tuning the URL
/// rules.
#[must_use]
pub fn analyze_url_pattern(url: &str) -> UrlPattern {
    let segment = UrlShape::of(url).trailing_segment;

    if segment.is_empty() {
        UrlPattern::Empty
    } else if DIGITS_ONLY.is_match(&segment) {
        UrlPattern::Numeric(segment)
    } else if ALPHANUMERIC.is_match(&segment) && segment.chars().any(|c| c.is_ascii_digit()) {
        UrlPattern::AlphaNumeric(segment)
    } else if ALPHA_ONLY.is_match(&segment) {
        UrlPattern::Alphabetic(segment)
    } else {
        UrlPattern::Other(segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_absolute_url() {
        assert!(is_absolute_url("https://example.com/x").0);
        assert!(!is_absolute_url("/relative/path").0);
        assert!(!is_absolute_url("ftp://example.com").0);
        assert!(!is_absolute_url("").0);
    }

    #[test]
    fn test_url_shape_depth_and_segment() {
        let shape = UrlShape::of("https://example.com/");
        assert_eq!(shape.depth, Some(0));
        assert_eq!(shape.trailing_segment, "");
        assert!(shape.is_shallow());

        let shape = UrlShape::of("https://example.com/about/");
        assert_eq!(shape.depth, Some(1));
        assert_eq!(shape.trailing_segment, "");

        let shape = UrlShape::of("https://example.com/news/2024/story-42.html?ref=rss#top");
        assert_eq!(shape.depth, Some(3));
        assert_eq!(shape.trailing_segment, "story-42");
        assert!(!shape.is_shallow());
    }

    #[test]
    fn test_url_shape_falls_back_to_raw_split() {
        let shape = UrlShape::of("example.com/posts/98765?x=1");
        assert_eq!(shape.depth, None);
        assert_eq!(shape.trailing_segment, "98765");
        assert!(shape.has_article_id());
        assert!(!shape.is_shallow());
    }

    #[test]
    fn test_article_ids() {
        assert!(is_article_id("12345"));
        assert!(is_article_id("1"));
        assert!(is_article_id("abc12"));
        assert!(is_article_id("n3ws_item-9"));
        assert!(!is_article_id("ab12"));
        assert!(!is_article_id("about-us"));
        assert!(!is_article_id(""));
    }

    #[test]
    fn test_expected_page_type_by_url() {
        assert_eq!(
            expected_page_type_by_url("https://example.com/articles/a"),
            PageType::Article
        );
        assert_eq!(expected_page_type_by_url("https://example.com/blog/post"), PageType::Article);
        assert_eq!(expected_page_type_by_url("https://example.com/docs/guide/setup/linux"), PageType::Article);
        assert_eq!(expected_page_type_by_url("https://example.com/p/"), PageType::Other);
        assert_eq!(expected_page_type_by_url("https://example.com/"), PageType::Other);
        assert_eq!(expected_page_type_by_url("https://example.com/20240101"), PageType::Article);
    }

    #[test]
    fn test_analyze_url_pattern() {
        assert_eq!(analyze_url_pattern("https://example.com/"), UrlPattern::Empty);
        assert_eq!(
            analyze_url_pattern("https://example.com/items/123.html"),
            UrlPattern::Numeric("123".to_string())
        );
        assert_eq!(
            analyze_url_pattern("https://example.com/a1b2"),
            UrlPattern::AlphaNumeric("a1b2".to_string())
        );
        assert_eq!(
            analyze_url_pattern("https://example.com/about-us"),
            UrlPattern::Alphabetic("about-us".to_string())
        );
        assert_eq!(
            analyze_url_pattern("https://example.com/%E6%97%A5").to_string(),
            "other (%E6%97%A5)"
        );
    }
}
