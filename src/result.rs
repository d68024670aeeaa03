//! Result types for extraction output.
//!
//! Node references in these types are [`NodeId`]s into the document the
//! extraction ran on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dom::NodeId;

/// Page classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    /// A single piece of readable content (news story, blog post, doc page).
    Article,
    /// Anything else: index and list pages, landing pages, error pages.
    Other,
}

impl PageType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known [`PageType`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page type: {0}")]
pub struct ParsePageTypeError(pub String);

impl FromStr for PageType {
    type Err = ParsePageTypeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "article" => Ok(Self::Article),
            "other" => Ok(Self::Other),
            _ => Err(ParsePageTypeError(s.to_string())),
        }
    }
}

/// Metadata read from the document head and structured data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Metadata {
    /// Article title with the site name stripped where recognizable.
    pub title: String,

    /// Author line, empty if unknown.
    pub byline: String,

    /// Short description from JSON-LD.
    pub excerpt: String,

    /// Publisher name from JSON-LD.
    pub site_name: String,

    /// `datePublished` from JSON-LD, verbatim.
    pub published_time: String,
}

/// Result of running the extraction pipeline over a document.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractResult {
    /// Extracted title.
    pub title: String,

    /// Extracted byline, empty if unknown.
    pub byline: String,

    /// Root of the main content. `None` when no candidate cleared the
    /// threshold.
    pub root: Option<NodeId>,

    /// Nodes under `root` (itself included); 0 without a root.
    pub node_count: usize,

    /// Page classification.
    pub page_type: PageType,

    /// Page header hint. Only set for articles without a content root.
    pub header: Option<NodeId>,

    /// Page footer hint. Only set for articles without a content root.
    pub footer: Option<NodeId>,

    /// Other semantically significant elements. Only set for articles
    /// without a content root.
    pub other_significant_nodes: Vec<NodeId>,
}

/// Page-type specific view of an [`ExtractResult`].
#[derive(Debug, Clone, PartialEq)]
pub enum PageContent<'a> {
    Article {
        title: &'a str,
        byline: &'a str,
        root: Option<NodeId>,
    },
    Other {
        title: &'a str,
        header: Option<NodeId>,
        footer: Option<NodeId>,
        other_significant_nodes: &'a [NodeId],
    },
}

impl ExtractResult {
    /// Narrow the result to the fields that matter for its page type.
    #[must_use]
    pub fn content_by_page_type(&self) -> PageContent<'_> {
        match self.page_type {
            PageType::Article => PageContent::Article {
                title: &self.title,
                byline: &self.byline,
                root: self.root,
            },
            PageType::Other => PageContent::Other {
                title: &self.title,
                header: self.header,
                footer: self.footer,
                other_significant_nodes: &self.other_significant_nodes,
            },
        }
    }

    /// Whether a content root was found.
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.root.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_type_round_trips_through_strings() {
        assert_eq!("article".parse::<PageType>(), Ok(PageType::Article));
        assert_eq!(" OTHER ".parse::<PageType>(), Ok(PageType::Other));
        assert!("index".parse::<PageType>().is_err());
        assert_eq!(PageType::Article.to_string(), "article");
    }

    #[test]
    fn page_type_serializes_lowercase() {
        let json = serde_json::to_string(&PageType::Other).unwrap_or_default();
        assert_eq!(json, "\"other\"");
    }

    #[test]
    fn content_by_page_type_picks_fields() {
        let result = ExtractResult {
            title: "T".to_string(),
            byline: String::new(),
            root: None,
            node_count: 0,
            page_type: PageType::Other,
            header: None,
            footer: None,
            other_significant_nodes: Vec::new(),
        };
        assert!(matches!(
            result.content_by_page_type(),
            PageContent::Other { title: "T", header: None, .. }
        ));
    }
}
