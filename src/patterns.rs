//! Compiled regex patterns and tag lists used by the scorer, preprocessor
//! and classifier.
//!
//! All patterns are compiled once at first use via `LazyLock`. The word
//! lists are empirically tuned; the classifier is sensitive to them.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Number of top candidates returned by default.
pub const DEFAULT_TOP_CANDIDATES: usize = 5;

/// Minimum text length an article needs for extraction to succeed.
pub const DEFAULT_CHAR_THRESHOLD: usize = 500;

/// Tags whose text feeds the candidate scorer.
pub const TAGS_TO_SCORE: &[&str] = &["section", "h2", "h3", "h4", "h5", "h6", "p", "td", "pre"];

/// Tags removed wholesale by the preprocessor, subtree included.
pub const NOISE_TAGS: &[&str] = &[
    "aside", "nav", "header", "footer", "script", "style", "noscript", "iframe", "form", "button",
    "object", "embed", "applet", "map", "dialog",
];

/// Attribute name (and `-` prefix) that marks an element as an ad slot.
pub const AD_ATTRIBUTE: &str = "data-ad";

// =============================================================================
// Scoring Patterns
// =============================================================================

/// Class/id fragments of elements that are unlikely to hold content.
pub static UNLIKELY_CANDIDATES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"-ad-|ai2html|banner|breadcrumbs|combx|comment|community|cover-wrap|disqus|extra|footer|gdpr|header|legends|menu|related|remark|replies|rss|shoutbox|sidebar|skyscraper|social|sponsor|supplemental|ad-break|agegate|pagination|pager|popup|yom-remote",
    )
    .expect("UNLIKELY_CANDIDATES regex")
});

/// Rescues elements matched by [`UNLIKELY_CANDIDATES`].
pub static OK_MAYBE_ITS_A_CANDIDATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"and|article|body|column|content|main|shadow").expect("OK_MAYBE_ITS_A_CANDIDATE regex")
});

/// Class/id fragments that add +25 to an element's initial score.
pub static POSITIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"article|body|content|entry|hentry|h-entry|main|page|pagination|post|text|blog|story")
        .expect("POSITIVE regex")
});

/// Class/id fragments that subtract 25 from an element's initial score.
pub static NEGATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"-ad-|hidden|^hid$| hid$| hid |^hid |banner|combx|comment|com-|contact|footer|gdpr|masthead|media|meta|outbrain|promo|related|scroll|share|shoutbox|sidebar|skyscraper|sponsor|shopping|tags|widget",
    )
    .expect("NEGATIVE regex")
});

/// Comma glyphs across Latin, Arabic, CJK and a few other scripts.
pub static COMMAS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x{002C}|\x{060C}|\x{FE50}|\x{FE10}|\x{FE11}|\x{2E41}|\x{2E34}|\x{2E32}|\x{FF0C}|\x{3001}")
        .expect("COMMAS regex")
});

/// Runs of two or more whitespace characters.
pub static NORMALIZE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").expect("NORMALIZE regex"));

// =============================================================================
// Ad Detection Patterns
// =============================================================================

/// Case-insensitive class/id fragments of ad containers.
pub static AD_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)ad-",
        r"(?i)^ad$",
        r"(?i)^ads$",
        r"(?i)advert",
        r"(?i)banner",
        r"(?i)sponsor",
        r"(?i)promo",
        r"(?i)google-ad",
        r"(?i)adsense",
        r"(?i)doubleclick",
        r"(?i)amazon",
        r"(?i)affiliate",
        r"(?i)commercial",
        r"(?i)paid",
        r"(?i)shopping",
        r"(?i)recommendation",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("AD_PATTERNS regex"))
    .collect()
});

// =============================================================================
// Metadata Patterns
// =============================================================================

/// Separator between an article title and the site name.
pub static TITLE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" [\|\-\\/>»] ").expect("TITLE_SEPARATOR regex"));

/// Separators that imply a breadcrumb-like title hierarchy.
pub static TITLE_HIERARCHICAL_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" [\\/>»] ").expect("TITLE_HIERARCHICAL_SEPARATOR regex"));

/// Any run of title separator characters.
pub static TITLE_SEPARATOR_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\|\-\\/>»]+").expect("TITLE_SEPARATOR_CHARS regex"));

/// `property` attributes of meta tags carrying article metadata.
pub static META_PROPERTY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\s*(article|dc|dcterm|og|twitter)\s*:\s*(author|creator|description|published_time|title|site_name)\s*",
    )
    .expect("META_PROPERTY regex")
});

/// `name` attributes of meta tags carrying article metadata.
pub static META_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(?:(dc|dcterm|og|twitter|parsely|weibo:(article|webpage))\s*[-\.:]\s*)?(author|creator|pub-date|description|title|site_name)\s*$",
    )
    .expect("META_NAME regex")
});

/// Schema.org types treated as articles in JSON-LD.
pub static JSON_LD_ARTICLE_TYPES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^Article|AdvertiserContentArticle|NewsArticle|AnalysisNewsArticle|AskPublicNewsArticle|BackgroundNewsArticle|OpinionNewsArticle|ReportageNewsArticle|ReviewNewsArticle|Report|SatiricalArticle|ScholarlyArticle|MedicalScholarlyArticle|SocialMediaPosting|BlogPosting|LiveBlogPosting|DiscussionForumPosting|TechArticle|APIReference$",
    )
    .expect("JSON_LD_ARTICLE_TYPES regex")
});

/// A schema.org `@context` value.
pub static SCHEMA_DOT_ORG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://schema\.org/?$").expect("SCHEMA_DOT_ORG regex"));

/// CDATA wrapper occasionally left around JSON-LD payloads.
pub static CDATA_WRAPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*<!\[CDATA\[|\]\]>\s*$").expect("CDATA_WRAPPER regex"));

/// Named entities left escaped in attribute values.
pub static NAMED_ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(quot|amp|apos|lt|gt);").expect("NAMED_ENTITY regex"));

/// Decimal or hexadecimal character references.
pub static NUMERIC_ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&#(?:[xX]([0-9a-fA-F]+)|([0-9]+));").expect("NUMERIC_ENTITY regex")
});

// =============================================================================
// URL Patterns
// =============================================================================

/// A trailing path segment made of digits only.
pub static DIGITS_ONLY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").expect("DIGITS_ONLY regex"));

/// A trailing path segment made of ASCII letters, digits, `-` and `_`.
pub static ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9\-_]+$").expect("ALPHANUMERIC regex"));

/// A trailing path segment made of ASCII letters, `-` and `_`.
pub static ALPHA_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\-_]+$").expect("ALPHA_ONLY regex"));
