//! JSON-LD metadata.
//!
//! Only Schema.org objects of an article type are read. The first script
//! that yields such an object wins.

use serde_json::{Map, Value};

use crate::dom::Document;
use crate::metrics::inner_text;
use crate::patterns::{CDATA_WRAPPER, JSON_LD_ARTICLE_TYPES, SCHEMA_DOT_ORG};
use crate::result::Metadata;

const JSON_LD_TYPE: &str = "application/ld+json";

/// Metadata from the first Schema.org article object in the document's
/// JSON-LD scripts. Fields the object lacks are left empty.
#[must_use]
pub fn json_ld(doc: &Document) -> Metadata {
    doc.elements_by_tag_name(doc.root(), "script")
        .into_iter()
        .filter(|&script| doc.attr(script, "type") == Some(JSON_LD_TYPE))
        .find_map(|script| {
            let raw = inner_text(doc, script, false);
            let content = CDATA_WRAPPER.replace_all(&raw, "");
            let value: Value = serde_json::from_str(&content).ok()?;
            article_object(&value).map(metadata_from)
        })
        .unwrap_or_default()
}

/// The article object inside a parsed JSON-LD payload, if any.
fn article_object(value: &Value) -> Option<&Map<String, Value>> {
    let mut object = match value {
        Value::Object(object) => object,
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_object)
            .find(|item| is_article_type(item))?,
        _ => return None,
    };

    if !has_schema_context(object) {
        return None;
    }

    if !object.contains_key("@type") {
        if let Some(graph) = object.get("@graph").and_then(Value::as_array) {
            object = graph
                .iter()
                .filter_map(Value::as_object)
                .find(|item| is_article_type(item))?;
        }
    }

    is_article_type(object).then_some(object)
}

fn is_article_type(object: &Map<String, Value>) -> bool {
    object
        .get("@type")
        .and_then(Value::as_str)
        .is_some_and(|t| JSON_LD_ARTICLE_TYPES.is_match(t))
}

/// `@context` is schema.org, either directly or through `@vocab`.
fn has_schema_context(object: &Map<String, Value>) -> bool {
    match object.get("@context") {
        Some(Value::String(context)) => SCHEMA_DOT_ORG.is_match(context),
        Some(Value::Object(context)) => context
            .get("@vocab")
            .and_then(Value::as_str)
            .is_some_and(|vocab| SCHEMA_DOT_ORG.is_match(vocab)),
        _ => false,
    }
}

fn string_field<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    object.get(key).and_then(Value::as_str).map(str::trim)
}

fn metadata_from(object: &Map<String, Value>) -> Metadata {
    let title = ["name", "headline"]
        .into_iter()
        .filter_map(|key| object.get(key).and_then(Value::as_str))
        .find(|s| !s.is_empty())
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    let byline = match object.get("author") {
        Some(Value::Object(author)) => string_field(author, "name").unwrap_or_default().to_string(),
        Some(Value::Array(authors)) => authors
            .iter()
            .filter_map(Value::as_object)
            .filter_map(|author| string_field(author, "name"))
            .collect::<Vec<_>>()
            .join(", "),
        _ => String::new(),
    };

    let site_name = object
        .get("publisher")
        .and_then(Value::as_object)
        .and_then(|publisher| string_field(publisher, "name"))
        .unwrap_or_default()
        .to_string();

    Metadata {
        title,
        byline,
        excerpt: string_field(object, "description").unwrap_or_default().to_string(),
        site_name,
        published_time: string_field(object, "datePublished").unwrap_or_default().to_string(),
    }
}
