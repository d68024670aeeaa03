//! Input decoding for byte-oriented entry points.
//!
//! A byte order mark wins; otherwise the charset declared in a `<meta>` tag
//! within the first 1024 bytes is used; otherwise UTF-8. Decoding is lossy,
//! so malformed sequences become U+FFFD instead of failing.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Bytes searched for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// `<meta charset="...">`
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("META_CHARSET regex")
});

/// `<meta http-equiv="Content-Type" content="...; charset=...">`
static META_CONTENT_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#,
    )
    .expect("META_CONTENT_TYPE regex")
});

/// Charset label declared in the document head, if any.
#[must_use]
pub fn declared_charset(html: &[u8]) -> Option<String> {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);
    [&*META_CHARSET, &*META_CONTENT_TYPE]
        .into_iter()
        .find_map(|re| re.captures(&head).and_then(|c| c.get(1)))
        .map(|m| m.as_str().to_string())
}

/// Encoding to decode `html` with.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }
    declared_charset(html)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode `html` to a UTF-8 string.
///
/// # Examples
///
/// ```
/// use rs_readability::encoding::transcode_to_utf8;
///
/// let html = b"<meta charset=\"windows-1252\"><p>Caf\xE9</p>";
/// assert!(transcode_to_utf8(html).contains("Café"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let (decoded, _, _) = detect_encoding(html).decode(html);
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_charset_from_meta_forms() {
        assert_eq!(declared_charset(br#"<META CHARSET="UTF-8">"#).as_deref(), Some("UTF-8"));
        assert_eq!(declared_charset(b"<meta charset=koi8-r>").as_deref(), Some("koi8-r"));
        assert_eq!(
            declared_charset(br#"<meta http-equiv="Content-Type" content="text/html; charset=ISO-8859-1">"#)
                .as_deref(),
            Some("ISO-8859-1")
        );
        assert_eq!(declared_charset(b"<html><body>x</body></html>"), None);
    }

    #[test]
    fn declaration_past_sniff_window_is_ignored() {
        let mut html = vec![b' '; SNIFF_LEN];
        html.extend_from_slice(br#"<meta charset="windows-1252">"#);
        assert_eq!(detect_encoding(&html), UTF_8);
    }

    #[test]
    fn iso_8859_1_maps_to_windows_1252() {
        let html = br#"<meta charset="ISO-8859-1"><p>x</p>"#;
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn bom_overrides_declaration() {
        let mut html = vec![0xEF, 0xBB, 0xBF];
        html.extend_from_slice("<meta charset=\"windows-1252\"><p>é</p>".as_bytes());
        assert_eq!(detect_encoding(&html), UTF_8);
        assert!(transcode_to_utf8(&html).contains("<p>é</p>"));
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let result = transcode_to_utf8(b"<p>Test \xFF\xFE Invalid</p>");
        assert!(result.contains("Test"));
        assert!(result.contains('\u{FFFD}'));
    }

    #[test]
    fn windows_1252_quotes() {
        let html = b"<meta charset=\"windows-1252\"><p>\x93Hello\x94</p>";
        assert!(transcode_to_utf8(html).contains("\u{201C}Hello\u{201D}"));
    }
}
