use rs_readability::{extract, find_candidates, parse_html, preprocess, PageType};
use std::time::{Duration, Instant};

#[test]
fn extract_does_not_panic_on_unclosed_tags() {
    match extract("<p>text<div>more") {
        Ok(extraction) => assert!(extraction.result.root.is_none()),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn extract_does_not_panic_on_invalid_nesting() {
    assert!(extract("<p><div></p></div>").is_ok());
    assert!(extract("<table><p>stray</p><tr><td>cell</td></tr></table>").is_ok());
}

#[test]
fn empty_and_whitespace_input_yields_other() {
    for html in ["", "   ", "\n\t"] {
        match extract(html) {
            Ok(extraction) => {
                assert_eq!(extraction.result.page_type, PageType::Other);
                assert_eq!(extraction.result.node_count, 0);
            }
            Err(err) => panic!("expected Ok(_) for {html:?}, got Err({err:?})"),
        }
    }
}

#[test]
fn missing_body_still_has_a_body_candidate() {
    let doc = match parse_html("<html><head><title>Only a head</title></head></html>", None) {
        Ok(doc) => doc,
        Err(err) => panic!("parse failed: {err:?}"),
    };
    assert_eq!(find_candidates(&doc, 5).nodes(), vec![doc.body()]);
}

#[test]
fn text_outside_elements_is_tolerated() {
    let html = format!("plain text {} with no markup at all", "and more words, ".repeat(60));
    assert!(extract(&html).is_ok());
}

#[test]
fn deeply_nested_document_completes() {
    let depth = 400;
    let html = format!(
        "<html><body>{}<p>{}</p>{}</body></html>",
        "<div>".repeat(depth),
        "Deep text, with commas, repeated. ".repeat(20),
        "</div>".repeat(depth)
    );
    assert!(extract(&html).is_ok());
}

#[test]
fn large_flat_document_completes_quickly() {
    let paragraphs: String = (0..2_000)
        .map(|i| format!("<div class=\"row-{i}\"><p>Row {i}, a line of text that is long enough to score.</p></div>"))
        .collect();
    let html = format!("<html><body>{paragraphs}</body></html>");

    let start = Instant::now();
    let extraction = extract(&html);
    assert!(extraction.is_ok());
    assert!(start.elapsed() < Duration::from_secs(30));
}

#[test]
fn preprocess_twice_equals_once() {
    let html = r#"<html><body><nav>n</nav><div class="ads">a</div><div data-ad-slot="1">b</div><p>kept</p></body></html>"#;
    let mut once = match parse_html(html, None) {
        Ok(doc) => doc,
        Err(err) => panic!("parse failed: {err:?}"),
    };
    preprocess(&mut once);
    let mut twice = once.clone();
    preprocess(&mut twice);

    assert_eq!(
        rs_readability::serialize::document_html(&once),
        rs_readability::serialize::document_html(&twice)
    );
}
