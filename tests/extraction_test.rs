use rs_readability::{
    classify_page_type, extract, extract_content, extract_with_options, find_candidates,
    is_probably_content, parse_html, preprocess, Document, Extraction, Options, PageContent,
    PageType,
};

fn parse(html: &str) -> Document {
    match parse_html(html, None) {
        Ok(doc) => doc,
        Err(err) => panic!("parse failed: {err:?}"),
    }
}

fn extracted(html: &str) -> Extraction {
    match extract(html) {
        Ok(extraction) => extraction,
        Err(err) => panic!("extraction failed: {err:?}"),
    }
}

fn lorem(chars: usize) -> String {
    let mut text = "Lorem ipsum dolor sit amet consectetur adipiscing elit sed do eiusmod tempor. "
        .repeat(chars / 78 + 1);
    text.truncate(chars);
    text.trim_end().to_string()
}

#[test]
fn single_article_is_the_only_candidate_and_the_content() {
    let html = format!(
        "<html><body><article><p>{} <a href=\"/internal\">0123456789</a></p></article></body></html>",
        lorem(600)
    );
    let mut doc = parse(&html);
    preprocess(&mut doc);

    let article = doc.elements_by_tag_name(doc.body(), "article")[0];
    assert_eq!(find_candidates(&doc, 5).nodes(), vec![article]);

    let result = extract_content(&doc, &Options::default());
    assert_eq!(result.page_type, PageType::Article);
    assert_eq!(result.root, Some(article));
    assert!(result.node_count >= 4);
}

#[test]
fn card_listing_is_classified_other() {
    let items: String = (0..20)
        .map(|i| {
            format!(
                "<div class=\"item\"><h2><a href=\"/post/{i}\">Post {i}</a></h2>\
                 <p>alpha beta gamma delta epsilon zeta eta theta iota kappa lambda mu nu xi omicron</p></div>"
            )
        })
        .collect();
    let mut doc = parse(&format!("<html><body>{items}</body></html>"));
    preprocess(&mut doc);

    assert_eq!(doc.elements_by_tag_name(doc.body(), "a").len(), 20);
    let candidates = find_candidates(&doc, 5);
    assert_eq!(classify_page_type(&doc, &candidates, 500, None), PageType::Other);
}

#[test]
fn empty_body_yields_body_candidate_and_no_content() {
    let doc = parse("<html><body></body></html>");
    assert_eq!(find_candidates(&doc, 5).nodes(), vec![doc.body()]);

    let extraction = extracted("<html><body></body></html>");
    assert_eq!(extraction.result.page_type, PageType::Other);
    assert_eq!(extraction.result.root, None);
    assert_eq!(extraction.result.node_count, 0);
    assert_eq!(extraction.content_html(), None);
}

#[test]
fn link_heavy_sidebar_is_not_content() {
    let links: String = (0..10)
        .map(|_| format!("<a href=\"/x\">{}</a>{}", "l".repeat(16), "t".repeat(14)))
        .collect();
    let doc = parse(&format!("<html><body><div class=\"sidebar\">{links}</div></body></html>"));
    let sidebar = doc.elements_by_tag_name(doc.body(), "div")[0];
    assert!(!is_probably_content(&doc, sidebar));
}

#[test]
fn navigation_and_ads_do_not_leak_into_content() {
    let html = format!(
        r#"<html><head><title>Keeping Bees in a Small Urban Garden - Hive Notes</title></head><body>
        <nav><a href="/">Home</a> <a href="/shop">Shop</a></nav>
        <div class="ad-banner">BUY NOW</div>
        <div id="main" class="post">
            <h1>Keeping Bees in a Small Urban Garden</h1>
            <p>{0}</p><p>{0}</p>
        </div>
        <footer>Footer text</footer>
        </body></html>"#,
        lorem(400)
    );
    let extraction = extracted(&html);
    assert_eq!(extraction.result.page_type, PageType::Article);
    assert_eq!(extraction.result.title, "Keeping Bees in a Small Urban Garden");

    let text = extraction.content_text().unwrap_or_default();
    assert!(text.contains("Lorem ipsum"));
    assert!(!text.contains("BUY NOW"));
    assert!(!text.contains("Footer text"));
    assert!(!text.contains("Shop"));
}

#[test]
fn article_without_enough_text_gets_structural_hints() {
    let html = r#"<html><body>
        <div id="masthead"><a href="/">Site</a></div>
        <div id="content"><h1>Short</h1><p>Only a teaser.</p></div>
        <div class="site-info">Credits</div>
        </body></html>"#;
    let options = Options {
        forced_page_type: Some(PageType::Article),
        ..Options::default()
    };
    let extraction = match extract_with_options(html, &options) {
        Ok(extraction) => extraction,
        Err(err) => panic!("extraction failed: {err:?}"),
    };

    let result = &extraction.result;
    assert!(result.root.is_none());
    assert!(extraction.header_html().is_some_and(|h| h.contains("masthead")));
    assert!(extraction.footer_html().is_some_and(|f| f.contains("Credits")));
    let doc = &extraction.document;
    let ids: Vec<&str> = result.other_significant_nodes.iter().map(|&n| doc.id(n)).collect();
    assert_eq!(ids, vec!["content"]);
}

#[test]
fn content_by_page_type_narrows_fields() {
    let html = format!("<html><body><article><p>{}</p></article></body></html>", lorem(700));
    let extraction = extracted(&html);
    match extraction.result.content_by_page_type() {
        PageContent::Article { root, .. } => assert!(root.is_some()),
        PageContent::Other { .. } => panic!("expected an article"),
    }

    let listing = extracted("<html><body><ul><li>a</li></ul></body></html>");
    assert!(matches!(
        listing.result.content_by_page_type(),
        PageContent::Other { header: None, footer: None, .. }
    ));
}

#[test]
fn extraction_is_deterministic() {
    let html = format!(
        "<html><body><h2>Intro</h2><div class='a'><p>{0}</p></div><div class='b'><p>{0}</p></div></body></html>",
        lorem(300)
    );
    let first = extracted(&html);
    let second = extracted(&html);
    assert_eq!(first.result, second.result);
    assert_eq!(first.content_html(), second.content_html());
}
