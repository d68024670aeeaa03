use rs_readability::scoring::{ancestor_divisor, content_contribution, ANCESTOR_LEVELS};
use rs_readability::{class_weight, find_candidates, parse_html, preprocess, Document};

fn parse(html: &str) -> Document {
    match parse_html(html, None) {
        Ok(doc) => doc,
        Err(err) => panic!("parse failed: {err:?}"),
    }
}

fn page_with_sections(count: usize) -> Document {
    let sections: String = (0..count)
        .map(|i| {
            format!(
                "<div class=\"block-{i}\"><div><p>Paragraph {i}, with a comma, and enough words to be scored by the ranking pass.</p></div></div>"
            )
        })
        .collect();
    parse(&format!("<html><body><div id=\"outer\">{sections}</div></body></html>"))
}

#[test]
fn candidate_count_is_between_one_and_n() {
    let docs = [
        parse("<html><body></body></html>"),
        parse("<html><body><p>short</p></body></html>"),
        page_with_sections(1),
        page_with_sections(12),
    ];
    for doc in &docs {
        for n in 1..=8 {
            let candidates = find_candidates(doc, n);
            assert!(!candidates.is_empty(), "never empty");
            assert!(candidates.len() <= n, "at most {n}, got {}", candidates.len());
        }
    }
}

#[test]
fn zero_top_n_means_default() {
    let doc = page_with_sections(12);
    assert_eq!(find_candidates(&doc, 0).len(), find_candidates(&doc, 5).len());
}

#[test]
fn contribution_decays_with_ancestor_distance() {
    let contribution = content_contribution(&"word, ".repeat(40)).unwrap_or_default();
    assert!(contribution > 0.0);
    let increments: Vec<f64> = (0..ANCESTOR_LEVELS)
        .map(|level| contribution / ancestor_divisor(level))
        .collect();
    assert!(increments.windows(2).all(|pair| pair[1] <= pair[0]));
}

#[test]
fn scored_ancestors_receive_annotations_and_unscored_do_not() {
    let doc = page_with_sections(3);
    let candidates = find_candidates(&doc, 5);
    let scores = candidates.scores();

    let paragraph = doc.elements_by_tag_name(doc.body(), "p")[0];
    let parent = doc.parent(paragraph);
    assert!(parent.is_some_and(|p| scores.contains(p)));
    assert!(!scores.contains(paragraph));
}

#[test]
fn ranking_is_stable_across_runs() {
    let doc = page_with_sections(8);
    let first = find_candidates(&doc, 5);
    for _ in 0..5 {
        assert_eq!(find_candidates(&doc, 5), first);
    }
}

#[test]
fn negative_class_weight_demotes_comment_block() {
    let body = "Thoughtful paragraph text, with commas, that would normally score well. ".repeat(4);
    let mut doc = parse(&format!(
        "<html><body><div class=\"comments\"><p>{body}</p></div><div class=\"entry\"><p>{body}</p></div></body></html>"
    ));
    preprocess(&mut doc);

    let divs = doc.elements_by_tag_name(doc.body(), "div");
    assert_eq!(class_weight(&doc, divs[0]), -25.0);
    assert_eq!(class_weight(&doc, divs[1]), 25.0);

    let candidates = find_candidates(&doc, 5);
    assert_eq!(candidates.top().map(|c| c.node), Some(divs[1]));
}

#[test]
fn equal_scores_keep_document_order() {
    let text = "Three matching paragraphs of plain text here";
    let mut doc = parse(&format!(
        "<html><body><div id=\"a\"><p>{text}</p></div><div id=\"b\"><p>{text}</p></div><div id=\"c\"><p>{text}</p></div></body></html>"
    ));
    preprocess(&mut doc);

    let candidates = find_candidates(&doc, 3);
    let ids: Vec<&str> = candidates.iter().map(|c| doc.id(c.node)).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);

    let scores: Vec<f64> = candidates.iter().map(|c| c.score).collect();
    assert!(scores.windows(2).all(|pair| pair[0] == pair[1]));
}
