//! Simple CLI that reads HTML from stdin and outputs JSON to stdout.
//!
//! Usage: `extract_stdin [URL] < page.html`
//!
//! The optional URL feeds the classifier's URL rules. Logs go to stderr;
//! set `RUST_LOG=rs_readability=debug` to see pipeline decisions.

use std::io::{self, Read};

use rs_readability::{extract_bytes_with_options, Extraction, Options, PageType};
use serde::Serialize;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct Output {
    title: String,
    byline: String,
    page_type: PageType,
    node_count: usize,
    content_html: Option<String>,
    content_text: Option<String>,
}

impl From<&Extraction> for Output {
    fn from(extraction: &Extraction) -> Self {
        let result = &extraction.result;
        Self {
            title: result.title.clone(),
            byline: result.byline.clone(),
            page_type: result.page_type,
            node_count: result.node_count,
            content_html: extraction.content_html(),
            content_text: extraction.content_text(),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let mut html = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut html) {
        error!(%err, "failed to read stdin");
        std::process::exit(1);
    }

    let options = Options {
        url: std::env::args().nth(1),
        ..Options::default()
    };

    let extraction = match extract_bytes_with_options(&html, &options) {
        Ok(extraction) => extraction,
        Err(err) => {
            error!(%err, "extraction failed");
            std::process::exit(1);
        }
    };

    match serde_json::to_string(&Output::from(&extraction)) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            error!(%err, "failed to serialize output");
            std::process::exit(1);
        }
    }
}
