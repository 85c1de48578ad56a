//! Simple CLI that reads HTML from stdin and outputs JSON to stdout.
//! Takes the page URL as the optional first argument; image URLs are
//! resolved against it.

use serde::Serialize;
use std::io::{self, Read};
use ui_layouts_docs::{
    encoding, extract_main_section, extract_meta_from_html, html_to_text, RemoteMeta,
    DEFAULT_BASE_URL,
};

#[derive(Serialize)]
struct Output {
    meta: RemoteMeta,
    text: String,
    snippet: String,
}

fn main() {
    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let mut body = Vec::new();
    if io::stdin().read_to_end(&mut body).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }
    let html = encoding::decode_body(&body, None);

    let output = Output {
        meta: extract_meta_from_html(&html, &url),
        text: html_to_text(&html),
        snippet: html_to_text(extract_main_section(&html)),
    };

    println!("{}", serde_json::to_string(&output).unwrap_or_default());
}
