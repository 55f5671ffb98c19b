// src/core/html.rs
use scraper::{Html, Selector};

/// Every `href` on an `<a>` element, in document order.
pub fn link_targets(doc: &str) -> Vec<String> {
    let document = Html::parse_document(doc);
    let anchors = Selector::parse("a[href]").expect("anchor selector is valid");
    document
        .select(&anchors)
        .filter_map(|a| a.value().attr("href"))
        .map(|href| href.trim().to_string())
        .collect()
}
