use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

// Create static selectors to avoid recompiling them each time
static MAIN_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("main").expect("Failed to parse main selector"));
static ARTICLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("article").expect("Failed to parse article selector"));
static BODY_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("body").expect("Failed to parse body selector"));

// The parser always synthesizes a <body>, so only trust it when the markup has one.
static BODY_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<body[\s>/]").expect("Failed to compile body tag pattern"));
static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Failed to compile whitespace pattern"));

const INVISIBLE: [&str; 4] = ["script", "style", "noscript", "template"];

/// Extracts the readable text of the page's primary content container.
///
/// Looks for `<main>`, then `<article>`, then `<body>`. Returns an empty
/// string when none is present.
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let container = document
        .select(&MAIN_SELECTOR)
        .next()
        .or_else(|| document.select(&ARTICLE_SELECTOR).next())
        .or_else(|| {
            if BODY_TAG.is_match(html) {
                document.select(&BODY_SELECTOR).next()
            } else {
                None
            }
        });

    match container {
        Some(element) => collapse_whitespace(&visible_text(element)),
        None => String::new(),
    }
}

/// Joins the element's trimmed text nodes with single spaces.
fn visible_text(element: ElementRef<'_>) -> String {
    let mut pieces: Vec<&str> = Vec::new();

    for node in element.descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node
            .parent()
            .and_then(|parent| parent.value().as_element().map(|el| el.name()))
            .is_some_and(|name| INVISIBLE.contains(&name));
        if hidden {
            continue;
        }

        let trimmed = text.trim();
        if !trimmed.is_empty() {
            pieces.push(trimmed);
        }
    }

    pieces.join(" ")
}

pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}
