//! Normalization of the model's bullet list into header/sub-list HTML.
//!
//! The model replies with one flat markdown list where topic labels are
//! bold-only bullets. Rendering that directly is one big `<ul>` with bold
//! items mixed in, which reads poorly; instead, header bullets are promoted
//! to `<p><strong>…</strong></p>` blocks and each run of detail bullets
//! becomes its own `<ul>`. Purely presentational; item markup is preserved
//! verbatim.

use lazy_static::lazy_static;
use pulldown_cmark::{html, Options, Parser};
use scraper::{ElementRef, Html, Selector};

use crate::common::html::normalized_text;

lazy_static! {
    static ref UL_SELECTOR: Selector = Selector::parse("ul").unwrap();
    static ref STRONG_SELECTOR: Selector = Selector::parse("strong").unwrap();
}

/// Classification of one list item from the model's reply.
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub is_header: bool,
    pub header_text: Option<String>,
    pub inner_html: String,
}

/// Render the model's markdown reply to an HTML fragment.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::empty());
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Classify a list item: a header iff its entire visible text is the text
/// of its single `<strong>` span, i.e. the bullet is nothing but a topic
/// label. The check is a fixed contract with the prompt's instructions.
pub fn classify_bullet(item: ElementRef) -> Bullet {
    let inner_html = item.inner_html();

    if let Some(header_text) = bold_only_text(item) {
        return Bullet {
            is_header: true,
            header_text: Some(header_text),
            inner_html,
        };
    }

    Bullet {
        is_header: false,
        header_text: None,
        inner_html,
    }
}

/// Regroup a converted bullet list into header paragraphs and flat
/// sub-lists. A fragment with no `<ul>` at all (the model did not reply
/// with bullets) passes through unchanged. Idempotent on its own output.
pub fn restructure_summary_html(fragment: &str) -> String {
    let document = Html::parse_fragment(fragment);

    if document.select(&UL_SELECTOR).next().is_none() {
        return fragment.to_string();
    }

    let mut blocks: Vec<String> = Vec::new();
    let mut pending: Vec<String> = Vec::new();

    for child in document.root_element().children() {
        let Some(element) = ElementRef::wrap(child) else {
            continue;
        };

        match element.value().name() {
            "ul" => {
                // Direct children only; nested lists stay inside their item.
                for item in element.children().filter_map(ElementRef::wrap) {
                    if item.value().name() != "li" {
                        continue;
                    }
                    let bullet = classify_bullet(item);
                    if bullet.is_header {
                        flush_pending(&mut blocks, &mut pending);
                        blocks.push(header_block(&bullet.header_text.unwrap_or_default()));
                    } else {
                        pending.push(format!("<li>{}</li>", bullet.inner_html));
                    }
                }
            }
            "p" => {
                flush_pending(&mut blocks, &mut pending);
                // Re-emit an already-promoted header as a header so running
                // the normalization twice yields the same grouping.
                match bold_only_text(element) {
                    Some(header_text) => blocks.push(header_block(&header_text)),
                    None => blocks.push(element.html()),
                }
            }
            _ => {
                flush_pending(&mut blocks, &mut pending);
                blocks.push(element.html());
            }
        }
    }

    flush_pending(&mut blocks, &mut pending);
    blocks.concat()
}

fn header_block(header_text: &str) -> String {
    format!("<p><strong>{}</strong></p>", header_text)
}

fn flush_pending(blocks: &mut Vec<String>, pending: &mut Vec<String>) {
    if !pending.is_empty() {
        blocks.push(format!("<ul>{}</ul>", pending.concat()));
        pending.clear();
    }
}

/// The element's strong text when the element contains exactly one
/// `<strong>` span and nothing else visible.
fn bold_only_text(element: ElementRef) -> Option<String> {
    let mut strongs = element.select(&STRONG_SELECTOR);
    let strong = strongs.next()?;
    if strongs.next().is_some() {
        return None;
    }

    let strong_text = normalized_text(strong);
    if strong_text.is_empty() || normalized_text(element) != strong_text {
        return None;
    }

    Some(strong_text)
}
