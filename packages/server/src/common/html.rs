//! Small HTML text helpers shared by the gazette and digest domains.

use scraper::ElementRef;

/// Visible text of a subtree with inter-element whitespace collapsed to
/// single spaces.
pub fn normalized_text(element: ElementRef) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

/// Collapse runs of whitespace to single spaces and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
