//! Daily index parser.
//!
//! The index page is one large table: each issuing department appears as a
//! heading row (a cell carrying a marker class), followed by one row per
//! publication whose title links to the detail note. The heading governs
//! every row after it until the next heading.

use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;

use crate::common::html::collapse_whitespace;

use super::models::{GazetteIndex, Publication};

/// Href substring identifying a detail-note link.
const DETAIL_LINK_MARKER: &str = "nota_detalle.php";

/// Class carried by department heading cells.
const DEPARTMENT_HEADING_CLASS: &str = "subtitle_azul";

lazy_static! {
    static ref ANCHOR_SELECTOR: Selector = Selector::parse("a[href]").unwrap();
}

/// Parse the daily index page into publications grouped by department.
///
/// A page with no detail-note links yields an empty index; a row with no
/// reachable department heading is dropped.
pub fn parse_index(html: &str, base_url: &Url) -> GazetteIndex {
    let document = Html::parse_document(html);

    let mut index = GazetteIndex::new();
    for anchor in document.select(&ANCHOR_SELECTOR) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if !href.contains(DETAIL_LINK_MARKER) {
            continue;
        }

        let title = collapse_whitespace(&anchor.text().collect::<String>());
        if title.is_empty() {
            continue;
        }

        let Ok(url) = base_url.join(href) else {
            debug!(href = %href, "Skipping unresolvable detail link");
            continue;
        };

        match department_for(anchor) {
            Some(department) => index.push(Publication {
                title,
                url: url.to_string(),
                department,
            }),
            None => {
                debug!(title = %title, "Dropping row with no preceding department heading")
            }
        }
    }

    index
}

/// Find the department heading governing the anchor's row.
///
/// Climbs to the enclosing `<tr>`, then walks backward through preceding
/// siblings (of the row, then of each successive ancestor) and returns the
/// first heading-marked element found, nearest first.
fn department_for(anchor: ElementRef) -> Option<String> {
    let row = anchor.ancestors().find(|node| {
        node.value()
            .as_element()
            .map_or(false, |element| element.name() == "tr")
    })?;

    let mut scope = Some(row);
    while let Some(current) = scope {
        for sibling in current.prev_siblings() {
            for descendant in sibling.descendants() {
                let Some(element) = ElementRef::wrap(descendant) else {
                    continue;
                };
                if !has_heading_class(element) {
                    continue;
                }
                let heading = heading_text(element);
                if !heading.is_empty() {
                    return Some(heading);
                }
            }
        }
        scope = current.parent();
    }

    None
}

fn has_heading_class(element: ElementRef) -> bool {
    element
        .value()
        .attr("class")
        .map_or(false, |classes| {
            classes
                .split_whitespace()
                .any(|class| class == DEPARTMENT_HEADING_CLASS)
        })
}

/// Heading text with the text of any embedded link stripped.
///
/// Heading cells often carry a navigation anchor ("subir", archive links);
/// only the department's own text names the group.
fn heading_text(element: ElementRef) -> String {
    let mut text = String::new();
    collect_text_outside_links(element, &mut text);
    collapse_whitespace(&text)
}

fn collect_text_outside_links(element: ElementRef, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child_element) = ElementRef::wrap(child) {
            if child_element.value().name() != "a" {
                collect_text_outside_links(child_element, out);
            }
        }
    }
}
