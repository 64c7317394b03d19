//! Exchange-rate extraction from the Banco de México detail note.
//!
//! The "tipo de cambio" note publishes the day's FIX rate inside free-form
//! legal text. Extraction is regex-driven and deliberately narrow; every
//! failure path (fetch, missing container, unmatched pattern) collapses to
//! None so the digest never aborts over it.

use lazy_static::lazy_static;
use regex::Regex;
use scraper::{Html, Selector};
use tracing::debug;

use crate::common::html::normalized_text;

/// Title substring identifying the rate-bearing publication (case-insensitive).
pub const RATE_TITLE_MARKER: &str = "tipo de cambio para solventar obligaciones";

lazy_static! {
    // The note body always states the rate as e.g. "... el tipo de cambio
    // obtenido el día de hoy fue de $17.85 M.N. ...". Spacing inside the
    // amount varies between revisions.
    static ref RATE_REGEX: Regex = Regex::new(
        r"(?i)el tipo de cambio obtenido el d[ií]a de hoy fue de\s*(\$\s*\d+\.\d+\s*M\.N\.)"
    )
    .unwrap();

    // Current note pages carry the body in div#DivDetalleNota; older
    // revisions used a class-marked table container instead.
    static ref NOTE_CONTAINER_SELECTOR: Selector =
        Selector::parse("div#DivDetalleNota").unwrap();
    static ref LEGACY_CONTAINER_SELECTOR: Selector =
        Selector::parse(".NotaCompleta").unwrap();
}

/// The day's published exchange rate, ready for HTML splicing.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeRate {
    pub value: String,
}

/// True when a publication title names the rate note.
pub fn is_rate_publication(title: &str) -> bool {
    title.to_lowercase().contains(RATE_TITLE_MARKER)
}

/// Extract the rate from a detail-note page.
pub fn extract_rate(html: &str) -> Option<ExchangeRate> {
    let document = Html::parse_document(html);

    let container = document
        .select(&NOTE_CONTAINER_SELECTOR)
        .next()
        .or_else(|| document.select(&LEGACY_CONTAINER_SELECTOR).next());

    let Some(container) = container else {
        debug!("Detail-note container not found on page");
        return None;
    };

    let rate = extract_rate_text(&normalized_text(container));
    if rate.is_none() {
        debug!("Rate pattern did not match the note text");
    }
    rate
}

/// Narrow pattern interface: note text in, normalized value out.
///
/// Internal whitespace of the captured amount becomes a non-breaking space
/// so the value never wraps inside a bullet.
pub fn extract_rate_text(text: &str) -> Option<ExchangeRate> {
    let captures = RATE_REGEX.captures(text)?;
    let raw = captures.get(1)?.as_str();

    Some(ExchangeRate {
        value: raw
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("\u{a0}"),
    })
}
