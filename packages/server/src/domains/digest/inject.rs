//! Splicing the extracted exchange rate into the restructured summary.

use lazy_static::lazy_static;
use scraper::{Html, Selector};
use tracing::debug;

use crate::common::html::normalized_text;
use crate::domains::gazette::ExchangeRate;

/// Bullet substring identifying the rate bullet (case-insensitive). Broader
/// than the publication-title marker so a lightly reworded summary bullet
/// still matches.
pub const RATE_BULLET_MARKER: &str = "tipo de cambio";

lazy_static! {
    static ref LI_SELECTOR: Selector = Selector::parse("li").unwrap();
}

/// Append the rate to the first bullet mentioning it, or fall back to an
/// explicit note at the end of the block. A successfully extracted rate is
/// always visible in the returned block.
pub fn inject_rate(block: &str, rate: Option<&ExchangeRate>) -> String {
    let Some(rate) = rate else {
        return block.to_string();
    };

    let document = Html::parse_fragment(block);

    let target = document.select(&LI_SELECTOR).find(|item| {
        normalized_text(*item)
            .to_lowercase()
            .contains(RATE_BULLET_MARKER)
    });

    if let Some(item) = target {
        let original = item.html();
        if let Some(head) = original.strip_suffix("</li>") {
            let modified = format!("{} ({})</li>", head, rate.value);
            let injected = block.replacen(&original, &modified, 1);
            if injected != block {
                return injected;
            }
        }
        debug!("Rate bullet found but could not be spliced; appending note");
    } else {
        debug!("No rate bullet in the summary; appending note");
    }

    format!(
        "{}<p><em>(Tipo de cambio para solventar obligaciones: {})</em></p>",
        block, rate.value
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate() -> ExchangeRate {
        ExchangeRate {
            value: "$17.85\u{a0}M.N.".to_string(),
        }
    }

    #[test]
    fn test_no_rate_returns_block_unchanged() {
        let block = "<ul><li>Se publicó el tipo de cambio</li></ul>";
        assert_eq!(inject_rate(block, None), block);
    }

    #[test]
    fn test_rate_appended_to_matching_bullet() {
        let block = "<p><strong>Indicadores</strong></p>\
                     <ul><li>Se publicó el tipo de cambio del peso frente al dólar.</li></ul>";
        let result = inject_rate(block, Some(&rate()));

        assert_eq!(
            result,
            "<p><strong>Indicadores</strong></p>\
             <ul><li>Se publicó el tipo de cambio del peso frente al dólar. \
             ($17.85\u{a0}M.N.)</li></ul>"
        );
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let block = "<ul><li>Se publicó el TIPO DE CAMBIO del día.</li></ul>";
        let result = inject_rate(block, Some(&rate()));
        assert!(result.contains("($17.85\u{a0}M.N.)"));
        assert!(!result.contains("<em>"));
    }

    #[test]
    fn test_only_first_matching_bullet_is_modified() {
        let block = "<ul><li>Primer tipo de cambio</li><li>Segundo tipo de cambio</li></ul>";
        let result = inject_rate(block, Some(&rate()));

        assert_eq!(
            result,
            "<ul><li>Primer tipo de cambio ($17.85\u{a0}M.N.)</li>\
             <li>Segundo tipo de cambio</li></ul>"
        );
    }

    #[test]
    fn test_bullet_in_nested_list_is_found() {
        let block = "<ul><li>Indicadores<ul><li>tipo de cambio del día</li></ul></li></ul>";
        let result = inject_rate(block, Some(&rate()));
        assert!(result.contains("($17.85\u{a0}M.N.)"));
    }

    #[test]
    fn test_no_matching_bullet_appends_fallback_note() {
        let block = "<ul><li>Tasas de interés interbancarias</li></ul>";
        let result = inject_rate(block, Some(&rate()));

        assert_eq!(
            result,
            "<ul><li>Tasas de interés interbancarias</li>\
             <p><em>(Tipo de cambio para solventar obligaciones: $17.85\u{a0}M.N.)</em></p>"
        );
    }

    #[test]
    fn test_rate_is_never_dropped() {
        for block in [
            "<ul><li>menciona el tipo de cambio</li></ul>",
            "<ul><li>no lo menciona</li></ul>",
            "",
        ] {
            let result = inject_rate(block, Some(&rate()));
            assert!(
                result.contains("$17.85\u{a0}M.N."),
                "rate missing for block: {}",
                block
            );
        }
    }
}
