//! Per-department digest pipeline.
//!
//! One run: fetch the daily index once, then for each configured department
//! (in configured order) build the prompt, ask the summarizer, normalize the
//! reply, and splice in the exchange rate where applicable. A department's
//! failure never touches the others; every failure mode collapses to a
//! visible notice block for that department alone.

use std::sync::Arc;

use tracing::{error, info, warn};
use url::Url;

use crate::domains::gazette::exchange_rate::{self, ExchangeRate};
use crate::domains::gazette::listing;
use crate::domains::gazette::models::{GazetteIndex, Publication};
use crate::kernel::{BasePageFetcher, BaseSummarizer};

use super::inject::inject_rate;
use super::prompt::{build_summary_prompt, PromptStyle, SYSTEM_PROMPT};
use super::restructure::{markdown_to_html, restructure_summary_html};

/// Notice emitted for a department with no publications today.
pub const EMPTY_DAY_NOTICE: &str = "<p><em>No se encontraron publicaciones para hoy.</em></p>";

/// Notice emitted when the summarization call fails for a department.
pub const SUMMARY_ERROR_NOTICE: &str =
    "<p><em>Ocurrió un error al generar el resumen de IA.</em></p>";

/// Settings for a digest run.
#[derive(Debug, Clone)]
pub struct DigestSettings {
    pub base_url: Url,
    /// Departments in output order.
    pub departments: Vec<String>,
    /// The one department whose listing carries the exchange-rate note.
    pub rate_department: String,
    pub prompt_style: PromptStyle,
}

impl Default for DigestSettings {
    fn default() -> Self {
        Self {
            base_url: Url::parse("https://www.dof.gob.mx/").expect("default base URL"),
            departments: crate::config::DEFAULT_DEPARTMENTS
                .iter()
                .map(|d| d.to_string())
                .collect(),
            rate_department: "BANCO DE MEXICO".to_string(),
            prompt_style: PromptStyle::Grouped,
        }
    }
}

/// The digest orchestrator. Holds injected collaborators; no globals.
pub struct DigestPipeline {
    fetcher: Arc<dyn BasePageFetcher>,
    summarizer: Arc<dyn BaseSummarizer>,
    settings: DigestSettings,
}

impl DigestPipeline {
    pub fn new(
        fetcher: Arc<dyn BasePageFetcher>,
        summarizer: Arc<dyn BaseSummarizer>,
        settings: DigestSettings,
    ) -> Self {
        Self {
            fetcher,
            summarizer,
            settings,
        }
    }

    /// Run the full digest and return the concatenated HTML fragment.
    pub async fn run(&self) -> String {
        let index = self.fetch_index().await;

        let mut parts: Vec<String> = Vec::new();
        for department in &self.settings.departments {
            info!(department = %department, "Processing department");
            parts.push(format!("<h2>{}</h2>", department));
            parts.push(self.department_block(&index, department).await);
        }
        parts.concat()
    }

    /// Fetch and parse the daily index. Fetch or parse trouble yields an
    /// empty index; each department then reports an empty day.
    async fn fetch_index(&self) -> GazetteIndex {
        match self.fetcher.fetch(self.settings.base_url.as_str()).await {
            Ok(html) => listing::parse_index(&html, &self.settings.base_url),
            Err(e) => {
                warn!(error = %e, "Failed to fetch the daily index; treating as empty");
                GazetteIndex::new()
            }
        }
    }

    async fn department_block(&self, index: &GazetteIndex, department: &str) -> String {
        let publications = index.department(department);
        if publications.is_empty() {
            info!(department = %department, "No publications today");
            return EMPTY_DAY_NOTICE.to_string();
        }

        let rate = if department == self.settings.rate_department {
            self.extract_rate(publications).await
        } else {
            None
        };

        let titles: Vec<String> = publications.iter().map(|p| p.title.clone()).collect();
        let prompt = build_summary_prompt(&titles, self.settings.prompt_style);

        info!(
            department = %department,
            titles = titles.len(),
            "Requesting executive summary"
        );
        let markdown = match self.summarizer.summarize(SYSTEM_PROMPT, &prompt).await {
            Ok(markdown) => markdown,
            Err(e) => {
                error!(department = %department, error = %e, "Summarization failed");
                return SUMMARY_ERROR_NOTICE.to_string();
            }
        };

        let restructured = restructure_summary_html(&markdown_to_html(&markdown));
        inject_rate(&restructured, rate.as_ref())
    }

    /// Fetch and parse rate-bearing publications in document order, stopping
    /// at the first one that yields a rate.
    async fn extract_rate(&self, publications: &[Publication]) -> Option<ExchangeRate> {
        for publication in publications
            .iter()
            .filter(|p| exchange_rate::is_rate_publication(&p.title))
        {
            info!(url = %publication.url, "Inspecting exchange-rate publication");
            match self.fetcher.fetch(&publication.url).await {
                Ok(html) => {
                    if let Some(rate) = exchange_rate::extract_rate(&html) {
                        info!(value = %rate.value, "Exchange rate extracted");
                        return Some(rate);
                    }
                    warn!(url = %publication.url, "Exchange rate not found in note page");
                }
                Err(e) => {
                    warn!(url = %publication.url, error = %e, "Failed to fetch exchange-rate note");
                }
            }
        }
        None
    }
}
