//! Application setup and server configuration.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::{extract::Extension, routing::get, Router};
use tower_http::trace::TraceLayer;
use url::Url;

use crate::config::Config;
use crate::domains::digest::{DigestPipeline, DigestSettings};
use crate::kernel::{BasePageFetcher, BaseSummarizer, DofPageFetcher, OpenAISummarizer};
use crate::server::routes::{digest_handler, health_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// None when OPENAI_API_KEY is not configured; the digest route then
    /// answers a fixed 500 without doing any work.
    pub pipeline: Option<Arc<DigestPipeline>>,
}

/// Build the application from validated configuration.
pub fn build_app(config: &Config) -> Result<Router> {
    let pipeline = match &config.openai_api_key {
        Some(api_key) => {
            let fetcher: Arc<dyn BasePageFetcher> = Arc::new(DofPageFetcher::new(
                Duration::from_secs(config.fetch_timeout_secs),
            )?);

            let client = openai_client::OpenAIClient::new(api_key.clone())
                .with_timeout(Duration::from_secs(config.openai_timeout_secs))
                .context("Failed to build OpenAI client")?;
            let summarizer: Arc<dyn BaseSummarizer> =
                Arc::new(OpenAISummarizer::new(client, config.openai_model.clone()));

            let settings = DigestSettings {
                base_url: Url::parse(&config.dof_base_url)
                    .context("DOF_BASE_URL must be a valid URL")?,
                departments: config.departments.clone(),
                ..DigestSettings::default()
            };

            Some(Arc::new(DigestPipeline::new(fetcher, summarizer, settings)))
        }
        None => {
            tracing::warn!("OPENAI_API_KEY is not configured; digest endpoint will answer 500");
            None
        }
    };

    Ok(build_router(AppState { pipeline }))
}

/// Assemble routes around the given state. Tests inject mock-backed
/// pipelines here.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/resumir-hacienda", get(digest_handler))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
}
