//! HTTP page fetcher for the gazette site.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

use super::BasePageFetcher;

/// Page fetcher backed by reqwest.
///
/// dof.gob.mx has served an incomplete certificate chain for years, so
/// certificate validation is disabled for this client. The client is only
/// ever pointed at the gazette host; this is not a general policy.
pub struct DofPageFetcher {
    client: reqwest::Client,
}

impl DofPageFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        // Browser-like User-Agent; the site rejects default library agents
        let user_agent = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .danger_accept_invalid_certs(true)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl BasePageFetcher for DofPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!(url = %url, "Fetching page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("HTTP request failed")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("HTTP {} for {}", status, url);
        }

        response
            .text()
            .await
            .context("Failed to read response body")
    }
}
