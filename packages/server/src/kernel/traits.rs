// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// What to fetch and what to prompt for live in the domain layers.
//
// Naming convention: Base* for trait names (e.g., BasePageFetcher)

use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait BasePageFetcher: Send + Sync {
    /// Fetch the raw markup of a page (returns the response body as text)
    async fn fetch(&self, url: &str) -> Result<String>;
}

#[async_trait]
pub trait BaseSummarizer: Send + Sync {
    /// Request a narrative summary (returns the raw model reply)
    async fn summarize(&self, system_prompt: &str, user_prompt: &str) -> Result<String>;
}
