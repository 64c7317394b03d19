// Mock implementations for testing
//
// Provides mock services that can be injected into the digest pipeline.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use super::{BasePageFetcher, BaseSummarizer};

// =============================================================================
// Mock Page Fetcher
// =============================================================================

/// Serves canned HTML per URL; unknown URLs fail like a transport error.
#[derive(Default)]
pub struct MockPageFetcher {
    pages: Arc<Mutex<HashMap<String, String>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockPageFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, url: &str, html: &str) -> Self {
        self.pages
            .lock()
            .unwrap()
            .insert(url.to_string(), html.to_string());
        self
    }

    /// URLs fetched so far, in call order
    pub fn fetched_urls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BasePageFetcher for MockPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        self.calls.lock().unwrap().push(url.to_string());
        self.pages
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow!("no mock page for {}", url))
    }
}

// =============================================================================
// Mock Summarizer
// =============================================================================

enum MockReply {
    Markdown(String),
    Failure(String),
}

/// Returns queued replies in call order; an empty queue fails the call.
#[derive(Default)]
pub struct MockSummarizer {
    replies: Arc<Mutex<Vec<MockReply>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockSummarizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, markdown: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push(MockReply::Markdown(markdown.to_string()));
        self
    }

    pub fn with_error(self, message: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push(MockReply::Failure(message.to_string()));
        self
    }

    /// User prompts received so far, in call order
    pub fn prompts(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseSummarizer for MockSummarizer {
    async fn summarize(&self, _system_prompt: &str, user_prompt: &str) -> Result<String> {
        self.calls.lock().unwrap().push(user_prompt.to_string());

        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            return Err(anyhow!("no mock summary queued"));
        }
        match replies.remove(0) {
            MockReply::Markdown(markdown) => Ok(markdown),
            MockReply::Failure(message) => Err(anyhow!(message)),
        }
    }
}
