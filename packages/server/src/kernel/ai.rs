// Summarizer implementation using OpenAI
//
// This is the infrastructure implementation of BaseSummarizer.
// The prompt contents live in the digest domain.

use anyhow::{Context, Result};
use async_trait::async_trait;
use openai_client::{ChatRequest, Message, OpenAIClient};

use super::BaseSummarizer;

/// OpenAI-backed summarizer with a fixed model.
#[derive(Clone)]
pub struct OpenAISummarizer {
    client: OpenAIClient,
    model: String,
}

impl OpenAISummarizer {
    pub fn new(client: OpenAIClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl BaseSummarizer for OpenAISummarizer {
    async fn summarize(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        tracing::debug!(
            model = %self.model,
            prompt_length = user_prompt.len(),
            "Requesting chat completion"
        );

        let request = ChatRequest::new(&self.model)
            .message(Message::system(system_prompt))
            .message(Message::user(user_prompt));

        let response = self
            .client
            .chat_completion(request)
            .await
            .context("OpenAI chat completion failed")?;

        Ok(response.content)
    }
}
