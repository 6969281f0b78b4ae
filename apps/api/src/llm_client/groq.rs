//! Groq backend — OpenAI-compatible chat completions API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{vendor_error_message, LlmBackend, LlmError};

const DEFAULT_API_BASE: &str = "https://api.groq.com";
const COMPLETIONS_PATH: &str = "/openai/v1/chat/completions";
pub const MODEL: &str = "llama-3.1-8b-instant";

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<CompletionMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct CompletionMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Clone)]
pub struct GroqBackend {
    client: Client,
    api_key: Option<String>,
    api_base: String,
}

impl GroqBackend {
    pub fn new(api_key: Option<String>, timeout: Duration) -> Result<Self, LlmError> {
        Self::with_base_url(api_key, DEFAULT_API_BASE.to_string(), timeout)
    }

    /// Points the backend at a different host. Used by tests against a mock server.
    pub fn with_base_url(
        api_key: Option<String>,
        api_base: String,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            api_base,
        })
    }
}

#[async_trait]
impl LlmBackend for GroqBackend {
    fn model(&self) -> &str {
        MODEL
    }

    async fn generate_text(&self, prompt: &str, max_tokens: u32) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let request_body = CompletionRequest {
            model: MODEL,
            max_tokens,
            messages: vec![CompletionMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(format!("{}{}", self.api_base, COMPLETIONS_PATH))
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: vendor_error_message(body),
            });
        }

        let completion: CompletionResponse = response.json().await?;

        if let Some(usage) = &completion.usage {
            debug!(
                "Groq call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(LlmError::EmptyContent)
    }
}
