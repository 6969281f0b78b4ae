//! LLM Client — the single point of entry for all LLM vendor calls.
//!
//! ARCHITECTURAL RULE: No other module may call an LLM vendor API directly.
//! Services depend on `Arc<dyn LlmBackend>` and never on a concrete vendor.
//!
//! Backends: Groq (canonical, OpenAI-compatible chat completions) and
//! Anthropic (Messages API). Selected at startup via `LLM_PROVIDER`.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

pub mod anthropic;
pub mod groq;
pub mod prompts;

pub use anthropic::AnthropicBackend;
pub use groq::GroqBackend;

/// Completion budget used by every prompt in the gateway.
pub const MAX_TOKENS: u32 = 256;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("LLM API key is not configured")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// A text-generation vendor. One user-role prompt in, the reply text out.
#[async_trait]
pub trait LlmBackend: Send + Sync {
    /// Model identifier sent with every request.
    fn model(&self) -> &str;

    async fn generate_text(&self, prompt: &str, max_tokens: u32) -> Result<String, LlmError>;
}

/// Calls the backend and deserializes the reply as JSON.
/// The prompt must instruct the model to return valid JSON.
pub async fn generate_json<T: DeserializeOwned>(
    llm: &dyn LlmBackend,
    prompt: &str,
    max_tokens: u32,
) -> Result<T, LlmError> {
    let raw = llm.generate_text(prompt, max_tokens).await?;
    debug!("raw LLM reply: {raw}");

    // Strip markdown code fences if the model wraps JSON in them
    let text = strip_json_fences(&raw);

    serde_json::from_str(text).map_err(LlmError::Parse)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
/// Only the text inside the first fenced block is kept; anything the model
/// writes after the closing fence is dropped.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(stripped) = text.strip_prefix("```") else {
        return text;
    };
    let stripped = stripped.strip_prefix("json").unwrap_or(stripped);
    let body = stripped
        .split_once("```")
        .map_or(stripped, |(body, _)| body);
    body.trim()
}

/// Pulls the vendor's human-readable message out of an error body, if it has one.
/// Both supported vendors use `{"error": {"message": ...}}`.
pub(crate) fn vendor_error_message(body: String) -> String {
    #[derive(serde::Deserialize)]
    struct VendorError {
        error: VendorErrorBody,
    }

    #[derive(serde::Deserialize)]
    struct VendorErrorBody {
        message: String,
    }

    serde_json::from_str::<VendorError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedLlm;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "  {\"key\": \"value\"}\n";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_missing_closing_fence() {
        let input = "```json\n{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_drops_trailing_prose() {
        let input = "```json\n{\"key\": \"value\"}\n```\nHope that helps!";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_vendor_error_message_extracts_nested_message() {
        let body = r#"{"error": {"message": "invalid api key", "type": "auth"}}"#.to_string();
        assert_eq!(vendor_error_message(body), "invalid api key");
    }

    #[test]
    fn test_vendor_error_message_falls_back_to_raw_body() {
        assert_eq!(vendor_error_message("Bad Gateway".to_string()), "Bad Gateway");
    }

    #[tokio::test]
    async fn test_generate_json_reports_parse_errors() {
        let llm = ScriptedLlm::replying("I am not JSON");
        let result = generate_json::<serde_json::Value>(&llm, "prompt", MAX_TOKENS).await;
        assert!(matches!(result, Err(LlmError::Parse(_))));
    }
}
