//! Query interpreter — turns a free-text chat message into search parameters.

use std::sync::Arc;

use serde::{Deserialize, Deserializer};

use crate::chat::prompts::INTENT_PROMPT_TEMPLATE;
use crate::llm_client::prompts::fill_template;
use crate::llm_client::{generate_json, LlmBackend, LlmError, MAX_TOKENS};

/// What the LLM understood from one chat message.
/// Missing and `null` fields both read as their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ParsedIntent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_job_search: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub what: String,
    #[serde(default, rename = "where", deserialize_with = "null_as_default")]
    pub location: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Clone)]
pub struct QueryInterpreter {
    llm: Arc<dyn LlmBackend>,
}

impl QueryInterpreter {
    pub fn new(llm: Arc<dyn LlmBackend>) -> Self {
        Self { llm }
    }

    /// Single LLM call, no retry. An unparseable reply is `LlmError::Parse`.
    pub async fn parse_intent(&self, message: &str) -> Result<ParsedIntent, LlmError> {
        let prompt = fill_template(INTENT_PROMPT_TEMPLATE, &[("message", message)]);
        generate_json::<ParsedIntent>(self.llm.as_ref(), &prompt, MAX_TOKENS).await
    }
}
