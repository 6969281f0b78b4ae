use anyhow::{bail, Context, Result};

/// Which vendor answers LLM calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProvider {
    Groq,
    Anthropic,
}

impl LlmProvider {
    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "groq" => Ok(LlmProvider::Groq),
            "anthropic" => Ok(LlmProvider::Anthropic),
            other => bail!("LLM_PROVIDER must be 'groq' or 'anthropic', got '{other}'"),
        }
    }

    /// Environment variable holding this provider's API key.
    pub fn api_key_var(self) -> &'static str {
        match self {
            LlmProvider::Groq => "GROQ_API_KEY",
            LlmProvider::Anthropic => "ANTHROPIC_API_KEY",
        }
    }
}

/// Application configuration loaded from environment variables.
/// Credentials are optional: missing ones degrade features instead of
/// stopping startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub adzuna_app_id: Option<String>,
    pub adzuna_app_key: Option<String>,
    pub llm_provider: LlmProvider,
    pub llm_api_key: Option<String>,
    pub llm_timeout_secs: u64,
    pub enable_llm_summary: bool,
    pub cors_allowed_origin: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        // Blank values count as unset.
        let var = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        let llm_provider = match var("LLM_PROVIDER") {
            Some(value) => LlmProvider::parse(&value)?,
            None => LlmProvider::Groq,
        };

        Ok(Config {
            adzuna_app_id: var("ADZUNA_APP_ID"),
            adzuna_app_key: var("ADZUNA_APP_KEY"),
            llm_provider,
            llm_api_key: var(llm_provider.api_key_var()),
            llm_timeout_secs: var("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|| "30".to_string())
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            enable_llm_summary: parse_flag(var("ENABLE_LLM_SUMMARY"))
                .context("ENABLE_LLM_SUMMARY must be true or false")?,
            cors_allowed_origin: var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|| "http://localhost:3000".to_string()),
            port: var("PORT")
                .unwrap_or_else(|| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_flag(value: Option<String>) -> Result<bool> {
    match value.as_deref().map(str::to_ascii_lowercase).as_deref() {
        None | Some("false" | "0" | "no") => Ok(false),
        Some("true" | "1" | "yes") => Ok(true),
        Some(other) => bail!("unrecognised flag value '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_with_empty_environment() {
        let config = config(&[]).unwrap();
        assert!(config.adzuna_app_id.is_none());
        assert!(config.llm_api_key.is_none());
        assert_eq!(config.llm_provider, LlmProvider::Groq);
        assert_eq!(config.llm_timeout_secs, 30);
        assert!(!config.enable_llm_summary);
        assert_eq!(config.cors_allowed_origin, "http://localhost:3000");
        assert_eq!(config.port, 8000);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_provider_selects_its_own_key() {
        let config = config(&[
            ("LLM_PROVIDER", "Anthropic"),
            ("GROQ_API_KEY", "gsk-1"),
            ("ANTHROPIC_API_KEY", "sk-ant-1"),
        ])
        .unwrap();
        assert_eq!(config.llm_provider, LlmProvider::Anthropic);
        assert_eq!(config.llm_api_key.as_deref(), Some("sk-ant-1"));
    }

    #[test]
    fn test_blank_credentials_are_missing() {
        let config = config(&[("ADZUNA_APP_ID", "  "), ("ADZUNA_APP_KEY", "key")]).unwrap();
        assert!(config.adzuna_app_id.is_none());
        assert_eq!(config.adzuna_app_key.as_deref(), Some("key"));
    }

    #[test]
    fn test_invalid_values_fail() {
        assert!(config(&[("PORT", "eighty")]).is_err());
        assert!(config(&[("LLM_PROVIDER", "openai")]).is_err());
        assert!(config(&[("LLM_TIMEOUT_SECS", "-3")]).is_err());
        assert!(config(&[("ENABLE_LLM_SUMMARY", "maybe")]).is_err());
    }

    #[test]
    fn test_summary_flag() {
        assert!(config(&[("ENABLE_LLM_SUMMARY", "TRUE")]).unwrap().enable_llm_summary);
        assert!(!config(&[("ENABLE_LLM_SUMMARY", "0")]).unwrap().enable_llm_summary);
    }
}
