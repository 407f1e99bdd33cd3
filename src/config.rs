//! Runtime configuration assembled from CLI flags and environment.

use crate::cli::Cli;
use crate::error::{Error, Result};
use std::path::PathBuf;

/// Connection settings for the summarization model endpoint.
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    /// Base URL of an OpenAI-compatible API, e.g. `https://api.openai.com/v1`.
    pub api_base: String,
    /// Bearer token for the API.
    pub api_key: String,
    /// Model identifier to request.
    pub model: String,
}

/// Full runtime configuration for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the credential store JSON file.
    pub users_file: PathBuf,
    api_base: String,
    api_key: Option<String>,
    model: String,
}

impl Config {
    /// Build configuration from parsed CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            users_file: cli.users_file.clone(),
            api_base: cli.api_base.clone(),
            api_key: cli.api_key.clone(),
            model: cli.model.clone(),
        }
    }

    /// Summarizer settings, required only for the summarize flow.
    ///
    /// The API key is optional at parse time so search/register runs
    /// don't demand one; asking for the summarizer without a key is a
    /// configuration error.
    pub fn summarizer(&self) -> Result<SummarizerConfig> {
        let api_key = self
            .api_key
            .clone()
            .ok_or_else(|| Error::Config("summarizer API key not set (NEWSBRIEF_API_KEY)".to_string()))?;
        Ok(SummarizerConfig {
            api_base: self.api_base.clone(),
            api_key,
            model: self.model.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarizer_requires_api_key() {
        let config = Config {
            users_file: PathBuf::from("users.json"),
            api_base: "https://api.openai.com/v1".to_string(),
            api_key: None,
            model: "gpt-4o-mini".to_string(),
        };
        assert!(matches!(config.summarizer().unwrap_err(), Error::Config(_)));
    }

    #[test]
    fn test_summarizer_config_passthrough() {
        let config = Config {
            users_file: PathBuf::from("users.json"),
            api_base: "http://localhost:8080/v1".to_string(),
            api_key: Some("sk-test".to_string()),
            model: "local-model".to_string(),
        };
        let summarizer = config.summarizer().unwrap();
        assert_eq!(summarizer.api_base, "http://localhost:8080/v1");
        assert_eq!(summarizer.api_key, "sk-test");
        assert_eq!(summarizer.model, "local-model");
    }
}
