//! Abstractive summarization through an OpenAI-compatible API.
//!
//! The model is the expensive shared resource in this system, so the
//! client wrapping it is constructed at most once per process via
//! [`Summarizer::global`] and reused for every request. Inference calls
//! never mutate the instance, making it safe to share read-only across
//! sequential requests.
//!
//! Decoding is deterministic by construction: requests pin
//! `temperature` to 0.0 and `top_p` to 1.0, so identical input and
//! bounds produce identical requests and a reproducible continuation.
//! Inputs longer than the model's context window are passed through
//! unchunked and truncated model-side; that is an accepted limitation.
//!
//! A failed inference call is fatal to the current request. It is
//! surfaced as [`Error::Inference`], never swallowed into an absent
//! result, and never retried.

use crate::config::SummarizerConfig;
use crate::error::{Error, Result};
use crate::models::SummaryResult;
use crate::utils::truncate_for_log;
use once_cell::sync::OnceCell;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Process-wide summarizer instance. First caller's config wins.
static INSTANCE: OnceCell<Summarizer> = OnceCell::new();

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    /// 0.0 pins decoding to the highest-scoring continuation.
    temperature: f32,
    top_p: f32,
    /// Hard cap on generated tokens; carries the caller's `max_length`.
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: String,
}

/// Client for the pretrained summarization model.
pub struct Summarizer {
    client: Client,
    config: SummarizerConfig,
}

impl Summarizer {
    /// Build a summarizer for the given endpoint.
    ///
    /// Prefer [`Summarizer::global`] in application code so the
    /// instance is shared; direct construction exists for tests and
    /// embedders managing their own lifetimes.
    pub fn new(config: SummarizerConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// The shared process-wide instance, constructed on first use.
    ///
    /// Repeated calls return the same instance regardless of the config
    /// passed later; loading is idempotent.
    pub fn global(config: &SummarizerConfig) -> &'static Summarizer {
        INSTANCE.get_or_init(|| {
            info!(model = %config.model, api_base = %config.api_base, "initializing summarizer");
            Summarizer::new(config.clone())
        })
    }

    /// Produce a summary bounded by the given token lengths.
    ///
    /// `max_length` maps to the request's `max_tokens` cap; the
    /// instruction also asks the model to stay between `min_length` and
    /// `max_length` tokens, since chat APIs expose no minimum-length
    /// parameter.
    #[instrument(
        level = "info",
        skip(self, text),
        fields(input_chars = text.len(), max_length = max_length, min_length = min_length)
    )]
    pub async fn summarize(
        &self,
        text: &str,
        max_length: u32,
        min_length: u32,
    ) -> Result<SummaryResult> {
        let instruction = format!(
            "You are an abstractive news summarizer. Rewrite the article the user \
             provides as a single concise summary between {min_length} and {max_length} \
             tokens. Output only the summary text, with no preamble or formatting."
        );
        let body = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: instruction,
                },
                ChatMessage {
                    role: "user",
                    content: text.to_string(),
                },
            ],
            temperature: 0.0,
            top_p: 1.0,
            max_tokens: max_length,
        };

        let url = format!(
            "{}/chat/completions",
            self.config.api_base.trim_end_matches('/')
        );
        let t0 = Instant::now();
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Inference(format!("request failed: {e}")))?
            .error_for_status()
            .map_err(|e| Error::Inference(format!("model endpoint returned error: {e}")))?;

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::Inference(format!("unreadable model response: {e}")))?;
        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::Inference("model returned no choices".to_string()))?;
        let summary_text = choice.message.content.trim().to_string();

        info!(
            elapsed_ms = t0.elapsed().as_millis() as u64,
            output_chars = summary_text.len(),
            "summary generated"
        );
        debug!(preview = %truncate_for_log(&summary_text, 300), "model output");
        Ok(SummaryResult { summary_text })
    }
}
