//! Article body extraction from arbitrary web pages.
//!
//! Feed links are frequently tracking/indirection URLs, so the fetch
//! follows redirects and records the final resolved URL before parsing.
//! Extraction itself is a generic heuristic: look for a main-content
//! container first, then fall back to collecting paragraph and heading
//! text across the document. Pages whose extracted text does not exceed
//! [`MIN_ARTICLE_WORDS`] words are rejected as too short.

use crate::error::{Error, Result};
use crate::models::ArticleText;
use crate::utils::{truncate_for_log, word_count};
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Minimum word count an extracted body must exceed to be accepted.
pub const MIN_ARTICLE_WORDS: usize = 50;

/// Browser-like identification; many news sites refuse unknown agents.
const USER_AGENT: &str = "Mozilla/5.0";

/// Bound on the whole fetch, connect included.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Containers likely to hold the main story, tried in order.
const MAIN_SELECTORS: [&str; 5] = ["article", "main", "[role='main']", ".content", "#content"];

/// Body-text elements collected within whichever container matched.
static CONTENT_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p, h1, h2, h3, h4, h5, h6, li").unwrap());

/// Fetches pages and extracts their main article text.
pub struct ContentExtractor {
    client: Client,
}

impl ContentExtractor {
    /// Build the extractor with its redirect-following client.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Fetch a URL and extract its article body.
    ///
    /// Network, timeout, and HTTP-status failures surface as
    /// [`Error::Fetch`]; a page that fetched fine but yielded
    /// [`MIN_ARTICLE_WORDS`] or fewer words surfaces as
    /// [`Error::TooShort`]. The two are deliberately kept distinct.
    #[instrument(level = "info", skip(self), fields(url = %url))]
    pub async fn extract(&self, url: &str) -> Result<ArticleText> {
        let response = self.client.get(url).send().await.map_err(Error::Fetch)?;
        let resolved_url = response.url().to_string();
        if resolved_url != url {
            debug!(%resolved_url, "followed redirects");
        }
        let response = response.error_for_status().map_err(Error::Fetch)?;
        let html = response.text().await.map_err(Error::Fetch)?;

        let text = extract_text(&Html::parse_document(&html));
        let words = word_count(&text);
        if words <= MIN_ARTICLE_WORDS {
            info!(words, "extracted text below minimum, rejecting");
            return Err(Error::TooShort { words });
        }

        info!(words, bytes = text.len(), "extracted article body");
        debug!(preview = %truncate_for_log(&text, 300), "article text");
        Ok(ArticleText {
            requested_url: url.to_string(),
            resolved_url,
            text,
            word_count: words,
        })
    }
}

/// Locate and collect the main readable text of a document.
fn extract_text(document: &Html) -> String {
    for selector_str in MAIN_SELECTORS {
        if let Ok(selector) = Selector::parse(selector_str) {
            if let Some(element) = document.select(&selector).next() {
                let text = collect_body_text(&Html::parse_fragment(&element.html()));
                if !text.trim().is_empty() {
                    return text;
                }
            }
        }
    }
    collect_body_text(document)
}

/// Gather paragraph/heading/list text, dropping nav-sized fragments.
fn collect_body_text(document: &Html) -> String {
    let mut paragraphs: Vec<String> = Vec::new();
    for element in document.select(&CONTENT_SELECTOR) {
        let text = element.text().collect::<Vec<_>>().join(" ");
        let cleaned = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if cleaned.len() > 20 {
            paragraphs.push(cleaned);
        }
    }
    paragraphs.join("\n\n")
}
