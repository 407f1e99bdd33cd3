//! Topic search against a public news RSS endpoint.
//!
//! A topic like `"Rohit Sharma"` becomes a query for `Rohit+Sharma`
//! restricted to the last day, and the response is parsed as RSS 2.0
//! into at most [`MAX_ENTRIES`] entries in feed order. Two outcomes the
//! caller must keep apart: an unreachable feed is an error, while a
//! reachable feed with zero matching entries is an empty `Ok` — the
//! shell shows different messages for them.

use crate::error::{Error, Result};
use crate::models::FeedEntry;
use chrono::{DateTime, Utc};
use reqwest::Client;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Google News RSS search endpoint used by default.
pub const FEED_ENDPOINT: &str = "https://news.google.com/rss/search";

/// Upper bound on entries returned per search.
pub const MAX_ENTRIES: usize = 10;

/// Recency window, language, and region the feed query is fixed to.
const QUERY_SUFFIX: &str = "when:1d&hl=en-IN&gl=IN&ceid=IN:en";

/// Searches a news feed by topic keyword.
pub struct FeedSearch {
    client: Client,
    endpoint: String,
}

impl Default for FeedSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedSearch {
    /// A searcher against the default endpoint. The HTTP client keeps
    /// reqwest's default timeout behavior; bounding search latency is
    /// the caller's concern.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            endpoint: FEED_ENDPOINT.to_string(),
        }
    }

    /// Point the searcher at a different endpoint. Used by tests.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Build the request URL for a non-empty topic.
    ///
    /// Topic words are individually percent-encoded and joined with
    /// literal `+` separators, so `"Rohit Sharma"` queries for
    /// `Rohit+Sharma`. The recency/language/region parameters are
    /// fixed.
    pub fn query_url(&self, topic: &str) -> String {
        let joined = topic
            .split_whitespace()
            .map(|word| urlencoding::encode(word).into_owned())
            .collect::<Vec<_>>()
            .join("+");
        format!("{}?q={}+{}", self.endpoint, joined, QUERY_SUFFIX)
    }

    /// Search recent headlines for a topic.
    ///
    /// An empty or whitespace-only topic fails closed: `Ok(vec![])`
    /// without any network call. Otherwise returns at most
    /// [`MAX_ENTRIES`] entries in feed-provided order, with no
    /// deduplication or re-ranking.
    #[instrument(level = "info", skip(self), fields(topic = %topic))]
    pub async fn search(&self, topic: &str) -> Result<Vec<FeedEntry>> {
        if topic.trim().is_empty() {
            debug!("empty topic, skipping feed request");
            return Ok(Vec::new());
        }

        let url = self.query_url(topic);
        debug!(%url, "requesting feed");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(Error::FeedUnreachable)?
            .error_for_status()
            .map_err(Error::FeedUnreachable)?;
        let body = response.text().await.map_err(Error::FeedUnreachable)?;

        let entries = parse_entries(&body)?;
        info!(count = entries.len(), "feed search completed");
        Ok(entries)
    }
}

/// Parse an RSS document into at most [`MAX_ENTRIES`] feed entries.
///
/// Items without a parseable link are skipped with a warning; they
/// still count against the first-ten window so feed order is kept.
fn parse_entries(body: &str) -> Result<Vec<FeedEntry>> {
    let channel = body.parse::<rss::Channel>().map_err(Error::FeedParse)?;

    let entries = channel
        .items()
        .iter()
        .take(MAX_ENTRIES)
        .filter_map(|item| {
            let title = item.title().unwrap_or("").to_string();
            let link = match item.link().map(Url::parse) {
                Some(Ok(link)) => link,
                _ => {
                    warn!(%title, "skipping feed item without a parseable link");
                    return None;
                }
            };
            let published = item.pub_date().and_then(parse_pub_date);
            Some(FeedEntry {
                title,
                link,
                summary: item.description().unwrap_or("").to_string(),
                published,
            })
        })
        .collect();

    Ok(entries)
}

/// RSS `pubDate` values are RFC 2822.
fn parse_pub_date(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_url_joins_words_with_plus() {
        let feed = FeedSearch::new();
        let url = feed.query_url("Rohit Sharma");
        assert!(url.contains("q=Rohit+Sharma+when:1d"), "got {url}");
    }

    #[test]
    fn test_query_url_single_word() {
        let feed = FeedSearch::new();
        let url = feed.query_url("Cricket");
        assert!(url.contains("q=Cricket+when:1d"), "got {url}");
        assert!(url.contains("hl=en-IN"));
        assert!(url.contains("gl=IN"));
        assert!(url.contains("ceid=IN:en"));
    }

    #[test]
    fn test_query_url_encodes_reserved_characters() {
        let feed = FeedSearch::new();
        let url = feed.query_url("AT&T results");
        assert!(url.contains("q=AT%26T+results+when:1d"), "got {url}");
    }

    #[tokio::test]
    async fn test_empty_topic_returns_empty_without_request() {
        // The endpoint is unroutable; reaching it would error.
        let feed = FeedSearch::new().with_endpoint("http://127.0.0.1:0");
        let entries = feed.search("   ").await.unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_parse_entries_caps_at_ten_in_feed_order() {
        let items: String = (0..12)
            .map(|i| {
                format!(
                    "<item><title>Story {i}</title>\
                     <link>https://example.com/{i}</link>\
                     <description>Blurb {i}</description>\
                     <pubDate>Tue, 05 May 2026 12:00:0{} GMT</pubDate></item>",
                    i % 10
                )
            })
            .collect();
        let body = format!(
            "<?xml version=\"1.0\"?><rss version=\"2.0\"><channel>\
             <title>t</title><link>https://example.com</link><description>d</description>\
             {items}</channel></rss>"
        );

        let entries = parse_entries(&body).unwrap();
        assert_eq!(entries.len(), MAX_ENTRIES);
        assert_eq!(entries[0].title, "Story 0");
        assert_eq!(entries[9].title, "Story 9");
        assert_eq!(entries[3].link.as_str(), "https://example.com/3");
        assert!(entries[0].published.is_some());
    }

    #[test]
    fn test_parse_entries_empty_channel() {
        let body = "<?xml version=\"1.0\"?><rss version=\"2.0\"><channel>\
                    <title>t</title><link>https://example.com</link>\
                    <description>d</description></channel></rss>";
        let entries = parse_entries(body).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_parse_entries_rejects_non_rss() {
        let err = parse_entries("<html><body>not a feed</body></html>").unwrap_err();
        assert!(matches!(err, Error::FeedParse(_)));
    }
}
