//! Data models for feed entries, extracted articles, and summaries.
//!
//! All of these are transient values produced per user action. Nothing
//! here is persisted; the only persisted state in the system is the
//! credential file owned by [`crate::auth::CredentialStore`].

use chrono::{DateTime, Utc};
use url::Url;

/// One headline record from a syndication search result.
///
/// Entries are returned in feed-provided order, at most
/// [`crate::feed::MAX_ENTRIES`] per search, with no deduplication or
/// re-ranking.
#[derive(Debug, Clone)]
pub struct FeedEntry {
    /// Headline text.
    pub title: String,
    /// Link to the article. Frequently an indirection/tracking URL that
    /// must be resolved before content extraction can find the story.
    pub link: Url,
    /// Feed-provided blurb for the entry. May contain markup.
    pub summary: String,
    /// Publication timestamp from the feed's `pubDate`, when present
    /// and parseable.
    pub published: Option<DateTime<Utc>>,
}

/// Main body text extracted from a fetched web page.
///
/// Only produced when extraction found more than the minimum word
/// count; shorter results surface as [`crate::error::Error::TooShort`].
#[derive(Debug, Clone)]
pub struct ArticleText {
    /// The URL the caller asked for.
    pub requested_url: String,
    /// The final URL after following redirects. Feed links are often
    /// wrappers, so this is what the extraction actually parsed.
    pub resolved_url: String,
    /// Extracted body text with boilerplate stripped.
    pub text: String,
    /// Whitespace-delimited word count of `text`.
    pub word_count: usize,
}

/// An abstractive summary produced by the model.
#[derive(Debug, Clone)]
pub struct SummaryResult {
    /// The summary text, bounded by the token limits the caller gave.
    pub summary_text: String,
}
