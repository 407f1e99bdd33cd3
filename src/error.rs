//! Error types for newsbrief.
//!
//! One enum covers the whole taxonomy. Nothing in this crate retries on
//! failure; every error is terminal for the current user action and the
//! caller decides how to present it. Two distinctions matter to callers
//! and are kept explicit here:
//!
//! - a feed that is unreachable vs. a feed that parsed fine but had no
//!   entries (the latter is `Ok(vec![])`, not an error);
//! - a page that could not be fetched vs. a page whose extracted text
//!   was too short to summarize.

use thiserror::Error;

/// Result type alias for newsbrief operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for newsbrief.
#[derive(Debug, Error)]
pub enum Error {
    /// Empty or malformed user input (email, password, topic, URL).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Registration attempted for an email that already has an account.
    #[error("an account with this email already exists")]
    AlreadyExists,

    /// Credentials did not match. Deliberately generic: whether the
    /// email exists is not revealed.
    #[error("invalid email or password")]
    AuthFailure,

    /// Credential file could not be read or written.
    #[error("credential store I/O error: {0}")]
    Store(#[from] std::io::Error),

    /// Credential file exists but does not hold valid JSON.
    #[error("credential store is corrupt: {0}")]
    StoreCorrupt(#[from] serde_json::Error),

    /// The news feed endpoint could not be reached or answered with a
    /// non-success status.
    #[error("news feed unreachable: {0}")]
    FeedUnreachable(#[source] reqwest::Error),

    /// The feed responded but the document was not parseable RSS.
    #[error("news feed returned an unparseable document: {0}")]
    FeedParse(#[source] rss::Error),

    /// The article page could not be fetched (network, timeout, or HTTP
    /// error status).
    #[error("failed to fetch article page: {0}")]
    Fetch(#[source] reqwest::Error),

    /// The page was fetched but extraction found too little body text.
    #[error("extracted article text is too short to summarize ({words} words)")]
    TooShort {
        /// Whitespace-delimited word count of whatever was extracted.
        words: usize,
    },

    /// The summarization model call failed. Fatal to the current
    /// request; never collapsed into an absent value.
    #[error("summarization failed: {0}")]
    Inference(String),

    /// Missing or invalid runtime configuration.
    #[error("configuration error: {0}")]
    Config(String),
}
