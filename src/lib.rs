//! # newsbrief
//!
//! A news-article retrieval-and-summarization library with a small
//! file-backed account gate. After authenticating, a user either
//! searches a live news feed by topic keyword, or submits an article
//! URL whose body text is fetched, extracted, and condensed into a
//! short abstractive summary.
//!
//! ## Components
//!
//! - [`auth::CredentialStore`]: email → password-digest store,
//!   register/authenticate
//! - [`feed::FeedSearch`]: topic search against a public news RSS
//!   endpoint, bounded results
//! - [`extract::ContentExtractor`]: URL fetch with redirect resolution
//!   and main-body text extraction
//! - [`summarizer::Summarizer`]: bounded abstractive summaries from a
//!   pretrained model, loaded once per process
//! - [`session::Session`]: explicit per-connection session value
//!
//! The interactive shell (rendering, prompts, session-token transport)
//! is an external collaborator; the `newsbrief` binary ships a thin
//! CLI stand-in for it.

pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod feed;
pub mod models;
pub mod session;
pub mod summarizer;
pub mod utils;

pub use auth::CredentialStore;
pub use config::{Config, SummarizerConfig};
pub use error::{Error, Result};
pub use extract::ContentExtractor;
pub use feed::FeedSearch;
pub use models::{ArticleText, FeedEntry, SummaryResult};
pub use session::Session;
pub use summarizer::Summarizer;
