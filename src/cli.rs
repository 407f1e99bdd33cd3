//! Command-line interface definitions for the newsbrief shell.
//!
//! Arguments can be provided as flags or environment variables; secrets
//! (API key, account password) should normally come from the
//! environment.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for the newsbrief shell.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the credential store JSON file
    #[arg(long, env = "NEWSBRIEF_USERS_FILE", default_value = "users.json")]
    pub users_file: PathBuf,

    /// Base URL of the OpenAI-compatible summarization endpoint
    #[arg(long, env = "NEWSBRIEF_API_BASE", default_value = "https://api.openai.com/v1")]
    pub api_base: String,

    /// API key for the summarization endpoint
    #[arg(long, env = "NEWSBRIEF_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model identifier for summarization
    #[arg(long, env = "NEWSBRIEF_MODEL", default_value = "gpt-4o-mini")]
    pub model: String,

    /// Account email (required by login-gated commands)
    #[arg(long, env = "NEWSBRIEF_EMAIL")]
    pub email: Option<String>,

    /// Account password (required by login-gated commands)
    #[arg(long, env = "NEWSBRIEF_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an account
    Register,
    /// Verify credentials
    Login,
    /// Search recent headlines by topic keyword
    Search {
        /// Topic to search for, e.g. "Cricket" or "Rohit Sharma"
        topic: String,
    },
    /// Fetch an article URL and summarize it
    Summarize {
        /// Article URL
        url: String,
        /// Upper bound on summary length in tokens
        #[arg(long, default_value_t = 300)]
        max_length: u32,
        /// Lower bound on summary length in tokens
        #[arg(long, default_value_t = 120)]
        min_length: u32,
    },
}
