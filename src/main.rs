//! # newsbrief
//!
//! Thin CLI shell over the newsbrief library. It plays the role the
//! interactive UI would otherwise play: collecting credentials, gating
//! the two workflows behind authentication, and turning each documented
//! error outcome into a distinct user-visible message.
//!
//! ```sh
//! newsbrief --email you@example.com --password secret register
//! newsbrief --email you@example.com --password secret search "Rohit Sharma"
//! newsbrief --email you@example.com --password secret summarize https://example.com/story
//! ```

use clap::Parser;
use newsbrief::cli::{Cli, Command};
use newsbrief::{
    Config, ContentExtractor, CredentialStore, Error, FeedSearch, Result, Session, Summarizer,
};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

#[tokio::main]
async fn main() -> ExitCode {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();
    let start_time = std::time::Instant::now();
    info!("newsbrief starting up");

    let outcome = run(args).await;
    let elapsed = start_time.elapsed();
    info!(?elapsed, "execution complete");

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("{}", user_message(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Cli) -> Result<()> {
    let config = Config::from_cli(&args);
    let store = CredentialStore::open(&config.users_file);
    let mut session = Session::new();

    match &args.command {
        Command::Register => {
            session.begin_registration();
            let (email, password) = credentials(&args)?;
            store.register(&email, &password)?;
            session.end_registration();
            println!("Registration successful! Please log in.");
        }

        Command::Login => {
            let email = log_in(&store, &mut session, &args)?;
            println!("Logged in successfully! Welcome, {email}.");
        }

        Command::Search { topic } => {
            if topic.trim().is_empty() {
                return Err(Error::InvalidInput(
                    "please enter a topic to search".to_string(),
                ));
            }
            log_in(&store, &mut session, &args)?;

            let feed = FeedSearch::new();
            let entries = feed.search(topic).await?;
            if entries.is_empty() {
                // Distinct from the unreachable-feed error path.
                println!("No articles found. Try a different topic.");
                return Ok(());
            }

            println!("Related articles:");
            for entry in &entries {
                println!("\n  {}", entry.title);
                println!("  {}", entry.link);
                if let Some(published) = entry.published {
                    println!("  published {published}");
                }
                if !entry.summary.is_empty() {
                    println!("  {}", entry.summary);
                }
            }
        }

        Command::Summarize {
            url,
            max_length,
            min_length,
        } => {
            if url.trim().is_empty() {
                return Err(Error::InvalidInput("please enter an article URL".to_string()));
            }
            if min_length > max_length {
                return Err(Error::InvalidInput(format!(
                    "min length {min_length} exceeds max length {max_length}"
                )));
            }
            log_in(&store, &mut session, &args)?;

            let summarizer_config = config.summarizer()?;
            let extractor = ContentExtractor::new()?;
            let article = extractor.extract(url).await?;
            info!(
                words = article.word_count,
                resolved_url = %article.resolved_url,
                "article extracted, summarizing"
            );

            let summarizer = Summarizer::global(&summarizer_config);
            let summary = summarizer
                .summarize(&article.text, *max_length, *min_length)
                .await?;
            println!("Article summary ({}):", article.resolved_url);
            println!("\n{}", summary.summary_text);
        }
    }

    Ok(())
}

/// Pull email/password from flags or environment.
fn credentials(args: &Cli) -> Result<(String, String)> {
    match (&args.email, &args.password) {
        (Some(email), Some(password)) => Ok((email.clone(), password.clone())),
        _ => Err(Error::InvalidInput(
            "email and password are required (pass --email/--password or set \
             NEWSBRIEF_EMAIL/NEWSBRIEF_PASSWORD)"
                .to_string(),
        )),
    }
}

/// Authenticate and mark the session logged in.
fn log_in(store: &CredentialStore, session: &mut Session, args: &Cli) -> Result<String> {
    let (email, password) = credentials(args)?;
    if store.authenticate(&email, &password)? {
        session.log_in(&email);
        info!(user = %email, "session authenticated");
        Ok(email)
    } else {
        Err(Error::AuthFailure)
    }
}

/// Map each error outcome to the message the user sees.
fn user_message(e: &Error) -> String {
    match e {
        Error::InvalidInput(msg) => msg.clone(),
        Error::AlreadyExists => "User already exists. Try logging in.".to_string(),
        Error::AuthFailure => "Invalid email or password. Please try again.".to_string(),
        Error::FeedUnreachable(_) => "News feed is unreachable. Try again later.".to_string(),
        Error::FeedParse(_) => "News feed returned an unreadable response.".to_string(),
        Error::Fetch(_) => {
            "Unable to fetch the article. Please check the URL and try again.".to_string()
        }
        Error::TooShort { words } => format!(
            "Could not extract enough article text to summarize (found {words} words)."
        ),
        Error::Inference(msg) => format!("Summarization failed: {msg}"),
        other => other.to_string(),
    }
}
