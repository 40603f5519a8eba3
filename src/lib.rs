//! # notesum
//!
//! A command-line tool for summarising notes and meeting transcripts with Gemini.
//!
//! ## Features
//!
//! - **Two Styles**: professional prose or scannable bullet points
//! - **Resilient Requests**: retries with backoff on rate limits, outages, and network faults
//! - **Typed Failures**: every call ends in a summary or a classified [`SummarizeError`]
//! - **Exports**: plain text or markdown files

pub mod agent;
pub mod config;
pub mod export;
pub mod prompt;
pub mod retry;
pub mod storage;
pub mod summary;
pub mod text;
pub mod transport;

pub use agent::{ErrorKind, SummarizeError, Summarizer};
pub use config::Config;
pub use storage::Settings;
pub use summary::SummaryStyle;

/// Configure `tracing` output on stderr.
///
/// `RUST_LOG` takes precedence over `default_level`. Calling this more than
/// once is harmless; later calls leave the first subscriber in place.
pub fn setup_logging(default_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
