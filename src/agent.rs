//! Summarisation client for the Gemini `generateContent` endpoint.
//!
//! Builds the style-specific prompt, dispatches it through a [`Transport`],
//! and runs the retry policy from [`crate::retry`] until a summary or a
//! terminal error is produced.

use crate::config::Config;
use crate::prompt::build_prompt;
use crate::retry::{decide, Decision, Failure};
use crate::summary::{GenerateContentResponse, PromptPayload, SummarizationRequest, SummaryStyle};
use crate::transport::{HttpTransport, Transport, TransportError, TransportResponse};
use std::fmt;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Category of a failed summarisation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No API key configured
    Configuration,
    /// 401 or 403 from the API
    Auth,
    /// 429 from the API
    RateLimited,
    /// 503 from the API
    ServiceUnavailable,
    /// Any other non-2xx status
    RequestFailed,
    /// 2xx with a body that has no candidate text
    MalformedResponse,
    /// No response received at all
    Network,
}

impl ErrorKind {
    /// Whether another attempt may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ErrorKind::RateLimited | ErrorKind::ServiceUnavailable | ErrorKind::Network
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Configuration => "configuration error",
            ErrorKind::Auth => "authentication error",
            ErrorKind::RateLimited => "rate limited",
            ErrorKind::ServiceUnavailable => "service unavailable",
            ErrorKind::RequestFailed => "request failed",
            ErrorKind::MalformedResponse => "malformed response",
            ErrorKind::Network => "network error",
        };
        f.write_str(name)
    }
}

/// Terminal failure of a summarisation call, carrying a user-facing message
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct SummarizeError {
    pub kind: ErrorKind,
    pub message: String,
}

impl SummarizeError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn missing_api_key() -> Self {
        Self::new(
            ErrorKind::Configuration,
            "API key not found. Set GEMINI_API_KEY or add it to the config file.",
        )
    }

    fn from_failure(kind: ErrorKind, detail: &str) -> Self {
        let message = match kind {
            ErrorKind::Configuration => return Self::missing_api_key(),
            ErrorKind::Auth => {
                "Invalid API key. Please check your Gemini API key configuration.".to_string()
            }
            ErrorKind::RateLimited => {
                "API rate limit exceeded. Please wait a moment and try again.".to_string()
            }
            ErrorKind::ServiceUnavailable => {
                "Gemini API is temporarily unavailable. Please try again in a few minutes."
                    .to_string()
            }
            ErrorKind::RequestFailed => format!("API request failed: {}", detail),
            ErrorKind::MalformedResponse => "Unexpected API response format".to_string(),
            ErrorKind::Network if detail.is_empty() => {
                "Failed to generate summary: Network error or API unavailable".to_string()
            }
            ErrorKind::Network => format!("Failed to generate summary: {}", detail),
        };
        Self::new(kind, message)
    }
}

/// Sends summarisation requests and applies the retry policy.
///
/// Holds only read-only state, so one instance can serve concurrent calls.
pub struct Summarizer<T = HttpTransport> {
    config: Config,
    transport: T,
}

impl Summarizer<HttpTransport> {
    /// Create a summariser backed by a real HTTP client
    pub fn from_config(config: Config) -> Result<Self, TransportError> {
        let transport = HttpTransport::new(config.agent.request_timeout())?;
        Ok(Self::new(config, transport))
    }
}

impl<T: Transport> Summarizer<T> {
    pub fn new(config: Config, transport: T) -> Self {
        Self { config, transport }
    }

    /// Summarise `source_text` in the given style
    pub async fn summarize(
        &self,
        source_text: &str,
        style: SummaryStyle,
    ) -> Result<String, SummarizeError> {
        self.run(&SummarizationRequest::new(source_text, style)).await
    }

    /// Run one request through the attempt loop
    pub async fn run(&self, request: &SummarizationRequest) -> Result<String, SummarizeError> {
        let api_key = self
            .config
            .api_key()
            .ok_or_else(SummarizeError::missing_api_key)?;

        let word_count = request.word_count();
        let is_long_text = request.is_long_text();
        let prompt = build_prompt(&request.source_text, request.style, is_long_text);
        let payload = PromptPayload::new(prompt, is_long_text);

        let agent = &self.config.agent;
        let endpoint = agent.generate_url();
        let url = format!("{}?key={}", endpoint, api_key);
        let max_retries = agent.max_retries.max(1);

        info!(
            "Summarising {} words as {} with {}",
            word_count, request.style, agent.model
        );
        debug!(
            "Max output tokens: {}",
            payload.generation_config.max_output_tokens
        );

        for attempt in 1..=max_retries {
            let (failure, detail) = match self.transport.send(&url, &payload).await {
                Ok(response) if response.is_success() => match parse_summary(&response) {
                    Some(text) => {
                        info!("Summary received on attempt {}/{}", attempt, max_retries);
                        return Ok(text);
                    }
                    None => (Failure::Malformed, response.body),
                },
                Ok(response) => {
                    let detail = format!("{} {}", response.status, response.status_text)
                        .trim_end()
                        .to_string();
                    warn!(
                        "Gemini API failed (attempt {}/{}): {}: {}",
                        attempt, max_retries, detail, response.body
                    );
                    (Failure::Status(response.status), detail)
                }
                Err(e) => {
                    warn!(
                        "Gemini API error (attempt {}/{}): {}",
                        attempt, max_retries, e
                    );
                    (Failure::Transport, e.to_string())
                }
            };

            match decide(failure, attempt, max_retries, agent.base_delay()) {
                Decision::Retry(delay) => {
                    debug!("Retrying {} in {:?}", endpoint, delay);
                    tokio::time::sleep(delay).await;
                }
                Decision::Fail(kind) => {
                    if kind == ErrorKind::MalformedResponse {
                        warn!(
                            "Unexpected response shape (attempt {}/{}): {}",
                            attempt, max_retries, detail
                        );
                    }
                    return Err(SummarizeError::from_failure(kind, &detail));
                }
            }
        }

        // decide() always fails on the last attempt, so the loop returns above
        Err(SummarizeError::from_failure(ErrorKind::Network, ""))
    }
}

/// Extract the first candidate's text from a successful response
fn parse_summary(response: &TransportResponse) -> Option<String> {
    let parsed: GenerateContentResponse = serde_json::from_str(&response.body).ok()?;
    parsed.first_text().map(str::to_string)
}
