//! HTTP transport for the Gemini API.
//!
//! The summariser only needs "payload in, status and body out", so dispatch
//! sits behind the small [`Transport`] trait and can be swapped in tests.

use crate::summary::PromptPayload;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// User-Agent string sent with API requests
const USER_AGENT: &str = concat!("notesum/", env!("CARGO_PKG_VERSION"));

#[derive(Error, Debug)]
pub enum TransportError {
    /// No response was received (DNS, connect, TLS, timeout, body read)
    #[error("{0}")]
    Network(String),
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

/// Raw outcome of one request that reached the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        let status_text = reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("")
            .to_string();
        Self {
            status,
            status_text,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// POST the payload as JSON to `url`
    async fn send(
        &self,
        url: &str,
        payload: &PromptPayload,
    ) -> Result<TransportResponse, TransportError>;
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        url: &str,
        payload: &PromptPayload,
    ) -> Result<TransportResponse, TransportError> {
        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(network_error)?;

        Ok(TransportResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("").to_string(),
            body,
        })
    }
}

/// The request URL carries the API key as a query parameter, so it is
/// stripped before the error is shown or logged.
fn network_error(e: reqwest::Error) -> TransportError {
    TransportError::Network(e.without_url().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_fills_in_reason_phrase() {
        let response = TransportResponse::new(503, "");
        assert_eq!(response.status_text, "Service Unavailable");
        assert!(!response.is_success());
        assert!(TransportResponse::new(204, "").is_success());
    }
}
