//! Request submitter
//!
//! Posts a [`GenerationRequest`] to the generation service and turns the
//! reply into flashcards. One call, no retries, no timeout.

pub mod shape;

pub use shape::{extract_flashcards, ResponseShape};

use crate::models::{Flashcard, GenerationRequest};
use crate::{LingoError, Result};
use reqwest::{header::CONTENT_TYPE, Client, StatusCode};
use serde_json::Value;
use tracing::{debug, info, warn};

/// HTTP client for the flashcard generation endpoint
#[derive(Debug, Clone)]
pub struct FlashcardClient {
    http: Client,
    endpoint: String,
}

impl FlashcardClient {
    /// Create a client for the given endpoint URL
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("lingocards/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LingoError::TransportFailure(format!("HTTP client build failed: {}", e)))?;

        Ok(Self::with_http_client(endpoint, http))
    }

    /// Create a client around an already configured `reqwest::Client`
    pub fn with_http_client(endpoint: impl Into<String>, http: Client) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// Endpoint requests are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit one generation request and return the cards it produced
    pub async fn generate(&self, request: &GenerationRequest) -> Result<Vec<Flashcard>> {
        request.validate()?;
        info!(
            endpoint = %self.endpoint,
            source = %request.source_language,
            target = %request.target_language,
            count = request.card_count,
            "requesting flashcards"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        let cards = interpret_response(status, &body)?;

        info!(received = cards.len(), "flashcards generated");
        Ok(cards)
    }
}

/// Turn a status code and raw body into cards or a failure
pub fn interpret_response(status: StatusCode, body: &[u8]) -> Result<Vec<Flashcard>> {
    if !status.is_success() {
        let message = server_error_message(body)
            .unwrap_or_else(|| format!("Error: {}", status.as_u16()));
        warn!(status = status.as_u16(), message = %message, "generation request rejected");
        return Err(LingoError::RequestFailure {
            status: status.as_u16(),
            message,
        });
    }

    let value: Value = serde_json::from_slice(body)?;
    debug!(bytes = body.len(), "parsed generation response");
    Ok(extract_flashcards(value))
}

/// The `error` string of a JSON failure body, if there is one
fn server_error_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    match value.get("error")? {
        Value::String(message) if !message.trim().is_empty() => Some(message.clone()),
        Value::Null | Value::Bool(false) | Value::String(_) => None,
        other => Some(other.to_string()),
    }
}
