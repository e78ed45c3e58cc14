//! Gemini `generateContent` client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::domain::{AppError, Conversation, OracleConfig, Role};
use crate::ports::Oracle;

const X_GOOG_API_KEY: &str = "X-Goog-Api-Key";

/// HTTP client for the Gemini API.
#[derive(Clone)]
pub struct HttpGeminiOracle {
    api_key: String,
    endpoint: Url,
    client: Client,
}

impl std::fmt::Debug for HttpGeminiOracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeminiOracle")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpGeminiOracle {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &OracleConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.timeout_secs.map(Duration::from_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_key, endpoint: config.endpoint()?, client })
    }

    /// Create from the environment variable named in the configuration.
    pub fn from_env(config: &OracleConfig) -> Result<Self, AppError> {
        let api_key = config.api_key()?;
        Self::new(api_key, config)
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default, rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl<'a> GenerateRequest<'a> {
    /// History followed by the new user message.
    fn new(conversation: &'a Conversation, message: &'a str) -> Self {
        let mut contents: Vec<Content<'a>> = conversation
            .turns()
            .iter()
            .map(|turn| Content { role: turn.role.as_str(), parts: [Part { text: &turn.text }] })
            .collect();
        contents.push(Content { role: Role::User.as_str(), parts: [Part { text: message }] });
        Self { contents }
    }
}

impl GenerateResponse {
    fn into_text(self) -> Result<String, AppError> {
        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| AppError::MalformedResponse("no candidates in response".into()))?;

        let finish_reason = candidate.finish_reason;
        let parts = candidate.content.map(|content| content.parts).unwrap_or_default();
        let text: String = parts.into_iter().filter_map(|part| part.text).collect();

        if text.trim().is_empty() {
            return Err(AppError::MalformedResponse(format!(
                "candidate has no text (finish reason: {})",
                finish_reason.as_deref().unwrap_or("unknown")
            )));
        }
        Ok(text)
    }
}

impl Oracle for HttpGeminiOracle {
    fn send(&self, conversation: &mut Conversation, message: &str) -> Result<String, AppError> {
        let request = GenerateRequest::new(conversation, message);
        debug!(history = conversation.len(), "sending generateContent request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(X_GOOG_API_KEY, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .map_err(|e| AppError::OracleRequest(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::OracleStatus { status: status.as_u16(), body });
        }

        let body: GenerateResponse = response
            .json()
            .map_err(|e| AppError::MalformedResponse(format!("Failed to parse response: {}", e)))?;
        let text = body.into_text()?;

        conversation.record_exchange(message, text.clone());
        Ok(text)
    }
}
