// src/services/completion.rs
//! Client for an OpenAI-compatible chat completions API (Groq by default).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("completion API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode completion response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("completion response contained no choices")]
    NoChoices,

    #[error("completion response contained no message content")]
    MissingContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptMessage {
    pub role: Role,
    pub content: String,
}

impl PromptMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Body of `POST /chat/completions`.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<PromptMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub stream: bool,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Text of the first choice of a raw completion response body.
pub fn first_choice_text(body: &[u8]) -> Result<String, CompletionError> {
    let parsed: CompletionResponse = serde_json::from_slice(body)?;
    parsed
        .choices
        .into_iter()
        .next()
        .ok_or(CompletionError::NoChoices)?
        .message
        .content
        .ok_or(CompletionError::MissingContent)
}

/// Anything that can turn a prompt into generated text.
///
/// The server holds one of these for its whole lifetime; tests swap in a fake.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}

#[derive(Debug, Clone)]
pub struct GroqClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl GroqClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, CompletionError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl ChatClient for GroqClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        debug!(
            model = %request.model,
            messages = request.messages.len(),
            "calling completion API"
        );

        let resp = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.bytes().await?;

        if !status.is_success() {
            return Err(CompletionError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        first_choice_text(&body)
    }
}
