// src/services/chatbot.rs
use serde_json::Value;
use tracing::{info, warn};

use crate::config::CompletionSettings;
use crate::message::ChatResult;
use crate::services::completion::{ChatClient, CompletionRequest, PromptMessage};

/// Reply for empty or missing input ("please enter a question").
pub const EMPTY_INPUT_REPLY: &str = "질문을 입력해주세요.";

/// Prefix for upstream failures ("error: ").
pub const ERROR_PREFIX: &str = "오류: ";

/// Characters trimmed from input: Unicode whitespace plus the ASCII
/// separators U+001C..=U+001F.
pub fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Pull the trimmed text of `field` out of a raw JSON body.
///
/// Unparseable bodies, non-object bodies, missing or non-string fields and
/// whitespace-only text all come back as `None`.
pub fn extract_input(body: &[u8], field: &str) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    let text = value.get(field)?.as_str()?.trim_matches(is_blank);
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

pub fn build_request(settings: &CompletionSettings, input: &str) -> CompletionRequest {
    CompletionRequest {
        model: settings.model.clone(),
        messages: vec![
            PromptMessage::system(settings.system_prompt.as_str()),
            PromptMessage::user(input),
        ],
        temperature: settings.temperature,
        max_tokens: settings.max_tokens,
        stream: false,
    }
}

/// Forward one already-validated input to the completion service.
pub async fn generate_reply(
    client: &dyn ChatClient,
    settings: &CompletionSettings,
    input: &str,
) -> ChatResult {
    let request = build_request(settings, input);

    match client.complete(&request).await {
        Ok(text) => {
            info!(chars = text.chars().count(), "completion succeeded");
            ChatResult::Success(text)
        }
        Err(e) => {
            warn!(error = %e, "completion failed");
            ChatResult::Failure(format!("{ERROR_PREFIX}{e}"))
        }
    }
}

/// Validate `field` in `body` and, if present, answer it.
/// Invalid input never reaches the client.
pub async fn answer(
    client: &dyn ChatClient,
    settings: &CompletionSettings,
    body: &[u8],
    field: &str,
) -> ChatResult {
    match extract_input(body, field) {
        Some(input) => generate_reply(client, settings, &input).await,
        None => ChatResult::Failure(EMPTY_INPUT_REPLY.to_string()),
    }
}
