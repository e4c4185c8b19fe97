// src/message.rs
use serde::{Deserialize, Serialize};

/// Outcome of one chat-style request. Produced exactly once per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatResult {
    Success(String),
    Failure(String),
}

impl ChatResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ChatResult::Success(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeShape {
    /// `{"success", "response"}` for both outcomes.
    Chat,
    /// `{"success", "result": {"answer"}}` on success, `{"success", "message"}` on failure.
    Ask,
}

/// What distinguishes one chat-style endpoint from another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub field: &'static str,
    pub shape: EnvelopeShape,
}

impl Endpoint {
    pub const CHAT: Endpoint = Endpoint {
        field: "message",
        shape: EnvelopeShape::Chat,
    };
    pub const ASK: Endpoint = Endpoint {
        field: "query",
        shape: EnvelopeShape::Ask,
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Envelope {
    Chat { success: bool, response: String },
    Answer { success: bool, result: Answer },
    Message { success: bool, message: String },
}

impl Envelope {
    pub fn wrap(shape: EnvelopeShape, result: ChatResult) -> Self {
        match (shape, result) {
            (EnvelopeShape::Chat, ChatResult::Success(text)) => Envelope::Chat {
                success: true,
                response: text,
            },
            (EnvelopeShape::Chat, ChatResult::Failure(message)) => Envelope::Chat {
                success: false,
                response: message,
            },
            (EnvelopeShape::Ask, ChatResult::Success(answer)) => Envelope::Answer {
                success: true,
                result: Answer { answer },
            },
            (EnvelopeShape::Ask, ChatResult::Failure(message)) => Envelope::Message {
                success: false,
                message,
            },
        }
    }

    pub fn success(&self) -> bool {
        match self {
            Envelope::Chat { success, .. }
            | Envelope::Answer { success, .. }
            | Envelope::Message { success, .. } => *success,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn chat_shape_uses_response_for_both_outcomes() {
        let ok = Envelope::wrap(EnvelopeShape::Chat, ChatResult::Success("hi".into()));
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            json!({"success": true, "response": "hi"})
        );

        let err = Envelope::wrap(EnvelopeShape::Chat, ChatResult::Failure("nope".into()));
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({"success": false, "response": "nope"})
        );
    }

    #[test]
    fn ask_shape_differs_by_outcome() {
        let ok = Envelope::wrap(EnvelopeShape::Ask, ChatResult::Success("42".into()));
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            json!({"success": true, "result": {"answer": "42"}})
        );

        let err = Envelope::wrap(EnvelopeShape::Ask, ChatResult::Failure("nope".into()));
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({"success": false, "message": "nope"})
        );
        assert!(!err.success());
    }
}
