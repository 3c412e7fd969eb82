use qa_agent::{MatchKind, Responder};
use qa_core::types::Message;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const INVALID_MESSAGE: &str = "Invalid message";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The user's question.
    pub message: String,
    /// Transcript so far. Accepted for display parity with the client, never
    /// consulted when answering.
    #[serde(default)]
    pub history: Vec<Message>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            history: Vec::new(),
        }
    }

    /// Validate a decoded JSON body.
    ///
    /// `message` must be a non-empty string. A body that is not an object
    /// carries no message and is rejected as invalid, except `null`, which
    /// is treated as a broken request. A malformed `history` is dropped.
    pub fn from_value(value: Value) -> Result<Self, ChatFailure> {
        let mut fields = match value {
            Value::Object(fields) => fields,
            Value::Null => return Err(ChatFailure::Internal("request body is null".to_string())),
            _ => return Err(ChatFailure::InvalidMessage),
        };

        let message = match fields.remove("message") {
            Some(Value::String(s)) if !s.is_empty() => s,
            _ => return Err(ChatFailure::InvalidMessage),
        };

        let history = fields
            .remove("history")
            .and_then(|h| serde_json::from_value(h).ok())
            .unwrap_or_default();

        Ok(Self { message, history })
    }

    /// Decode and validate a raw request body.
    pub fn from_slice(body: &[u8]) -> Result<Self, ChatFailure> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| ChatFailure::Internal(format!("malformed request body: {e}")))?;
        Self::from_value(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    /// Tier that produced the answer; server-side only.
    #[serde(skip)]
    pub matched: Option<MatchKind>,
}

impl ChatReply {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            matched: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatError {
    pub error: String,
}

/// Why a chat request produced no answer.
#[derive(Debug, Error)]
pub enum ChatFailure {
    #[error("Invalid message")]
    InvalidMessage,

    /// The detail is for logs only; callers see a generic message.
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ChatFailure {
    /// HTTP-equivalent status code.
    pub fn status(&self) -> u16 {
        match self {
            ChatFailure::InvalidMessage => 400,
            ChatFailure::Internal(_) => 500,
        }
    }

    /// Text safe to return to the caller.
    pub fn public_message(&self) -> &'static str {
        match self {
            ChatFailure::InvalidMessage => INVALID_MESSAGE,
            ChatFailure::Internal(_) => INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error(&self) -> ChatError {
        ChatError {
            error: self.public_message().to_string(),
        }
    }
}

/// Full request/response cycle for one chat message: decode, validate,
/// answer.
pub fn handle_chat(responder: &dyn Responder, body: &[u8]) -> Result<ChatReply, ChatFailure> {
    let request = ChatRequest::from_slice(body)?;
    let resolution = responder.resolve(&request.message);
    Ok(ChatReply {
        response: resolution.answer,
        matched: Some(resolution.kind),
    })
}
