//! Chat endpoint — POST /api/chat
//!
//! Request:  `{"message": "hello", "history": [...]}`
//! Response: `{"response": "..."}`
//! Error:    `{"error": "Invalid message"}` (400) or
//!           `{"error": "Internal server error"}` (500)
//!
//! The body is taken as raw bytes so that undecodable JSON goes through
//! the same error contract instead of axum's default rejection.

use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use qa_protocol::{handle_chat, ChatError, ChatFailure, ChatReply};
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::app::AppState;

pub async fn chat_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ChatReply>, (StatusCode, Json<ChatError>)> {
    match handle_chat(state.responder.as_ref(), &body) {
        Ok(reply) => {
            if let Some(kind) = reply.matched {
                debug!(%kind, "chat answered");
            }
            Ok(Json(reply))
        }
        Err(e) => {
            match &e {
                ChatFailure::InvalidMessage => warn!("POST /api/chat rejected: invalid message"),
                ChatFailure::Internal(_) => error!(error = %e, "POST /api/chat failed"),
            }
            let status =
                StatusCode::from_u16(e.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            Err((status, Json(e.to_error())))
        }
    }
}
