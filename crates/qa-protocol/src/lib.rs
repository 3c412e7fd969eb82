//! Wire contract for the chat endpoint, independent of any HTTP framework.
//!
//! Request:  `{"message": "hello", "history": [...]}`
//! Response: `{"response": "..."}`
//! Error:    `{"error": "Invalid message"}` or `{"error": "Internal server error"}`

pub mod chat;

pub use chat::{handle_chat, ChatError, ChatFailure, ChatReply, ChatRequest};
