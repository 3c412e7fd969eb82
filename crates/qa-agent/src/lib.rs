//! Keyword-lookup responder: a fixed, ordered table of trigger phrases plus
//! question-word heuristics. Every query gets exactly one canned answer.

pub mod knowledge;
pub mod responder;

pub use knowledge::{KnowledgeEntry, KNOWLEDGE_BASE};
pub use responder::{
    normalize, respond, Heuristic, KeywordResponder, MatchKind, Resolution, Responder,
    FALLBACK_ANSWER,
};
