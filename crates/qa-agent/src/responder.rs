use std::fmt;

use crate::knowledge::{lookup_exact, lookup_partial, KnowledgeEntry, KNOWLEDGE_BASE};

const HOW_IT_WORKS_ANSWER: &str = "That's a great question about how things work! While I don't have specific details on that topic in my knowledge base, I can tell you that understanding how systems work often involves breaking them down into their component parts and studying their interactions.";
const WHY_ANSWER: &str = "That's an interesting \"why\" question! Understanding the reasons behind things often requires looking at multiple factors including history, science, and context. Could you rephrase your question or ask about a specific aspect?";
const WHEN_ANSWER: &str = "For specific dates and timing questions, I recommend checking authoritative sources for the most accurate and up-to-date information.";
const WHERE_ANSWER: &str = "For location-based questions, I suggest using mapping services or location-specific resources for the most accurate information.";
const HELP_ANSWER: &str = "I'm here to help! You can ask me about technology, programming, general knowledge, or just chat. Try asking questions like \"What is AI?\", \"Tell me a joke\", or \"What can you do?\"";

/// Returned when neither the knowledge base nor any heuristic applies.
pub const FALLBACK_ANSWER: &str = "That's an interesting question! While I don't have specific information about that in my knowledge base, I'm designed to answer questions about technology, programming, and general topics. Try asking me about AI, programming languages, or just say hello!";

/// Question-word rules consulted when the knowledge base has no match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    HowItWorks,
    Why,
    When,
    Where,
    Help,
}

impl Heuristic {
    /// Priority order; the first rule that fires wins.
    pub const ALL: [Heuristic; 5] = [
        Heuristic::HowItWorks,
        Heuristic::Why,
        Heuristic::When,
        Heuristic::Where,
        Heuristic::Help,
    ];

    fn fires(self, normalized: &str) -> bool {
        match self {
            Heuristic::HowItWorks => normalized.contains("how") && normalized.contains("work"),
            Heuristic::Why => normalized.contains("why"),
            Heuristic::When => normalized.contains("when"),
            Heuristic::Where => normalized.contains("where"),
            Heuristic::Help => normalized.contains("help"),
        }
    }

    /// First rule in priority order that fires for `normalized`.
    pub fn detect(normalized: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|h| h.fires(normalized))
    }

    pub fn answer(self) -> &'static str {
        match self {
            Heuristic::HowItWorks => HOW_IT_WORKS_ANSWER,
            Heuristic::Why => WHY_ANSWER,
            Heuristic::When => WHEN_ANSWER,
            Heuristic::Where => WHERE_ANSWER,
            Heuristic::Help => HELP_ANSWER,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Heuristic::HowItWorks => "how_it_works",
            Heuristic::Why => "why",
            Heuristic::When => "when",
            Heuristic::Where => "where",
            Heuristic::Help => "help",
        }
    }
}

/// Which tier produced an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Partial,
    Heuristic(Heuristic),
    Fallback,
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchKind::Exact => f.write_str("exact"),
            MatchKind::Partial => f.write_str("partial"),
            MatchKind::Heuristic(h) => write!(f, "heuristic:{}", h.as_str()),
            MatchKind::Fallback => f.write_str("fallback"),
        }
    }
}

/// An answer together with the tier that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub kind: MatchKind,
    pub answer: String,
}

/// Anything that turns a free-text query into a single reply.
///
/// Implementations must be total: every input, including the empty
/// string, yields a non-empty answer.
pub trait Responder: Send + Sync {
    fn resolve(&self, query: &str) -> Resolution;

    /// Number of entries in the backing knowledge base.
    fn entry_count(&self) -> usize;

    fn respond(&self, query: &str) -> String {
        self.resolve(query).answer
    }
}

/// Responder over a fixed, ordered keyword table.
#[derive(Debug, Clone, Copy)]
pub struct KeywordResponder {
    entries: &'static [KnowledgeEntry],
}

impl KeywordResponder {
    pub fn new(entries: &'static [KnowledgeEntry]) -> Self {
        Self { entries }
    }
}

impl Default for KeywordResponder {
    fn default() -> Self {
        Self::new(KNOWLEDGE_BASE)
    }
}

impl Responder for KeywordResponder {
    fn resolve(&self, query: &str) -> Resolution {
        let normalized = normalize(query);

        if let Some(entry) = lookup_exact(self.entries, &normalized) {
            return Resolution {
                kind: MatchKind::Exact,
                answer: entry.answer.to_string(),
            };
        }

        // An empty query is a substring of every trigger; let it fall through.
        if !normalized.is_empty() {
            if let Some(entry) = lookup_partial(self.entries, &normalized) {
                return Resolution {
                    kind: MatchKind::Partial,
                    answer: entry.answer.to_string(),
                };
            }
        }

        match Heuristic::detect(&normalized) {
            Some(h) => Resolution {
                kind: MatchKind::Heuristic(h),
                answer: h.answer().to_string(),
            },
            None => Resolution {
                kind: MatchKind::Fallback,
                answer: FALLBACK_ANSWER.to_string(),
            },
        }
    }

    fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

/// Lowercase and trim surrounding whitespace, including a byte-order mark.
pub fn normalize(query: &str) -> String {
    query
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .to_lowercase()
}

/// Answer `query` from the built-in knowledge base.
pub fn respond(query: &str) -> String {
    KeywordResponder::default().respond(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(query: &str) -> MatchKind {
        KeywordResponder::default().resolve(query).kind
    }

    #[test]
    fn every_trigger_answers_exactly() {
        for entry in KNOWLEDGE_BASE {
            assert_eq!(respond(entry.trigger), entry.answer, "trigger {:?}", entry.trigger);
            assert_eq!(kind_of(entry.trigger), MatchKind::Exact);
        }
    }

    #[test]
    fn triggers_match_regardless_of_case_and_padding() {
        for entry in KNOWLEDGE_BASE {
            let noisy = format!("  {}\t", entry.trigger.to_uppercase());
            assert_eq!(respond(&noisy), entry.answer, "query {:?}", noisy);
        }
    }

    #[test]
    fn normalization_is_idempotent() {
        assert_eq!(respond("HELLO "), respond("hello"));
        assert_eq!(respond("hello"), "Hello! How can I help you today?");
    }

    #[test]
    fn byte_order_mark_is_trimmed() {
        assert_eq!(normalize("\u{feff} Hello \u{feff}"), "hello");
        assert_eq!(kind_of("\u{feff}hello"), MatchKind::Exact);
        assert_eq!(respond("\u{feff}\u{feff}"), FALLBACK_ANSWER);
    }

    #[test]
    fn empty_and_blank_queries_fall_back() {
        assert_eq!(respond(""), FALLBACK_ANSWER);
        assert_eq!(respond("   "), FALLBACK_ANSWER);
        assert_eq!(kind_of(""), MatchKind::Fallback);
    }

    #[test]
    fn why_question_uses_heuristic() {
        assert_eq!(respond("why is the sky blue"), WHY_ANSWER);
        assert_eq!(kind_of("why is the sky blue"), MatchKind::Heuristic(Heuristic::Why));
    }

    #[test]
    fn earlier_trigger_wins_partial_tie() {
        let answer = respond("what is ai and what is python");
        let ai = KNOWLEDGE_BASE.iter().find(|e| e.trigger == "what is ai").unwrap();
        assert_eq!(answer, ai.answer);
        assert_eq!(kind_of("what is ai and what is python"), MatchKind::Partial);
    }

    #[test]
    fn short_trigger_shadows_later_entries() {
        // "something" contains "hi".
        assert_eq!(respond("something"), "Hi there! What can I do for you?");
    }

    #[test]
    fn query_contained_in_trigger_matches() {
        assert_eq!(
            respond("Meaning of Life"),
            "That's a profound philosophical question! Many people find meaning through relationships, personal growth, helping others, or pursuing their passions."
        );
    }

    #[test]
    fn heuristics_fire_in_priority_order() {
        assert_eq!(
            kind_of("how does a rocket work"),
            MatchKind::Heuristic(Heuristic::HowItWorks)
        );
        assert_eq!(kind_of("when was rust released"), MatchKind::Heuristic(Heuristic::When));
        assert_eq!(kind_of("where is paris"), MatchKind::Heuristic(Heuristic::Where));
        assert_eq!(kind_of("can you help me"), MatchKind::Heuristic(Heuristic::Help));
        // "why" outranks "when".
        assert_eq!(kind_of("why and when"), MatchKind::Heuristic(Heuristic::Why));
    }

    #[test]
    fn how_without_work_is_not_how_it_works() {
        assert_eq!(kind_of("how tall is everest"), MatchKind::Fallback);
    }

    #[test]
    fn unknown_topic_gets_default_fallback() {
        assert_eq!(respond("tell me about quantum physics"), FALLBACK_ANSWER);
    }

    #[test]
    fn custom_table_is_respected() {
        static TABLE: &[KnowledgeEntry] = &[KnowledgeEntry::new("ping", "pong")];
        let responder = KeywordResponder::new(TABLE);
        assert_eq!(responder.respond("PING"), "pong");
        assert_eq!(responder.entry_count(), 1);
        assert_eq!(responder.respond("hello"), FALLBACK_ANSWER);
    }

    #[test]
    fn match_kind_display() {
        assert_eq!(MatchKind::Exact.to_string(), "exact");
        assert_eq!(
            MatchKind::Heuristic(Heuristic::HowItWorks).to_string(),
            "heuristic:how_it_works"
        );
    }
}
