/// One trigger phrase and its canned answer.
///
/// Triggers are lowercase and unique within [`KNOWLEDGE_BASE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnowledgeEntry {
    pub trigger: &'static str,
    pub answer: &'static str,
}

impl KnowledgeEntry {
    pub const fn new(trigger: &'static str, answer: &'static str) -> Self {
        Self { trigger, answer }
    }
}

const SELF_INTRO: &str = "I am a Q&A Agent, an AI assistant designed to answer your questions.";

/// The built-in knowledge base.
///
/// Declaration order matters: partial matching returns the first entry
/// whose trigger overlaps the query, so short triggers like `"hi"` shadow
/// anything declared after them.
pub static KNOWLEDGE_BASE: &[KnowledgeEntry] = &[
    KnowledgeEntry::new("what is your name", SELF_INTRO),
    KnowledgeEntry::new("who are you", SELF_INTRO),
    KnowledgeEntry::new("hello", "Hello! How can I help you today?"),
    KnowledgeEntry::new("hi", "Hi there! What can I do for you?"),
    KnowledgeEntry::new("hey", "Hey! What would you like to know?"),
    KnowledgeEntry::new(
        "how are you",
        "I'm doing great, thank you for asking! How can I assist you?",
    ),
    KnowledgeEntry::new(
        "what can you do",
        "I can answer questions on a variety of topics including technology, science, history, and general knowledge. Just ask me anything!",
    ),
    KnowledgeEntry::new(
        "what is ai",
        "AI (Artificial Intelligence) refers to computer systems designed to perform tasks that typically require human intelligence, such as learning, problem-solving, and decision-making.",
    ),
    KnowledgeEntry::new(
        "what is machine learning",
        "Machine Learning is a subset of AI that enables systems to learn and improve from experience without being explicitly programmed.",
    ),
    KnowledgeEntry::new(
        "what is javascript",
        "JavaScript is a high-level, interpreted programming language primarily used for creating interactive web pages and web applications.",
    ),
    KnowledgeEntry::new(
        "what is python",
        "Python is a high-level, interpreted programming language known for its simplicity and readability, widely used in web development, data science, and AI.",
    ),
    KnowledgeEntry::new(
        "what is react",
        "React is a JavaScript library for building user interfaces, developed by Facebook. It uses a component-based architecture.",
    ),
    KnowledgeEntry::new(
        "what is next.js",
        "Next.js is a React framework that provides features like server-side rendering, static site generation, and API routes for building modern web applications.",
    ),
    KnowledgeEntry::new(
        "what is the meaning of life",
        "That's a profound philosophical question! Many people find meaning through relationships, personal growth, helping others, or pursuing their passions.",
    ),
    KnowledgeEntry::new(
        "tell me a joke",
        "Why do programmers prefer dark mode? Because light attracts bugs! 😄",
    ),
    KnowledgeEntry::new(
        "thank you",
        "You're welcome! Feel free to ask me anything else.",
    ),
    KnowledgeEntry::new("thanks", "You're welcome! Happy to help!"),
    KnowledgeEntry::new("bye", "Goodbye! Have a great day!"),
    KnowledgeEntry::new(
        "goodbye",
        "Farewell! Come back if you have more questions.",
    ),
];

/// Entry whose trigger equals `normalized` exactly.
pub fn lookup_exact<'a>(
    entries: &'a [KnowledgeEntry],
    normalized: &str,
) -> Option<&'a KnowledgeEntry> {
    entries.iter().find(|e| e.trigger == normalized)
}

/// First entry, in declaration order, where the query contains the trigger
/// or the trigger contains the query.
pub fn lookup_partial<'a>(
    entries: &'a [KnowledgeEntry],
    normalized: &str,
) -> Option<&'a KnowledgeEntry> {
    entries
        .iter()
        .find(|e| normalized.contains(e.trigger) || e.trigger.contains(normalized))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn triggers_are_unique() {
        let unique: HashSet<&str> = KNOWLEDGE_BASE.iter().map(|e| e.trigger).collect();
        assert_eq!(unique.len(), KNOWLEDGE_BASE.len());
    }

    #[test]
    fn triggers_are_normalized() {
        for entry in KNOWLEDGE_BASE {
            assert_eq!(entry.trigger, entry.trigger.trim().to_lowercase());
            assert!(!entry.trigger.is_empty());
            assert!(!entry.answer.is_empty());
        }
    }

    #[test]
    fn partial_lookup_follows_declaration_order() {
        // "goodbye" contains "bye", which is declared first.
        let hit = lookup_partial(KNOWLEDGE_BASE, "goodbye friend").unwrap();
        assert_eq!(hit.trigger, "bye");
    }

    #[test]
    fn partial_lookup_matches_query_inside_trigger() {
        let hit = lookup_partial(KNOWLEDGE_BASE, "meaning of life").unwrap();
        assert_eq!(hit.trigger, "what is the meaning of life");
    }

    #[test]
    fn exact_lookup_ignores_near_misses() {
        assert!(lookup_exact(KNOWLEDGE_BASE, "hello there").is_none());
        assert_eq!(
            lookup_exact(KNOWLEDGE_BASE, "goodbye").unwrap().answer,
            "Farewell! Come back if you have more questions."
        );
    }
}
