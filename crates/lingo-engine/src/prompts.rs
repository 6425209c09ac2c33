//! Prompt templates for the tutoring flow.
//!
//! These strings are contracts, not suggestions: the topic openers are
//! matched literally by tests, and the grammar check hinges on the upstream
//! model answering exactly `"perfect"`. That literal comparison is fragile
//! by construction — a reply of `"perfect."` counts as a correction — and
//! is pinned by tests rather than papered over.

use lingo_core::types::Difficulty;

/// Topic opener for beginner learners.
pub const BEGINNER_PROMPT: &str = "Start a friendly English conversation for a beginner. \
Ask a short and simple question. Avoid long replies. Speak naturally like a tutor.";

/// Topic opener for intermediate ("medium") learners. Also the fallback
/// when the difficulty is absent or unrecognized.
pub const INTERMEDIATE_PROMPT: &str = "Start a medium-level English conversation. \
Ask a clear question related to hobbies, travel, or daily life. Speak simply.";

/// Topic opener for advanced learners.
pub const ADVANCED_PROMPT: &str = "Start an engaging English conversation on a complex \
topic like culture or technology. Ask a thoughtful question. Speak like a fluent tutor.";

/// The literal the grammar check compares against (case-insensitive).
pub const PERFECT: &str = "perfect";

/// Build the topic-opener prompt.
///
/// A non-empty custom topic wins over the canned difficulty templates.
pub fn topic_prompt(difficulty: Difficulty, custom_topic: Option<&str>) -> String {
    match custom_topic {
        Some(topic) => format!(
            "Start a conversation in English about \"{}\". \
Ask one engaging question. Speak like a friendly tutor, adapting to a {}-level learner. \
Keep the reply short and conversational.",
            topic,
            difficulty.label()
        ),
        None => match difficulty {
            Difficulty::Beginner => BEGINNER_PROMPT.to_string(),
            Difficulty::Intermediate => INTERMEDIATE_PROMPT.to_string(),
            Difficulty::Advanced => ADVANCED_PROMPT.to_string(),
        },
    }
}

/// Build the grammar-check prompt for a learner message.
pub fn grammar_prompt(message: &str) -> String {
    format!(
        "The user said: \"{}\"\n\
Is it grammatically correct? If yes, respond with \"perfect\".\n\
If not, provide a corrected version and a short 5-10 word explanation.",
        message
    )
}

/// Build the follow-up prompt when the message was grammatically perfect.
pub fn continuation_prompt(message: &str) -> String {
    format!(
        "Continue the conversation based on: \"{}\".\n\
Ask a relevant question to keep talking naturally.",
        message
    )
}

/// Build the follow-up prompt when the message needed a correction.
/// The correction text is embedded verbatim.
pub fn correction_prompt(message: &str, correction: &str) -> String {
    format!(
        "The user said: \"{}\"\n\
You corrected it to: \"{}\".\n\
Now reply politely with the correction, explain briefly, and continue the conversation \
naturally with a question.",
        message, correction
    )
}

/// Classify a grammar-check reply: trimmed, case-insensitive match against
/// [`PERFECT`]. Anything else is treated as a correction.
pub fn is_perfect(grammar_reply: &str) -> bool {
    grammar_reply.trim().eq_ignore_ascii_case(PERFECT)
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
