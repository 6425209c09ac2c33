//! Core types for Lingo — conversation turns, sessions, and the
//! chat-completions wire format.
//!
//! The domain model (`Turn`, `Session`) is deliberately small: a session is
//! an ordered list of turns plus the current topic. Turns are never edited
//! or removed once appended; conversation order is semantically significant
//! because the history is replayed verbatim as context to the generative API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────
// Conversation domain
// ─────────────────────────────────────────────

/// Who produced a turn: the learner or the tutor model.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// One message in a tutoring conversation.
///
/// Immutable once appended to a session's history.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
    /// Create a learner turn.
    pub fn user(text: impl Into<String>) -> Self {
        Turn {
            role: Role::User,
            text: text.into(),
        }
    }

    /// Create a tutor (model) turn.
    pub fn model(text: impl Into<String>) -> Self {
        Turn {
            role: Role::Model,
            text: text.into(),
        }
    }

    /// Map this turn into the chat-completions message format.
    ///
    /// `Role::Model` maps to the `assistant` role on the wire.
    pub fn to_message(&self) -> Message {
        match self.role {
            Role::User => Message::user(&self.text),
            Role::Model => Message::assistant(&self.text),
        }
    }
}

/// A single learner's tutoring conversation.
///
/// Lives only in process memory; removed by an explicit end-session call.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    /// Opaque session id.
    pub id: String,
    /// Current topic ("" until a topic is started).
    pub topic: String,
    /// Turns in strict chronological append order.
    pub history: Vec<Turn>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Create a new empty session.
    pub fn new(id: impl Into<String>) -> Self {
        let now = Utc::now();
        Session {
            id: id.into(),
            topic: String::new(),
            history: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Conversation difficulty — selects the canned topic-opener template.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Parse a request parameter. Anything other than `"beginner"` or
    /// `"advanced"` (including absent) falls back to intermediate.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("beginner") => Difficulty::Beginner,
            Some("advanced") => Difficulty::Advanced,
            _ => Difficulty::Intermediate,
        }
    }

    /// Label used in prompts and as the session topic. Intermediate is
    /// called "medium", matching the front end's vocabulary.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "medium",
            Difficulty::Advanced => "advanced",
        }
    }
}

// ─────────────────────────────────────────────
// Chat completions wire format
// ─────────────────────────────────────────────

/// A chat message in the OpenAI chat-completions format.
///
/// Each variant maps to a `role` field value on the wire.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "role")]
pub enum Message {
    #[serde(rename = "system")]
    System { content: String },

    #[serde(rename = "user")]
    User { content: String },

    #[serde(rename = "assistant")]
    Assistant { content: String },
}

impl Message {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Message::System {
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Message::User {
            content: content.into(),
        }
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Message::Assistant {
            content: content.into(),
        }
    }
}

/// Request body for an OpenAI-compatible chat completion API.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

/// Raw chat completion response from an OpenAI-compatible API.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub id: Option<String>,
    pub choices: Vec<ChatChoice>,
    pub usage: Option<UsageInfo>,
}

/// A single choice in a chat completion response.
#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: AssistantReply,
    pub finish_reason: Option<String>,
}

/// The assistant message within a chat completion choice.
///
/// `content` is optional on the wire; a response without it is malformed
/// for our purposes and handled by the provider, not by a panic.
#[derive(Debug, Deserialize)]
pub struct AssistantReply {
    pub content: Option<String>,
}

/// Token usage statistics from the API.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UsageInfo {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
