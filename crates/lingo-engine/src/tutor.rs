//! The conversation orchestrator.
//!
//! Two entry operations on top of the session store and the provider:
//!
//! - `start_topic` — one generation call; *replaces* the session history
//!   with the opener prompt and the tutor's reply.
//! - `handle_message` — two sequential generation calls (grammar check,
//!   then contextual reply); *appends* the raw learner message and the
//!   final reply as a pair.
//!
//! Both mutate the session only after every upstream call has succeeded,
//! so a failed request leaves the history exactly as it was.

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, info};

use lingo_core::types::{Difficulty, Message, Turn};
use lingo_core::utils::truncate_string;
use lingo_providers::{LlmProvider, ProviderError};

use crate::prompts;
use crate::store::SessionStore;

// ─────────────────────────────────────────────
// Errors and results
// ─────────────────────────────────────────────

/// Errors surfaced to callers of the orchestrator.
#[derive(Debug, Error)]
pub enum TutorError {
    /// Unknown or already-ended session id.
    #[error("session not found")]
    SessionNotFound,

    /// The generative client failed; no partial state was committed.
    #[error(transparent)]
    Upstream(#[from] ProviderError),
}

/// Result of handling one learner message.
#[derive(Clone, Debug, PartialEq)]
pub struct TutorReply {
    /// The grammar correction, or `None` when the message was perfect.
    pub correction: Option<String>,
    /// The tutor's conversational reply.
    pub response: String,
}

// ─────────────────────────────────────────────
// TutorEngine
// ─────────────────────────────────────────────

/// Orchestrates grammar checks and replies over a session store.
pub struct TutorEngine {
    provider: Arc<dyn LlmProvider>,
    store: Arc<SessionStore>,
}

impl TutorEngine {
    /// Create an engine over the given provider and store.
    pub fn new(provider: Arc<dyn LlmProvider>, store: Arc<SessionStore>) -> Self {
        TutorEngine { provider, store }
    }

    /// Start a fresh session and return its id.
    pub fn start_session(&self) -> String {
        self.store.create()
    }

    /// End a session. Idempotent.
    pub fn end_session(&self, session_id: &str) -> bool {
        self.store.delete(session_id)
    }

    /// Number of live sessions (for health reporting).
    pub fn session_count(&self) -> usize {
        self.store.len()
    }

    /// Open a conversation topic.
    ///
    /// Builds the opener prompt (custom topic wins over canned difficulty
    /// templates), makes one generation call, and on success replaces the
    /// session history with exactly two turns: the prompt as `user` and the
    /// reply as `model`. Returns the reply text.
    pub async fn start_topic(
        &self,
        session_id: &str,
        difficulty: Option<&str>,
        custom_topic: Option<&str>,
    ) -> Result<String, TutorError> {
        let mut session = self
            .store
            .get(session_id)
            .ok_or(TutorError::SessionNotFound)?;

        let difficulty = Difficulty::from_param(difficulty);
        let custom = custom_topic.map(str::trim).filter(|t| !t.is_empty());
        let prompt = prompts::topic_prompt(difficulty, custom);

        debug!(session = %session_id, difficulty = difficulty.label(), custom = custom.is_some(), "starting topic");

        let reply = self.provider.generate(&[Message::user(&prompt)]).await?;

        session.history = vec![Turn::user(prompt), Turn::model(&reply)];
        session.topic = custom
            .map(String::from)
            .unwrap_or_else(|| difficulty.label().to_string());
        session.updated_at = Utc::now();
        self.store.put(session);

        info!(session = %session_id, reply = %truncate_string(&reply, 80), "topic started");
        Ok(reply)
    }

    /// Handle one learner message: grammar check, then contextual reply.
    ///
    /// The second call's context is the full prior history plus the
    /// instruction prompt; the history then grows by the *raw* learner
    /// message and the final reply (never the instruction prompts).
    pub async fn handle_message(
        &self,
        session_id: &str,
        message: &str,
    ) -> Result<TutorReply, TutorError> {
        let mut session = self
            .store
            .get(session_id)
            .ok_or(TutorError::SessionNotFound)?;

        // Step 1 — grammar check (no conversation context).
        let grammar = self
            .provider
            .generate(&[Message::user(prompts::grammar_prompt(message))])
            .await?;
        let grammar = grammar.trim().to_string();
        let perfect = prompts::is_perfect(&grammar);

        debug!(session = %session_id, perfect, "grammar check done");

        // Step 2 — reply, with the full prior history as context.
        let instruction = if perfect {
            prompts::continuation_prompt(message)
        } else {
            prompts::correction_prompt(message, &grammar)
        };

        let mut context: Vec<Message> = session.history.iter().map(Turn::to_message).collect();
        context.push(Message::user(instruction));

        let response = self.provider.generate(&context).await?.trim().to_string();

        session.history.push(Turn::user(message));
        session.history.push(Turn::model(&response));
        session.updated_at = Utc::now();
        self.store.put(session);

        info!(
            session = %session_id,
            corrected = !perfect,
            reply = %truncate_string(&response, 80),
            "message handled"
        );

        Ok(TutorReply {
            correction: (!perfect).then_some(grammar),
            response,
        })
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Provider fake that pops scripted replies and records every call.
    struct ScriptedProvider {
        replies: Mutex<VecDeque<Result<String, ProviderError>>>,
        calls: Mutex<Vec<Vec<Message>>>,
    }

    impl ScriptedProvider {
        fn new(replies: Vec<Result<String, ProviderError>>) -> Self {
            ScriptedProvider {
                replies: Mutex::new(replies.into()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<Vec<Message>> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LlmProvider for ScriptedProvider {
        async fn generate(&self, messages: &[Message]) -> Result<String, ProviderError> {
            self.calls.lock().unwrap().push(messages.to_vec());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .expect("scripted provider ran out of replies")
        }

        fn model(&self) -> &str {
            "scripted"
        }
    }

    fn make_engine(
        replies: Vec<Result<String, ProviderError>>,
    ) -> (TutorEngine, Arc<ScriptedProvider>, Arc<SessionStore>) {
        let provider = Arc::new(ScriptedProvider::new(replies));
        let store = Arc::new(SessionStore::new());
        let engine = TutorEngine::new(provider.clone(), store.clone());
        (engine, provider, store)
    }

    fn upstream_err() -> ProviderError {
        ProviderError::Api {
            status: 500,
            body: "boom".to_string(),
        }
    }

    // ── start_topic ──

    #[tokio::test]
    async fn test_start_topic_sends_beginner_template_verbatim() {
        let (engine, provider, _store) = make_engine(vec![Ok("Hi! How are you?".into())]);
        let id = engine.start_session();

        engine.start_topic(&id, Some("beginner"), None).await.unwrap();

        let calls = provider.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], vec![Message::user(prompts::BEGINNER_PROMPT)]);
    }

    #[tokio::test]
    async fn test_start_topic_sets_history_and_topic() {
        let (engine, _provider, store) = make_engine(vec![Ok("Hi! How are you?".into())]);
        let id = engine.start_session();

        let reply = engine.start_topic(&id, Some("beginner"), None).await.unwrap();
        assert_eq!(reply, "Hi! How are you?");

        let session = store.get(&id).unwrap();
        assert_eq!(session.history.len(), 2);
        assert_eq!(session.history[0], Turn::user(prompts::BEGINNER_PROMPT));
        assert_eq!(session.history[1], Turn::model("Hi! How are you?"));
        assert_eq!(session.topic, "beginner");
    }

    #[tokio::test]
    async fn test_start_topic_replaces_history_not_appends() {
        let (engine, _provider, store) =
            make_engine(vec![Ok("first".into()), Ok("second".into())]);
        let id = engine.start_session();

        engine.start_topic(&id, Some("beginner"), None).await.unwrap();
        engine.start_topic(&id, Some("advanced"), None).await.unwrap();

        let session = store.get(&id).unwrap();
        assert_eq!(session.history.len(), 2);
        assert_eq!(session.history[1], Turn::model("second"));
        assert_eq!(session.topic, "advanced");
    }

    #[tokio::test]
    async fn test_start_topic_custom_topic_wins() {
        let (engine, provider, store) = make_engine(vec![Ok("Let's talk jazz!".into())]);
        let id = engine.start_session();

        engine
            .start_topic(&id, Some("advanced"), Some("jazz music"))
            .await
            .unwrap();

        let calls = provider.calls();
        let Message::User { content } = &calls[0][0] else {
            panic!("expected user message");
        };
        assert!(content.contains("about \"jazz music\""));
        assert!(content.contains("advanced-level learner"));

        assert_eq!(store.get(&id).unwrap().topic, "jazz music");
    }

    #[tokio::test]
    async fn test_start_topic_blank_custom_topic_falls_back() {
        let (engine, provider, _store) = make_engine(vec![Ok("ok".into())]);
        let id = engine.start_session();

        engine.start_topic(&id, None, Some("   ")).await.unwrap();

        // Whitespace-only topic → default (medium) template
        assert_eq!(
            provider.calls()[0],
            vec![Message::user(prompts::INTERMEDIATE_PROMPT)]
        );
    }

    #[tokio::test]
    async fn test_start_topic_unknown_session() {
        let (engine, _provider, _store) = make_engine(vec![]);

        let err = engine.start_topic("missing", None, None).await.unwrap_err();
        assert!(matches!(err, TutorError::SessionNotFound));
    }

    #[tokio::test]
    async fn test_start_topic_failure_leaves_history_untouched() {
        let (engine, _provider, store) =
            make_engine(vec![Ok("opener".into()), Err(upstream_err())]);
        let id = engine.start_session();

        engine.start_topic(&id, Some("beginner"), None).await.unwrap();
        let before = store.get(&id).unwrap().history.clone();

        let err = engine.start_topic(&id, Some("advanced"), None).await.unwrap_err();
        assert!(matches!(err, TutorError::Upstream(_)));
        assert_eq!(store.get(&id).unwrap().history, before);
    }

    // ── handle_message ──

    #[tokio::test]
    async fn test_handle_message_perfect_branch() {
        let (engine, provider, store) = make_engine(vec![
            Ok("opener".into()),
            Ok("  Perfect \n".into()),
            Ok("Nice! What else did you do?".into()),
        ]);
        let id = engine.start_session();
        engine.start_topic(&id, Some("beginner"), None).await.unwrap();

        let reply = engine.handle_message(&id, "I went to the park.").await.unwrap();

        assert_eq!(reply.correction, None);
        assert_eq!(reply.response, "Nice! What else did you do?");

        // Follow-up prompt uses the continuation template
        let calls = provider.calls();
        let last_msg = calls[2].last().unwrap();
        assert_eq!(
            *last_msg,
            Message::user(prompts::continuation_prompt("I went to the park."))
        );

        // History grows by the raw message + reply (even length)
        let session = store.get(&id).unwrap();
        assert_eq!(session.history.len(), 4);
        assert_eq!(session.history[2], Turn::user("I went to the park."));
        assert_eq!(
            session.history[3],
            Turn::model("Nice! What else did you do?")
        );
    }

    #[tokio::test]
    async fn test_handle_message_correction_branch() {
        let correction = "The sentence should be: 'I go to school.' (verb tense)";
        let (engine, provider, _store) = make_engine(vec![
            Ok("opener".into()),
            Ok(correction.into()),
            Ok("Almost! Say 'I go to school.' Where is your school?".into()),
        ]);
        let id = engine.start_session();
        engine.start_topic(&id, None, None).await.unwrap();

        let reply = engine.handle_message(&id, "I goes to school").await.unwrap();

        // The correction comes back verbatim
        assert_eq!(reply.correction.as_deref(), Some(correction));

        // ...and is embedded verbatim in the follow-up prompt
        let calls = provider.calls();
        let last_msg = calls[2].last().unwrap();
        assert_eq!(
            *last_msg,
            Message::user(prompts::correction_prompt("I goes to school", correction))
        );
    }

    #[tokio::test]
    async fn test_handle_message_replays_full_history() {
        let (engine, provider, _store) = make_engine(vec![
            Ok("opener".into()),
            Ok("perfect".into()),
            Ok("reply one".into()),
            Ok("perfect".into()),
            Ok("reply two".into()),
        ]);
        let id = engine.start_session();
        engine.start_topic(&id, None, None).await.unwrap();
        engine.handle_message(&id, "first message").await.unwrap();
        engine.handle_message(&id, "second message").await.unwrap();

        let calls = provider.calls();
        // Grammar check sees only its own prompt
        assert_eq!(calls[3].len(), 1);
        // Reply call sees 4 prior turns + the instruction
        assert_eq!(calls[4].len(), 5);
        assert_eq!(calls[4][2], Message::user("first message"));
        assert_eq!(calls[4][3], Message::assistant("reply one"));
    }

    #[tokio::test]
    async fn test_handle_message_history_stays_even() {
        let (engine, _provider, store) = make_engine(vec![
            Ok("opener".into()),
            Ok("perfect".into()),
            Ok("reply".into()),
        ]);
        let id = engine.start_session();

        engine.start_topic(&id, None, None).await.unwrap();
        assert_eq!(store.get(&id).unwrap().history.len() % 2, 0);

        engine.handle_message(&id, "hello there").await.unwrap();
        assert_eq!(store.get(&id).unwrap().history.len() % 2, 0);
    }

    #[tokio::test]
    async fn test_handle_message_grammar_failure_is_atomic() {
        let (engine, _provider, store) =
            make_engine(vec![Ok("opener".into()), Err(upstream_err())]);
        let id = engine.start_session();
        engine.start_topic(&id, None, None).await.unwrap();
        let before = store.get(&id).unwrap().history.clone();

        let err = engine.handle_message(&id, "hello").await.unwrap_err();

        assert!(matches!(err, TutorError::Upstream(_)));
        assert_eq!(store.get(&id).unwrap().history, before);
    }

    #[tokio::test]
    async fn test_handle_message_reply_failure_is_atomic() {
        let (engine, _provider, store) = make_engine(vec![
            Ok("opener".into()),
            Ok("perfect".into()),
            Err(upstream_err()),
        ]);
        let id = engine.start_session();
        engine.start_topic(&id, None, None).await.unwrap();
        let before = store.get(&id).unwrap().history.clone();

        let err = engine.handle_message(&id, "hello").await.unwrap_err();

        assert!(matches!(err, TutorError::Upstream(_)));
        assert_eq!(store.get(&id).unwrap().history, before);
    }

    // ── session lifecycle ──

    #[tokio::test]
    async fn test_message_after_end_is_not_found() {
        let (engine, _provider, _store) = make_engine(vec![Ok("opener".into())]);
        let id = engine.start_session();
        engine.start_topic(&id, None, None).await.unwrap();

        assert!(engine.end_session(&id));

        let err = engine.handle_message(&id, "still there?").await.unwrap_err();
        assert!(matches!(err, TutorError::SessionNotFound));
    }

    #[tokio::test]
    async fn test_end_session_is_idempotent() {
        let (engine, _provider, _store) = make_engine(vec![]);
        let id = engine.start_session();

        assert!(engine.end_session(&id));
        assert!(!engine.end_session(&id));
        assert_eq!(engine.session_count(), 0);
    }
}
