//! In-memory session store.
//!
//! A process-wide mapping from session id to [`Session`]. Entry lifetime is
//! bounded only by explicit end-session calls — no TTL, no eviction, no
//! persistence. The `RwLock` makes individual map operations safe under
//! concurrent requests to different sessions; it does not serialize a full
//! read → generate → write-back cycle on one session.

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;
use uuid::Uuid;

use lingo_core::types::Session;

/// Owns all live tutoring sessions.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

impl SessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fresh session and return its id.
    ///
    /// Ids are random v4 UUIDs, so concurrent creation cannot collide the
    /// way millisecond timestamps can.
    pub fn create(&self) -> String {
        let id = Uuid::new_v4().to_string();
        let session = Session::new(&id);

        let mut sessions = self.sessions.write().unwrap();
        sessions.insert(id.clone(), session);
        debug!(session = %id, "session created");
        id
    }

    /// Look up a session by id (clone-out).
    pub fn get(&self, id: &str) -> Option<Session> {
        let sessions = self.sessions.read().unwrap();
        sessions.get(id).cloned()
    }

    /// Insert or replace a session under its own id.
    pub fn put(&self, session: Session) {
        let mut sessions = self.sessions.write().unwrap();
        sessions.insert(session.id.clone(), session);
    }

    /// Remove a session. Idempotent; returns whether it existed.
    pub fn delete(&self, id: &str) -> bool {
        let mut sessions = self.sessions.write().unwrap();
        let existed = sessions.remove(id).is_some();
        if existed {
            debug!(session = %id, "session deleted");
        }
        existed
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.read().unwrap().len()
    }

    /// Whether the store holds no sessions.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use lingo_core::types::Turn;

    #[test]
    fn test_create_inserts_empty_session() {
        let store = SessionStore::new();
        let id = store.create();

        let session = store.get(&id).unwrap();
        assert_eq!(session.id, id);
        assert!(session.history.is_empty());
        assert!(session.topic.is_empty());
    }

    #[test]
    fn test_create_ids_are_unique() {
        let store = SessionStore::new();
        let a = store.create();
        let b = store.create();

        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_get_unknown_id() {
        let store = SessionStore::new();
        assert!(store.get("nope").is_none());
    }

    #[test]
    fn test_put_replaces_session() {
        let store = SessionStore::new();
        let id = store.create();

        let mut session = store.get(&id).unwrap();
        session.history.push(Turn::user("hello"));
        store.put(session);

        assert_eq!(store.get(&id).unwrap().history.len(), 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let store = SessionStore::new();
        let id = store.create();

        assert!(store.delete(&id));
        assert!(!store.delete(&id));
        assert!(store.get(&id).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_sessions_are_independent() {
        let store = SessionStore::new();
        let a = store.create();
        let b = store.create();

        let mut session_a = store.get(&a).unwrap();
        session_a.history.push(Turn::user("only in a"));
        store.put(session_a);

        assert_eq!(store.get(&a).unwrap().history.len(), 1);
        assert!(store.get(&b).unwrap().history.is_empty());
    }
}
