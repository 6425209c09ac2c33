//! Application state shared across route handlers.

use std::sync::Arc;

use lingo_engine::TutorEngine;

/// Shared application state, cloned into each handler task.
#[derive(Clone)]
pub struct AppState {
    /// The tutoring orchestrator (owns the session store and provider).
    pub engine: Arc<TutorEngine>,
}

impl AppState {
    /// Create a new AppState around an engine.
    pub fn new(engine: TutorEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}
