//! HTTP layer for Lingo.
//!
//! Thin request/response glue over [`lingo_engine::TutorEngine`]: axum
//! handlers, a JSON error mapping, and the router with CORS and request
//! tracing for the browser front end.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::{create_router, start_server};
pub use state::AppState;
