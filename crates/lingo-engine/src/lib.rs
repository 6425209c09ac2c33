//! The tutoring engine — session bookkeeping and prompt orchestration.
//!
//! [`TutorEngine`] is the structural heart of the backend: given a session
//! and a learner message it issues two sequential generation calls (grammar
//! check, then contextual reply), updates the session history, and returns
//! the result. The session store is an explicit injectable object, so a
//! persistent backing store could be swapped in without touching the
//! orchestration.

pub mod prompts;
pub mod store;
pub mod tutor;

pub use store::SessionStore;
pub use tutor::{TutorEngine, TutorError, TutorReply};
