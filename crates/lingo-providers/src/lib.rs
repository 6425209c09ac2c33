//! Generative-text provider layer for Lingo.
//!
//! The tutoring engine talks to the upstream API only through the
//! [`LlmProvider`] trait; [`HttpProvider`] is the production implementation
//! for any OpenAI-compatible `/chat/completions` endpoint.

pub mod error;
pub mod http_provider;
pub mod traits;

pub use error::ProviderError;
pub use http_provider::HttpProvider;
pub use traits::LlmProvider;
