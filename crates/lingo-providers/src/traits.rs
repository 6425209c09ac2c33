//! Provider trait — the seam between the tutoring engine and the upstream
//! generative-text API.

use async_trait::async_trait;

use lingo_core::types::Message;

use crate::error::ProviderError;

/// Trait that all generative-text providers must implement.
///
/// The production implementation is [`crate::HttpProvider`]; tests swap in
/// scripted fakes.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send an ordered list of role-tagged messages and return the
    /// generated text.
    ///
    /// No retries, no backoff: a failure is reported to the caller as-is.
    async fn generate(&self, messages: &[Message]) -> Result<String, ProviderError>;

    /// The model this provider generates with (for logging and status).
    fn model(&self) -> &str;
}
