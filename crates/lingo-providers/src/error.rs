//! Provider error taxonomy.
//!
//! Everything upstream collapses into one of three buckets: the request
//! never completed, the API answered with a non-success status, or the
//! response body didn't carry generated text. No distinction is made among
//! network, auth, and quota problems beyond the status code.

use thiserror::Error;

/// Errors from the generative-text client.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport-level failure (connect, timeout, TLS, ...).
    #[error("request to generative API failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-success HTTP status.
    #[error("generative API returned {status}: {body}")]
    Api { status: u16, body: String },

    /// The response parsed but lacked the expected fields
    /// (no choices, or a choice without content).
    #[error("malformed generative API response: {0}")]
    Malformed(String),
}
