//! Model collaborator error types.

use thiserror::Error;

/// Result type alias for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur when calling the language model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Credential or model configuration missing — fails before any I/O.
    #[error("model configuration error: {message}")]
    Configuration {
        /// What is missing or invalid.
        message: String,
    },

    /// The call exceeded its bounded timeout.
    #[error("model call timed out after {timeout_ms}ms")]
    Timeout {
        /// The bound that was exceeded, in milliseconds.
        timeout_ms: u64,
    },

    /// HTTP transport failed (connect, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider returned a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body or status text.
        message: String,
    },
}

impl ModelError {
    /// Whether a caller-side retry could plausibly succeed.
    ///
    /// Retry policy itself lives with the caller; this only classifies.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(e) => {
                e.is_timeout()
                    || e.is_connect()
                    || e.status().is_some_and(|s| {
                        s == reqwest::StatusCode::TOO_MANY_REQUESTS || s.is_server_error()
                    })
            }
            Self::Timeout { .. } => true,
            Self::Api { status, .. } => *status == 429 || *status >= 500,
            Self::Configuration { .. } => false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
