//! Model client trait.
//!
//! The summary generator depends on this trait rather than a concrete
//! transport, so tests can substitute a canned implementation.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::errors::ModelResult;

/// A language-model backend: one prompt in, generated text out.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Submit `prompt` and return the generated text.
    ///
    /// The call must complete within `timeout` or fail with
    /// [`ModelError::Timeout`](crate::ModelError::Timeout). An empty
    /// response body is a success — callers accept it as-is.
    async fn generate(
        &self,
        prompt: &str,
        max_output_tokens: u32,
        timeout: Duration,
    ) -> ModelResult<String>;

    /// Identifier of the model this client targets (stamped into
    /// generated summary records).
    fn model_id(&self) -> &str;
}

// Implement ModelClient for Arc<T> where T: ModelClient
#[async_trait]
impl<T: ModelClient> ModelClient for Arc<T>
where
    T: Send + Sync,
{
    async fn generate(
        &self,
        prompt: &str,
        max_output_tokens: u32,
        timeout: Duration,
    ) -> ModelResult<String> {
        (**self).generate(prompt, max_output_tokens, timeout).await
    }

    fn model_id(&self) -> &str {
        (**self).model_id()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
