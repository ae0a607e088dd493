//! # bloom-llm
//!
//! Language-model collaborator for the Bloom coach.
//!
//! Exposes one capability: submit a prompt, receive generated text or a
//! failure, under a bounded timeout. No streaming contract — summary
//! generation consumes whole responses.
//!
//! - [`ModelClient`] — async trait the summary generator depends on
//! - [`AnthropicClient`] — reqwest-backed Messages API implementation
//! - [`ModelError`] — failure taxonomy (configuration, timeout, transport,
//!   provider status)

#![deny(unsafe_code)]

pub mod anthropic;
pub mod client;
pub mod errors;

pub use anthropic::{AnthropicClient, AnthropicConfig};
pub use client::ModelClient;
pub use errors::{ModelError, ModelResult};
