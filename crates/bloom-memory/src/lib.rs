//! # bloom-memory
//!
//! Rolling-summary maintenance for the Bloom coach.
//!
//! A persisted summary compresses the user's history so prompts stay
//! bounded as data accumulates. Two components keep it healthy:
//!
//! - [`RegenerationPolicy`] — decides when the summary must be refreshed,
//!   and whether incrementally (extend the prior text) or fully (discard
//!   it, correcting accumulated drift). Stateless; never fails.
//! - [`SummaryGenerator`] — builds the generation prompt, calls the model
//!   collaborator, and produces the replacement [`SummaryRecord`]. The
//!   caller persists it; a regeneration always replaces the whole record.
//!
//! ## Drift correction
//!
//! Incremental refreshes compound small inaccuracies. Every
//! `full_regen_interval`-th regeneration is therefore full: the prior
//! summary text is **never** included in a full regeneration's prompt.

#![deny(unsafe_code)]

pub mod generator;
pub mod policy;
pub mod prompt;
pub mod types;

pub use generator::SummaryGenerator;
pub use policy::RegenerationPolicy;
pub use types::{
    GeneratorConfig, PolicyConfig, RegenerationDecision, RegenerationReason, SummaryRecord,
    SUMMARY_SCHEMA_VERSION,
};
