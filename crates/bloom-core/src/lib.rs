//! # bloom-core
//!
//! Foundation types for the Bloom coaching backend.
//!
//! This crate provides the shared vocabulary that all other Bloom crates
//! depend on:
//!
//! - **Branded IDs**: `JournalEntryId`, `SummaryId` as newtypes for type safety
//! - **Records**: `Goal`, `Habit`, `JournalEntry`, `PulseEntry`, `ChatMessage`
//!   — the in-memory shapes of the user's personal data, already loaded by
//!   the surrounding stores
//! - **Text utilities**: character-safe preview truncation
//! - **Logging**: [`logging::init_subscriber`] for application startup

#![deny(unsafe_code)]

pub mod ids;
pub mod logging;
pub mod records;
pub mod text;

pub use ids::{JournalEntryId, SummaryId};
pub use records::{
    ChatMessage, Goal, GuidedResponse, Habit, JournalContent, JournalEntry, JournalKind,
    PulseEntry,
};
