//! Shared types for rule-based Finnish verb conjugation.
//!
//! # Architecture
//!
//! - [`enums`] -- Verb classes, pronoun slots and paradigm labels
//! - [`paradigm`] -- Stem sets, 8-slot rows and full paradigm tables
//! - [`character`] -- Character-safe suffix helpers

pub mod character;
pub mod enums;
pub mod paradigm;

/// Number of pronoun/voice slots in every paradigm row.
pub const SLOT_COUNT: usize = 8;

/// Number of mood/tense/polarity labels in a paradigm table.
pub const LABEL_COUNT: usize = 14;

/// Error returned when a paradigm label key does not parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown paradigm label: {0}")]
    UnknownLabel(String),
}
