//! Rule-based Finnish verb conjugation.
//!
//! Turns infinitives into full conjugation paradigms without any external
//! table: each verb is classified by its suffix (or found in a small table of
//! irregular verbs), its present, past and perfect stems are derived with
//! consonant gradation, and the stems are expanded into every mood, tense and
//! polarity for all eight pronoun slots.
//!
//! # Architecture
//!
//! - [`lexicon`] -- Select verb headwords from a tagged word list
//! - [`morphology`] -- Classifier, gradation, stem deriver and paradigm expander
//! - [`document`] -- Ordered verb-to-paradigm map and its JSON form
//! - [`lookup`] -- Normalized verb lookup and display views
//! - [`quiz`] -- Random drill questions (feature `quiz`)
//! - [`handle`] -- [`Conjugator`](handle::Conjugator), the batch pipeline

pub mod document;
pub mod handle;
pub mod lexicon;
pub mod lookup;
pub mod morphology;
#[cfg(feature = "quiz")]
pub mod quiz;

mod finnish;

pub use document::ConjugationDocument;
pub use handle::{Conjugator, TaivutusError};
