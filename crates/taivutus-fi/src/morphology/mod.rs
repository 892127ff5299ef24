// Morphological synthesis: classification, gradation, stems, paradigms

mod classifier;
mod finnish;
mod gradation;
mod paradigm;
mod stems;

pub use classifier::classify;
pub use finnish::FinnishSynthesizer;
pub use gradation::gradate;
pub use paradigm::expand;
pub use stems::{Derivation, derive_stems, irregular_stems, lookup, regular_stems};

use taivutus_core::paradigm::{ParadigmTable, StemSet};

/// Trait for verb synthesizers.
///
/// Abstracts over the way stems are obtained; the expansion of stems into a
/// paradigm is shared.
pub trait Synthesizer {
    /// Derive the present, past and perfect stems of `verb`.
    fn stems(&self, verb: &str) -> StemSet;

    /// Conjugate `verb` into its full paradigm.
    fn conjugate(&self, verb: &str) -> ParadigmTable {
        expand(&self.stems(verb))
    }
}
