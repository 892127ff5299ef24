// Rule-based Finnish synthesizer

use taivutus_core::paradigm::StemSet;

use super::Synthesizer;
use super::stems::derive_stems;

/// Synthesizer backed by the irregular table, the class cascade and the
/// gradation rules. Holds no state; every call is a pure function of the verb.
#[derive(Debug, Clone, Copy, Default)]
pub struct FinnishSynthesizer;

impl FinnishSynthesizer {
    pub fn new() -> Self {
        Self
    }
}

impl Synthesizer for FinnishSynthesizer {
    fn stems(&self, verb: &str) -> StemSet {
        derive_stems(verb)
    }
}
