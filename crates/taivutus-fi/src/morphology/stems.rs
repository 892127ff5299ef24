// Stem deriver -- irregular override first, then per-class rules
//
// Each regular verb loses its infinitive ending to give a root. Class 1
// infinitives end in a bare vowel (`puhu-a`), so one character goes; every
// other class ends in a consonant plus vowel (`tava-ta`, `pes-tä`), so two go.

use taivutus_core::character::drop_last_chars;
use taivutus_core::enums::VerbClass;
use taivutus_core::paradigm::StemSet;

use crate::finnish::constants::IRREGULAR_VERBS;

use super::classifier::classify;
use super::gradation::gradate;

/// How a verb's stems are obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Derivation {
    /// The verb is in the irregular table; these are its stems.
    Irregular(StemSet),
    /// The verb is derived by the rules of this class.
    Regular(VerbClass),
}

/// Decide how `verb` is derived. The irregular table is consulted before
/// the class cascade.
pub fn lookup(verb: &str) -> Derivation {
    match irregular_stems(verb) {
        Some(stems) => Derivation::Irregular(stems),
        None => Derivation::Regular(classify(verb)),
    }
}

/// Stems from the irregular table, if `verb` is listed there.
pub fn irregular_stems(verb: &str) -> Option<StemSet> {
    IRREGULAR_VERBS
        .iter()
        .find(|(infinitive, ..)| *infinitive == verb)
        .map(|&(_, present, past, perfect)| StemSet::new(present, past, perfect))
}

/// Derive stems by the rules of `class`, ignoring the irregular table.
pub fn regular_stems(verb: &str, class: VerbClass) -> StemSet {
    let (present, participle) = match class {
        VerbClass::One => (drop_last_chars(verb, 1).to_string(), "nut"),
        VerbClass::Two | VerbClass::Three | VerbClass::Five => {
            (format!("{}e", drop_last_chars(verb, 2)), "nyt")
        }
        VerbClass::Four => (format!("{}a", drop_last_chars(verb, 2)), "nut"),
        VerbClass::Six => (drop_last_chars(verb, 2).to_string(), "nyt"),
    };
    let past = format!("{}i", gradate(&present));
    let perfect = format!("{present}{participle}");
    StemSet {
        present,
        past,
        perfect,
    }
}

/// Derive the present, past and perfect stems of any verb.
pub fn derive_stems(verb: &str) -> StemSet {
    match lookup(verb) {
        Derivation::Irregular(stems) => {
            log::trace!("{verb}: irregular");
            stems
        }
        Derivation::Regular(class) => regular_stems(verb, class),
    }
}
