// Conjugation drill: random questions drawn from a document

use rand::Rng;
use rand::seq::IndexedRandom;
use taivutus_core::enums::{ParadigmLabel, Slot};

use crate::document::ConjugationDocument;

/// Slots asked in the drill. The formal `Te` always repeats the plain
/// plural form, so it is left out.
pub const QUIZ_SLOTS: [Slot; 7] = [
    Slot::FirstSingular,
    Slot::SecondSingular,
    Slot::ThirdSingular,
    Slot::FirstPlural,
    Slot::SecondPlural,
    Slot::ThirdPlural,
    Slot::Passive,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub verb: String,
    pub label: ParadigmLabel,
    pub slot: Slot,
    pub answer: String,
}

impl QuizQuestion {
    /// Prompt line such as `puhua -- Imperfekti -- minä`.
    pub fn prompt(&self) -> String {
        format!("{} -- {} -- {}", self.verb, self.label.title(), self.slot.pronoun())
    }

    pub fn check(&self, input: &str) -> bool {
        check_answer(input, &self.answer)
    }
}

/// Draw a random question. Returns `None` for an empty document.
pub fn random_question<R: Rng + ?Sized>(
    doc: &ConjugationDocument,
    rng: &mut R,
) -> Option<QuizQuestion> {
    if doc.is_empty() {
        return None;
    }
    let (verb, table) = doc.get_index(rng.random_range(0..doc.len()))?;
    let label = *ParadigmLabel::INDICATIVE.choose(rng)?;
    let slot = *QUIZ_SLOTS.choose(rng)?;
    Some(QuizQuestion {
        verb: verb.to_string(),
        label,
        slot,
        answer: table.form(label, slot).to_string(),
    })
}

/// Compare an answer ignoring surrounding whitespace and case.
pub fn check_answer(input: &str, answer: &str) -> bool {
    input.trim().to_lowercase() == answer.trim().to_lowercase()
}
