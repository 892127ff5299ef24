// Shared enums: VerbClass, Slot, ParadigmLabel

use std::fmt;
use std::str::FromStr;

use crate::{LABEL_COUNT, ParseError, SLOT_COUNT};

/// Inflection class of a regular verb, decided purely by its suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VerbClass {
    /// Fallback class: vowel stem plus `-a`/`-ä` (puhua, laulaa).
    One,
    /// `-ata`, `-ätä`, `-ota`, `-ötä` (tavata, hypätä).
    Two,
    /// `-ita`, `-itä` (valita, häiritä).
    Three,
    /// `-lla`, `-llä` (ajatella).
    Four,
    /// `-nna`, `-nnä` (panna).
    Five,
    /// `-ra`, `-rä`, `-sta`, `-stä` (purra, pestä).
    Six,
}

impl VerbClass {
    /// The conventional class number, 1 through 6.
    pub fn number(self) -> u8 {
        match self {
            VerbClass::One => 1,
            VerbClass::Two => 2,
            VerbClass::Three => 3,
            VerbClass::Four => 4,
            VerbClass::Five => 5,
            VerbClass::Six => 6,
        }
    }
}

impl fmt::Display for VerbClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type {}", self.number())
    }
}

/// Pronoun/voice position of a form within a paradigm row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    /// minä
    FirstSingular,
    /// sinä
    SecondSingular,
    /// hän/se
    ThirdSingular,
    /// me
    FirstPlural,
    /// te
    SecondPlural,
    /// Te (formal "you")
    Formal,
    /// he
    ThirdPlural,
    /// passiivi (impersonal)
    Passive,
}

impl Slot {
    /// All slots in row order.
    pub const ALL: [Slot; SLOT_COUNT] = [
        Slot::FirstSingular,
        Slot::SecondSingular,
        Slot::ThirdSingular,
        Slot::FirstPlural,
        Slot::SecondPlural,
        Slot::Formal,
        Slot::ThirdPlural,
        Slot::Passive,
    ];

    /// Position of this slot within a row.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The Finnish pronoun shown for this slot.
    pub fn pronoun(self) -> &'static str {
        match self {
            Slot::FirstSingular => "minä",
            Slot::SecondSingular => "sinä",
            Slot::ThirdSingular => "hän/se",
            Slot::FirstPlural => "me",
            Slot::SecondPlural => "te",
            Slot::Formal => "Te",
            Slot::ThirdPlural => "he",
            Slot::Passive => "passiivi",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pronoun())
    }
}

/// Mood/tense/polarity label of one paradigm row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParadigmLabel {
    Preesens,
    PreesensNeg,
    Imperfekti,
    ImperfektiNeg,
    Perfekti,
    PerfektiNeg,
    Pluskvamperfekti,
    PluskvamperfektiNeg,
    Konditionaali,
    KonditionaaliNeg,
    Potentiaali,
    PotentiaaliNeg,
    Imperatiivi,
    ImperatiiviNeg,
}

impl ParadigmLabel {
    /// All labels in serialization order.
    pub const ALL: [ParadigmLabel; LABEL_COUNT] = [
        ParadigmLabel::Preesens,
        ParadigmLabel::PreesensNeg,
        ParadigmLabel::Imperfekti,
        ParadigmLabel::ImperfektiNeg,
        ParadigmLabel::Perfekti,
        ParadigmLabel::PerfektiNeg,
        ParadigmLabel::Pluskvamperfekti,
        ParadigmLabel::PluskvamperfektiNeg,
        ParadigmLabel::Konditionaali,
        ParadigmLabel::KonditionaaliNeg,
        ParadigmLabel::Potentiaali,
        ParadigmLabel::PotentiaaliNeg,
        ParadigmLabel::Imperatiivi,
        ParadigmLabel::ImperatiiviNeg,
    ];

    /// The indicative tenses, which are the ones shown in conjugation tables
    /// and asked in the quiz.
    pub const INDICATIVE: [ParadigmLabel; 8] = [
        ParadigmLabel::Preesens,
        ParadigmLabel::PreesensNeg,
        ParadigmLabel::Imperfekti,
        ParadigmLabel::ImperfektiNeg,
        ParadigmLabel::Perfekti,
        ParadigmLabel::PerfektiNeg,
        ParadigmLabel::Pluskvamperfekti,
        ParadigmLabel::PluskvamperfektiNeg,
    ];

    /// Position of this label within a table.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Key used in the serialized document.
    pub fn key(self) -> &'static str {
        match self {
            ParadigmLabel::Preesens => "preesens",
            ParadigmLabel::PreesensNeg => "preesens_neg",
            ParadigmLabel::Imperfekti => "imperfekti",
            ParadigmLabel::ImperfektiNeg => "imperfekti_neg",
            ParadigmLabel::Perfekti => "perfekti",
            ParadigmLabel::PerfektiNeg => "perfekti_neg",
            ParadigmLabel::Pluskvamperfekti => "pluskvamperfekti",
            ParadigmLabel::PluskvamperfektiNeg => "pluskvamperfekti_neg",
            ParadigmLabel::Konditionaali => "konditionaali",
            ParadigmLabel::KonditionaaliNeg => "konditionaali_neg",
            ParadigmLabel::Potentiaali => "potentiaali",
            ParadigmLabel::PotentiaaliNeg => "potentiaali_neg",
            ParadigmLabel::Imperatiivi => "imperatiivi",
            ParadigmLabel::ImperatiiviNeg => "imperatiivi_neg",
        }
    }

    /// Human-readable Finnish title, e.g. `Preesens, negatiivinen`.
    pub fn title(self) -> &'static str {
        match self {
            ParadigmLabel::Preesens => "Preesens",
            ParadigmLabel::PreesensNeg => "Preesens, negatiivinen",
            ParadigmLabel::Imperfekti => "Imperfekti",
            ParadigmLabel::ImperfektiNeg => "Imperfekti, negatiivinen",
            ParadigmLabel::Perfekti => "Perfekti",
            ParadigmLabel::PerfektiNeg => "Perfekti, negatiivinen",
            ParadigmLabel::Pluskvamperfekti => "Pluskvamperfekti",
            ParadigmLabel::PluskvamperfektiNeg => "Pluskvamperfekti, negatiivinen",
            ParadigmLabel::Konditionaali => "Konditionaali",
            ParadigmLabel::KonditionaaliNeg => "Konditionaali, negatiivinen",
            ParadigmLabel::Potentiaali => "Potentiaali",
            ParadigmLabel::PotentiaaliNeg => "Potentiaali, negatiivinen",
            ParadigmLabel::Imperatiivi => "Imperatiivi",
            ParadigmLabel::ImperatiiviNeg => "Imperatiivi, negatiivinen",
        }
    }

    pub fn is_negative(self) -> bool {
        self.index() % 2 == 1
    }

    /// Whether forms differ per slot. The remaining labels repeat one
    /// phrase in every slot.
    pub fn is_person_sensitive(self) -> bool {
        matches!(
            self,
            ParadigmLabel::Preesens
                | ParadigmLabel::PreesensNeg
                | ParadigmLabel::Imperfekti
                | ParadigmLabel::ImperfektiNeg
                | ParadigmLabel::Perfekti
        )
    }
}

impl fmt::Display for ParadigmLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ParadigmLabel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParadigmLabel::ALL
            .into_iter()
            .find(|label| label.key() == s)
            .ok_or_else(|| ParseError::UnknownLabel(s.to_string()))
    }
}
