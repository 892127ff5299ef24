// Fixed Finnish tables shared by the classifier, stem deriver and expander.
//
// Everything here is immutable process-wide data; nothing writes to it after
// compilation.

use taivutus_core::SLOT_COUNT;
use taivutus_core::enums::VerbClass;

/// Suffix cascade for regular verbs. Entries are tested in order and the
/// first class whose suffix ends the verb wins; anything else is class 1.
pub(crate) const CLASS_SUFFIXES: &[(VerbClass, &[&str])] = &[
    // ata ätä ota ötä
    (VerbClass::Two, &["ata", "\u{00E4}t\u{00E4}", "ota", "\u{00F6}t\u{00E4}"]),
    // ita itä
    (VerbClass::Three, &["ita", "it\u{00E4}"]),
    // lla llä
    (VerbClass::Four, &["lla", "ll\u{00E4}"]),
    // nna nnä
    (VerbClass::Five, &["nna", "nn\u{00E4}"]),
    // ra rä sta stä
    (VerbClass::Six, &["ra", "r\u{00E4}", "sta", "st\u{00E4}"]),
];

/// Consonant gradation, strong grade to weak grade.
///
/// Geminates come first so that `kk` weakens to `k` instead of being caught
/// by the single `k` rule.
pub(crate) const GRADATION_RULES: &[(&str, &str)] = &[
    ("kk", "k"),
    ("pp", "p"),
    ("tt", "t"),
    ("k", ""),
    ("p", "v"),
    ("t", "d"),
];

/// High-frequency verbs whose stems are not derived by rule:
/// (infinitive, present, past, perfect).
pub(crate) const IRREGULAR_VERBS: &[(&str, &str, &str, &str)] = &[
    ("olla", "ol", "ol", "ollut"),
    ("menn\u{00E4}", "men", "meni", "mennyt"),
    ("tehd\u{00E4}", "tee", "teki", "tehnyt"),
    ("n\u{00E4}hd\u{00E4}", "n\u{00E4}e", "n\u{00E4}ki", "n\u{00E4}hnyt"),
    ("tulla", "tul", "tuli", "tullut"),
    ("sy\u{00F6}d\u{00E4}", "sy\u{00F6}", "s\u{00F6}i", "sy\u{00F6}nyt"),
    ("ottaa", "ota", "otti", "ottanut"),
    ("juosta", "juokse", "juoksi", "juossut"),
];

/// Personal endings of the first seven slots; the passive slot has its own
/// tense-specific ending.
pub(crate) const PERSONAL_ENDINGS: [&str; SLOT_COUNT - 1] =
    ["n", "t", "", "mme", "tte", "vat", "vat"];

pub(crate) const PRESENT_PASSIVE_ENDING: &str = "aan";
pub(crate) const PAST_PASSIVE_ENDING: &str = "tiin";

/// Forms of the negation verb, one per slot.
pub(crate) const NEGATION_PARTICLES: [&str; SLOT_COUNT] = [
    "en",
    "et",
    "ei",
    "emme",
    "ette",
    "eiv\u{00E4}t",
    "eiv\u{00E4}t",
    "ei",
];

/// Present forms of `olla` used as the perfect auxiliary.
pub(crate) const PERFECT_AUXILIARIES: [&str; SLOT_COUNT] =
    ["on", "on", "on", "olemme", "olette", "ovat", "ovat", "on"];

pub(crate) const PERFECT_NEGATIVE_AUXILIARY: &str = "ei ole";
pub(crate) const PLUPERFECT_AUXILIARY: &str = "oli";
pub(crate) const PLUPERFECT_NEGATIVE_AUXILIARY: &str = "ei ollut";
pub(crate) const CONDITIONAL_MARKER: &str = "isin";
pub(crate) const POTENTIAL_MARKER: &str = "nee";
pub(crate) const MOOD_NEGATION: &str = "ei";
pub(crate) const IMPERATIVE_NEGATION: &str = "\u{00E4}l\u{00E4}";

/// Part-of-speech tag that marks a verb in the lexicon dump.
pub(crate) const VERB_TAG: &str = "verbi";
