// Verb classifier -- suffix cascade deciding the inflection class

use taivutus_core::character::ends_with_any;
use taivutus_core::enums::VerbClass;

use crate::finnish::constants::CLASS_SUFFIXES;

/// Classify a regular verb by its ending.
///
/// The cascade is tested in a fixed order and the first hit wins, so
/// `tavata` is class 2 even though it also ends in `-a`. Verbs too short for
/// any suffix, including the empty string, fall through to class 1.
pub fn classify(verb: &str) -> VerbClass {
    CLASS_SUFFIXES
        .iter()
        .find(|(_, suffixes)| ends_with_any(verb, suffixes))
        .map_or(VerbClass::One, |&(class, _)| class)
}
