// Verb lookup for user-typed input, and pronoun-by-form table views

use taivutus_core::enums::{ParadigmLabel, Slot};
use taivutus_core::paradigm::ParadigmTable;
use unicode_normalization::UnicodeNormalization;

use crate::document::ConjugationDocument;

/// Clean user input for lookup: NFC-compose, trim, lowercase and keep only
/// letters. A decomposed `a` + combining diaeresis becomes a single `ä`.
pub fn normalize_verb_input(raw: &str) -> String {
    raw.nfc()
        .collect::<String>()
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphabetic())
        .collect()
}

/// Find a verb in `doc` by user-typed input.
///
/// Returns the normalized verb together with its table, or `None` when the
/// input normalizes to nothing or the verb is not in the document.
pub fn find_verb<'a>(doc: &'a ConjugationDocument, raw: &str) -> Option<(String, &'a ParadigmTable)> {
    let verb = normalize_verb_input(raw);
    if verb.is_empty() {
        return None;
    }
    let table = doc.get(&verb)?;
    Some((verb, table))
}

/// One tense of a table laid out for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenseView {
    pub label: ParadigmLabel,
    pub title: &'static str,
    pub rows: Vec<(Slot, String)>,
}

/// Pair each slot's pronoun with its form for every label in `labels`.
pub fn tense_views(table: &ParadigmTable, labels: &[ParadigmLabel]) -> Vec<TenseView> {
    labels
        .iter()
        .map(|&label| TenseView {
            label,
            title: label.title(),
            rows: table
                .row(label)
                .iter()
                .map(|(slot, form)| (slot, form.to_string()))
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handle::Conjugator;

    #[test]
    fn normalization_cleans_input() {
        assert_eq!(normalize_verb_input("  Puhua! "), "puhua");
        assert_eq!(normalize_verb_input("SYÖDÄ"), "syödä");
        assert_eq!(normalize_verb_input("men-nä 2"), "mennä");
        assert_eq!(normalize_verb_input("?!"), "");
    }

    #[test]
    fn normalization_composes_umlauts() {
        let decomposed = "na\u{0308}hda\u{0308}";
        assert_eq!(normalize_verb_input(decomposed), "nähdä");
    }

    #[test]
    fn find_verb_by_messy_input() {
        let doc = Conjugator::new().conjugate_all(["laulaa", "mennä"]);
        let (verb, table) = find_verb(&doc, " MENNÄ ").unwrap();
        assert_eq!(verb, "mennä");
        assert_eq!(table.form(ParadigmLabel::Preesens, Slot::FirstSingular), "menn");
        assert!(find_verb(&doc, "juosta").is_none());
        assert!(find_verb(&doc, "   ").is_none());
    }

    #[test]
    fn views_follow_label_and_slot_order() {
        let table = Conjugator::new().conjugate("puhua");
        let views = tense_views(&table, &ParadigmLabel::INDICATIVE);
        assert_eq!(views.len(), 8);
        assert_eq!(views[1].title, "Preesens, negatiivinen");
        assert_eq!(views[0].rows[0], (Slot::FirstSingular, "puhun".to_string()));
        assert_eq!(views[0].rows[7], (Slot::Passive, "puhuaan".to_string()));
        assert!(views.iter().all(|v| v.rows.len() == 8));
    }
}
