// Paradigm expander -- build every labelled row from a stem set
//
// All forms are plain concatenation, so expansion cannot fail: odd stems
// give odd but well-formed rows.

use taivutus_core::enums::ParadigmLabel;
use taivutus_core::paradigm::{ParadigmTable, SlotRow, StemSet};

use crate::finnish::constants::{
    CONDITIONAL_MARKER, IMPERATIVE_NEGATION, MOOD_NEGATION, NEGATION_PARTICLES,
    PAST_PASSIVE_ENDING, PERFECT_AUXILIARIES, PERFECT_NEGATIVE_AUXILIARY, PERSONAL_ENDINGS,
    PLUPERFECT_AUXILIARY, PLUPERFECT_NEGATIVE_AUXILIARY, POTENTIAL_MARKER, PRESENT_PASSIVE_ENDING,
};

/// Person-marked indicative row: `stem` + personal ending, passive last.
fn personal_row(stem: &str, passive_ending: &str) -> SlotRow {
    SlotRow::from_forms(
        PERSONAL_ENDINGS
            .iter()
            .map(|ending| format!("{stem}{ending}"))
            .chain(std::iter::once(format!("{stem}{passive_ending}"))),
    )
}

/// Negation verb in each slot followed by the bare stem.
fn negated_row(stem: &str) -> SlotRow {
    SlotRow::from_forms(NEGATION_PARTICLES.iter().map(|neg| format!("{neg} {stem}")))
}

/// Expand a stem set into the full paradigm.
pub fn expand(stems: &StemSet) -> ParadigmTable {
    let StemSet {
        present,
        past,
        perfect,
    } = stems;
    let conditional = format!("{present}{CONDITIONAL_MARKER}");
    let potential = format!("{present}{POTENTIAL_MARKER}");

    let mut table = ParadigmTable::new();
    table.set(
        ParadigmLabel::Preesens,
        personal_row(present, PRESENT_PASSIVE_ENDING),
    );
    table.set(ParadigmLabel::PreesensNeg, negated_row(present));
    table.set(
        ParadigmLabel::Imperfekti,
        personal_row(past, PAST_PASSIVE_ENDING),
    );
    table.set(ParadigmLabel::ImperfektiNeg, negated_row(past));
    table.set(
        ParadigmLabel::Perfekti,
        SlotRow::from_forms(PERFECT_AUXILIARIES.iter().map(|aux| format!("{aux} {perfect}"))),
    );
    table.set(
        ParadigmLabel::PerfektiNeg,
        SlotRow::broadcast(format!("{PERFECT_NEGATIVE_AUXILIARY} {perfect}")),
    );
    table.set(
        ParadigmLabel::Pluskvamperfekti,
        SlotRow::broadcast(format!("{PLUPERFECT_AUXILIARY} {perfect}")),
    );
    table.set(
        ParadigmLabel::PluskvamperfektiNeg,
        SlotRow::broadcast(format!("{PLUPERFECT_NEGATIVE_AUXILIARY} {perfect}")),
    );
    table.set(
        ParadigmLabel::KonditionaaliNeg,
        SlotRow::broadcast(format!("{MOOD_NEGATION} {conditional}")),
    );
    table.set(ParadigmLabel::Konditionaali, SlotRow::broadcast(conditional));
    table.set(
        ParadigmLabel::PotentiaaliNeg,
        SlotRow::broadcast(format!("{MOOD_NEGATION} {potential}")),
    );
    table.set(ParadigmLabel::Potentiaali, SlotRow::broadcast(potential));
    table.set(ParadigmLabel::Imperatiivi, SlotRow::broadcast(present.as_str()));
    table.set(
        ParadigmLabel::ImperatiiviNeg,
        SlotRow::broadcast(format!("{IMPERATIVE_NEGATION} {present}")),
    );
    table
}
