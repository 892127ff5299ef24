// Consonant gradation -- weaken the consonant cluster ending a stem

use crate::finnish::constants::GRADATION_RULES;

/// Replace the strong-grade cluster at the end of `stem` with its weak grade.
///
/// Only the first matching rule is applied, and a stem ending in none of the
/// strong clusters is returned unchanged.
pub fn gradate(stem: &str) -> String {
    GRADATION_RULES
        .iter()
        .find_map(|&(strong, weak)| {
            stem.strip_suffix(strong)
                .map(|rest| format!("{rest}{weak}"))
        })
        .unwrap_or_else(|| stem.to_string())
}
