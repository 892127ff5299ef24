// Paradigm result types: StemSet, SlotRow, ParadigmTable
//
// A ParadigmTable serializes as a JSON object whose keys are the label keys
// in fixed order and whose values are 8-element string arrays.

use std::fmt;
use std::ops::Index;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::enums::{ParadigmLabel, Slot};
use crate::{LABEL_COUNT, SLOT_COUNT};

/// The three stems every paradigm form is built from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StemSet {
    /// Base of present tense, conditional, potential and imperative forms.
    pub present: String,
    /// Past (imperfect) stem, normally in the weak grade.
    pub past: String,
    /// Active past participle used after the perfect auxiliaries.
    pub perfect: String,
}

impl StemSet {
    pub fn new(
        present: impl Into<String>,
        past: impl Into<String>,
        perfect: impl Into<String>,
    ) -> Self {
        Self {
            present: present.into(),
            past: past.into(),
            perfect: perfect.into(),
        }
    }
}

/// Exactly one form per pronoun slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SlotRow([String; SLOT_COUNT]);

impl SlotRow {
    /// Build a row from any number of forms. Missing slots are filled with
    /// empty strings and surplus forms are dropped.
    pub fn from_forms<I, S>(forms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row = Self::default();
        for (cell, form) in row.0.iter_mut().zip(forms) {
            *cell = form.into();
        }
        row
    }

    /// The same form in every slot.
    pub fn broadcast(form: impl Into<String>) -> Self {
        let form = form.into();
        Self(std::array::from_fn(|_| form.clone()))
    }

    pub fn get(&self, slot: Slot) -> &str {
        &self.0[slot.index()]
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Pair every form with its slot, in row order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &str)> {
        Slot::ALL.into_iter().zip(self.0.iter().map(String::as_str))
    }
}

impl Index<Slot> for SlotRow {
    type Output = str;

    fn index(&self, slot: Slot) -> &str {
        self.get(slot)
    }
}

impl<'de> Deserialize<'de> for SlotRow {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let forms = Vec::<String>::deserialize(deserializer)?;
        Ok(SlotRow::from_forms(forms))
    }
}

/// Full conjugation of one verb: a [`SlotRow`] for every [`ParadigmLabel`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParadigmTable {
    rows: [SlotRow; LABEL_COUNT],
}

impl ParadigmTable {
    /// Create a table with every slot empty.
    pub fn new() -> Self {
        Self {
            rows: std::array::from_fn(|_| SlotRow::default()),
        }
    }

    /// Replace the row for `label`.
    pub fn set(&mut self, label: ParadigmLabel, row: SlotRow) {
        self.rows[label.index()] = row;
    }

    pub fn row(&self, label: ParadigmLabel) -> &SlotRow {
        &self.rows[label.index()]
    }

    /// Shorthand for `row(label).get(slot)`.
    pub fn form(&self, label: ParadigmLabel, slot: Slot) -> &str {
        self.row(label).get(slot)
    }

    /// Iterate rows in label order.
    pub fn iter(&self) -> impl Iterator<Item = (ParadigmLabel, &SlotRow)> {
        ParadigmLabel::ALL.into_iter().zip(self.rows.iter())
    }
}

impl Default for ParadigmTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<ParadigmLabel> for ParadigmTable {
    type Output = SlotRow;

    fn index(&self, label: ParadigmLabel) -> &SlotRow {
        self.row(label)
    }
}

impl Serialize for ParadigmTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(LABEL_COUNT))?;
        for (label, row) in self.iter() {
            map.serialize_entry(label.key(), row)?;
        }
        map.end()
    }
}

/// Unknown keys (such as a `translation` field added by other tools) are
/// skipped, and labels missing from the input stay empty.
impl<'de> Deserialize<'de> for ParadigmTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TableVisitor)
    }
}

struct TableVisitor;

impl<'de> Visitor<'de> for TableVisitor {
    type Value = ParadigmTable;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map from paradigm labels to arrays of forms")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = ParadigmTable::new();
        while let Some(key) = access.next_key::<String>()? {
            match key.parse::<ParadigmLabel>() {
                Ok(label) => table.set(label, access.next_value()?),
                Err(_) => {
                    access.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_row_is_padded() {
        let row = SlotRow::from_forms(["a", "b"]);
        assert_eq!(row.as_slice().len(), SLOT_COUNT);
        assert_eq!(row.get(Slot::FirstSingular), "a");
        assert_eq!(row.get(Slot::SecondSingular), "b");
        assert_eq!(row.get(Slot::Passive), "");
    }

    #[test]
    fn long_row_is_truncated() {
        let forms: Vec<String> = (0..12).map(|i| i.to_string()).collect();
        let row = SlotRow::from_forms(forms);
        assert_eq!(row.as_slice().len(), SLOT_COUNT);
        assert_eq!(&row[Slot::Passive], "7");
    }

    #[test]
    fn broadcast_fills_every_slot() {
        let row = SlotRow::broadcast("oli ollut");
        assert!(row.iter().all(|(_, form)| form == "oli ollut"));
    }

    #[test]
    fn row_iter_pairs_slots() {
        let row = SlotRow::from_forms(["puhun", "puhut"]);
        let pairs: Vec<(Slot, &str)> = row.iter().take(2).collect();
        assert_eq!(
            pairs,
            vec![(Slot::FirstSingular, "puhun"), (Slot::SecondSingular, "puhut")]
        );
    }

    #[test]
    fn new_table_is_all_empty() {
        let table = ParadigmTable::new();
        assert_eq!(table.iter().count(), LABEL_COUNT);
        assert!(table.iter().all(|(_, row)| row.iter().all(|(_, f)| f.is_empty())));
    }

    #[test]
    fn set_replaces_only_one_row() {
        let mut table = ParadigmTable::new();
        table.set(ParadigmLabel::Imperatiivi, SlotRow::broadcast("puhu"));
        assert_eq!(table.form(ParadigmLabel::Imperatiivi, Slot::ThirdPlural), "puhu");
        assert_eq!(table.form(ParadigmLabel::Preesens, Slot::ThirdPlural), "");
    }

    #[test]
    fn serializes_labels_in_fixed_order() {
        let mut table = ParadigmTable::new();
        table.set(ParadigmLabel::Preesens, SlotRow::from_forms(["puhun"]));
        let json = serde_json::to_string(&table).unwrap();
        assert!(json.starts_with(r#"{"preesens":["puhun","","","","","","",""],"preesens_neg":"#));
        let positions: Vec<usize> = ParadigmLabel::ALL
            .iter()
            .map(|l| json.find(&format!("\"{}\":", l.key())).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn deserialize_pads_and_skips_unknown_keys() {
        let json = r#"{
            "translation": "to speak",
            "preesens": ["puhun", "puhut"],
            "imperatiivi": ["puhu", "puhu", "puhu", "puhu", "puhu", "puhu", "puhu", "puhu"]
        }"#;
        let table: ParadigmTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.form(ParadigmLabel::Preesens, Slot::SecondSingular), "puhut");
        assert_eq!(table.form(ParadigmLabel::Preesens, Slot::Passive), "");
        assert_eq!(table.form(ParadigmLabel::Imperatiivi, Slot::Formal), "puhu");
        assert_eq!(table.row(ParadigmLabel::Potentiaali), &SlotRow::default());
    }

    #[test]
    fn deserialize_rejects_non_array_row() {
        let json = r#"{"preesens": "puhun"}"#;
        assert!(serde_json::from_str::<ParadigmTable>(json).is_err());
    }

    #[test]
    fn stem_set_new_accepts_str() {
        let stems = StemSet::new("ol", "ol", "ollut");
        assert_eq!(stems.perfect, "ollut");
    }
}
