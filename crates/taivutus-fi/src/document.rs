// Conjugation document: ordered verb -> paradigm table map and its JSON form

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use taivutus_core::paradigm::ParadigmTable;

use crate::handle::TaivutusError;
use crate::morphology::Synthesizer;

/// Every conjugated verb, in the order the verbs were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConjugationDocument {
    verbs: IndexMap<String, ParadigmTable>,
}

impl ConjugationDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Conjugate every verb of `verbs`. A repeated verb keeps the position of
    /// its first occurrence.
    pub fn from_verbs<S, I>(synthesizer: &S, verbs: I) -> Self
    where
        S: Synthesizer + ?Sized,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut doc = Self::new();
        for verb in verbs {
            let verb = verb.as_ref();
            if !doc.verbs.contains_key(verb) {
                doc.insert(verb, synthesizer.conjugate(verb));
            }
        }
        doc
    }

    /// Add or replace a verb. A replaced verb keeps its position.
    pub fn insert(&mut self, verb: impl Into<String>, table: ParadigmTable) {
        self.verbs.insert(verb.into(), table);
    }

    pub fn get(&self, verb: &str) -> Option<&ParadigmTable> {
        self.verbs.get(verb)
    }

    pub fn contains(&self, verb: &str) -> bool {
        self.verbs.contains_key(verb)
    }

    /// Verb names in document order.
    pub fn verbs(&self) -> impl Iterator<Item = &str> {
        self.verbs.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParadigmTable)> {
        self.verbs.iter().map(|(verb, table)| (verb.as_str(), table))
    }

    /// The verb at `index` in document order.
    pub fn get_index(&self, index: usize) -> Option<(&str, &ParadigmTable)> {
        self.verbs
            .get_index(index)
            .map(|(verb, table)| (verb.as_str(), table))
    }

    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// Indented JSON with two-space steps. Non-ASCII letters are written as
    /// they are, not escaped.
    pub fn to_json_pretty(&self) -> Result<String, TaivutusError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, TaivutusError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the indented JSON form to `writer`. Encoding failures come back
    /// as `InvalidData`.
    pub fn write_json<W: Write>(&self, writer: W) -> io::Result<()> {
        let mut writer = BufWriter::new(writer);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()
    }

    pub fn read_json<R: Read>(reader: R) -> serde_json::Result<Self> {
        serde_json::from_reader(BufReader::new(reader))
    }

    /// Write the document to `path`, replacing any existing file.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), TaivutusError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| TaivutusError::io(path, source))?;
        self.write_json(file)
            .map_err(|source| TaivutusError::io(path, source))?;
        log::info!("wrote {} verbs to {}", self.len(), path.display());
        Ok(())
    }

    /// Load a document previously written by [`ConjugationDocument::write_to`].
    pub fn read_from(path: impl AsRef<Path>) -> Result<Self, TaivutusError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| TaivutusError::io(path, source))?;
        let doc = Self::read_json(file).map_err(|e| TaivutusError::json(path, e))?;
        log::debug!("loaded {} verbs from {}", doc.len(), path.display());
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::FinnishSynthesizer;
    use taivutus_core::enums::{ParadigmLabel, Slot};

    fn doc(verbs: &[&str]) -> ConjugationDocument {
        ConjugationDocument::from_verbs(&FinnishSynthesizer::new(), verbs)
    }

    #[test]
    fn duplicates_collapse_to_first_position() {
        let doc = doc(&["puhua", "olla", "puhua", "tulla"]);
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.verbs().collect::<Vec<_>>(), vec!["puhua", "olla", "tulla"]);
    }

    #[test]
    fn lookup_by_name() {
        let doc = doc(&["olla"]);
        assert!(doc.contains("olla"));
        assert!(doc.get("puhua").is_none());
        let table = doc.get("olla").unwrap();
        assert_eq!(table.form(ParadigmLabel::Perfekti, Slot::FirstPlural), "olemme ollut");
        assert_eq!(doc.get_index(0).map(|(v, _)| v), Some("olla"));
        assert!(doc.get_index(1).is_none());
    }

    #[test]
    fn empty_document_serializes_to_empty_object() {
        let doc = ConjugationDocument::new();
        assert!(doc.is_empty());
        assert_eq!(doc.to_json_pretty().unwrap(), "{}");
    }

    #[test]
    fn json_is_indented_and_unescaped() {
        let json = doc(&["syödä"]).to_json_pretty().unwrap();
        assert!(json.starts_with("{\n  \"syödä\": {\n    \"preesens\": [\n      \"syön\","));
        assert!(json.contains("\"älä syö\""));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn json_round_trip_keeps_order() {
        let original = doc(&["tulla", "mennä", "hypätä"]);
        let parsed = ConjugationDocument::from_json(&original.to_json_pretty().unwrap()).unwrap();
        assert_eq!(parsed, original);
        assert_eq!(parsed.verbs().collect::<Vec<_>>(), vec!["tulla", "mennä", "hypätä"]);
    }

    #[test]
    fn writer_output_matches_string_output() {
        let doc = doc(&["puhua"]);
        let mut out = Vec::new();
        doc.write_json(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), doc.to_json_pretty().unwrap());
    }

    #[test]
    fn short_rows_in_input_are_padded() {
        let json = r#"{"laulaa": {"preesens": ["laulan"], "translation": "to sing"}}"#;
        let doc = ConjugationDocument::from_json(json).unwrap();
        let row = doc.get("laulaa").unwrap().row(ParadigmLabel::Preesens);
        assert_eq!(row.as_slice().len(), 8);
        assert_eq!(&row[Slot::Passive], "");
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn writer_failure_is_an_io_error() {
        let err = doc(&["puhua"]).write_json(ClosedPipe).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn unreadable_file_reports_its_path() {
        let dir = tempfile::tempdir().unwrap();
        // Opening a directory succeeds; reading from it fails.
        let err = ConjugationDocument::read_from(dir.path()).unwrap_err();
        match err {
            TaivutusError::Io { path, .. } => assert_eq!(path, dir.path()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bad_document_file_is_a_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{\"puhua\": [").unwrap();
        let err = ConjugationDocument::read_from(&path).unwrap_err();
        assert!(matches!(err, TaivutusError::Json(_)));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = ConjugationDocument::from_json("[1, 2").unwrap_err();
        assert!(matches!(err, TaivutusError::Json(_)));
    }
}
