// Conjugator: top-level integration point for the extraction and synthesis
// pipeline.
//
// Design notes:
// - The conjugator owns a synthesizer and drives the two batch steps:
//   lexicon -> verb list, and verb list -> conjugation document.
// - File handles are opened and closed inside each step; nothing is kept
//   open between calls.
// - Only I/O and JSON failures are errors. Odd lexicon lines and odd verbs
//   are handled by the rules themselves.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use taivutus_core::paradigm::{ParadigmTable, StemSet};

use crate::document::ConjugationDocument;
use crate::lexicon;
use crate::morphology::{Derivation, FinnishSynthesizer, Synthesizer, lookup};

/// Error type for conjugation pipeline failures.
#[derive(Debug, thiserror::Error)]
pub enum TaivutusError {
    /// A file could not be opened, read or written.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A conjugation document could not be encoded or decoded.
    #[error("invalid conjugation document: {0}")]
    Json(#[from] serde_json::Error),
}

impl TaivutusError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Read and write failures inside serde_json keep the file path; only
    /// malformed documents become [`TaivutusError::Json`].
    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        if source.is_io() {
            Self::io(path, source.into())
        } else {
            Self::Json(source)
        }
    }
}

/// Top-level handle for conjugating Finnish verbs.
///
/// Provides single-verb conjugation and the two batch steps of the pipeline
/// through one interface.
#[derive(Debug, Clone, Default)]
pub struct Conjugator {
    synthesizer: FinnishSynthesizer,
}

impl Conjugator {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Single verbs
    // =========================================================================

    /// Conjugate one verb into its full paradigm.
    pub fn conjugate(&self, verb: &str) -> ParadigmTable {
        self.synthesizer.conjugate(verb)
    }

    /// The present, past and perfect stems of one verb.
    pub fn stems(&self, verb: &str) -> StemSet {
        self.synthesizer.stems(verb)
    }

    /// Whether the verb is irregular or which class it falls into.
    pub fn derivation(&self, verb: &str) -> Derivation {
        lookup(verb)
    }

    /// Conjugate a sequence of verbs into a document.
    pub fn conjugate_all<I>(&self, verbs: I) -> ConjugationDocument
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        ConjugationDocument::from_verbs(&self.synthesizer, verbs)
    }

    // =========================================================================
    // Batch steps
    // =========================================================================

    /// Read the verb headwords of a tagged lexicon file, in file order.
    pub fn extract_verbs(&self, lexicon_path: impl AsRef<Path>) -> Result<Vec<String>, TaivutusError> {
        let path = lexicon_path.as_ref();
        let file = File::open(path).map_err(|source| TaivutusError::io(path, source))?;
        let verbs = lexicon::verbs_from_reader(BufReader::new(file))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| TaivutusError::io(path, source))?;
        log::info!("extracted {} verbs from {}", verbs.len(), path.display());
        Ok(verbs)
    }

    /// Lexicon file -> verb list file. Returns the number of verbs written.
    pub fn run_extract(
        &self,
        lexicon_path: impl AsRef<Path>,
        verb_list_path: impl AsRef<Path>,
    ) -> Result<usize, TaivutusError> {
        let verbs = self.extract_verbs(lexicon_path)?;
        let path = verb_list_path.as_ref();
        let file = File::create(path).map_err(|source| TaivutusError::io(path, source))?;
        lexicon::write_verb_list(BufWriter::new(file), &verbs)
            .map_err(|source| TaivutusError::io(path, source))?;
        Ok(verbs.len())
    }

    /// Read a verb list file, one infinitive per line.
    pub fn read_verb_list(&self, verb_list_path: impl AsRef<Path>) -> Result<Vec<String>, TaivutusError> {
        let path = verb_list_path.as_ref();
        let file = File::open(path).map_err(|source| TaivutusError::io(path, source))?;
        lexicon::read_verb_list(BufReader::new(file)).map_err(|source| TaivutusError::io(path, source))
    }

    /// Verb list file -> conjugation document file. Returns the number of
    /// distinct verbs written.
    pub fn run_conjugate(
        &self,
        verb_list_path: impl AsRef<Path>,
        output_path: impl AsRef<Path>,
    ) -> Result<usize, TaivutusError> {
        let verbs = self.read_verb_list(verb_list_path)?;
        let doc = self.conjugate_all(&verbs);
        if doc.len() < verbs.len() {
            log::debug!("{} duplicate verbs collapsed", verbs.len() - doc.len());
        }
        doc.write_to(output_path)?;
        Ok(doc.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taivutus_core::enums::{ParadigmLabel, Slot, VerbClass};

    #[test]
    fn single_verb_api() {
        let c = Conjugator::new();
        assert_eq!(c.stems("puhua").present, "puhu");
        assert_eq!(c.derivation("puhua"), Derivation::Regular(VerbClass::One));
        assert!(matches!(c.derivation("tehdä"), Derivation::Irregular(_)));
        assert_eq!(
            c.conjugate("tehdä").form(ParadigmLabel::Imperfekti, Slot::FirstSingular),
            "tekin"
        );
    }

    #[test]
    fn conjugate_all_deduplicates() {
        let doc = Conjugator::new().conjugate_all(["olla", "olla"]);
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Conjugator::new()
            .extract_verbs("/nonexistent/lexicon.txt")
            .unwrap_err();
        match &err {
            TaivutusError::Io { path, .. } => assert_eq!(path, Path::new("/nonexistent/lexicon.txt")),
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().starts_with("/nonexistent/lexicon.txt: "));
    }

    #[test]
    fn missing_verb_list_is_fatal() {
        let err = Conjugator::new()
            .run_conjugate("/nonexistent/verbs.txt", "/nonexistent/out.json")
            .unwrap_err();
        assert!(matches!(err, TaivutusError::Io { .. }));
    }
}
