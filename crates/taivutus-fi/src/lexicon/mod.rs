// Lexicon filter -- select verb headwords from a tagged word list
//
// A lexicon line holds whitespace-separated fields: the headword first and
// its part-of-speech tag second. Anything after the tag is ignored, and lines
// with fewer than two fields are skipped.

use std::io::{self, BufRead, Write};

use crate::finnish::constants::VERB_TAG;

/// Return the headword of a lexicon line if its tag marks a verb.
pub fn verb_headword(line: &str) -> Option<&str> {
    let mut fields = line.split_whitespace();
    let headword = fields.next()?;
    let tag = fields.next()?;
    (tag == VERB_TAG).then_some(headword)
}

/// Lazily yield the verb headwords of `lines`, in input order.
///
/// Duplicates are kept and case is left alone.
pub fn verbs_from_lines<I, S>(lines: I) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| verb_headword(line.as_ref()).map(str::to_string))
}

/// Like [`verbs_from_lines`], but over a reader. Read errors are passed
/// through so the caller can decide whether they are fatal.
pub fn verbs_from_reader<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader.lines().filter_map(|line| match line {
        Ok(line) => {
            let verb = verb_headword(&line).map(str::to_string);
            if verb.is_none() {
                log::trace!("skipping lexicon line {line:?}");
            }
            verb.map(Ok)
        }
        Err(e) => Some(Err(e)),
    })
}

/// Read a verb list: one infinitive per line. Lines are trimmed and blank
/// lines are dropped.
pub fn read_verb_list<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut verbs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let verb = line.trim();
        if !verb.is_empty() {
            verbs.push(verb.to_string());
        }
    }
    Ok(verbs)
}

/// Write a verb list, one infinitive per line, each terminated by `\n`.
pub fn write_verb_list<W, I, S>(mut writer: W, verbs: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for verb in verbs {
        writeln!(writer, "{}", verb.as_ref())?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noun_is_dropped() {
        assert_eq!(verb_headword("kissa\tsubstantiivi\n"), None);
    }

    #[test]
    fn verb_is_kept() {
        assert_eq!(verb_headword("juosta\tverbi\n"), Some("juosta"));
    }

    #[test]
    fn any_whitespace_separates_fields() {
        assert_eq!(verb_headword("  laulaa    verbi  "), Some("laulaa"));
        assert_eq!(verb_headword("syödä verbi 12 extra"), Some("syödä"));
    }

    #[test]
    fn short_lines_are_skipped() {
        assert_eq!(verb_headword(""), None);
        assert_eq!(verb_headword("verbi"), None);
        assert_eq!(verb_headword("   \t "), None);
    }

    #[test]
    fn tag_must_match_exactly() {
        assert_eq!(verb_headword("olla Verbi"), None);
        assert_eq!(verb_headword("olla verbi,"), None);
        assert_eq!(verb_headword("olla verbit"), None);
    }

    #[test]
    fn filter_keeps_order_and_duplicates() {
        let lines = [
            "kissa substantiivi",
            "olla verbi",
            "nopea adjektiivi",
            "puhua verbi",
            "rikki",
            "olla verbi",
        ];
        let verbs: Vec<String> = verbs_from_lines(lines).collect();
        assert_eq!(verbs, vec!["olla", "puhua", "olla"]);
    }

    #[test]
    fn filter_is_lazy() {
        let mut seen = 0;
        let lines = ["olla verbi", "puhua verbi", "tulla verbi"]
            .into_iter()
            .inspect(|_| seen += 1);
        let first = verbs_from_lines(lines).next();
        assert_eq!(first.as_deref(), Some("olla"));
        assert_eq!(seen, 1);
    }

    #[test]
    fn reader_filter_matches_line_filter() {
        let text = "kissa\tsubstantiivi\njuosta\tverbi\n\nkoira\n";
        let verbs: Vec<String> = verbs_from_reader(text.as_bytes())
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(verbs, vec!["juosta"]);
    }

    #[test]
    fn verb_list_trims_and_skips_blank_lines() {
        let text = "puhua\n  olla \n\n\t\nnähdä\r\n";
        let verbs = read_verb_list(text.as_bytes()).unwrap();
        assert_eq!(verbs, vec!["puhua", "olla", "nähdä"]);
    }

    #[test]
    fn verb_list_written_one_per_line() {
        let mut out = Vec::new();
        write_verb_list(&mut out, ["puhua", "syödä"]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "puhua\nsyödä\n");
    }
}
