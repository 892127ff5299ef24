// taivutus-show: Print the conjugation tables of verbs.
//
// Looks verbs up in a conjugation document when one is given, otherwise
// conjugates them on the fly. Input is normalized first, so "  Puhua!"
// finds "puhua".
//
// Usage:
//   taivutus-show [--json PATH] [--all] [VERB...]
//
// Options:
//   --json PATH   Conjugation document to look verbs up in
//   --all         Print every tense instead of the indicative ones
//   -h, --help    Print help

use std::io::{self, BufRead, Write};

use taivutus_core::enums::ParadigmLabel;
use taivutus_core::paradigm::ParadigmTable;
use taivutus_fi::lookup::{find_verb, normalize_verb_input, tense_views};
use taivutus_fi::morphology::Derivation;
use taivutus_fi::{ConjugationDocument, Conjugator};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if taivutus_cli::wants_help(&args) {
        println!("taivutus-show: Print the conjugation tables of Finnish verbs.");
        println!();
        println!("Usage: taivutus-show [--json PATH] [--all] [VERB...]");
        println!();
        println!("If VERB arguments are given, shows each verb.");
        println!("Otherwise reads verbs from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  --json PATH   Conjugation document to look verbs up in");
        println!("  --all         Print every tense instead of the indicative ones");
        println!("  -h, --help    Print this help");
        return;
    }

    let (json_path, args) = taivutus_cli::take_option(&args, "--json", "--json")
        .unwrap_or_else(|e| taivutus_cli::fatal(&e));
    let (all, args) = taivutus_cli::take_flag(&args, "--all");
    let verbs = taivutus_cli::positional_args(args).unwrap_or_else(|e| taivutus_cli::fatal(&e));

    let document = json_path.map(|path| {
        ConjugationDocument::read_from(&path).unwrap_or_else(|e| taivutus_cli::fatal(&e.to_string()))
    });
    let conjugator = Conjugator::new();
    let labels: &[ParadigmLabel] = if all { &ParadigmLabel::ALL } else { &ParadigmLabel::INDICATIVE };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut show_verb = |raw: &str| -> io::Result<()> {
        let verb = normalize_verb_input(raw);
        if verb.is_empty() {
            return Ok(());
        }
        let table: ParadigmTable = match &document {
            Some(doc) => match find_verb(doc, &verb) {
                Some((_, table)) => table.clone(),
                None => {
                    writeln!(out, "{verb}: (not in document)")?;
                    return Ok(());
                }
            },
            None => conjugator.conjugate(&verb),
        };
        let kind = match conjugator.derivation(&verb) {
            Derivation::Irregular(_) => "irregular".to_string(),
            Derivation::Regular(class) => class.to_string(),
        };
        writeln!(out, "{verb} ({kind})")?;
        taivutus_cli::write_tense_views(&mut out, &tense_views(&table, labels))?;
        writeln!(out)
    };

    let result = if verbs.is_empty() {
        let stdin = io::stdin();
        let mut result = Ok(());
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            result = show_verb(line.as_str());
            if result.is_err() {
                break;
            }
        }
        result
    } else {
        verbs.iter().try_for_each(|verb| show_verb(verb.as_str()))
    };

    if let Err(e) = result {
        taivutus_cli::fatal(&e.to_string());
    }
}
