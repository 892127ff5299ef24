// taivutus-quiz: Drill random verb forms on the terminal.
//
// Asks for one form per round (verb, tense and pronoun chosen at random),
// reads the answer from stdin and keeps score.
//
// Usage:
//   taivutus-quiz [--json PATH] [-n ROUNDS] [VERB...]
//
// Options:
//   --json PATH    Conjugation document to draw questions from
//   -n, --rounds N Number of questions (default: 10)
//   -h, --help     Print help
//
// Without --json the verbs given as arguments are conjugated; with neither,
// the default verb list is read.

use std::io::{self, BufRead, Write};

use taivutus_fi::quiz::random_question;
use taivutus_fi::{ConjugationDocument, Conjugator};

const DEFAULT_ROUNDS: usize = 10;

fn load_document(json_path: Option<String>, verbs: Vec<String>) -> Result<ConjugationDocument, String> {
    if let Some(path) = json_path {
        return ConjugationDocument::read_from(&path).map_err(|e| e.to_string());
    }
    let conjugator = Conjugator::new();
    let verbs = if verbs.is_empty() {
        conjugator
            .read_verb_list(taivutus_cli::DEFAULT_VERB_LIST)
            .map_err(|e| e.to_string())?
    } else {
        verbs
    };
    Ok(conjugator.conjugate_all(&verbs))
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if taivutus_cli::wants_help(&args) {
        println!("taivutus-quiz: Drill random Finnish verb forms.");
        println!();
        println!("Usage: taivutus-quiz [--json PATH] [-n ROUNDS] [VERB...]");
        println!();
        println!("Options:");
        println!("  --json PATH    Conjugation document to draw questions from");
        println!("  -n, --rounds N Number of questions (default: {DEFAULT_ROUNDS})");
        println!("  -h, --help     Print this help");
        return;
    }

    let (json_path, args) = taivutus_cli::take_option(&args, "--json", "--json")
        .unwrap_or_else(|e| taivutus_cli::fatal(&e));
    let (rounds, args) = taivutus_cli::take_option(&args, "--rounds", "-n")
        .unwrap_or_else(|e| taivutus_cli::fatal(&e));
    let rounds = match rounds {
        Some(n) => n
            .parse::<usize>()
            .unwrap_or_else(|_| taivutus_cli::fatal(&format!("invalid round count: {n}"))),
        None => DEFAULT_ROUNDS,
    };
    let verbs = taivutus_cli::positional_args(args).unwrap_or_else(|e| taivutus_cli::fatal(&e));

    let document = load_document(json_path, verbs).unwrap_or_else(|e| taivutus_cli::fatal(&e));
    if document.is_empty() {
        taivutus_cli::fatal("no verbs to ask about");
    }

    let mut rng = rand::rng();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut score = 0;
    let mut asked = 0;

    for _ in 0..rounds {
        let Some(question) = random_question(&document, &mut rng) else {
            break;
        };
        print!("{}: ", question.prompt());
        if let Err(e) = io::stdout().flush() {
            taivutus_cli::fatal(&format!("error writing stdout: {e}"));
        }

        let answer = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
            None => break,
        };
        asked += 1;
        if question.check(&answer) {
            score += 1;
            println!("oikein!");
        } else {
            println!("väärin, oikea vastaus: {}", question.answer);
        }
    }

    println!();
    println!("Score: {score}/{asked}");
}
