// taivutus-extract: Select verb headwords from a tagged lexicon dump.
//
// Reads a word list whose lines hold a headword and a part-of-speech tag,
// keeps the lines tagged `verbi`, and writes the headwords one per line.
//
// Usage:
//   taivutus-extract [-i LEXICON] [-o VERB_LIST]
//
// Options:
//   -i, --input PATH    Tagged lexicon (default: $TAIVUTUS_LEXICON or nykysuomensanalista2024.txt)
//   -o, --output PATH   Verb list to write (default: $TAIVUTUS_VERBS or verbs_only.txt)
//   -h, --help          Print help

use taivutus_cli::EXTRACT_STEP;
use taivutus_fi::Conjugator;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if taivutus_cli::wants_help(&args) {
        println!("taivutus-extract: Select verb headwords from a tagged lexicon.");
        println!();
        println!("Usage: taivutus-extract [-i LEXICON] [-o VERB_LIST]");
        println!();
        println!("Options:");
        println!("  -i, --input PATH    Tagged lexicon (default: {})", EXTRACT_STEP.input_default);
        println!("  -o, --output PATH   Verb list to write (default: {})", EXTRACT_STEP.output_default);
        println!("  -h, --help          Print this help");
        return;
    }

    let (paths, rest) = taivutus_cli::parse_io_paths(&args, &EXTRACT_STEP)
        .unwrap_or_else(|e| taivutus_cli::fatal(&e));
    if let Some(arg) = rest.first() {
        taivutus_cli::fatal(&format!("unexpected argument: {arg}"));
    }

    let count = Conjugator::new()
        .run_extract(&paths.input, &paths.output)
        .unwrap_or_else(|e| taivutus_cli::fatal(&e.to_string()));

    println!("Extracted {count} verbs and saved to {}", paths.output.display());
}
