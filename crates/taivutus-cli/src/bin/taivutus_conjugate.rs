// taivutus-conjugate: Conjugate every verb of a verb list.
//
// Reads infinitives one per line, derives the full paradigm of each verb and
// writes them as an indented JSON document keyed by verb.
//
// Usage:
//   taivutus-conjugate [-i VERB_LIST] [-o DOCUMENT]
//
// Options:
//   -i, --input PATH    Verb list (default: $TAIVUTUS_VERBS or verbs_only.txt)
//   -o, --output PATH   JSON document to write (default: $TAIVUTUS_OUTPUT or verbs_full.json)
//   -h, --help          Print help

use taivutus_cli::CONJUGATE_STEP;
use taivutus_fi::Conjugator;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if taivutus_cli::wants_help(&args) {
        println!("taivutus-conjugate: Conjugate every verb of a verb list.");
        println!();
        println!("Usage: taivutus-conjugate [-i VERB_LIST] [-o DOCUMENT]");
        println!();
        println!("Options:");
        println!("  -i, --input PATH    Verb list (default: {})", CONJUGATE_STEP.input_default);
        println!("  -o, --output PATH   JSON document to write (default: {})", CONJUGATE_STEP.output_default);
        println!("  -h, --help          Print this help");
        return;
    }

    let (paths, rest) = taivutus_cli::parse_io_paths(&args, &CONJUGATE_STEP)
        .unwrap_or_else(|e| taivutus_cli::fatal(&e));
    if let Some(arg) = rest.first() {
        taivutus_cli::fatal(&format!("unexpected argument: {arg}"));
    }

    let count = Conjugator::new()
        .run_conjugate(&paths.input, &paths.output)
        .unwrap_or_else(|e| taivutus_cli::fatal(&e.to_string()));

    println!("Generated conjugations for {count} verbs in {}", paths.output.display());
}
