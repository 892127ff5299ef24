// taivutus-cli: shared utilities for CLI tools.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use taivutus_core::character::char_len;
use taivutus_core::enums::Slot;
use taivutus_fi::lookup::TenseView;

/// Default tagged lexicon dump read by `taivutus-extract`.
pub const DEFAULT_LEXICON: &str = "nykysuomensanalista2024.txt";

/// Default verb list: written by `taivutus-extract`, read by `taivutus-conjugate`.
pub const DEFAULT_VERB_LIST: &str = "verbs_only.txt";

/// Default conjugation document written by `taivutus-conjugate`.
pub const DEFAULT_DOCUMENT: &str = "verbs_full.json";

/// Where one pipeline step reads from and writes to when no flag is given.
///
/// Resolution order for each side:
/// 1. `-i PATH` / `-o PATH` (or the long forms) on the command line
/// 2. the step's environment variable
/// 3. the fixed default file name in the current directory
#[derive(Debug, Clone, Copy)]
pub struct StepPaths {
    pub input_env: &'static str,
    pub input_default: &'static str,
    pub output_env: &'static str,
    pub output_default: &'static str,
}

/// Lexicon -> verb list.
pub const EXTRACT_STEP: StepPaths = StepPaths {
    input_env: "TAIVUTUS_LEXICON",
    input_default: DEFAULT_LEXICON,
    output_env: "TAIVUTUS_VERBS",
    output_default: DEFAULT_VERB_LIST,
};

/// Verb list -> conjugation document.
pub const CONJUGATE_STEP: StepPaths = StepPaths {
    input_env: "TAIVUTUS_VERBS",
    input_default: DEFAULT_VERB_LIST,
    output_env: "TAIVUTUS_OUTPUT",
    output_default: DEFAULT_DOCUMENT,
};

/// Resolved input and output paths of one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IoPaths {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Parse `-i/--input` and `-o/--output` from command line args.
///
/// Returns `(paths, remaining_args)`.
pub fn parse_io_paths(args: &[String], step: &StepPaths) -> Result<(IoPaths, Vec<String>), String> {
    let (input, args) = take_option(args, "--input", "-i")?;
    let (output, args) = take_option(&args, "--output", "-o")?;
    let paths = IoPaths {
        input: resolve_path(input, std::env::var(step.input_env).ok(), step.input_default),
        output: resolve_path(output, std::env::var(step.output_env).ok(), step.output_default),
    };
    Ok((paths, args))
}

/// First of: explicit flag value, environment value, default.
pub fn resolve_path(flag: Option<String>, env: Option<String>, default: &str) -> PathBuf {
    flag.or(env)
        .filter(|p| !p.is_empty())
        .map_or_else(|| PathBuf::from(default), PathBuf::from)
}

/// Remove a `--long VALUE`, `--long=VALUE` or `-s VALUE` option from `args`.
///
/// The last occurrence wins. Returns `(value, remaining_args)`.
pub fn take_option(
    args: &[String],
    long: &str,
    short: &str,
) -> Result<(Option<String>, Vec<String>), String> {
    let mut value = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();
    let long_eq = format!("{long}=");

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix(&long_eq) {
            value = Some(val.to_string());
        } else if arg == long || arg == short {
            match iter.next() {
                Some(val) => value = Some(val.clone()),
                None => return Err(format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((value, remaining))
}

/// Remove a boolean flag from `args`. Returns `(present, remaining_args)`.
pub fn take_flag(args: &[String], long: &str) -> (bool, Vec<String>) {
    let present = args.iter().any(|a| a == long);
    let remaining = args.iter().filter(|a| *a != long).cloned().collect();
    (present, remaining)
}

/// Split what is left after option parsing into positional words.
///
/// Any remaining argument that starts with `-` is an unknown option.
pub fn positional_args(args: Vec<String>) -> Result<Vec<String>, String> {
    match args.iter().find(|a| a.starts_with('-')) {
        Some(arg) => Err(format!("unknown option: {arg}")),
        None => Ok(args),
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Write tense views as an indented pronoun/form table.
pub fn write_tense_views<W: Write>(out: &mut W, views: &[TenseView]) -> io::Result<()> {
    let width = Slot::ALL
        .iter()
        .map(|s| char_len(s.pronoun()))
        .max()
        .unwrap_or(0);
    for view in views {
        writeln!(out, "  {}", view.title)?;
        for (slot, form) in &view.rows {
            writeln!(out, "    {:<width$}  {form}", slot.pronoun())?;
        }
    }
    Ok(())
}
