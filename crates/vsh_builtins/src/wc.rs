use clap::Parser;
use vsh_core::command::{Args, Command, CommandResult};

use crate::{status, utils};

/// Command name.
const NAME: &str = "wc";

/// Print newline, word, and byte counts.
///
/// This is a built-in shell command.
#[derive(Debug, Parser)]
#[clap(name = NAME, version)]
struct WcOpts {
    /// Print the newline count.
    #[clap(short, long)]
    lines: bool,

    /// Print the word count.
    #[clap(short, long)]
    words: bool,

    /// Print the byte count.
    #[clap(short = 'c', long)]
    bytes: bool,

    /// Files to count. Standard input is used when omitted.
    files: Vec<String>,
}

/// Implementation for the "wc" built-in command.
#[derive(Clone)]
pub struct Wc;
impl Command for Wc {
    fn name(&self) -> &str {
        NAME
    }

    fn run(&self, args: Args) -> CommandResult {
        match WcOpts::try_parse_from(&args.args) {
            Ok(opts) => count(opts, &args),
            Err(error) => utils::exit_with_parse_error(error),
        }
    }
}

/// Newline, word, and byte counts for one input.
struct Counts {
    lines: usize,
    words: usize,
    bytes: usize,
}

impl Counts {
    fn of(text: &str) -> Self {
        Self {
            lines: text.matches('\n').count(),
            words: text.split_whitespace().count(),
            bytes: text.len(),
        }
    }
}

/// Counts files, or standard input when no files are named.
fn count(opts: WcOpts, args: &Args) -> CommandResult {
    if opts.files.is_empty() {
        let counts = Counts::of(&args.stdin);
        return CommandResult::success(format!("{}\n", format_counts(&opts, &counts, None)));
    }

    let mut result = CommandResult::code(status::SUCCESS);
    for file in &opts.files {
        match args.context.fs.lock().read(file) {
            Ok(contents) => {
                let counts = Counts::of(&contents);
                result
                    .stdout
                    .push_str(&format!("{}\n", format_counts(&opts, &counts, Some(file))));
            }
            Err(error) => {
                result.code = status::GENERAL_ERROR;
                result
                    .stderr
                    .push_str(&format!("{NAME}: {file}: {error}\n"));
            }
        }
    }

    result
}

/// Formats the selected counts for one input.
///
/// All three counts are printed when no selection flag is given.
fn format_counts(opts: &WcOpts, counts: &Counts, file: Option<&str>) -> String {
    let all = !opts.lines && !opts.words && !opts.bytes;
    let mut fields = Vec::with_capacity(4);

    if all || opts.lines {
        fields.push(counts.lines.to_string());
    }
    if all || opts.words {
        fields.push(counts.words.to_string());
    }
    if all || opts.bytes {
        fields.push(counts.bytes.to_string());
    }
    if let Some(file) = file {
        fields.push(file.to_string());
    }

    fields.join(" ")
}
