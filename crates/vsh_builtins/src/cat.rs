use clap::Parser;
use vsh_core::command::{Args, Command, CommandResult};

use crate::{status, utils};

/// Command name.
const NAME: &str = "cat";

/// Concatenate files from the virtual file store and print them.
///
/// This is a built-in shell command.
#[derive(Debug, Parser)]
#[clap(name = NAME, version)]
struct CatOpts {
    /// Files to concatenate. Standard input is used when omitted.
    files: Vec<String>,
}

/// Implementation for the "cat" built-in command.
#[derive(Clone)]
pub struct Cat;
impl Command for Cat {
    fn name(&self) -> &str {
        NAME
    }

    fn run(&self, args: Args) -> CommandResult {
        match CatOpts::try_parse_from(&args.args) {
            Ok(opts) => concatenate(opts, &args),
            Err(error) => utils::exit_with_parse_error(error),
        }
    }
}

/// Concatenates file contents, falling back to standard input.
///
/// Unreadable files are reported on stderr without aborting the remaining
/// files, mirroring the traditional cat behavior.
fn concatenate(opts: CatOpts, args: &Args) -> CommandResult {
    if opts.files.is_empty() {
        return CommandResult::success(args.stdin.clone());
    }

    let mut result = CommandResult::code(status::SUCCESS);
    for file in &opts.files {
        match args.context.fs.lock().read(file) {
            Ok(contents) => result.stdout.push_str(&contents),
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
