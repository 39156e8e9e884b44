use clap::Parser;
use vsh_core::command::{Args, Command, CommandResult};

use crate::utils;

/// Command name.
const NAME: &str = "echo";

/// Print a line of text.
///
/// This is a built-in shell command.
#[derive(Debug, Parser)]
#[clap(name = NAME, version)]
struct EchoOpts {
    /// Do not print trailing newline.
    #[clap(short, long)]
    no_newline: bool,

    /// Text strings to print.
    text: Vec<String>,
}

/// Implementation for the "echo" built-in command.
#[derive(Clone)]
pub struct Echo;
impl Command for Echo {
    fn name(&self) -> &str {
        NAME
    }

    fn run(&self, args: Args) -> CommandResult {
        match EchoOpts::try_parse_from(&args.args) {
            Ok(opts) => print_text(opts),
            Err(error) => utils::exit_with_parse_error(error),
        }
    }
}

/// Prints words separated by single spaces.
fn print_text(opts: EchoOpts) -> CommandResult {
    let mut output = opts.text.join(" ");
    if !opts.no_newline {
        output.push('\n');
    }
    CommandResult::success(output)
}
