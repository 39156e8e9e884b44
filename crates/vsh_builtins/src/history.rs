use clap::Parser;
use vsh_core::command::{Args, Command, CommandResult};

use crate::utils;

/// Command name.
const NAME: &str = "history";

/// Print previously submitted lines.
///
/// This is a built-in shell command.
#[derive(Debug, Parser)]
#[clap(name = NAME, version)]
struct HistoryOpts {
    /// Print only the most recent N entries.
    #[clap(short = 'n', long)]
    limit: Option<usize>,
}

/// Implementation for the "history" built-in command.
#[derive(Clone)]
pub struct History;
impl Command for History {
    fn name(&self) -> &str {
        NAME
    }

    fn run(&self, args: Args) -> CommandResult {
        match HistoryOpts::try_parse_from(&args.args) {
            Ok(opts) => CommandResult::success(list_history(opts, &args)),
            Err(error) => utils::exit_with_parse_error(error),
        }
    }
}

/// Formats numbered history entries, oldest first.
///
/// Entry numbers are stable: limiting the output does not renumber the
/// remaining entries.
fn list_history(opts: HistoryOpts, args: &Args) -> String {
    let history = &args.context.history;
    let skip = match opts.limit {
        Some(limit) => history.len().saturating_sub(limit),
        None => 0,
    };

    history
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(index, line)| format!("{:5}  {line}\n", index + 1))
        .collect()
}
