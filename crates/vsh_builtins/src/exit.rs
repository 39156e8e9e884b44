use clap::Parser;
use vsh_core::command::{Action, Args, Command, CommandResult};

use crate::utils;

/// Command name.
const NAME: &str = "exit";

/// Terminate the shell session.
///
/// This is a built-in shell command.
#[derive(Debug, Parser)]
#[clap(name = NAME, version)]
struct ExitOpts {
    /// Exit code to terminate with. The last command's exit code is used
    /// when omitted.
    code: Option<i32>,
}

/// Implementation for the "exit" built-in command.
///
/// Termination is requested through a pending action; the owning session
/// shuts down after the current command tree finishes.
#[derive(Clone)]
pub struct Exit;
impl Command for Exit {
    fn name(&self) -> &str {
        NAME
    }

    fn run(&self, args: Args) -> CommandResult {
        match ExitOpts::try_parse_from(&args.args) {
            Ok(opts) => {
                let code = opts.code.unwrap_or(args.context.last_exit);
                CommandResult::with_actions(code, vec![Action::Exit(code)])
            }
            Err(error) => utils::exit_with_parse_error(error),
        }
    }
}
