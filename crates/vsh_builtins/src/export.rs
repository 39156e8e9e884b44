use clap::Parser;
use vsh_core::command::{Action, Args, Command, CommandResult};

use crate::{status, utils};

/// Command name.
const NAME: &str = "export";

/// Set environment variables.
///
/// This is a built-in shell command.
#[derive(Debug, Parser)]
#[clap(name = NAME, version)]
struct ExportOpts {
    /// Variables to set (`name=value`) or re-export (`name`).
    #[clap(required = true, num_args = 1..)]
    variables: Vec<String>,
}

/// Implementation for the "export" built-in command.
#[derive(Clone)]
pub struct Export;
impl Command for Export {
    fn name(&self) -> &str {
        NAME
    }

    fn run(&self, args: Args) -> CommandResult {
        match ExportOpts::try_parse_from(&args.args) {
            Ok(opts) => export_variables(opts, &args),
            Err(error) => utils::exit_with_parse_error(error),
        }
    }
}

/// Requests assignment of each variable.
///
/// Returns 0 if all variables can be exported, or 1 if at least one bare
/// name is not already known by the shell.
fn export_variables(opts: ExportOpts, args: &Args) -> CommandResult {
    let mut result = CommandResult::code(status::SUCCESS);

    for variable in opts.variables {
        match variable.split_once('=') {
            // The value is set prior to the export. Only the first equals
            // sign separates; the value may contain more of them.
            Some((name, value)) => {
                result.actions.push(Action::SetVar(
                    name.to_owned(),
                    utils::unquote(value).to_owned(),
                ));
            }

            // A bare name must already be known by the shell.
            None => {
                if args.context.get_var(&variable).is_none() {
                    result.code = status::GENERAL_ERROR;
                    result
                        .stderr
                        .push_str(&format!("{NAME}: {variable}: not found\n"));
                }
            }
        }
    }

    result
}
