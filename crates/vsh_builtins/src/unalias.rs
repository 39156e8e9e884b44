use clap::Parser;
use vsh_core::command::{Action, Args, Command, CommandResult};

use crate::{status, utils};

/// Command name.
const NAME: &str = "unalias";

/// Remove registered aliases.
///
/// This is a built-in shell command.
#[derive(Debug, Parser)]
#[clap(name = NAME, version)]
struct UnaliasOpts {
    /// Aliases to remove.
    #[clap(required = true, num_args = 1..)]
    names: Vec<String>,
}

/// Implementation for the "unalias" built-in command.
#[derive(Clone)]
pub struct Unalias;
impl Command for Unalias {
    fn name(&self) -> &str {
        NAME
    }

    fn run(&self, args: Args) -> CommandResult {
        match UnaliasOpts::try_parse_from(&args.args) {
            Ok(opts) => remove_aliases(opts, &args),
            Err(error) => utils::exit_with_parse_error(error),
        }
    }
}

/// Requests removal of each named alias.
fn remove_aliases(opts: UnaliasOpts, args: &Args) -> CommandResult {
    let mut result = CommandResult::code(status::SUCCESS);

    for name in opts.names {
        if args.context.aliases.contains_key(&name) {
            result.actions.push(Action::UnsetAlias(name));
        } else {
            result.code = status::GENERAL_ERROR;
            result
                .stderr
                .push_str(&format!("{NAME}: {name}: not found\n"));
        }
    }

    result
}
