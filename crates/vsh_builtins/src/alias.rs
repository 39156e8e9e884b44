use clap::Parser;
use itertools::Itertools;
use vsh_core::command::{Action, Args, Command, CommandResult};

use crate::{status, utils};

/// Command name.
const NAME: &str = "alias";

/// List registered aliases or define new ones.
///
/// This is a built-in shell command.
#[derive(Debug, Parser)]
#[clap(name = NAME, version)]
struct AliasOpts {
    /// Aliases to print (`name`) or define (`name=value`).
    definitions: Vec<String>,
}

/// Implementation for the "alias" built-in command.
#[derive(Clone)]
pub struct Alias;
impl Command for Alias {
    fn name(&self) -> &str {
        NAME
    }

    fn run(&self, args: Args) -> CommandResult {
        match AliasOpts::try_parse_from(&args.args) {
            Ok(opts) => handle_definitions(opts, &args),
            Err(error) => utils::exit_with_parse_error(error),
        }
    }
}

/// Prints or defines aliases.
///
/// Definitions are returned as pending actions; the session applies them
/// after the current command tree finishes.
fn handle_definitions(opts: AliasOpts, args: &Args) -> CommandResult {
    if opts.definitions.is_empty() {
        return CommandResult::success(list_aliases(args));
    }

    let mut result = CommandResult::code(status::SUCCESS);
    for definition in &opts.definitions {
        match definition.split_once('=') {
            Some((name, value)) => {
                result.actions.push(Action::SetAlias(
                    name.to_owned(),
                    utils::unquote(value).to_owned(),
                ));
            }
            None => match args.context.aliases.get(definition) {
                Some(value) => {
                    result
                        .stdout
                        .push_str(&format!("alias {definition}='{value}'\n"));
                }
                None => {
                    result.code = status::GENERAL_ERROR;
                    result
                        .stderr
                        .push_str(&format!("{NAME}: {definition}: not found\n"));
                }
            },
        }
    }

    result
}

/// Formats all registered aliases, sorted by name.
fn list_aliases(args: &Args) -> String {
    args.context
        .aliases
        .iter()
        .sorted()
        .map(|(name, value)| format!("alias {name}='{value}'\n"))
        .collect()
}
