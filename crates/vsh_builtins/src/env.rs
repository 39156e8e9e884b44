use clap::Parser;
use itertools::Itertools;
use vsh_core::command::{Args, Command, CommandResult};

use crate::utils;

/// Command name.
const NAME: &str = "env";

/// Print all environment variables.
///
/// This is a built-in shell command.
#[derive(Debug, Parser)]
#[clap(name = NAME, version)]
struct EnvOpts {}

/// Implementation for the "env" built-in command.
#[derive(Clone)]
pub struct Env;
impl Command for Env {
    fn name(&self) -> &str {
        NAME
    }

    fn run(&self, args: Args) -> CommandResult {
        match EnvOpts::try_parse_from(&args.args) {
            Ok(_) => CommandResult::success(list_vars(&args)),
            Err(error) => utils::exit_with_parse_error(error),
        }
    }
}

/// Formats all environment variables, sorted by name.
fn list_vars(args: &Args) -> String {
    args.context
        .vars
        .iter()
        .sorted()
        .map(|(name, value)| format!("{name}={value}\n"))
        .collect()
}
