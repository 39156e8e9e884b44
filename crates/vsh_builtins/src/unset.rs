use clap::Parser;
use vsh_core::command::{Action, Args, Command, CommandResult};

use crate::{status, utils};

/// Command name.
const NAME: &str = "unset";

/// Remove environment variables.
///
/// This is a built-in shell command.
#[derive(Debug, Parser)]
#[clap(name = NAME, version)]
struct UnsetOpts {
    /// Variables to remove. Unknown names are ignored.
    #[clap(required = true, num_args = 1..)]
    names: Vec<String>,
}

/// Implementation for the "unset" built-in command.
#[derive(Clone)]
pub struct Unset;
impl Command for Unset {
    fn name(&self) -> &str {
        NAME
    }

    fn run(&self, args: Args) -> CommandResult {
        match UnsetOpts::try_parse_from(&args.args) {
            Ok(opts) => CommandResult::with_actions(
                status::SUCCESS,
                opts.names.into_iter().map(Action::UnsetVar).collect(),
            ),
            Err(error) => utils::exit_with_parse_error(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use vsh_core::Context;

    use super::*;

    fn run(args: &[&str], context: &Context) -> CommandResult {
        let args = args.iter().map(|arg| arg.to_string()).collect();
        Unset.run(Args::new(args, String::new(), context))
    }

    #[test]
    fn it_requests_removal_for_each_name() {
        let context = Context::default();
        let result = run(&["unset", "A", "B"], &context);

        assert_eq!(result.code, 0);
        assert_eq!(
            result.actions,
            vec![Action::UnsetVar("A".into()), Action::UnsetVar("B".into())]
        );
    }

    #[test]
    fn it_requires_at_least_one_name() {
        let context = Context::default();
        let result = run(&["unset"], &context);
        assert_eq!(result.code, status::BUILTIN_ERROR);
    }
}
