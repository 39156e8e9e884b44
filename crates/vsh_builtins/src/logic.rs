use vsh_core::command::{Args, Command, CommandResult};

use crate::status;

/// Implementation for the "true" built-in command.
///
/// Always exits successfully, ignoring all arguments.
#[derive(Clone)]
pub struct True;
impl Command for True {
    fn name(&self) -> &str {
        "true"
    }

    fn run(&self, _: Args) -> CommandResult {
        CommandResult::code(status::SUCCESS)
    }
}

/// Implementation for the "false" built-in command.
///
/// Always exits with a failure, ignoring all arguments.
#[derive(Clone)]
pub struct False;
impl Command for False {
    fn name(&self) -> &str {
        "false"
    }

    fn run(&self, _: Args) -> CommandResult {
        CommandResult::code(status::GENERAL_ERROR)
    }
}

#[cfg(test)]
mod tests {
    use vsh_core::Context;

    use super::*;

    #[test]
    fn true_exits_zero() {
        let context = Context::default();
        let args = Args::new(vec!["true".into()], String::new(), &context);
        assert_eq!(True.run(args).code, status::SUCCESS);
    }

    #[test]
    fn false_exits_non_zero() {
        let context = Context::default();
        let args = Args::new(vec!["false".into()], String::new(), &context);
        assert_eq!(False.run(args).code, status::GENERAL_ERROR);
    }
}
