use vsh_ast::{ParsedCommand, SimpleCommand};
use vsh_core::command::{Action, Args, Command, CommandResult};

use crate::Executor;

/// Test command that exits with the code given as its first argument.
#[derive(Clone)]
pub(crate) struct Status;
impl Command for Status {
    fn name(&self) -> &str {
        "status"
    }

    fn run(&self, args: Args) -> CommandResult {
        let code = args
            .args
            .get(1)
            .and_then(|arg| arg.parse().ok())
            .unwrap_or(0);
        CommandResult::code(code)
    }
}

/// Test command that prints its arguments joined by single spaces.
#[derive(Clone)]
pub(crate) struct Print;
impl Command for Print {
    fn name(&self) -> &str {
        "print"
    }

    fn run(&self, args: Args) -> CommandResult {
        CommandResult::success(args.args[1..].join(" "))
    }
}

/// Test command that reverses the characters of its standard input.
#[derive(Clone)]
pub(crate) struct Reverse;
impl Command for Reverse {
    fn name(&self) -> &str {
        "reverse"
    }

    fn run(&self, args: Args) -> CommandResult {
        CommandResult::success(args.stdin.chars().rev().collect::<String>())
    }
}

/// Test command that prints the length of its standard input.
#[derive(Clone)]
pub(crate) struct Len;
impl Command for Len {
    fn name(&self) -> &str {
        "len"
    }

    fn run(&self, args: Args) -> CommandResult {
        CommandResult::success(args.stdin.len().to_string())
    }
}

/// Test command that requests a variable assignment through an action.
#[derive(Clone)]
pub(crate) struct Set;
impl Command for Set {
    fn name(&self) -> &str {
        "set"
    }

    fn run(&self, args: Args) -> CommandResult {
        let name = args.args.get(1).cloned().unwrap_or_default();
        let value = args.args.get(2).cloned().unwrap_or_default();
        CommandResult::with_actions(0, vec![Action::SetVar(name, value)])
    }
}

/// Constructs an executor with all test commands registered as builtins.
pub(crate) fn executor() -> Executor {
    Executor::new(vec![
        Box::new(Status),
        Box::new(Print),
        Box::new(Reverse),
        Box::new(Len),
        Box::new(Set),
    ])
}

/// Constructs a simple command AST node.
pub(crate) fn simple(command: &str, args: &[&str]) -> SimpleCommand {
    SimpleCommand {
        command: command.into(),
        args: args.iter().map(|arg| arg.to_string()).collect(),
        redirects: Vec::new(),
    }
}

/// Wraps a simple command in a [`ParsedCommand`].
pub(crate) fn simple_cmd(command: &str, args: &[&str]) -> ParsedCommand {
    ParsedCommand::Simple(simple(command, args))
}
