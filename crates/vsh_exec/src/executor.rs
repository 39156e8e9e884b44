use std::collections::HashMap;
use std::mem::take;

use vsh_ast::{LogicalOp, LogicalSequence, ParsedCommand, Pipeline, RedirectMode, SimpleCommand};
use vsh_core::command::{self, Args, CommandResult};
use vsh_core::Context;

use crate::exit::{EXIT_COMMAND_NOT_FOUND, EXIT_GENERAL_ERROR, EXIT_INTERRUPTED, EXIT_SUCCESS};

/// An executor is responsible for executing a parsed command tree.
///
/// Execution never fails past this boundary: every failure, including
/// unresolved command names and storage errors, becomes a [`CommandResult`]
/// with a non-zero exit code.
#[derive(Clone)]
pub struct Executor {
    /// Built-in commands keyed by their name.
    builtins: HashMap<String, Box<dyn command::Command>>,

    /// Installed programs keyed by their name. Resolved after builtins.
    programs: HashMap<String, Box<dyn command::Command>>,
}

impl Executor {
    /// Creates an executor for a set of built-in commands.
    pub fn new(commands: Vec<Box<dyn command::Command>>) -> Self {
        let mut builtins = HashMap::with_capacity(commands.len());
        for command in commands {
            builtins.insert(command.name().to_owned(), command);
        }

        Self {
            builtins,
            programs: HashMap::new(),
        }
    }

    /// Registers a built-in command within the executor.
    ///
    /// Any previous built-in command with the same name is replaced.
    pub fn register_builtin(&mut self, builtin: Box<dyn command::Command>) {
        self.builtins.insert(builtin.name().to_owned(), builtin);
    }

    /// Registers an installed program within the executor.
    ///
    /// Programs resolve after builtins with the same name.
    pub fn register_program(&mut self, program: Box<dyn command::Command>) {
        self.programs.insert(program.name().to_owned(), program);
    }

    /// Executes a [`ParsedCommand`] tree to completion.
    ///
    /// Pending [`Action`](command::Action)s requested by commands are
    /// accumulated in tree-execution order on the returned result; the
    /// caller is responsible for applying them.
    pub fn execute(&self, command: ParsedCommand, context: &Context) -> CommandResult {
        match command {
            ParsedCommand::Simple(simple) => {
                let stdin = context.stdin.clone();
                self.execute_simple(simple, context, stdin)
            }
            ParsedCommand::Pipeline(pipeline) => self.execute_pipeline(pipeline, context),
            ParsedCommand::Logical(sequence) => self.execute_logical(sequence, context),
        }
    }

    /// Executes a [`SimpleCommand`] with a predetermined standard input.
    fn execute_simple(
        &self,
        command: SimpleCommand,
        context: &Context,
        stdin: String,
    ) -> CommandResult {
        if context.is_interrupted() {
            return CommandResult::error(EXIT_INTERRUPTED, "interrupted");
        }

        let (args, input_redirect) = split_input_redirect(command.args);

        // An input redirect replaces the inherited standard input.
        let stdin = match input_redirect {
            Some(path) => match context.fs.lock().read(&path) {
                Ok(contents) => contents,
                Err(error) => {
                    return CommandResult::error(EXIT_GENERAL_ERROR, format!("{path}: {error}"))
                }
            },
            None => stdin,
        };

        let Some(resolved) = self.resolve(&command.command) else {
            return CommandResult::error(
                EXIT_COMMAND_NOT_FOUND,
                format!("{}: command not found", command.command),
            );
        };

        // The command trait expects the first argument to be the command's
        // own name.
        let mut argv = Vec::with_capacity(args.len() + 1);
        argv.push(command.command);
        argv.extend(args);

        let mut result = resolved.run(Args::new(argv, stdin, context));

        // Output redirects consume the command's standard output.
        if !command.redirects.is_empty() {
            let stdout = take(&mut result.stdout);
            for redirect in &command.redirects {
                let written = match redirect.mode {
                    RedirectMode::Write => context.fs.lock().write(&redirect.target, &stdout),
                    RedirectMode::Append => context.fs.lock().append(&redirect.target, &stdout),
                };

                if let Err(error) = written {
                    result.code = EXIT_GENERAL_ERROR;
                    push_error_line(
                        &mut result.stderr,
                        &format!("{}: {}", redirect.target, error),
                    );
                }
            }
        }

        result
    }

    /// Executes a [`Pipeline`] by running its stages strictly left to
    /// right.
    ///
    /// Each stage receives the previous stage's fully buffered output as
    /// its standard input; the first stage inherits the context's input.
    /// The pipeline's own output, error output, and exit code are exactly
    /// the last stage's. An unresolved command in a non-final stage only
    /// forwards empty input to the next stage.
    fn execute_pipeline(&self, pipeline: Pipeline, context: &Context) -> CommandResult {
        let mut stdin = context.stdin.clone();
        let mut actions = Vec::new();
        let mut result = CommandResult::code(EXIT_SUCCESS);

        let last = pipeline.stages.len().saturating_sub(1);
        for (index, stage) in pipeline.stages.into_iter().enumerate() {
            result = self.execute_simple(stage, context, take(&mut stdin));
            actions.append(&mut result.actions);

            if index < last {
                stdin = take(&mut result.stdout);
            }
        }

        result.actions = actions;
        result
    }

    /// Executes a [`LogicalSequence`] with short-circuit evaluation.
    ///
    /// Any non-zero exit code counts as failure, regardless of its cause.
    fn execute_logical(&self, sequence: LogicalSequence, context: &Context) -> CommandResult {
        let mut left = self.execute(*sequence.left, context);

        let evaluate_right = match sequence.operator {
            LogicalOp::And => left.code == EXIT_SUCCESS,
            LogicalOp::Or => left.code != EXIT_SUCCESS,
        };
        if !evaluate_right {
            return left;
        }

        let mut right = self.execute(*sequence.right, context);

        // The left operand's pending actions precede the right's.
        let mut actions = take(&mut left.actions);
        actions.append(&mut right.actions);
        right.actions = actions;
        right
    }

    /// Resolves a command name against the builtin registry, then the
    /// installed-program registry.
    fn resolve(&self, name: &str) -> Option<&dyn command::Command> {
        self.builtins
            .get(name)
            .or_else(|| self.programs.get(name))
            .map(|command| command.as_ref())
    }
}

/// Splits input-redirect arguments (`<path`) from a command's argument
/// list.
///
/// Input redirection is an argument-level convention rather than grammar.
/// When several input redirects are present, the last one wins.
fn split_input_redirect(args: Vec<String>) -> (Vec<String>, Option<String>) {
    let mut input = None;
    let mut remaining = Vec::with_capacity(args.len());

    for arg in args {
        match arg.strip_prefix('<') {
            // A lone "<" stays an ordinary argument.
            Some(path) if !path.is_empty() => input = Some(path.to_owned()),
            _ => remaining.push(arg),
        }
    }

    (remaining, input)
}

/// Appends an error line to buffered error output, keeping previous lines
/// intact.
fn push_error_line(stderr: &mut String, message: &str) {
    if !stderr.is_empty() && !stderr.ends_with('\n') {
        stderr.push('\n');
    }
    stderr.push_str(message);
    stderr.push('\n');
}
