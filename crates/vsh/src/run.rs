use std::mem::take;

use ansi_term::Colour;
use vsh_core::command::CommandResult;
use vsh_core::Context;
use vsh_exec::Executor;
use vsh_parse::{parse_line, ParseError};

use crate::shell::{Shell, ShellInput};

/// Prompt used when the context does not define `PS1`.
pub(crate) const DEFAULT_PROMPT: &str = "vsh$ ";

/// Exit code reported for lines that fail to lex or parse.
const SYNTAX_ERROR: i32 = 2;

/// Main loop for running a [`Shell`] against an execution context.
///
/// Each prompted line runs through the front end (lexing, alias and
/// variable expansion, parsing) and is executed one command tree at a time.
/// Pending actions are applied between trees, so an `export` in an earlier
/// `;`-segment is visible to later segments only through the context, not
/// through the already-expanded line.
///
/// Returns the shell's final exit code.
pub(crate) fn run_shell(
    mut shell: Box<dyn Shell>,
    context: &mut Context,
    executor: &Executor,
) -> i32 {
    loop {
        let prompt = prompt_text(context, shell.is_interactive());

        let line = match shell.prompt_line(&prompt) {
            ShellInput::Line(line) => line,
            ShellInput::Interrupt => continue,
            ShellInput::Logout => {
                eprintln!("vsh: logout");
                break;
            }
            ShellInput::None => break,
        };

        if line.trim().is_empty() {
            continue;
        }

        shell.add_history_entry(line.trim());
        context.history.push(line.trim().to_owned());
        context.clear_interrupt();

        match parse_line(&line, &context.aliases, &context.vars) {
            Ok(commands) => {
                for command in commands {
                    let mut result = executor.execute(command, context);
                    print_result(&result);
                    context.last_exit = result.code;

                    let actions = take(&mut result.actions);
                    if let Some(code) = context.apply_actions(actions) {
                        return code;
                    }

                    // An interrupt abandons the remaining segments of the
                    // current line.
                    if context.is_interrupted() {
                        break;
                    }
                }
            }
            Err(error) => {
                print_parse_error(&error);
                context.last_exit = SYNTAX_ERROR;
            }
        }
    }

    context.last_exit
}

/// Returns the prompt for the next line of input.
///
/// Non-interactive shells are not prompted.
fn prompt_text(context: &Context, interactive: bool) -> String {
    if !interactive {
        return String::new();
    }

    context
        .get_var("PS1")
        .unwrap_or(DEFAULT_PROMPT)
        .to_owned()
}

/// Prints a command result's buffered output.
fn print_result(result: &CommandResult) {
    print!("{}", result.stdout);

    if !result.stderr.is_empty() {
        eprint!("{}", result.stderr);
        if !result.stderr.ends_with('\n') {
            eprintln!();
        }
    }
}

/// Prints a front-end error, colored when stderr is a terminal.
fn print_parse_error(error: &ParseError) {
    let message = format!("vsh: {error}");
    if atty::is(atty::Stream::Stderr) {
        eprintln!("{}", Colour::Red.paint(message));
    } else {
        eprintln!("{message}");
    }
}
