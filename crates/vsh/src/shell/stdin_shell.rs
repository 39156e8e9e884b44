use std::io::BufRead;

use super::{Shell, ShellInput};

/// A non-interactive shell that reads lines from standard input.
///
/// Used when input is piped into the shell rather than typed.
pub(crate) struct StdinShell;

impl StdinShell {
    /// Constructs a new shell reading from standard input.
    pub fn new() -> Self {
        Self
    }
}

impl Shell for StdinShell {
    fn prompt_line(&mut self, _prompt: &str) -> ShellInput {
        let mut line = String::new();
        match std::io::stdin().lock().read_line(&mut line) {
            Ok(0) => ShellInput::None,
            Ok(_) => ShellInput::Line(line),
            Err(error) => {
                eprintln!("vsh: failed to read input: {error}");
                ShellInput::None
            }
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }

    fn add_history_entry(&mut self, _line: &str) {}
}
