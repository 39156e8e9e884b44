use super::{Shell, ShellInput};

/// A non-interactive shell that provides a single predefined command line.
pub(crate) struct SingleCommandShell {
    command: Option<String>,
}

impl SingleCommandShell {
    /// Constructs a new shell for a single command line.
    pub fn new(command: String) -> Self {
        Self {
            command: Some(command),
        }
    }
}

impl Shell for SingleCommandShell {
    fn prompt_line(&mut self, _prompt: &str) -> ShellInput {
        match self.command.take() {
            Some(command) => ShellInput::Line(command),
            None => ShellInput::None,
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }

    fn add_history_entry(&mut self, _line: &str) {}
}
