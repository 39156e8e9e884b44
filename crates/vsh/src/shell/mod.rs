pub(crate) mod file_buffer_shell;
pub(crate) mod interactive;
pub(crate) mod single_command_shell;
pub(crate) mod stdin_shell;

/// Input returned when prompting a [`Shell`] for a line.
pub(crate) enum ShellInput {
    /// A line of input.
    Line(String),

    /// Interrupt the current input.
    Interrupt,

    /// Exit the shell.
    Logout,

    /// No input.
    None,
}

/// A source of command lines for the shell session.
pub(crate) trait Shell {
    /// Prompts for a line of input using a `prompt` text.
    fn prompt_line(&mut self, prompt: &str) -> ShellInput;

    /// Returns `true` if the shell is run interactively, i.e. the user can
    /// be prompted for additional input.
    fn is_interactive(&self) -> bool;

    /// Appends a line entry to the shell's history.
    ///
    /// This feature is optional to implement, and may be a no-op.
    fn add_history_entry(&mut self, line: &str);
}
