use std::collections::VecDeque;
use std::path::Path;

use super::{Shell, ShellInput};

/// A non-interactive shell that reads buffered lines from a script file.
pub(crate) struct FileBufferShell {
    lines: VecDeque<String>,
}

impl FileBufferShell {
    /// Constructs a new shell for a script file, reading it in full.
    pub fn new(script_file: &Path) -> std::io::Result<Self> {
        let contents = std::fs::read_to_string(script_file)?;
        Ok(Self {
            lines: contents.lines().map(str::to_owned).collect(),
        })
    }
}

impl Shell for FileBufferShell {
    fn prompt_line(&mut self, _prompt: &str) -> ShellInput {
        match self.lines.pop_front() {
            Some(line) => ShellInput::Line(line),
            None => ShellInput::None,
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }

    fn add_history_entry(&mut self, _line: &str) {}
}
