use std::borrow::Cow;
use std::path::PathBuf;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{Highlighter, MatchingBracketHighlighter};
use rustyline::hint::{Hinter, HistoryHinter};
use rustyline::validate::{self, ValidationResult, Validator};
use rustyline::{Config, Editor};
use rustyline_derive::Helper;

use super::{Shell, ShellInput};

/// History file within the current user's home directory.
const USER_HISTORY_FILE_NAME: &str = ".vsh/history.txt";

/// An interactive shell that prompts the user for input.
///
/// Reads input from stdin through a rustyline editor.
pub(crate) struct RustylineShell {
    editor: Editor<ShellHelper, rustyline::history::FileHistory>,
}

impl RustylineShell {
    /// Constructs a new interactive shell.
    pub fn new() -> Self {
        let helper = ShellHelper {
            highlighter: MatchingBracketHighlighter::new(),
            hinter: HistoryHinter {},
        };

        let config = Config::builder().build();
        let mut editor =
            Editor::with_config(config).expect("terminal editor should be configured");
        editor.set_helper(Some(helper));

        let mut shell = Self { editor };
        shell.load_history_file();
        shell
    }

    /// Loads persisted history from the current user's history file.
    fn load_history_file(&mut self) {
        let history_file = history_file_path();
        if history_file.exists() {
            let _ = self.editor.load_history(&history_file);
        }
    }
}

impl Shell for RustylineShell {
    fn prompt_line(&mut self, prompt: &str) -> ShellInput {
        match self.editor.readline(prompt) {
            Ok(line) => ShellInput::Line(line),
            Err(ReadlineError::Interrupted) => ShellInput::Interrupt,
            Err(ReadlineError::Eof) => ShellInput::Logout,
            Err(error) => {
                eprintln!("vsh: unhandled input: {error}");
                ShellInput::None
            }
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn add_history_entry(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);

        let history_file = history_file_path();
        if let Some(parent) = history_file.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = self.editor.append_history(&history_file);
    }
}

/// Returns a path to the current user's shell history file.
fn history_file_path() -> PathBuf {
    let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/tmp"));
    path.push(USER_HISTORY_FILE_NAME);
    path
}

/// Rustyline shell helper for enhancing the user experience.
#[derive(Helper)]
struct ShellHelper {
    /// Text color highlighter.
    highlighter: MatchingBracketHighlighter,

    /// Suggestion hinter.
    hinter: HistoryHinter,
}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        _line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> Result<(usize, Vec<Pair>), ReadlineError> {
        // Completion is backed by external registries that are not wired
        // into the line editor.
        Ok((pos, Vec::new()))
    }
}

impl Hinter for ShellHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &rustyline::Context<'_>) -> Option<String> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl Highlighter for ShellHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned("\x1b[2m".to_owned() + hint + "\x1b[m")
    }

    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_char(&self, line: &str, pos: usize) -> bool {
        self.highlighter.highlight_char(line, pos)
    }
}

impl Validator for ShellHelper {
    fn validate(&self, _: &mut validate::ValidationContext) -> rustyline::Result<ValidationResult> {
        // The lexer/parser is responsible for validating input. The
        // interactive shell considers all input valid at this point.
        rustyline::Result::Ok(ValidationResult::Valid(None))
    }

    fn validate_while_typing(&self) -> bool {
        false
    }
}
