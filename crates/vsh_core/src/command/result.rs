use super::Action;

/// Represents the result of executing a command.
///
/// Output is fully buffered; there is no streaming between commands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    /// Exit code.
    ///
    /// Successful execution is represented by `0`.
    pub code: i32,

    /// Buffered standard output.
    pub stdout: String,

    /// Buffered standard error.
    pub stderr: String,

    /// Pending mutations that should be applied by the shell session after
    /// the current command tree finishes.
    pub actions: Vec<Action>,
}

impl CommandResult {
    /// Constructs a new result without output or actions.
    pub fn code(code: i32) -> Self {
        Self {
            code,
            ..Self::default()
        }
    }

    /// Constructs a successful result with standard output.
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            code: 0,
            stdout: stdout.into(),
            ..Self::default()
        }
    }

    /// Constructs a failed result with standard error output.
    pub fn error(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            code,
            stderr: stderr.into(),
            ..Self::default()
        }
    }

    /// Constructs a result with a code and some pending actions.
    pub fn with_actions(code: i32, actions: Vec<Action>) -> Self {
        Self {
            code,
            actions,
            ..Self::default()
        }
    }
}
