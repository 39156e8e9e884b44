/// A command represents a single action that should be executed within the
/// shell.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SimpleCommand {
    /// Name of the command to execute.
    pub command: String,

    /// Ordered list of arguments for the command. Does not include the
    /// command name itself.
    pub args: Vec<String>,

    /// Output redirects to apply after executing the command.
    pub redirects: Vec<Redirect>,
}

impl SimpleCommand {
    /// Constructs a new command without arguments or redirects.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
            redirects: Vec::new(),
        }
    }

    /// Appends an argument to the command.
    pub fn arg(&mut self, arg: String) {
        self.args.push(arg);
    }

    /// Appends a redirect to the command's redirection list.
    pub fn redirect(&mut self, redirect: Redirect) {
        self.redirects.push(redirect);
    }
}

/// An output redirect, sending a command's standard output to a file within
/// the virtual file store.
///
/// Input redirection is not part of the grammar. An argument of the form
/// `<path` is an executor-level convention marking "read `path` as stdin".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    /// How the target file is written.
    pub mode: RedirectMode,

    /// Path of the target file.
    pub target: String,
}

impl Redirect {
    /// Constructs a new redirect.
    pub fn new(mode: RedirectMode, target: impl Into<String>) -> Self {
        Self {
            mode,
            target: target.into(),
        }
    }
}

/// A mode of operation for a [`Redirect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectMode {
    /// ">" - replace the target file's contents.
    Write,

    /// ">>" - append to the target file.
    Append,
}
