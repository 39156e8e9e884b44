use crate::Context;

/// Arguments that can be passed to a command.
pub struct Args<'a> {
    /// Argument list for the command. The first argument is the command's
    /// own name.
    pub args: Vec<String>,

    /// Buffered standard input for the command.
    pub stdin: String,

    /// Execution context for the command. Read-only; mutations are
    /// requested through [`Action`](super::Action)s.
    pub context: &'a Context,
}

impl<'a> Args<'a> {
    /// Constructs arguments for a command invocation.
    pub fn new(args: Vec<String>, stdin: String, context: &'a Context) -> Self {
        Self {
            args,
            stdin,
            context,
        }
    }
}
