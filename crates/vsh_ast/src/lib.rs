mod command;
mod pipeline;
mod sequence;

pub use command::{Redirect, RedirectMode, SimpleCommand};
pub use pipeline::Pipeline;
pub use sequence::{LogicalOp, LogicalSequence};

/// A fully parsed shell statement.
///
/// One line of input parses into an ordered list of these trees, one per
/// top-level `;`-separated segment. Trees are created per submitted line,
/// consumed once by the executor, and discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    /// A single command invocation.
    Simple(SimpleCommand),

    /// Two or more commands joined by `|`.
    Pipeline(Pipeline),

    /// Two operands joined by `&&` or `||`.
    Logical(LogicalSequence),
}
