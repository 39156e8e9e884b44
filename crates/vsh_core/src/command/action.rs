/// A pending mutation requested by a command.
///
/// Actions allow commands to request tasks that the shell session is
/// responsible for, and that a command itself must not perform directly.
/// The executor accumulates actions in tree-execution order without
/// applying them; the owning session applies them through
/// [`Context::apply_actions`](crate::Context::apply_actions) after a
/// command tree finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Set an environment variable.
    SetVar(String, String),

    /// Remove an environment variable.
    UnsetVar(String),

    /// Register an alias.
    SetAlias(String, String),

    /// Remove an alias.
    UnsetAlias(String),

    /// Terminate the shell session with an exit code.
    Exit(i32),
}
