use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::command::Action;
use crate::{FileSystem, MemFileSystem};

/// An execution context for evaluating command trees.
///
/// The context is owned by the shell session and lives across many
/// command-line evaluations. The executor and the builtins treat it as
/// read-mostly: mutations are requested through [`Action`]s and applied by
/// the session via [`Context::apply_actions`] after a tree finishes.
#[derive(Clone)]
pub struct Context {
    /// Buffered standard input inherited by the first command of a tree.
    pub stdin: String,

    /// Environment variables.
    pub vars: HashMap<String, String>,

    /// Registered aliases keyed by their name.
    pub aliases: HashMap<String, String>,

    /// Previously submitted lines, oldest first.
    pub history: Vec<String>,

    /// The storage capability used for redirects and file builtins.
    pub fs: Arc<parking_lot::Mutex<dyn FileSystem>>,

    /// The exit code of the most recently evaluated command tree.
    pub last_exit: i32,

    /// Cooperative abort flag, set by the session on user interrupt.
    interrupt: Arc<AtomicBool>,
}

impl Context {
    /// Constructs a new context around a storage capability.
    pub fn new(fs: Arc<parking_lot::Mutex<dyn FileSystem>>) -> Self {
        Self {
            stdin: String::new(),
            vars: HashMap::new(),
            aliases: HashMap::new(),
            history: Vec::new(),
            fs,
            last_exit: 0,
            interrupt: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Returns the value of an environment variable.
    pub fn get_var<'a>(&'a self, name: &str) -> Option<&'a str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Sets the value of an environment variable.
    pub fn set_var(&mut self, name: String, value: String) {
        self.vars.insert(name, value);
    }

    /// Applies pending mutations requested by commands.
    ///
    /// Returns the requested shell exit code if any of the actions asked
    /// the session to terminate.
    pub fn apply_actions(&mut self, actions: Vec<Action>) -> Option<i32> {
        let mut exit = None;
        for action in actions {
            match action {
                Action::SetVar(name, value) => {
                    self.vars.insert(name, value);
                }
                Action::UnsetVar(name) => {
                    self.vars.remove(&name);
                }
                Action::SetAlias(name, value) => {
                    self.aliases.insert(name, value);
                }
                Action::UnsetAlias(name) => {
                    self.aliases.remove(&name);
                }
                Action::Exit(code) => exit = Some(code),
            }
        }
        exit
    }

    /// Returns a handle to the cooperative abort flag.
    ///
    /// The session hands this to its interrupt source (e.g. a SIGINT
    /// handler); the executor only ever reads it.
    pub fn interrupt_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.interrupt)
    }

    /// Returns `true` if an interrupt has been requested.
    pub fn is_interrupted(&self) -> bool {
        self.interrupt.load(Ordering::Relaxed)
    }

    /// Clears a previously requested interrupt.
    pub fn clear_interrupt(&self) {
        self.interrupt.store(false, Ordering::Relaxed);
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new(Arc::new(parking_lot::Mutex::new(MemFileSystem::new())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_set_vars() {
        let mut context = Context::default();
        assert_eq!(context.get_var("unset"), None);

        context.set_var("X".into(), "1".into());
        assert_eq!(context.get_var("X"), Some("1"));
    }

    #[test]
    fn apply_actions_mutates_vars_and_aliases() {
        let mut context = Context::default();
        context.set_var("OLD".into(), "1".into());
        context.aliases.insert("gone".into(), "rm".into());

        let exit = context.apply_actions(vec![
            Action::SetVar("X".into(), "1".into()),
            Action::UnsetVar("OLD".into()),
            Action::SetAlias("ll".into(), "ls -l".into()),
            Action::UnsetAlias("gone".into()),
        ]);

        assert_eq!(exit, None);
        assert_eq!(context.get_var("X"), Some("1"));
        assert_eq!(context.get_var("OLD"), None);
        assert_eq!(context.aliases.get("ll"), Some(&"ls -l".to_string()));
        assert_eq!(context.aliases.get("gone"), None);
    }

    #[test]
    fn apply_actions_reports_exit_requests() {
        let mut context = Context::default();
        let exit = context.apply_actions(vec![
            Action::SetVar("X".into(), "1".into()),
            Action::Exit(3),
        ]);

        assert_eq!(exit, Some(3));
        assert_eq!(context.get_var("X"), Some("1"), "actions before exit still apply");
    }

    #[test]
    fn interrupt_flag_is_shared() {
        let context = Context::default();
        assert!(!context.is_interrupted());

        let flag = context.interrupt_flag();
        flag.store(true, std::sync::atomic::Ordering::Relaxed);
        assert!(context.is_interrupted());

        context.clear_interrupt();
        assert!(!context.is_interrupted());
    }
}
