use std::sync::Arc;

use vsh_core::{Context, MemFileSystem};

use crate::run::DEFAULT_PROMPT;

/// Constructs the shell's initial execution context.
///
/// The virtual file store starts with a small seed so that file builtins
/// have something to work with in a fresh session.
pub(crate) fn init_context() -> Context {
    let mut fs = MemFileSystem::new();
    fs.insert("/etc/motd", "Welcome to vsh.\n");

    let mut context = Context::new(Arc::new(parking_lot::Mutex::new(fs)));
    context.set_var("PS1".to_owned(), DEFAULT_PROMPT.to_owned());

    if let Ok(user) = std::env::var("USER") {
        context.set_var("USER".to_owned(), user);
    }
    if let Some(home) = dirs::home_dir() {
        context.set_var("HOME".to_owned(), home.to_string_lossy().into_owned());
    }

    context
}
