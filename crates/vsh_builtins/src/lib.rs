mod alias;
mod cat;
mod echo;
mod env;
mod exit;
mod export;
mod history;
mod logic;
mod sleep;
mod status;
mod unalias;
mod unset;
mod utils;
mod wc;

pub use alias::Alias;
pub use cat::Cat;
pub use echo::Echo;
pub use env::Env;
pub use exit::Exit;
pub use export::Export;
pub use history::History;
pub use logic::{False, True};
pub use sleep::Sleep;
pub use unalias::Unalias;
pub use unset::Unset;
pub use wc::Wc;

/// Returns all built-in commands provided by this crate.
pub fn all_builtins() -> Vec<Box<dyn vsh_core::command::Command>> {
    vec![
        Box::new(Alias),
        Box::new(Cat),
        Box::new(Echo),
        Box::new(Env),
        Box::new(Exit),
        Box::new(Export),
        Box::new(False),
        Box::new(History),
        Box::new(Sleep),
        Box::new(True),
        Box::new(Unalias),
        Box::new(Unset),
        Box::new(Wc),
    ]
}
