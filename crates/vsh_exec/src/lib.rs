mod executor;
mod exit;

#[cfg(test)]
mod tests;

pub use executor::Executor;
pub use exit::{EXIT_COMMAND_NOT_FOUND, EXIT_GENERAL_ERROR, EXIT_INTERRUPTED, EXIT_SUCCESS};
