use clap::Parser;
use vsh_core::command::{Args, Command, CommandResult};

use crate::{status, utils};

/// Command name.
const NAME: &str = "sleep";

/// Time unit for a sleep duration.
#[derive(Debug, Clone, clap::ValueEnum)]
enum TimeUnit {
    Seconds,
    Minutes,
}

/// Wait for some time to pass.
///
/// This is a built-in shell command. It suspends the current evaluation;
/// the executor waits for it like for any other command.
#[derive(Debug, Parser)]
#[clap(name = NAME, version)]
struct SleepOpts {
    /// Duration to sleep.
    duration: u64,

    /// Time unit for the sleep duration.
    #[clap(value_enum, default_value = "seconds")]
    unit: TimeUnit,
}

/// Implementation for the "sleep" built-in command.
#[derive(Clone)]
pub struct Sleep;
impl Command for Sleep {
    fn name(&self) -> &str {
        NAME
    }

    fn run(&self, args: Args) -> CommandResult {
        match SleepOpts::try_parse_from(&args.args) {
            Ok(opts) => sleep(opts),
            Err(error) => utils::exit_with_parse_error(error),
        }
    }
}

/// Sleeps on the current thread for a while.
fn sleep(opts: SleepOpts) -> CommandResult {
    // Exit early to avoid platform-specific system calls in
    // std::thread::sleep.
    if opts.duration == 0 {
        return CommandResult::code(status::SUCCESS);
    }

    std::thread::sleep(duration(&opts));
    CommandResult::code(status::SUCCESS)
}

/// Parses a [`std::time::Duration`] from [`SleepOpts`].
fn duration(opts: &SleepOpts) -> std::time::Duration {
    match opts.unit {
        TimeUnit::Seconds => std::time::Duration::from_secs(opts.duration),
        TimeUnit::Minutes => std::time::Duration::from_secs(opts.duration * 60),
    }
}
