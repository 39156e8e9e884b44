mod init;
mod run;
mod shell;

use std::path::PathBuf;
use std::sync::atomic::Ordering;

use clap::{crate_version, Parser};
use vsh_builtins::all_builtins;
use vsh_exec::Executor;

use crate::shell::file_buffer_shell::FileBufferShell;
use crate::shell::interactive::RustylineShell;
use crate::shell::single_command_shell::SingleCommandShell;
use crate::shell::stdin_shell::StdinShell;
use crate::shell::Shell;

/// Command line options for the application's CLI.
#[derive(Parser)]
#[clap(
    about("A command shell over a virtual file store."),
    version(crate_version!())
)]
struct Opts {
    /// Command line to execute instead of prompting for input.
    #[clap(short, long, conflicts_with("input"))]
    command: Option<String>,

    /// Script file to execute.
    input: Option<PathBuf>,
}

/// Entrypoint for the application.
pub fn main() {
    let opts = Opts::parse();
    let mut context = init::init_context();

    // SIGINT requests a cooperative abort. The executor forwards the flag
    // and stops between pipeline stages and logical branches.
    let interrupt = context.interrupt_flag();
    if let Err(error) = ctrlc::set_handler(move || interrupt.store(true, Ordering::Relaxed)) {
        eprintln!("vsh: failed to install interrupt handler: {error}");
    }

    let shell: Box<dyn Shell> = match (opts.command, opts.input) {
        (Some(command), _) => Box::new(SingleCommandShell::new(command)),
        (None, Some(script_file)) => match FileBufferShell::new(&script_file) {
            Ok(shell) => Box::new(shell),
            Err(error) => {
                eprintln!("vsh: {}: {error}", script_file.display());
                std::process::exit(1);
            }
        },
        (None, None) if atty::is(atty::Stream::Stdin) => Box::new(RustylineShell::new()),
        (None, None) => Box::new(StdinShell::new()),
    };

    let executor = Executor::new(all_builtins());
    let code = run::run_shell(shell, &mut context, &executor);
    std::process::exit(code);
}
