//! Completions command - emit shell completion scripts

use crate::cli::Cli;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Arguments for the completions command
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to emit a completion script for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Execute the completions command
///
/// Writes the script to stdout; see the subcommand help for install
/// locations per shell.
pub fn execute(args: CompletionsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut command = Cli::command();
    let bin_name = command.get_name().to_string();
    generate(args.shell, &mut command, bin_name, &mut io::stdout());
    Ok(())
}
