//! Command dispatch logic for arbor

use std::time::Instant;

use crate::cli::Cli;
use arbor_core::error::Result;
use tracing::debug;

mod command;
mod handlers;
mod macros;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    debug!(elapsed = ?start.elapsed(), "dispatch");

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
