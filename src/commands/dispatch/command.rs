//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use arbor_core::config::ArborConfig;
use arbor_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Configuration from `--config` or the default location
    pub fn load_config(&self) -> Result<ArborConfig> {
        ArborConfig::resolve(self.cli.config.as_deref())
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("arbor {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Markdown notes that remember their edit and review history.");
        println!();
        println!("Run `arbor --help` for usage information.");
        Ok(())
    }
}
