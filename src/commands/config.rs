//! `arbor config` command - inspect or initialize configuration

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use arbor_core::config::ArborConfig;
use arbor_core::error::{ArborError, Result};

/// Execute the config command
pub fn execute(cli: &Cli, explicit: Option<&Path>, init: bool, force: bool) -> Result<()> {
    if init {
        return write_default(cli, explicit, force);
    }

    let config = ArborConfig::resolve(explicit)?;
    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
        OutputFormat::Human => print!("{}", config.to_toml()?),
    }
    Ok(())
}

fn write_default(cli: &Cli, explicit: Option<&Path>, force: bool) -> Result<()> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => ArborConfig::default_path()?,
    };

    if path.exists() && !force {
        return Err(ArborError::UsageError(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    ArborConfig::default().save(&path)?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({ "path": path.display().to_string() });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Wrote {}", path.display());
            }
        }
    }
    Ok(())
}
