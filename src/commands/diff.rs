//! `arbor diff` command - character delta between two texts

use crate::cli::{Cli, OutputFormat};
use crate::commands::input::{read_source, STDIN};
use arbor_core::delta::delta;
use arbor_core::error::{ArborError, Result};

/// Execute the diff command
pub fn execute(cli: &Cli, before: &str, after: &str) -> Result<()> {
    if before == STDIN && after == STDIN {
        return Err(ArborError::UsageError(
            "only one side of a diff can be read from stdin".to_string(),
        ));
    }

    let change = delta(&read_source(before)?, &read_source(after)?);

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "added_chars": change.added,
                "deleted_chars": change.deleted,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => println!("+{} -{}", change.added, change.deleted),
    }

    Ok(())
}
