//! `arbor update` command - replace a document's markdown
//!
//! Notes are reconciled against the new text so edit and review history
//! follows sections that moved or were lightly edited.

use std::path::Path;

use chrono::{DateTime, Utc};

use crate::cli::{Cli, OutputFormat};
use crate::commands::input::read_source;
use arbor_core::document::UpdateOutcome;
use arbor_core::error::Result;
use arbor_core::store::{load_document, save_document};

/// Execute the update command
pub fn execute(
    cli: &Cli,
    path: &Path,
    input: &str,
    threshold: f64,
    now: DateTime<Utc>,
) -> Result<()> {
    if !threshold.is_finite() || threshold <= 0.0 {
        arbor_core::bail_invalid!("threshold", threshold);
    }

    let mut document = load_document(path)?;
    let text = read_source(input)?;
    let outcome = document.update(&text, threshold, now);

    if let UpdateOutcome::Updated { .. } = outcome {
        save_document(path, &document)?;
    }

    match cli.format {
        OutputFormat::Json => {
            let output = match outcome {
                UpdateOutcome::Unchanged => serde_json::json!({
                    "path": path.display().to_string(),
                    "changed": false,
                }),
                UpdateOutcome::Updated { delta, stats } => serde_json::json!({
                    "path": path.display().to_string(),
                    "changed": true,
                    "added_chars": delta.added,
                    "deleted_chars": delta.deleted,
                    "inherited": stats.inherited,
                    "fresh": stats.fresh,
                    "notes": document.notes.len(),
                }),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if cli.quiet {
                return Ok(());
            }
            match outcome {
                UpdateOutcome::Unchanged => println!("{} unchanged", path.display()),
                UpdateOutcome::Updated { delta, stats } => println!(
                    "Updated {} (+{} -{} chars, {} notes kept history, {} new)",
                    path.display(),
                    delta.added,
                    delta.deleted,
                    stats.inherited,
                    stats.fresh
                ),
            }
        }
    }

    Ok(())
}
