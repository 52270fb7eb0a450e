//! `arbor create` command - build a document from markdown

use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use crate::commands::input::read_source;
use arbor_core::document::Document;
use arbor_core::error::{ArborError, Result};
use arbor_core::store::save_document;

/// Execute the create command
pub fn execute(cli: &Cli, input: &str, out: &Path, force: bool, now: DateTime<Utc>) -> Result<()> {
    if out.exists() && !force {
        return Err(ArborError::UsageError(format!(
            "{} already exists (use --force to overwrite)",
            out.display()
        )));
    }

    let text = read_source(input)?;
    let document = Document::create(&text, now);
    save_document(out, &document)?;
    debug!(path = %out.display(), notes = document.notes.len(), "document created");

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "path": out.display().to_string(),
                "title": document.title,
                "notes": document.notes.len(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!(
                    "Created {} ({} notes)",
                    out.display(),
                    document.notes.len()
                );
            }
        }
    }

    Ok(())
}
