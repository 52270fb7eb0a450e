//! `arbor recall` command - estimated recall probability of every note
//!
//! Values are computed on the fly and never written back.

use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::cli::{Cli, OutputFormat};
use arbor_core::config::RecallConfig;
use arbor_core::document::Document;
use arbor_core::error::Result;
use arbor_core::store::load_document;

/// Execute the recall command
pub fn execute(cli: &Cli, path: &Path, config: &RecallConfig, at: DateTime<Utc>) -> Result<()> {
    let mut document = load_document(path)?;
    document.annotate_recall(config, at);

    match cli.format {
        OutputFormat::Json => {
            let notes: Vec<_> = document
                .notes
                .iter()
                .map(|(coordinate, note)| {
                    serde_json::json!({
                        "coordinate": coordinate,
                        "title": note.title,
                        "reviews": note.reviews.len(),
                        "recall_probability": note.recall_probability,
                    })
                })
                .collect();
            let output = serde_json::json!({
                "path": path.display().to_string(),
                "at": at.to_rfc3339_opts(SecondsFormat::Secs, true),
                "notes": notes,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if document.notes.is_empty() {
                if !cli.quiet {
                    println!("No notes");
                }
                return Ok(());
            }
            print!("{}", render_recall(&document));
        }
    }

    Ok(())
}

fn render_recall(document: &Document) -> String {
    let mut out = String::new();
    for (coordinate, note) in &document.notes {
        let indent = "  ".repeat(coordinate.depth().saturating_sub(1));
        let recall = note.recall_probability.unwrap_or_default();
        out.push_str(&format!(
            "{}{} {}  {:.3}\n",
            indent, coordinate, note.title, recall
        ));
    }
    out
}
