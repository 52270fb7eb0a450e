//! `arbor review` command - record a review of one note

use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::cli::{Cli, OutputFormat};
use arbor_core::coordinate::Coordinate;
use arbor_core::error::Result;
use arbor_core::note::ReviewType;
use arbor_core::store::{load_document, save_document};

/// Execute the review command
pub fn execute(
    cli: &Cli,
    path: &Path,
    coordinate: &Coordinate,
    review_type: ReviewType,
    score: f64,
    at: DateTime<Utc>,
) -> Result<()> {
    let mut document = load_document(path)?;
    document.record_review(coordinate, review_type, score, at)?;
    save_document(path, &document)?;

    let reviews = document
        .notes
        .get(coordinate)
        .map_or(0, |note| note.reviews.len());

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "path": path.display().to_string(),
                "coordinate": coordinate,
                "review_type": review_type,
                "score": score,
                "timestamp": at.to_rfc3339_opts(SecondsFormat::Secs, true),
                "reviews": reviews,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!(
                    "Recorded {} review of {} (score {:.2}, {} total)",
                    review_type, coordinate, score, reviews
                );
            }
        }
    }

    Ok(())
}
