//! Document lifecycle: create, update, record reviews, read recall
//!
//! A document owns the raw markdown and the notes derived from it. Callers
//! persisting documents must serialize updates of the same document; nothing
//! here locks.

use crate::config::RecallConfig;
use crate::coordinate::Coordinate;
use crate::delta::{delta, ContentDelta};
use crate::error::{ArborError, Result};
use crate::note::{synthesize, NoteMap, NoteReview, ReviewType};
use crate::outline::parse;
use crate::reconcile::{reconcile_outline, ReconcileStats};
use crate::recall::annotate_recall;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

/// A markdown document and its notes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub notes: NoteMap,
}

/// What an update did to the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Text identical to the stored text; nothing changed
    Unchanged,
    /// Text replaced and notes reconciled
    Updated {
        delta: ContentDelta,
        stats: ReconcileStats,
    },
}

/// Title of a document: the text of its first `# ` line, or empty
pub fn extract_title(text: &str) -> String {
    text.lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim_end().to_string())
        .unwrap_or_default()
}

impl Document {
    /// New document with one fresh note per section
    #[tracing::instrument(skip(text), fields(chars = text.len()))]
    pub fn create(text: &str, now: DateTime<Utc>) -> Self {
        let notes = synthesize(&parse(text), now);
        debug!(notes = notes.len(), "created document");
        Document {
            title: extract_title(text),
            content: text.to_string(),
            notes,
        }
    }

    /// Replace the document text, reconciling notes so history survives.
    ///
    /// Identical text is a no-op.
    #[tracing::instrument(skip(self, text), fields(chars = text.len()))]
    pub fn update(&mut self, text: &str, threshold: f64, now: DateTime<Utc>) -> UpdateOutcome {
        let start = Instant::now();
        let change = delta(&self.content, text);
        if change.is_empty() {
            debug!("document unchanged");
            return UpdateOutcome::Unchanged;
        }

        let (notes, stats) = reconcile_outline(&self.notes, &parse(text), threshold, now);
        self.title = extract_title(text);
        self.content = text.to_string();
        self.notes = notes;
        crate::trace_time!(start, "update", notes = self.notes.len());

        info!(
            added = change.added,
            deleted = change.deleted,
            inherited = stats.inherited,
            fresh = stats.fresh,
            "document updated"
        );
        UpdateOutcome::Updated {
            delta: change,
            stats,
        }
    }

    /// Append a review to the note at `coordinate`.
    ///
    /// This is the validation boundary for reviews: the recall estimator
    /// trusts whatever is stored.
    pub fn record_review(
        &mut self,
        coordinate: &Coordinate,
        review_type: ReviewType,
        score: f64,
        now: DateTime<Utc>,
    ) -> Result<()> {
        if !score.is_finite() || !(0.0..=1.0).contains(&score) {
            crate::bail_invalid!("score", score);
        }

        let note = self
            .notes
            .get_mut(coordinate)
            .ok_or_else(|| ArborError::NoteNotFound {
                coordinate: coordinate.to_string(),
            })?;

        note.reviews.push(NoteReview {
            review_type,
            score,
            timestamp: now,
        });
        debug!(coordinate = %coordinate, %review_type, score, "recorded review");
        Ok(())
    }

    /// Compute recall probabilities for every note at `now`
    pub fn annotate_recall(&mut self, config: &RecallConfig, now: DateTime<Utc>) {
        annotate_recall(&mut self.notes, config, now);
    }

    /// Drop derived recall values so only source data is persisted
    pub fn clear_recall(&mut self) {
        for note in self.notes.values_mut() {
            note.recall_probability = None;
        }
    }
}
