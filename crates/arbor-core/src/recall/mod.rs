//! Recall probability from review history
//!
//! Each review is treated as an independent chance of remembering the note,
//! decayed along a per-review-type forgetting curve. Chances combine with the
//! saturating rule `r + (1 - r) * x`, so recall only grows towards 1 as
//! evidence accumulates.
//!
//! Decay for every review is measured from the note's *first* review, not
//! from the review itself: rehearsals add evidence but do not reset the
//! clock.
//!
//! Notes inherit part of their parent's recall: a parent's value, attenuated
//! by the depth decay, tops up the child's own recall with the same rule.

use crate::config::{HalfLives, RecallConfig};
use crate::coordinate::Coordinate;
use crate::note::{NoteMap, NoteReview};
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Saturating combination of two independent recall chances
fn combine(recall: f64, chance: f64) -> f64 {
    recall + (1.0 - recall) * chance
}

/// Forgetting-curve model evaluated at a fixed instant
pub struct RecallEstimator<'a> {
    config: &'a RecallConfig,
    now: DateTime<Utc>,
}

impl<'a> RecallEstimator<'a> {
    pub fn new(config: &'a RecallConfig, now: DateTime<Utc>) -> Self {
        RecallEstimator { config, now }
    }

    /// Recall supported by a note's own reviews, ignoring its ancestors.
    ///
    /// Zero without reviews. Reviews are not validated here; the recorder
    /// is responsible for keeping scores within `[0, 1]`.
    pub fn self_recall(&self, reviews: &[NoteReview]) -> f64 {
        let mut sorted: Vec<&NoteReview> = reviews.iter().collect();
        sorted.sort_by_key(|review| review.timestamp);

        let Some(anchor) = sorted.first().map(|review| review.timestamp) else {
            return 0.0;
        };
        let elapsed_days = self.elapsed_days(anchor);
        let half_lives: &HalfLives = &self.config.half_life_days;

        sorted.iter().fold(0.0, |recall, review| {
            let half_life = half_lives.get(review.review_type);
            let chance = 0.5f64.powf(elapsed_days / half_life) * review.score;
            combine(recall, chance)
        })
    }

    /// Recall of a note whose parent ended at `parent_recall`
    pub fn final_recall(&self, reviews: &[NoteReview], parent_recall: f64) -> f64 {
        combine(
            self.self_recall(reviews),
            parent_recall * self.config.depth_decay,
        )
    }

    /// Set `recall_probability` on every note reachable from a top-level
    /// coordinate, parents before children.
    #[tracing::instrument(skip(self, notes), fields(notes = notes.len()))]
    pub fn annotate(&self, notes: &mut NoteMap) {
        let mut pending: Vec<(Coordinate, f64)> = notes
            .keys()
            .filter(|coordinate| coordinate.is_root())
            .rev()
            .map(|coordinate| (coordinate.clone(), 0.0))
            .collect();
        let mut visited = 0usize;

        while let Some((coordinate, parent_recall)) = pending.pop() {
            let Some(note) = notes.get_mut(&coordinate) else {
                warn!(coordinate = %coordinate, "child coordinate has no note");
                continue;
            };

            let recall = self.final_recall(&note.reviews, parent_recall);
            note.recall_probability = Some(recall);
            visited += 1;

            for child in note.children.iter().rev() {
                if child.parent().as_ref() == Some(&coordinate) {
                    pending.push((child.clone(), recall));
                } else {
                    warn!(parent = %coordinate, child = %child, "ignoring misplaced child");
                }
            }
        }

        debug!(visited, "annotated recall probabilities");
    }

    /// Days since `anchor`; reviews stamped in the future count as just now
    fn elapsed_days(&self, anchor: DateTime<Utc>) -> f64 {
        let seconds = (self.now - anchor).num_milliseconds() as f64 / 1000.0;
        (seconds / SECONDS_PER_DAY).max(0.0)
    }
}

/// Annotate every note of a document with its recall probability at `now`
pub fn annotate_recall(notes: &mut NoteMap, config: &RecallConfig, now: DateTime<Utc>) {
    RecallEstimator::new(config, now).annotate(notes);
}
