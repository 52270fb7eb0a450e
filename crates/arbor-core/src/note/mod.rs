//! Notes bound to document sections, with their edit and review history

mod types;

pub use types::{Note, NoteEdit, NoteReview, ReviewType};

use crate::coordinate::Coordinate;
use crate::outline::{Outline, Section};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// A document's notes keyed by coordinate
pub type NoteMap = BTreeMap<Coordinate, Note>;

impl Note {
    /// Fresh note for a section: no edits, no reviews
    pub fn from_section(section: &Section, now: DateTime<Utc>) -> Self {
        Note {
            created_at: now,
            title: section.title.clone(),
            level: section.level,
            content: section.content.clone(),
            children: section.children.clone(),
            edits: Vec::new(),
            reviews: Vec::new(),
            recall_probability: None,
        }
    }
}

/// Build one fresh note per section of a newly parsed document
pub fn synthesize(outline: &Outline, now: DateTime<Utc>) -> NoteMap {
    outline
        .iter()
        .map(|section| (section.coordinate.clone(), Note::from_section(section, now)))
        .collect()
}
