use crate::coordinate::Coordinate;
use crate::delta::ContentDelta;
use crate::error::{ArborError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a note was reviewed. Each kind decays at its own half-life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewType {
    /// Self-graded flash cards
    FlashCards,
    /// Multiple choice questions
    #[serde(alias = "multiple_choice_questions")]
    MultipleChoice,
    /// Open-ended questions graded against the note
    #[serde(alias = "open_ended_questions")]
    OpenEnded,
    /// Free-form conversation about the note
    Chat,
}

impl ReviewType {
    /// All valid review types
    pub const VALID_TYPES: &'static [&'static str] =
        &["flash_cards", "multiple_choice", "open_ended", "chat"];
}

impl FromStr for ReviewType {
    type Err = ArborError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "flash_cards" => Ok(ReviewType::FlashCards),
            "multiple_choice" | "multiple_choice_questions" => Ok(ReviewType::MultipleChoice),
            "open_ended" | "open_ended_questions" => Ok(ReviewType::OpenEnded),
            "chat" => Ok(ReviewType::Chat),
            _ => crate::bail_unsupported!("review type", s, Self::VALID_TYPES.join(", ")),
        }
    }
}

impl fmt::Display for ReviewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewType::FlashCards => write!(f, "flash_cards"),
            ReviewType::MultipleChoice => write!(f, "multiple_choice"),
            ReviewType::OpenEnded => write!(f, "open_ended"),
            ReviewType::Chat => write!(f, "chat"),
        }
    }
}

/// A recorded content change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteEdit {
    pub added_chars: usize,
    pub deleted_chars: usize,
    pub timestamp: DateTime<Utc>,
}

impl NoteEdit {
    pub fn from_delta(delta: ContentDelta, timestamp: DateTime<Utc>) -> Self {
        NoteEdit {
            added_chars: delta.added,
            deleted_chars: delta.deleted,
            timestamp,
        }
    }
}

/// A recorded review of a note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteReview {
    pub review_type: ReviewType,
    /// Score in `[0, 1]`, validated by the recorder before it is stored
    pub score: f64,
    pub timestamp: DateTime<Utc>,
}

/// The persisted learning unit bound to one section of a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub level: u8,
    pub content: String,
    /// Coordinates of the section's children in the latest parse
    #[serde(default)]
    pub children: Vec<Coordinate>,
    /// Append-only
    #[serde(default)]
    pub edits: Vec<NoteEdit>,
    /// Append-only
    #[serde(default)]
    pub reviews: Vec<NoteReview>,
    /// Derived on read; never the source of truth
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recall_probability: Option<f64>,
}

impl Note {
    /// Number of characters of content
    pub fn content_chars(&self) -> usize {
        self.content.chars().count()
    }
}
