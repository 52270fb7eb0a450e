//! Carry note history across document edits
//!
//! Coordinates are recomputed on every parse, so inserting one heading
//! shifts every later sibling. History therefore follows content lineage:
//! each re-parsed section looks for the prior note it most plausibly
//! continues, by title first and by character delta otherwise. A title
//! match is always inherited; a content match only when its change ratio
//! stays under the threshold.
//!
//! Candidates are never removed from the pool once matched, so one prior
//! note can seed several new sections.

use crate::delta::{delta, ContentDelta};
use crate::note::{Note, NoteEdit, NoteMap};
use crate::outline::{parse, Outline, Section};
use chrono::{DateTime, Utc};
use tracing::{debug, trace};

/// A prior note chosen as the predecessor of a new section
#[derive(Debug, Clone, Copy)]
struct Match<'a> {
    note: &'a Note,
    delta: ContentDelta,
    change: f64,
    by_title: bool,
}

/// Summary of one reconciliation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    /// Sections that inherited a prior note's history
    pub inherited: usize,
    /// Sections that started with a fresh note
    pub fresh: usize,
}

/// Re-parse `text` and reconcile `prior` notes against it.
///
/// The result holds exactly one note per section of the new parse;
/// coordinates that exist only in `prior` are dropped.
pub fn reconcile(
    prior: &NoteMap,
    text: &str,
    threshold: f64,
    now: DateTime<Utc>,
) -> NoteMap {
    reconcile_outline(prior, &parse(text), threshold, now).0
}

/// Reconcile `prior` notes against an already parsed outline
#[tracing::instrument(skip(prior, outline), fields(prior = prior.len(), sections = outline.len()))]
pub fn reconcile_outline(
    prior: &NoteMap,
    outline: &Outline,
    threshold: f64,
    now: DateTime<Utc>,
) -> (NoteMap, ReconcileStats) {
    let mut stats = ReconcileStats::default();
    let mut notes = NoteMap::new();

    for section in outline {
        let note = match find_predecessor(prior, section) {
            Some(found) if found.by_title || found.change < threshold => {
                stats.inherited += 1;
                trace!(
                    coordinate = %section.coordinate,
                    change = found.change,
                    by_title = found.by_title,
                    added = found.delta.added,
                    deleted = found.delta.deleted,
                    "inheriting history"
                );
                continue_note(found, section, now)
            }
            _ => {
                stats.fresh += 1;
                trace!(coordinate = %section.coordinate, "fresh note");
                Note::from_section(section, now)
            }
        };
        notes.insert(section.coordinate.clone(), note);
    }

    debug!(
        inherited = stats.inherited,
        fresh = stats.fresh,
        dropped = prior.keys().filter(|c| !outline.contains(c)).count(),
        "reconciled notes"
    );
    (notes, stats)
}

/// Scan every prior note for the best predecessor of `section`.
///
/// An exact title match ends the scan immediately even if a later candidate
/// is closer in content. Otherwise the smallest change ratio wins, earliest
/// candidate on ties.
fn find_predecessor<'a>(prior: &'a NoteMap, section: &Section) -> Option<Match<'a>> {
    let mut best: Option<Match<'a>> = None;

    for note in prior.values() {
        let delta = delta(&note.content, &section.content);
        let by_title = note.title == section.title;
        let candidate = Match {
            note,
            delta,
            change: delta.change_ratio(note.content_chars()),
            by_title,
        };

        if by_title {
            return Some(candidate);
        }

        if best.is_none_or(|b| candidate.change < b.change) {
            best = Some(candidate);
        }
    }

    best
}

/// The matched note's lineage with the new section's shape and content
fn continue_note(found: Match<'_>, section: &Section, now: DateTime<Utc>) -> Note {
    let mut note = found.note.clone();
    note.title = section.title.clone();
    note.level = section.level;
    note.content = section.content.clone();
    note.children = section.children.clone();
    note.recall_probability = None;

    if !found.delta.is_empty() {
        note.edits.push(NoteEdit::from_delta(found.delta, now));
    }
    note
}
