//! Positional section addresses
//!
//! A coordinate is a dot-separated path of positive integers (`"1"`,
//! `"1.2"`, `"1.2.1"`). Coordinates are assigned by the outline parser and
//! recomputed on every parse, so they identify a *position*, never a note's
//! lineage across edits.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ArborError;

/// Dotted positional address of a section within a heading tree
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Coordinate(String);

impl Coordinate {
    /// Top-level coordinate with the given 1-based position
    pub fn root(position: usize) -> Self {
        Coordinate(position.to_string())
    }

    /// Coordinate of the `position`-th (1-based) child of this one
    pub fn child(&self, position: usize) -> Self {
        Coordinate(format!("{}.{}", self.0, position))
    }

    /// Same parent, last segment incremented by one
    pub fn next_sibling(&self) -> Self {
        let next = self.last_segment() + 1;
        match self.parent() {
            Some(parent) => parent.child(next),
            None => Coordinate::root(next),
        }
    }

    /// The coordinate with its last segment dropped; `None` for top-level
    pub fn parent(&self) -> Option<Coordinate> {
        self.0
            .rsplit_once('.')
            .map(|(parent, _)| Coordinate(parent.to_string()))
    }

    /// Number of segments
    pub fn depth(&self) -> usize {
        self.0.split('.').count()
    }

    pub fn is_root(&self) -> bool {
        !self.0.contains('.')
    }

    pub fn last_segment(&self) -> usize {
        self.segments().last().unwrap_or(0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    // Segments were validated on construction.
    fn segments(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.split('.').map(|s| s.parse().unwrap_or(0))
    }
}

impl FromStr for Coordinate {
    type Err = ArborError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let valid = !s.is_empty()
            && s.split('.').all(|segment| {
                !segment.is_empty()
                    && !segment.starts_with('0')
                    && segment.bytes().all(|b| b.is_ascii_digit())
                    && segment.parse::<usize>().is_ok_and(|n| n > 0)
            });

        if valid {
            Ok(Coordinate(s.to_string()))
        } else {
            Err(ArborError::InvalidCoordinate(s.to_string()))
        }
    }
}

impl TryFrom<String> for Coordinate {
    type Error = ArborError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Coordinate> for String {
    fn from(coordinate: Coordinate) -> String {
        coordinate.0
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.segments().cmp(other.segments())
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
