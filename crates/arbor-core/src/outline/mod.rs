//! Heading tree of a markdown document
//!
//! A document is split into sections at ATX headings (`#` .. `######`), and
//! every section gets a positional [`Coordinate`]. The tree is transient:
//! it is rebuilt from scratch on every parse and never patched.

mod parse;

pub use parse::parse;

use crate::coordinate::Coordinate;
use serde::Serialize;
use std::collections::HashMap;

/// A heading and the body text up to the next heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub coordinate: Coordinate,
    pub title: String,
    /// Marker count of the heading (1..=6)
    pub level: u8,
    pub content: String,
    pub children: Vec<Coordinate>,
}

/// Parsed sections in document order, addressable by coordinate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outline {
    sections: Vec<Section>,
    index: HashMap<Coordinate, usize>,
}

impl Outline {
    pub fn get(&self, coordinate: &Coordinate) -> Option<&Section> {
        self.index.get(coordinate).map(|&i| &self.sections[i])
    }

    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        self.index.contains_key(coordinate)
    }

    /// Sections in parse order
    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn coordinates(&self) -> impl Iterator<Item = &Coordinate> {
        self.sections.iter().map(|s| &s.coordinate)
    }

    fn get_mut(&mut self, coordinate: &Coordinate) -> Option<&mut Section> {
        match self.index.get(coordinate) {
            Some(&i) => self.sections.get_mut(i),
            None => None,
        }
    }

    fn push(&mut self, section: Section) {
        self.index
            .insert(section.coordinate.clone(), self.sections.len());
        self.sections.push(section);
    }

    fn last_mut(&mut self) -> Option<&mut Section> {
        self.sections.last_mut()
    }
}

impl<'a> IntoIterator for &'a Outline {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}
