//! Arbor Core Library
//!
//! Turns markdown documents into trees of notes, carries each note's edit and
//! review history across rewrites of the document, and estimates how likely
//! each note is to be remembered.

pub mod config;
pub mod coordinate;
pub mod delta;
pub mod document;
pub mod error;
pub mod format;
pub mod logging;
pub mod note;
pub mod outline;
pub mod recall;
pub mod reconcile;
pub mod store;
