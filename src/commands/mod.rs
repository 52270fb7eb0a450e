//! CLI commands for arbor

pub mod config;
pub mod create;
pub mod diff;
pub mod dispatch;
pub mod input;
pub mod parse;
pub mod recall;
pub mod review;
pub mod update;
