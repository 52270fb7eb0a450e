//! Top-level arbor commands and their arguments

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::parse::{parse_coordinate, parse_review_type, parse_timestamp};
use arbor_core::coordinate::Coordinate;
use arbor_core::note::ReviewType;
use chrono::{DateTime, Utc};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the heading tree of a markdown file
    Parse(ParseArgs),

    /// Create a document from a markdown file
    Create(CreateArgs),

    /// Replace a document's markdown, keeping note history
    Update(UpdateArgs),

    /// Record a review of one note
    Review(ReviewArgs),

    /// Show recall probabilities for every note
    Recall(RecallArgs),

    /// Count characters added and deleted between two files
    Diff(DiffArgs),

    /// Show the effective configuration, or write a default one
    Config(ConfigArgs),
}

/// Arguments for the parse command.
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Markdown file, or `-` for stdin
    pub input: String,
}

/// Arguments for the create command.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Markdown file, or `-` for stdin
    pub input: String,

    /// Where to write the document
    #[arg(long, short)]
    pub out: PathBuf,

    /// Overwrite an existing document
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the update command.
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Document file
    pub document: PathBuf,

    /// New markdown file, or `-` for stdin
    pub input: String,

    /// Override the configured content change threshold
    #[arg(long)]
    pub threshold: Option<f64>,
}

/// Arguments for the review command.
#[derive(Args, Debug)]
pub struct ReviewArgs {
    /// Document file
    pub document: PathBuf,

    /// Coordinate of the reviewed note (e.g. `1.2`)
    #[arg(value_parser = parse_coordinate)]
    pub coordinate: Coordinate,

    /// Review type (flash-cards, multiple-choice, open-ended, chat)
    #[arg(long, short = 't', value_parser = parse_review_type)]
    pub r#type: ReviewType,

    /// Score between 0 and 1
    #[arg(long, short, allow_negative_numbers = true)]
    pub score: f64,

    /// When the review happened (RFC 3339, default: now)
    #[arg(long, value_parser = parse_timestamp)]
    pub at: Option<DateTime<Utc>>,
}

/// Arguments for the recall command.
#[derive(Args, Debug)]
pub struct RecallArgs {
    /// Document file
    pub document: PathBuf,

    /// Evaluate recall at this instant (RFC 3339, default: now)
    #[arg(long, value_parser = parse_timestamp)]
    pub at: Option<DateTime<Utc>>,
}

/// Arguments for the diff command.
#[derive(Args, Debug)]
pub struct DiffArgs {
    /// Original file, or `-` for stdin
    pub before: String,

    /// Changed file, or `-` for stdin
    pub after: String,
}

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Write the default configuration to the config path
    #[arg(long)]
    pub init: bool,

    /// Overwrite an existing file with --init
    #[arg(long, requires = "init")]
    pub force: bool,
}
