pub use arbor_core::format::OutputFormat;
use clap::builder::{PossibleValuesParser, TypedValueParser};

/// Value parser for `--format`; lists the accepted values in `--help`
pub fn format_parser() -> impl TypedValueParser<Value = OutputFormat> {
    PossibleValuesParser::new(["human", "json"]).try_map(|s| s.parse::<OutputFormat>())
}
