//! `arbor parse` command - print the heading tree of a markdown file

use crate::cli::{Cli, OutputFormat};
use crate::commands::input::read_source;
use arbor_core::error::Result;
use arbor_core::outline::{parse, Outline};

/// Execute the parse command
pub fn execute(cli: &Cli, input: &str) -> Result<()> {
    let text = read_source(input)?;
    let outline = parse(&text);

    match cli.format {
        OutputFormat::Json => {
            let sections: Vec<_> = outline.iter().collect();
            println!("{}", serde_json::to_string_pretty(&sections)?);
        }
        OutputFormat::Human => {
            if outline.is_empty() {
                if !cli.quiet {
                    println!("No headings found");
                }
                return Ok(());
            }
            print!("{}", render_outline(&outline));
        }
    }

    Ok(())
}

/// One line per section, indented by depth
fn render_outline(outline: &Outline) -> String {
    let mut out = String::new();
    for section in outline {
        let indent = "  ".repeat(section.coordinate.depth().saturating_sub(1));
        out.push_str(&format!(
            "{}{} {} (h{})\n",
            indent, section.coordinate, section.title, section.level
        ));
    }
    out
}
