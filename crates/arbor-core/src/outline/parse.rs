use super::{Outline, Section};
use crate::coordinate::Coordinate;
use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// `#` markers, whitespace, then a non-empty title
static HEADING_RE: OnceLock<Option<Regex>> = OnceLock::new();

fn heading_regex() -> Option<&'static Regex> {
    HEADING_RE
        .get_or_init(|| match Regex::new(r"^(#{1,6})\s+(.+)$") {
            Ok(re) => Some(re),
            Err(e) => {
                warn!(error = %e, "Failed to compile heading regex");
                None
            }
        })
        .as_ref()
}

/// Parse a markdown document into its heading tree.
///
/// Lines are trimmed before matching, so indented headings count. Text
/// before the first heading belongs to no section and is dropped. Heading
/// levels may skip or regress freely: a heading deeper than the open one
/// becomes its child regardless of how many levels it skips, and a
/// top-level section is never closed by a shallower heading, only followed
/// by a sibling.
#[tracing::instrument(skip(text), fields(chars = text.len()))]
pub fn parse(text: &str) -> Outline {
    let mut outline = Outline::default();
    let Some(heading_re) = heading_regex() else {
        return outline;
    };

    // Open ancestor chain as (marker count, coordinate)
    let mut stack: Vec<(u8, Coordinate)> = Vec::new();
    let mut body: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        let line = line.trim();
        let Some(caps) = heading_re.captures(line) else {
            body.push(line);
            continue;
        };

        close_section(&mut outline, &mut body);

        let level = caps[1].len() as u8;
        let title = caps[2].to_string();

        while stack
            .last()
            .is_some_and(|(open, coordinate)| *open >= level && !coordinate.is_root())
        {
            stack.pop();
        }

        let (coordinate, parent) = match stack.last() {
            None => {
                let roots = outline.coordinates().filter(|c| c.is_root()).count();
                (Coordinate::root(roots + 1), None)
            }
            Some((open, top)) if *open >= level => (top.next_sibling(), top.parent()),
            Some((_, top)) => {
                let siblings = outline.get(top).map_or(0, |s| s.children.len());
                (top.child(siblings + 1), Some(top.clone()))
            }
        };

        if let Some(parent) = parent.as_ref().and_then(|p| outline.get_mut(p)) {
            parent.children.push(coordinate.clone());
        }

        stack.push((level, coordinate.clone()));
        outline.push(Section {
            coordinate,
            title,
            level,
            content: String::new(),
            children: Vec::new(),
        });
    }

    close_section(&mut outline, &mut body);

    debug!(sections = outline.len(), "parsed outline");
    outline
}

/// Assign the accumulated body lines to the most recently opened section
fn close_section(outline: &mut Outline, body: &mut Vec<&str>) {
    if let Some(section) = outline.last_mut() {
        section.content = body.join("\n").trim().to_string();
    }
    body.clear();
}
