//! Reading markdown input from files or stdin

use std::fs;
use std::io::{self, Read};

use arbor_core::error::{ArborError, Result};

/// Marker argument that selects stdin
pub const STDIN: &str = "-";

/// Read the whole input named by `source`: a path, or `-` for stdin
pub fn read_source(source: &str) -> Result<String> {
    if source == STDIN {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| ArborError::io_operation("read", "stdin", e))?;
        return Ok(content);
    }

    fs::read_to_string(source).map_err(|e| ArborError::io_operation("read", source, e))
}
