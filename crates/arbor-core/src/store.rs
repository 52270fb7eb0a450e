//! JSON file persistence for documents
//!
//! One document per file. Writes go through a sibling temporary file and a
//! rename, so readers see either the old or the new document.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::document::Document;
use crate::error::{ArborError, Result};

/// Read a document from `path`
#[tracing::instrument(fields(path = %path.display()))]
pub fn load_document(path: &Path) -> Result<Document> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ArborError::DocumentNotFound {
                path: path.to_path_buf(),
            })
        }
        Err(e) => return Err(ArborError::io_operation("read", path.display(), e)),
    };

    serde_json::from_str(&content).map_err(|e| ArborError::InvalidDocument {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Write a document to `path`, without derived recall values
#[tracing::instrument(skip(document), fields(path = %path.display(), notes = document.notes.len()))]
pub fn save_document(path: &Path, document: &Document) -> Result<()> {
    let mut stored = document.clone();
    stored.clear_recall();
    let json = serde_json::to_string_pretty(&stored)?;

    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)
                .map_err(|e| ArborError::io_operation("create directory", dir.display(), e))?;
        }
    }

    let tmp = temp_path(path);
    fs::write(&tmp, json + "\n")
        .map_err(|e| ArborError::io_operation("write", tmp.display(), e))?;
    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        ArborError::io_operation("replace", path.display(), e)
    })?;

    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
