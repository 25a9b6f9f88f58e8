//! File-level concerns: import eligibility and reading question files.

use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("Not an importable question file: {0}")]
    NotImportable(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Extensions accepted for import. The on-disk equivalent of a cheap
/// MIME check; no content sniffing is done.
const IMPORTABLE_EXTENSIONS: [&str; 2] = ["txt", "gift"];

/// Whether the path looks like an importable question file.
pub fn can_import_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMPORTABLE_EXTENSIONS
                .iter()
                .any(|ok| ext.eq_ignore_ascii_case(ok))
        })
        .unwrap_or(false)
}

/// Read a question file, refusing paths that are not importable.
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !can_import_path(path) {
        return Err(IoError::NotImportable(path.to_path_buf()));
    }
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}
