//! Whole-file source loading.
//!
//! The tokenizer never touches the filesystem. This module reads a file
//! eagerly as UTF-8 and hands the text over, dropping a leading byte order
//! mark so it does not end up glued to the first field.

use std::io;
use std::path::{Path, PathBuf};

use tally_tokenizer::Tokenizer;
use thiserror::Error;
use tracing::debug;

const UTF8_BOM: char = '\u{FEFF}';

/// Failure to read CSV text from disk.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot find file '{}'", .path.display())]
    NotFound { path: PathBuf },
    #[error("permission denied reading '{}'", .path.display())]
    PermissionDenied { path: PathBuf },
    #[error("'{}' contains invalid UTF-8 data", .path.display())]
    InvalidUtf8 { path: PathBuf },
    #[error("error reading '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SourceError {
    fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => SourceError::NotFound { path },
            io::ErrorKind::PermissionDenied => SourceError::PermissionDenied { path },
            io::ErrorKind::InvalidData => SourceError::InvalidUtf8 { path },
            _ => SourceError::Io { path, source: err },
        }
    }
}

/// Read the whole file at `path` as UTF-8 text.
pub fn read_source(path: impl AsRef<Path>) -> Result<String, SourceError> {
    let path = path.as_ref();
    let mut text = std::fs::read_to_string(path).map_err(|e| SourceError::from_io(path, e))?;
    if text.starts_with(UTF8_BOM) {
        text.replace_range(..UTF8_BOM.len_utf8(), "");
    }
    debug!(path = %path.display(), len = text.len(), "loaded source");
    Ok(text)
}

/// Read the file at `path` into a fresh tokenizer.
pub fn load(path: impl AsRef<Path>) -> Result<Tokenizer, SourceError> {
    read_source(path).map(Tokenizer::new)
}
