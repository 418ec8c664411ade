use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from the I/O, config and serialization edges of the crate.
///
/// Parsing and rendering never fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// A host clipboard refused the write.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Clipboard write failed: {0}")]
pub struct ClipboardError(pub String);
