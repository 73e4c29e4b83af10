//! Error types and handling for the document forensics library

use std::{io, path::PathBuf, result::Result as StdResult};

use thiserror::Error;

/// Custom result type for analysis operations
pub type Result<T> = StdResult<T, Error>;

/// Core error type for analysis operations
///
/// The dispatcher converts every variant into a descriptive `Finding`
/// before results reach the caller; nothing in the single-file analysis
/// path surfaces a raw error to the presentation layer.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    /// The container itself is unreadable (broken ZIP, truncated PDF).
    /// Fatal for every checker that depends on archive access.
    #[error("Invalid document package: {0}")]
    InvalidPackage(String),

    /// An expected internal part (e.g. `word/comments.xml`) is absent.
    /// Not fatal; the affected checker reports it and siblings continue.
    #[error("Package part missing: {0}")]
    PartMissing(String),

    #[error("XML parse error: {0}")]
    Parse(#[from] quick_xml::Error),

    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

impl Error {
    /// Classifies a filesystem error against the path that produced it,
    /// so the orchestrator can short-circuit with a single explanatory
    /// finding instead of running every checker against a broken file.
    pub fn from_io(err: io::Error, path: &std::path::Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Error::PermissionDenied(path.to_path_buf()),
            _ => Error::Io(err),
        }
    }
}

/// Report generation errors
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportError {
    #[error("Format error: {0}")]
    FormatError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}
