//! JSON document storage entry points.
//!
//! # Responsibility
//! - Read and write whole JSON documents on the local filesystem.
//! - Classify storage failures before they reach repositories.
//!
//! # Invariants
//! - A file handle lives for exactly one read or write call.
//! - Writes always replace the full document; there is no append mode.
//! - Concurrent processes writing the same document are not coordinated.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod document;

pub use document::{read_document, write_document};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    /// Open/read/write failure other than "file does not exist".
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// File content is not the expected JSON shape.
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot access `{}`: {source}", path.display()),
            Self::Malformed { path, source } => {
                write!(f, "cannot parse `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Malformed { source, .. } => Some(source),
        }
    }
}
