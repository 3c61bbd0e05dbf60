//! Repository layer abstractions and JSON-file implementations.
//!
//! # Responsibility
//! - Define load/save contracts for the habits and quotes documents.
//! - Isolate file paths and serde details from reconciliation services.
//!
//! # Invariants
//! - Read paths reject invalid persisted state instead of masking it.
//! - Save paths always write the whole document.

use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod habit_repo;
pub mod quote_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error shared by both document repositories.
#[derive(Debug)]
pub enum RepoError {
    Store(StoreError),
    /// A document that must pre-exist is absent.
    NotFound(PathBuf),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::NotFound(path) => write!(f, "document not found: {}", path.display()),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}
