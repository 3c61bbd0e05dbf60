//! Fatal error taxonomy for one tracker run.
//!
//! # Responsibility
//! - Classify every failure that can reach the caller of a reconciliation.
//! - Keep repository transport errors available through `source()`.
//!
//! # Invariants
//! - Every variant is fatal; callers abort instead of retrying.

use crate::model::quote::QuoteStateError;
use crate::repo::RepoError;
use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Debug)]
pub enum CoreError {
    /// No habits document exists and no habit was supplied to create one.
    MissingBootstrap { path: PathBuf },
    /// A document could not be opened, read or written.
    StorageAccess(RepoError),
    /// The quotes document must be provided before the first run.
    MissingQuotesDocument { path: PathBuf },
    /// Persisted state is unparsable or violates a document invariant.
    MalformedState(String),
}

impl Display for CoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingBootstrap { path } => write!(
                f,
                "no habits tracked yet in `{}`; supply one with --habit=<name> to start",
                path.display()
            ),
            Self::StorageAccess(err) => write!(f, "storage error: {err}"),
            Self::MissingQuotesDocument { path } => {
                write!(f, "quotes document `{}` does not exist", path.display())
            }
            Self::MalformedState(message) => write!(f, "malformed state: {message}"),
        }
    }
}

impl Error for CoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::StorageAccess(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for CoreError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(path) => Self::MissingQuotesDocument { path },
            RepoError::InvalidData(message) => Self::MalformedState(message),
            RepoError::Store(StoreError::Malformed { path, source }) => {
                Self::MalformedState(format!("cannot parse `{}`: {source}", path.display()))
            }
            other => Self::StorageAccess(other),
        }
    }
}

impl From<QuoteStateError> for CoreError {
    fn from(value: QuoteStateError) -> Self {
        Self::MalformedState(value.to_string())
    }
}
