//! Quotes document repository.
//!
//! # Responsibility
//! - Load the pre-populated quotes document.
//! - Persist the document after the last-quote pointer moves.
//!
//! # Invariants
//! - The quotes document is never created here; absence is an error.
//! - Loaded documents satisfy `QuotesDocument::validate()`.

use super::{RepoError, RepoResult};
use crate::model::quote::QuotesDocument;
use crate::store::{read_document, write_document};
use std::path::PathBuf;

/// Repository interface for the quotes document.
pub trait QuoteRepository {
    fn load(&self) -> RepoResult<QuotesDocument>;
    fn save(&self, document: &QuotesDocument) -> RepoResult<()>;
}

/// Quotes document stored as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonQuoteRepository {
    path: PathBuf,
}

impl JsonQuoteRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl QuoteRepository for JsonQuoteRepository {
    fn load(&self) -> RepoResult<QuotesDocument> {
        let document: QuotesDocument =
            read_document(&self.path)?.ok_or_else(|| RepoError::NotFound(self.path.clone()))?;
        document.validate().map_err(|err| {
            RepoError::InvalidData(format!("{err} in `{}`", self.path.display()))
        })?;
        Ok(document)
    }

    fn save(&self, document: &QuotesDocument) -> RepoResult<()> {
        document
            .validate()
            .map_err(|err| RepoError::InvalidData(err.to_string()))?;
        write_document(&self.path, document)?;
        Ok(())
    }
}
