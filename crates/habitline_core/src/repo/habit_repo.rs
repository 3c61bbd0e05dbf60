//! Habit collection repository.
//!
//! # Responsibility
//! - Load the habits document, reporting absence as `None`.
//! - Persist the full habits document.
//!
//! # Invariants
//! - Absence is a normal state here; bootstrap policy belongs to the service.

use super::RepoResult;
use crate::model::habit::HabitCollection;
use crate::store::{read_document, write_document};
use std::path::{Path, PathBuf};

/// Repository interface for the habits document.
pub trait HabitRepository {
    /// Where the document lives, for diagnostics.
    fn location(&self) -> &Path;
    fn load(&self) -> RepoResult<Option<HabitCollection>>;
    fn save(&self, collection: &HabitCollection) -> RepoResult<()>;
}

/// Habits document stored as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonHabitRepository {
    path: PathBuf,
}

impl JsonHabitRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HabitRepository for JsonHabitRepository {
    fn location(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> RepoResult<Option<HabitCollection>> {
        Ok(read_document(&self.path)?)
    }

    fn save(&self, collection: &HabitCollection) -> RepoResult<()> {
        write_document(&self.path, collection)?;
        Ok(())
    }
}
