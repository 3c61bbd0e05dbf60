//! Habit Store reconciliation.
//!
//! # Responsibility
//! - Bootstrap the habits document on the first supplied habit.
//! - Append a supplied habit to an existing document and persist it.
//! - Refuse to run without any habits document to show.
//!
//! # Invariants
//! - At most one write per `reconcile` call.
//! - Existing habits are never reordered or modified.

use crate::error::{CoreError, CoreResult};
use crate::model::habit::{Habit, HabitCollection};
use crate::repo::habit_repo::HabitRepository;
use log::info;

/// Use-case service wrapping a habits repository.
pub struct HabitService<R: HabitRepository> {
    repo: R,
}

impl<R: HabitRepository> HabitService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Checks, without writing, that `reconcile` can succeed.
    ///
    /// # Errors
    /// - `CoreError::MissingBootstrap` when no document exists and no habit
    ///   will be supplied.
    /// - `CoreError::MalformedState` / `CoreError::StorageAccess` when the
    ///   existing document cannot be loaded.
    pub fn preflight(&self, supplying_habit: bool) -> CoreResult<()> {
        if self.repo.load()?.is_none() && !supplying_habit {
            return Err(CoreError::MissingBootstrap {
                path: self.repo.location().to_path_buf(),
            });
        }
        Ok(())
    }

    /// Loads the habit collection, appending `new_habit` when supplied.
    ///
    /// # Contract
    /// - No document, no habit: `CoreError::MissingBootstrap`, nothing written.
    /// - No document, habit: `[habit]` is written and returned.
    /// - Document, habit: habit appended at the end, whole document written.
    /// - Document, no habit: returned unchanged without writing.
    pub fn reconcile(&self, new_habit: Option<Habit>) -> CoreResult<HabitCollection> {
        let existing = self.repo.load()?;

        let collection = match (existing, new_habit) {
            (None, None) => {
                return Err(CoreError::MissingBootstrap {
                    path: self.repo.location().to_path_buf(),
                });
            }
            (Some(collection), None) => {
                info!(
                    "event=habits_reconcile module=service status=ok mode=read count={}",
                    collection.len()
                );
                return Ok(collection);
            }
            (None, Some(habit)) => {
                info!("event=habits_reconcile module=service status=start mode=bootstrap");
                HabitCollection::with_habit(habit)
            }
            (Some(mut collection), Some(habit)) => {
                info!("event=habits_reconcile module=service status=start mode=append");
                collection.push(habit);
                collection
            }
        };

        self.repo.save(&collection)?;
        info!(
            "event=habits_reconcile module=service status=ok mode=write count={}",
            collection.len()
        );
        Ok(collection)
    }
}
