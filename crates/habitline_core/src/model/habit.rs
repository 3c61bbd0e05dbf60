//! Habit domain model.
//!
//! # Responsibility
//! - Define the tracked habit record and the reasons attached to it.
//! - Define the durable root document that owns every habit.
//!
//! # Invariants
//! - `name` is the habit identity; duplicates are tolerated, not merged.
//! - Reasons are captured at creation time and never mutated afterward.
//! - Collection order is insertion order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Free-text motivation for quitting, owned by exactly one habit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reason {
    pub description: String,
}

impl Reason {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Tracked behavior with the day tracking started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub name: String,
    /// Serialized as `date` to match the on-disk document layout.
    #[serde(rename = "date")]
    pub start_date: NaiveDate,
    #[serde(default)]
    pub reasons: Vec<Reason>,
}

impl Habit {
    pub fn new(name: impl Into<String>, start_date: NaiveDate, reasons: Vec<Reason>) -> Self {
        Self {
            name: name.into(),
            start_date,
            reasons,
        }
    }
}

/// Root document persisted to `habits.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitCollection {
    pub habits: Vec<Habit>,
}

impl HabitCollection {
    /// Creates the bootstrap collection holding a single habit.
    pub fn with_habit(habit: Habit) -> Self {
        Self {
            habits: vec![habit],
        }
    }

    /// Appends a habit at the end, preserving existing order.
    pub fn push(&mut self, habit: Habit) {
        self.habits.push(habit);
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }
}
