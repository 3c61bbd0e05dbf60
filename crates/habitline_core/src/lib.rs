//! Core domain logic for Habitline.
//! Owns the habits and quotes documents and every rule that mutates them.

pub mod config;
pub mod elapsed;
pub mod error;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use config::{resolve_log_level, AppPaths, ConfigError};
pub use elapsed::{days_since, format_days};
pub use error::{CoreError, CoreResult};
pub use logging::{default_log_level, init_logging};
pub use model::habit::{Habit, HabitCollection, Reason};
pub use model::quote::{LastQuote, Quote, QuoteStateError, QuotesDocument};
pub use repo::habit_repo::{HabitRepository, JsonHabitRepository};
pub use repo::quote_repo::{JsonQuoteRepository, QuoteRepository};
pub use repo::{RepoError, RepoResult};
pub use service::habit_service::HabitService;
pub use service::quote_service::{rotate_quote, QuoteRotation, QuoteService};
pub use store::{StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
