//! Value types for the two persisted documents.
//!
//! # Responsibility
//! - Define the habit and quote records exactly as they appear on disk.
//! - Keep every type an immutable value; reconciliation lives in `service`.
//!
//! # Invariants
//! - Dates are calendar dates serialized as `YYYY-MM-DD`.

pub mod habit;
pub mod quote;
