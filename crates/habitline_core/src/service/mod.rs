//! Reconciliation services.
//!
//! # Responsibility
//! - Apply the load-mutate-persist cycle to each document.
//! - Keep the CLI decoupled from storage details.

pub mod habit_service;
pub mod quote_service;
