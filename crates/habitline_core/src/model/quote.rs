//! Quote domain model.
//!
//! # Responsibility
//! - Define attributed quotes and the last-shown pointer.
//! - Reject quote state that would force an out-of-bounds read.
//!
//! # Invariants
//! - The quote list is never mutated by core; only `last_quote` changes.
//! - A valid document has at least one quote and `last_quote.index < quotes.len()`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Attributed motivational text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Attribution shown below the quote.
    pub name: String,
    pub content: String,
}

impl Quote {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Durable cursor recording which quote was shown and on which day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastQuote {
    pub index: usize,
    pub date: NaiveDate,
}

/// Root document persisted to `quotes.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotesDocument {
    pub quotes: Vec<Quote>,
    pub last_quote: LastQuote,
}

/// Quote state that cannot be reconciled safely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteStateError {
    /// The document holds no quotes at all.
    NoQuotes,
    /// `last_quote.index` points past the end of `quotes`.
    IndexOutOfRange { index: usize, len: usize },
}

impl Display for QuoteStateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoQuotes => write!(f, "quotes document contains no quotes"),
            Self::IndexOutOfRange { index, len } => write!(
                f,
                "last_quote.index ({index}) is out of range for {len} quote(s)"
            ),
        }
    }
}

impl Error for QuoteStateError {}

impl QuotesDocument {
    /// Checks the pointer invariant before any index is resolved.
    pub fn validate(&self) -> Result<(), QuoteStateError> {
        let len = self.quotes.len();
        if len == 0 {
            return Err(QuoteStateError::NoQuotes);
        }
        if self.last_quote.index >= len {
            return Err(QuoteStateError::IndexOutOfRange {
                index: self.last_quote.index,
                len,
            });
        }
        Ok(())
    }

    /// Resolves the last-shown quote without indexing out of bounds.
    pub fn last_shown(&self) -> Result<&Quote, QuoteStateError> {
        self.validate()?;
        self.quotes
            .get(self.last_quote.index)
            .ok_or(QuoteStateError::IndexOutOfRange {
                index: self.last_quote.index,
                len: self.quotes.len(),
            })
    }
}
