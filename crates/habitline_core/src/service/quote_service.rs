//! Quote Rotator reconciliation.
//!
//! # Responsibility
//! - Decide whether today's quote is the last-shown one or a fresh pick.
//! - Persist the moved last-quote pointer exactly once per rotation.
//!
//! # Invariants
//! - Rotation happens at most once per calendar day.
//! - A rotated index always differs from the previous index.
//! - A single-quote document is never rotated and never rewritten.
//! - Quote state is validated before any index is resolved.

use crate::error::CoreResult;
use crate::model::quote::{LastQuote, Quote, QuoteStateError, QuotesDocument};
use crate::repo::quote_repo::QuoteRepository;
use chrono::NaiveDate;
use log::info;
use rand::Rng;

/// Draws attempted before falling back to a linear pick.
pub const MAX_REJECTION_DRAWS: usize = 32;

/// Outcome of one rotation decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRotation {
    /// Quote to display today.
    pub quote: Quote,
    /// Document with the pointer as it must be persisted.
    pub document: QuotesDocument,
    /// Whether the pointer moved and the document needs a write.
    pub rotated: bool,
}

/// Decides today's quote without touching storage.
///
/// Any date other than `last_quote.date`, earlier or later, triggers exactly
/// one rotation.
///
/// # Errors
/// - `QuoteStateError` when the document is empty or its pointer is out of range.
pub fn rotate_quote<G: Rng + ?Sized>(
    document: &QuotesDocument,
    today: NaiveDate,
    rng: &mut G,
) -> Result<QuoteRotation, QuoteStateError> {
    let previous = document.last_shown()?.clone();

    if today == document.last_quote.date || document.quotes.len() == 1 {
        return Ok(QuoteRotation {
            quote: previous,
            document: document.clone(),
            rotated: false,
        });
    }

    let next_index = pick_distinct_index(document.quotes.len(), document.last_quote.index, rng);
    let mut next = document.clone();
    next.last_quote = LastQuote {
        index: next_index,
        date: today,
    };
    let quote = next.last_shown()?.clone();

    Ok(QuoteRotation {
        quote,
        document: next,
        rotated: true,
    })
}

/// Picks a uniform index in `[0, len)` other than `previous`.
///
/// Requires `len >= 2`.
fn pick_distinct_index<G: Rng + ?Sized>(len: usize, previous: usize, rng: &mut G) -> usize {
    debug_assert!(len >= 2);

    for _ in 0..MAX_REJECTION_DRAWS {
        let candidate = rng.gen_range(0..len);
        if candidate != previous {
            return candidate;
        }
    }

    let others: Vec<usize> = (0..len).filter(|index| *index != previous).collect();
    others[rng.gen_range(0..others.len())]
}

/// Use-case service wrapping a quotes repository.
pub struct QuoteService<R: QuoteRepository> {
    repo: R,
}

impl<R: QuoteRepository> QuoteService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Loads and validates the document without writing.
    pub fn preflight(&self) -> CoreResult<()> {
        self.repo.load()?;
        Ok(())
    }

    /// Returns today's quote, rotating with the thread-local RNG.
    pub fn reconcile(&self, today: NaiveDate) -> CoreResult<(Quote, QuotesDocument)> {
        self.reconcile_with_rng(today, &mut rand::thread_rng())
    }

    /// Returns today's quote, persisting the document only when it rotated.
    ///
    /// # Errors
    /// - `CoreError::MissingQuotesDocument` when the document is absent.
    /// - `CoreError::MalformedState` for unparsable or out-of-range state.
    /// - `CoreError::StorageAccess` when the rotated document cannot be written.
    pub fn reconcile_with_rng<G: Rng + ?Sized>(
        &self,
        today: NaiveDate,
        rng: &mut G,
    ) -> CoreResult<(Quote, QuotesDocument)> {
        let document = self.repo.load()?;
        let rotation = rotate_quote(&document, today, rng)?;

        if rotation.rotated {
            self.repo.save(&rotation.document)?;
            info!(
                "event=quote_reconcile module=service status=ok mode=rotate from={} to={}",
                document.last_quote.index, rotation.document.last_quote.index
            );
        } else {
            info!(
                "event=quote_reconcile module=service status=ok mode=replay index={}",
                rotation.document.last_quote.index
            );
        }

        Ok((rotation.quote, rotation.document))
    }
}
