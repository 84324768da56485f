//! Depth book construction pipeline
//!
//! Rebuilds a canonical, side-correct, price-leveled book from raw swap-note
//! records on every refresh. Each stage is a pure transform over an immutable
//! input snapshot; nothing here holds state between calls.

mod aggregate;
pub mod canonical;
mod resolver;
mod summary;

pub use aggregate::{aggregate, BookLevels};
pub use canonical::{DisplayOrder, OrderTerms};
pub use resolver::AssetPairContext;
pub use summary::summarize;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::parser::RawSwapNoteRecord;

/// Side of the book an entry lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Bid,
    Ask,
}

/// A resolved order in human units, price always quote-per-base
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalEntry {
    pub price: Decimal,
    pub quantity: Decimal,
}

/// One row of the leveled book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthLevel {
    pub price: Decimal,
    pub quantity: Decimal,
    /// Running quantity over all rows at least as aggressive as this one
    pub cumulative_quantity: Decimal,
}

/// Fully derived book snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSummary {
    /// Sorted by price descending
    pub bids: Vec<DepthLevel>,
    /// Sorted by price ascending
    pub asks: Vec<DepthLevel>,
    pub spread: Decimal,
    pub spread_percentage: Decimal,
    pub mid_price: Decimal,
    pub total_bid_volume: Decimal,
    pub total_ask_volume: Decimal,
}

/// Run the full pipeline over a snapshot of raw records.
///
/// Records that do not belong to the configured pair, are not open, or carry
/// a zero amount are skipped; skips are logged in aggregate only.
pub fn build_summary(
    records: &[RawSwapNoteRecord],
    ctx: &AssetPairContext,
    fallback_mid: Decimal,
) -> BookSummary {
    let mut entries = Vec::with_capacity(records.len());
    let mut skipped = 0usize;

    for record in records {
        match ctx.resolve(record) {
            Some(resolved) => entries.push(resolved),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        tracing::debug!(
            skipped,
            total = records.len(),
            "Skipped records during book construction"
        );
    }

    summarize(aggregate(entries), fallback_mid)
}
