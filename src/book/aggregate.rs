//! Level aggregation
//!
//! Partitions resolved entries by side, sorts each side most-aggressive
//! first, and computes running cumulative quantity. Each open order stays
//! its own row; equal prices are not merged into one level, matching the
//! upstream book's row-per-order rendering. The sorts are stable, so rows
//! at the same price keep their arrival order and the output is
//! deterministic for a given input.

use rust_decimal::Decimal;

use super::{CanonicalEntry, DepthLevel, Side};

/// Both sides of the book, leveled and sorted
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookLevels {
    /// Sorted by price descending
    pub bids: Vec<DepthLevel>,
    /// Sorted by price ascending
    pub asks: Vec<DepthLevel>,
}

/// Build sorted, cumulative depth levels from resolved entries.
pub fn aggregate(entries: impl IntoIterator<Item = (Side, CanonicalEntry)>) -> BookLevels {
    let mut bids = Vec::new();
    let mut asks = Vec::new();

    for (side, entry) in entries {
        match side {
            Side::Bid => bids.push(entry),
            Side::Ask => asks.push(entry),
        }
    }

    bids.sort_by(|a, b| b.price.cmp(&a.price));
    asks.sort_by(|a, b| a.price.cmp(&b.price));

    BookLevels {
        bids: cumulative(bids),
        asks: cumulative(asks),
    }
}

fn cumulative(entries: Vec<CanonicalEntry>) -> Vec<DepthLevel> {
    let mut running = Decimal::ZERO;
    entries
        .into_iter()
        .map(|entry| {
            running += entry.quantity;
            DepthLevel {
                price: entry.price,
                quantity: entry.quantity,
                cumulative_quantity: running,
            }
        })
        .collect()
}
