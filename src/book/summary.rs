//! Book summarization
//!
//! Derives best prices, spread, and mid price from the leveled book. An
//! empty side reports a best price of zero; that zero is the explicit
//! sentinel consumers key off, never interpolated.

use rust_decimal::Decimal;

use super::{aggregate::BookLevels, BookSummary};

/// Summarize leveled depth into a [`BookSummary`].
///
/// `fallback_mid` is the display value used when either side is empty; it
/// has no principled derivation and only exists to avoid a zero display.
pub fn summarize(levels: BookLevels, fallback_mid: Decimal) -> BookSummary {
    let best_bid = levels.bids.first().map(|l| l.price).unwrap_or(Decimal::ZERO);
    let best_ask = levels.asks.first().map(|l| l.price).unwrap_or(Decimal::ZERO);

    let spread = best_ask - best_bid;
    let spread_percentage = if best_bid > Decimal::ZERO {
        spread / best_bid * Decimal::from(100)
    } else {
        Decimal::ZERO
    };
    let mid_price = if best_bid > Decimal::ZERO && best_ask > Decimal::ZERO {
        (best_bid + best_ask) / Decimal::from(2)
    } else {
        fallback_mid
    };

    let total_bid_volume = levels.bids.iter().map(|l| l.quantity).sum();
    let total_ask_volume = levels.asks.iter().map(|l| l.quantity).sum();

    BookSummary {
        bids: levels.bids,
        asks: levels.asks,
        spread,
        spread_percentage,
        mid_price,
        total_bid_volume,
        total_ask_volume,
    }
}
