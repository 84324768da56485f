//! Asset-pair resolution
//!
//! A swap note says "I offer X of asset A for Y of asset B". Which side of
//! the book that lands on, and what its quote-per-base price is, must be
//! inferred from the asset ids against the configured pair.

use rust_decimal::Decimal;

use super::{CanonicalEntry, Side};
use crate::parser::RawSwapNoteRecord;

/// Immutable per-book pair configuration
#[derive(Debug, Clone)]
pub struct AssetPairContext {
    base_asset_id: String,
    quote_asset_id: String,
    /// Smallest-unit scale of the base asset
    unit_scale: Decimal,
}

impl AssetPairContext {
    pub fn new(base_asset_id: &str, quote_asset_id: &str, base_decimals: u32) -> Self {
        Self {
            base_asset_id: base_asset_id.to_string(),
            quote_asset_id: quote_asset_id.to_string(),
            unit_scale: Decimal::from(10u64.pow(base_decimals)),
        }
    }

    /// Resolve a raw record into a side and a canonical entry.
    ///
    /// Returns `None` for records that do not contribute to the book: closed
    /// statuses, zero amounts, or asset pairs outside this context. Price is
    /// always derived as quote amount over base amount, so bid and ask prices
    /// are comparable on the same axis.
    pub fn resolve(&self, record: &RawSwapNoteRecord) -> Option<(Side, CanonicalEntry)> {
        if !record.status.is_open() {
            return None;
        }
        if record.offered_amount == 0 || record.requested_amount == 0 {
            return None;
        }

        let offered = Decimal::from(record.offered_amount);
        let requested = Decimal::from(record.requested_amount);

        if record.offered_asset_id == self.quote_asset_id
            && record.requested_asset_id == self.base_asset_id
        {
            // Offering quote to acquire base: a bid.
            Some((
                Side::Bid,
                CanonicalEntry {
                    price: offered / requested,
                    quantity: requested / self.unit_scale,
                },
            ))
        } else if record.offered_asset_id == self.base_asset_id
            && record.requested_asset_id == self.quote_asset_id
        {
            // Offering base to acquire quote: an ask.
            Some((
                Side::Ask,
                CanonicalEntry {
                    price: requested / offered,
                    quantity: offered / self.unit_scale,
                },
            ))
        } else {
            // Not part of this trading pair.
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::OrderStatus;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    const BASE: &str = "0x5154599567cddc201bca5404fb1a9d";
    const QUOTE: &str = "0x9f79cc38536bb120342549f49c0d60";

    fn ctx() -> AssetPairContext {
        AssetPairContext::new(BASE, QUOTE, 8)
    }

    fn record(
        offered_asset: &str,
        offered: u64,
        requested_asset: &str,
        requested: u64,
    ) -> RawSwapNoteRecord {
        RawSwapNoteRecord {
            id: "id".to_string(),
            note_id: "note".to_string(),
            creator_id: "creator".to_string(),
            offered_asset_id: offered_asset.to_string(),
            offered_amount: offered,
            requested_asset_id: requested_asset.to_string(),
            requested_amount: requested,
            price: Decimal::ZERO,
            is_bid: false,
            status: OrderStatus::Open,
            failure_count: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_quote_for_base_is_bid() {
        // 4_500 USDC-units offered for 1_000 ETH-units.
        let (side, entry) = ctx().resolve(&record(QUOTE, 4_500, BASE, 1_000)).unwrap();
        assert_eq!(side, Side::Bid);
        assert_eq!(entry.price, dec!(4.5));
        assert_eq!(entry.quantity, dec!(0.00001));
    }

    #[test]
    fn test_base_for_quote_is_ask() {
        let (side, entry) = ctx()
            .resolve(&record(BASE, 100_000_000, QUOTE, 460_000_000_000))
            .unwrap();
        assert_eq!(side, Side::Ask);
        assert_eq!(entry.price, dec!(4600));
        assert_eq!(entry.quantity, dec!(1));
    }

    #[test]
    fn test_zero_amounts_are_discarded() {
        assert!(ctx().resolve(&record(QUOTE, 0, BASE, 1_000)).is_none());
        assert!(ctx().resolve(&record(QUOTE, 4_500, BASE, 0)).is_none());
    }

    #[test]
    fn test_foreign_asset_pair_is_discarded() {
        assert!(ctx().resolve(&record("0xother", 100, BASE, 100)).is_none());
        assert!(ctx().resolve(&record(QUOTE, 100, "0xother", 100)).is_none());
        // Same asset on both legs is not a trade on this pair either.
        assert!(ctx().resolve(&record(BASE, 100, BASE, 100)).is_none());
    }

    #[test]
    fn test_closed_statuses_are_discarded() {
        let mut rec = record(QUOTE, 4_500, BASE, 1_000);
        rec.status = OrderStatus::Filled;
        assert!(ctx().resolve(&rec).is_none());
        rec.status = OrderStatus::Cancelled;
        assert!(ctx().resolve(&rec).is_none());
    }

    #[test]
    fn test_partial_counts_as_open() {
        let mut rec = record(QUOTE, 4_500, BASE, 1_000);
        rec.status = OrderStatus::Partial;
        assert!(ctx().resolve(&rec).is_some());
    }

    #[test]
    fn test_source_side_annotation_is_ignored() {
        // is_bid says ask, asset ids say bid; asset ids win.
        let mut rec = record(QUOTE, 4_500, BASE, 1_000);
        rec.is_bid = false;
        let (side, _) = ctx().resolve(&rec).unwrap();
        assert_eq!(side, Side::Bid);
    }
}
