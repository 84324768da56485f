//! Wire-format types for the backend snapshot and order endpoints
//!
//! Handles deserialization of raw swap-note records, user orders, and the
//! optional pre-aggregated depth chart response.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a swap note as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Open,
    Partial,
    Filled,
    Cancelled,
}

impl OrderStatus {
    /// Whether an order in this status still contributes to the book.
    ///
    /// Partial fills are reported with gross offered/requested amounts, so
    /// they count as fully open until the backend flips the status.
    pub fn is_open(self) -> bool {
        matches!(self, OrderStatus::Open | OrderStatus::Partial)
    }
}

/// One open or partially-filled swap note in asset-pair form
///
/// A swap note encodes an offered asset/amount and a requested asset/amount,
/// not a side-tagged (price, quantity) pair. The `price` and `is_bid` fields
/// are the source's own annotations and are not trusted by the pipeline; side
/// and price are re-derived from the asset ids and amounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSwapNoteRecord {
    pub id: String,

    pub note_id: String,

    pub creator_id: String,

    pub offered_asset_id: String,

    /// Offered amount in the smallest unit of the offered asset
    pub offered_amount: u64,

    pub requested_asset_id: String,

    /// Requested amount in the smallest unit of the requested asset
    pub requested_amount: u64,

    /// Price as annotated by the source; ignored by book construction
    #[serde(default)]
    pub price: Decimal,

    /// Side as annotated by the source; ignored by book construction
    #[serde(default)]
    pub is_bid: bool,

    pub status: OrderStatus,

    #[serde(default)]
    pub failure_count: u32,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Declared side of a user order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

/// One of the user's own orders, in side-tagged (price, quantity) form
///
/// The stored encoding is not uniform between sides: see
/// [`crate::book::canonical`] for the buy-side correction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawOrder {
    pub id: String,

    pub note_id: String,

    pub side: OrderSide,

    /// Raw price field; side-dependent encoding
    pub price: Decimal,

    /// Raw quantity field; side-dependent encoding
    pub quantity: Decimal,

    #[serde(default)]
    pub filled_quantity: Decimal,

    pub status: OrderStatus,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// One row of the pre-aggregated depth chart response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepthChartEntry {
    pub price: Decimal,
    pub amount: Decimal,
    /// Cumulative amount at this price or better
    pub total: Decimal,
}

/// Pre-aggregated depth chart response from the backend
///
/// Optional convenience path: when the backend has already leveled the book,
/// this maps field-for-field into a [`crate::book::BookSummary`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepthChartResponse {
    #[serde(default)]
    pub bids: Vec<DepthChartEntry>,

    #[serde(default)]
    pub asks: Vec<DepthChartEntry>,

    #[serde(default)]
    pub spread: Decimal,

    #[serde(default)]
    pub spread_percentage: Decimal,

    /// Mid-price proxy; the backend names this `last_price`
    #[serde(default)]
    pub last_price: Decimal,

    #[serde(default)]
    pub total_bid_volume: Decimal,

    #[serde(default)]
    pub total_ask_volume: Decimal,
}
