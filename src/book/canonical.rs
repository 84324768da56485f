//! Per-order canonicalization for the user's own orders
//!
//! The side-tagged (price, quantity) encoding coming out of the order store
//! is not uniform between sides: sell orders carry a quote-per-base price and
//! a base-unit quantity, while buy orders carry the reciprocal price and a
//! quote-unit quantity. The upstream encoder is external, so the correction
//! is reproduced here exactly as observed rather than changed. Parsing the
//! raw order into [`OrderTerms`] applies the side split once, structurally,
//! so no call site can forget it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::parser::{OrderSide, RawOrder};

/// A raw order's terms with the side-specific encoding made explicit
#[derive(Debug, Clone, PartialEq)]
pub enum OrderTerms {
    /// Buy orders store the reciprocal of the quote-per-base price, and the
    /// quantity field holds the quote amount offered (the total cost).
    Buy {
        inverted_price: Decimal,
        quote_amount: Decimal,
    },
    /// Sell orders store price and quantity in display form already.
    Sell {
        price: Decimal,
        base_amount: Decimal,
    },
}

/// Display-ready price, quantity, and total for one order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayOrder {
    /// Quote-per-base price
    pub price: Decimal,
    /// Base-asset quantity
    pub quantity: Decimal,
    /// Quote-asset cost of the full order
    pub total: Decimal,
}

impl OrderTerms {
    /// Split a raw order into side-explicit terms.
    pub fn from_raw(order: &RawOrder) -> Self {
        match order.side {
            OrderSide::Buy => OrderTerms::Buy {
                inverted_price: order.price,
                quote_amount: order.quantity,
            },
            OrderSide::Sell => OrderTerms::Sell {
                price: order.price,
                base_amount: order.quantity,
            },
        }
    }

    /// Produce the display form, undoing the buy-side inversion.
    ///
    /// Returns `None` when the stored buy price is zero, which cannot be
    /// inverted; such an order is malformed and is skipped by callers.
    pub fn display(&self) -> Option<DisplayOrder> {
        match self {
            OrderTerms::Sell { price, base_amount } => Some(DisplayOrder {
                price: *price,
                quantity: *base_amount,
                total: *base_amount * *price,
            }),
            OrderTerms::Buy {
                inverted_price,
                quote_amount,
            } => {
                let actual_price = Decimal::ONE.checked_div(*inverted_price)?;
                let quantity = quote_amount.checked_div(actual_price)?;
                Some(DisplayOrder {
                    price: actual_price,
                    quantity,
                    total: *quote_amount,
                })
            }
        }
    }
}

/// Canonicalize one of the user's orders for display.
pub fn canonicalize(order: &RawOrder) -> Option<DisplayOrder> {
    OrderTerms::from_raw(order).display()
}
