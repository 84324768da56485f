//! HTTP client for the backend snapshot and order endpoints
//!
//! The raw-record path is primary: the backend reports open swap notes and
//! this crate levels them itself. The pre-aggregated depth-chart path is an
//! optional backend convenience that maps field-for-field into a
//! [`BookSummary`].

use std::time::Duration;

use rust_decimal::Decimal;
use tracing::debug;

use crate::book::{build_summary, AssetPairContext, BookSummary, DepthLevel, DisplayOrder};
use crate::error::{DepthError, Result};
use crate::parser::{DepthChartResponse, RawOrder, RawSwapNoteRecord};

/// Client for the matching/settlement backend's read endpoints
pub struct DepthClient {
    http: reqwest::Client,
    server_url: String,
    timeout_secs: u64,
}

impl DepthClient {
    pub fn new(server_url: &str, timeout_secs: u64) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| DepthError::ConfigError(e.to_string()))?;

        Ok(Self {
            http,
            server_url: server_url.trim_end_matches('/').to_string(),
            timeout_secs,
        })
    }

    /// Fetch the raw open swap-note records for a trading pair.
    pub async fn fetch_raw_records(
        &self,
        base: &str,
        quote: &str,
    ) -> Result<Vec<RawSwapNoteRecord>> {
        let url = format!(
            "{}/api/orders?base={}&quote={}",
            self.server_url, base, quote
        );
        debug!(url = %url, "Fetching raw order records");

        let records = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| self.classify(e))?
            .error_for_status()
            .map_err(|e| self.classify(e))?
            .json::<Vec<RawSwapNoteRecord>>()
            .await
            .map_err(|e| DepthError::ParseError(e.to_string()))?;

        Ok(records)
    }

    /// Fetch raw records and run the full pipeline over them.
    pub async fn fetch_book(
        &self,
        base: &str,
        quote: &str,
        ctx: &AssetPairContext,
        fallback_mid: Decimal,
    ) -> Result<BookSummary> {
        let records = self.fetch_raw_records(base, quote).await?;
        Ok(build_summary(&records, ctx, fallback_mid))
    }

    /// Fetch a pre-aggregated depth chart, mapping the backend's field names.
    pub async fn fetch_depth_chart(&self, base: &str, quote: &str) -> Result<BookSummary> {
        let url = format!(
            "{}/api/depth-chart?base={}&quote={}",
            self.server_url, base, quote
        );
        debug!(url = %url, "Fetching pre-aggregated depth chart");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| self.classify(e))?
            .error_for_status()
            .map_err(|e| self.classify(e))?
            .json::<DepthChartResponse>()
            .await
            .map_err(|e| DepthError::ParseError(e.to_string()))?;

        Ok(map_depth_chart(response))
    }

    /// Fetch the open orders of one account.
    ///
    /// The account identifier is always an explicit parameter; this client
    /// never reads ambient state.
    pub async fn fetch_user_orders(&self, account_id: &str) -> Result<Vec<RawOrder>> {
        let url = format!(
            "{}/api/orders/user?account_id={}",
            self.server_url, account_id
        );
        debug!(url = %url, "Fetching user orders");

        let orders = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| self.classify(e))?
            .error_for_status()
            .map_err(|e| self.classify(e))?
            .json::<Vec<RawOrder>>()
            .await
            .map_err(|e| DepthError::ParseError(e.to_string()))?;

        Ok(orders)
    }

    /// Fetch one account's open orders in display form.
    ///
    /// Closed orders and orders whose buy-side price cannot be inverted are
    /// dropped; the drop count is logged in aggregate.
    pub async fn fetch_user_display_orders(&self, account_id: &str) -> Result<Vec<DisplayOrder>> {
        let orders = self.fetch_user_orders(account_id).await?;
        let open = orders.iter().filter(|o| o.status.is_open());

        let mut displays = Vec::new();
        let mut skipped = 0usize;
        for order in open {
            match crate::book::canonical::canonicalize(order) {
                Some(display) => displays.push(display),
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            debug!(skipped, account_id = %account_id, "Skipped malformed user orders");
        }

        Ok(displays)
    }

    fn classify(&self, err: reqwest::Error) -> DepthError {
        if err.is_timeout() {
            DepthError::FetchTimeout(self.timeout_secs)
        } else {
            DepthError::RestApiError(err.to_string())
        }
    }
}

/// Map the backend's depth chart response into a [`BookSummary`].
fn map_depth_chart(response: DepthChartResponse) -> BookSummary {
    let to_levels = |rows: Vec<crate::parser::DepthChartEntry>| -> Vec<DepthLevel> {
        rows.into_iter()
            .map(|row| DepthLevel {
                price: row.price,
                quantity: row.amount,
                cumulative_quantity: row.total,
            })
            .collect()
    };

    BookSummary {
        bids: to_levels(response.bids),
        asks: to_levels(response.asks),
        spread: response.spread,
        spread_percentage: response.spread_percentage,
        mid_price: response.last_price,
        total_bid_volume: response.total_bid_volume,
        total_ask_volume: response.total_ask_volume,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::DepthChartEntry;
    use rust_decimal_macros::dec;

    #[test]
    fn test_depth_chart_field_mapping() {
        let response = DepthChartResponse {
            bids: vec![DepthChartEntry {
                price: dec!(45200),
                amount: dec!(0.5),
                total: dec!(0.5),
            }],
            asks: vec![DepthChartEntry {
                price: dec!(45250),
                amount: dec!(0.6),
                total: dec!(0.6),
            }],
            spread: dec!(50),
            spread_percentage: dec!(0.11),
            last_price: dec!(45225),
            total_bid_volume: dec!(0.5),
            total_ask_volume: dec!(0.6),
        };

        let summary = map_depth_chart(response);
        assert_eq!(summary.bids[0].cumulative_quantity, dec!(0.5));
        assert_eq!(summary.asks[0].price, dec!(45250));
        assert_eq!(summary.mid_price, dec!(45225));
        assert_eq!(summary.spread, dec!(50));
    }
}
