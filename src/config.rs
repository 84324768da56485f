//! Configuration module for the depth chart core

use rust_decimal::Decimal;
use serde::Deserialize;
use std::env;
use std::str::FromStr;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Backend server URL for snapshot and order endpoints
    pub server_url: String,

    /// Base asset symbol (the asset being priced, e.g. "ETH")
    pub base_asset: String,

    /// Quote asset symbol (the pricing asset, e.g. "USDC")
    pub quote_asset: String,

    /// Faucet account id of the base asset
    pub base_faucet_id: String,

    /// Faucet account id of the quote asset
    pub quote_faucet_id: String,

    /// Decimal scale of the base asset's smallest unit
    pub base_decimals: u32,

    /// Polling interval in milliseconds
    pub refresh_interval_ms: u64,

    /// Per-request timeout in seconds
    pub fetch_timeout_secs: u64,

    /// Display price used when one side of the book is empty
    pub fallback_mid_price: Decimal,
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server_url: env::var("SERVER_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            base_asset: env::var("BASE_ASSET").unwrap_or_else(|_| "ETH".to_string()),
            quote_asset: env::var("QUOTE_ASSET").unwrap_or_else(|_| "USDC".to_string()),
            base_faucet_id: env::var("BASE_FAUCET_ID")
                .unwrap_or_else(|_| "0x5154599567cddc201bca5404fb1a9d".to_string()),
            quote_faucet_id: env::var("QUOTE_FAUCET_ID")
                .unwrap_or_else(|_| "0x9f79cc38536bb120342549f49c0d60".to_string()),
            base_decimals: env::var("BASE_DECIMALS")
                .unwrap_or_else(|_| "8".to_string())
                .parse()
                .unwrap_or(8),
            refresh_interval_ms: env::var("REFRESH_INTERVAL_MS")
                .unwrap_or_else(|_| "2000".to_string())
                .parse()
                .unwrap_or(2000),
            fetch_timeout_secs: env::var("FETCH_TIMEOUT_SECS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .unwrap_or(5),
            fallback_mid_price: env::var("FALLBACK_MID_PRICE")
                .ok()
                .and_then(|v| Decimal::from_str(&v).ok())
                .unwrap_or_else(default_fallback_mid),
        })
    }
}

fn default_fallback_mid() -> Decimal {
    // Placeholder shown when the book is one-sided; no principled derivation.
    Decimal::from_str("45234.56").unwrap_or_default()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:8080".to_string(),
            base_asset: "ETH".to_string(),
            quote_asset: "USDC".to_string(),
            base_faucet_id: "0x5154599567cddc201bca5404fb1a9d".to_string(),
            quote_faucet_id: "0x9f79cc38536bb120342549f49c0d60".to_string(),
            base_decimals: 8,
            refresh_interval_ms: 2000,
            fetch_timeout_secs: 5,
            fallback_mid_price: default_fallback_mid(),
        }
    }
}
