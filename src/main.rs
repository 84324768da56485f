//! Depth chart poller
//!
//! Polls the backend for open swap-note records, rebuilds the leveled book,
//! and logs book status. The same library pipeline backs the frontend's
//! depth chart, spread, and mid-price displays.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use clob_depth::{AssetPairContext, Config, DepthClient, RefreshScheduler};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().json())
        .with(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    info!("Starting depth chart poller");

    let config = Arc::new(Config::load()?);
    info!(
        base = %config.base_asset,
        quote = %config.quote_asset,
        server = %config.server_url,
        "Configuration loaded"
    );

    let client = Arc::new(DepthClient::new(
        &config.server_url,
        config.fetch_timeout_secs,
    )?);
    let ctx = Arc::new(AssetPairContext::new(
        &config.base_faucet_id,
        &config.quote_faucet_id,
        config.base_decimals,
    ));

    let fetch_config = config.clone();
    let handle = RefreshScheduler::spawn(
        Duration::from_millis(config.refresh_interval_ms),
        move || {
            let client = client.clone();
            let ctx = ctx.clone();
            let config = fetch_config.clone();
            async move {
                client
                    .fetch_book(
                        &config.base_asset,
                        &config.quote_asset,
                        &ctx,
                        config.fallback_mid_price,
                    )
                    .await
            }
        },
    );

    // Periodic status logging until interrupted.
    let mut status_interval =
        tokio::time::interval(Duration::from_millis(config.refresh_interval_ms.max(1000)));
    loop {
        tokio::select! {
            _ = status_interval.tick() => {
                let state = handle.snapshot().await;
                if let Some(book) = &state.data {
                    info!(
                        bid_levels = book.bids.len(),
                        ask_levels = book.asks.len(),
                        mid_price = %book.mid_price,
                        spread = %book.spread,
                        "Book status"
                    );
                } else if let Some(error) = &state.error {
                    info!(error = %error, "No snapshot yet");
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down");
                handle.stop();
                break;
            }
        }
    }

    Ok(())
}
