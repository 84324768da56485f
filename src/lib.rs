//! Depth chart core for a swap-note based CLOB frontend
//!
//! This crate rebuilds a canonical, side-correct, price-leveled order book
//! from raw partial-swap-note records, canonicalizes the asymmetric encoding
//! of a user's own orders, and polls the backend for fresh snapshots.

pub mod book;
pub mod client;
pub mod config;
pub mod error;
pub mod parser;
pub mod scheduler;

pub use book::{
    aggregate, build_summary, summarize, AssetPairContext, BookLevels, BookSummary,
    CanonicalEntry, DepthLevel, DisplayOrder, OrderTerms, Side,
};
pub use client::DepthClient;
pub use config::Config;
pub use error::{DepthError, Result};
pub use parser::{DepthChartResponse, OrderSide, OrderStatus, RawOrder, RawSwapNoteRecord};
pub use scheduler::{RefreshHandle, RefreshScheduler, SnapshotState};
