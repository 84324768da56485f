//! Benchmarks for depth book construction

use chrono::Utc;
use clob_depth::book::{aggregate, build_summary, summarize, AssetPairContext, Side};
use clob_depth::parser::{OrderStatus, RawSwapNoteRecord};
use clob_depth::CanonicalEntry;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_decimal::Decimal;
use std::str::FromStr;

const BASE: &str = "0x5154599567cddc201bca5404fb1a9d";
const QUOTE: &str = "0x9f79cc38536bb120342549f49c0d60";

fn create_records(count: usize) -> Vec<RawSwapNoteRecord> {
    (0..count)
        .map(|i| {
            let bid = i % 2 == 0;
            let (offered_asset, offered, requested_asset, requested) = if bid {
                (QUOTE, 450_000_000_000 - i as u64 * 1_000_000, BASE, 100_000_000)
            } else {
                (BASE, 100_000_000, QUOTE, 460_000_000_000 + i as u64 * 1_000_000)
            };
            RawSwapNoteRecord {
                id: format!("ord-{i}"),
                note_id: format!("0xnote{i}"),
                creator_id: "0xcreator".to_string(),
                offered_asset_id: offered_asset.to_string(),
                offered_amount: offered,
                requested_asset_id: requested_asset.to_string(),
                requested_amount: requested,
                price: Decimal::ZERO,
                is_bid: bid,
                status: OrderStatus::Open,
                failure_count: 0,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            }
        })
        .collect()
}

fn benchmark_build_summary(c: &mut Criterion) {
    let records = create_records(1_000);
    let ctx = AssetPairContext::new(BASE, QUOTE, 8);
    let fallback = Decimal::from_str("45234.56").unwrap();

    c.bench_function("build_summary_1000_records", |b| {
        b.iter(|| build_summary(black_box(&records), &ctx, fallback))
    });
}

fn benchmark_aggregate(c: &mut Criterion) {
    let entries: Vec<(Side, CanonicalEntry)> = (0..1_000)
        .map(|i| {
            let side = if i % 2 == 0 { Side::Bid } else { Side::Ask };
            (
                side,
                CanonicalEntry {
                    price: Decimal::from(45_000 + i),
                    quantity: Decimal::from_str("1.5").unwrap(),
                },
            )
        })
        .collect();

    c.bench_function("aggregate_1000_entries", |b| {
        b.iter(|| aggregate(black_box(entries.clone())))
    });
}

fn benchmark_summarize(c: &mut Criterion) {
    let entries: Vec<(Side, CanonicalEntry)> = (0..1_000)
        .map(|i| {
            let side = if i % 2 == 0 { Side::Bid } else { Side::Ask };
            (
                side,
                CanonicalEntry {
                    price: Decimal::from(45_000 + i),
                    quantity: Decimal::from_str("1.5").unwrap(),
                },
            )
        })
        .collect();
    let levels = aggregate(entries);
    let fallback = Decimal::from_str("45234.56").unwrap();

    c.bench_function("summarize_1000_levels", |b| {
        b.iter(|| summarize(black_box(levels.clone()), fallback))
    });
}

criterion_group!(
    benches,
    benchmark_build_summary,
    benchmark_aggregate,
    benchmark_summarize
);
criterion_main!(benches);
