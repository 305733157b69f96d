use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use cmdbench::parse;
use cmdbench::stats::{self, TrimmedStats};
use cmdbench::types::Precision;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Token list for `size` commands with matching directories and quoted
/// argument strings.
fn make_tokens(size: usize) -> Vec<String> {
    let mut tokens: Vec<String> = vec!["-i".into(), "50".into(), "--commands".into()];
    for i in 0..size {
        tokens.push(format!("command-{}", i));
    }
    tokens.push("--wdirectories".into());
    for _ in 0..size {
        tokens.push(".".into());
    }
    tokens.push("--args".into());
    for i in 0..size {
        tokens.push(format!("\"--flag value-{}\"", i));
    }
    tokens
}

/// Deterministic synthetic timing series; no RNG dependency.
fn make_series(size: usize) -> Vec<u64> {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    (0..size)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state % 2_000
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_args");
    for size in [2usize, 16, 64] {
        let tokens = make_tokens(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &tokens, |b, tokens| {
            b.iter(|| parse::parse_args(black_box(tokens)).unwrap());
        });
    }
    group.finish();
}

fn bench_stats_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_trim_stats");
    for size in [100usize, 10_000] {
        let series = make_series(size);
        let trim = stats::trim_count(size as u32);
        group.bench_with_input(BenchmarkId::from_parameter(size), &series, |b, series| {
            b.iter(|| {
                let mut samples = series.clone();
                samples.sort_unstable();
                let kept = stats::trim_outliers(&samples, trim);
                black_box(TrimmedStats::compute(kept, Precision::Millis))
            });
        });
    }
    group.finish();
}

fn bench_median(c: &mut Criterion) {
    let mut sorted = make_series(10_000);
    sorted.sort_unstable();

    c.bench_function("median_10k_sorted", |b| {
        b.iter(|| black_box(stats::median_ms(black_box(&sorted))));
    });
}

criterion_group!(benches, bench_parse, bench_stats_pipeline, bench_median);
criterion_main!(benches);
