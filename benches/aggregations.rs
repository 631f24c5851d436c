//! Aggregation benchmarks
//!
//! Establishes a baseline for the two hot paths: frequency tallying and the
//! contingency-table + Cramer's V pipeline.
//!
//! Run with: cargo bench --bench aggregations

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use demostats::correlation::cramers_v;
use demostats::tabulate::{ContingencyTable, FrequencyTable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_SIZE: usize = 1_000;
const LARGE_SIZE: usize = 100_000;

const DOMAINS: [&str; 6] = [
    "acme.io",
    "globex.net",
    "initech.org",
    "umbrella.co",
    "hooli.com",
    "stark.dev",
];
const COUNTRIES: [&str; 8] = ["US", "IT", "DE", "FR", "GB", "ES", "JP", "BR"];

fn random_pairs(rng: &mut StdRng, size: usize) -> Vec<(String, String)> {
    (0..size)
        .map(|_| {
            (
                DOMAINS[rng.gen_range(0..DOMAINS.len())].to_string(),
                COUNTRIES[rng.gen_range(0..COUNTRIES.len())].to_string(),
            )
        })
        .collect()
}

fn bench_frequency_tally(c: &mut Criterion) {
    let mut group = c.benchmark_group("frequency_tally");
    let mut rng = StdRng::seed_from_u64(7);

    for size in [SMALL_SIZE, LARGE_SIZE] {
        let pairs = random_pairs(&mut rng, size);
        group.bench_with_input(BenchmarkId::new("tally", size), &pairs, |b, pairs| {
            b.iter(|| {
                FrequencyTable::tally(black_box(pairs), |p: &(String, String)| Ok(p.0.clone()))
                    .unwrap()
            });
        });
    }
    group.finish();
}

fn bench_cramers_v_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("cramers_v_pipeline");
    let mut rng = StdRng::seed_from_u64(11);

    for size in [SMALL_SIZE, LARGE_SIZE] {
        let pairs = random_pairs(&mut rng, size);
        group.bench_with_input(
            BenchmarkId::new("cross_tally_and_v", size),
            &pairs,
            |b, pairs| {
                b.iter(|| {
                    let table = ContingencyTable::cross_tally(
                        black_box(pairs),
                        |p: &(String, String)| Ok(p.0.clone()),
                        |p: &(String, String)| Ok(p.1.clone()),
                    )
                    .unwrap();
                    cramers_v(&table).unwrap()
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_frequency_tally, bench_cramers_v_pipeline);
criterion_main!(benches);
