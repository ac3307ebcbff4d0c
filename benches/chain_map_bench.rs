//! Benchmark for ChainedHashMap vs standard HashMap.
//!
//! Compares the chaining map's text hash and bucket chains against the
//! standard library's SipHash table, with owned-String keys on both sides.
//! Key Vecs are pre-generated and cloned in setup so only the map work is
//! measured.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use sarf::index::ChainedHashMap;
use std::collections::HashMap;
use std::hint::black_box;

const SIZES: [usize; 3] = [100, 1000, 10000];

/// Pre-generates the key set for one size.
fn generate_keys(size: usize) -> Vec<String> {
    (0..size).map(|index| format!("جذر{index}")).collect()
}

/// Returns the appropriate BatchSize based on input size.
fn batch_size_for(size: usize) -> BatchSize {
    if size < 1000 {
        BatchSize::SmallInput
    } else {
        BatchSize::LargeInput
    }
}

// =============================================================================
// insert Benchmark
// =============================================================================

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("insert");

    for size in SIZES {
        let keys = generate_keys(size);

        // ChainedHashMap insert, growth doublings included
        group.bench_with_input(
            BenchmarkId::new("ChainedHashMap", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || keys.clone(),
                    |keys| {
                        let mut map = ChainedHashMap::new();
                        for (index, key) in keys.into_iter().enumerate() {
                            map.insert(black_box(key), black_box(index));
                        }
                        black_box(map)
                    },
                    batch_size_for(size),
                );
            },
        );

        // Standard HashMap insert
        group.bench_with_input(
            BenchmarkId::new("HashMap", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || keys.clone(),
                    |keys| {
                        let mut map = HashMap::new();
                        for (index, key) in keys.into_iter().enumerate() {
                            map.insert(black_box(key), black_box(index));
                        }
                        black_box(map)
                    },
                    batch_size_for(size),
                );
            },
        );
    }

    group.finish();
}

// =============================================================================
// get Benchmark
// =============================================================================

fn benchmark_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("get");

    for size in SIZES {
        // Prepare data, probing through borrowed &str keys
        let keys = generate_keys(size);
        let chained: ChainedHashMap<String, usize> = keys
            .iter()
            .enumerate()
            .map(|(index, key)| (key.clone(), index))
            .collect();
        let standard: HashMap<String, usize> = keys
            .iter()
            .enumerate()
            .map(|(index, key)| (key.clone(), index))
            .collect();

        group.bench_with_input(
            BenchmarkId::new("ChainedHashMap", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let mut sum = 0;
                    for key in &keys {
                        if let Some(&value) = chained.get(black_box(key.as_str())) {
                            sum += value;
                        }
                    }
                    black_box(sum)
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("HashMap", size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut sum = 0;
                for key in &keys {
                    if let Some(&value) = standard.get(black_box(key.as_str())) {
                        sum += value;
                    }
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

// =============================================================================
// remove Benchmark
// =============================================================================

fn benchmark_remove(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("remove");

    for size in SIZES {
        let keys = generate_keys(size);
        let pairs: Vec<(String, usize)> = keys
            .iter()
            .enumerate()
            .map(|(index, key)| (key.clone(), index))
            .collect();

        group.bench_with_input(
            BenchmarkId::new("ChainedHashMap", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || pairs.iter().cloned().collect::<ChainedHashMap<_, _>>(),
                    |mut map| {
                        for key in &keys {
                            map.remove(black_box(key.as_str()));
                        }
                        black_box(map)
                    },
                    batch_size_for(size),
                );
            },
        );

        group.bench_with_input(
            BenchmarkId::new("HashMap", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || pairs.iter().cloned().collect::<HashMap<_, _>>(),
                    |mut map| {
                        for key in &keys {
                            map.remove(black_box(key.as_str()));
                        }
                        black_box(map)
                    },
                    batch_size_for(size),
                );
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_insert, benchmark_get, benchmark_remove);

criterion_main!(benches);
