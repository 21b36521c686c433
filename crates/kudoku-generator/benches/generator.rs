//! Benchmarks for puzzle generation.
//!
//! Measures the complete generation process (solution generation plus cell
//! removal) at the default empty-cell target, over three fixed seeds so
//! runs stay reproducible while covering more than one case.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, time::Duration};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kudoku_generator::PuzzleGenerator;

const SEEDS: [u64; 3] = [0xc1d4_4bd6_afaf_8af6, 0xa2b3_c4d5_e6f7_a8b9, 0x1234_5678_90ab_cdef];

fn bench_generator(c: &mut Criterion) {
    let generator = PuzzleGenerator::new();

    for (i, seed) in SEEDS.into_iter().enumerate() {
        c.bench_with_input(
            BenchmarkId::new("generator", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter(|| generator.generate_with_seed(hint::black_box(*seed)));
            },
        );
    }
}

criterion_group!(
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(12));
    targets = bench_generator
);
criterion_main!(benches);
