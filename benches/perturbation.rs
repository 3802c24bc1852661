//! Benchmarks for the perturbation sweep

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tac_analytics::flight::{perturbation_band, render_table};

fn benchmark_band(c: &mut Criterion) {
    c.bench_function("perturbation_band", |b| {
        b.iter(|| perturbation_band(black_box(0.625), black_box(-10)))
    });
}

fn benchmark_full_table(c: &mut Criterion) {
    c.bench_function("render_table", |b| b.iter(render_table));
}

criterion_group!(benches, benchmark_band, benchmark_full_table);
criterion_main!(benches);
