//! Jagged and lattice codec benchmarks.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use resqml_bench::fixtures::{depth_lattice, irregular_lattice, jagged_sequences};
use resqml_core::JaggedArray;
use std::hint::black_box;

fn benchmark_jagged_encode(c: &mut Criterion) {
    let sequences = jagged_sequences(10_000, 8);

    c.bench_function("jagged_encode", |b| {
        b.iter(|| JaggedArray::encode(black_box(&sequences).iter().cloned()))
    });
}

fn benchmark_jagged_decode(c: &mut Criterion) {
    let jagged = JaggedArray::encode(jagged_sequences(10_000, 8));
    let (offsets, values) = jagged.into_parts();

    c.bench_function("jagged_decode", |b| {
        b.iter(|| JaggedArray::decode(black_box(offsets.clone()), black_box(values.clone())))
    });
}

fn benchmark_jagged_access(c: &mut Criterion) {
    let jagged = JaggedArray::encode(jagged_sequences(10_000, 8));

    c.bench_function("jagged_get", |b| {
        b.iter(|| black_box(&jagged).get(black_box(7_777)))
    });
}

fn benchmark_lattice_value_at(c: &mut Criterion) {
    let regular = depth_lattice(1_000, 1_000);
    let irregular = irregular_lattice(1_000_000);

    c.bench_function("lattice_value_at_regular", |b| {
        b.iter(|| regular.value_at(black_box(&[512, 777])))
    });

    c.bench_function("lattice_value_at_irregular", |b| {
        b.iter(|| irregular.value_at(black_box(&[777_777])))
    });
}

fn benchmark_lattice_materialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("lattice_materialize");
    for n in [100usize, 1_000] {
        let lattice = depth_lattice(n, n);
        group.bench_with_input(BenchmarkId::from_parameter(n * n), &lattice, |b, lattice| {
            b.iter(|| lattice.materialize())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_jagged_encode,
    benchmark_jagged_decode,
    benchmark_jagged_access,
    benchmark_lattice_value_at,
    benchmark_lattice_materialize,
);
criterion_main!(benches);
