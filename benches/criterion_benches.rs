//! Criterion benchmarks for vega-math
//!
//! Measures wall-clock time for the generic vector path against the
//! packed f32x4 path. Run with: cargo bench --bench criterion_benches

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use vega_math::{lerp, F32x4, InvSqrtParams, Vec4f};

/// Benchmark basic arithmetic on both paths
fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");

    let a = Vec4f::new([1.0, 2.0, 3.0, 4.0]);
    let b = Vec4f::new([4.0, 3.0, 2.0, 1.0]);
    let pa = F32x4::from(a);
    let pb = F32x4::from(b);

    group.bench_function("generic/add", |bencher| {
        bencher.iter(|| black_box(black_box(a) + black_box(b)))
    });

    group.bench_function("packed/add", |bencher| {
        bencher.iter(|| black_box(black_box(pa) + black_box(pb)))
    });

    group.bench_function("generic/mul", |bencher| {
        bencher.iter(|| black_box(black_box(a) * black_box(b)))
    });

    group.bench_function("packed/mul", |bencher| {
        bencher.iter(|| black_box(black_box(pa) * black_box(pb)))
    });

    group.bench_function("generic/div", |bencher| {
        bencher.iter(|| black_box(black_box(a) / black_box(b)))
    });

    group.bench_function("packed/div", |bencher| {
        bencher.iter(|| black_box(black_box(pa) / black_box(pb)))
    });

    group.finish();
}

/// Benchmark dot product and magnitude
fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry");

    let a = Vec4f::new([1.0, 2.0, 3.0, 4.0]);
    let b = Vec4f::new([4.0, 3.0, 2.0, 1.0]);
    let pa = F32x4::from(a);
    let pb = F32x4::from(b);

    group.bench_function("generic/dot", |bencher| {
        bencher.iter(|| black_box(black_box(a).dot(&black_box(b))))
    });

    group.bench_function("packed/dot", |bencher| {
        bencher.iter(|| black_box(black_box(pa).dot(black_box(pb))))
    });

    group.bench_function("generic/magnitude", |bencher| {
        bencher.iter(|| black_box(black_box(a).magnitude()))
    });

    group.bench_function("packed/magnitude", |bencher| {
        bencher.iter(|| black_box(black_box(pa).magnitude()))
    });

    group.finish();
}

/// Benchmark the two normalization strategies
fn bench_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalization");

    let a = Vec4f::new([1.0, 2.0, 3.0, 4.0]);
    let pa = F32x4::from(a);
    let params = InvSqrtParams::default();

    group.bench_function("generic/normalized", |bencher| {
        bencher.iter(|| black_box(black_box(a).normalized()))
    });

    group.bench_function("generic/normalized_fast", |bencher| {
        bencher.iter(|| black_box(black_box(a).normalized_fast(params)))
    });

    group.bench_function("packed/normalized", |bencher| {
        bencher.iter(|| black_box(black_box(pa).normalized()))
    });

    group.bench_function("packed/normalized_fast", |bencher| {
        bencher.iter(|| black_box(black_box(pa).normalized_fast(params)))
    });

    group.finish();
}

/// Benchmark comparison reductions
fn bench_comparisons(c: &mut Criterion) {
    let mut group = c.benchmark_group("comparisons");

    let a = Vec4f::new([1.0, 2.0, 3.0, 4.0]);
    let b = Vec4f::new([4.0, 3.0, 2.0, 1.0]);
    let pa = F32x4::from(a);
    let pb = F32x4::from(b);

    group.bench_function("generic/cmp_all_less", |bencher| {
        bencher.iter(|| black_box(black_box(a).cmp_all_less(black_box(b))))
    });

    group.bench_function("packed/cmp_all_less", |bencher| {
        bencher.iter(|| black_box(black_box(pa).cmp_all_less(black_box(pb))))
    });

    group.finish();
}

/// Benchmark interpolation
fn bench_interpolation(c: &mut Criterion) {
    let a = Vec4f::new([0.0, 0.0, 0.0, 0.0]);
    let b = Vec4f::new([1.0, 2.0, 3.0, 4.0]);

    c.bench_function("lerp", |bencher| {
        bencher.iter(|| black_box(lerp(&black_box(a), black_box(b), black_box(0.25f32))))
    });
}

criterion_group!(
    benches,
    bench_arithmetic,
    bench_geometry,
    bench_normalization,
    bench_comparisons,
    bench_interpolation
);
criterion_main!(benches);
