//! Criterion benchmarks for the deviate engine layer.
//!
//! Benchmarks cover:
//! - Scalar versus batch uniform generation
//! - Normal deviate batch generation (Box–Muller or library transform,
//!   depending on the selected backend)
//! - The two-phase staged batch path

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scatter_rng::{DefaultEngine, DeviateEngine, StagedNormalSampler};

/// Benchmark uniform generation, scalar and batch forms.
fn bench_uniform_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("uniform_generation");

    for n_samples in [1_000, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("scalar", n_samples),
            &n_samples,
            |b, &n| {
                let mut rng = DefaultEngine::from_seed(42);
                b.iter(|| {
                    let mut sum = 0.0;
                    for _ in 0..n {
                        sum += rng.gen_uniform();
                    }
                    black_box(sum)
                });
            },
        );
    }

    for n_samples in [1_000, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("batch", n_samples),
            &n_samples,
            |b, &n| {
                let mut rng = DefaultEngine::from_seed(42);
                let mut buffer = vec![0.0; n];
                b.iter(|| {
                    rng.fill_uniform(&mut buffer);
                    black_box(buffer.iter().sum::<f64>())
                });
            },
        );
    }

    group.finish();
}

/// Benchmark normal deviate batch generation.
fn bench_normal_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("normal_generation");

    for n_samples in [1_000, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("batch", n_samples),
            &n_samples,
            |b, &n| {
                let mut rng = DefaultEngine::from_seed(42);
                let mut buffer = vec![0.0; n];
                b.iter(|| {
                    rng.fill_normal(&mut buffer);
                    black_box(buffer.iter().sum::<f64>())
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the staged two-phase batch path against the interleaved path.
fn bench_staged_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("staged_normal");

    for n_samples in [10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("two_phase", n_samples),
            &n_samples,
            |b, &n| {
                let mut stage =
                    StagedNormalSampler::<DefaultEngine>::new(42, n).expect("valid capacity");
                let mut buffer = vec![0.0; n];
                b.iter(|| {
                    stage.fill_normal(&mut buffer);
                    black_box(buffer.iter().sum::<f64>())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_uniform_generation,
    bench_normal_generation,
    bench_staged_path
);
criterion_main!(benches);
