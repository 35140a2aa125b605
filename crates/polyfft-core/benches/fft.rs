//! Criterion benchmarks for the FFT engine and multiplier.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use polyfft_core::convolution::mul_by_convolution;
use polyfft_core::fft::multiply;
use polyfft_core::fft_core::{transform, Direction};
use polyfft_core::fft_recursion::fft_recursive;
use polyfft_core::{Complex64, Polynomial};

fn random_polynomial(rng: &mut StdRng, len: usize) -> Polynomial {
    (0..len)
        .map(|_| Complex64::new(rng.gen::<f64>(), rng.gen::<f64>()))
        .collect()
}

fn bench_transforms(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let sizes: Vec<usize> = vec![256, 4_096, 65_536];

    let mut group = c.benchmark_group("Iterative");
    for &n in &sizes {
        let p = random_polynomial(&mut rng, n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &p, |b, p| {
            b.iter(|| transform(p, Direction::Forward).unwrap());
        });
    }
    group.finish();

    let mut group = c.benchmark_group("Recursive");
    for &n in &sizes {
        let p = random_polynomial(&mut rng, n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &p, |b, p| {
            b.iter(|| fft_recursive(p, Direction::Forward).unwrap());
        });
    }
    group.finish();
}

fn bench_multiply(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(11);
    let lens: Vec<usize> = vec![100, 500, 2_000];

    let mut group = c.benchmark_group("Multiply");
    for &len in &lens {
        let p = random_polynomial(&mut rng, len);
        let q = random_polynomial(&mut rng, len);
        group.bench_with_input(BenchmarkId::new("fft", len), &(&p, &q), |b, (p, q)| {
            b.iter(|| multiply(p, q).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("convolution", len), &(&p, &q), |b, (p, q)| {
            b.iter(|| mul_by_convolution(p, q));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_transforms, bench_multiply);
criterion_main!(benches);
