//! Criterion benchmarks for RBM training and sampling

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::Array2;
use rbm_profiling::data::RatingMatrix;
use rbm_profiling::rbm::{Rbm, TrainingConfig};

fn random_binary(rows: usize, cols: usize) -> Array2<f64> {
    Array2::from_shape_fn((rows, cols), |(i, j)| ((i * 7 + j * 3) % 2) as f64)
}

fn bench_training(c: &mut Criterion) {
    let mut group = c.benchmark_group("CD-1 Training");
    let config = TrainingConfig::new(100, 0.1).with_log_interval(0);

    let demo = RatingMatrix::demo();
    group.bench_function("demo_6x6_h2", |b| {
        b.iter(|| {
            let mut rbm = Rbm::new(6, 2).unwrap();
            rbm.train(black_box(demo.ratings()), &config).unwrap()
        });
    });

    for (visible, hidden) in [(16, 4), (64, 16), (256, 32)].iter() {
        let data = random_binary(100, *visible);
        group.bench_with_input(
            BenchmarkId::new("units", format!("{}_{}", visible, hidden)),
            &data,
            |b, data| {
                b.iter(|| {
                    let mut rbm = Rbm::new(*visible, *hidden).unwrap();
                    rbm.train(black_box(data), &config).unwrap()
                });
            },
        );
    }

    group.finish();
}

fn bench_inference(c: &mut Criterion) {
    let mut group = c.benchmark_group("Inference");

    for visible in [16, 64, 256].iter() {
        let mut rbm = Rbm::new(*visible, 16).unwrap();
        let data = random_binary(100, *visible);

        group.bench_with_input(BenchmarkId::new("run_visible", visible), &data, |b, data| {
            b.iter(|| rbm.run_visible(black_box(data)).unwrap());
        });
    }

    group.finish();
}

fn bench_daydream(c: &mut Criterion) {
    let mut group = c.benchmark_group("Daydream");

    for samples in [10, 100, 1000].iter() {
        let mut rbm = Rbm::new(64, 16).unwrap();
        group.bench_with_input(BenchmarkId::new("samples", samples), samples, |b, &n| {
            b.iter(|| rbm.daydream(black_box(n)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_training, bench_inference, bench_daydream);
criterion_main!(benches);
