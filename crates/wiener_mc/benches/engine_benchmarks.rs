//! Criterion benchmarks for the simulation engine hot paths.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wiener_mc::{
    aggregate, aggregate_par, EnsembleConfig, NormalSampler, PathParams, PathSimulator,
    SeededUniform,
};

fn bench_normal_sampler(c: &mut Criterion) {
    c.bench_function("normal_sampler_fill_10k", |b| {
        let mut sampler = NormalSampler::new(SeededUniform::from_seed(42));
        let mut buffer = vec![0.0; 10_000];
        b.iter(|| {
            sampler.fill(black_box(&mut buffer)).unwrap();
        });
    });
}

fn bench_path_simulation(c: &mut Criterion) {
    c.bench_function("simulate_path_1k_steps", |b| {
        let mut simulator = PathSimulator::new(SeededUniform::from_seed(42));
        let params = PathParams::new(1.0, 1_000).unwrap();
        b.iter(|| simulator.simulate(black_box(&params)).unwrap());
    });
}

fn bench_aggregate(c: &mut Criterion) {
    let config = EnsembleConfig::builder()
        .horizon(1.0)
        .n_steps(100)
        .n_paths(10_000)
        .seed(42)
        .build()
        .unwrap();

    c.bench_function("aggregate_10k_paths_sequential", |b| {
        b.iter(|| aggregate(SeededUniform::from_seed(42), black_box(&config)).unwrap());
    });

    c.bench_function("aggregate_10k_paths_parallel", |b| {
        b.iter(|| aggregate_par(black_box(&config)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_normal_sampler,
    bench_path_simulation,
    bench_aggregate
);
criterion_main!(benches);
