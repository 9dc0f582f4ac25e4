//! Site-response benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability of the transfer function (frequencies, layers, depths)
//! - Quarter-wavelength search (frequencies, search method)
//! - Scalar site proxies on deep profiles
//!
//! For serial execution, use `FASTSRTK_MODE=serial cargo bench`.
//! For parallel execution, use `FASTSRTK_MODE=parallel cargo bench`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fastSrtk::prelude::*;
use fastSrtk_benchmarks::{frequency_axis, generate_profile, log_frequency_axis};
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("FASTSRTK_MODE").ok().as_deref() {
        Some("serial") => (false, "serial"),
        _ => (true, "parallel"),
    }
}

// ============================================================================
// Transfer Function
// ============================================================================

fn bench_tf_frequencies(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("tf_frequencies_{}", mode_name));
    group.sample_size(30);

    let (h, vs, dn, qs) = generate_profile(20, 42);

    for n in [100, 1_000, 5_000] {
        group.throughput(Throughput::Elements(n as u64));
        let freqs = frequency_axis(n, 0.1, 25.0);

        group.bench_with_input(BenchmarkId::new("surface", n), &n, |b, _| {
            b.iter(|| {
                TransferFunction::new()
                    .frequencies(&freqs)
                    .depth(0.0)
                    .parallel(use_parallel)
                    .build()
                    .unwrap()
                    .compute_columns(black_box(&h), black_box(&vs), black_box(&dn), Some(&qs))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_tf_layers(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("tf_layers_{}", mode_name));
    group.sample_size(30);

    let freqs = log_frequency_axis(500, 0.1, 50.0);

    for layers in [5, 20, 50, 100] {
        let (h, vs, dn, qs) = generate_profile(layers, 7);

        group.bench_with_input(BenchmarkId::new("interfaces", layers), &layers, |b, _| {
            b.iter(|| {
                TransferFunction::new()
                    .frequencies(&freqs)
                    .interfaces()
                    .incidence_angle(30.0)
                    .parallel(use_parallel)
                    .build()
                    .unwrap()
                    .compute_columns(black_box(&h), black_box(&vs), black_box(&dn), Some(&qs))
                    .unwrap()
            })
        });
    }
    group.finish();
}

// ============================================================================
// Quarter Wavelength
// ============================================================================

fn bench_qwl(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("qwl_{}", mode_name));
    group.sample_size(30);

    let (h, vs, dn, _) = generate_profile(50, 11);

    for n in [100, 1_000] {
        let freqs = log_frequency_axis(n, 0.1, 50.0);
        group.throughput(Throughput::Elements(n as u64));

        for (name, method) in [("bisection", Bisection), ("golden", GoldenSection)] {
            group.bench_with_input(BenchmarkId::new(name, n), &n, |b, _| {
                b.iter(|| {
                    QuarterWavelength::new()
                        .frequencies(&freqs)
                        .search_method(method)
                        .parallel(use_parallel)
                        .build()
                        .unwrap()
                        .compute_columns(black_box(&h), black_box(&vs), black_box(&dn))
                        .unwrap()
                })
            });
        }
    }
    group.finish();
}

// ============================================================================
// Site Proxies
// ============================================================================

fn bench_proxies(c: &mut Criterion) {
    let mut group = c.benchmark_group("proxies");

    let (h, vs, _, qs) = generate_profile(200, 3);

    group.bench_function("vs30", |b| {
        b.iter(|| vs30(black_box(&h), black_box(&vs)).unwrap())
    });
    group.bench_function("kappa0", |b| {
        b.iter(|| site_kappa(black_box(&h), black_box(&vs), black_box(&qs), None).unwrap())
    });
    group.bench_function("average_velocity_500m", |b| {
        b.iter(|| traveltime_average_velocity(black_box(&h), black_box(&vs), 500.0).unwrap())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_tf_frequencies,
    bench_tf_layers,
    bench_qwl,
    bench_proxies,
);

criterion_main!(benches);
