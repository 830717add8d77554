//! Benchmarks for interface flux and boundary kernels.
//!
//! Run with: `cargo bench --bench flux_bench`
//!
//! Compares the equilibrated low-order flux against the centered high-order
//! flux, and measures the dynamic boundary resolver.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use swe_kernels::{Boundary, Precomputed, ShallowWater, State};

/// Generate neighbouring node pairs over a wavy bed.
fn generate_test_states(n: usize) -> Vec<(Precomputed<2, f64>, Precomputed<2, f64>, [f64; 2])> {
    let mut states = Vec::with_capacity(n);
    for i in 0..n {
        let phase = (i as f64) * 0.1;

        // Left node
        let z_l = 0.5 * phase.sin();
        let h_l = 10.0 + 2.0 * phase.sin() - z_l;
        let u_l = 0.5 + 0.3 * phase.cos();
        let v_l = 0.2 - 0.1 * phase.sin();
        let left = Precomputed::new(State::new(h_l, [h_l * u_l, h_l * v_l]), z_l);

        // Right node (slightly different)
        let z_r = 0.5 * (phase + 0.1).sin();
        let h_r = 10.0 + 1.5 * (phase + 0.5).sin() - z_r;
        let u_r = 0.4 + 0.2 * (phase + 0.3).cos();
        let v_r = 0.3 - 0.15 * (phase + 0.2).sin();
        let right = Precomputed::new(State::new(h_r, [h_r * u_r, h_r * v_r]), z_r);

        // Normal direction (unit vector)
        let angle = phase * 0.5;
        let normal = [angle.cos(), angle.sin()];

        states.push((left, right, normal));
    }
    states
}

/// Benchmark individual flux functions.
fn bench_flux_functions(c: &mut Criterion) {
    let mut group = c.benchmark_group("flux_functions");

    let sw = ShallowWater::default();
    let states = generate_test_states(1000);

    group.bench_function("equilibrated", |b| {
        b.iter(|| {
            let mut total_h = 0.0;
            for (left, right, normal) in &states {
                let flux = sw.flux(black_box(left), black_box(right));
                total_h += flux.contract(black_box(normal)).h();
            }
            black_box(total_h)
        })
    });

    group.bench_function("high_order", |b| {
        b.iter(|| {
            let mut total_h = 0.0;
            for (left, right, normal) in &states {
                let flux = sw.high_order_flux(black_box(left), black_box(right));
                total_h += flux.contract(black_box(normal)).h();
            }
            black_box(total_h)
        })
    });

    group.finish();
}

/// Benchmark the boundary resolver per regime.
fn bench_boundary_conditions(c: &mut Criterion) {
    let mut group = c.benchmark_group("boundary_conditions");

    let sw = ShallowWater::default();
    let normal = [0.6, 0.8];
    let prescribed = State::new(1.0, [0.0, 0.0]);

    for (name, m) in [
        ("supersonic_inflow", [-6.0, -8.0]),
        ("subsonic_inflow", [-0.6, -0.8]),
        ("subsonic_outflow", [0.6, 0.8]),
        ("supersonic_outflow", [6.0, 8.0]),
    ] {
        let u = State::new(1.0, m);
        group.bench_with_input(BenchmarkId::new("dynamic", name), &u, |b, u| {
            b.iter(|| {
                sw.apply_boundary_conditions(
                    Boundary::Dynamic,
                    black_box(*u),
                    black_box(&normal),
                    || prescribed,
                )
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_flux_functions, bench_boundary_conditions);
criterion_main!(benches);
