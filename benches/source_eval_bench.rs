//! Benchmarks for source evaluation.
//!
//! Run with: `cargo bench --bench source_eval_bench`
//!
//! Benchmarks point evaluation against the number of emitters, grid sampling,
//! and causal pre-integration.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hydro_source::{
    Emitters, FourVector, HydroSource, HydroSourceTerm, InitialProfile, Parton, QcdString,
    SourceConfig, SourceGrid, SpacetimePoint, sample_grid,
};

/// Deterministic spread of emitters around the origin.
fn spread(i: usize, n: usize) -> (f64, f64, f64) {
    let t = i as f64 / n.max(1) as f64;
    let x = 2.0 * (7.0 * t).sin();
    let y = 2.0 * (11.0 * t).cos();
    let eta = 3.0 * (t - 0.5);
    (x, y, eta)
}

fn make_partons(n: usize) -> Vec<Parton> {
    (0..n)
        .map(|i| {
            let (x, y, eta_s) = spread(i, n);
            Parton {
                tau: 0.4 + 0.6 * (i % 10) as f64 / 10.0,
                x,
                y,
                eta_s,
                rapidity: eta_s + 0.1,
                mass: 0.3,
                px: 0.2 * x,
                py: 0.2 * y,
                energy: 1.0,
                baryon_number: 1.0,
            }
        })
        .collect()
}

fn make_strings(n: usize) -> Vec<QcdString> {
    (0..n)
        .map(|i| {
            let (x, y, eta) = spread(i, n);
            QcdString {
                norm: 1.0,
                delta_e: 2.0,
                tau_form: 0.5 + 0.5 * (i % 10) as f64 / 10.0,
                x_perp: x,
                y_perp: y,
                eta_s_left: eta - 1.0,
                eta_s_right: eta + 1.0,
                y_l: eta - 1.2,
                y_r: eta + 1.2,
            }
        })
        .collect()
}

fn string_source(n: usize) -> HydroSource {
    let emitters = Emitters::Strings {
        strings: make_strings(n),
        partons: make_partons(n / 2),
    };
    HydroSource::from_emitters(emitters, &SourceConfig::new(InitialProfile::StringModel)).unwrap()
}

fn parton_source(n: usize) -> HydroSource {
    let emitters = Emitters::Partons {
        partons: make_partons(n),
    };
    HydroSource::from_emitters(emitters, &SourceConfig::new(InitialProfile::Ampt)).unwrap()
}

/// Benchmark a single point evaluation.
fn bench_point_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_evaluation");
    let point = SpacetimePoint::new(0.8, 0.1, -0.2, 0.3);
    let u = FourVector::rest_frame();

    for n in [100, 1000, 10000] {
        let strings = string_source(n);
        let partons = parton_source(n);

        group.bench_with_input(BenchmarkId::new("strings_energy_momentum", n), &n, |b, _| {
            b.iter(|| strings.energy_momentum(black_box(&point), black_box(&u)));
        });
        group.bench_with_input(BenchmarkId::new("strings_baryon_density", n), &n, |b, _| {
            b.iter(|| strings.baryon_density(black_box(&point)));
        });
        group.bench_with_input(BenchmarkId::new("partons_energy_momentum", n), &n, |b, _| {
            b.iter(|| partons.energy_momentum(black_box(&point), black_box(&u)));
        });
    }

    group.finish();
}

/// Benchmark sampling over a grid.
fn bench_grid_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_sampling");
    group.sample_size(10);

    let source = parton_source(1000);
    for n in [16, 32] {
        let grid = SourceGrid::new(n, n, n, 0.2, 0.2, 0.2);
        group.bench_with_input(
            BenchmarkId::new("sequential", format!("{}_cells", grid.n_cells())),
            &grid,
            |b, grid| {
                b.iter(|| sample_grid(&source, black_box(grid), 0.8));
            },
        );

        #[cfg(feature = "parallel")]
        group.bench_with_input(
            BenchmarkId::new("parallel", format!("{}_cells", grid.n_cells())),
            &grid,
            |b, grid| {
                b.iter(|| hydro_source::sample_grid_parallel(&source, black_box(grid), 0.8));
            },
        );
    }

    group.finish();
}

/// Benchmark causal pre-integration at the start of hydrodynamics.
fn bench_pre_integration(c: &mut Criterion) {
    let mut group = c.benchmark_group("pre_integration");
    let source = parton_source(1000);
    let point = SpacetimePoint::new(0.6, 0.0, 0.0, 0.0);

    group.bench_function("energy_momentum_before", |b| {
        b.iter(|| source.energy_momentum_before(black_box(&point)));
    });
    group.bench_function("baryon_density_before", |b| {
        b.iter(|| source.baryon_density_before(black_box(&point)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_point_evaluation,
    bench_grid_sampling,
    bench_pre_integration
);
criterion_main!(benches);
