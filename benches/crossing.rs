//! Crossing benchmarks
//!
//! Run with: cargo bench
//!
//! The crossing query sits inside the innermost loop of a track fit (every helix is
//! intersected with every candidate layer on every iteration), so these measure the
//! cost of a single query and of a sweep over a barrel of layers.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use nalgebra::{Point3, Vector3};
use trackplane::{
    CrossingMode, CrossingOptions, Helix, ParallelPlanarLayer, SurfaceWithCrossing,
    float_types::{Real, TAU},
};

fn helix() -> Helix {
    Helix::from_momentum(Point3::origin(), Vector3::new(0.8, 0.3, 0.4), -1.0, 3.5).unwrap()
}

fn bench_single_crossing(c: &mut Criterion) {
    let layer = ParallelPlanarLayer::builder(60.0, 0.35).bz(3.5).build().unwrap();
    let helix = helix();

    for mode in [CrossingMode::Nearest, CrossingMode::Forward] {
        let options = CrossingOptions::with_mode(mode);
        c.bench_with_input(
            BenchmarkId::new("single_crossing", format!("{:?}", mode)),
            &options,
            |b, options| b.iter(|| layer.crossing(black_box(&helix), black_box(options))),
        );
    }
}

fn bench_barrel_sweep(c: &mut Criterion) {
    // 12-fold ladder barrel at 60 mm
    let ladders: Vec<ParallelPlanarLayer> = (0..12)
        .map(|i| {
            ParallelPlanarLayer::builder(60.0, i as Real * TAU / 12.0)
                .bz(3.5)
                .extent(33.0, 250.0, 0.0)
                .cell_id(i)
                .build()
                .unwrap()
        })
        .collect();
    let helix = helix();
    let options = CrossingOptions::with_mode(CrossingMode::Forward).require_on_surface(true);

    c.bench_function("barrel_sweep", |b| {
        b.iter(|| {
            ladders
                .iter()
                .filter_map(|ladder| ladder.crossing(black_box(&helix), &options).ok().flatten())
                .count()
        })
    });
}

criterion_group!(benches, bench_single_crossing, bench_barrel_sweep);
criterion_main!(benches);
