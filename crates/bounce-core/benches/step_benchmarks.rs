//! Benchmarks for the simulation step and full runs.
//!
//! Run with: cargo bench -p bounce-core
//!
//! The all-pairs contact scan is the quadratic part; the step benchmarks
//! report throughput in candidate pairs so regressions show up per pair.

#![allow(missing_docs, clippy::wildcard_imports)]

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use nalgebra::{Point3, Vector3};

use bounce_core::{detect_contacts, SimulationRequest, SimulationRunner, World, WorldParams};

/// Pack `count` spheres into an overlapping grid so the contact scan has
/// real work to do.
fn packed_world(count: usize) -> World {
    let mut world = World::new(WorldParams::default());
    let side = (count as f64).cbrt().ceil() as usize;

    for index in 0..count {
        let x = (index % side) as f64;
        let y = ((index / side) % side) as f64;
        let z = (index / (side * side)) as f64;
        // Spacing 0.9 with radius 0.5 leaves every neighbor overlapping
        world.add_body(
            Point3::new(x * 0.9, 2.0 + y * 0.9, z * 0.9),
            Vector3::new(0.0, -1.0, 0.0),
            0.5,
            1.0,
        );
    }

    world
}

/// Benchmark one full step (integrate, snapshot, detect, resolve) at
/// varying body counts.
fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    for count in [3, 10, 32] {
        let world = World::collision_scene(WorldParams::default(), count, 0.5);
        let pairs = count * (count - 1) / 2;

        group.throughput(Throughput::Elements(pairs as u64));
        group.bench_with_input(BenchmarkId::new("seeded", count), &world, |b, world| {
            b.iter_batched(
                || world.clone(),
                |mut world| black_box(SimulationRunner::step(&mut world, 0)),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark the raw all-pairs contact scan on dense packings.
fn bench_detect(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_contacts");

    for count in [8, 27, 64] {
        let world = packed_world(count);
        let pairs = count * (count - 1) / 2;

        group.throughput(Throughput::Elements(pairs as u64));
        group.bench_with_input(BenchmarkId::new("packed", count), &world, |b, world| {
            b.iter(|| black_box(detect_contacts(world.bodies())));
        });
    }

    group.finish();
}

/// Benchmark complete runs with the playground's default requests.
fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_run");
    group.sample_size(50);

    let collision = SimulationRequest::collision();
    group.bench_function("collision_defaults", |b| {
        b.iter(|| black_box(SimulationRunner::run(&collision)));
    });

    let gravity = SimulationRequest::gravity_drop();
    group.bench_function("gravity_defaults", |b| {
        b.iter(|| black_box(SimulationRunner::run(&gravity)));
    });

    group.finish();
}

criterion_group!(benches, bench_step, bench_detect, bench_full_run);
criterion_main!(benches);
