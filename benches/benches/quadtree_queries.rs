// Copyright 2025 the Speckle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use speckle_benches::{Rng, gen_clustered_points, gen_lattice_points, gen_uniform_points};
use speckle_quadtree::{Point, Quadtree, Region};

fn build(points: &[Point], size: f64, max_depth: usize, capacity: usize) -> Quadtree<u32> {
    let mut tree = Quadtree::new(Region::new(0.0, 0.0, size, size), max_depth, capacity);
    for (i, p) in points.iter().copied().enumerate() {
        let _ = tree.insert(i as u32, p);
    }
    tree
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &n in &[32usize, 64, 128] {
        let points = gen_lattice_points(n, 10.0);
        let size = n as f64 * 10.0;
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("lattice_n{}", n), |b| {
            b.iter_batched(
                || Quadtree::new(Region::new(0.0, 0.0, size, size), 8, 8),
                |mut tree| {
                    for (i, p) in points.iter().copied().enumerate() {
                        let _ = tree.insert(i as u32, p);
                    }
                    black_box(tree.is_leaf());
                },
                BatchSize::SmallInput,
            )
        });
    }
    let points = gen_clustered_points(16, 1024, 2000.0, 80.0);
    group.bench_function("clustered", |b| {
        b.iter(|| black_box(build(&points, 2000.0, 10, 8).is_leaf()))
    });
    group.finish();
}

fn bench_query_region(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_region");
    let points = gen_uniform_points(16_384, 2000.0);
    let tree = build(&points, 2000.0, 10, 8);
    for &side in &[20.0, 200.0, 800.0] {
        let q = Region::new(600.0, 600.0, side, side);
        group.bench_function(format!("quadtree_side{}", side), |b| {
            b.iter(|| black_box(tree.query_region(&q).len()))
        });
        group.bench_function(format!("linear_side{}", side), |b| {
            b.iter(|| black_box(points.iter().filter(|p| q.contains(**p)).count()))
        });
    }
    group.finish();
}

fn bench_query_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_point");
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    let probes: Vec<Point> = (0..256)
        .map(|_| Point::new(rng.next_f64() * 2000.0, rng.next_f64() * 2000.0))
        .collect();
    for (name, points) in [
        ("uniform", gen_uniform_points(16_384, 2000.0)),
        ("clustered", gen_clustered_points(16, 1024, 2000.0, 80.0)),
    ] {
        let tree = build(&points, 2000.0, 10, 8);
        group.throughput(Throughput::Elements(probes.len() as u64));
        group.bench_function(format!("quadtree_{}", name), |b| {
            b.iter(|| {
                for &p in &probes {
                    black_box(tree.query_point(p));
                }
            })
        });
        group.bench_function(format!("linear_{}", name), |b| {
            b.iter(|| {
                for &p in &probes {
                    let best = points
                        .iter()
                        .map(|q| q.distance_squared(p))
                        .fold(f64::INFINITY, f64::min);
                    black_box(best);
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_query_region, bench_query_point);
criterion_main!(benches);
