// Copyright 2025 the Speckle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use speckle_benches::{Rng, gen_uniform_points};
use speckle_quadtree::{Point, Quadtree, Region};

use rstar::RTree;

fn bench_nearest_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_external_compare");
    let mut rng = Rng::new(0xFACE_FEED_CAFE_BABE);
    let probes: Vec<Point> = (0..256)
        .map(|_| Point::new(rng.next_f64() * 2000.0, rng.next_f64() * 2000.0))
        .collect();
    for &n in &[4096usize, 16_384] {
        let points = gen_uniform_points(n, 2000.0);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("speckle_build_n{}", n), |b| {
            b.iter_batched(
                || Quadtree::new(Region::new(0.0, 0.0, 2000.0, 2000.0), 10, 8),
                |mut tree| {
                    for (i, p) in points.iter().copied().enumerate() {
                        let _ = tree.insert(i as u32, p);
                    }
                    black_box(tree.is_leaf());
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_bulk_build_n{}", n), |b| {
            b.iter_batched(
                || points.iter().map(|p| [p.x, p.y]).collect::<Vec<_>>(),
                |coords| black_box(RTree::bulk_load(coords).size()),
                BatchSize::SmallInput,
            )
        });

        let mut tree = Quadtree::new(Region::new(0.0, 0.0, 2000.0, 2000.0), 10, 8);
        for (i, p) in points.iter().copied().enumerate() {
            let _ = tree.insert(i as u32, p);
        }
        let rtree = RTree::bulk_load(points.iter().map(|p| [p.x, p.y]).collect());

        group.bench_function(format!("speckle_nearest_n{}", n), |b| {
            b.iter(|| {
                for &p in &probes {
                    black_box(tree.query_point(p));
                }
            })
        });
        group.bench_function(format!("rstar_nearest_n{}", n), |b| {
            b.iter(|| {
                for &p in &probes {
                    black_box(rtree.nearest_neighbor(&[p.x, p.y]));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_nearest_external_compare);
criterion_main!(benches);
