// Copyright 2025 the Speckle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point generators shared by the Speckle benchmarks.

use speckle_quadtree::Point;

/// Deterministic xorshift generator; keeps benchmark inputs stable across runs.
#[derive(Clone, Debug)]
pub struct Rng(u64);

impl Rng {
    /// Seeded generator. The seed must be non-zero.
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Next raw value.
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    /// Uniform value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1_u64 << 53) as f64)
    }
}

/// `n * n` points on a regular lattice with spacing `pitch`, like a detector plane.
pub fn gen_lattice_points(n: usize, pitch: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            out.push(Point::new(x as f64 * pitch, y as f64 * pitch));
        }
    }
    out
}

/// `count` points uniformly spread over `[0, size]²`.
pub fn gen_uniform_points(count: usize, size: f64) -> Vec<Point> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| Point::new(rng.next_f64() * size, rng.next_f64() * size))
        .collect()
}

/// Points gathered around `n_clusters` random centers, like a dense scatter plot.
pub fn gen_clustered_points(
    n_clusters: usize,
    per_cluster: usize,
    size: f64,
    spread: f64,
) -> Vec<Point> {
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    for _ in 0..n_clusters {
        let (cx, cy) = (rng.next_f64() * size, rng.next_f64() * size);
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Point::new(
                (cx + dx).clamp(0.0, size),
                (cy + dy).clamp(0.0, size),
            ));
        }
    }
    out
}
