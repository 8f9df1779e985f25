// Copyright 2025 the Speckle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Speckle Quadtree: insert, split, range query, and nearest neighbor.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p speckle_demos --example quadtree_basics`

use speckle_quadtree::{Point, Quadrant, Quadtree, Region};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut tree = Quadtree::new(Region::new(0.0, 0.0, 100.0, 100.0), 4, 2);
    let _ = tree.insert("a", Point::new(10.0, 10.0));
    let _ = tree.insert("b", Point::new(10.0, 90.0));
    info!("after two inserts: leaf={}, contents={}", tree.is_leaf(), tree.contents().len());

    let _ = tree.insert("c", Point::new(90.0, 10.0));
    info!("after the third insert: leaf={}", tree.is_leaf());
    for q in Quadrant::ALL {
        if let Some(child) = tree.child(q) {
            let payloads: Vec<_> = child.contents().iter().map(|e| e.payload).collect();
            info!("{:?} {:?}: {:?}", q, child.region(), payloads);
        }
    }

    let rejected = !tree.insert("outside", Point::new(150.0, 50.0));
    info!("out-of-region insert rejected: {}", rejected);

    let all = tree.query_region(&tree.region());
    info!("full query: {:?}", all);

    let nearest = tree.query_point(Point::new(0.0, 0.0));
    info!("nearest to origin: {:?}", nearest.map(|e| e.payload));
}
