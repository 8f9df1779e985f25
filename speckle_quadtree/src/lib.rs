// Copyright 2025 the Speckle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Speckle Quadtree: a region quadtree over 2D points with payloads.
//!
//! Speckle Quadtree maps pointer locations and selection rectangles to
//! large point sets (plotted series, detector centers) in interactive tools.
//!
//! - Insert points with arbitrary payloads; leaves split into four quadrants once full.
//! - Query every payload inside an axis-aligned [`Region`].
//! - Find the nearest stored element to a location with branch-and-bound pruning.
//!
//! Points are [`kurbo::Point`]s and regions convert to and from [`kurbo::Rect`].
//! Containment is inclusive on every edge. Points exactly on a node's center
//! lines route toward the top-left quadrant, on both axes.
//!
//! # Example
//!
//! ```rust
//! use speckle_quadtree::{Point, Quadtree, Region};
//!
//! // A 100×100 domain, at most 4 levels deep, splitting above 2 elements.
//! let mut tree = Quadtree::new(Region::new(0.0, 0.0, 100.0, 100.0), 4, 2);
//! assert!(tree.insert("a", Point::new(10.0, 10.0)));
//! assert!(tree.insert("b", Point::new(10.0, 90.0)));
//! assert!(tree.is_leaf());
//!
//! // The third insert splits the root.
//! assert!(tree.insert("c", Point::new(90.0, 10.0)));
//! assert!(!tree.is_leaf());
//!
//! // Out-of-region points are rejected, not errors.
//! assert!(!tree.insert("z", Point::new(120.0, 10.0)));
//!
//! let hits = tree.query_region(&Region::new(0.0, 0.0, 50.0, 100.0));
//! assert_eq!(hits.len(), 2);
//!
//! let nearest = tree.query_point(Point::new(0.0, 0.0)).unwrap();
//! assert_eq!(nearest.payload, "a");
//! ```
//!
//! ## Choosing parameters
//!
//! - `capacity`: elements a leaf holds before splitting. Small values give deep,
//!   narrow trees; large values trade query pruning for fewer nodes.
//! - `max_depth`: caps subdivision. Leaves at this depth accept any number of
//!   elements, so heavily duplicated coordinates never recurse without bound.
//!
//! [`QuadtreeConfig`] bundles both and can be deserialized with the `serde` feature.
//!
//! ## Limitations
//!
//! There is no removal, rebalancing, or merging. Rebuild the tree when the
//! underlying point set changes. The tree is a plain single-owner structure;
//! wrap it in your own synchronization if several threads need it.
//!
//! ### Float semantics
//!
//! Coordinates are expected to be finite. NaN locations are never contained
//! and are rejected by [`Quadtree::insert`]. Debug builds assert on
//! non-finite nearest-neighbor queries.

#![no_std]

extern crate alloc;

pub mod config;
pub mod error;
pub mod quadtree;
pub mod types;

pub use config::QuadtreeConfig;
pub use error::QuadtreeError;
pub use quadtree::{Iter, Quadtree};
pub use types::{Element, Point, Quadrant, Region};
