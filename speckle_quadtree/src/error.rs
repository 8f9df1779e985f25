// Copyright 2025 the Speckle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction errors.

use thiserror::Error;

/// Invalid parameters passed when constructing a [`Quadtree`](crate::Quadtree).
///
/// These are programming errors. Runtime outcomes such as an out-of-region
/// insert or a nearest-neighbor query on an empty tree are reported through
/// return values instead.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum QuadtreeError {
    /// The root region has a non-positive or non-finite extent.
    #[error("region extent must be finite and positive, got {width} x {height}")]
    InvalidRegion {
        /// Width of the rejected region.
        width: f64,
        /// Height of the rejected region.
        height: f64,
    },

    /// A node must be able to hold at least one element before splitting.
    #[error("capacity must be at least 1")]
    ZeroCapacity,
}
