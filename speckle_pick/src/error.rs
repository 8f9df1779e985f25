// Copyright 2025 the Speckle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while setting up a [`Picker`](crate::Picker).

use speckle_quadtree::QuadtreeError;
use thiserror::Error;

/// Failure to construct or rebuild a picker.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum PickError {
    /// The underlying quadtree rejected its parameters.
    #[error(transparent)]
    Index(#[from] QuadtreeError),

    /// Bounds were requested from a point set with no finite points.
    #[error("cannot fit bounds: no finite points")]
    NoFinitePoints,
}
