// Copyright 2025 the Speckle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree parameters shared by every node.

use crate::error::QuadtreeError;

/// Subdivision parameters, inherited unchanged by every node of a tree.
///
/// With the `serde` feature enabled this can be embedded in a host
/// application's settings file; missing fields fall back to [`Default`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct QuadtreeConfig {
    /// Deepest level a node may split to. The root is depth 0.
    ///
    /// Leaves at this depth accept any number of elements.
    pub max_depth: usize,
    /// Elements a leaf holds before it splits.
    pub capacity: usize,
}

impl QuadtreeConfig {
    /// Default maximum depth.
    pub const DEFAULT_MAX_DEPTH: usize = 8;
    /// Default leaf capacity.
    pub const DEFAULT_CAPACITY: usize = 8;

    /// Create a config from explicit parameters.
    pub const fn new(max_depth: usize, capacity: usize) -> Self {
        Self {
            max_depth,
            capacity,
        }
    }

    /// Check the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`QuadtreeError::ZeroCapacity`] if `capacity` is 0.
    pub fn validate(&self) -> Result<(), QuadtreeError> {
        if self.capacity == 0 {
            return Err(QuadtreeError::ZeroCapacity);
        }
        Ok(())
    }
}

impl Default for QuadtreeConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_DEPTH, Self::DEFAULT_CAPACITY)
    }
}
