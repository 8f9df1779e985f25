// Copyright 2025 the Speckle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The region quadtree: insertion with splitting, range queries, and nearest neighbor.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::config::QuadtreeConfig;
use crate::error::QuadtreeError;
use crate::types::{Element, Point, Quadrant, Region};

/// A region quadtree node. Callers interact with the root.
///
/// A node starts as a leaf holding elements directly. Once a leaf holds
/// `capacity` elements and sits above `max_depth`, the next insert splits it
/// into four children covering its quadrants; its contents move into
/// the children and the node stays internal for the rest of its life.
///
/// Elements are never removed. Build a fresh tree when the point set changes.
pub struct Quadtree<T> {
    region: Region,
    max_depth: usize,
    capacity: usize,
    depth: usize,
    contents: Vec<Element<T>>,
    // Populated on split; the order is `Quadrant::ALL`.
    children: Option<Box<[Self; 4]>>,
}

impl<T> Debug for Quadtree<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Quadtree")
            .field("region", &self.region)
            .field("depth", &self.depth)
            .field("max_depth", &self.max_depth)
            .field("capacity", &self.capacity)
            .field("leaf", &self.is_leaf())
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl<T> Quadtree<T> {
    /// Create an empty root covering `region`.
    ///
    /// # Panics
    ///
    /// Panics if `region` has a non-positive or non-finite extent, or if
    /// `capacity` is 0. Use [`Quadtree::try_new`] to handle these cases.
    pub fn new(region: Region, max_depth: usize, capacity: usize) -> Self {
        match Self::try_new(region, max_depth, capacity) {
            Ok(tree) => tree,
            Err(e) => panic!("invalid quadtree parameters: {e}"),
        }
    }

    /// Create an empty root covering `region`.
    ///
    /// # Errors
    ///
    /// Returns [`QuadtreeError::InvalidRegion`] if either extent of `region`
    /// is non-positive or non-finite, and [`QuadtreeError::ZeroCapacity`] if
    /// `capacity` is 0.
    pub fn try_new(
        region: Region,
        max_depth: usize,
        capacity: usize,
    ) -> Result<Self, QuadtreeError> {
        Self::with_config(region, QuadtreeConfig::new(max_depth, capacity))
    }

    /// Create an empty root covering `region` with parameters from `config`.
    ///
    /// `max_depth` is clamped to [`Region::max_subdivision_depth`]; past that
    /// depth `f64` quadrants no longer shrink, so deeper nodes could never
    /// separate points. [`Quadtree::max_depth`] reports the clamped value.
    ///
    /// # Errors
    ///
    /// Same as [`Quadtree::try_new`].
    pub fn with_config(region: Region, config: QuadtreeConfig) -> Result<Self, QuadtreeError> {
        if !region.is_valid_extent() {
            return Err(QuadtreeError::InvalidRegion {
                width: region.width(),
                height: region.height(),
            });
        }
        config.validate()?;
        let max_depth = config.max_depth.min(region.max_subdivision_depth());
        Ok(Self::node(region, max_depth, config.capacity, 0))
    }

    fn node(region: Region, max_depth: usize, capacity: usize, depth: usize) -> Self {
        Self {
            region,
            max_depth,
            capacity,
            depth,
            contents: Vec::new(),
            children: None,
        }
    }

    /// The region this node covers.
    pub fn region(&self) -> Region {
        self.region
    }

    /// Depth of this node; the root is 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Maximum depth any node in this tree may reach.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Elements a leaf holds before splitting.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The parameters shared by every node of this tree.
    pub fn config(&self) -> QuadtreeConfig {
        QuadtreeConfig::new(self.max_depth, self.capacity)
    }

    /// True until this node splits.
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Elements held directly by this node. Always empty once split.
    pub fn contents(&self) -> &[Element<T>] {
        &self.contents
    }

    /// The four children in [`Quadrant::ALL`] order, if this node has split.
    pub fn children(&self) -> Option<&[Self; 4]> {
        self.children.as_deref()
    }

    /// The child covering quadrant `q`, if this node has split.
    pub fn child(&self, q: Quadrant) -> Option<&Self> {
        self.children().map(|c| &c[q.index()])
    }

    /// Number of elements stored under this node.
    ///
    /// This walks the subtree; callers needing frequent counts should keep
    /// their own counter alongside their inserts.
    pub fn len(&self) -> usize {
        match self.children() {
            None => self.contents.len(),
            Some(children) => children.iter().map(Self::len).sum(),
        }
    }

    /// True if nothing is stored under this node.
    pub fn is_empty(&self) -> bool {
        match self.children() {
            None => self.contents.is_empty(),
            Some(children) => children.iter().all(Self::is_empty),
        }
    }

    /// Iterate over every stored element, depth-first in child order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            stack: vec![self],
            current: core::slice::Iter::default(),
        }
    }

    /// Insert `payload` at `location`.
    ///
    /// Returns `false`, leaving the tree untouched, if `location` lies outside
    /// this node's region. Points on the region's boundary are accepted.
    pub fn insert(&mut self, payload: T, location: Point) -> bool {
        self.insert_element(Element::new(payload, location))
    }

    fn insert_element(&mut self, element: Element<T>) -> bool {
        if !self.region.contains(element.location) {
            tracing::trace!(
                x = element.location.x,
                y = element.location.y,
                depth = self.depth,
                "insert rejected: outside region"
            );
            return false;
        }
        let mut node = self;
        loop {
            let q = node.region.quadrant_of(element.location);
            let children: &mut [Self; 4] = match node.children {
                Some(ref mut children) => children,
                None if node.contents.len() < node.capacity || node.depth >= node.max_depth => {
                    node.contents.push(element);
                    return true;
                }
                None => node.split(),
            };
            // Routed points always lie inside the child's region.
            node = &mut children[q.index()];
        }
    }

    fn split(&mut self) -> &mut [Self; 4] {
        tracing::trace!(
            depth = self.depth,
            moved = self.contents.len(),
            "splitting quadtree node"
        );
        let depth = self.depth + 1;
        let mut children = Box::new(
            Quadrant::ALL
                .map(|q| Self::node(self.region.quadrant(q), self.max_depth, self.capacity, depth)),
        );
        for element in core::mem::take(&mut self.contents) {
            let q = self.region.quadrant_of(element.location);
            let inserted = children[q.index()].insert_element(element);
            debug_assert!(inserted, "routed element must lie inside its quadrant");
        }
        self.children.insert(children)
    }

    /// Payloads of every element whose location lies in `query` (inclusive).
    ///
    /// A `query` with a negative extent contains no points and matches nothing.
    ///
    /// Results are ordered by a depth-first walk in child order and, within
    /// a leaf, by insertion. The same tree and query always yield the same
    /// order.
    pub fn query_region(&self, query: &Region) -> Vec<&T> {
        let mut out = Vec::new();
        self.visit_region(query, &mut |e| out.push(&e.payload));
        out
    }

    /// Like [`Quadtree::query_region`], returning whole elements.
    pub fn query_region_elements(&self, query: &Region) -> Vec<&Element<T>> {
        let mut out = Vec::new();
        self.visit_region(query, &mut |e| out.push(e));
        out
    }

    fn visit_region<'a>(&'a self, query: &Region, f: &mut impl FnMut(&'a Element<T>)) {
        if !self.region.overlaps(query) {
            return;
        }
        match self.children() {
            None => {
                for e in &self.contents {
                    if query.contains(e.location) {
                        f(e);
                    }
                }
            }
            Some(children) => {
                for child in children {
                    child.visit_region(query, f);
                }
            }
        }
    }

    /// The element closest to `location` by Euclidean distance.
    ///
    /// `location` may lie outside the tree's region. Among equally distant
    /// elements the first one reached wins. Returns `None` for an empty tree
    /// and for a non-finite `location`.
    pub fn query_point(&self, location: Point) -> Option<&Element<T>> {
        if !location.is_finite() {
            return None;
        }
        let mut best = None;
        self.nearest(location, &mut best);
        best.map(|(e, _)| e)
    }

    fn nearest<'a>(&'a self, location: Point, best: &mut Option<(&'a Element<T>, f64)>) {
        let Some(children) = self.children() else {
            for e in &self.contents {
                let d = e.location.distance_squared(location);
                if best.is_none_or(|(_, b)| d < b) {
                    *best = Some((e, d));
                }
            }
            return;
        };

        // Seed the bound from the quadrant the location routes to.
        let home = self
            .region
            .contains(location)
            .then(|| self.region.quadrant_of(location).index());
        if let Some(h) = home {
            children[h].nearest(location, best);
        }

        for (i, child) in children.iter().enumerate() {
            if Some(i) == home {
                continue;
            }
            let bound = child.region.distance_squared_to(location);
            if best.is_none_or(|(_, b)| bound < b) {
                child.nearest(location, best);
            }
        }
    }
}

/// Depth-first iterator over a tree's elements. See [`Quadtree::iter`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    stack: Vec<&'a Quadtree<T>>,
    current: core::slice::Iter<'a, Element<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a Element<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(e) = self.current.next() {
                return Some(e);
            }
            let node = self.stack.pop()?;
            self.current = node.contents.iter();
            if let Some(children) = node.children() {
                // Reversed so the top-left child pops first.
                self.stack.extend(children.iter().rev());
            }
        }
    }
}

impl<'a, T> IntoIterator for &'a Quadtree<T> {
    type Item = &'a Element<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
