// Copyright 2025 the Speckle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`Picker`]: a quadtree plus the bookkeeping an interactive view needs.

use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::{Point, Rect};
use speckle_quadtree::{Element, Quadtree, QuadtreeConfig, Region};

use crate::error::PickError;
use crate::hover::{HoverEvent, HoverState};

/// Padding added on each side of an axis with zero extent by [`Picker::fit`].
pub const FIT_PADDING: f64 = 0.5;

/// Maps pointer locations and selection rectangles to stored payloads.
///
/// Owns a [`Quadtree`] over fixed bounds and keeps element counts alongside
/// it, so [`Picker::len`] is O(1). The point set is replaced wholesale with
/// [`Picker::rebuild`]; there is no per-element removal.
pub struct Picker<T> {
    tree: Quadtree<T>,
    len: usize,
    rejected: usize,
}

impl<T> Debug for Picker<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Picker")
            .field("bounds", &self.bounds())
            .field("len", &self.len)
            .field("rejected", &self.rejected)
            .field("tree", &self.tree)
            .finish()
    }
}

impl<T> Picker<T> {
    /// Create an empty picker over `bounds`. Inverted rectangles are normalized.
    ///
    /// # Errors
    ///
    /// Returns [`PickError::Index`] if `bounds` has no area or `config` is invalid.
    pub fn new(bounds: Rect, config: QuadtreeConfig) -> Result<Self, PickError> {
        let tree = Quadtree::with_config(Region::from(bounds.abs()), config)?;
        Ok(Self {
            tree,
            len: 0,
            rejected: 0,
        })
    }

    /// Create a picker whose bounds enclose every finite point, and insert them all.
    ///
    /// Axes with zero extent (for example a single point, or a horizontal line
    /// of points) are padded by [`FIT_PADDING`] on each side. Non-finite points
    /// are counted as rejected.
    ///
    /// # Errors
    ///
    /// Returns [`PickError::NoFinitePoints`] if there is nothing finite to fit,
    /// and [`PickError::Index`] if the fitted extent overflows to infinity.
    pub fn fit<I>(config: QuadtreeConfig, points: I) -> Result<Self, PickError>
    where
        I: IntoIterator<Item = (T, Point)>,
    {
        let points: Vec<(T, Point)> = points.into_iter().collect();
        let bounds = fit_bounds(points.iter().map(|(_, p)| *p)).ok_or(PickError::NoFinitePoints)?;
        tracing::debug!(
            x0 = bounds.x0,
            y0 = bounds.y0,
            x1 = bounds.x1,
            y1 = bounds.y1,
            points = points.len(),
            "fitted picker bounds"
        );
        let mut picker = Self::new(bounds, config)?;
        let _ = picker.insert_all(points);
        Ok(picker)
    }

    /// The domain covered by this picker.
    pub fn bounds(&self) -> Rect {
        self.tree.region().to_rect()
    }

    /// The underlying quadtree.
    pub fn tree(&self) -> &Quadtree<T> {
        &self.tree
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of inserts rejected as outside the bounds since the last rebuild.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Insert a single element. Returns `false` if `point` is outside the bounds.
    pub fn insert(&mut self, payload: T, point: Point) -> bool {
        if self.tree.insert(payload, point) {
            self.len += 1;
            true
        } else {
            self.rejected += 1;
            false
        }
    }

    /// Replace every stored element with `points`, keeping bounds and parameters.
    ///
    /// Returns how many points were accepted.
    pub fn rebuild<I>(&mut self, points: I) -> usize
    where
        I: IntoIterator<Item = (T, Point)>,
    {
        // Parameters come from a tree that already validated them.
        self.tree = Quadtree::new(self.tree.region(), self.tree.max_depth(), self.tree.capacity());
        self.len = 0;
        self.rejected = 0;
        self.insert_all(points)
    }

    /// Replace every stored element with `points` over new `bounds`.
    ///
    /// On error the picker is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`PickError::Index`] if `bounds` has no area.
    pub fn rebuild_with_bounds<I>(&mut self, bounds: Rect, points: I) -> Result<usize, PickError>
    where
        I: IntoIterator<Item = (T, Point)>,
    {
        *self = Self::new(bounds, self.tree.config())?;
        Ok(self.insert_all(points))
    }

    fn insert_all<I>(&mut self, points: I) -> usize
    where
        I: IntoIterator<Item = (T, Point)>,
    {
        let before = self.len;
        for (payload, point) in points {
            let _ = self.insert(payload, point);
        }
        let accepted = self.len - before;
        tracing::debug!(accepted, rejected = self.rejected, "rebuilt picker");
        accepted
    }

    /// The element nearest to `pointer`, at any distance.
    pub fn nearest(&self, pointer: Point) -> Option<&Element<T>> {
        self.tree.query_point(pointer)
    }

    /// The element nearest to `pointer`, if it lies within `radius` (inclusive).
    ///
    /// A negative or NaN radius never matches.
    pub fn pick(&self, pointer: Point, radius: f64) -> Option<&Element<T>> {
        if radius.is_nan() || radius < 0.0 {
            return None;
        }
        self.nearest(pointer)
            .filter(|e| e.location.distance_squared(pointer) <= radius * radius)
    }

    /// Payloads inside a selection rectangle, edges included.
    ///
    /// The rectangle may be given in any corner order, as produced by a drag
    /// gesture.
    pub fn select(&self, rect: Rect) -> Vec<&T> {
        self.tree.query_region(&Region::from(rect.abs()))
    }

    /// Like [`Picker::select`], returning whole elements.
    pub fn select_elements(&self, rect: Rect) -> Vec<&Element<T>> {
        self.tree.query_region_elements(&Region::from(rect.abs()))
    }

    /// Pick at `pointer` and feed the result's key into `hover`.
    ///
    /// Returns the leave/enter transitions caused by this pointer move.
    pub fn update_hover<K, F>(
        &self,
        hover: &mut HoverState<K>,
        pointer: Point,
        radius: f64,
        key: F,
    ) -> Vec<HoverEvent<K>>
    where
        K: Copy + Eq,
        F: FnOnce(&Element<T>) -> K,
    {
        hover.update(self.pick(pointer, radius).map(key))
    }
}

/// Smallest rectangle enclosing every finite point, with zero-extent axes padded.
fn fit_bounds(points: impl Iterator<Item = Point>) -> Option<Rect> {
    let mut finite = points.filter(|p| p.is_finite());
    let first = finite.next()?;
    let mut r = finite.fold(Rect::from_points(first, first), |r, p| r.union_pt(p));
    if r.width() == 0.0 {
        r.x0 -= FIT_PADDING;
        r.x1 += FIT_PADDING;
    }
    if r.height() == 0.0 {
        r.y0 -= FIT_PADDING;
        r.y1 += FIT_PADDING;
    }
    Some(r)
}
