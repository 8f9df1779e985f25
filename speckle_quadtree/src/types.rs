// Copyright 2025 the Speckle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

use core::cmp::Ordering;

use kurbo::Rect;

pub use kurbo::Point;

/// A payload stored at a location.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Element<T> {
    /// Caller-defined payload; the index never inspects it.
    pub payload: T,
    /// Where the payload lives.
    pub location: Point,
}

impl<T> Element<T> {
    /// Create a new element.
    pub const fn new(payload: T, location: Point) -> Self {
        Self { payload, location }
    }
}

/// One of the four children of a split node.
///
/// The discriminant is the child's slot in [`Quadtree::children`](crate::Quadtree::children).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// `x <= center.x`, `y <= center.y`.
    TopLeft = 0,
    /// `x > center.x`, `y <= center.y`.
    TopRight = 1,
    /// `x <= center.x`, `y > center.y`.
    BottomLeft = 2,
    /// `x > center.x`, `y > center.y`.
    BottomRight = 3,
}

impl Quadrant {
    /// All quadrants in child order.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Slot of this quadrant in a node's child array.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Axis-aligned rectangle in 2D, y growing downward.
///
/// Used both as a node's bounding box and as the argument of range queries.
/// Containment and overlap are inclusive on every edge.
///
/// The four edges are stored directly rather than origin and size, so that
/// quadrants cut from a parent share their edges bit-for-bit with it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Region {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl Region {
    /// Create a region from its top-left corner and size.
    ///
    /// The size is not normalized: a negative `width` or `height` gives an
    /// inverted region that contains no points.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
        }
    }

    /// Create a region from its four edges.
    pub const fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Left edge (minimum x).
    pub const fn left(&self) -> f64 {
        self.left
    }

    /// Top edge (minimum y).
    pub const fn top(&self) -> f64 {
        self.top
    }

    /// Right edge (maximum x).
    pub const fn right(&self) -> f64 {
        self.right
    }

    /// Bottom edge (maximum y).
    pub const fn bottom(&self) -> f64 {
        self.bottom
    }

    /// Horizontal extent.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Vertical extent.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Midpoint of both extents.
    pub fn center(&self) -> Point {
        Point::new(mid(self.left, self.right), mid(self.top, self.bottom))
    }

    /// True if both extents are finite and strictly positive.
    pub fn is_valid_extent(&self) -> bool {
        let (w, h) = (self.width(), self.height());
        w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0
    }

    /// Deepest level at which quadrants of this region can still shrink.
    ///
    /// Counts the halvings after which the larger extent underflows to zero,
    /// plus the mantissa width to absorb rounding of the center lines.
    pub fn max_subdivision_depth(&self) -> usize {
        let mut extent = self.width().max(self.height());
        let mut depth = f64::MANTISSA_DIGITS as usize;
        while extent > 0.0 && extent.is_finite() {
            extent *= 0.5;
            depth += 1;
        }
        depth
    }

    /// Whether the point lies inside or on the boundary. NaN is never contained.
    pub fn contains(&self, p: Point) -> bool {
        le(self.left, p.x) && le(p.x, self.right) && le(self.top, p.y) && le(p.y, self.bottom)
    }

    /// Whether the two regions share at least one point (closed intervals).
    ///
    /// Regions touching along an edge or a corner overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        le(self.left, other.right)
            && le(other.left, self.right)
            && le(self.top, other.bottom)
            && le(other.top, self.bottom)
    }

    /// The quadrant a point routes to. Ties on the center lines go top/left.
    pub fn quadrant_of(&self, p: Point) -> Quadrant {
        let c = self.center();
        match (p.x <= c.x, p.y <= c.y) {
            (true, true) => Quadrant::TopLeft,
            (false, true) => Quadrant::TopRight,
            (true, false) => Quadrant::BottomLeft,
            (false, false) => Quadrant::BottomRight,
        }
    }

    /// One of the four equal sub-regions.
    pub fn quadrant(&self, q: Quadrant) -> Self {
        let c = self.center();
        match q {
            Quadrant::TopLeft => Self::from_edges(self.left, self.top, c.x, c.y),
            Quadrant::TopRight => Self::from_edges(c.x, self.top, self.right, c.y),
            Quadrant::BottomLeft => Self::from_edges(self.left, c.y, c.x, self.bottom),
            Quadrant::BottomRight => Self::from_edges(c.x, c.y, self.right, self.bottom),
        }
    }

    /// Squared distance from `p` to the nearest point of this region.
    ///
    /// Zero when `p` is contained. Never larger than the squared distance from
    /// `p` to any point inside the region.
    pub fn distance_squared_to(&self, p: Point) -> f64 {
        let dx = axis_gap(p.x, self.left, self.right);
        let dy = axis_gap(p.y, self.top, self.bottom);
        dx * dx + dy * dy
    }

    /// Convert into a Kurbo rectangle.
    pub const fn to_rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.right, self.bottom)
    }
}

impl From<Rect> for Region {
    fn from(r: Rect) -> Self {
        Self::from_edges(r.x0, r.y0, r.x1, r.y1)
    }
}

impl From<Region> for Rect {
    fn from(r: Region) -> Self {
        r.to_rect()
    }
}

#[inline]
fn mid(a: f64, b: f64) -> f64 {
    0.5 * (a + b)
}

/// Distance from `v` to the interval `[lo, hi]` along one axis.
#[inline]
fn axis_gap(v: f64, lo: f64, hi: f64) -> f64 {
    if v < lo {
        lo - v
    } else if v > hi {
        v - hi
    } else {
        0.0
    }
}

pub(crate) fn le<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o != Ordering::Greater)
        .unwrap_or(false)
}
