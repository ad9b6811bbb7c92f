//! Axis-aligned rectangles.
//!
//! A [`Rect`] is stored as an `origin` plus a `size` that may be negative, in which case the
//! origin is not the minimum corner. All edge, corner and containment queries resolve the true
//! bounds regardless of sign; only [`canonicalize()`](Rect::canonicalize) rewrites the storage.
//!
//! Edge names follow screen coordinates, where y grows downwards: `top` is the minimum y.

use crate::core::prelude::*;
use crate::linalg::vector::write_tuple;
use crate::util::gg_float;
use num_traits::One;
use std::fmt;

fn partial_min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a { b } else { a }
}
fn partial_max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a { b } else { a }
}

/// An axis-aligned rectangle.
///
/// # Examples
/// ```
/// use geomkit::core::prelude::*;
/// let rect = Rect2i::new(0, 0, -5, -5);
/// assert!(!rect.canonical());
/// assert_eq!(rect.top_left(), Vec2::new(-5, -5));
/// assert!(rect.contains_point(Vec2::new(-2, -3)));
///
/// let canonical = rect.canonicalized();
/// assert_eq!(canonical.origin, Vec2::new(-5, -5));
/// assert_eq!(canonical.size, Size2::new(5, 5));
/// ```
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rect<T> {
    pub origin: Vec2<T>,
    pub size: Size2<T>,
}

pub type Rect2i = Rect<i32>;
pub type Rect2f = Rect<f32>;
pub type Rect2d = Rect<f64>;

impl<T: Scalar> Rect<T> {
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Size2::new(width, height),
        }
    }
    #[must_use]
    pub fn from_origin_size(origin: Vec2<T>, size: Size2<T>) -> Self {
        Self { origin, size }
    }
    /// The canonical rectangle spanning both corners.
    #[must_use]
    pub fn from_corners(a: Vec2<T>, b: Vec2<T>) -> Self {
        let min = Vec2::new(partial_min(a.x, b.x), partial_min(a.y, b.y));
        let max = Vec2::new(partial_max(a.x, b.x), partial_max(a.y, b.y));
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }
    /// A zero-sized rectangle at `origin`.
    #[must_use]
    pub fn from_origin(origin: Vec2<T>) -> Self {
        Self::from_origin_size(origin, Size2::zero())
    }
    /// A rectangle of `size` at the coordinate origin.
    #[must_use]
    pub fn from_size(size: Size2<T>) -> Self {
        Self::from_origin_size(Vec2::zero(), size)
    }

    /// Whether both extents are zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    // Edges
    #[must_use]
    pub fn min_x(&self) -> T {
        partial_min(self.origin.x, self.origin.x + self.size.width)
    }
    #[must_use]
    pub fn max_x(&self) -> T {
        partial_max(self.origin.x, self.origin.x + self.size.width)
    }
    #[must_use]
    pub fn min_y(&self) -> T {
        partial_min(self.origin.y, self.origin.y + self.size.height)
    }
    #[must_use]
    pub fn max_y(&self) -> T {
        partial_max(self.origin.y, self.origin.y + self.size.height)
    }
    #[must_use]
    pub fn left(&self) -> T {
        self.min_x()
    }
    #[must_use]
    pub fn right(&self) -> T {
        self.max_x()
    }
    #[must_use]
    pub fn top(&self) -> T {
        self.min_y()
    }
    #[must_use]
    pub fn bottom(&self) -> T {
        self.max_y()
    }

    // Corners
    #[must_use]
    pub fn min_corner(&self) -> Vec2<T> {
        Vec2::new(self.min_x(), self.min_y())
    }
    #[must_use]
    pub fn max_corner(&self) -> Vec2<T> {
        Vec2::new(self.max_x(), self.max_y())
    }
    #[must_use]
    pub fn top_left(&self) -> Vec2<T> {
        Vec2::new(self.left(), self.top())
    }
    #[must_use]
    pub fn top_right(&self) -> Vec2<T> {
        Vec2::new(self.right(), self.top())
    }
    #[must_use]
    pub fn bottom_left(&self) -> Vec2<T> {
        Vec2::new(self.left(), self.bottom())
    }
    #[must_use]
    pub fn bottom_right(&self) -> Vec2<T> {
        Vec2::new(self.right(), self.bottom())
    }

    #[must_use]
    pub fn left_edge(&self) -> Line2<T> {
        Line2::new(self.top_left(), self.bottom_left())
    }
    #[must_use]
    pub fn right_edge(&self) -> Line2<T> {
        Line2::new(self.top_right(), self.bottom_right())
    }
    #[must_use]
    pub fn top_edge(&self) -> Line2<T> {
        Line2::new(self.top_left(), self.top_right())
    }
    #[must_use]
    pub fn bottom_edge(&self) -> Line2<T> {
        Line2::new(self.bottom_left(), self.bottom_right())
    }

    /// Whether both extents are strictly positive.
    #[must_use]
    pub fn canonical(&self) -> bool {
        self.size.width > T::zero() && self.size.height > T::zero()
    }
    /// Folds any negative extent back into the origin, so that `origin` becomes the minimum
    /// corner. The covered area is unchanged.
    pub fn canonicalize(&mut self) {
        *self = self.canonicalized();
    }
    #[must_use]
    pub fn canonicalized(&self) -> Self {
        let (min, max) = (self.min_corner(), self.max_corner());
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    pub fn translate(&mut self, offset: Vec2<T>) {
        self.origin += offset;
    }
    #[must_use]
    pub fn translated(&self, offset: Vec2<T>) -> Self {
        let mut rv = *self;
        rv.translate(offset);
        rv
    }
    /// Scales the size, keeping the origin fixed.
    pub fn scale(&mut self, factor: Vec2<T>) {
        self.size.width = self.size.width * factor.x;
        self.size.height = self.size.height * factor.y;
    }
    #[must_use]
    pub fn scaled(&self, factor: Vec2<T>) -> Self {
        let mut rv = *self;
        rv.scale(factor);
        rv
    }

    /// Whether `point` lies inside or on the boundary.
    #[must_use]
    pub fn contains_point(&self, point: Vec2<T>) -> bool {
        self.min_x() <= point.x
            && point.x <= self.max_x()
            && self.min_y() <= point.y
            && point.y <= self.max_y()
    }
    /// Whether `other` lies entirely inside, boundary inclusive.
    #[must_use]
    pub fn contains_rect(&self, other: &Self) -> bool {
        self.contains_point(other.min_corner()) && self.contains_point(other.max_corner())
    }
    /// Whether the two rectangles overlap. Rectangles that only share an edge intersect.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min_x() <= other.max_x()
            && other.min_x() <= self.max_x()
            && self.min_y() <= other.max_y()
            && other.min_y() <= self.max_y()
    }

    /// Grows to cover `point`. The result is canonical.
    pub fn include_point(&mut self, point: Vec2<T>) {
        let (min, max) = (self.min_corner(), self.max_corner());
        *self = Self::from_corners(
            Vec2::new(partial_min(min.x, point.x), partial_min(min.y, point.y)),
            Vec2::new(partial_max(max.x, point.x), partial_max(max.y, point.y)),
        );
    }
    /// Grows to cover `other`. The result is canonical.
    pub fn include_rect(&mut self, other: &Self) {
        self.include_point(other.min_corner());
        self.include_point(other.max_corner());
    }
    /// Grows to cover every point in `points`.
    pub fn include_all(&mut self, points: impl IntoIterator<Item = Vec2<T>>) {
        for point in points {
            self.include_point(point);
        }
    }
}

impl<T: Promote> Rect<T> {
    #[must_use]
    pub fn aspect(&self) -> Promoted<T> {
        self.size.aspect()
    }
    #[must_use]
    pub fn diagonal(&self) -> Promoted<T> {
        self.size.diagonal()
    }
    #[must_use]
    pub fn area(&self) -> Promoted<T> {
        self.size.area()
    }
    #[must_use]
    pub fn perimeter(&self) -> Promoted<T> {
        let two = <Promoted<T> as One>::one() + <Promoted<T> as One>::one();
        two * (self.size.width.promote().abs() + self.size.height.promote().abs())
    }

    #[must_use]
    pub fn mid_x(&self) -> Promoted<T> {
        self.centroid().x
    }
    #[must_use]
    pub fn mid_y(&self) -> Promoted<T> {
        self.centroid().y
    }
    /// The centre point.
    #[must_use]
    pub fn centroid(&self) -> Vec2<Promoted<T>> {
        let two = <Promoted<T> as One>::one() + <Promoted<T> as One>::one();
        let mut half = self.size.promote().to_vec();
        half /= two;
        let mut rv = self.origin.promote();
        rv += half;
        rv
    }

    /// Whether origin and size agree to within `tolerance` on every component.
    #[must_use]
    pub fn equals(&self, other: &Self, tolerance: Promoted<T>) -> bool {
        self.origin.equals(other.origin, tolerance)
            && self.size.to_vec().equals(other.size.to_vec(), tolerance)
    }
    #[must_use]
    pub fn almost_eq(&self, other: &Self) -> bool {
        self.equals(other, <Promoted<T> as Real>::TOLERANCE)
    }
}

impl<T: Scalar> std::hash::Hash for Rect<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.origin, state);
        std::hash::Hash::hash(&self.size, state);
    }
}

impl<T: Scalar> fmt::Display for Rect<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, &[&self.origin, &self.size])
    }
}

impl<T: Real> Rect<T> {
    /// Whether every corner is a finite, normal value.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        [self.origin.x, self.origin.y, self.size.width, self.size.height]
            .into_iter()
            .all(gg_float::is_finite)
    }
}
