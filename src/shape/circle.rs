use crate::core::prelude::*;
use crate::linalg::vector::write_tuple;
use num_traits::{FloatConst, One, Zero};
use std::fmt;

/// A circle in the plane.
///
/// Equality and ordering compare the centre first and then the radius.
///
/// # Examples
/// ```
/// use geomkit::core::prelude::*;
/// let c = Circle2d::new(Vec2::new(0.0, 0.0), 5.0);
/// assert!(c.contains(Vec2::new(5.0, 0.0)));
/// assert!(!c.contains(Vec2::new(5.0001, 0.0)));
/// ```
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Circle2<T> {
    pub center: Vec2<T>,
    pub radius: T,
}

pub type Circle2i = Circle2<i32>;
pub type Circle2f = Circle2<f32>;
pub type Circle2d = Circle2<f64>;

impl<T: Scalar> Circle2<T> {
    pub const fn new(center: Vec2<T>, radius: T) -> Self {
        Self { center, radius }
    }
    #[must_use]
    pub fn from_coords(x: T, y: T, radius: T) -> Self {
        Self::new(Vec2::new(x, y), radius)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.radius.is_zero()
    }

    /// Whether the radius is strictly positive.
    #[must_use]
    pub fn canonical(&self) -> bool {
        self.radius > T::zero()
    }
    /// Makes a negative radius positive.
    pub fn canonicalize(&mut self) {
        if self.radius < T::zero() {
            self.radius = T::zero() - self.radius;
        }
    }
    #[must_use]
    pub fn canonicalized(&self) -> Self {
        let mut rv = *self;
        rv.canonicalize();
        rv
    }

    /// The smallest axis-aligned rectangle containing the circle.
    #[must_use]
    pub fn bounds(&self) -> Rect<T> {
        let c = self.canonicalized();
        Rect::from_origin_size(
            Vec2::new(c.center.x - c.radius, c.center.y - c.radius),
            Size2::splat(c.radius + c.radius),
        )
    }
}

impl<T: Promote> Circle2<T> {
    /// The circle with the segment `a`-`b` as its diameter.
    #[must_use]
    pub fn from_diameter(a: Vec2<T>, b: Vec2<T>) -> Circle2<Promoted<T>> {
        let line = Line2::new(a, b);
        let two = <Promoted<T> as One>::one() + <Promoted<T> as One>::one();
        Circle2::new(line.mid(), line.length() / two)
    }

    /// The circle passing through all three points, found by intersecting the perpendicular
    /// bisectors of two sides.
    ///
    /// Fails with [`GeometryError::Collinear`] if the points lie on one line, including when
    /// any two coincide.
    ///
    /// # Examples
    /// ```
    /// use geomkit::core::prelude::*;
    /// let c = Circle2i::circumscribe(Vec2::new(0, 0), Vec2::new(2, 0), Vec2::new(0, 2))?;
    /// assert_eq!(c.center, Vec2::new(1.0, 1.0));
    /// assert!((c.radius - std::f64::consts::SQRT_2).abs() < EPSILON);
    ///
    /// let err = Circle2::circumscribe(Vec2::new(0, 0), Vec2::new(1, 1), Vec2::new(2, 2));
    /// assert!(err.is_err());
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn circumscribe(a: Vec2<T>, b: Vec2<T>, c: Vec2<T>) -> Result<Circle2<Promoted<T>>> {
        // Work relative to `a` to keep the squared terms small.
        let ab = b - a;
        let ac = c - a;
        let two = <Promoted<T> as One>::one() + <Promoted<T> as One>::one();
        let d = two * (ab.x * ac.y - ab.y * ac.x);
        if d.is_zero() {
            bail!(GeometryError::Collinear);
        }
        let ab_sq = ab.x * ab.x + ab.y * ab.y;
        let ac_sq = ac.x * ac.x + ac.y * ac.y;
        let offset = Vec2::new(
            (ac.y * ab_sq - ab.y * ac_sq) / d,
            (ab.x * ac_sq - ac.x * ab_sq) / d,
        );
        let radius = (offset.x * offset.x + offset.y * offset.y).sqrt();
        let mut center = a.promote();
        center += offset;
        Ok(Circle2::new(center, radius))
    }

    #[must_use]
    pub fn diameter(&self) -> Promoted<T> {
        let r = self.radius.promote();
        r + r
    }
    #[must_use]
    pub fn circumference(&self) -> Promoted<T> {
        self.diameter() * <Promoted<T> as FloatConst>::PI()
    }
    #[must_use]
    pub fn area(&self) -> Promoted<T> {
        let r = self.radius.promote();
        r * r * <Promoted<T> as FloatConst>::PI()
    }

    /// Whether `point` lies inside the circle or on its boundary.
    #[must_use]
    pub fn contains(&self, point: Vec2<T>) -> bool {
        let r = self.radius.promote();
        self.center.distance_squared(point) <= r * r
    }
    /// Whether the two discs overlap or touch.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        let reach = self.radius.promote().abs() + other.radius.promote().abs();
        self.center.distance_squared(other.center) <= reach * reach
    }

    /// Whether centre and radius agree to within `tolerance`.
    #[must_use]
    pub fn equals(&self, other: &Self, tolerance: Promoted<T>) -> bool {
        self.center.equals(other.center, tolerance)
            && (self.radius.promote() - other.radius.promote()).abs() <= tolerance
    }
}

impl<T: Scalar> std::hash::Hash for Circle2<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.center, state);
        std::hash::Hash::hash(&self.radius.hash_bits(), state);
    }
}

impl<T: Scalar> fmt::Display for Circle2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, &[&self.center, &self.radius])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::gg_float::approx_eq;
    use std::f64::consts::PI;

    #[test]
    fn boundary_is_inclusive() {
        let c = Circle2d::new(Vec2::new(0.0, 0.0), 5.0);
        assert!(c.contains(Vec2::new(5.0, 0.0)));
        assert!(c.contains(Vec2::new(3.0, 4.0)));
        assert!(!c.contains(Vec2::new(5.0001, 0.0)));
        assert!(Circle2::from_coords(0, 0, 5).contains(Vec2::new(-3, -4)));
    }

    #[test]
    fn metrics() {
        let c = Circle2i::from_coords(1, 1, 2);
        assert_eq!(c.diameter(), 4.0);
        assert!(approx_eq(c.circumference(), 4.0 * PI, EPSILON));
        assert!(approx_eq(c.area(), 4.0 * PI, EPSILON));
        assert!(!c.is_empty());
        assert!(Circle2i::default().is_empty());
        assert_eq!(c.bounds(), Rect::new(-1, -1, 4, 4));
    }

    #[test]
    fn equality_includes_radius() {
        let a = Circle2::from_coords(0, 0, 1);
        assert_ne!(a, Circle2::from_coords(0, 0, 2));
        assert_eq!(a, Circle2::from_coords(0, 0, 1));
        assert!(a < Circle2::from_coords(0, 0, 2));
        let b = Circle2d::from_coords(0.0, 1e-12, 1.0);
        assert!(b.equals(&Circle2d::from_coords(0.0, 0.0, 1.0), EPSILON));
    }

    #[test]
    fn canonical_form() {
        let c = Circle2::from_coords(2, 3, -4);
        assert!(!c.canonical());
        assert_eq!(c.canonicalized(), Circle2::from_coords(2, 3, 4));
        assert_eq!(c.bounds(), Rect::new(-2, -1, 8, 8));
        assert!(!Circle2i::default().canonical());
    }

    #[test]
    fn from_diameter() {
        let c = Circle2::from_diameter(Vec2::new(-3, 0), Vec2::new(3, 0));
        assert_eq!(c, Circle2::new(Vec2::new(0.0, 0.0), 3.0));
        let f = Circle2::from_diameter(Vec2::new(0.0_f32, 0.0), Vec2::new(0.0, 2.0));
        assert_eq!(f, Circle2f::new(Vec2::new(0.0, 1.0), 1.0));
    }

    #[test]
    fn circumscribe_passes_through_points() {
        let points = [Vec2d::new(1.0, 7.0), Vec2::new(-4.0, 2.5), Vec2::new(6.0, -3.0)];
        let c = Circle2::circumscribe(points[0], points[1], points[2]).unwrap();
        for p in points {
            assert!(approx_eq(c.center.distance(p), c.radius, 1e-9));
        }
    }

    #[test]
    fn circumscribe_rejects_collinear() {
        let err = Circle2::circumscribe(Vec2::new(0, 0), Vec2::new(1, 2), Vec2::new(2, 4))
            .unwrap_err();
        assert_eq!(err.downcast_ref::<GeometryError>(), Some(&GeometryError::Collinear));
        let coincident = Circle2::circumscribe(Vec2::new(1, 1), Vec2::new(1, 1), Vec2::new(5, 0));
        assert!(coincident.is_err());
    }

    #[test]
    fn intersects() {
        let a = Circle2::from_coords(0, 0, 2);
        assert!(a.intersects(&Circle2::from_coords(4, 0, 2)));
        assert!(!a.intersects(&Circle2::from_coords(5, 0, 2)));
        assert!(a.intersects(&Circle2::from_coords(0, 0, -1)));
    }

    #[test]
    fn display() {
        assert_eq!(Circle2::from_coords(1, 2, 3).to_string(), "( ( 1, 2 ), 3 )");
    }
}
