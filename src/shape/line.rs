use crate::assert::*;
use crate::core::prelude::*;
use crate::linalg::vector::write_tuple;
use num_traits::{One, Zero};
use std::fmt;

macro_rules! impl_line {
    ($name:ident, $vec:ident) => {
        impl<T: Scalar> $name<T> {
            pub const fn new(a: $vec<T>, b: $vec<T>) -> Self {
                Self { a, b }
            }

            /// Endpoint `a` for index 0, `b` for index 1.
            ///
            /// # Panics
            /// Panics if `index > 1`.
            #[must_use]
            pub fn at(&self, index: usize) -> $vec<T> {
                self[index]
            }
            #[must_use]
            pub fn front(&self) -> $vec<T> {
                self.a
            }
            #[must_use]
            pub fn back(&self) -> $vec<T> {
                self.b
            }

            /// Whether the endpoints coincide.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.a == self.b
            }
        }

        impl<T: Promote> $name<T> {
            /// The unit vector from `a` towards `b`, or zero for an empty line.
            #[must_use]
            pub fn direction(&self) -> $vec<Promoted<T>> {
                (self.b - self.a).normalized()
            }

            #[must_use]
            pub fn mid(&self) -> $vec<Promoted<T>> {
                let one = <Promoted<T> as One>::one();
                let mut rv = self.a.promote();
                rv += self.b.promote();
                rv /= one + one;
                rv
            }

            #[must_use]
            pub fn length(&self) -> Promoted<T> {
                self.a.distance(self.b)
            }
            #[must_use]
            pub fn length_squared(&self) -> Promoted<T> {
                self.a.distance_squared(self.b)
            }

            /// The point on the segment closest to `point`. Projections that fall beyond either
            /// end are clamped to that endpoint.
            #[must_use]
            pub fn project(&self, point: $vec<T>) -> $vec<Promoted<T>> {
                let ab = self.b - self.a;
                let magnitude_squared = ab.magnitude_squared();
                if magnitude_squared.is_zero() {
                    return self.a.promote();
                }
                let scale = (point - self.a).dot(ab) / magnitude_squared;
                if scale <= <Promoted<T> as Zero>::zero() {
                    self.a.promote()
                } else if scale >= <Promoted<T> as One>::one() {
                    self.b.promote()
                } else {
                    let mut step = ab;
                    step *= scale;
                    let mut rv = self.a.promote();
                    rv += step;
                    rv
                }
            }

            /// Distance from `point` to the nearest point on the segment.
            #[must_use]
            pub fn distance_to(&self, point: $vec<T>) -> Promoted<T> {
                self.project(point).distance(point.promote())
            }
        }

        impl<T: Scalar> std::ops::Index<usize> for $name<T> {
            type Output = $vec<T>;

            fn index(&self, index: usize) -> &$vec<T> {
                check_lt!(index, 2);
                if index == 0 { &self.a } else { &self.b }
            }
        }
        impl<T: Scalar> std::ops::IndexMut<usize> for $name<T> {
            fn index_mut(&mut self, index: usize) -> &mut $vec<T> {
                check_lt!(index, 2);
                if index == 0 { &mut self.a } else { &mut self.b }
            }
        }

        impl<T: Scalar> std::hash::Hash for $name<T> {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(&self.a, state);
                std::hash::Hash::hash(&self.b, state);
            }
        }

        impl<T: Scalar> fmt::Display for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write_tuple(f, &[&self.a, &self.b])
            }
        }
    };
}

/// A 2D line segment from `a` to `b`.
///
/// # Examples
/// ```
/// use geomkit::core::prelude::*;
/// let a = Line2d::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
/// let b = Line2d::new(Vec2::new(0.0, 10.0), Vec2::new(10.0, 0.0));
/// assert_eq!(a.intersect(&b), Some(Vec2::new(5.0, 5.0)));
/// assert_eq!(a.side(Vec2::new(0.0, 5.0)), Side::Left);
/// ```
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Line2<T> {
    pub a: Vec2<T>,
    pub b: Vec2<T>,
}

pub type Line2i = Line2<i32>;
pub type Line2f = Line2<f32>;
pub type Line2d = Line2<f64>;

impl_line!(Line2, Vec2);

impl<T: Scalar> Line2<T> {
    #[must_use]
    pub fn from_coords(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self::new(Vec2::new(x1, y1), Vec2::new(x2, y2))
    }
    /// Widens both endpoints with `z = 0`.
    #[must_use]
    pub fn to_line3(&self) -> Line3<T> {
        Line3::new(self.a.to_vec3(), self.b.to_vec3())
    }
}

impl<T: Promote> Line2<T> {
    /// The [`direction`](Line2::direction) rotated a quarter turn counter-clockwise.
    #[must_use]
    pub fn normal(&self) -> Vec2<Promoted<T>> {
        let d = self.direction();
        Vec2::new(-d.y, d.x)
    }

    /// The intersection point of the two segments, or `None` if they do not meet.
    ///
    /// Both segments are treated as closed, so touching at an endpoint counts. Parallel
    /// segments never intersect, even when they overlap.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<Vec2<Promoted<T>>> {
        let r = self.b - self.a;
        let s = other.b - other.a;
        let q = self.a - other.a;
        let denominator = s.y * r.x - s.x * r.y;
        if denominator.is_zero() {
            return None;
        }
        let ua = (s.x * q.y - s.y * q.x) / denominator;
        let ub = (r.x * q.y - r.y * q.x) / denominator;
        let unit = <Promoted<T> as Zero>::zero()..=<Promoted<T> as One>::one();
        if unit.contains(&ua) && unit.contains(&ub) {
            let mut step = r;
            step *= ua;
            let mut rv = self.a.promote();
            rv += step;
            Some(rv)
        } else {
            None
        }
    }

    /// Which side of the directed line `a -> b` the point lies on. In a y-up frame, `Left` is
    /// counter-clockwise.
    #[must_use]
    pub fn side(&self, point: Vec2<T>) -> Side {
        let d = (self.b - self.a).cross(point - self.a);
        if d.is_zero() {
            Side::Coincident
        } else if d > <Promoted<T> as Zero>::zero() {
            Side::Left
        } else {
            Side::Right
        }
    }
}

/// A 3D line segment from `a` to `b`.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Line3<T> {
    pub a: Vec3<T>,
    pub b: Vec3<T>,
}

pub type Line3i = Line3<i32>;
pub type Line3f = Line3<f32>;
pub type Line3d = Line3<f64>;

impl_line!(Line3, Vec3);

impl<T: Scalar> Line3<T> {
    #[must_use]
    pub fn from_coords(x1: T, y1: T, z1: T, x2: T, y2: T, z2: T) -> Self {
        Self::new(Vec3::new(x1, y1, z1), Vec3::new(x2, y2, z2))
    }
    /// Drops `z` from both endpoints.
    #[must_use]
    pub fn to_line2(&self) -> Line2<T> {
        Line2::new(self.a.to_vec2(), self.b.to_vec2())
    }
}

impl<T: Promote> Line3<T> {
    /// `b x a`: perpendicular to both endpoints' position vectors, and so to the plane through
    /// the origin that contains the line.
    #[must_use]
    pub fn normal(&self) -> Vec3<Promoted<T>> {
        self.b.cross(self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::gg_float::approx_eq;

    // ==================== Line2 ====================

    #[test]
    fn crossing_segments_intersect() {
        let a = Line2d::from_coords(0.0, 0.0, 10.0, 10.0);
        let b = Line2d::from_coords(0.0, 10.0, 10.0, 0.0);
        assert_eq!(a.intersect(&b), Some(Vec2::new(5.0, 5.0)));
        assert_eq!(b.intersect(&a), Some(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn parallel_segments_miss() {
        let a = Line2d::from_coords(0.0, 0.0, 10.0, 0.0);
        let b = Line2d::from_coords(0.0, 1.0, 10.0, 1.0);
        assert_eq!(a.intersect(&b), None);
        // Collinear overlap is still reported as a miss.
        let c = Line2d::from_coords(5.0, 0.0, 15.0, 0.0);
        assert_eq!(a.intersect(&c), None);
    }

    #[test]
    fn disjoint_segments_miss() {
        let a = Line2::from_coords(0, 0, 1, 1);
        let b = Line2::from_coords(0, 10, 10, 0);
        assert_eq!(a.intersect(&b), None);
        // Touching at an endpoint counts.
        let c = Line2::from_coords(1, 1, 2, 0);
        assert_eq!(a.intersect(&c), Some(Vec2::new(1.0, 1.0)));
    }

    #[test]
    fn side_of_point() {
        let l = Line2::from_coords(0, 0, 10, 0);
        assert_eq!(l.side(Vec2::new(5, 3)), Side::Left);
        assert_eq!(l.side(Vec2::new(5, -3)), Side::Right);
        assert_eq!(l.side(Vec2::new(20, 0)), Side::Coincident);
    }

    #[test]
    fn project_clamps() {
        let l = Line2::from_coords(0, 0, 10, 0);
        assert_eq!(l.project(Vec2::new(4, 7)), Vec2::new(4.0, 0.0));
        assert_eq!(l.project(Vec2::new(-4, 7)), Vec2::new(0.0, 0.0));
        assert_eq!(l.project(Vec2::new(14, -7)), Vec2::new(10.0, 0.0));
        assert_eq!(l.distance_to(Vec2::new(13, 4)), 5.0);
        let empty = Line2::from_coords(1, 1, 1, 1);
        assert_eq!(empty.project(Vec2::new(5, 5)), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn derived_quantities() {
        let l = Line2::from_coords(1, 1, 4, 5);
        assert_eq!(l.length(), 5.0);
        assert_eq!(l.length_squared(), 25.0);
        assert_eq!(l.mid(), Vec2::new(2.5, 3.0));
        assert!(l.direction().almost_eq(Vec2::new(0.6, 0.8)));
        assert!(l.normal().almost_eq(Vec2::new(-0.8, 0.6)));
        assert!(!l.is_empty());

        let empty = Line2f::default();
        assert!(empty.is_empty());
        assert_eq!(empty.direction(), Vec2::zero());
        assert_eq!(empty.mid(), Vec2::zero());
    }

    #[test]
    fn indexing_and_conversion() {
        let mut l = Line2::from_coords(1, 2, 3, 4);
        assert_eq!(l[0], Vec2::new(1, 2));
        assert_eq!(l.at(1), Vec2::new(3, 4));
        l[1] = Vec2::new(5, 6);
        assert_eq!(l.back(), Vec2::new(5, 6));
        assert_eq!(l.to_line3().to_line2(), l);
        assert_eq!(l.to_line3().b, Vec3::new(5, 6, 0));
    }

    #[test]
    #[should_panic(expected = "index < 2")]
    fn index_out_of_range() {
        let _ = Line2i::default().at(2);
    }

    #[test]
    fn display() {
        assert_eq!(Line2::from_coords(1, 2, 3, 4).to_string(), "( ( 1, 2 ), ( 3, 4 ) )");
    }

    // ==================== Line3 ====================

    #[test]
    fn line3_metrics() {
        let l = Line3::from_coords(0, 0, 0, 2, 3, 6);
        assert_eq!(l.length(), 7.0);
        assert_eq!(l.mid(), Vec3::new(1.0, 1.5, 3.0));
        assert_eq!(l.project(Vec3::new(4, 6, 12)), Vec3::new(2.0, 3.0, 6.0));
        assert_eq!(
            Line3::from_coords(1, 0, 0, 0, 1, 0).normal(),
            Vec3::new(0.0, 0.0, -1.0)
        );
    }

    #[test]
    fn line3_distance_to_point() {
        let l = Line3d::from_coords(0.0, 0.0, 0.0, 0.0, 0.0, 10.0);
        assert!(approx_eq(l.distance_to(Vec3::new(3.0, 4.0, 5.0)), 5.0, EPSILON));
    }
}
