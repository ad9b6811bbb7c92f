use crate::assert::*;
use crate::core::prelude::*;
use crate::linalg::vector::write_tuple;
use num_traits::{One, Zero};
use std::fmt;

macro_rules! impl_triangle {
    ($name:ident, $vec:ident) => {
        impl<T: Scalar> $name<T> {
            pub const fn new(a: $vec<T>, b: $vec<T>, c: $vec<T>) -> Self {
                Self { a, b, c }
            }

            /// Vertex `a`, `b` or `c` for index 0, 1 or 2.
            ///
            /// # Panics
            /// Panics if `index > 2`.
            #[must_use]
            pub fn at(&self, index: usize) -> $vec<T> {
                self[index]
            }
            pub fn iter(&self) -> std::array::IntoIter<$vec<T>, 3> {
                [self.a, self.b, self.c].into_iter()
            }

            /// Whether all three vertices coincide.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.a == self.b && self.b == self.c
            }
        }

        impl<T: Promote> $name<T> {
            /// Sum of the three edge lengths.
            #[must_use]
            pub fn perimeter(&self) -> Promoted<T> {
                self.a.distance(self.b) + self.b.distance(self.c) + self.c.distance(self.a)
            }

            /// The unweighted average of the vertices.
            #[must_use]
            pub fn centroid(&self) -> $vec<Promoted<T>> {
                let one = <Promoted<T> as One>::one();
                let mut rv = self.a.promote();
                rv += self.b.promote();
                rv += self.c.promote();
                rv /= one + one + one;
                rv
            }
        }

        impl<T: Scalar> std::ops::Index<usize> for $name<T> {
            type Output = $vec<T>;

            fn index(&self, index: usize) -> &$vec<T> {
                check_lt!(index, 3);
                match index {
                    0 => &self.a,
                    1 => &self.b,
                    _ => &self.c,
                }
            }
        }
        impl<T: Scalar> std::ops::IndexMut<usize> for $name<T> {
            fn index_mut(&mut self, index: usize) -> &mut $vec<T> {
                check_lt!(index, 3);
                match index {
                    0 => &mut self.a,
                    1 => &mut self.b,
                    _ => &mut self.c,
                }
            }
        }

        impl<T: Scalar> std::hash::Hash for $name<T> {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                for v in self.iter() {
                    std::hash::Hash::hash(&v, state);
                }
            }
        }

        impl<T: Scalar> fmt::Display for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write_tuple(f, &[&self.a, &self.b, &self.c])
            }
        }
    };
}

/// A triangle in the plane.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Triangle2<T> {
    pub a: Vec2<T>,
    pub b: Vec2<T>,
    pub c: Vec2<T>,
}

pub type Triangle2i = Triangle2<i32>;
pub type Triangle2f = Triangle2<f32>;
pub type Triangle2d = Triangle2<f64>;

impl_triangle!(Triangle2, Vec2);

impl<T: Scalar> Triangle2<T> {
    /// Widens every vertex with `z = 0`.
    #[must_use]
    pub fn to_triangle3(&self) -> Triangle3<T> {
        Triangle3::new(self.a.to_vec3(), self.b.to_vec3(), self.c.to_vec3())
    }
}

impl<T: Promote> Triangle2<T> {
    /// Positive when `a, b, c` wind counter-clockwise in a y-up frame.
    #[must_use]
    pub fn signed_area(&self) -> Promoted<T> {
        let one = <Promoted<T> as One>::one();
        (self.b - self.a).cross(self.c - self.a) / (one + one)
    }
    #[must_use]
    pub fn area(&self) -> Promoted<T> {
        self.signed_area().abs()
    }

    /// Whether `point` lies inside the triangle or on its boundary.
    ///
    /// # Examples
    /// ```
    /// use geomkit::core::prelude::*;
    /// let t = Triangle2::new(Vec2::new(0, 0), Vec2::new(4, 0), Vec2::new(0, 4));
    /// assert!(t.contains(Vec2::new(1, 1)));
    /// assert!(t.contains(Vec2::new(2, 2)));
    /// assert!(!t.contains(Vec2::new(3, 3)));
    /// ```
    #[must_use]
    pub fn contains(&self, point: Vec2<T>) -> bool {
        let zero = <Promoted<T> as Zero>::zero();
        let d = [
            (self.b - self.a).cross(point - self.a),
            (self.c - self.b).cross(point - self.b),
            (self.a - self.c).cross(point - self.c),
        ];
        let has_negative = d.iter().any(|d| *d < zero);
        let has_positive = d.iter().any(|d| *d > zero);
        if has_negative && has_positive {
            return false;
        }
        if has_negative || has_positive {
            return true;
        }
        // Degenerate triangle: every vertex and the point are collinear.
        let within = |values: [T; 3], p: T| {
            values
                .into_iter()
                .minmax()
                .into_option()
                .is_some_and(|(min, max)| min <= p && p <= max)
        };
        within([self.a.x, self.b.x, self.c.x], point.x)
            && within([self.a.y, self.b.y, self.c.y], point.y)
    }
}

/// A triangle in space.
///
/// # Examples
/// ```
/// use geomkit::core::prelude::*;
/// let t = Triangle3d::new(
///     Vec3::new(0.0, 0.0, 0.0),
///     Vec3::new(1.0, 0.0, 0.0),
///     Vec3::new(0.0, 1.0, 0.0),
/// );
/// assert_eq!(t.area(), 0.5);
/// assert_eq!(t.normal(), Vec3::new(0.0, 0.0, 1.0));
/// ```
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Triangle3<T> {
    pub a: Vec3<T>,
    pub b: Vec3<T>,
    pub c: Vec3<T>,
}

pub type Triangle3i = Triangle3<i32>;
pub type Triangle3f = Triangle3<f32>;
pub type Triangle3d = Triangle3<f64>;

impl_triangle!(Triangle3, Vec3);

impl<T: Scalar> Triangle3<T> {
    /// Drops `z` from every vertex.
    #[must_use]
    pub fn to_triangle2(&self) -> Triangle2<T> {
        Triangle2::new(self.a.to_vec2(), self.b.to_vec2(), self.c.to_vec2())
    }
}

impl<T: Promote> Triangle3<T> {
    /// Half the magnitude of the cross product of two edges; never negative.
    #[must_use]
    pub fn area(&self) -> Promoted<T> {
        let one = <Promoted<T> as One>::one();
        (self.b - self.a).cross(self.c - self.a).magnitude() / (one + one)
    }

    /// The unit normal following the right-hand rule over `a, b, c`, or zero for a degenerate
    /// triangle.
    #[must_use]
    pub fn normal(&self) -> Vec3<Promoted<T>> {
        let mut rv = (self.b - self.a).cross(self.c - self.a);
        rv.normalize();
        rv
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Triangle2 ====================

    #[test]
    fn triangle2_metrics() {
        let t = Triangle2::new(Vec2::new(0, 0), Vec2::new(3, 0), Vec2::new(0, 4));
        assert_eq!(t.signed_area(), 6.0);
        assert_eq!(t.area(), 6.0);
        assert_eq!(t.perimeter(), 12.0);
        assert_eq!(t.centroid(), Vec2::new(1.0, 4.0 / 3.0));

        let flipped = Triangle2::new(t.a, t.c, t.b);
        assert_eq!(flipped.signed_area(), -6.0);
        assert_eq!(flipped.area(), 6.0);
    }

    #[test]
    fn triangle2_contains_either_winding() {
        let ccw = Triangle2d::new(Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0), Vec2::new(0.0, 4.0));
        let cw = Triangle2::new(ccw.a, ccw.c, ccw.b);
        for t in [ccw, cw] {
            assert!(t.contains(Vec2::new(1.0, 1.0)));
            assert!(t.contains(Vec2::new(0.0, 0.0)));
            assert!(t.contains(Vec2::new(2.0, 0.0)));
            assert!(!t.contains(Vec2::new(-0.1, 1.0)));
            assert!(!t.contains(Vec2::new(3.0, 3.0)));
        }
    }

    #[test]
    fn degenerate_triangle2() {
        let t = Triangle2::new(Vec2::new(0, 0), Vec2::new(1, 0), Vec2::new(2, 0));
        assert_eq!(t.area(), 0.0);
        assert!(!t.is_empty());
        assert!(t.contains(Vec2::new(1, 0)));
        assert!(!t.contains(Vec2::new(5, 0)));
        assert!(Triangle2i::default().is_empty());
    }

    #[test]
    fn triangle2_access() {
        let mut t = Triangle2::new(Vec2::new(0, 0), Vec2::new(1, 0), Vec2::new(0, 1));
        assert_eq!(t[2], Vec2::new(0, 1));
        t[0] = Vec2::new(-1, -1);
        assert_eq!(t.at(0), Vec2::new(-1, -1));
        assert_eq!(t.to_triangle3().to_triangle2(), t);
        assert_eq!(t.iter().count(), 3);
        assert_eq!(t.to_string(), "( ( -1, -1 ), ( 1, 0 ), ( 0, 1 ) )");
    }

    #[test]
    #[should_panic(expected = "index < 3")]
    fn triangle2_index_out_of_range() {
        let _ = Triangle2i::default()[3];
    }

    // ==================== Triangle3 ====================

    #[test]
    fn triangle3_area() {
        let t = Triangle3d::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        );
        assert_eq!(t.area(), 0.5);
        assert_eq!(t.to_triangle2().area(), 0.5);
        assert_eq!(t.to_triangle2().signed_area(), 0.5);
    }

    #[test]
    fn triangle3_normal_and_centroid() {
        let t = Triangle3::new(Vec3::new(0, 0, 0), Vec3::new(0, 2, 0), Vec3::new(0, 0, 2));
        assert_eq!(t.normal(), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(t.area(), 2.0);
        assert!(t.centroid().almost_eq(Vec3::new(0.0, 2.0 / 3.0, 2.0 / 3.0)));
        let flat = Triangle3::new(Vec3::new(0, 0, 0), Vec3::new(1, 1, 1), Vec3::new(2, 2, 2));
        assert_eq!(flat.normal(), Vec3::zero());
    }
}
