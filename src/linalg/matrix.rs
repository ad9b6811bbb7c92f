//! Small square matrices in column-major order.
//!
//! Element `(row, col)` of an `N`x`N` matrix lives at `m[col * N + row]`, so each column is a
//! contiguous run of the backing array. [`Mat3`] doubles as a homogeneous 2D transform:
//! ```text
//! | m00 m01 m02 |     | linear  tx |
//! | m10 m11 m12 |  =  | part    ty |
//! | m20 m21 m22 |     | 0   0   1  |
//! ```

use crate::assert::*;
use crate::core::prelude::*;
use crate::linalg::vector::write_tuple;
use crate::util::gg_float;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::Mul;

macro_rules! impl_matrix {
    ($name:ident, $vec:ident, $n:literal, $len:literal,
     [$($col_fn:ident => $col:literal),+],
     [$($elem_fn:ident => $row:literal, $ecol:literal);+]) => {
        impl<T: Scalar> $name<T> {
            pub const fn from_array(m: [T; $len]) -> Self {
                Self { m }
            }
            #[must_use]
            pub fn zero() -> Self {
                Self { m: [T::zero(); $len] }
            }
            /// The multiplicative identity.
            #[must_use]
            pub fn identity() -> Self {
                let mut rv = Self::zero();
                for i in 0..$n {
                    rv.m[i * $n + i] = T::one();
                }
                rv
            }

            #[must_use]
            pub fn as_array(&self) -> &[T; $len] {
                &self.m
            }

            /// Element at `(row, col)`.
            ///
            /// # Panics
            /// Panics if either index is out of range.
            #[must_use]
            pub fn at(&self, row: usize, col: usize) -> T {
                check_lt!(row, $n);
                check_lt!(col, $n);
                self.m[col * $n + row]
            }
            pub fn set(&mut self, row: usize, col: usize, value: T) {
                check_lt!(row, $n);
                check_lt!(col, $n);
                self.m[col * $n + row] = value;
            }

            $(
                #[must_use]
                pub fn $elem_fn(&self) -> T {
                    self.m[$ecol * $n + $row]
                }
            )+

            /// Column `col` as a vector.
            ///
            /// # Panics
            /// Panics if `col` is out of range.
            #[must_use]
            pub fn column(&self, col: usize) -> $vec<T> {
                check_lt!(col, $n);
                $vec::from_slice(&self.m[col * $n..(col + 1) * $n])
            }
            #[must_use]
            pub fn row(&self, row: usize) -> $vec<T> {
                check_lt!(row, $n);
                <$vec<T> as Vector>::from_fn(|col| self.m[col * $n + row])
            }
            $(
                #[must_use]
                pub fn $col_fn(&self) -> $vec<T> {
                    self.column($col)
                }
            )+

            #[must_use]
            pub fn transposed(&self) -> Self {
                let mut rv = *self;
                for row in 0..$n {
                    for col in 0..$n {
                        rv.m[col * $n + row] = self.m[row * $n + col];
                    }
                }
                rv
            }
            pub fn transpose(&mut self) {
                *self = self.transposed();
            }
        }

        impl<T: Promote> $name<T> {
            #[must_use]
            pub fn promote(&self) -> $name<Promoted<T>> {
                $name { m: self.m.map(<T as Promote>::promote) }
            }

            /// Whether every pair of elements differs by at most `tolerance`.
            #[must_use]
            pub fn equals(&self, other: &Self, tolerance: Promoted<T>) -> bool {
                self.m
                    .iter()
                    .zip(other.m.iter())
                    .all(|(a, b)| gg_float::approx_eq(a.promote(), b.promote(), tolerance))
            }
            #[must_use]
            pub fn almost_eq(&self, other: &Self) -> bool {
                self.equals(other, <Promoted<T> as Real>::TOLERANCE)
            }
        }

        impl<T: Scalar> Default for $name<T> {
            fn default() -> Self {
                Self::zero()
            }
        }

        impl<T: Scalar> From<[T; $len]> for $name<T> {
            fn from(m: [T; $len]) -> Self {
                Self { m }
            }
        }

        impl<T: Scalar> std::hash::Hash for $name<T> {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                for value in self.m {
                    std::hash::Hash::hash(&value.hash_bits(), state);
                }
            }
        }

        /// Renders the columns in order.
        impl<T: Scalar> fmt::Display for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write_tuple(f, &[$(&self.$col_fn()),+])
            }
        }

        impl<T: Promote> Mul<$vec<T>> for $name<T> {
            type Output = $vec<Promoted<T>>;

            fn mul(self, rhs: $vec<T>) -> Self::Output {
                let (m, v) = (self.promote(), rhs.promote());
                <$vec<Promoted<T>> as Vector>::from_fn(|row| {
                    (0..$n).fold(<Promoted<T> as Zero>::zero(), |acc, col| {
                        acc + m.m[col * $n + row] * v[col]
                    })
                })
            }
        }

        impl<T: Promote> Mul<$name<T>> for $name<T> {
            type Output = $name<Promoted<T>>;

            fn mul(self, rhs: $name<T>) -> Self::Output {
                let (a, b) = (self.promote(), rhs.promote());
                let mut rv = $name::zero();
                for col in 0..$n {
                    for row in 0..$n {
                        rv.m[col * $n + row] = (0..$n).fold(<Promoted<T> as Zero>::zero(), |acc, k| {
                            acc + a.m[k * $n + row] * b.m[col * $n + k]
                        });
                    }
                }
                rv
            }
        }

        impl<T: Promote> Mul<T> for $name<T> {
            type Output = $name<Promoted<T>>;

            fn mul(self, rhs: T) -> Self::Output {
                let rhs = rhs.promote();
                $name { m: self.m.map(|value| value.promote() * rhs) }
            }
        }
    };
}

/// A 2x2 matrix, stored column-major.
///
/// # Examples
/// ```
/// use geomkit::core::prelude::*;
/// let m = Mat2::from_columns(Vec2::new(1, 3), Vec2::new(2, 4));
/// assert_eq!(m.m01(), 2);
/// assert_eq!(m.determinant(), -2.0);
/// assert_eq!(m * Vec2::new(1, 1), Vec2::new(3.0, 7.0));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Mat2<T> {
    pub m: [T; 4],
}

pub type Mat2f = Mat2<f32>;
pub type Mat2d = Mat2<f64>;

impl_matrix!(Mat2, Vec2, 2, 4,
    [c1 => 0, c2 => 1],
    [m00 => 0, 0; m10 => 1, 0; m01 => 0, 1; m11 => 1, 1]);

impl<T: Scalar> Mat2<T> {
    #[must_use]
    pub fn from_columns(c1: Vec2<T>, c2: Vec2<T>) -> Self {
        Self {
            m: [c1.x, c1.y, c2.x, c2.y],
        }
    }
}

impl<T: Promote> Mat2<T> {
    #[must_use]
    pub fn determinant(&self) -> Promoted<T> {
        let m = self.promote();
        m.m00() * m.m11() - m.m01() * m.m10()
    }

    /// The inverse, or `None` if the matrix is singular.
    #[must_use]
    pub fn inverse(&self) -> Option<Mat2<Promoted<T>>> {
        let det = self.determinant();
        if det.is_zero() {
            return None;
        }
        let m = self.promote();
        Some(Mat2::from_columns(
            Vec2::new(m.m11() / det, -m.m10() / det),
            Vec2::new(-m.m01() / det, m.m00() / det),
        ))
    }
}

impl<T: Real> Mat2<T> {
    /// Rotates counter-clockwise by `radians`:
    /// ```text
    /// | cos(θ)  -sin(θ) |
    /// | sin(θ)   cos(θ) |
    /// ```
    #[must_use]
    pub fn rotation(radians: T) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::from_columns(Vec2::new(cos, sin), Vec2::new(-sin, cos))
    }
    #[must_use]
    pub fn scaling(sx: T, sy: T) -> Self {
        Self::from_columns(Vec2::new(sx, T::zero()), Vec2::new(T::zero(), sy))
    }
}

/// A 3x3 matrix, stored column-major. Also used as a homogeneous 2D transform; see
/// [`transform_point`](Mat3::transform_point).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Mat3<T> {
    pub m: [T; 9],
}

pub type Mat3f = Mat3<f32>;
pub type Mat3d = Mat3<f64>;

impl_matrix!(Mat3, Vec3, 3, 9,
    [c1 => 0, c2 => 1, c3 => 2],
    [m00 => 0, 0; m10 => 1, 0; m20 => 2, 0;
     m01 => 0, 1; m11 => 1, 1; m21 => 2, 1;
     m02 => 0, 2; m12 => 1, 2; m22 => 2, 2]);

impl<T: Scalar> Mat3<T> {
    #[must_use]
    pub fn from_columns(c1: Vec3<T>, c2: Vec3<T>, c3: Vec3<T>) -> Self {
        Self {
            m: [c1.x, c1.y, c1.z, c2.x, c2.y, c2.z, c3.x, c3.y, c3.z],
        }
    }

    /// Translates points by `(dx, dy)`:
    /// ```text
    /// | 1 0 dx |
    /// | 0 1 dy |
    /// | 0 0 1  |
    /// ```
    #[must_use]
    pub fn translation(dx: T, dy: T) -> Self {
        let mut rv = Self::identity();
        rv.m[6] = dx;
        rv.m[7] = dy;
        rv
    }
    #[must_use]
    pub fn translation_vec2(v: Vec2<T>) -> Self {
        Self::translation(v.x, v.y)
    }
    #[must_use]
    pub fn scaling(sx: T, sy: T) -> Self {
        let mut rv = Self::identity();
        rv.m[0] = sx;
        rv.m[4] = sy;
        rv
    }
}

impl<T: Promote> Mat3<T> {
    /// # Examples
    /// ```
    /// use geomkit::core::prelude::*;
    /// assert_eq!(Mat3::<i32>::identity().determinant(), 1.0);
    /// ```
    #[must_use]
    pub fn determinant(&self) -> Promoted<T> {
        let m = self.promote();
        m.m00() * (m.m11() * m.m22() - m.m12() * m.m21())
            - m.m01() * (m.m10() * m.m22() - m.m12() * m.m20())
            + m.m02() * (m.m10() * m.m21() - m.m11() * m.m20())
    }

    /// The inverse, or `None` if the matrix is singular.
    #[must_use]
    pub fn inverse(&self) -> Option<Mat3<Promoted<T>>> {
        let det = self.determinant();
        if det.is_zero() {
            return None;
        }
        let m = self.promote();
        // Transposed cofactors over the determinant.
        let cofactor = |r0: usize, c0: usize, r1: usize, c1: usize| {
            (m.at(r0, c0) * m.at(r1, c1) - m.at(r0, c1) * m.at(r1, c0)) / det
        };
        Some(Mat3::from_columns(
            Vec3::new(cofactor(1, 1, 2, 2), -cofactor(1, 0, 2, 2), cofactor(1, 0, 2, 1)),
            Vec3::new(-cofactor(0, 1, 2, 2), cofactor(0, 0, 2, 2), -cofactor(0, 0, 2, 1)),
            Vec3::new(cofactor(0, 1, 1, 2), -cofactor(0, 0, 1, 2), cofactor(0, 0, 1, 1)),
        ))
    }

    /// Applies the matrix to `(x, y, 1)` and divides through by the resulting `w`. A transform
    /// that sends the point to `w = 0` returns the undivided `x` and `y`.
    ///
    /// # Examples
    /// ```
    /// use geomkit::core::prelude::*;
    /// let p = Mat3::translation(2, 3).transform_point(Vec2::new(1, 1));
    /// assert_eq!(p, Vec2::new(3.0, 4.0));
    /// ```
    #[must_use]
    pub fn transform_point(&self, point: Vec2<T>) -> Vec2<Promoted<T>> {
        let v = *self * Vec3::from_vec2(point, T::one());
        if v.z.is_zero() || v.z == <Promoted<T> as One>::one() {
            v.to_vec2()
        } else {
            Vec2::new(v.x / v.z, v.y / v.z)
        }
    }
    /// Applies only the linear part, ignoring translation.
    #[must_use]
    pub fn transform_vector(&self, vector: Vec2<T>) -> Vec2<Promoted<T>> {
        (*self * Vec3::from_vec2(vector, T::zero())).to_vec2()
    }
}

impl<T: Real> Mat3<T> {
    /// Rotates counter-clockwise by `radians` about the origin:
    /// ```text
    /// | cos(θ)  -sin(θ)  0 |
    /// | sin(θ)   cos(θ)  0 |
    /// | 0        0       1 |
    /// ```
    #[must_use]
    pub fn rotation(radians: T) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::from_columns(
            Vec3::new(cos, sin, T::zero()),
            Vec3::new(-sin, cos, T::zero()),
            Vec3::new(T::zero(), T::zero(), T::one()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::gg_float::approx_eq;
    use std::f64::consts::FRAC_PI_2;

    // ==================== Mat2 ====================

    #[test]
    fn mat2_layout() {
        let m = Mat2::from_array([1, 2, 3, 4]);
        assert_eq!(m.m00(), 1);
        assert_eq!(m.m10(), 2);
        assert_eq!(m.m01(), 3);
        assert_eq!(m.m11(), 4);
        assert_eq!(m.c1(), Vec2::new(1, 2));
        assert_eq!(m.row(0), Vec2::new(1, 3));
        assert_eq!(m.at(1, 0), 2);
        assert_eq!(m.transposed().as_array(), &[1, 3, 2, 4]);
        assert_eq!(Mat2::<i32>::default(), Mat2::zero());
    }

    #[test]
    fn mat2_inverse() {
        let m = Mat2::from_columns(Vec2::new(4, 2), Vec2::new(7, 6));
        assert_eq!(m.determinant(), 10.0);
        let inv = m.inverse().unwrap();
        assert!((m.promote() * inv).almost_eq(&Mat2::identity()));
        assert!(Mat2::from_array([1, 2, 2, 4]).inverse().is_none());
    }

    #[test]
    fn mat2_rotation() {
        let v = Mat2::rotation(FRAC_PI_2) * Vec2::new(1.0, 0.0);
        assert!(v.almost_eq(Vec2::new(0.0, 1.0)));
        assert_eq!(Mat2::scaling(2.0, 3.0) * Vec2::new(1.0, 1.0), Vec2::new(2.0, 3.0));
    }

    #[test]
    #[should_panic(expected = "col < 2")]
    fn mat2_column_out_of_range() {
        let _ = Mat2d::identity().column(2);
    }

    // ==================== Mat3 ====================

    #[test]
    fn mat3_multiply() {
        let a = Mat3::translation(1, 2);
        let b = Mat3::scaling(2, 2);
        // Scale then translate.
        let p = (a * b).transform_point(Vec2::new(1.0, 1.0));
        assert_eq!(p, Vec2::new(3.0, 4.0));
        let q = (b * a).transform_point(Vec2::new(1.0, 1.0));
        assert_eq!(q, Vec2::new(4.0, 6.0));
        assert_eq!(Mat3::<i32>::identity() * Vec3::new(1, 2, 3), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn mat3_inverse() {
        let m = Mat3::from_columns(
            Vec3::new(2.0, 0.0, 1.0),
            Vec3::new(1.0, 3.0, 0.0),
            Vec3::new(0.0, 1.0, 4.0),
        );
        let inv = m.inverse().unwrap();
        assert!((m * inv).almost_eq(&Mat3::identity()));
        assert!((inv * m).almost_eq(&Mat3::identity()));

        let t = Mat3::translation(5.0, -2.0);
        let back = t.inverse().unwrap().transform_point(Vec2::new(5.0, -2.0));
        assert!(back.almost_eq(Vec2::zero()));

        let singular = Mat3::from_columns(Vec3::new(1, 2, 3), Vec3::new(2, 4, 6), Vec3::new(0, 1, 0));
        assert_eq!(singular.determinant(), 0.0);
        assert!(singular.inverse().is_none());
    }

    #[test]
    fn mat3_rotation_ignores_translation_for_vectors() {
        let m = Mat3::translation(10.0, 10.0) * Mat3::rotation(FRAC_PI_2);
        assert!(m.transform_vector(Vec2::new(1.0, 0.0)).almost_eq(Vec2::new(0.0, 1.0)));
        assert!(m.transform_point(Vec2::new(1.0, 0.0)).almost_eq(Vec2::new(10.0, 11.0)));
        assert!(approx_eq(m.determinant(), 1.0, EPSILON));
    }

    #[test]
    fn mat3_perspective_divide() {
        let mut m = Mat3d::identity();
        m.set(2, 2, 2.0);
        assert_eq!(m.transform_point(Vec2::new(4.0, 6.0)), Vec2::new(2.0, 3.0));
        assert_eq!(m.m22(), 2.0);
    }

    #[test]
    fn display_lists_columns() {
        assert_eq!(
            Mat2::from_array([1, 2, 3, 4]).to_string(),
            "( ( 1, 2 ), ( 3, 4 ) )"
        );
    }
}
