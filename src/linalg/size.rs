//! Extents in two and three dimensions.
//!
//! A size has the same storage as the matching vector but models an extent: it has an area or
//! volume and aspect ratios instead of a heading. Extents may be negative; see
//! [`Rect`](crate::shape::rect::Rect) for how negative sizes are canonicalised.

use crate::core::prelude::*;
use crate::linalg::vector::write_tuple;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

macro_rules! impl_size {
    ($name:ident, $vec:ident, $dim:literal, $($field:ident => $vfield:ident @ $idx:literal),+) => {
        impl<T: Scalar> $name<T> {
            pub const fn new($($field: T),+) -> Self {
                Self { $($field),+ }
            }
            #[must_use]
            pub fn splat(value: T) -> Self {
                Self { $($field: value),+ }
            }
            #[must_use]
            pub fn zero() -> Self {
                Self::splat(T::zero())
            }
            #[must_use]
            pub fn from_vec(v: $vec<T>) -> Self {
                Self { $($field: v.$vfield),+ }
            }
            #[must_use]
            pub fn to_vec(self) -> $vec<T> {
                $vec { $($vfield: self.$field),+ }
            }

            /// Whether every extent is zero.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.to_vec().is_zero()
            }

            #[must_use]
            pub fn at(&self, axis: Axis) -> T {
                self.to_vec()[axis]
            }

            #[must_use]
            pub fn random() -> Self {
                Self::from_vec($vec::random())
            }
            #[must_use]
            pub fn random_with(rng: &mut Random) -> Self {
                Self::from_vec($vec::random_with(rng))
            }
            #[must_use]
            pub fn random_up_to(max: T) -> Self {
                Self::from_vec($vec::random_up_to(max))
            }
            #[must_use]
            pub fn random_up_to_with(max: T, rng: &mut Random) -> Self {
                Self::from_vec($vec::random_up_to_with(max, rng))
            }
            #[must_use]
            pub fn random_between(min: T, max: T) -> Self {
                Self::from_vec($vec::random_between(min, max))
            }
            #[must_use]
            pub fn random_between_with(min: T, max: T, rng: &mut Random) -> Self {
                Self::from_vec($vec::random_between_with(min, max, rng))
            }
        }

        impl<T: Promote> $name<T> {
            /// Length of the diagonal.
            #[must_use]
            pub fn diagonal(self) -> Promoted<T> {
                self.to_vec().magnitude()
            }
            #[must_use]
            pub fn promote(self) -> $name<Promoted<T>> {
                $name::from_vec(self.to_vec().promote())
            }
        }

        impl<T: Scalar> From<$vec<T>> for $name<T> {
            fn from(value: $vec<T>) -> Self {
                Self::from_vec(value)
            }
        }
        impl<T: Scalar> From<$name<T>> for $vec<T> {
            fn from(value: $name<T>) -> Self {
                value.to_vec()
            }
        }

        impl<T: Scalar> Index<Axis> for $name<T> {
            type Output = T;

            fn index(&self, axis: Axis) -> &T {
                match axis.index() {
                    $($idx => &self.$field,)+
                    index => panic!(
                        "{}: {}",
                        stringify!($name),
                        GeometryError::IndexOutOfRange { index, len: $dim }
                    ),
                }
            }
        }
        impl<T: Scalar> IndexMut<Axis> for $name<T> {
            fn index_mut(&mut self, axis: Axis) -> &mut T {
                match axis.index() {
                    $($idx => &mut self.$field,)+
                    index => panic!(
                        "{}: {}",
                        stringify!($name),
                        GeometryError::IndexOutOfRange { index, len: $dim }
                    ),
                }
            }
        }

        impl<T: Scalar> std::hash::Hash for $name<T> {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(&self.to_vec(), state);
            }
        }

        impl<T: Scalar> fmt::Display for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write_tuple(f, &[$(&self.$field),+])
            }
        }

        impl_size!(@op $name [$($field),+] Add, add, AddAssign, add_assign, +);
        impl_size!(@op $name [$($field),+] Sub, sub, SubAssign, sub_assign, -);
        impl_size!(@op $name [$($field),+] Mul, mul, MulAssign, mul_assign, *);
        impl_size!(@op $name [$($field),+] Div, div, DivAssign, div_assign, /);
    };
    (@op $name:ident [$($field:ident),+] $op:ident, $method:ident, $op_assign:ident, $method_assign:ident, $sym:tt) => {
        impl<T: Scalar> $op for $name<T> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                Self { $($field: self.$field $sym rhs.$field),+ }
            }
        }
        impl<T: Scalar> $op<T> for $name<T> {
            type Output = Self;

            fn $method(self, rhs: T) -> Self {
                Self { $($field: self.$field $sym rhs),+ }
            }
        }
        impl<T: Scalar> $op_assign for $name<T> {
            fn $method_assign(&mut self, rhs: Self) {
                *self = *self $sym rhs;
            }
        }
        impl<T: Scalar> $op_assign<T> for $name<T> {
            fn $method_assign(&mut self, rhs: T) {
                *self = *self $sym rhs;
            }
        }
    };
}

/// A 2D extent.
///
/// # Examples
/// ```
/// use geomkit::core::prelude::*;
/// let size = Size2::new(4, -3);
/// assert_eq!(size.area(), 12.0);
/// assert_eq!(size.diagonal(), 5.0);
/// assert_eq!(size.aspect(), -4.0 / 3.0);
/// ```
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Size2<T> {
    pub width: T,
    pub height: T,
}

pub type Size2i = Size2<i32>;
pub type Size2f = Size2<f32>;
pub type Size2d = Size2<f64>;

impl_size!(Size2, Vec2, 2, width => x @ 0, height => y @ 1);

impl<T: Promote> Size2<T> {
    /// `width / height`.
    #[must_use]
    pub fn aspect(self) -> Promoted<T> {
        self.width.promote() / self.height.promote()
    }
    /// The unsigned area.
    #[must_use]
    pub fn area(self) -> Promoted<T> {
        (self.width.promote() * self.height.promote()).abs()
    }
}

/// A 3D extent.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Size3<T> {
    pub width: T,
    pub height: T,
    pub depth: T,
}

pub type Size3i = Size3<i32>;
pub type Size3f = Size3<f32>;
pub type Size3d = Size3<f64>;

impl_size!(Size3, Vec3, 3, width => x @ 0, height => y @ 1, depth => z @ 2);

impl<T: Promote> Size3<T> {
    /// `width / height`.
    #[must_use]
    pub fn aspect_xy(self) -> Promoted<T> {
        self.width.promote() / self.height.promote()
    }
    /// `height / depth`.
    #[must_use]
    pub fn aspect_yz(self) -> Promoted<T> {
        self.height.promote() / self.depth.promote()
    }
    /// `depth / width`.
    #[must_use]
    pub fn aspect_zx(self) -> Promoted<T> {
        self.depth.promote() / self.width.promote()
    }
    /// The unsigned volume.
    #[must_use]
    pub fn volume(self) -> Promoted<T> {
        (self.width.promote() * self.height.promote() * self.depth.promote()).abs()
    }
}
