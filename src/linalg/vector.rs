//! Behaviour shared by [`Vec2`](super::vec2::Vec2), [`Vec3`](super::vec3::Vec3) and
//! [`Vec4`](super::vec4::Vec4).
//!
//! The [`Vector`] trait carries the dimension-independent queries (dot product, magnitude,
//! distance, angle, approximate comparison). Constructors, operators and the promoted
//! conversions (`normalized()`, `lerp()`, ...) are generated per type by `impl_vector!`, since
//! their return types name the concrete vector.

use crate::core::prelude::*;
use crate::util::gg_float;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;

/// A fixed-dimension tuple of [`Scalar`] components.
pub trait Vector: Copy + Default + PartialEq + fmt::Debug + fmt::Display {
    type Elem: Scalar;
    const DIM: usize;

    /// Builds a vector by calling `f` with each component index in turn.
    fn from_fn(f: impl FnMut(usize) -> Self::Elem) -> Self;

    /// Returns the component at `index`.
    ///
    /// # Panics
    /// Panics if `index >= Self::DIM`.
    fn component(&self, index: usize) -> Self::Elem;

    /// Returns the component at `index`, or [`GeometryError::IndexOutOfRange`].
    fn try_at(&self, index: usize) -> Result<Self::Elem> {
        if index < Self::DIM {
            Ok(self.component(index))
        } else {
            bail!(GeometryError::IndexOutOfRange {
                index,
                len: Self::DIM
            })
        }
    }
    fn front(&self) -> Self::Elem {
        self.component(0)
    }
    fn back(&self) -> Self::Elem {
        self.component(Self::DIM - 1)
    }

    /// Whether every component is zero.
    fn is_zero(&self) -> bool {
        (0..Self::DIM).all(|i| self.component(i).is_zero())
    }

    /// Sum of pairwise component products.
    ///
    /// # Examples
    /// ```
    /// use geomkit::core::prelude::*;
    /// assert_eq!(Vec3::new(1, 2, 3).dot(Vec3::new(4, 5, 6)), 32.0);
    /// ```
    fn dot(self, other: Self) -> Promoted<Self::Elem>
    where
        Self::Elem: Promote,
    {
        (0..Self::DIM).fold(<Promoted<Self::Elem> as Zero>::zero(), |acc, i| {
            acc + self.component(i).promote() * other.component(i).promote()
        })
    }

    /// Returns the squared length of the vector.
    ///
    /// Use this instead of [`magnitude`](Vector::magnitude) when comparing lengths to avoid the
    /// square root.
    fn magnitude_squared(self) -> Promoted<Self::Elem>
    where
        Self::Elem: Promote,
    {
        self.dot(self)
    }
    fn magnitude(self) -> Promoted<Self::Elem>
    where
        Self::Elem: Promote,
    {
        self.magnitude_squared().sqrt()
    }

    fn distance_squared(self, other: Self) -> Promoted<Self::Elem>
    where
        Self::Elem: Promote,
    {
        (0..Self::DIM).fold(<Promoted<Self::Elem> as Zero>::zero(), |acc, i| {
            let d = self.component(i).promote() - other.component(i).promote();
            acc + d * d
        })
    }
    /// Euclidean distance to `other`.
    ///
    /// # Examples
    /// ```
    /// use geomkit::core::prelude::*;
    /// assert_eq!(Vec2::new(0, 0).distance(Vec2::new(3, 4)), 5.0);
    /// ```
    fn distance(self, other: Self) -> Promoted<Self::Elem>
    where
        Self::Elem: Promote,
    {
        self.distance_squared(other).sqrt()
    }

    /// The unsigned angle between the two vectors, in `[0, π]`.
    ///
    /// A zero vector has no direction; the angle to it is π/2.
    fn angle(self, other: Self) -> Promoted<Self::Elem>
    where
        Self::Elem: Promote,
    {
        let zero = <Promoted<Self::Elem> as Zero>::zero();
        let one = <Promoted<Self::Elem> as One>::one();
        let denom = (self.magnitude_squared() * other.magnitude_squared()).sqrt();
        let cos = if denom.is_zero() {
            zero
        } else {
            self.dot(other) / denom
        };
        clamp(cos, -one, one).acos()
    }

    /// Whether every pair of components differs by at most `tolerance`.
    fn equals(self, other: Self, tolerance: Promoted<Self::Elem>) -> bool
    where
        Self::Elem: Promote,
    {
        (0..Self::DIM).all(|i| {
            gg_float::approx_eq(
                self.component(i).promote(),
                other.component(i).promote(),
                tolerance,
            )
        })
    }
    /// [`equals`](Vector::equals) with the default tolerance for the promoted type.
    fn almost_eq(self, other: Self) -> bool
    where
        Self::Elem: Promote,
    {
        self.equals(other, <Promoted<Self::Elem> as Real>::TOLERANCE)
    }

    /// Orders by magnitude. Vectors with `NaN` components sort after everything else.
    fn cmp_by_length(&self, other: &Self) -> Ordering
    where
        Self::Elem: Promote,
    {
        let (a, b) = (self.magnitude_squared(), other.magnitude_squared());
        a.partial_cmp(&b).unwrap_or_else(|| {
            warn!("cmp_by_length(): partial_cmp() failed: {} vs. {}", self, other);
            match (a.is_nan(), b.is_nan()) {
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                _ => Ordering::Equal,
            }
        })
    }
}

/// Writes `( a, b, ... )`, forwarding any precision to each item.
pub(crate) fn write_tuple(f: &mut fmt::Formatter<'_>, items: &[&dyn fmt::Display]) -> fmt::Result {
    f.write_str("( ")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        if let Some(precision) = f.precision() {
            write!(f, "{item:.precision$}")?;
        } else {
            write!(f, "{item}")?;
        }
    }
    f.write_str(" )")
}

/// Broadcast arithmetic between a vector and a single primitive value, on either side.
macro_rules! impl_vector_scalar_ops {
    ($name:ident $fields:tt $s:ty, $($rest:ty),+) => {
        $crate::linalg::vector::impl_vector_scalar_ops!($name $fields $s);
        $crate::linalg::vector::impl_vector_scalar_ops!($name $fields $($rest),+);
    };
    ($name:ident [$($field:ident),+] $s:ty) => {
        $crate::linalg::vector::impl_vector_scalar_ops!(@op $name [$($field),+] $s, Add, add, +);
        $crate::linalg::vector::impl_vector_scalar_ops!(@op $name [$($field),+] $s, Sub, sub, -);
        $crate::linalg::vector::impl_vector_scalar_ops!(@op $name [$($field),+] $s, Mul, mul, *);
        $crate::linalg::vector::impl_vector_scalar_ops!(@op $name [$($field),+] $s, Div, div, /);
    };
    (@op $name:ident [$($field:ident),+] $s:ty, $op:ident, $method:ident, $sym:tt) => {
        impl<T: Promote<$s>> std::ops::$op<$s> for $name<T> {
            type Output = $name<Promoted<T, $s>>;

            fn $method(self, rhs: $s) -> Self::Output {
                let rhs = <T as Promote<$s>>::promote_rhs(rhs);
                $name {
                    $($field: <T as Promote<$s>>::promote(self.$field) $sym rhs),+
                }
            }
        }
        impl<T: Scalar> std::ops::$op<$name<T>> for $s
        where
            $s: Promote<T>,
        {
            type Output = $name<Promoted<$s, T>>;

            fn $method(self, rhs: $name<T>) -> Self::Output {
                let lhs = <$s as Promote<T>>::promote(self);
                $name {
                    $($field: lhs $sym <$s as Promote<T>>::promote_rhs(rhs.$field)),+
                }
            }
        }
    };
}
pub(crate) use impl_vector_scalar_ops;

/// Generates the shared surface of a vector type `$name<T>` with the given fields, in order.
macro_rules! impl_vector {
    ($name:ident, $dim:literal, $($field:ident),+) => {
        impl<T: Scalar> $crate::linalg::vector::Vector for $name<T> {
            type Elem = T;
            const DIM: usize = $dim;

            fn from_fn(f: impl FnMut(usize) -> T) -> Self {
                Self::from(std::array::from_fn::<T, $dim, _>(f))
            }

            fn component(&self, index: usize) -> T {
                self[index]
            }
        }

        impl<T: Scalar> $name<T> {
            pub const fn new($($field: T),+) -> Self {
                Self { $($field),+ }
            }
            /// Creates a vector with every component set to `value`.
            #[must_use]
            pub fn splat(value: T) -> Self {
                Self { $($field: value),+ }
            }
            #[must_use]
            pub fn zero() -> Self {
                Self::splat(T::zero())
            }
            #[must_use]
            pub fn min_value() -> Self {
                Self::splat(<T as num_traits::Bounded>::min_value())
            }
            #[must_use]
            pub fn max_value() -> Self {
                Self::splat(<T as num_traits::Bounded>::max_value())
            }
            /// Reads components from the front of `values`. Missing trailing components are zero
            /// and surplus values are ignored.
            #[must_use]
            pub fn from_slice(values: &[T]) -> Self {
                let mut rv = Self::zero();
                for (i, value) in values.iter().take($dim).enumerate() {
                    rv[i] = *value;
                }
                rv
            }

            #[must_use]
            pub fn to_array(self) -> [T; $dim] {
                [$(self.$field),+]
            }
            pub fn iter(&self) -> std::array::IntoIter<T, $dim> {
                self.to_array().into_iter()
            }

            /// Returns the component at `index`.
            ///
            /// # Panics
            /// Panics if `index` is out of range; see [`Vector::try_at`] for a checked version.
            #[must_use]
            pub fn at(&self, index: usize) -> T {
                self[index]
            }

            /// Converts every component to `U`, or returns `None` if any does not fit.
            #[must_use]
            pub fn cast<U: Scalar>(self) -> Option<$name<U>> {
                Some($name {
                    $($field: <U as num_traits::NumCast>::from(self.$field)?),+
                })
            }

            /// A vector with every component drawn from the full range of `T`, using this
            /// thread's shared generator.
            #[must_use]
            pub fn random() -> Self {
                Random::with_shared(|rng| Self::random_with(rng))
            }
            #[must_use]
            pub fn random_with(rng: &mut Random) -> Self {
                Self { $($field: rng.uniform()),+ }
            }
            /// A vector with every component drawn from `[0, max)`.
            #[must_use]
            pub fn random_up_to(max: T) -> Self {
                Random::with_shared(|rng| Self::random_up_to_with(max, rng))
            }
            #[must_use]
            pub fn random_up_to_with(max: T, rng: &mut Random) -> Self {
                Self { $($field: rng.uniform_up_to(max)),+ }
            }
            /// A vector with every component drawn from `[min, max)`.
            #[must_use]
            pub fn random_between(min: T, max: T) -> Self {
                Random::with_shared(|rng| Self::random_between_with(min, max, rng))
            }
            #[must_use]
            pub fn random_between_with(min: T, max: T, rng: &mut Random) -> Self {
                Self { $($field: rng.uniform_between(min, max)),+ }
            }
        }

        impl<T: Promote> $name<T> {
            /// Converts to the promoted scalar type without loss.
            #[must_use]
            pub fn promote(self) -> $name<Promoted<T>> {
                $name { $($field: self.$field.promote()),+ }
            }
            /// Returns a unit vector in the same direction. The zero vector is returned
            /// unchanged.
            #[must_use]
            pub fn normalized(self) -> $name<Promoted<T>> {
                let mut rv = self.promote();
                rv.normalize();
                rv
            }
            /// Returns this vector rescaled to at most `limit` in length.
            #[must_use]
            pub fn limited(self, limit: Promoted<T>) -> $name<Promoted<T>> {
                let mut rv = self.promote();
                rv.limit(limit);
                rv
            }
            #[must_use]
            pub fn inverted(self) -> $name<Promoted<T>> {
                -self
            }
            /// Component-wise linear interpolation towards `other`. `factor` is not clamped.
            #[must_use]
            pub fn lerp(self, other: Self, factor: Promoted<T>) -> $name<Promoted<T>> {
                $name {
                    $($field: $crate::linalg::functions::lerp(self.$field, other.$field, factor)),+
                }
            }
            /// Returns a copy with each component offset by up to `±amount` on that axis, using
            /// this thread's shared generator.
            #[must_use]
            pub fn jittered(self, amount: Self) -> $name<Promoted<T>> {
                Random::with_shared(|rng| self.jittered_with(amount, rng))
            }
            #[must_use]
            pub fn jittered_with(self, amount: Self, rng: &mut Random) -> $name<Promoted<T>> {
                let mut rv = self.promote();
                rv.jitter_with(amount.promote(), rng);
                rv
            }
            /// Component-wise division that returns `None` instead of dividing by zero.
            #[must_use]
            pub fn checked_div(self, rhs: Self) -> Option<$name<Promoted<T>>> {
                if $(rhs.$field.is_zero())||+ {
                    None
                } else {
                    Some($name { $($field: self.$field.promote() / rhs.$field.promote()),+ })
                }
            }
            #[must_use]
            pub fn checked_div_scalar(self, rhs: T) -> Option<$name<Promoted<T>>> {
                if rhs.is_zero() {
                    None
                } else {
                    let mut rv = self.promote();
                    rv /= rhs.promote();
                    Some(rv)
                }
            }
        }

        impl<T: Real> $name<T> {
            /// Normalises in place; the zero vector is left unchanged.
            pub fn normalize(&mut self) {
                let magnitude = self.magnitude();
                if !magnitude.is_zero() {
                    $(self.$field = $crate::util::gg_float::force_positive_zero(self.$field / magnitude);)+
                }
            }
            /// Rescales to length `limit` if currently longer.
            pub fn limit(&mut self, limit: T) {
                if self.magnitude_squared() > limit * limit {
                    self.normalize();
                    *self *= limit;
                }
            }
            /// Offsets each component by a uniform sample from `[-amount, amount)` on that axis.
            /// A zero `amount` leaves the vector unchanged.
            pub fn jitter(&mut self, amount: Self) {
                Random::with_shared(|rng| self.jitter_with(amount, rng));
            }
            pub fn jitter_with(&mut self, amount: Self, rng: &mut Random) {
                if amount.is_zero() {
                    return;
                }
                let one = T::one();
                $(self.$field = self.$field + amount.$field * rng.uniform_between(-one, one);)+
            }
        }

        impl<T: Scalar + std::ops::Neg<Output = T>> $name<T> {
            /// Negates every component in place.
            pub fn invert(&mut self) {
                $(self.$field = -self.$field;)+
            }
        }

        impl<T: Scalar> std::hash::Hash for $name<T> {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                $(std::hash::Hash::hash(&self.$field.hash_bits(), state);)+
            }
        }

        impl<T: Scalar> std::fmt::Display for $name<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                $crate::linalg::vector::write_tuple(f, &[$(&self.$field),+])
            }
        }

        impl<T: Scalar> std::ops::Index<usize> for $name<T> {
            type Output = T;

            fn index(&self, index: usize) -> &T {
                match [$(&self.$field),+].into_iter().nth(index) {
                    Some(c) => c,
                    None => panic!(
                        "{}: {}",
                        stringify!($name),
                        GeometryError::IndexOutOfRange { index, len: $dim }
                    ),
                }
            }
        }
        impl<T: Scalar> std::ops::IndexMut<usize> for $name<T> {
            fn index_mut(&mut self, index: usize) -> &mut T {
                match [$(&mut self.$field),+].into_iter().nth(index) {
                    Some(c) => c,
                    None => panic!(
                        "{}: {}",
                        stringify!($name),
                        GeometryError::IndexOutOfRange { index, len: $dim }
                    ),
                }
            }
        }
        impl<T: Scalar> std::ops::Index<Axis> for $name<T> {
            type Output = T;

            fn index(&self, axis: Axis) -> &T {
                &self[axis.index()]
            }
        }
        impl<T: Scalar> std::ops::IndexMut<Axis> for $name<T> {
            fn index_mut(&mut self, axis: Axis) -> &mut T {
                &mut self[axis.index()]
            }
        }

        impl<T: Scalar> From<[T; $dim]> for $name<T> {
            fn from(value: [T; $dim]) -> Self {
                let [$($field),+] = value;
                Self { $($field),+ }
            }
        }
        impl<T: Scalar> From<$name<T>> for [T; $dim] {
            fn from(value: $name<T>) -> Self {
                value.to_array()
            }
        }

        $crate::linalg::vector::impl_vector!(@binary $name [$($field),+] Add, add, +, AddAssign, add_assign);
        $crate::linalg::vector::impl_vector!(@binary $name [$($field),+] Sub, sub, -, SubAssign, sub_assign);
        $crate::linalg::vector::impl_vector!(@binary $name [$($field),+] Mul, mul, *, MulAssign, mul_assign);
        $crate::linalg::vector::impl_vector!(@binary $name [$($field),+] Div, div, /, DivAssign, div_assign);

        impl<T: Promote> std::ops::Neg for $name<T> {
            type Output = $name<Promoted<T>>;

            fn neg(self) -> Self::Output {
                $name { $($field: -self.$field.promote()),+ }
            }
        }

        impl<T: Scalar> std::iter::Sum for $name<T> {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::zero(), |mut acc, v| {
                    acc += v;
                    acc
                })
            }
        }

        $crate::linalg::vector::impl_vector_scalar_ops!(
            $name [$($field),+] i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64
        );
    };
    (@binary $name:ident [$($field:ident),+]
        $op:ident, $method:ident, $sym:tt, $op_assign:ident, $method_assign:ident) => {
        impl<T: Promote<U>, U: Scalar> std::ops::$op<$name<U>> for $name<T> {
            type Output = $name<Promoted<T, U>>;

            fn $method(self, rhs: $name<U>) -> Self::Output {
                $name {
                    $($field: <T as Promote<U>>::promote(self.$field)
                        $sym <T as Promote<U>>::promote_rhs(rhs.$field)),+
                }
            }
        }
        impl<T: Scalar> std::ops::$op_assign<$name<T>> for $name<T> {
            fn $method_assign(&mut self, rhs: $name<T>) {
                $(self.$field = self.$field $sym rhs.$field;)+
            }
        }
        impl<T: Scalar> std::ops::$op_assign<T> for $name<T> {
            fn $method_assign(&mut self, rhs: T) {
                $(self.$field = self.$field $sym rhs;)+
            }
        }
    };
}
pub(crate) use impl_vector;
