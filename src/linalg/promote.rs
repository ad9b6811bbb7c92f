//! Scalar traits and the numeric promotion table.
//!
//! Every derived geometric quantity (magnitude, distance, dot product, area, interpolation, ...)
//! is computed in a *promoted* type so that integer coordinates never go through truncating
//! division. The rules are:
//!
//! - two floating types promote to the wider one (`f32 < f64`);
//! - an integral type combined with any floating type promotes to `f64`;
//! - two integral types promote to `f64`;
//! - `f32` alone stays `f32`, `f64` alone stays `f64`.
//!
//! ```
//! use geomkit::core::prelude::*;
//! let a = Vec2::new(1, 2);
//! let b = Vec2::new(2, 3);
//! // Integral vectors produce `f64` quantities.
//! let d: f64 = a.distance(b);
//! assert!((d - std::f64::consts::SQRT_2).abs() < 1e-12);
//! ```

use crate::core::config::{EPSILON, EPSILON_F32};
use num_traits::{Bounded, Float, FloatConst, Num, NumCast};
use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use std::fmt::{Debug, Display};

/// A primitive numeric component type.
pub trait Scalar:
    Copy + Default + Debug + Display + PartialOrd + Num + NumCast + Bounded + SampleUniform + 'static
{
    /// Whether the type is an integer type.
    const INTEGRAL: bool;

    /// A bit pattern that uniquely identifies the value, used for structural hashing.
    fn hash_bits(self) -> u64;

    /// Samples uniformly over the whole representable range of the type.
    ///
    /// Floating types span `[-MAX, MAX)`; the range is sampled at half scale and doubled, since
    /// `MAX - (-MAX)` overflows to infinity.
    fn sample_full<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

/// A floating-point [`Scalar`]; the only types a promotion can produce.
pub trait Real: Scalar + Float + FloatConst + Promote<Self, Output = Self> {
    /// Default absolute tolerance for approximate comparisons.
    const TOLERANCE: Self;
}

/// Computes the type that should hold the result of combining `Self` with `U`.
pub trait Promote<U: Scalar = Self>: Scalar {
    type Output: Real;

    /// Converts the left-hand operand into the promoted type.
    fn promote(self) -> <Self as Promote<U>>::Output;
    /// Converts the right-hand operand into the promoted type.
    fn promote_rhs(rhs: U) -> <Self as Promote<U>>::Output;
}

/// The promoted type of `T` combined with `U` (or of `T` alone).
pub type Promoted<T, U = T> = <T as Promote<U>>::Output;

macro_rules! impl_scalar_int {
    ($($t:ty),+) => {$(
        impl Scalar for $t {
            const INTEGRAL: bool = true;

            #[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
            fn hash_bits(self) -> u64 {
                self as u64
            }

            fn sample_full<R: Rng + ?Sized>(rng: &mut R) -> Self {
                rng.gen()
            }
        }
    )+};
}

macro_rules! impl_scalar_float {
    ($($t:ty),+) => {$(
        impl Scalar for $t {
            const INTEGRAL: bool = false;

            fn hash_bits(self) -> u64 {
                // -0.0 == 0.0, so they must hash alike.
                <u64 as From<_>>::from(crate::util::gg_float::force_positive_zero(self).to_bits())
            }

            fn sample_full<R: Rng + ?Sized>(rng: &mut R) -> Self {
                let half = <$t>::MAX / 2.0;
                rng.gen_range(-half..half) * 2.0
            }
        }
    )+};
}

impl_scalar_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_scalar_float!(f32, f64);

impl Real for f32 {
    const TOLERANCE: Self = EPSILON_F32;
}
impl Real for f64 {
    const TOLERANCE: Self = EPSILON;
}

macro_rules! impl_promote {
    ($out:ty; $lhs:ty => $($rhs:ty),+) => {$(
        impl Promote<$rhs> for $lhs {
            type Output = $out;

            #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
            fn promote(self) -> $out {
                self as $out
            }

            #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
            fn promote_rhs(rhs: $rhs) -> $out {
                rhs as $out
            }
        }
    )+};
    ($out:ty; $($lhs:ty),+ => all) => {$(
        impl_promote!($out; $lhs => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
    )+};
}

impl_promote!(f64; i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f64 => all);
impl_promote!(f64; f32 => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f64);
impl_promote!(f32; f32 => f32);
