use crate::core::prelude::*;
use crate::linalg::vector::impl_vector;
use crate::util::gg_float;

/// A 2D vector with components of any [`Scalar`] type.
///
/// Arithmetic between vectors, or between a vector and a primitive number, produces a vector
/// of the [promoted](crate::linalg::promote) type, so integer vectors never truncate:
///
/// ```
/// use geomkit::core::prelude::*;
/// let a = Vec2::new(1, 3);
/// let b: Vec2<f64> = a / 2;
/// assert_eq!(b, Vec2::new(0.5, 1.5));
/// // Compound assignment keeps the component type.
/// let mut c = a;
/// c += Vec2::new(1, 1);
/// assert_eq!(c, Vec2::new(2, 4));
/// ```
///
/// # Equality and ordering
/// Equality is exact and component-wise; use [`Vector::equals`] or [`Vector::almost_eq`] for
/// tolerant comparison. Ordering is lexicographic (`x`, then `y`) and has no geometric meaning;
/// see [`Vector::cmp_by_length`] for ordering by magnitude.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

pub type Vec2i = Vec2<i32>;
pub type Vec2f = Vec2<f32>;
pub type Vec2d = Vec2<f64>;

impl_vector!(Vec2, 2, x, y);

impl<T: Scalar> Vec2<T> {
    /// Widens to 3D with `z = 0`.
    #[must_use]
    pub fn to_vec3(self) -> Vec3<T> {
        Vec3::new(self.x, self.y, T::zero())
    }
    /// Widens to 4D with `z = w = 0`.
    #[must_use]
    pub fn to_vec4(self) -> Vec4<T> {
        Vec4::new(self.x, self.y, T::zero(), T::zero())
    }
}

impl<T: Promote> Vec2<T> {
    /// The z-component of the 3D cross product, i.e. the signed area of the parallelogram
    /// spanned by the two vectors. Positive when `other` is counter-clockwise from `self`.
    ///
    /// # Examples
    /// ```
    /// use geomkit::core::prelude::*;
    /// assert_eq!(Vec2::new(1, 0).cross(Vec2::new(0, 1)), 1.0);
    /// assert_eq!(Vec2::new(0, 1).cross(Vec2::new(1, 0)), -1.0);
    /// ```
    #[must_use]
    pub fn cross(self, other: Self) -> Promoted<T> {
        self.x.promote() * other.y.promote() - self.y.promote() * other.x.promote()
    }

    /// The angle of the vector from the positive x-axis, in `(-π, π]`.
    #[must_use]
    pub fn heading(self) -> Promoted<T> {
        self.y.promote().atan2(self.x.promote())
    }

    /// The signed angle from `self` to `other`, counter-clockwise positive, in `(-π, π]`.
    ///
    /// Unlike [`Vector::angle`], this keeps the orientation.
    #[must_use]
    pub fn signed_angle(self, other: Self) -> Promoted<T> {
        self.cross(other).atan2(self.dot(other))
    }

    /// The vector rotated a quarter turn counter-clockwise.
    #[must_use]
    pub fn perpendicular(self) -> Vec2<Promoted<T>> {
        Vec2::new(-self.y.promote(), self.x.promote())
    }

    /// Interprets `(x, y)` as polar `(radius, angle)` and converts to Cartesian coordinates.
    #[must_use]
    pub fn cartesian(self) -> Vec2<Promoted<T>> {
        let (r, theta) = (self.x.promote(), self.y.promote());
        Vec2::new(r * theta.cos(), r * theta.sin())
    }
    /// Converts Cartesian coordinates to polar `(radius, angle)`.
    #[must_use]
    pub fn polar(self) -> Vec2<Promoted<T>> {
        Vec2::new(self.magnitude(), self.heading())
    }
}

impl<T: Real> Vec2<T> {
    /// A unit vector at `angle` radians counter-clockwise from the positive x-axis.
    #[must_use]
    pub fn from_heading(angle: T) -> Self {
        Self::new(
            gg_float::force_positive_zero(angle.cos()),
            gg_float::force_positive_zero(angle.sin()),
        )
    }
}

impl<T: Scalar> From<(T, T)> for Vec2<T> {
    fn from(value: (T, T)) -> Self {
        Self::new(value.0, value.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::gg_float::approx_eq;
    use proptest::prelude::*;
    use std::any::TypeId;
    use std::collections::HashSet;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, SQRT_2};

    fn type_of<T: 'static>(_: &T) -> TypeId {
        TypeId::of::<T>()
    }

    // ==================== Arithmetic ====================

    #[test]
    fn addition_promotes() {
        let a = Vec2::new(1, 2);
        let b = Vec2::new(3.5_f32, 4.0);
        let c = a + b;
        assert_eq!(type_of(&c), TypeId::of::<Vec2<f64>>());
        assert_eq!(c, Vec2::new(4.5, 6.0));

        let f = Vec2::new(1.0_f32, 2.0) + Vec2::new(1.0_f32, 1.0);
        assert_eq!(type_of(&f), TypeId::of::<Vec2<f32>>());
    }

    #[test]
    fn subtraction_and_negation() {
        let a = Vec2::new(5, 6);
        assert_eq!(a - Vec2::new(3, 4), Vec2::new(2.0, 2.0));
        assert_eq!(-a, Vec2::new(-5.0, -6.0));
        assert_eq!(-Vec2::new(1_u8, 2), Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn scalar_broadcast() {
        let a = Vec2::new(2.0, 3.0);
        assert_eq!(a * 2.0, Vec2::new(4.0, 6.0));
        assert_eq!(2.0 * a, Vec2::new(4.0, 6.0));
        assert_eq!(a + 1, Vec2::new(3.0, 4.0));
        assert_eq!(10 - a, Vec2::new(8.0, 7.0));
        assert_eq!(Vec2::new(1, 3) / 2, Vec2::new(0.5, 1.5));
        assert_eq!(6.0 / a, Vec2::new(3.0, 2.0));
    }

    #[test]
    fn component_wise_product() {
        assert_eq!(Vec2::new(2, 3) * Vec2::new(4, 5), Vec2::new(8.0, 15.0));
        assert_eq!(Vec2::new(8.0, 9.0) / Vec2::new(2, 3), Vec2::new(4.0, 3.0));
    }

    #[test]
    fn compound_assignment_keeps_type() {
        let mut a = Vec2::new(2, 3);
        a += Vec2::new(1, 1);
        a -= 1;
        a *= 3;
        a *= Vec2::new(1, 2);
        assert_eq!(a, Vec2::new(6, 18));
        a /= 4;
        assert_eq!(a, Vec2::new(1, 4));
    }

    #[test]
    fn division_by_zero() {
        let v: Vec2<f64> = Vec2::new(1.0_f64, -1.0) / 0.0;
        assert!(v.x.is_infinite() && v.x > 0.0);
        assert!(v.y.is_infinite() && v.y < 0.0);
        assert_eq!(Vec2::new(1, 1).checked_div(Vec2::new(1, 0)), None);
        assert_eq!(Vec2::new(1, 1).checked_div_scalar(0), None);
        assert_eq!(
            Vec2::new(3, 1).checked_div(Vec2::new(2, 4)),
            Some(Vec2::new(1.5, 0.25))
        );
    }

    #[test]
    fn sum() {
        let total: Vec2i = vec![Vec2::new(1, 2), Vec2::new(3, -4), Vec2::new(5, 6)]
            .into_iter()
            .sum();
        assert_eq!(total, Vec2::new(9, 4));
    }

    // ==================== Construction and access ====================

    #[test]
    fn construction() {
        assert_eq!(Vec2d::default(), Vec2::new(0.0, 0.0));
        assert_eq!(Vec2::splat(3), Vec2::new(3, 3));
        assert_eq!(Vec2::from([1, 2]), Vec2::new(1, 2));
        assert_eq!(Vec2::from((1, 2)), Vec2::new(1, 2));
        assert_eq!(Vec2::from_slice(&[7]), Vec2::new(7, 0));
        assert_eq!(Vec2::from_slice(&[7, 8, 9]), Vec2::new(7, 8));
        assert_eq!(Vec2i::max_value(), Vec2::new(i32::MAX, i32::MAX));
        let arr: [i32; 2] = Vec2::new(4, 5).into();
        assert_eq!(arr, [4, 5]);
    }

    #[test]
    fn element_access() {
        let mut v = Vec2::new(1, 2);
        assert_eq!(v[0], 1);
        assert_eq!(v[Axis::Y], 2);
        assert_eq!(v.at(1), 2);
        assert_eq!(v.front(), 1);
        assert_eq!(v.back(), 2);
        v[Axis::X] = 10;
        v[1] = 20;
        assert_eq!(v, Vec2::new(10, 20));
        assert_eq!(v.iter().collect_vec(), vec![10, 20]);
        assert!(v.try_at(2).is_err());
    }

    #[test]
    #[should_panic(expected = "index 2 out of range")]
    fn index_out_of_range_panics() {
        let _ = Vec2::new(1, 2)[2];
    }

    #[test]
    fn try_at_reports_typed_error() {
        let err = Vec2::new(1, 2).try_at(5).unwrap_err();
        assert_eq!(
            err.downcast_ref::<GeometryError>(),
            Some(&GeometryError::IndexOutOfRange { index: 5, len: 2 })
        );
    }

    #[test]
    fn widening_and_narrowing() {
        let v = Vec2::new(3, 4);
        assert_eq!(v.to_vec3(), Vec3::new(3, 4, 0));
        assert_eq!(v.to_vec4(), Vec4::new(3, 4, 0, 0));
        assert_eq!(Vec3::new(1, 2, 3).to_vec2(), Vec2::new(1, 2));
    }

    #[test]
    fn cast() {
        assert_eq!(Vec2::new(1.9, -2.9).cast::<i32>(), Some(Vec2::new(1, -2)));
        assert_eq!(Vec2::new(-1, 2).cast::<u8>(), None);
        assert_eq!(Vec2::new(300, 2).cast::<u8>(), None);
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(Vec2::new(1, 100) < Vec2::new(2, 0));
        assert!(Vec2::new(1, 1) < Vec2::new(1, 2));
        let mut v = vec![Vec2::new(2, 0), Vec2::new(1, 5), Vec2::new(1, 2)];
        v.sort();
        assert_eq!(v, vec![Vec2::new(1, 2), Vec2::new(1, 5), Vec2::new(2, 0)]);
    }

    #[test]
    fn hash_matches_equality() {
        fn hash_of<H: Hash>(value: &H) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }
        assert_eq!(hash_of(&Vec2::new(0.0, 1.0)), hash_of(&Vec2::new(-0.0, 1.0)));
        assert_ne!(hash_of(&Vec2::new(0.0, 1.0)), hash_of(&Vec2::new(1.0, 0.0)));

        let set: HashSet<Vec2i> = [Vec2::new(0, 1), Vec2::new(0, 1), Vec2::new(1, 0)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn display() {
        assert_eq!(Vec2::new(1, 2).to_string(), "( 1, 2 )");
        assert_eq!(format!("{:.2}", Vec2::new(1.23456, 7.89012)), "( 1.23, 7.89 )");
    }

    // ==================== Geometry ====================

    #[test]
    fn magnitude_and_distance() {
        let v = Vec2::new(3, 4);
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(v.magnitude_squared(), 25.0);
        assert_eq!(Vec2::new(1, 1).distance(Vec2::new(4, 5)), 5.0);
        assert_eq!(Vec2::new(1, 1).distance_squared(Vec2::new(4, 5)), 25.0);
        assert_eq!(Vec2::new(1, 2).dot(Vec2::new(3, 4)), 11.0);
    }

    #[test]
    fn normalize() {
        let v = Vec2::new(3_i32, 4).normalized();
        assert!(v.almost_eq(Vec2::new(0.6, 0.8)));
        assert!(approx_eq(v.magnitude(), 1.0, EPSILON));

        let mut w = Vec2::new(0.0, -2.0);
        w.normalize();
        assert_eq!(w, Vec2::new(0.0, -1.0));
        assert!(w.x.is_sign_positive());
    }

    #[test]
    fn normalize_zero_is_unchanged() {
        assert_eq!(Vec2d::zero().normalized(), Vec2d::zero());
        let mut z = Vec2f::zero();
        z.normalize();
        assert_eq!(z, Vec2f::zero());
    }

    #[test]
    fn limit() {
        let v = Vec2::new(6, 8).limited(5.0);
        assert!(v.almost_eq(Vec2::new(3.0, 4.0)));
        assert_eq!(Vec2::new(1, 1).limited(5.0), Vec2::new(1.0, 1.0));
        let mut w = Vec2::new(0.0, 10.0);
        w.limit(2.0);
        assert_eq!(w, Vec2::new(0.0, 2.0));
    }

    #[test]
    fn invert() {
        let mut v = Vec2::new(1, -2);
        v.invert();
        assert_eq!(v, Vec2::new(-1, 2));
        assert_eq!(Vec2::new(1_u32, 2).inverted(), Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn lerp() {
        let a = Vec2::new(0, 0);
        let b = Vec2::new(10, 20);
        assert_eq!(a.lerp(b, 0.5), Vec2::new(5.0, 10.0));
        assert_eq!(a.lerp(b, 2.0), Vec2::new(20.0, 40.0));
    }

    #[test]
    fn cross_and_angles() {
        let x = Vec2d::new(1.0, 0.0);
        let y = Vec2d::new(0.0, 1.0);
        assert_eq!(x.cross(y), 1.0);
        assert!(approx_eq(x.angle(y), FRAC_PI_2, EPSILON));
        assert!(approx_eq(y.angle(x), FRAC_PI_2, EPSILON));
        assert!(approx_eq(x.signed_angle(y), FRAC_PI_2, EPSILON));
        assert!(approx_eq(y.signed_angle(x), -FRAC_PI_2, EPSILON));
        assert!(approx_eq(x.angle(-x), PI, EPSILON));
        assert!(approx_eq(x.angle(Vec2d::zero()), FRAC_PI_2, EPSILON));
        assert!(approx_eq(Vec2::new(1, 1).heading(), FRAC_PI_4, EPSILON));
        assert_eq!(x.perpendicular(), y);
    }

    #[test]
    fn polar_round_trip() {
        let v = Vec2d::new(1.0, 1.0);
        let polar = v.polar();
        assert!(approx_eq(polar.x, SQRT_2, EPSILON));
        assert!(approx_eq(polar.y, FRAC_PI_4, EPSILON));
        assert!(polar.cartesian().almost_eq(v));
        assert!(Vec2d::from_heading(FRAC_PI_2).almost_eq(Vec2::new(0.0, 1.0)));
    }

    #[test]
    fn cmp_by_length() {
        let mut v = vec![Vec2::new(3.0, 4.0), Vec2::new(f64::NAN, 0.0), Vec2::new(1.0, 0.0)];
        v.sort_by(Vector::cmp_by_length);
        assert_eq!(v[0], Vec2::new(1.0, 0.0));
        assert_eq!(v[1], Vec2::new(3.0, 4.0));
        assert!(v[2].x.is_nan());
    }

    // ==================== Randomness ====================

    #[test]
    fn random_is_reproducible() {
        let a = Vec2::<f32>::random_between_with(-1.0, 1.0, &mut Random::with_seed(3));
        let b = Vec2::<f32>::random_between_with(-1.0, 1.0, &mut Random::with_seed(3));
        assert_eq!(a, b);
        assert!(a.iter().all(|c| (-1.0..1.0).contains(&c)));
        let c = Vec2::random_up_to(10_u16);
        assert!(c.x < 10 && c.y < 10);
        let _ = Vec2i::random();
    }

    #[test]
    fn jitter() {
        let mut rng = Random::with_seed(21);
        let origin = Vec2::new(10.0, 10.0);
        for _ in 0..100 {
            let j = origin.jittered_with(Vec2::new(1.0, 0.0), &mut rng);
            assert!((9.0..11.0).contains(&j.x));
            assert_eq!(j.y, 10.0);
        }
        let mut v = origin;
        v.jitter(Vec2d::zero());
        assert_eq!(v, origin);
        assert_eq!(Vec2::new(1, 2).jittered(Vec2::zero()), Vec2::new(1.0, 2.0));
    }

    // ==================== Properties ====================

    proptest! {
        #[test]
        fn integral_addition_is_associative(
            a in any::<(i16, i16)>(), b in any::<(i16, i16)>(), c in any::<(i16, i16)>()
        ) {
            let (a, b, c) = (Vec2::from(a), Vec2::from(b), Vec2::from(c));
            prop_assert_eq!((a + b) + c, a + (b + c));
            prop_assert_eq!(a - a, Vec2d::zero());
        }

        #[test]
        fn additive_inverse(x in -1e6_f64..1e6, y in -1e6_f64..1e6) {
            let a = Vec2::new(x, y);
            prop_assert!((a + -a).almost_eq(Vec2d::zero()));
        }

        #[test]
        fn normalize_is_idempotent(x in -1e3_f64..1e3, y in -1e3_f64..1e3) {
            let v = Vec2::new(x, y);
            prop_assume!(v.magnitude() > 1e-6);
            let n = v.normalized();
            prop_assert!(approx_eq(n.magnitude(), 1.0, 1e-9));
            prop_assert!(n.normalized().equals(n, 1e-12));
        }

        #[test]
        fn widening_round_trip(x in any::<i32>(), y in any::<i32>()) {
            let v = Vec2::new(x, y);
            let w = v.to_vec3();
            prop_assert_eq!((w.x, w.y, w.z), (x, y, 0));
            prop_assert_eq!(w.to_vec2(), v);
        }
    }
}
