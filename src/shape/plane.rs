//! Planes in Hessian normal form.

use crate::core::prelude::*;
use crate::linalg::vector::write_tuple;
use std::fmt;

/// A plane in Hessian normal form: every point `p` on the plane satisfies
/// `normal · p == distance`, where `normal` has unit length.
///
/// The normal is kept private so that it can never be zero; every constructor and
/// [`set_normal()`](Plane::set_normal) normalizes its input and fails with
/// [`GeometryError::ZeroNormal`] if it cannot.
///
/// # Examples
/// ```
/// use geomkit::core::prelude::*;
/// let plane = Plane::from_point_normal(Vec3::new(0.0, 0.0, 2.0), Vec3::new(0.0, 0.0, 5.0))?;
/// assert_eq!(plane.normal(), Vec3::new(0.0, 0.0, 1.0));
/// assert_eq!(plane.distance(), 2.0);
/// assert_eq!(plane.signed_distance(Vec3::new(3.0, 1.0, -1.0)), -3.0);
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Plane<T> {
    normal: Vec3<T>,
    distance: T,
}

pub type Plane3f = Plane<f32>;
pub type Plane3d = Plane<f64>;

impl<T: Real> Plane<T> {
    /// The plane `ax + by + cz + d = 0`.
    pub fn from_coefficients(a: T, b: T, c: T, d: T) -> Result<Self> {
        let n = Vec3::new(a, b, c);
        let magnitude = n.magnitude();
        Self::from_normal_distance(n, -d / magnitude)
    }
    /// `distance` is taken along the normalized `normal`.
    pub fn from_normal_distance(normal: Vec3<T>, distance: T) -> Result<Self> {
        let mut rv = Self {
            normal: Vec3::new(T::zero(), T::zero(), T::one()),
            distance,
        };
        rv.set_normal(normal)?;
        Ok(rv)
    }
    /// The plane through `point` perpendicular to `normal`.
    pub fn from_point_normal(point: Vec3<T>, normal: Vec3<T>) -> Result<Self> {
        let mut rv = Self::from_normal_distance(normal, T::zero())?;
        rv.distance = rv.normal.dot(point);
        Ok(rv)
    }
    /// The plane through three points, with the normal following the right-hand rule over
    /// `p1, p2, p3`. Collinear points span no plane and fail with
    /// [`GeometryError::ZeroNormal`].
    pub fn from_points(p1: Vec3<T>, p2: Vec3<T>, p3: Vec3<T>) -> Result<Self> {
        let normal = (p2 - p1).cross(p3 - p1);
        Self::from_point_normal(p1, normal)
            .with_context(|| format!("Plane::from_points(): {p1}, {p2}, {p3}"))
    }

    #[must_use]
    pub fn normal(&self) -> Vec3<T> {
        self.normal
    }
    /// Replaces the normal with `value` normalized. The distance is unchanged.
    pub fn set_normal(&mut self, value: Vec3<T>) -> Result<()> {
        let magnitude = value.magnitude();
        if magnitude.is_zero() || !magnitude.is_finite() {
            bail!(GeometryError::ZeroNormal);
        }
        self.normal = value.normalized();
        Ok(())
    }
    #[must_use]
    pub fn distance(&self) -> T {
        self.distance
    }
    pub fn set_distance(&mut self, value: T) {
        self.distance = value;
    }

    /// The point on the plane closest to the origin.
    #[must_use]
    pub fn point(&self) -> Vec3<T> {
        let mut rv = self.normal;
        rv *= self.distance;
        rv
    }
    /// Coefficients `[a, b, c, d]` of `ax + by + cz + d = 0`.
    #[must_use]
    pub fn equation(&self) -> [T; 4] {
        [self.normal.x, self.normal.y, self.normal.z, -self.distance]
    }

    /// Positive on the side the normal points to.
    #[must_use]
    pub fn signed_distance(&self, point: Vec3<T>) -> T {
        self.normal.dot(point) - self.distance
    }
    #[must_use]
    pub fn contains(&self, point: Vec3<T>) -> bool {
        self.signed_distance(point).abs() <= T::TOLERANCE
    }
    /// The orthogonal projection of `point` onto the plane.
    #[must_use]
    pub fn project(&self, point: Vec3<T>) -> Vec3<T> {
        let mut offset = self.normal;
        offset *= self.signed_distance(point);
        let mut rv = point;
        rv -= offset;
        rv
    }
}

/// The xy-plane.
impl<T: Real> Default for Plane<T> {
    fn default() -> Self {
        Self {
            normal: Vec3::new(T::zero(), T::zero(), T::one()),
            distance: T::zero(),
        }
    }
}

impl<T: Real> std::hash::Hash for Plane<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.normal, state);
        std::hash::Hash::hash(&self.distance.hash_bits(), state);
    }
}

impl<T: Real> fmt::Display for Plane<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, &[&self.normal, &self.distance])
    }
}
