use crate::core::prelude::*;
use crate::linalg::vector::impl_vector;
use num_traits::Zero;

/// A 3D vector with components of any [`Scalar`] type.
///
/// See [`Vec2`] for the promotion and ordering rules, which are the same in every dimension.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Vec3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

pub type Vec3i = Vec3<i32>;
pub type Vec3f = Vec3<f32>;
pub type Vec3d = Vec3<f64>;

impl_vector!(Vec3, 3, x, y, z);

impl<T: Scalar> Vec3<T> {
    #[must_use]
    pub fn from_vec2(v: Vec2<T>, z: T) -> Self {
        Self::new(v.x, v.y, z)
    }
    /// Drops `z`.
    #[must_use]
    pub fn to_vec2(self) -> Vec2<T> {
        Vec2::new(self.x, self.y)
    }
    /// Widens to 4D with `w = 0`.
    #[must_use]
    pub fn to_vec4(self) -> Vec4<T> {
        Vec4::new(self.x, self.y, self.z, T::zero())
    }
}

impl<T: Promote> Vec3<T> {
    /// The cross product, following the right-hand rule.
    ///
    /// # Examples
    /// ```
    /// use geomkit::core::prelude::*;
    /// let z = Vec3::new(1, 0, 0).cross(Vec3::new(0, 1, 0));
    /// assert_eq!(z, Vec3::new(0.0, 0.0, 1.0));
    /// ```
    #[must_use]
    pub fn cross(self, other: Self) -> Vec3<Promoted<T>> {
        let (a, b) = (self.promote(), other.promote());
        Vec3::new(
            a.y * b.z - a.z * b.y,
            a.z * b.x - a.x * b.z,
            a.x * b.y - a.y * b.x,
        )
    }

    /// The angle of the projection onto the xy-plane, from +x towards +y.
    #[must_use]
    pub fn heading_xy(self) -> Promoted<T> {
        self.y.promote().atan2(self.x.promote())
    }
    /// The angle of the projection onto the yz-plane, from +y towards +z.
    #[must_use]
    pub fn heading_yz(self) -> Promoted<T> {
        self.z.promote().atan2(self.y.promote())
    }
    /// The angle of the projection onto the zx-plane, from +z towards +x.
    #[must_use]
    pub fn heading_zx(self) -> Promoted<T> {
        self.x.promote().atan2(self.z.promote())
    }

    /// Interprets `(x, y, z)` as spherical `(radius, theta, phi)`, where `theta` is the polar
    /// angle from +z and `phi` the azimuth in the xy-plane, and converts to Cartesian
    /// coordinates.
    #[must_use]
    pub fn cartesian(self) -> Vec3<Promoted<T>> {
        let Vec3 { x: r, y: theta, z: phi } = self.promote();
        Vec3::new(
            r * theta.sin() * phi.cos(),
            r * theta.sin() * phi.sin(),
            r * theta.cos(),
        )
    }
    /// Converts Cartesian coordinates to spherical `(radius, theta, phi)`; the inverse of
    /// [`cartesian`](Vec3::cartesian). The origin maps to all zeros.
    #[must_use]
    pub fn spherical(self) -> Vec3<Promoted<T>> {
        let r = self.magnitude();
        if r.is_zero() {
            return Vec3::zero();
        }
        let v = self.promote();
        Vec3::new(r, (v.z / r).acos(), v.y.atan2(v.x))
    }
}

impl<T: Real> Vec3<T> {
    /// A unit vector in the xy-plane; the inverse of [`heading_xy`](Vec3::heading_xy).
    #[must_use]
    pub fn from_heading_xy(angle: T) -> Self {
        Self::new(angle.cos(), angle.sin(), T::zero())
    }
    /// A unit vector in the yz-plane; the inverse of [`heading_yz`](Vec3::heading_yz).
    #[must_use]
    pub fn from_heading_yz(angle: T) -> Self {
        Self::new(T::zero(), angle.cos(), angle.sin())
    }
    /// A unit vector in the zx-plane; the inverse of [`heading_zx`](Vec3::heading_zx).
    #[must_use]
    pub fn from_heading_zx(angle: T) -> Self {
        Self::new(angle.sin(), T::zero(), angle.cos())
    }
}

impl<T: Scalar> From<(T, T, T)> for Vec3<T> {
    fn from(value: (T, T, T)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}
