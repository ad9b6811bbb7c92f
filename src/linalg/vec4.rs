use crate::core::prelude::*;
use crate::linalg::vector::impl_vector;

/// A 4D vector with components of any [`Scalar`] type.
///
/// Often used for homogeneous coordinates; see [`Vec2`] for the promotion and ordering rules.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Vec4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

pub type Vec4i = Vec4<i32>;
pub type Vec4f = Vec4<f32>;
pub type Vec4d = Vec4<f64>;

impl_vector!(Vec4, 4, x, y, z, w);

impl<T: Scalar> Vec4<T> {
    #[must_use]
    pub fn from_vec3(v: Vec3<T>, w: T) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }
    /// Drops `z` and `w`.
    #[must_use]
    pub fn to_vec2(self) -> Vec2<T> {
        Vec2::new(self.x, self.y)
    }
    /// Drops `w`.
    #[must_use]
    pub fn to_vec3(self) -> Vec3<T> {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl<T: Promote> Vec4<T> {
    /// The 3D cross product of the `xyz` parts; `w` is ignored and the result has `w = 0`.
    #[must_use]
    pub fn cross(self, other: Self) -> Vec4<Promoted<T>> {
        let c = self.to_vec3().cross(other.to_vec3());
        Vec4::from_vec3(c, num_traits::Zero::zero())
    }
}

impl<T: Scalar> From<(T, T, T, T)> for Vec4<T> {
    fn from(value: (T, T, T, T)) -> Self {
        Self::new(value.0, value.1, value.2, value.3)
    }
}
