use crate::core::prelude::*;
use crate::linalg::vector::write_tuple;
use num_traits::{FloatConst, One};
use std::fmt;

/// A sphere in space. Unlike [`Circle2`], a negative radius is not given any meaning.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sphere<T> {
    pub center: Vec3<T>,
    pub radius: T,
}

pub type Sphere3i = Sphere<i32>;
pub type Sphere3f = Sphere<f32>;
pub type Sphere3d = Sphere<f64>;

impl<T: Scalar> Sphere<T> {
    pub const fn new(center: Vec3<T>, radius: T) -> Self {
        Self { center, radius }
    }
    #[must_use]
    pub fn from_coords(x: T, y: T, z: T, radius: T) -> Self {
        Self::new(Vec3::new(x, y, z), radius)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.radius.is_zero()
    }
}

impl<T: Promote> Sphere<T> {
    #[must_use]
    pub fn diameter(&self) -> Promoted<T> {
        let r = self.radius.promote();
        r + r
    }
    /// `4πr²`.
    #[must_use]
    pub fn surface_area(&self) -> Promoted<T> {
        let r = self.radius.promote();
        let two = <Promoted<T> as One>::one() + <Promoted<T> as One>::one();
        (two + two) * <Promoted<T> as FloatConst>::PI() * r * r
    }
    /// `4/3 πr³`.
    #[must_use]
    pub fn volume(&self) -> Promoted<T> {
        let one = <Promoted<T> as One>::one();
        self.surface_area() * self.radius.promote() / (one + one + one)
    }

    /// Whether `point` lies inside the sphere or on its surface.
    #[must_use]
    pub fn contains(&self, point: Vec3<T>) -> bool {
        let r = self.radius.promote();
        self.center.distance_squared(point) <= r * r
    }
}

impl<T: Scalar> std::hash::Hash for Sphere<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.center, state);
        std::hash::Hash::hash(&self.radius.hash_bits(), state);
    }
}

impl<T: Scalar> fmt::Display for Sphere<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, &[&self.center, &self.radius])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::gg_float::approx_eq;
    use std::f64::consts::PI;

    #[test]
    fn metrics() {
        let s = Sphere3i::from_coords(0, 0, 0, 3);
        assert_eq!(s.diameter(), 6.0);
        assert!(approx_eq(s.surface_area(), 36.0 * PI, EPSILON));
        assert!(approx_eq(s.volume(), 36.0 * PI, EPSILON));
        assert!(!s.is_empty());
        assert!(Sphere3d::default().is_empty());

        let unit = Sphere3f::new(Vec3::zero(), 1.0);
        assert!(approx_eq(unit.volume(), 4.0 / 3.0 * std::f32::consts::PI, EPSILON_F32));
    }

    #[test]
    fn contains_is_boundary_inclusive() {
        let s = Sphere::from_coords(1, 1, 1, 7);
        assert!(s.contains(Vec3::new(3, 4, 7)));
        assert!(s.contains(Vec3::new(1, 1, 1)));
        assert!(!s.contains(Vec3::new(3, 4, 8)));
    }

    #[test]
    fn display() {
        assert_eq!(Sphere::from_coords(1, 2, 3, 4).to_string(), "( ( 1, 2, 3 ), 4 )");
    }
}
