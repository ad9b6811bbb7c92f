#[allow(unused_imports)]
pub use itertools::Itertools;
#[allow(unused_imports)]
pub use num_traits;
#[allow(unused_imports)]
pub use num_traits::Float;

#[allow(unused_imports)]
pub use anyhow::{anyhow, bail, Context, Result};
#[allow(unused_imports)]
pub use tracing::{debug, info, warn};

#[allow(unused_imports)]
pub use crate::{
    core::{config::*, error::GeometryError},
    linalg,
    linalg::{
        axis::{Axis, Side},
        functions::{clamp, lerp, map, norm},
        matrix::{Mat2, Mat2d, Mat2f, Mat3, Mat3d, Mat3f},
        promote::{Promote, Promoted, Real, Scalar},
        random::Random,
        roots::{solve_linear, solve_quadratic},
        size::{Size2, Size2d, Size2f, Size2i, Size3, Size3d, Size3f, Size3i},
        vec2::{Vec2, Vec2d, Vec2f, Vec2i},
        vec3::{Vec3, Vec3d, Vec3f, Vec3i},
        vec4::{Vec4, Vec4d, Vec4f, Vec4i},
        vector::Vector,
    },
    shape::{
        circle::{Circle2, Circle2d, Circle2f, Circle2i},
        line::{Line2, Line2d, Line2f, Line2i, Line3, Line3d, Line3f, Line3i},
        plane::{Plane, Plane3d, Plane3f},
        polygon::{Polygon, Polygon2d, Polygon2f, Polygon2i},
        rect::{Rect, Rect2d, Rect2f, Rect2i},
        sphere::{Sphere, Sphere3d, Sphere3f, Sphere3i},
        triangle::{Triangle2, Triangle2d, Triangle2f, Triangle2i, Triangle3, Triangle3d, Triangle3f, Triangle3i},
    },
};
