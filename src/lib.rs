//! Small, copyable geometry and linear-algebra value types.
//!
//! Vectors, sizes and matrices live in [`linalg`]; lines, triangles, rects, circles, spheres,
//! planes and polygons live in [`shape`]. Everything is re-exported from
//! [`core::prelude`].

mod assert;
pub mod core;
pub mod linalg;
pub mod shape;
pub mod util;
