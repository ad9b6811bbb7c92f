//! Geometric primitives built from the vector types.
//!
//! Every shape is a small `Copy` value (except [`Polygon`](polygon::Polygon), which owns its
//! vertices) whose derived quantities are computed on demand in the promoted scalar type.

pub mod circle;
pub mod line;
pub mod plane;
pub mod polygon;
pub mod rect;
pub mod sphere;
pub mod triangle;
