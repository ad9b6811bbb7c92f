use crate::core::error::GeometryError;
use std::fmt;

/// Names a component of a vector or size; `Axis::X as usize` is its index.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
    W = 3,
}

impl Axis {
    pub const ALL: [Axis; 4] = [Axis::X, Axis::Y, Axis::Z, Axis::W];

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for Axis {
    type Error = GeometryError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(GeometryError::IndexOutOfRange { index, len: Self::ALL.len() })
    }
}

impl From<Axis> for usize {
    fn from(axis: Axis) -> Self {
        axis.index()
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
            Axis::W => write!(f, "w"),
        }
    }
}

/// Where a point lies relative to an oriented 2D line.
///
/// `Left` is counter-clockwise from the line's direction when y points up.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Side {
    Coincident,
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Coincident => write!(f, "coincident"),
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}
