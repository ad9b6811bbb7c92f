use std::fmt;

/// Typed failures for degenerate geometric input.
///
/// Fallible constructors return [`anyhow::Result`]; the underlying error is always one of these
/// variants, so callers that need to branch on the cause can use
/// [`downcast_ref()`](anyhow::Error::downcast_ref).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// A plane normal (or the cross product used to derive one) was the zero vector.
    ZeroNormal,
    /// Three points that should span a circle or plane lie on one line.
    Collinear,
    /// An element index past the end of a fixed-size value.
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroNormal => write!(f, "normal must not be the zero vector"),
            Self::Collinear => write!(f, "points are collinear"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
        }
    }
}

impl std::error::Error for GeometryError {}
