use std::{error::Error, fmt};

/// Operation that failed because a vector had zero length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZeroVectorContext {
    /// [Vector2D::normalized](crate::Vector2D::normalized).
    Normalize,
    /// [Vector2D::angle_between](crate::Vector2D::angle_between) or
    /// [Vector2D::angle](crate::Vector2D::angle).
    Angle,
}

/// Errors returned by [Vector2D](crate::Vector2D) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    /// Right hand operand of [Vector2D::try_mul](crate::Vector2D::try_mul) is neither a number
    /// nor a vector.
    UnsupportedOperandType { type_name: &'static str },
    /// Vector (or one of the vectors) has exactly zero length.
    ZeroVector(ZeroVectorContext),
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::UnsupportedOperandType { type_name } => {
                write!(f, "multiplication with type {} is not supported", type_name)
            }
            VectorError::ZeroVector(ZeroVectorContext::Normalize) => {
                write!(f, "cannot normalize a zero vector")
            }
            VectorError::ZeroVector(ZeroVectorContext::Angle) => {
                write!(f, "cannot calculate angle with zero vector")
            }
        }
    }
}

impl Error for VectorError {}
