// ============================================================================
// Vector Errors
// Error types for fixed-length vector operations
// ============================================================================

use std::fmt;

/// Errors that can occur while constructing or operating on a vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VectorError {
    /// Element-wise operation between vectors of different lengths
    SizeMismatch { expected: usize, found: usize },
    /// Attempted division by a zero scalar
    DivisionByZero,
    /// Index is not less than the vector length
    IndexOutOfRange { index: usize, len: usize },
    /// Requested a vector with no elements
    ZeroLength,
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::SizeMismatch { expected, found } => {
                write!(
                    f,
                    "size mismatch: expected {} elements, found {}",
                    expected, found
                )
            },
            VectorError::DivisionByZero => write!(f, "division by zero"),
            VectorError::IndexOutOfRange { index, len } => {
                write!(
                    f,
                    "index out of range: index {} but length is {}",
                    index, len
                )
            },
            VectorError::ZeroLength => write!(f, "vector length must be at least 1"),
        }
    }
}

impl std::error::Error for VectorError {}

/// Result type alias for vector operations
pub type VectorResult<T> = Result<T, VectorError>;
