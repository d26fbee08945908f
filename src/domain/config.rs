// ============================================================================
// Vector Configuration
// Construction parameters for numeric vectors
// ============================================================================

use crate::numeric::{Element, VectorError, VectorResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters for building a [`NumericVector`](crate::numeric::NumericVector).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VectorConfig<T: Element = i16> {
    /// Number of elements (must be at least 1)
    pub length: usize,

    /// Value every element starts with
    #[cfg_attr(feature = "serde", serde(default))]
    pub fill: T,
}

impl<T: Element> VectorConfig<T> {
    /// Create a zero-filled configuration of the given length
    pub fn new(length: usize) -> Self {
        Self {
            length,
            fill: T::zero(),
        }
    }

    /// Single zero element, the shape of a default-constructed vector
    pub fn single() -> Self {
        Self::new(1)
    }

    /// Builder method: Set the fill value
    pub fn with_fill(mut self, fill: T) -> Self {
        self.fill = fill;
        self
    }

    /// Builder method: Set the length
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> VectorResult<()> {
        if self.length == 0 {
            return Err(VectorError::ZeroLength);
        }
        Ok(())
    }
}

impl<T: Element> Default for VectorConfig<T> {
    fn default() -> Self {
        Self::single()
    }
}
