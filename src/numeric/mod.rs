// ============================================================================
// Numeric Module
// Fixed-length integer vectors with value semantics
// ============================================================================
//
// This module provides:
// - NumericVector<T>: heap-backed vector with a length fixed at construction
// - Element: the fixed-width signed integer types a vector can hold
// - VectorError: Error types for vector operations
//
// Design principles:
// - Arithmetic wraps on overflow, like the underlying machine integers
// - checked_* methods return Result; std::ops operators panic on failure
// - Every check runs before the first element is mutated
// - Every live vector is counted by lifecycle::InstanceCounter

mod element;
mod errors;
mod ops;
mod vector;

pub use element::Element;
pub use errors::{VectorError, VectorResult};
pub use vector::{NumericVector, VectorShort};
