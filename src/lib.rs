// ============================================================================
// Numeric Vector Library
// Fixed-length integer vectors with value semantics and instance accounting
// ============================================================================

//! # Numeric Vector
//!
//! A fixed-length, heap-backed vector of fixed-width signed integers.
//!
//! ## Features
//!
//! - **Value semantics**: cloning allocates an independent buffer
//! - **Element-wise arithmetic** via `std::ops` (`+`, `-`, `*`, `/`, unary `-`, `!`)
//!   with wrapping overflow, plus non-panicking `checked_*` methods
//! - **Bounds-checked indexing** with `get`/`get_mut` or `v[i]`
//! - **Live-instance accounting** through a process-wide atomic counter
//! - **Flight schedule** lookup table over flight numbers and departure times
//!
//! ## Example
//!
//! ```rust
//! use numeric_vector::prelude::*;
//!
//! let mut v1 = VectorShort::filled(5, 2).unwrap();
//! let v2 = VectorShort::filled(5, 3).unwrap();
//!
//! v1 += &v2;
//! println!("v1 after addition: {}", v1);
//! assert_eq!(v1.to_string(), "[5, 5, 5, 5, 5]");
//!
//! v1 *= 2;
//! println!("v1 after scaling by 2: {}", v1);
//! assert_eq!(v1, VectorShort::filled(5, 10).unwrap());
//!
//! assert!(NumericVector::<i16>::instance_count() >= 2);
//! ```

pub mod domain;
pub mod lifecycle;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        DepartureTime, FlightNumber, FlightSchedule, ScheduleError, VectorConfig,
    };
    pub use crate::lifecycle::InstanceCounter;
    pub use crate::numeric::{Element, NumericVector, VectorError, VectorResult, VectorShort};
}
