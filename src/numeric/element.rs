// ============================================================================
// Vector Element Trait
// Fixed-width signed integers usable as vector elements
// ============================================================================

use num_traits::{PrimInt, Signed};
use std::fmt;
use std::hash::Hash;

/// Trait for the fixed-width signed integer types a vector can hold.
///
/// Identities come from `num_traits::{Zero, One}` and the bitwise complement
/// from `PrimInt`'s `Not`. The by-value wrapping operations below mirror the
/// primitive `wrapping_*` methods: every result wraps on overflow, matching
/// two's-complement machine arithmetic.
///
/// Implemented for `i8`, `i16`, `i32`, `i64`, `i128` and `isize`.
pub trait Element:
    PrimInt + Signed + Hash + Default + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Wrapping addition by value.
    fn wrapping_add_val(self, v: Self) -> Self;

    /// Wrapping subtraction by value.
    fn wrapping_sub_val(self, v: Self) -> Self;

    /// Wrapping multiplication by value.
    fn wrapping_mul_val(self, v: Self) -> Self;

    /// Wrapping division by value. `MIN / -1` yields `MIN`.
    ///
    /// # Panics
    /// Panics if `v` is zero. Vector division checks the divisor first.
    fn wrapping_div_val(self, v: Self) -> Self;

    /// Wrapping negation by value. `-MIN` yields `MIN`.
    fn wrapping_neg_val(self) -> Self;
}

macro_rules! element_impl {
    ($t:ty) => {
        impl Element for $t {
            #[inline(always)]
            fn wrapping_add_val(self, v: $t) -> $t {
                <$t>::wrapping_add(self, v)
            }

            #[inline(always)]
            fn wrapping_sub_val(self, v: $t) -> $t {
                <$t>::wrapping_sub(self, v)
            }

            #[inline(always)]
            fn wrapping_mul_val(self, v: $t) -> $t {
                <$t>::wrapping_mul(self, v)
            }

            #[inline(always)]
            fn wrapping_div_val(self, v: $t) -> $t {
                <$t>::wrapping_div(self, v)
            }

            #[inline(always)]
            fn wrapping_neg_val(self) -> $t {
                <$t>::wrapping_neg(self)
            }
        }
    };
}

element_impl!(i8);
element_impl!(i16);
element_impl!(i32);
element_impl!(i64);
element_impl!(i128);
element_impl!(isize);
