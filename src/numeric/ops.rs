// ============================================================================
// Vector Operators
// std::ops implementations on top of the checked vector API
// ============================================================================
//
// Operators that can fail (size mismatch, division by zero, bad index) panic
// with the VectorError message, the same way slice indexing panics. Use the
// checked_* / get* methods on NumericVector to get a Result instead.
//
// Rust's `!` on integers is the bitwise complement, so `Not` maps to
// `NumericVector::complement`. The logical "all elements zero" test is
// `NumericVector::is_zero`.

use super::element::Element;
use super::errors::VectorResult;
use super::vector::NumericVector;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Not, Sub, SubAssign,
};

#[track_caller]
fn expect_op<R>(result: VectorResult<R>, op: &str) -> R {
    match result {
        Ok(value) => value,
        Err(err) => panic!("NumericVector {} failed: {}", op, err),
    }
}

// ============================================================================
// Unary
// ============================================================================

impl<T: Element> Neg for &NumericVector<T> {
    type Output = NumericVector<T>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl<T: Element> Neg for NumericVector<T> {
    type Output = NumericVector<T>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl<T: Element> Not for &NumericVector<T> {
    type Output = NumericVector<T>;

    #[inline]
    fn not(self) -> Self::Output {
        self.complement()
    }
}

impl<T: Element> Not for NumericVector<T> {
    type Output = NumericVector<T>;

    #[inline]
    fn not(self) -> Self::Output {
        self.complement()
    }
}

// ============================================================================
// Compound Assignment
// ============================================================================

impl<T: Element> AddAssign<&NumericVector<T>> for NumericVector<T> {
    #[track_caller]
    fn add_assign(&mut self, rhs: &NumericVector<T>) {
        expect_op(self.checked_add_assign(rhs).map(|_| ()), "addition");
    }
}

impl<T: Element> AddAssign for NumericVector<T> {
    #[track_caller]
    fn add_assign(&mut self, rhs: NumericVector<T>) {
        *self += &rhs;
    }
}

impl<T: Element> SubAssign<&NumericVector<T>> for NumericVector<T> {
    #[track_caller]
    fn sub_assign(&mut self, rhs: &NumericVector<T>) {
        expect_op(self.checked_sub_assign(rhs).map(|_| ()), "subtraction");
    }
}

impl<T: Element> SubAssign for NumericVector<T> {
    #[track_caller]
    fn sub_assign(&mut self, rhs: NumericVector<T>) {
        *self -= &rhs;
    }
}

impl<T: Element> MulAssign<T> for NumericVector<T> {
    #[inline]
    fn mul_assign(&mut self, factor: T) {
        self.scale(factor);
    }
}

impl<T: Element> DivAssign<T> for NumericVector<T> {
    #[track_caller]
    fn div_assign(&mut self, divisor: T) {
        expect_op(self.checked_div_assign(divisor).map(|_| ()), "division");
    }
}

// ============================================================================
// Binary
// ============================================================================

impl<T: Element> Add for &NumericVector<T> {
    type Output = NumericVector<T>;

    #[track_caller]
    fn add(self, rhs: Self) -> Self::Output {
        expect_op(self.checked_add(rhs), "addition")
    }
}

impl<T: Element> Add<&NumericVector<T>> for NumericVector<T> {
    type Output = NumericVector<T>;

    #[track_caller]
    fn add(mut self, rhs: &NumericVector<T>) -> Self::Output {
        self += rhs;
        self
    }
}

impl<T: Element> Add for NumericVector<T> {
    type Output = NumericVector<T>;

    #[track_caller]
    fn add(mut self, rhs: NumericVector<T>) -> Self::Output {
        self += &rhs;
        self
    }
}

impl<T: Element> Sub for &NumericVector<T> {
    type Output = NumericVector<T>;

    #[track_caller]
    fn sub(self, rhs: Self) -> Self::Output {
        expect_op(self.checked_sub(rhs), "subtraction")
    }
}

impl<T: Element> Sub<&NumericVector<T>> for NumericVector<T> {
    type Output = NumericVector<T>;

    #[track_caller]
    fn sub(mut self, rhs: &NumericVector<T>) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<T: Element> Sub for NumericVector<T> {
    type Output = NumericVector<T>;

    #[track_caller]
    fn sub(mut self, rhs: NumericVector<T>) -> Self::Output {
        self -= &rhs;
        self
    }
}

impl<T: Element> Mul<T> for &NumericVector<T> {
    type Output = NumericVector<T>;

    #[inline]
    fn mul(self, factor: T) -> Self::Output {
        self.scaled(factor)
    }
}

impl<T: Element> Mul<T> for NumericVector<T> {
    type Output = NumericVector<T>;

    #[inline]
    fn mul(mut self, factor: T) -> Self::Output {
        self.scale(factor);
        self
    }
}

impl<T: Element> Div<T> for &NumericVector<T> {
    type Output = NumericVector<T>;

    #[track_caller]
    fn div(self, divisor: T) -> Self::Output {
        expect_op(self.checked_div(divisor), "division")
    }
}

impl<T: Element> Div<T> for NumericVector<T> {
    type Output = NumericVector<T>;

    #[track_caller]
    fn div(mut self, divisor: T) -> Self::Output {
        self /= divisor;
        self
    }
}

// ============================================================================
// Indexing
// ============================================================================

impl<T: Element> Index<usize> for NumericVector<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        expect_op(self.get(index), "index")
    }
}

impl<T: Element> IndexMut<usize> for NumericVector<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        expect_op(self.get_mut(index), "index")
    }
}
