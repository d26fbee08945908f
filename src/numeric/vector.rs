// ============================================================================
// Numeric Vector
// Fixed-length, heap-backed vector of fixed-width signed integers
// ============================================================================

use super::element::Element;
use super::errors::{VectorError, VectorResult};
use crate::domain::config::VectorConfig;
use crate::lifecycle::{InstanceCounter, InstanceGuard};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Fixed-length vector of signed integers with value semantics.
///
/// The vector exclusively owns a heap buffer of `len() >= 1` elements. The
/// length is fixed at construction; there is no push, pop or resize.
/// Cloning allocates an independent buffer. Every live vector is counted by
/// the process-wide [`InstanceCounter`].
///
/// Arithmetic wraps on overflow. Fallible operations come in two flavours:
/// `checked_*` methods returning [`VectorResult`], and the `std::ops`
/// operators which panic with the same error message.
///
/// # Example
/// ```
/// use numeric_vector::numeric::NumericVector;
///
/// let mut v1 = NumericVector::<i16>::filled(5, 2)?;
/// let v2 = NumericVector::<i16>::filled(5, 3)?;
///
/// v1.checked_add_assign(&v2)?;
/// assert_eq!(v1.to_string(), "[5, 5, 5, 5, 5]");
///
/// v1 *= 2;
/// assert_eq!(v1.to_string(), "[10, 10, 10, 10, 10]");
/// # Ok::<(), numeric_vector::numeric::VectorError>(())
/// ```
pub struct NumericVector<T: Element = i16> {
    elements: Box<[T]>,
    _guard: InstanceGuard,
}

/// Vector of 16-bit elements, the default element type.
pub type VectorShort = NumericVector<i16>;

impl<T: Element> NumericVector<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Takes ownership of a non-empty buffer and registers the instance.
    ///
    /// The buffer is allocated before the guard is registered, so a failed
    /// allocation never shows up in the live count.
    fn from_boxed(elements: Box<[T]>) -> Self {
        debug_assert!(!elements.is_empty());
        Self {
            elements,
            _guard: InstanceGuard::register(),
        }
    }

    /// Create a vector of length 1 holding a single zero.
    pub fn new() -> Self {
        Self::from_boxed(Box::new([T::zero()]))
    }

    /// Create a zero-filled vector of length `size`.
    ///
    /// # Errors
    /// Returns `ZeroLength` if `size` is 0.
    pub fn with_len(size: usize) -> VectorResult<Self> {
        Self::filled(size, T::zero())
    }

    /// Create a vector of length `size` with every element set to `value`.
    ///
    /// # Errors
    /// Returns `ZeroLength` if `size` is 0.
    pub fn filled(size: usize, value: T) -> VectorResult<Self> {
        if size == 0 {
            tracing::debug!("Rejected zero-length vector construction");
            return Err(VectorError::ZeroLength);
        }
        Ok(Self::from_boxed(vec![value; size].into_boxed_slice()))
    }

    /// Create a vector from a validated configuration.
    pub fn from_config(config: &VectorConfig<T>) -> VectorResult<Self> {
        config.validate()?;
        Self::filled(config.length, config.fill)
    }

    /// Copy-assign from `source`.
    ///
    /// Afterwards `self` has the length and values of `source`. `self` stays
    /// the same instance, so the live count does not change.
    pub fn assign(&mut self, source: &Self) -> &mut Self {
        self.clone_from(source);
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of elements. Fixed for the lifetime of the vector.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always `false`: a vector holds at least one element.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// View the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Iterate over the elements in index order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Bounds-checked shared access.
    ///
    /// # Errors
    /// Returns `IndexOutOfRange` if `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize) -> VectorResult<&T> {
        let len = self.len();
        self.elements
            .get(index)
            .ok_or(VectorError::IndexOutOfRange { index, len })
    }

    /// Bounds-checked mutable access. Writes through the returned reference
    /// land directly in the vector's storage.
    ///
    /// # Errors
    /// Returns `IndexOutOfRange` if `index >= len()`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> VectorResult<&mut T> {
        let len = self.len();
        self.elements
            .get_mut(index)
            .ok_or(VectorError::IndexOutOfRange { index, len })
    }

    /// Logical negation: `true` iff every element is zero.
    pub fn is_zero(&self) -> bool {
        self.elements.iter().all(|&value| value.is_zero())
    }

    /// Number of vectors currently alive in this process, across all
    /// element types.
    #[inline]
    pub fn instance_count() -> usize {
        InstanceCounter::live()
    }

    // ========================================================================
    // Increment / Decrement
    // ========================================================================

    /// Prefix increment: add one to every element in place.
    pub fn increment(&mut self) -> &mut Self {
        self.apply(|value| value.wrapping_add_val(T::one()));
        self
    }

    /// Prefix decrement: subtract one from every element in place.
    pub fn decrement(&mut self) -> &mut Self {
        self.apply(|value| value.wrapping_sub_val(T::one()));
        self
    }

    /// Postfix increment: increment in place and return the prior value.
    #[must_use = "use `increment` if the prior value is not needed"]
    pub fn post_increment(&mut self) -> Self {
        let before = self.clone();
        self.increment();
        before
    }

    /// Postfix decrement: decrement in place and return the prior value.
    #[must_use = "use `decrement` if the prior value is not needed"]
    pub fn post_decrement(&mut self) -> Self {
        let before = self.clone();
        self.decrement();
        before
    }

    // ========================================================================
    // Unary Operations
    // ========================================================================

    /// New vector holding the bitwise complement of every element.
    pub fn complement(&self) -> Self {
        self.map(|value| !value)
    }

    /// New vector holding the arithmetic negation of every element.
    pub fn negated(&self) -> Self {
        self.map(T::wrapping_neg_val)
    }

    // ========================================================================
    // Compound Arithmetic
    // ========================================================================

    /// Element-wise `self += rhs`.
    ///
    /// # Errors
    /// Returns `SizeMismatch` if the lengths differ; `self` is unchanged.
    pub fn checked_add_assign(&mut self, rhs: &Self) -> VectorResult<&mut Self> {
        self.ensure_same_len(rhs)?;
        self.zip_apply(rhs, T::wrapping_add_val);
        Ok(self)
    }

    /// Element-wise `self -= rhs`.
    ///
    /// # Errors
    /// Returns `SizeMismatch` if the lengths differ; `self` is unchanged.
    pub fn checked_sub_assign(&mut self, rhs: &Self) -> VectorResult<&mut Self> {
        self.ensure_same_len(rhs)?;
        self.zip_apply(rhs, T::wrapping_sub_val);
        Ok(self)
    }

    /// Multiply every element by `factor` in place.
    pub fn scale(&mut self, factor: T) -> &mut Self {
        self.apply(|value| value.wrapping_mul_val(factor));
        self
    }

    /// Divide every element by `divisor` in place, truncating toward zero.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `divisor` is zero; `self` is unchanged.
    pub fn checked_div_assign(&mut self, divisor: T) -> VectorResult<&mut Self> {
        if divisor.is_zero() {
            tracing::debug!(len = self.len(), "Rejected vector division by zero");
            return Err(VectorError::DivisionByZero);
        }
        self.apply(|value| value.wrapping_div_val(divisor));
        Ok(self)
    }

    // ========================================================================
    // Allocating Arithmetic
    // ========================================================================

    /// Element-wise sum as a new vector.
    ///
    /// # Errors
    /// Returns `SizeMismatch` if the lengths differ.
    pub fn checked_add(&self, rhs: &Self) -> VectorResult<Self> {
        let mut result = self.clone();
        result.checked_add_assign(rhs)?;
        Ok(result)
    }

    /// Element-wise difference as a new vector.
    ///
    /// # Errors
    /// Returns `SizeMismatch` if the lengths differ.
    pub fn checked_sub(&self, rhs: &Self) -> VectorResult<Self> {
        let mut result = self.clone();
        result.checked_sub_assign(rhs)?;
        Ok(result)
    }

    /// Scaled copy.
    pub fn scaled(&self, factor: T) -> Self {
        let mut result = self.clone();
        result.scale(factor);
        result
    }

    /// Divided copy.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `divisor` is zero.
    pub fn checked_div(&self, divisor: T) -> VectorResult<Self> {
        let mut result = self.clone();
        result.checked_div_assign(divisor)?;
        Ok(result)
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn ensure_same_len(&self, rhs: &Self) -> VectorResult<()> {
        if self.len() == rhs.len() {
            return Ok(());
        }
        let err = VectorError::SizeMismatch {
            expected: self.len(),
            found: rhs.len(),
        };
        tracing::debug!("Rejected element-wise vector operation: {}", err);
        Err(err)
    }

    #[inline]
    fn apply(&mut self, f: impl Fn(T) -> T) {
        for value in self.elements.iter_mut() {
            *value = f(*value);
        }
    }

    #[inline]
    fn zip_apply(&mut self, rhs: &Self, f: impl Fn(T, T) -> T) {
        for (value, &other) in self.elements.iter_mut().zip(rhs.elements.iter()) {
            *value = f(*value, other);
        }
    }

    #[inline]
    fn map(&self, f: impl Fn(T) -> T) -> Self {
        Self::from_boxed(self.elements.iter().map(|&value| f(value)).collect())
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<T: Element> Default for NumericVector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> Clone for NumericVector<T> {
    fn clone(&self) -> Self {
        Self::from_boxed(self.elements.clone())
    }

    fn clone_from(&mut self, source: &Self) {
        if self.len() == source.len() {
            self.elements.copy_from_slice(&source.elements);
        } else {
            self.elements = source.elements.clone();
        }
    }
}

impl<T: Element> PartialEq for NumericVector<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Element> Eq for NumericVector<T> {}

impl<T: Element> Hash for NumericVector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements.hash(state);
    }
}

impl<T: Element> TryFrom<Vec<T>> for NumericVector<T> {
    type Error = VectorError;

    fn try_from(values: Vec<T>) -> VectorResult<Self> {
        if values.is_empty() {
            return Err(VectorError::ZeroLength);
        }
        Ok(Self::from_boxed(values.into_boxed_slice()))
    }
}

impl<T: Element> TryFrom<&[T]> for NumericVector<T> {
    type Error = VectorError;

    fn try_from(values: &[T]) -> VectorResult<Self> {
        if values.is_empty() {
            return Err(VectorError::ZeroLength);
        }
        Ok(Self::from_boxed(values.into()))
    }
}

impl<'a, T: Element> IntoIterator for &'a NumericVector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl<T: Element> fmt::Display for NumericVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.elements.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

impl<T: Element> fmt::Debug for NumericVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NumericVector({:?})", &*self.elements)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    type V = NumericVector<i16>;

    fn vector(values: &[i16]) -> V {
        V::try_from(values).unwrap()
    }

    #[test]
    fn test_new_is_single_zero() {
        let v = V::new();
        assert_eq!(v.len(), 1);
        assert_eq!(v.as_slice(), &[0]);
        assert_eq!(V::default(), v);
    }

    #[test]
    fn test_with_len_zero_filled() {
        let v = V::with_len(4).unwrap();
        assert_eq!(v.len(), 4);
        assert!(v.iter().all(|&x| x == 0));
        assert!(!v.is_empty());
    }

    #[test]
    fn test_zero_length_rejected() {
        assert_eq!(V::with_len(0).unwrap_err(), VectorError::ZeroLength);
        assert_eq!(V::filled(0, 7).unwrap_err(), VectorError::ZeroLength);
        assert_eq!(V::try_from(Vec::<i16>::new()).unwrap_err(), VectorError::ZeroLength);
    }

    #[test]
    fn test_filled() {
        let v = V::filled(3, 2).unwrap();
        assert_eq!(v.as_slice(), &[2, 2, 2]);
    }

    #[test]
    fn test_from_config() {
        let config = VectorConfig::new(4).with_fill(-1i16);
        let v = V::from_config(&config).unwrap();
        assert_eq!(v.as_slice(), &[-1, -1, -1, -1]);

        let empty = VectorConfig::<i16>::new(0);
        assert_eq!(V::from_config(&empty).unwrap_err(), VectorError::ZeroLength);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = vector(&[1, 2, 3]);
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy[0] = 42;
        assert_eq!(original.as_slice(), &[1, 2, 3]);
        assert_eq!(copy.as_slice(), &[42, 2, 3]);
        assert_ne!(original.as_slice().as_ptr(), copy.as_slice().as_ptr());
    }

    #[test]
    fn test_assign_takes_source_length() {
        let mut target = vector(&[9]);
        let source = vector(&[1, 2, 3]);
        target.assign(&source);
        assert_eq!(target, source);
        assert_eq!(target.len(), 3);

        // Same length reuses the buffer
        let other = vector(&[7, 8, 9]);
        let ptr = target.as_slice().as_ptr();
        target.assign(&other);
        assert_eq!(target.as_slice(), &[7, 8, 9]);
        assert_eq!(target.as_slice().as_ptr(), ptr);
    }

    #[test]
    fn test_assign_does_not_alias_source() {
        // Different length: fresh buffer
        let mut target = vector(&[9]);
        let mut source = vector(&[1, 2, 3]);
        target.assign(&source);
        assert_ne!(target.as_slice().as_ptr(), source.as_slice().as_ptr());
        source[0] = 100;
        source.increment();
        assert_eq!(target.as_slice(), &[1, 2, 3]);

        // Same length: reused buffer
        let mut other = vector(&[7, 8, 9]);
        target.assign(&other);
        assert_ne!(target.as_slice().as_ptr(), other.as_slice().as_ptr());
        other[2] = -1;
        other.scale(10);
        assert_eq!(target.as_slice(), &[7, 8, 9]);

        // And writes to the target never reach the source
        target[0] = 0;
        assert_eq!(other.as_slice(), &[70, 80, -10]);
    }

    #[test]
    fn test_prefix_increment_decrement() {
        let mut v = vector(&[1, -1, 0]);
        v.increment().increment();
        assert_eq!(v.as_slice(), &[3, 1, 2]);
        v.decrement();
        assert_eq!(v.as_slice(), &[2, 0, 1]);
    }

    #[test]
    fn test_postfix_returns_prior_value() {
        let mut v = vector(&[1, 2]);
        let before = v.post_increment();
        assert_eq!(before.as_slice(), &[1, 2]);
        assert_eq!(v.as_slice(), &[2, 3]);

        let before = v.post_decrement();
        assert_eq!(before.as_slice(), &[2, 3]);
        assert_eq!(v.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_increment_wraps() {
        let mut v = vector(&[i16::MAX]);
        v.increment();
        assert_eq!(v[0], i16::MIN);
    }

    #[test]
    fn test_is_zero() {
        let mut v = V::filled(3, 0).unwrap();
        assert!(v.is_zero());
        v[0] = 1;
        assert!(!v.is_zero());
    }

    #[test]
    fn test_complement_and_negation() {
        let v = V::filled(2, 5).unwrap();
        assert_eq!(v.negated().as_slice(), &[-5, -5]);
        assert_eq!(v.complement().as_slice(), &[!5, !5]);
        assert_eq!(v.as_slice(), &[5, 5]);

        let min = vector(&[i16::MIN]);
        assert_eq!(min.negated().as_slice(), &[i16::MIN]);
    }

    #[test]
    fn test_add_sub_assign() {
        let mut v1 = V::filled(5, 2).unwrap();
        let v2 = V::filled(5, 3).unwrap();
        v1.checked_add_assign(&v2).unwrap();
        assert_eq!(v1, V::filled(5, 5).unwrap());

        v1.checked_sub_assign(&v2).unwrap().checked_sub_assign(&v2).unwrap();
        assert_eq!(v1, V::filled(5, -1).unwrap());
    }

    #[test]
    fn test_size_mismatch_leaves_target_unchanged() {
        let mut a = vector(&[1, 2, 3]);
        let b = vector(&[1, 2]);
        assert_eq!(
            a.checked_add_assign(&b).unwrap_err(),
            VectorError::SizeMismatch {
                expected: 3,
                found: 2
            }
        );
        assert_eq!(
            a.checked_sub_assign(&b).unwrap_err(),
            VectorError::SizeMismatch {
                expected: 3,
                found: 2
            }
        );
        assert_eq!(a.as_slice(), &[1, 2, 3]);
        assert!(a.checked_add(&b).is_err());
        assert!(b.checked_sub(&a).is_err());
    }

    #[test]
    fn test_scale_and_divide() {
        let mut v = vector(&[10, -7, 3]);
        v.scale(2);
        assert_eq!(v.as_slice(), &[20, -14, 6]);
        v.checked_div_assign(4).unwrap();
        assert_eq!(v.as_slice(), &[5, -3, 1]);
    }

    #[test]
    fn test_division_by_zero_leaves_target_unchanged() {
        let mut v = vector(&[4, 8]);
        assert_eq!(
            v.checked_div_assign(0).unwrap_err(),
            VectorError::DivisionByZero
        );
        assert_eq!(v.as_slice(), &[4, 8]);
        assert_eq!(v.checked_div(0).unwrap_err(), VectorError::DivisionByZero);
    }

    #[test]
    fn test_allocating_forms_leave_operands_untouched() {
        let a = vector(&[1, 2]);
        let b = vector(&[10, 20]);
        assert_eq!(a.checked_add(&b).unwrap().as_slice(), &[11, 22]);
        assert_eq!(b.checked_sub(&a).unwrap().as_slice(), &[9, 18]);
        assert_eq!(b.scaled(3).as_slice(), &[30, 60]);
        assert_eq!(b.checked_div(10).unwrap().as_slice(), &[1, 2]);
        assert_eq!(a.as_slice(), &[1, 2]);
        assert_eq!(b.as_slice(), &[10, 20]);
    }

    #[test]
    fn test_get_bounds() {
        let mut v = vector(&[1, 2, 3]);
        assert_eq!(*v.get(2).unwrap(), 3);
        assert_eq!(
            v.get(3).unwrap_err(),
            VectorError::IndexOutOfRange { index: 3, len: 3 }
        );
        *v.get_mut(1).unwrap() = 9;
        assert_eq!(v.as_slice(), &[1, 9, 3]);
        assert!(v.get_mut(100).is_err());
    }

    #[test]
    fn test_equality() {
        assert_eq!(vector(&[1, 2]), vector(&[1, 2]));
        assert_ne!(vector(&[1, 2]), vector(&[2, 1]));
        // Length mismatch is simply "not equal"
        assert_ne!(vector(&[0]), vector(&[0, 0]));
    }

    #[test]
    fn test_display() {
        assert_eq!(V::filled(3, 2).unwrap().to_string(), "[2, 2, 2]");
        assert_eq!(V::new().to_string(), "[0]");
        assert_eq!(vector(&[-1, 0, 1]).to_string(), "[-1, 0, 1]");
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", vector(&[1, 2])), "NumericVector([1, 2])");
    }

    #[test]
    fn test_other_element_types() {
        let mut v = NumericVector::<i64>::filled(2, i64::MAX).unwrap();
        v.increment();
        assert_eq!(v.as_slice(), &[i64::MIN, i64::MIN]);

        let bytes = NumericVector::<i8>::try_from(vec![-128i8, 127]).unwrap();
        assert_eq!(bytes.complement().as_slice(), &[127, -128]);
    }

    #[test]
    fn test_iteration() {
        let v = vector(&[3, 4]);
        let total: i16 = (&v).into_iter().sum();
        assert_eq!(total, 7);
        assert_eq!(v.iter().count(), 2);
    }
}
