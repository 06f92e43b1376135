//! Fixed-size vector container
//!
//! [`Vector<T, N>`] is an N-element, contiguously stored, copyable value
//! type. Length is part of the type: a `Vector<f32, 3>` and a
//! `Vector<f32, 4>` are different types, convertible (with padding or
//! truncation) but never assignable to each other in place. There is no
//! heap involvement anywhere; construction, copying and destruction follow
//! ordinary value-scope rules.

use crate::traits::Scalar;
use core::fmt;

/// Fixed-length numeric vector of `N` elements of type `T`
///
/// # Example
///
/// ```rust
/// use vega_math::{Vec3f, Vector};
///
/// let v = Vec3f::new([1.0, 2.0, 3.0]);
/// assert_eq!(v[1], 2.0);
/// assert_eq!(v.at::<2>(), 3.0);
/// assert_eq!(format!("{v}"), "{ 1, 2, 3 }");
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Vector<T, const N: usize>(pub(crate) [T; N]);

/// Two-element vector.
pub type Vec2<T> = Vector<T, 2>;
/// Three-element vector.
pub type Vec3<T> = Vector<T, 3>;
/// Four-element vector.
pub type Vec4<T> = Vector<T, 4>;

/// Two-element single-precision vector.
pub type Vec2f = Vector<f32, 2>;
/// Three-element single-precision vector.
pub type Vec3f = Vector<f32, 3>;
/// Four-element single-precision vector.
pub type Vec4f = Vector<f32, 4>;

/// Errors reported by the runtime accessors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    /// A dynamically computed index was outside `[0, len)`.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The vector's length.
        len: usize,
    },
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for vector of length {len}")
            }
        }
    }
}

impl core::error::Error for VectorError {}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Construct from an explicit per-position value list.
    ///
    /// The list length must match `N` exactly; a mismatch is a type error.
    #[inline]
    pub fn new(elems: [T; N]) -> Self {
        const { assert!(N >= 1, "vectors have at least one element") }
        Self(elems)
    }

    /// Construct with every position set to `value`.
    #[inline]
    pub fn splat(value: T) -> Self {
        const { assert!(N >= 1, "vectors have at least one element") }
        Self([value; N])
    }

    /// Construct by evaluating `f` at every position.
    #[inline]
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        const { assert!(N >= 1, "vectors have at least one element") }
        Self(core::array::from_fn(f))
    }

    /// Convert from a vector of any length and element type.
    ///
    /// Missing positions default, excess positions truncate, and each
    /// carried element converts via [`Scalar::cast`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use vega_math::{Vec2, Vec4f};
    ///
    /// let short = Vec2::new([1i32, 2]);
    /// let wide = Vec4f::from_vector(&short);
    /// assert_eq!(wide.to_array(), [1.0, 2.0, 0.0, 0.0]);
    /// ```
    #[inline]
    pub fn from_vector<U: Scalar, const M: usize>(other: &Vector<U, M>) -> Self {
        Self::from_fn(|i| if i < M { other.0[i].cast() } else { T::default() })
    }

    /// Copy into a vector of another length, padding or truncating.
    #[inline]
    pub fn resized<const M: usize>(&self) -> Vector<T, M> {
        Vector::from_vector(self)
    }

    /// Element at a compile-time index.
    ///
    /// An out-of-range `I` fails compilation.
    #[inline(always)]
    pub fn at<const I: usize>(&self) -> T {
        const { assert!(I < N, "compile-time index out of range") }
        self.0[I]
    }

    /// Replace the element at a compile-time index.
    #[inline(always)]
    pub fn set_at<const I: usize>(&mut self, value: T) {
        const { assert!(I < N, "compile-time index out of range") }
        self.0[I] = value;
    }

    /// First element.
    #[inline(always)]
    pub fn x(&self) -> T {
        self.at::<0>()
    }

    /// Second element (requires `N >= 2`).
    #[inline(always)]
    pub fn y(&self) -> T {
        self.at::<1>()
    }

    /// Third element (requires `N >= 3`).
    #[inline(always)]
    pub fn z(&self) -> T {
        self.at::<2>()
    }

    /// Fourth element (requires `N >= 4`).
    #[inline(always)]
    pub fn w(&self) -> T {
        self.at::<3>()
    }

    /// Element at a runtime index, or `None` when out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<T> {
        self.0.get(index).copied()
    }

    /// Element at a runtime index, reporting an error when out of range.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vega_math::{Vec2f, VectorError};
    ///
    /// let v = Vec2f::new([1.0, 2.0]);
    /// assert_eq!(v.try_get(1), Ok(2.0));
    /// assert_eq!(
    ///     v.try_get(5),
    ///     Err(VectorError::IndexOutOfRange { index: 5, len: 2 })
    /// );
    /// ```
    #[inline]
    pub fn try_get(&self, index: usize) -> Result<T, VectorError> {
        self.get(index)
            .ok_or(VectorError::IndexOutOfRange { index, len: N })
    }

    /// Number of elements (the const parameter `N`).
    #[inline(always)]
    pub const fn len(&self) -> usize {
        N
    }

    /// Always false; vectors have at least one element.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Raw pointer to the first element of the contiguous storage.
    #[inline(always)]
    pub const fn as_ptr(&self) -> *const T {
        self.0.as_ptr()
    }

    /// Mutable raw pointer to the first element.
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.0.as_mut_ptr()
    }

    /// View the elements as a slice.
    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// View the elements as a mutable slice.
    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Copy the elements out as a plain array.
    #[inline(always)]
    pub fn to_array(&self) -> [T; N] {
        self.0
    }

    /// Iterate over the elements by reference.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.0.iter()
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    #[inline]
    fn default() -> Self {
        Self::splat(T::default())
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(elems: [T; N]) -> Self {
        Self::new(elems)
    }
}

impl<T: Scalar, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N>) -> Self {
        v.0
    }
}

impl<T, const N: usize> core::ops::Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const N: usize> core::ops::IndexMut<usize> for Vector<T, N> {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// Diagnostic rendering: `{ e0, e1, ..., eN-1 }`. Not a parsed format.
impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{e}")?;
        }
        write!(f, " }}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_list_construction() {
        let v = Vector::new([1, 2, 3]);
        assert_eq!(v[0], 1);
        assert_eq!(v[2], 3);
    }

    #[test]
    fn splat_and_default() {
        let v = Vec3f::splat(2.5);
        assert_eq!(v.to_array(), [2.5, 2.5, 2.5]);
        let d = Vec4f::default();
        assert_eq!(d.to_array(), [0.0; 4]);
    }

    #[test]
    fn conversion_pads_and_truncates() {
        let v = Vector::new([1i32, 2, 3, 4]);
        let shorter: Vector<i32, 2> = v.resized();
        assert_eq!(shorter.to_array(), [1, 2]);
        let longer: Vector<f64, 6> = Vector::from_vector(&v);
        assert_eq!(longer.to_array(), [1.0, 2.0, 3.0, 4.0, 0.0, 0.0]);
    }

    #[test]
    fn compile_time_indexing() {
        let mut v = Vector::new([10, 20]);
        assert_eq!(v.at::<1>(), 20);
        v.set_at::<0>(5);
        assert_eq!(v.x(), 5);
        assert_eq!(v.y(), 20);
    }

    #[test]
    fn runtime_index_error() {
        let v = Vec2f::new([1.0, 2.0]);
        assert_eq!(v.get(3), None);
        let err = v.try_get(3).unwrap_err();
        assert_eq!(err, VectorError::IndexOutOfRange { index: 3, len: 2 });
    }

    #[test]
    fn raw_access_is_contiguous() {
        let v = Vector::new([7i32, 8, 9]);
        let slice = v.as_slice();
        assert_eq!(slice, &[7, 8, 9]);
        // pointer walks the elements in index order
        unsafe {
            let p = v.as_ptr();
            assert_eq!(*p, 7);
            assert_eq!(*p.add(2), 9);
        }
    }

    #[test]
    fn display_formatting() {
        // no_std unit test: format into a fixed buffer via fmt::Write
        use core::fmt::Write;
        struct Buf([u8; 64], usize);
        impl Write for Buf {
            fn write_str(&mut self, s: &str) -> fmt::Result {
                self.0[self.1..self.1 + s.len()].copy_from_slice(s.as_bytes());
                self.1 += s.len();
                Ok(())
            }
        }
        let v = Vector::new([1, 2, 3]);
        let mut buf = Buf([0; 64], 0);
        write!(buf, "{v}").unwrap();
        assert_eq!(core::str::from_utf8(&buf.0[..buf.1]).unwrap(), "{ 1, 2, 3 }");
    }
}
