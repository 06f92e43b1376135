//! Compile-time permutation (shuffle)
//!
//! Index lists are const generic parameters, validated at compile time:
//! an out-of-range index fails compilation, never at runtime. Indices may
//! repeat and appear in any order. Each arity comes in three forms:
//!
//! - `shuffleK`: a reordered copy
//! - `shuffleK_ref`: a [`VectorView`] of shared aliases into the original
//!   storage (no copy; the source must outlive the view)
//! - `shuffleK_mut`: a [`VectorViewMut`] of mutable aliases; indices must
//!   additionally be pairwise distinct, and requesting a mutable view of
//!   an immutable vector is rejected by the borrow checker

use crate::traits::Scalar;
use crate::vector::Vector;
use core::fmt;

/// Borrowed, possibly reordered view of another vector's elements
///
/// Holds shared references into the source storage; copying the view
/// copies the aliases, not the referents.
#[derive(Debug, Clone, Copy)]
pub struct VectorView<'a, T, const N: usize>(pub(crate) [&'a T; N]);

/// Borrowed mutable view of another vector's elements
///
/// Construction guarantees the aliased positions are pairwise distinct.
#[derive(Debug)]
pub struct VectorViewMut<'a, T, const N: usize>(pub(crate) [&'a mut T; N]);

impl<'a, T: Scalar, const N: usize> VectorView<'a, T, N> {
    /// Copy the viewed elements into an owning vector.
    #[inline]
    pub fn to_owned(&self) -> Vector<T, N> {
        Vector::from_fn(|i| *self.0[i])
    }

    /// Viewed element at a runtime index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<T> {
        self.0.get(index).map(|e| **e)
    }
}

impl<'a, T: Scalar, const N: usize> VectorViewMut<'a, T, N> {
    /// Copy the viewed elements into an owning vector.
    #[inline]
    pub fn to_owned(&self) -> Vector<T, N> {
        Vector::from_fn(|i| *self.0[i])
    }

    /// Write through the alias at position `index`.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) {
        *self.0[index] = value;
    }
}

impl<'a, T, const N: usize> core::ops::Index<usize> for VectorView<'a, T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        self.0[index]
    }
}

impl<'a, T, const N: usize> core::ops::Index<usize> for VectorViewMut<'a, T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        self.0[index]
    }
}

impl<'a, T, const N: usize> core::ops::IndexMut<usize> for VectorViewMut<'a, T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.0[index]
    }
}

impl<'a, T: fmt::Display, const N: usize> fmt::Display for VectorView<'a, T, N> {
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

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Two-element reordered copy.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vega_math::Vec3f;
    ///
    /// let v = Vec3f::new([1.0, 2.0, 3.0]);
    /// assert_eq!(v.shuffle2::<2, 0>().to_array(), [3.0, 1.0]);
    /// assert_eq!(v.shuffle2::<1, 1>().to_array(), [2.0, 2.0]);
    /// ```
    #[inline]
    pub fn shuffle2<const I0: usize, const I1: usize>(&self) -> Vector<T, 2> {
        const { assert!(I0 < N && I1 < N, "shuffle index out of range") }
        Vector::new([self.0[I0], self.0[I1]])
    }

    /// Three-element reordered copy.
    #[inline]
    pub fn shuffle3<const I0: usize, const I1: usize, const I2: usize>(&self) -> Vector<T, 3> {
        const { assert!(I0 < N && I1 < N && I2 < N, "shuffle index out of range") }
        Vector::new([self.0[I0], self.0[I1], self.0[I2]])
    }

    /// Four-element reordered copy.
    #[inline]
    pub fn shuffle4<const I0: usize, const I1: usize, const I2: usize, const I3: usize>(
        &self,
    ) -> Vector<T, 4> {
        const { assert!(I0 < N && I1 < N && I2 < N && I3 < N, "shuffle index out of range") }
        Vector::new([self.0[I0], self.0[I1], self.0[I2], self.0[I3]])
    }

    /// Two-element aliasing view; no elements are copied.
    #[inline]
    pub fn shuffle2_ref<const I0: usize, const I1: usize>(&self) -> VectorView<'_, T, 2> {
        const { assert!(I0 < N && I1 < N, "shuffle index out of range") }
        VectorView([&self.0[I0], &self.0[I1]])
    }

    /// Three-element aliasing view.
    #[inline]
    pub fn shuffle3_ref<const I0: usize, const I1: usize, const I2: usize>(
        &self,
    ) -> VectorView<'_, T, 3> {
        const { assert!(I0 < N && I1 < N && I2 < N, "shuffle index out of range") }
        VectorView([&self.0[I0], &self.0[I1], &self.0[I2]])
    }

    /// Four-element aliasing view.
    #[inline]
    pub fn shuffle4_ref<const I0: usize, const I1: usize, const I2: usize, const I3: usize>(
        &self,
    ) -> VectorView<'_, T, 4> {
        const { assert!(I0 < N && I1 < N && I2 < N && I3 < N, "shuffle index out of range") }
        VectorView([&self.0[I0], &self.0[I1], &self.0[I2], &self.0[I3]])
    }

    /// Two-element mutable aliasing view; `I0` and `I1` must differ.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vega_math::Vec3f;
    ///
    /// let mut v = Vec3f::new([1.0, 2.0, 3.0]);
    /// let mut view = v.shuffle2_mut::<2, 0>();
    /// view.set(0, 30.0);
    /// view.set(1, 10.0);
    /// assert_eq!(v.to_array(), [10.0, 2.0, 30.0]);
    /// ```
    #[inline]
    pub fn shuffle2_mut<const I0: usize, const I1: usize>(&mut self) -> VectorViewMut<'_, T, 2> {
        const { assert!(I0 < N && I1 < N, "shuffle index out of range") }
        const { assert!(I0 != I1, "mutable shuffle indices must be distinct") }
        let ptr = self.0.as_mut_ptr();
        // SAFETY: indices are in range and pairwise distinct, so the two
        // mutable references never alias.
        unsafe { VectorViewMut([&mut *ptr.add(I0), &mut *ptr.add(I1)]) }
    }

    /// Three-element mutable aliasing view; indices must be pairwise
    /// distinct.
    #[inline]
    pub fn shuffle3_mut<const I0: usize, const I1: usize, const I2: usize>(
        &mut self,
    ) -> VectorViewMut<'_, T, 3> {
        const { assert!(I0 < N && I1 < N && I2 < N, "shuffle index out of range") }
        const {
            assert!(
                I0 != I1 && I0 != I2 && I1 != I2,
                "mutable shuffle indices must be distinct"
            )
        }
        let ptr = self.0.as_mut_ptr();
        // SAFETY: in range and pairwise distinct.
        unsafe { VectorViewMut([&mut *ptr.add(I0), &mut *ptr.add(I1), &mut *ptr.add(I2)]) }
    }

    /// Four-element mutable aliasing view; indices must be pairwise
    /// distinct.
    #[inline]
    pub fn shuffle4_mut<const I0: usize, const I1: usize, const I2: usize, const I3: usize>(
        &mut self,
    ) -> VectorViewMut<'_, T, 4> {
        const { assert!(I0 < N && I1 < N && I2 < N && I3 < N, "shuffle index out of range") }
        const {
            assert!(
                I0 != I1 && I0 != I2 && I0 != I3 && I1 != I2 && I1 != I3 && I2 != I3,
                "mutable shuffle indices must be distinct"
            )
        }
        let ptr = self.0.as_mut_ptr();
        // SAFETY: in range and pairwise distinct.
        unsafe {
            VectorViewMut([
                &mut *ptr.add(I0),
                &mut *ptr.add(I1),
                &mut *ptr.add(I2),
                &mut *ptr.add(I3),
            ])
        }
    }
}
