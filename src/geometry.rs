//! Geometric operations
//!
//! Dot products, magnitudes, normalisation, reciprocals, clamping and
//! element-wise min/max, all built on the operation engine. Derived
//! floating results use the element type's preferred wide float
//! ([`Scalar::Wide`]): `f32` for every element type except `f64`.

use crate::engine::{combine, map};
use crate::math::sqrt::{inv_sqrt_f32, InvSqrtParams, SqrtStrategy};
use crate::traits::{FloatScalar, Operand, Scalar};
use crate::vector::Vector;
use num_traits::{Float, One, Signed};

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Dot product in an explicitly chosen output type.
    ///
    /// Sums `self[i] * rhs[i]` over the shorter of the two lengths;
    /// positions beyond it contribute zero, since a default-constructed
    /// factor is the additive identity after conversion.
    #[inline]
    pub fn dot_in<O, U, const M: usize>(&self, rhs: &Vector<U, M>) -> O
    where
        O: Scalar,
        U: Scalar,
    {
        let len = if N < M { N } else { M };
        let mut acc = O::zero();
        for i in 0..len {
            acc = acc + self.0[i].cast::<O>() * rhs.0[i].cast::<O>();
        }
        acc
    }

    /// Dot product in the preferred wide float type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vega_math::Vec3f;
    ///
    /// let a = Vec3f::new([1.0, 2.0, 3.0]);
    /// let b = Vec3f::new([4.0, 5.0, 6.0]);
    /// assert_eq!(a.dot(&b), 32.0);
    /// ```
    #[inline]
    pub fn dot<U, const M: usize>(&self, rhs: &Vector<U, M>) -> T::Wide
    where
        U: Scalar,
    {
        self.dot_in(rhs)
    }

    /// Squared Euclidean length: `dot(self, self)`.
    #[inline]
    pub fn square_magnitude(&self) -> T::Wide {
        self.dot(self)
    }

    /// Euclidean length, via the fast square-root path.
    #[inline]
    pub fn magnitude(&self) -> T::Wide {
        self.square_magnitude().sqrt_accurate()
    }

    /// Euclidean length with an explicit square-root strategy.
    ///
    /// The two strategies agree within a few ULP for typical inputs but
    /// are not bit-identical; see [`crate::math::sqrt`].
    #[inline]
    pub fn magnitude_with(&self, strategy: SqrtStrategy) -> T::Wide {
        self.square_magnitude().sqrt_with(strategy)
    }

    /// Unit-length copy in the wide float type.
    ///
    /// Every element is multiplied by the reciprocal of the magnitude. A
    /// zero vector produces non-finite elements per IEEE semantics rather
    /// than an error.
    #[inline]
    pub fn normalized(&self) -> Vector<T::Wide, N> {
        let inv = T::Wide::one() / self.magnitude();
        map(self, |a| a.cast::<T::Wide>() * inv)
    }

    /// Element-wise reciprocal with a selectable output length.
    ///
    /// Zero and padded elements yield infinity, per IEEE, not an error.
    #[inline]
    pub fn recip_sized<const ON: usize>(&self) -> Vector<T::Wide, ON> {
        map(self, |a| T::Wide::one() / a.cast::<T::Wide>())
    }

    /// Element-wise reciprocal.
    #[inline]
    pub fn recip(&self) -> Vector<T::Wide, N> {
        self.recip_sized()
    }

    /// Cross product of the first three components, in the wide type.
    #[inline]
    pub fn cross<U>(&self, rhs: &Vector<U, N>) -> Vector<T::Wide, 3>
    where
        U: Scalar,
    {
        const { assert!(N >= 3, "cross product requires three components") }
        let a: Vector<T::Wide, 3> = Vector::from_vector(self);
        let b: Vector<T::Wide, 3> = Vector::from_vector(rhs);
        Vector::new([
            a.0[1] * b.0[2] - a.0[2] * b.0[1],
            a.0[2] * b.0[0] - a.0[0] * b.0[2],
            a.0[0] * b.0[1] - a.0[1] * b.0[0],
        ])
    }

    /// Raise every element below `bound` up to it.
    ///
    /// `bound` may be a vector (applied per position, default-padded) or
    /// a scalar (broadcast).
    #[inline]
    pub fn clamp_min<R: Operand<N>>(&self, bound: R) -> Self {
        combine(self, bound, |a, b| {
            let b = b.cast::<T>();
            if a < b {
                b
            } else {
                a
            }
        })
    }

    /// Lower every element above `bound` down to it.
    #[inline]
    pub fn clamp_max<R: Operand<N>>(&self, bound: R) -> Self {
        combine(self, bound, |a, b| {
            let b = b.cast::<T>();
            if a > b {
                b
            } else {
                a
            }
        })
    }

    /// Clamp every element into `[lo, hi]`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vega_math::Vec4f;
    ///
    /// let v = Vec4f::new([-2.0, 0.25, 0.75, 2.0]);
    /// assert_eq!(v.clamp(0.0f32, 1.0f32).to_array(), [0.0, 0.25, 0.75, 1.0]);
    /// ```
    #[inline]
    pub fn clamp<Lo: Operand<N>, Hi: Operand<N>>(&self, lo: Lo, hi: Hi) -> Self {
        self.clamp_min(lo).clamp_max(hi)
    }

    /// Element-wise minimum against a vector or broadcast scalar.
    #[inline]
    pub fn min_with<R: Operand<N>>(&self, rhs: R) -> Self {
        combine(self, rhs, |a, b| {
            let b = b.cast::<T>();
            if b < a {
                b
            } else {
                a
            }
        })
    }

    /// Element-wise maximum against a vector or broadcast scalar.
    #[inline]
    pub fn max_with<R: Operand<N>>(&self, rhs: R) -> Self {
        combine(self, rhs, |a, b| {
            let b = b.cast::<T>();
            if b > a {
                b
            } else {
                a
            }
        })
    }
}

impl<T: Scalar + Signed, const N: usize> Vector<T, N> {
    /// Element-wise absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        map(self, |a| a.abs())
    }
}

impl<T: FloatScalar, const N: usize> Vector<T, N> {
    /// Element-wise round toward negative infinity.
    #[inline]
    pub fn floor(&self) -> Self {
        map(self, Float::floor)
    }

    /// Element-wise round toward positive infinity.
    #[inline]
    pub fn ceil(&self) -> Self {
        map(self, Float::ceil)
    }

    /// Element-wise round toward zero.
    #[inline]
    pub fn trunc(&self) -> Self {
        map(self, Float::trunc)
    }
}

impl<const N: usize> Vector<f32, N> {
    /// Unit-length copy via the fast reciprocal square root.
    ///
    /// Uses the bit-reinterpretation estimate refined by
    /// `params.iterations` Newton steps; magic constant and iteration
    /// count are caller-selectable (see [`InvSqrtParams`]).
    #[inline]
    pub fn normalized_fast(&self, params: InvSqrtParams) -> Self {
        let inv = inv_sqrt_f32(self.square_magnitude(), params);
        map(self, |a| a * inv)
    }
}
