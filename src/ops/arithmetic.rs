//! Element-wise arithmetic operators
//!
//! The binary operators accept a right-hand side of any length and
//! element type; the result takes the left operand's length and element
//! type. Evaluation follows the promotion rule: combination happens in
//! the left element type, unless the left side is integral and the right
//! side floating, in which case it happens in the floating type before
//! converting back. A right element that does not fit the left integral
//! type clamps to the nearest representable value rather than vanishing.
//! Exhausted operands contribute default-constructed elements of their
//! own type.
//!
//! Integral division whose output is longer than the divisor would divide
//! by a padded zero on every extra position; that case is rejected at
//! compile time.

use crate::engine::combine;
use crate::traits::{Operand, Scalar};
use crate::vector::Vector;
use core::ops::{Add, Div, Mul, Neg, Sub};

// Combination in the promoted type. Both branches are compiled for every
// (T, U) pair; the descriptor flags select one at monomorphisation time.
// Narrowing the right element clamps out-of-range values to the target's
// bounds, so a valid wide-integral divisor never turns into a zero.
macro_rules! promoted {
    ($a:expr, $b:expr, $op:tt, $T:ty, $U:ty) => {{
        if <$T>::INTEGRAL && <$U>::FLOATING {
            ($a.cast::<$U>() $op $b).cast()
        } else {
            $a $op $b.cast_clamped::<$T>()
        }
    }};
}

macro_rules! impl_vector_binop {
    ($Trait:ident, $method:ident, $sized:ident) => {
        impl<T, U, const N: usize, const M: usize> $Trait<Vector<U, M>> for Vector<T, N>
        where
            T: Scalar,
            U: Scalar,
        {
            type Output = Vector<T, N>;

            #[inline]
            fn $method(self, rhs: Vector<U, M>) -> Vector<T, N> {
                self.$sized(rhs)
            }
        }

        impl<T, U, const N: usize> $Trait<U> for Vector<T, N>
        where
            T: Scalar,
            U: Scalar,
        {
            type Output = Vector<T, N>;

            #[inline]
            fn $method(self, rhs: U) -> Vector<T, N> {
                self.$sized(rhs)
            }
        }
    };
}

impl_vector_binop!(Add, add, add_sized);
impl_vector_binop!(Sub, sub, sub_sized);
impl_vector_binop!(Mul, mul, mul_sized);
impl_vector_binop!(Div, div, div_sized);

impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Scalar + Neg<Output = T>,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Vector::from_fn(|i| -self.0[i])
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Element-wise sum with a selectable output length.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vega_math::{Vec2f, Vector};
    ///
    /// let a = Vec2f::new([1.0, 2.0]);
    /// let b = Vector::new([10.0f32, 20.0, 30.0]);
    /// let wide: Vector<f32, 3> = a.add_sized(b);
    /// assert_eq!(wide.to_array(), [11.0, 22.0, 30.0]);
    /// ```
    #[inline]
    pub fn add_sized<const ON: usize, R: Operand<ON>>(&self, rhs: R) -> Vector<T, ON> {
        combine(self, rhs, |a, b| promoted!(a, b, +, T, R::Elem))
    }

    /// Element-wise difference with a selectable output length.
    #[inline]
    pub fn sub_sized<const ON: usize, R: Operand<ON>>(&self, rhs: R) -> Vector<T, ON> {
        combine(self, rhs, |a, b| promoted!(a, b, -, T, R::Elem))
    }

    /// Element-wise product with a selectable output length.
    #[inline]
    pub fn mul_sized<const ON: usize, R: Operand<ON>>(&self, rhs: R) -> Vector<T, ON> {
        combine(self, rhs, |a, b| promoted!(a, b, *, T, R::Elem))
    }

    /// Element-wise quotient with a selectable output length.
    ///
    /// An integral quotient whose output length exceeds the divisor's
    /// length is a guaranteed division by a padded zero and fails to
    /// compile. Floating divisors follow IEEE semantics: dividing by a
    /// zero or padded element yields an infinity, not an error.
    #[inline]
    pub fn div_sized<const ON: usize, R: Operand<ON>>(&self, rhs: R) -> Vector<T, ON> {
        const {
            assert!(
                ON <= R::LEN || !T::INTEGRAL || !<R::Elem as Scalar>::INTEGRAL,
                "integral division with an output longer than the divisor divides by a padded zero"
            )
        }
        combine(self, rhs, |a, b| promoted!(a, b, /, T, R::Elem))
    }
}

// Scalar-on-the-left forms: `s * v` broadcasts `s` against every position
// and produces a vector of the right operand's element type.
macro_rules! impl_scalar_lhs {
    ($($s:ty),* $(,)?) => {
        $(
            impl<T: Scalar, const N: usize> Add<Vector<T, N>> for $s {
                type Output = Vector<T, N>;

                #[inline]
                fn add(self, rhs: Vector<T, N>) -> Vector<T, N> {
                    Vector::from_fn(|i| self.cast_clamped::<T>() + rhs[i])
                }
            }

            impl<T: Scalar, const N: usize> Sub<Vector<T, N>> for $s {
                type Output = Vector<T, N>;

                #[inline]
                fn sub(self, rhs: Vector<T, N>) -> Vector<T, N> {
                    Vector::from_fn(|i| self.cast_clamped::<T>() - rhs[i])
                }
            }

            impl<T: Scalar, const N: usize> Mul<Vector<T, N>> for $s {
                type Output = Vector<T, N>;

                #[inline]
                fn mul(self, rhs: Vector<T, N>) -> Vector<T, N> {
                    Vector::from_fn(|i| self.cast_clamped::<T>() * rhs[i])
                }
            }

            impl<T: Scalar, const N: usize> Div<Vector<T, N>> for $s {
                type Output = Vector<T, N>;

                #[inline]
                fn div(self, rhs: Vector<T, N>) -> Vector<T, N> {
                    Vector::from_fn(|i| self.cast_clamped::<T>() / rhs[i])
                }
            }
        )*
    };
}

impl_scalar_lhs!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
