//! Element-wise bitwise and modulo operators
//!
//! Available only for integral element types; applying any of these to a
//! floating-point vector fails to compile via the [`IntScalar`] bound.

use crate::engine::combine;
use crate::traits::{IntScalar, Operand, Scalar};
use crate::vector::Vector;
use core::ops::{BitAnd, BitOr, BitXor, Not, Rem, Shl, Shr};

macro_rules! impl_bit_binop {
    ($Trait:ident, $method:ident, $op:tt) => {
        impl<T, U, const N: usize, const M: usize> $Trait<Vector<U, M>> for Vector<T, N>
        where
            T: IntScalar,
            U: IntScalar,
        {
            type Output = Vector<T, N>;

            #[inline]
            fn $method(self, rhs: Vector<U, M>) -> Vector<T, N> {
                combine(&self, rhs, |a, b| a $op b.cast::<T>())
            }
        }

        impl<T, U, const N: usize> $Trait<U> for Vector<T, N>
        where
            T: IntScalar,
            U: IntScalar,
        {
            type Output = Vector<T, N>;

            #[inline]
            fn $method(self, rhs: U) -> Vector<T, N> {
                combine(&self, rhs, |a, b| a $op b.cast::<T>())
            }
        }
    };
}

impl_bit_binop!(BitAnd, bitand, &);
impl_bit_binop!(BitOr, bitor, |);
impl_bit_binop!(BitXor, bitxor, ^);

impl<T, U, const N: usize, const M: usize> Rem<Vector<U, M>> for Vector<T, N>
where
    T: IntScalar,
    U: IntScalar,
{
    type Output = Vector<T, N>;

    #[inline]
    fn rem(self, rhs: Vector<U, M>) -> Vector<T, N> {
        self.rem_sized(rhs)
    }
}

impl<T, U, const N: usize> Rem<U> for Vector<T, N>
where
    T: IntScalar,
    U: IntScalar,
{
    type Output = Vector<T, N>;

    #[inline]
    fn rem(self, rhs: U) -> Vector<T, N> {
        self.rem_sized(rhs)
    }
}

impl<T: IntScalar, const N: usize> Not for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Vector::from_fn(|i| !self.0[i])
    }
}

impl<T: IntScalar, const N: usize> Shl<u32> for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn shl(self, count: u32) -> Self {
        Vector::from_fn(|i| self.0[i] << count)
    }
}

impl<T: IntScalar, const N: usize> Shr<u32> for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn shr(self, count: u32) -> Self {
        Vector::from_fn(|i| self.0[i] >> count)
    }
}

impl<T: IntScalar, const N: usize> Vector<T, N> {
    /// Element-wise remainder with a selectable output length.
    ///
    /// Like division, a remainder whose output length exceeds the
    /// divisor's length would reduce modulo a padded zero on every extra
    /// position; that case fails to compile.
    #[inline]
    pub fn rem_sized<const ON: usize, R>(&self, rhs: R) -> Vector<T, ON>
    where
        R: Operand<ON>,
        R::Elem: IntScalar,
    {
        const {
            assert!(
                ON <= R::LEN,
                "integral remainder with an output longer than the divisor reduces modulo a padded zero"
            )
        }
        combine(self, rhs, |a, b| a % b.cast_clamped::<T>())
    }
}
