//! Per-element operation engine
//!
//! The two entry points here implement the combination contract every
//! arithmetic, bitwise and comparison operation in the crate is built on:
//! for each output position, fetch the left element (or a
//! default-constructed one once the left operand is exhausted), fetch the
//! right operand's contribution (positional with padding, or broadcast;
//! see [`Operand`]), apply the operation, and let the operation produce
//! the output element type. Output length and element type are free
//! parameters, defaulting to the left operand's at the operator level.

use crate::traits::{Operand, Scalar};
use crate::vector::Vector;

/// Combine two operands position-by-position into a new vector.
///
/// `op` receives the (possibly default-padded) left element and the right
/// operand's contribution for the position, and returns the output
/// element; conversion to the output type happens inside `op`, normally
/// through [`Scalar::cast`].
///
/// # Example
///
/// ```rust
/// use vega_math::{combine, Scalar, Vec2, Vector};
///
/// let a = Vector::new([1i32, 2, 3]);
/// let b = Vec2::new([10i64, 20]);
/// // four-wide sum in f32: positions past an operand's length read 0
/// let out: Vector<f32, 4> = combine(&a, b, |x, y| (x as i64 + y).cast());
/// assert_eq!(out.to_array(), [11.0, 22.0, 3.0, 0.0]);
/// ```
#[inline]
pub fn combine<L, R, O, const LN: usize, const ON: usize, F>(
    lhs: &Vector<L, LN>,
    rhs: R,
    mut op: F,
) -> Vector<O, ON>
where
    L: Scalar,
    O: Scalar,
    R: Operand<ON>,
    F: FnMut(L, R::Elem) -> O,
{
    Vector::from_fn(|i| {
        let a = if i < LN { lhs.0[i] } else { L::default() };
        op(a, rhs.element(i))
    })
}

/// Map a unary operation over a vector, default-padding past its length.
///
/// With `ON == N` this is an ordinary element-wise map; a longer output
/// applies `op` to default-constructed elements for the extra positions.
///
/// # Example
///
/// ```rust
/// use vega_math::{map, Vector};
///
/// let v = Vector::new([1.0f32, 4.0]);
/// let out: Vector<f32, 3> = map(&v, |x| 1.0 / x);
/// assert_eq!(out.to_array(), [1.0, 0.25, f32::INFINITY]);
/// ```
#[inline]
pub fn map<T, O, const N: usize, const ON: usize, F>(v: &Vector<T, N>, mut op: F) -> Vector<O, ON>
where
    T: Scalar,
    O: Scalar,
    F: FnMut(T) -> O,
{
    Vector::from_fn(|i| {
        let a = if i < N { v.0[i] } else { T::default() };
        op(a)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_same_length() {
        let a = Vector::new([1, 2, 3]);
        let b = Vector::new([10, 20, 30]);
        let out: Vector<i32, 3> = combine(&a, b, |x, y| x + y);
        assert_eq!(out.to_array(), [11, 22, 33]);
    }

    #[test]
    fn combine_pads_exhausted_operands() {
        let a = Vector::new([1, 2]);
        let b = Vector::new([10, 20, 30, 40]);
        let out: Vector<i32, 4> = combine(&a, b, |x, y| x + y);
        // positions 2 and 3 read a default-constructed left element
        assert_eq!(out.to_array(), [11, 22, 30, 40]);
    }

    #[test]
    fn combine_broadcasts_scalars() {
        let a = Vector::new([1.0f32, 2.0, 3.0]);
        let out: Vector<f32, 3> = combine(&a, 10.0f32, |x, y| x * y);
        assert_eq!(out.to_array(), [10.0, 20.0, 30.0]);
    }

    #[test]
    fn combine_converts_to_output_type() {
        let a = Vector::new([1.5f32, 2.5]);
        let b = Vector::new([1.0f32, 1.0]);
        let out: Vector<i32, 2> = combine(&a, b, |x, y| (x + y).cast());
        assert_eq!(out.to_array(), [2, 3]);
    }

    #[test]
    fn map_pads_past_input_length() {
        let v = Vector::new([3i32]);
        let out: Vector<i32, 3> = map(&v, |x| x + 1);
        assert_eq!(out.to_array(), [4, 1, 1]);
    }

    #[test]
    fn output_shorter_than_inputs_truncates() {
        let a = Vector::new([1, 2, 3, 4]);
        let b = Vector::new([1, 1, 1, 1]);
        let out: Vector<i32, 2> = combine(&a, b, |x, y| x - y);
        assert_eq!(out.to_array(), [0, 1]);
    }
}
