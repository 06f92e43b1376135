//! Linear and bilinear interpolation
//!
//! `b` and `t` may each independently be a vector (applied per position,
//! default-padded) or a scalar (broadcast), per the engine's operand
//! rules. Interpolation is evaluated in the weighted form
//! `(1 - t)·a + t·b` so that `t = 0` and `t = 1` reproduce the endpoints
//! exactly, with no floating drift at the boundaries.

use crate::traits::{FloatScalar, Operand, Scalar};
use crate::vector::Vector;

/// Linear interpolation between `a` and `b` at parameter `t`.
///
/// # Example
///
/// ```rust
/// use vega_math::{interpolate::lerp, Vec2f};
///
/// let a = Vec2f::new([0.0, 10.0]);
/// let b = Vec2f::new([10.0, 20.0]);
/// assert_eq!(lerp(&a, b, 0.5f32).to_array(), [5.0, 15.0]);
/// // per-position parameter
/// let t = Vec2f::new([0.0, 1.0]);
/// assert_eq!(lerp(&a, b, t).to_array(), [0.0, 20.0]);
/// ```
#[inline]
pub fn lerp<T, const N: usize, B, W>(a: &Vector<T, N>, b: B, t: W) -> Vector<T, N>
where
    T: FloatScalar,
    B: Operand<N>,
    W: Operand<N>,
{
    Vector::from_fn(|i| {
        let av = a.0[i];
        let bv: T = b.element(i).cast();
        let tv: T = t.element(i).cast();
        (T::one() - tv) * av + tv * bv
    })
}

/// Bilinear interpolation over the quad `a b c d`.
///
/// Defined as `lerp(lerp(a, b, u), lerp(d, c, u), v)`: `u` blends along
/// the `a→b` and `d→c` edges, `v` blends between the two edge results.
#[inline]
pub fn bilerp<T, const N: usize, B, C, U, W>(
    a: &Vector<T, N>,
    b: B,
    c: C,
    d: &Vector<T, N>,
    u: U,
    v: W,
) -> Vector<T, N>
where
    T: FloatScalar,
    B: Operand<N>,
    C: Operand<N>,
    U: Operand<N>,
    W: Operand<N>,
{
    lerp(&lerp(a, b, u), lerp(d, c, u), v)
}

impl<T: FloatScalar, const N: usize> Vector<T, N> {
    /// Linear interpolation from `self` toward `b` at parameter `t`.
    #[inline]
    pub fn lerp<B: Operand<N>, W: Operand<N>>(&self, b: B, t: W) -> Self {
        lerp(self, b, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint() {
        let a = Vector::new([0.0f32, -4.0]);
        let b = Vector::new([2.0f32, 4.0]);
        assert_eq!(lerp(&a, b, 0.5f32).to_array(), [1.0, 0.0]);
    }

    #[test]
    fn boundaries_are_exact() {
        // values chosen so the naive a + t*(b - a) form would drift
        let a = Vector::new([1.0e30f32, 0.1]);
        let b = Vector::new([1.0f32, 0.3]);
        assert_eq!(lerp(&a, b, 0.0f32).to_array(), a.to_array());
        assert_eq!(lerp(&a, b, 1.0f32).to_array(), b.to_array());
    }

    #[test]
    fn scalar_endpoint_broadcasts() {
        let a = Vector::new([0.0f32, 10.0]);
        assert_eq!(lerp(&a, 20.0f32, 0.5f32).to_array(), [10.0, 15.0]);
    }

    #[test]
    fn shorter_parameter_pads_with_zero() {
        let a = Vector::new([1.0f32, 2.0, 3.0]);
        let b = Vector::new([5.0f32, 6.0, 7.0]);
        let t = Vector::new([1.0f32]);
        // padded t reads 0: positions 1 and 2 keep a's values
        assert_eq!(lerp(&a, b, t).to_array(), [5.0, 2.0, 3.0]);
    }

    #[test]
    fn bilinear_corners() {
        let a = Vector::new([0.0f32]);
        let b = Vector::new([1.0f32]);
        let c = Vector::new([2.0f32]);
        let d = Vector::new([3.0f32]);
        assert_eq!(bilerp(&a, b, c, &d, 0.0f32, 0.0f32).to_array(), [0.0]);
        assert_eq!(bilerp(&a, b, c, &d, 1.0f32, 0.0f32).to_array(), [1.0]);
        assert_eq!(bilerp(&a, b, c, &d, 1.0f32, 1.0f32).to_array(), [2.0]);
        assert_eq!(bilerp(&a, b, c, &d, 0.0f32, 1.0f32).to_array(), [3.0]);
    }

    #[test]
    fn bilinear_centre() {
        let a = Vector::new([0.0f32]);
        let b = Vector::new([4.0f32]);
        let c = Vector::new([8.0f32]);
        let d = Vector::new([4.0f32]);
        assert_eq!(bilerp(&a, b, c, &d, 0.5f32, 0.5f32).to_array(), [4.0]);
    }
}
