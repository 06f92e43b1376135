//! Element-type descriptor traits
//!
//! This module defines the traits that classify vector element types and
//! operand roles. Every question the operation engine asks about a type
//! ("is it integral?", "what does it promote to?", "is this operand a
//! container or a scalar?") is answered here, once, as plain associated
//! items. The rest of the crate consumes the answers through ordinary
//! generic dispatch.

use crate::math::sqrt::{sqrt_newton_f32, sqrt_newton_f64, SqrtStrategy};
use crate::vector::Vector;
use num_traits::{Bounded, Float, Num, NumCast};

/// Descriptor trait for vector element types
///
/// Implemented for the primitive integer and floating-point types. The
/// associated items form the compile-time descriptor the operation engine
/// dispatches on:
///
/// - [`Scalar::Wide`]: the preferred floating-point result type, `f32`
///   for every element type except `f64`, whose wide type is `f64`
/// - [`Scalar::INTEGRAL`] / [`Scalar::FLOATING`]: plain boolean capability
///   flags, usable in `const` contexts
///
/// # Example
///
/// ```rust
/// use vega_math::Scalar;
///
/// assert!(i32::INTEGRAL);
/// assert!(!i32::FLOATING);
/// let widened: f32 = 3i32.cast();
/// assert_eq!(widened, 3.0);
/// ```
pub trait Scalar: Copy + Default + PartialOrd + Num + NumCast + Bounded {
    /// Preferred floating-point type for derived results (magnitudes,
    /// normalisation, dot products).
    type Wide: FloatScalar;

    /// True for the integer element types.
    const INTEGRAL: bool;

    /// True for the floating-point element types.
    const FLOATING: bool;

    /// Numeric conversion to another element type.
    ///
    /// A narrowing conversion whose value cannot be represented in `U`
    /// yields `U::default()`.
    #[inline]
    fn cast<U: Scalar>(self) -> U {
        <U as NumCast>::from(self).unwrap_or_default()
    }

    /// Numeric conversion that clamps unrepresentable values to the
    /// nearest end of `U`'s range.
    ///
    /// The operation engine narrows with this when combining mixed
    /// integral element types, so a valid out-of-range operand (an `i64`
    /// divisor beyond `i32::MAX`, say) keeps its sign and magnitude
    /// direction instead of collapsing to zero.
    #[inline]
    fn cast_clamped<U: Scalar>(self) -> U {
        match <U as NumCast>::from(self) {
            Some(v) => v,
            None if self < Self::zero() => U::min_value(),
            None => U::max_value(),
        }
    }
}

/// Marker-plus-capability trait for integral element types
///
/// Gates the bitwise and modulo operators: applying `&`, `|`, `^`, `!`,
/// `%` or a shift to a vector of floating-point elements is a type error,
/// not a runtime failure.
pub trait IntScalar:
    Scalar
    + core::ops::BitAnd<Output = Self>
    + core::ops::BitOr<Output = Self>
    + core::ops::BitXor<Output = Self>
    + core::ops::Not<Output = Self>
    + core::ops::Shl<u32, Output = Self>
    + core::ops::Shr<u32, Output = Self>
{
}

/// Capability trait for floating-point element types
///
/// Extends [`Scalar`] with the full [`num_traits::Float`] surface (sqrt,
/// rounding, IEEE classification) and the two named square-root
/// strategies used by magnitude computations.
pub trait FloatScalar: Scalar + Float {
    /// Square root via the platform/libm fast path.
    fn sqrt_accurate(self) -> Self;

    /// Square root via the const-evaluable Newton iteration.
    ///
    /// Agrees with [`FloatScalar::sqrt_accurate`] to within a few ULP for
    /// normal inputs; exists so magnitude computations can be evaluated in
    /// `const` contexts (see [`crate::math::sqrt`]).
    fn sqrt_newton(self) -> Self;

    /// Square root with an explicit strategy selection.
    #[inline]
    fn sqrt_with(self, strategy: SqrtStrategy) -> Self {
        match strategy {
            SqrtStrategy::Accurate => self.sqrt_accurate(),
            SqrtStrategy::NewtonConst => self.sqrt_newton(),
        }
    }
}

macro_rules! impl_int_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                type Wide = f32;
                const INTEGRAL: bool = true;
                const FLOATING: bool = false;
            }

            impl IntScalar for $t {}
        )*
    };
}

impl_int_scalar!(i8, i16, i32, i64, u8, u16, u32, u64);

impl Scalar for f32 {
    type Wide = f32;
    const INTEGRAL: bool = false;
    const FLOATING: bool = true;
}

impl Scalar for f64 {
    type Wide = f64;
    const INTEGRAL: bool = false;
    const FLOATING: bool = true;
}

impl FloatScalar for f32 {
    #[inline(always)]
    fn sqrt_accurate(self) -> Self {
        libm::sqrtf(self)
    }

    #[inline(always)]
    fn sqrt_newton(self) -> Self {
        sqrt_newton_f32(self)
    }
}

impl FloatScalar for f64 {
    #[inline(always)]
    fn sqrt_accurate(self) -> Self {
        libm::sqrt(self)
    }

    #[inline(always)]
    fn sqrt_newton(self) -> Self {
        sqrt_newton_f64(self)
    }
}

/// Operand-role classification for the right-hand side of an operation
///
/// Every binary entry point in the engine accepts any `Operand<N>`, where
/// `N` is the output length. The classification is structural:
///
/// - a [`Vector`] of any length `M` combines position-by-position, with
///   positions at or beyond `M` contributing a default-constructed element
///   of the vector's own element type
/// - a bare [`Scalar`] broadcasts to every position
///
/// # Example
///
/// ```rust
/// use vega_math::{Operand, Vec2f};
///
/// let v = Vec2f::new([5.0, 6.0]);
/// assert_eq!(Operand::<4>::element(&v, 1), 6.0);
/// assert_eq!(Operand::<4>::element(&v, 3), 0.0); // padded
/// assert_eq!(Operand::<4>::element(&2.5f32, 3), 2.5); // broadcast
/// ```
pub trait Operand<const N: usize>: Copy {
    /// Element type this operand contributes before conversion.
    type Elem: Scalar;

    /// Declared length: the wrapped vector's length, or `N` for a
    /// broadcast scalar.
    const LEN: usize;

    /// Element at position `i`, default-padded or broadcast as the role
    /// dictates. Valid for any `i`.
    fn element(&self, i: usize) -> Self::Elem;
}

impl<U: Scalar, const N: usize> Operand<N> for U {
    type Elem = U;
    const LEN: usize = N;

    #[inline(always)]
    fn element(&self, _i: usize) -> U {
        *self
    }
}

impl<U: Scalar, const M: usize, const N: usize> Operand<N> for Vector<U, M> {
    type Elem = U;
    const LEN: usize = M;

    #[inline(always)]
    fn element(&self, i: usize) -> U {
        if i < M {
            self[i]
        } else {
            U::default()
        }
    }
}
