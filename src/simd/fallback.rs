//! Portable implementation of the 4-wide float container
//!
//! Compiled on architectures without the SSE2 path. The public surface is
//! identical to the SSE implementation lane for lane; operations are
//! plain loops the optimiser is free to vectorise.

#![cfg(not(target_arch = "x86_64"))]

use crate::math::sqrt::{inv_sqrt_f32, InvSqrtParams};
use crate::vector::Vector;
use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Four `f32` lanes, portable layout
///
/// # Example
///
/// ```rust
/// use vega_math::F32x4;
///
/// let a = F32x4::new([1.0, 2.0, 3.0, 4.0]);
/// let b = F32x4::splat(10.0);
/// assert_eq!((a * b).to_array(), [10.0, 20.0, 30.0, 40.0]);
/// assert_eq!(a.element_sum(), 10.0);
/// ```
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct F32x4([f32; 4]);

/// Per-lane comparison result
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Mask4([bool; 4]);

impl Mask4 {
    /// True when every lane is set.
    #[inline]
    pub fn all(self) -> bool {
        self.0[0] && self.0[1] && self.0[2] && self.0[3]
    }

    /// True when at least one lane is set.
    #[inline]
    pub fn any(self) -> bool {
        self.0[0] || self.0[1] || self.0[2] || self.0[3]
    }

    /// True when no lane is set.
    #[inline]
    pub fn none(self) -> bool {
        !self.any()
    }

    /// Lane states in index order.
    #[inline]
    pub fn to_array(self) -> [bool; 4] {
        self.0
    }
}

impl fmt::Debug for Mask4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Mask4").field(&self.0).finish()
    }
}

macro_rules! lanewise {
    ($a:expr, $b:expr, $f:expr) => {{
        let (a, b) = ($a, $b);
        F32x4([
            $f(a.0[0], b.0[0]),
            $f(a.0[1], b.0[1]),
            $f(a.0[2], b.0[2]),
            $f(a.0[3], b.0[3]),
        ])
    }};
}

macro_rules! lane_mask {
    ($a:expr, $b:expr, $f:expr) => {{
        let (a, b) = ($a, $b);
        Mask4([
            $f(a.0[0], b.0[0]),
            $f(a.0[1], b.0[1]),
            $f(a.0[2], b.0[2]),
            $f(a.0[3], b.0[3]),
        ])
    }};
}

impl F32x4 {
    /// Load four lanes in index order.
    #[inline]
    pub fn new(lanes: [f32; 4]) -> Self {
        Self(lanes)
    }

    /// Broadcast one value to all four lanes.
    #[inline]
    pub fn splat(value: f32) -> Self {
        Self([value; 4])
    }

    /// Store the lanes in index order.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        self.0
    }

    /// Lane at a runtime index.
    ///
    /// # Panics
    ///
    /// Panics when `index >= 4`.
    #[inline]
    pub fn lane(self, index: usize) -> f32 {
        self.0[index]
    }

    /// Lane at a runtime index, or `None` when out of range.
    #[inline]
    pub fn get(self, index: usize) -> Option<f32> {
        self.0.get(index).copied()
    }

    /// Lane-wise AND of the raw bit patterns.
    #[inline]
    pub fn and_bits(self, rhs: Self) -> Self {
        lanewise!(self, rhs, |a: f32, b: f32| f32::from_bits(
            a.to_bits() & b.to_bits()
        ))
    }

    /// Lane-wise OR of the raw bit patterns.
    #[inline]
    pub fn or_bits(self, rhs: Self) -> Self {
        lanewise!(self, rhs, |a: f32, b: f32| f32::from_bits(
            a.to_bits() | b.to_bits()
        ))
    }

    /// Lane-wise XOR of the raw bit patterns.
    #[inline]
    pub fn xor_bits(self, rhs: Self) -> Self {
        lanewise!(self, rhs, |a: f32, b: f32| f32::from_bits(
            a.to_bits() ^ b.to_bits()
        ))
    }

    /// Lane-wise absolute value (sign bit cleared).
    #[inline]
    pub fn abs(self) -> Self {
        Self(self.0.map(|a| f32::from_bits(a.to_bits() & 0x7FFF_FFFF)))
    }

    /// Lane-wise minimum.
    #[inline]
    pub fn min(self, rhs: impl Into<Self>) -> Self {
        lanewise!(self, rhs.into(), |a: f32, b: f32| if b < a { b } else { a })
    }

    /// Lane-wise maximum.
    #[inline]
    pub fn max(self, rhs: impl Into<Self>) -> Self {
        lanewise!(self, rhs.into(), |a: f32, b: f32| if b > a { b } else { a })
    }

    /// Clamp every lane into `[lo, hi]`.
    #[inline]
    pub fn clamp(self, lo: impl Into<Self>, hi: impl Into<Self>) -> Self {
        self.max(lo).min(hi)
    }

    /// Lane-wise square root.
    #[inline]
    pub fn sqrt(self) -> Self {
        Self(self.0.map(libm::sqrtf))
    }

    /// Lane-wise reciprocal square root (estimate plus one refinement,
    /// matching the hardware path's accuracy class).
    #[inline]
    pub fn rsqrt(self) -> Self {
        Self(self.0.map(|a| {
            inv_sqrt_f32(
                a,
                InvSqrtParams {
                    magic: 0x5F37_59DF,
                    iterations: 2,
                },
            )
        }))
    }

    /// Lane-wise round toward zero.
    #[inline]
    pub fn trunc(self) -> Self {
        Self(self.0.map(libm::truncf))
    }

    /// Lane-wise round toward negative infinity.
    #[inline]
    pub fn floor(self) -> Self {
        Self(self.0.map(libm::floorf))
    }

    /// Lane-wise round toward positive infinity.
    #[inline]
    pub fn ceil(self) -> Self {
        Self(self.0.map(libm::ceilf))
    }

    /// Per lane: `mask ? a : b`.
    #[inline]
    pub fn select(mask: Mask4, a: Self, b: Self) -> Self {
        Self(core::array::from_fn(|i| {
            if mask.0[i] {
                a.0[i]
            } else {
                b.0[i]
            }
        }))
    }

    /// Lane mask of `self == rhs`.
    #[inline]
    pub fn eq_mask(self, rhs: impl Into<Self>) -> Mask4 {
        lane_mask!(self, rhs.into(), |a, b| a == b)
    }

    /// Lane mask of `self != rhs`.
    #[inline]
    pub fn ne_mask(self, rhs: impl Into<Self>) -> Mask4 {
        lane_mask!(self, rhs.into(), |a, b| a != b)
    }

    /// Lane mask of `self < rhs`.
    #[inline]
    pub fn lt_mask(self, rhs: impl Into<Self>) -> Mask4 {
        lane_mask!(self, rhs.into(), |a, b| a < b)
    }

    /// Lane mask of `self <= rhs`.
    #[inline]
    pub fn le_mask(self, rhs: impl Into<Self>) -> Mask4 {
        lane_mask!(self, rhs.into(), |a, b| a <= b)
    }

    /// Lane mask of `self > rhs`.
    #[inline]
    pub fn gt_mask(self, rhs: impl Into<Self>) -> Mask4 {
        lane_mask!(self, rhs.into(), |a, b| a > b)
    }

    /// Lane mask of `self >= rhs`.
    #[inline]
    pub fn ge_mask(self, rhs: impl Into<Self>) -> Mask4 {
        lane_mask!(self, rhs.into(), |a, b| a >= b)
    }

    /// True when every lane compares equal.
    #[inline]
    pub fn cmp_all_equal(self, rhs: impl Into<Self>) -> bool {
        self.eq_mask(rhs).all()
    }

    /// True when any lane compares equal.
    #[inline]
    pub fn cmp_any_equal(self, rhs: impl Into<Self>) -> bool {
        self.eq_mask(rhs).any()
    }

    /// True when every lane is less.
    #[inline]
    pub fn cmp_all_less(self, rhs: impl Into<Self>) -> bool {
        self.lt_mask(rhs).all()
    }

    /// True when any lane is less.
    #[inline]
    pub fn cmp_any_less(self, rhs: impl Into<Self>) -> bool {
        self.lt_mask(rhs).any()
    }

    /// True when every lane is greater.
    #[inline]
    pub fn cmp_all_greater(self, rhs: impl Into<Self>) -> bool {
        self.gt_mask(rhs).all()
    }

    /// True when any lane is greater.
    #[inline]
    pub fn cmp_any_greater(self, rhs: impl Into<Self>) -> bool {
        self.gt_mask(rhs).any()
    }

    /// Sum of the four lanes, pairwise to match the hardware reduction
    /// order.
    #[inline]
    pub fn element_sum(self) -> f32 {
        (self.0[0] + self.0[1]) + (self.0[2] + self.0[3])
    }

    /// Smallest lane.
    #[inline]
    pub fn min_element(self) -> f32 {
        let lo = if self.0[1] < self.0[0] { self.0[1] } else { self.0[0] };
        let hi = if self.0[3] < self.0[2] { self.0[3] } else { self.0[2] };
        if hi < lo {
            hi
        } else {
            lo
        }
    }

    /// Largest lane.
    #[inline]
    pub fn max_element(self) -> f32 {
        let lo = if self.0[1] > self.0[0] { self.0[1] } else { self.0[0] };
        let hi = if self.0[3] > self.0[2] { self.0[3] } else { self.0[2] };
        if hi > lo {
            hi
        } else {
            lo
        }
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, rhs: impl Into<Self>) -> f32 {
        (self * rhs.into()).element_sum()
    }

    /// Squared Euclidean length.
    #[inline]
    pub fn square_magnitude(self) -> f32 {
        self.dot(self)
    }

    /// Euclidean length.
    #[inline]
    pub fn magnitude(self) -> f32 {
        libm::sqrtf(self.square_magnitude())
    }

    /// Unit-length copy.
    #[inline]
    pub fn normalized(self) -> Self {
        self * Self::splat(1.0 / self.magnitude())
    }

    /// Unit-length copy via the fast reciprocal square root.
    #[inline]
    pub fn normalized_fast(self, params: InvSqrtParams) -> Self {
        self * Self::splat(inv_sqrt_f32(self.square_magnitude(), params))
    }

    /// Linear interpolation toward `b` at parameter `t`, per lane.
    #[inline]
    pub fn lerp(self, b: impl Into<Self>, t: impl Into<Self>) -> Self {
        let b = b.into();
        let t = t.into();
        let one_minus = Self::splat(1.0) - t;
        self * one_minus + b * t
    }
}

impl Default for F32x4 {
    #[inline]
    fn default() -> Self {
        Self::splat(0.0)
    }
}

impl Add for F32x4 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        lanewise!(self, rhs, |a, b| a + b)
    }
}

impl Sub for F32x4 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        lanewise!(self, rhs, |a, b| a - b)
    }
}

impl Mul for F32x4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        lanewise!(self, rhs, |a, b| a * b)
    }
}

impl Div for F32x4 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        lanewise!(self, rhs, |a, b| a / b)
    }
}

impl Add<f32> for F32x4 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: f32) -> Self {
        self + Self::splat(rhs)
    }
}

impl Sub<f32> for F32x4 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: f32) -> Self {
        self - Self::splat(rhs)
    }
}

impl Mul<f32> for F32x4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self * Self::splat(rhs)
    }
}

impl Div<f32> for F32x4 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        self / Self::splat(rhs)
    }
}

impl Neg for F32x4 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(self.0.map(|a| -a))
    }
}

impl From<[f32; 4]> for F32x4 {
    #[inline]
    fn from(lanes: [f32; 4]) -> Self {
        Self(lanes)
    }
}

impl From<f32> for F32x4 {
    #[inline]
    fn from(value: f32) -> Self {
        Self::splat(value)
    }
}

impl From<Vector<f32, 4>> for F32x4 {
    #[inline]
    fn from(v: Vector<f32, 4>) -> Self {
        Self(v.to_array())
    }
}

impl From<F32x4> for Vector<f32, 4> {
    #[inline]
    fn from(v: F32x4) -> Self {
        Vector::new(v.0)
    }
}

impl From<F32x4> for [f32; 4] {
    #[inline]
    fn from(v: F32x4) -> Self {
        v.0
    }
}

impl PartialEq for F32x4 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp_all_equal(*other)
    }
}

impl PartialEq<f32> for F32x4 {
    #[inline]
    fn eq(&self, other: &f32) -> bool {
        self.square_magnitude() == *other
    }
}

impl PartialOrd<f32> for F32x4 {
    #[inline]
    fn partial_cmp(&self, other: &f32) -> Option<Ordering> {
        self.magnitude().partial_cmp(other)
    }
}

impl fmt::Debug for F32x4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("F32x4").field(&self.0).finish()
    }
}

impl fmt::Display for F32x4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ {}, {}, {}, {} }}",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}
