//! SSE2 implementation of the 4-wide float container
//!
//! SSE2 is part of the x86_64 baseline, so every intrinsic here is
//! unconditionally available; the `unsafe` blocks only discharge the
//! intrinsic signatures. Rounding uses SSE2 convert-and-correct
//! sequences rather than SSE4.1 rounding instructions, keeping the type
//! usable on any x86_64 CPU.

#![cfg(target_arch = "x86_64")]

use crate::math::sqrt::{inv_sqrt_f32, InvSqrtParams};
use crate::vector::Vector;
use core::arch::x86_64::*;
use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

// 2^23: lanes at or above this magnitude are already integral, and
// cvttps would overflow on them.
const ROUND_LIMIT: f32 = 8_388_608.0;

/// Four packed `f32` lanes in one SSE register
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
pub struct F32x4(__m128);

/// Per-lane comparison result
///
/// Produced by the `*_mask` comparisons; reduced to a boolean with
/// [`Mask4::all`] / [`Mask4::any`] or used to blend with
/// [`F32x4::select`].
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Mask4(__m128);

impl Mask4 {
    #[inline(always)]
    fn bits(self) -> i32 {
        unsafe { _mm_movemask_ps(self.0) }
    }

    /// True when every lane is set.
    #[inline(always)]
    pub fn all(self) -> bool {
        self.bits() == 0b1111
    }

    /// True when at least one lane is set.
    #[inline(always)]
    pub fn any(self) -> bool {
        self.bits() != 0
    }

    /// True when no lane is set.
    #[inline(always)]
    pub fn none(self) -> bool {
        self.bits() == 0
    }

    /// Lane states in index order.
    #[inline]
    pub fn to_array(self) -> [bool; 4] {
        let b = self.bits();
        [b & 1 != 0, b & 2 != 0, b & 4 != 0, b & 8 != 0]
    }
}

impl fmt::Debug for Mask4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Mask4").field(&self.to_array()).finish()
    }
}

impl F32x4 {
    /// Load four lanes in index order.
    #[inline(always)]
    pub fn new(lanes: [f32; 4]) -> Self {
        unsafe { Self(_mm_loadu_ps(lanes.as_ptr())) }
    }

    /// Broadcast one value to all four lanes.
    #[inline(always)]
    pub fn splat(value: f32) -> Self {
        unsafe { Self(_mm_set1_ps(value)) }
    }

    /// Store the lanes in index order.
    #[inline(always)]
    pub fn to_array(self) -> [f32; 4] {
        let mut out = [0.0f32; 4];
        unsafe { _mm_storeu_ps(out.as_mut_ptr(), self.0) };
        out
    }

    /// Lane at a runtime index.
    ///
    /// # Panics
    ///
    /// Panics when `index >= 4`.
    #[inline]
    pub fn lane(self, index: usize) -> f32 {
        self.to_array()[index]
    }

    /// Lane at a runtime index, or `None` when out of range.
    #[inline]
    pub fn get(self, index: usize) -> Option<f32> {
        self.to_array().get(index).copied()
    }

    // Packed bitwise operations on the raw lane bits.

    /// Lane-wise AND of the raw bit patterns.
    #[inline(always)]
    pub fn and_bits(self, rhs: Self) -> Self {
        unsafe { Self(_mm_and_ps(self.0, rhs.0)) }
    }

    /// Lane-wise OR of the raw bit patterns.
    #[inline(always)]
    pub fn or_bits(self, rhs: Self) -> Self {
        unsafe { Self(_mm_or_ps(self.0, rhs.0)) }
    }

    /// Lane-wise XOR of the raw bit patterns.
    #[inline(always)]
    pub fn xor_bits(self, rhs: Self) -> Self {
        unsafe { Self(_mm_xor_ps(self.0, rhs.0)) }
    }

    /// Lane-wise absolute value (sign bit cleared).
    #[inline(always)]
    pub fn abs(self) -> Self {
        unsafe { Self(_mm_andnot_ps(_mm_set1_ps(-0.0), self.0)) }
    }

    /// Lane-wise minimum.
    #[inline(always)]
    pub fn min(self, rhs: impl Into<Self>) -> Self {
        unsafe { Self(_mm_min_ps(self.0, rhs.into().0)) }
    }

    /// Lane-wise maximum.
    #[inline(always)]
    pub fn max(self, rhs: impl Into<Self>) -> Self {
        unsafe { Self(_mm_max_ps(self.0, rhs.into().0)) }
    }

    /// Clamp every lane into `[lo, hi]` with packed min/max.
    #[inline(always)]
    pub fn clamp(self, lo: impl Into<Self>, hi: impl Into<Self>) -> Self {
        self.max(lo).min(hi)
    }

    /// Packed square root.
    #[inline(always)]
    pub fn sqrt(self) -> Self {
        unsafe { Self(_mm_sqrt_ps(self.0)) }
    }

    /// Packed reciprocal square root: hardware estimate plus one Newton
    /// refinement step.
    #[inline(always)]
    pub fn rsqrt(self) -> Self {
        unsafe {
            let est = _mm_rsqrt_ps(self.0);
            // y = est * (1.5 - 0.5 * x * est^2)
            let half_x = _mm_mul_ps(_mm_set1_ps(0.5), self.0);
            let ee = _mm_mul_ps(est, est);
            let corr = _mm_sub_ps(_mm_set1_ps(1.5), _mm_mul_ps(half_x, ee));
            Self(_mm_mul_ps(est, corr))
        }
    }

    /// Lane-wise round toward zero.
    #[inline]
    pub fn trunc(self) -> Self {
        unsafe {
            let t = _mm_cvtepi32_ps(_mm_cvttps_epi32(self.0));
            let small = _mm_cmplt_ps(self.abs().0, _mm_set1_ps(ROUND_LIMIT));
            // large or NaN lanes pass through unchanged
            Self(Self::blend_raw(small, t, self.0))
        }
    }

    /// Lane-wise round toward negative infinity.
    #[inline]
    pub fn floor(self) -> Self {
        unsafe {
            let t = self.trunc().0;
            // truncation rounded a negative fraction up: subtract one
            let overshoot = _mm_cmpgt_ps(t, self.0);
            let corr = _mm_and_ps(overshoot, _mm_set1_ps(1.0));
            Self(_mm_sub_ps(t, corr))
        }
    }

    /// Lane-wise round toward positive infinity.
    #[inline]
    pub fn ceil(self) -> Self {
        unsafe {
            let t = self.trunc().0;
            let undershoot = _mm_cmplt_ps(t, self.0);
            let corr = _mm_and_ps(undershoot, _mm_set1_ps(1.0));
            Self(_mm_add_ps(t, corr))
        }
    }

    #[inline(always)]
    unsafe fn blend_raw(mask: __m128, a: __m128, b: __m128) -> __m128 {
        _mm_or_ps(_mm_and_ps(mask, a), _mm_andnot_ps(mask, b))
    }

    /// Per lane: `mask ? a : b`.
    #[inline(always)]
    pub fn select(mask: Mask4, a: Self, b: Self) -> Self {
        unsafe { Self(Self::blend_raw(mask.0, a.0, b.0)) }
    }

    // Packed comparisons producing lane masks.

    /// Lane mask of `self == rhs`.
    #[inline(always)]
    pub fn eq_mask(self, rhs: impl Into<Self>) -> Mask4 {
        unsafe { Mask4(_mm_cmpeq_ps(self.0, rhs.into().0)) }
    }

    /// Lane mask of `self != rhs`.
    #[inline(always)]
    pub fn ne_mask(self, rhs: impl Into<Self>) -> Mask4 {
        unsafe { Mask4(_mm_cmpneq_ps(self.0, rhs.into().0)) }
    }

    /// Lane mask of `self < rhs`.
    #[inline(always)]
    pub fn lt_mask(self, rhs: impl Into<Self>) -> Mask4 {
        unsafe { Mask4(_mm_cmplt_ps(self.0, rhs.into().0)) }
    }

    /// Lane mask of `self <= rhs`.
    #[inline(always)]
    pub fn le_mask(self, rhs: impl Into<Self>) -> Mask4 {
        unsafe { Mask4(_mm_cmple_ps(self.0, rhs.into().0)) }
    }

    /// Lane mask of `self > rhs`.
    #[inline(always)]
    pub fn gt_mask(self, rhs: impl Into<Self>) -> Mask4 {
        unsafe { Mask4(_mm_cmpgt_ps(self.0, rhs.into().0)) }
    }

    /// Lane mask of `self >= rhs`.
    #[inline(always)]
    pub fn ge_mask(self, rhs: impl Into<Self>) -> Mask4 {
        unsafe { Mask4(_mm_cmpge_ps(self.0, rhs.into().0)) }
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

    /// Sum of the four lanes via a shuffle-and-add reduction.
    #[inline]
    pub fn element_sum(self) -> f32 {
        unsafe {
            // [a,b,c,d] + [b,a,d,c] = [a+b, a+b, c+d, c+d]
            let shuf = _mm_shuffle_ps::<0b10_11_00_01>(self.0, self.0);
            let sums = _mm_add_ps(self.0, shuf);
            let high = _mm_movehl_ps(shuf, sums);
            _mm_cvtss_f32(_mm_add_ss(sums, high))
        }
    }

    /// Smallest lane.
    #[inline]
    pub fn min_element(self) -> f32 {
        unsafe {
            let shuf = _mm_shuffle_ps::<0b10_11_00_01>(self.0, self.0);
            let mins = _mm_min_ps(self.0, shuf);
            let high = _mm_movehl_ps(shuf, mins);
            _mm_cvtss_f32(_mm_min_ss(mins, high))
        }
    }

    /// Largest lane.
    #[inline]
    pub fn max_element(self) -> f32 {
        unsafe {
            let shuf = _mm_shuffle_ps::<0b10_11_00_01>(self.0, self.0);
            let maxs = _mm_max_ps(self.0, shuf);
            let high = _mm_movehl_ps(shuf, maxs);
            _mm_cvtss_f32(_mm_max_ss(maxs, high))
        }
    }

    /// Dot product: packed multiply, horizontal sum.
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
        unsafe {
            let sq = _mm_set_ss(self.square_magnitude());
            _mm_cvtss_f32(_mm_sqrt_ss(sq))
        }
    }

    /// Unit-length copy.
    #[inline]
    pub fn normalized(self) -> Self {
        self * Self::splat(1.0 / self.magnitude())
    }

    /// Unit-length copy via the fast reciprocal square root (see
    /// [`InvSqrtParams`]).
    #[inline]
    pub fn normalized_fast(self, params: InvSqrtParams) -> Self {
        self * Self::splat(inv_sqrt_f32(self.square_magnitude(), params))
    }

    /// Linear interpolation toward `b` at parameter `t`, per lane.
    ///
    /// Weighted form: `t = 0` and `t = 1` reproduce the endpoints
    /// exactly.
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

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { Self(_mm_add_ps(self.0, rhs.0)) }
    }
}

impl Sub for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { Self(_mm_sub_ps(self.0, rhs.0)) }
    }
}

impl Mul for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        unsafe { Self(_mm_mul_ps(self.0, rhs.0)) }
    }
}

impl Div for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        unsafe { Self(_mm_div_ps(self.0, rhs.0)) }
    }
}

impl Add<f32> for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: f32) -> Self {
        self + Self::splat(rhs)
    }
}

impl Sub<f32> for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: f32) -> Self {
        self - Self::splat(rhs)
    }
}

impl Mul<f32> for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: f32) -> Self {
        self * Self::splat(rhs)
    }
}

impl Div<f32> for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: f32) -> Self {
        self / Self::splat(rhs)
    }
}

impl Neg for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        unsafe { Self(_mm_xor_ps(self.0, _mm_set1_ps(-0.0))) }
    }
}

impl From<[f32; 4]> for F32x4 {
    #[inline]
    fn from(lanes: [f32; 4]) -> Self {
        Self::new(lanes)
    }
}

impl From<f32> for F32x4 {
    #[inline]
    fn from(value: f32) -> Self {
        Self::splat(value)
    }
}

// Conversion to and from the generic container is a straight copy of the
// four lanes in index order.
impl From<Vector<f32, 4>> for F32x4 {
    #[inline]
    fn from(v: Vector<f32, 4>) -> Self {
        unsafe { Self(_mm_loadu_ps(v.as_ptr())) }
    }
}

impl From<F32x4> for Vector<f32, 4> {
    #[inline]
    fn from(v: F32x4) -> Self {
        Vector::new(v.to_array())
    }
}

impl From<F32x4> for [f32; 4] {
    #[inline]
    fn from(v: F32x4) -> Self {
        v.to_array()
    }
}

// All-lanes equality with a packed rhs; magnitude comparison with a
// scalar rhs, matching the generic container's asymmetric contract.
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
        f.debug_tuple("F32x4").field(&self.to_array()).finish()
    }
}

impl fmt::Display for F32x4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lanes = self.to_array();
        write!(
            f,
            "{{ {}, {}, {}, {} }}",
            lanes[0], lanes[1], lanes[2], lanes[3]
        )
    }
}
