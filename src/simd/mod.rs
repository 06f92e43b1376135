//! Accelerated 4-wide single-precision container
//!
//! [`F32x4`] stores four `f32` lanes in one hardware vector register and
//! mirrors the generic [`crate::Vector`] operation set with packed
//! instructions: packed arithmetic, packed comparison masks reduced via
//! movemask, shuffle-and-add horizontal reductions, and masked blends for
//! clamping. It is a drop-in alternative to `Vector<f32, 4>`, including
//! the magnitude-based scalar comparison asymmetry, with results that
//! agree within floating-point evaluation-order tolerance, not bit
//! identity.
//!
//! On x86_64 the implementation is SSE2, which is baseline for the
//! architecture, so there is no runtime dispatch. Other architectures get
//! a portable lane-array implementation with the identical surface.

#[cfg(target_arch = "x86_64")]
mod sse;
#[cfg(target_arch = "x86_64")]
pub use sse::{F32x4, Mask4};

#[cfg(not(target_arch = "x86_64"))]
mod fallback;
#[cfg(not(target_arch = "x86_64"))]
pub use fallback::{F32x4, Mask4};
