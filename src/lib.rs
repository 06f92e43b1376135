#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! vega-math: fixed-size numeric vectors with a uniform per-element engine
//!
//! Small stack-allocated vectors (`Vector<T, N>`, typically 2 to 4 elements)
//! with a single combining engine behind every operator. Mixed lengths are
//! legal and pad the shorter side with the element default; scalars broadcast
//! on either side of an operator.
//!
//! # Features
//!
//! - **One engine, many operators**: arithmetic, bitwise, and comparison ops
//!   all flow through `combine`, so mixed-length and scalar operands behave
//!   identically everywhere
//! - **Geometry**: dot product, magnitude, normalization, cross product,
//!   clamping, interpolation
//! - **Asymmetric comparisons**: elementwise against vectors, magnitude-based
//!   against scalars
//! - **Compile-time shuffles**: index selection checked at compile time, with
//!   borrowed and mutably-aliasing views
//! - **Packed f32x4 path**: an SSE2-backed `F32x4` on x86-64, a portable
//!   fallback elsewhere, behaviorally matched to the generic path
//! - **No allocations**: `no_std`, everything lives on the stack

extern crate libm;

// Element and operand trait definitions
pub mod traits;

// The fixed-size container itself
pub mod vector;

// The per-element combining engine
pub mod engine;

// Operator implementations (arithmetic, bitwise, horizontal reductions)
pub mod ops;

// Dot products, magnitudes, normalization, clamping
pub mod geometry;

// Linear and bilinear interpolation
pub mod interpolate;

// Elementwise and magnitude-based comparison
pub mod cmp;

// Compile-time index shuffles and views
pub mod shuffle;

// Square root strategies and the fast reciprocal square root
pub mod math;

// Packed four-lane float container
pub mod simd;

// Public re-exports for convenience
pub use traits::{FloatScalar, IntScalar, Operand, Scalar};

pub use vector::{Vec2, Vec2f, Vec3, Vec3f, Vec4, Vec4f, Vector, VectorError};

pub use engine::{combine, map};

pub use interpolate::{bilerp, lerp};

pub use shuffle::{VectorView, VectorViewMut};

pub use math::sqrt::{InvSqrtParams, SqrtStrategy};

pub use simd::{F32x4, Mask4};
