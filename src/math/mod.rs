//! Scalar math kernels backing the vector operations

pub mod sqrt;
