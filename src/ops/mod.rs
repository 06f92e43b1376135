//! Operator implementations over the operation engine
//!
//! - [`arithmetic`]: `+ - * /` (operators and sized named forms) with the
//!   numeric promotion and static divide-by-zero rules
//! - [`bitwise`]: `& | ^ ! % << >>`, available only for integral elements
//! - [`horizontal`]: whole-container reductions (sum, product, min/max)

pub mod arithmetic;
pub mod bitwise;
pub mod horizontal;
