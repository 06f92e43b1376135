//! Comparison subsystem
//!
//! Two observably distinct families:
//!
//! 1. **Any/All combinators** (`cmp_all_*`, `cmp_any_*`): element-wise
//!    comparison (broadcasting a scalar, default-padding a vector to the
//!    longer length, or, in the `_short` variants, testing only the
//!    shorter length), reduced with logical AND or OR.
//! 2. **Direct relational operators**: with a vector right-hand side the
//!    operators `==`, `<`, `<=`, `>` and `>=` behave like the element-wise
//!    ALL form. `!=` is the one exception: `PartialEq` defines `ne` as the
//!    negation of `eq`, so `a != b` is true when ANY position differs.
//!    The strict all-positions form is [`Vector::cmp_all_not_equal`].
//!    With a scalar right-hand side the operators do NOT compare
//!    element-wise: equality operators compare the square magnitude
//!    against the scalar, ordering operators compare the magnitude. This
//!    asymmetry is intentional and load-bearing: `v == s` asks "does v
//!    have squared length s", while `v.cmp_all_equal(s)` asks "is every
//!    element equal to s".
//!
//! A single generic predicate combinator implements all six relations.

use crate::traits::{Operand, Scalar};
use crate::vector::Vector;
use core::cmp::Ordering;

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// True when `pred` holds at every position, padded to the longer
    /// operand's length.
    #[inline]
    pub fn cmp_all_with<R, F>(&self, rhs: R, mut pred: F) -> bool
    where
        R: Operand<N>,
        F: FnMut(T, R::Elem) -> bool,
    {
        let len = if N > R::LEN { N } else { R::LEN };
        for i in 0..len {
            let a = if i < N { self.0[i] } else { T::default() };
            if !pred(a, rhs.element(i)) {
                return false;
            }
        }
        true
    }

    /// True when `pred` holds at any position, padded to the longer
    /// operand's length.
    #[inline]
    pub fn cmp_any_with<R, F>(&self, rhs: R, mut pred: F) -> bool
    where
        R: Operand<N>,
        F: FnMut(T, R::Elem) -> bool,
    {
        let len = if N > R::LEN { N } else { R::LEN };
        for i in 0..len {
            let a = if i < N { self.0[i] } else { T::default() };
            if pred(a, rhs.element(i)) {
                return true;
            }
        }
        false
    }

    /// ALL combinator testing only the shorter operand's length (the
    /// opt-out from default-padding).
    #[inline]
    pub fn cmp_all_with_short<R, F>(&self, rhs: R, mut pred: F) -> bool
    where
        R: Operand<N>,
        F: FnMut(T, R::Elem) -> bool,
    {
        let len = if N < R::LEN { N } else { R::LEN };
        for i in 0..len {
            if !pred(self.0[i], rhs.element(i)) {
                return false;
            }
        }
        true
    }

    /// ANY combinator testing only the shorter operand's length.
    #[inline]
    pub fn cmp_any_with_short<R, F>(&self, rhs: R, mut pred: F) -> bool
    where
        R: Operand<N>,
        F: FnMut(T, R::Elem) -> bool,
    {
        let len = if N < R::LEN { N } else { R::LEN };
        for i in 0..len {
            if pred(self.0[i], rhs.element(i)) {
                return true;
            }
        }
        false
    }
}

macro_rules! named_cmp {
    ($($all:ident, $any:ident, $op:tt, $desc:literal;)*) => {
        impl<T: Scalar, const N: usize> Vector<T, N> {
            $(
                #[doc = concat!("True when every position is ", $desc, " the right-hand contribution.")]
                #[inline]
                pub fn $all<R: Operand<N>>(&self, rhs: R) -> bool {
                    self.cmp_all_with(rhs, |a, b| a $op b.cast::<T>())
                }

                #[doc = concat!("True when any position is ", $desc, " the right-hand contribution.")]
                #[inline]
                pub fn $any<R: Operand<N>>(&self, rhs: R) -> bool {
                    self.cmp_any_with(rhs, |a, b| a $op b.cast::<T>())
                }
            )*
        }
    };
}

named_cmp! {
    cmp_all_equal, cmp_any_equal, ==, "equal to";
    cmp_all_not_equal, cmp_any_not_equal, !=, "unequal to";
    cmp_all_less, cmp_any_less, <, "less than";
    cmp_all_less_equal, cmp_any_less_equal, <=, "at most";
    cmp_all_greater, cmp_any_greater, >, "greater than";
    cmp_all_greater_equal, cmp_any_greater_equal, >=, "at least";
}

// Vector rhs: element-wise ALL, padded to the longer length.
impl<T: Scalar, const N: usize, const M: usize> PartialEq<Vector<T, M>> for Vector<T, N> {
    #[inline]
    fn eq(&self, other: &Vector<T, M>) -> bool {
        self.cmp_all_equal(*other)
    }
}

impl<T: Scalar, const N: usize, const M: usize> PartialOrd<Vector<T, M>> for Vector<T, N> {
    #[inline]
    fn partial_cmp(&self, other: &Vector<T, M>) -> Option<Ordering> {
        if self.cmp_all_equal(*other) {
            Some(Ordering::Equal)
        } else if self.cmp_all_less(*other) {
            Some(Ordering::Less)
        } else if self.cmp_all_greater(*other) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }

    #[inline]
    fn lt(&self, other: &Vector<T, M>) -> bool {
        self.cmp_all_less(*other)
    }

    #[inline]
    fn le(&self, other: &Vector<T, M>) -> bool {
        self.cmp_all_less_equal(*other)
    }

    #[inline]
    fn gt(&self, other: &Vector<T, M>) -> bool {
        self.cmp_all_greater(*other)
    }

    #[inline]
    fn ge(&self, other: &Vector<T, M>) -> bool {
        self.cmp_all_greater_equal(*other)
    }
}

// Scalar rhs: the magnitude fallback. Equality compares the square
// magnitude, ordering compares the magnitude.
impl<T: Scalar, const N: usize> PartialEq<T> for Vector<T, N> {
    #[inline]
    fn eq(&self, other: &T) -> bool {
        self.square_magnitude() == other.cast::<T::Wide>()
    }
}

impl<T: Scalar, const N: usize> PartialOrd<T> for Vector<T, N> {
    #[inline]
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        self.magnitude().partial_cmp(&other.cast::<T::Wide>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_family_with_vector_rhs() {
        let a = Vector::new([1, 2, 3]);
        let b = Vector::new([1, 2, 3]);
        assert!(a.cmp_all_equal(b));
        assert!(a.cmp_all_less_equal(b));
        assert!(!a.cmp_all_less(b));
        assert!(a.cmp_any_greater_equal(b));
    }

    #[test]
    fn any_family_with_scalar_rhs() {
        let a = Vector::new([1, 5, 3]);
        assert!(a.cmp_any_equal(5));
        assert!(!a.cmp_all_equal(5));
        assert!(a.cmp_all_less(10));
        assert!(a.cmp_any_greater(4));
    }

    #[test]
    fn padding_extends_to_longer_operand() {
        let short = Vector::new([1, 2]);
        let long = Vector::new([1, 2, 0, 0]);
        // padded positions of `short` read 0 and match
        assert!(short.cmp_all_equal(long));
        let nonzero_tail = Vector::new([1, 2, 7, 0]);
        assert!(!short.cmp_all_equal(nonzero_tail));
    }

    #[test]
    fn short_variants_ignore_the_tail() {
        let short = Vector::new([1, 2]);
        let long = Vector::new([1, 2, 7, 9]);
        assert!(short.cmp_all_with_short(long, |a, b| a == b));
        assert!(!short.cmp_all_with(long, |a, b| a == b));
        assert!(!short.cmp_any_with_short(long, |a, b| a > b));
    }

    #[test]
    fn operators_with_vector_rhs_are_elementwise_all() {
        let a = Vector::new([1.0f32, 2.0]);
        let b = Vector::new([1.0f32, 2.0]);
        let c = Vector::new([2.0f32, 3.0]);
        assert!(a == b);
        assert!(a != c);
        assert!(a < c);
        assert!(a <= b);
        let mixed = Vector::new([0.0f32, 3.0]);
        // neither all-less nor all-greater
        assert!(!(a < mixed) && !(a > mixed));
    }

    #[test]
    fn inequality_operator_is_any_position_unequal() {
        let a = Vector::new([1, 2, 3]);
        let b = Vector::new([1, 2, 4]);
        // `!=` negates all-equal, so one differing position suffices
        assert!(a != b);
        assert!(a.cmp_any_not_equal(b));
        // the strict all-positions form is a different question
        assert!(!a.cmp_all_not_equal(b));
    }

    #[test]
    fn operators_with_scalar_rhs_use_magnitude() {
        let v = Vector::new([3, 4]);
        // square magnitude is 25: equality compares against the scalar
        assert!(v == 25);
        assert!(v != 24);
        // ordering compares the magnitude, which is 5
        assert!(v < 6);
        assert!(v > 4);
        assert!(v >= 5);
        // element-wise ALL sees it differently
        assert!(!v.cmp_all_equal(25));
    }

    #[test]
    fn mixed_length_equality_pads() {
        let a = Vector::new([1.0f32, 2.0, 0.0]);
        let b = Vector::new([1.0f32, 2.0]);
        assert!(a == b);
        let c = Vector::new([1.0f32, 2.0, 3.0]);
        assert!(c != b);
    }
}
