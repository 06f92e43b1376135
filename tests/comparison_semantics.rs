//! Comparison subsystem tests
//!
//! Covers the two comparison families side by side: element-wise
//! comparison against vector operands and magnitude-based comparison
//! against scalar operands, plus the any/all named forms and the
//! shorter-length opt-outs.

use proptest::prelude::*;
use vega_math::{Vec2f, Vec3f, Vector};

#[test]
fn vector_rhs_compares_elementwise() {
    let a = Vec3f::new([1.0, 2.0, 3.0]);
    let b = Vec3f::new([1.0, 2.0, 3.0]);
    let c = Vec3f::new([1.0, 2.0, 4.0]);
    assert!(a == b);
    assert!(a != c);
    assert!(!(a < c)); // not all-less: only position 2 differs
    assert!(a.cmp_any_less(c));
    assert!(Vec3f::new([0.0, 1.0, 2.0]) < a);
}

#[test]
fn scalar_rhs_compares_by_magnitude() {
    // |(3, 4)| = 5, squared 25
    let v = Vec2f::new([3.0, 4.0]);
    assert!(v == 25.0);
    assert!(v < 6.0);
    assert!(v > 4.0);
    // the same scalar through the named element-wise forms disagrees
    assert!(!v.cmp_all_equal(25.0));
    assert!(v.cmp_all_less(25.0));
}

#[test]
fn mixed_lengths_pad_the_shorter_side() {
    let long = Vec3f::new([1.0, 2.0, 0.0]);
    let short = Vec2f::new([1.0, 2.0]);
    // position 2 compares 0.0 against the padded 0.0
    assert!(long.cmp_all_equal(short));
    assert!(short.cmp_all_equal(long));
    let nonzero_tail = Vec3f::new([1.0, 2.0, 3.0]);
    assert!(!nonzero_tail.cmp_all_equal(short));
    assert!(nonzero_tail.cmp_any_not_equal(short));
}

#[test]
fn short_forms_ignore_the_tail() {
    let long = Vec3f::new([1.0, 2.0, 3.0]);
    let short = Vec2f::new([1.0, 2.0]);
    assert!(long.cmp_all_with_short(short, |a, b| a == b));
    assert!(!long.cmp_all_with(short, |a, b| a == b));
    assert!(!long.cmp_any_with_short(short, |a, b| a > b));
}

#[test]
fn ordering_operators_are_all_quantified() {
    let lo = Vec2f::new([1.0, 1.0]);
    let hi = Vec2f::new([2.0, 2.0]);
    let mixed = Vec2f::new([0.0, 3.0]);
    assert!(lo < hi);
    assert!(hi > lo);
    assert!(lo <= lo);
    // incomparable: neither all-less nor all-greater nor all-equal
    assert!(!(lo < mixed));
    assert!(!(lo > mixed));
    assert!(lo != mixed);
    assert_eq!(lo.partial_cmp(&mixed), None);
}

proptest! {
    /// Element-wise equality against a vector is symmetric for equal
    /// lengths and element types.
    #[test]
    fn vector_equality_is_symmetric(a in prop::array::uniform3(-100.0f32..100.0),
                                    b in prop::array::uniform3(-100.0f32..100.0)) {
        let va = Vec3f::new(a);
        let vb = Vec3f::new(b);
        prop_assert_eq!(va == vb, vb == va);
        prop_assert_eq!(va.cmp_any_not_equal(vb), !(va == vb));
    }

    /// The all and any forms of the same predicate bracket each other.
    #[test]
    fn all_implies_any(a in prop::array::uniform3(-100.0f32..100.0),
                       s in -100.0f32..100.0) {
        let v = Vec3f::new(a);
        if v.cmp_all_less(s) {
            prop_assert!(v.cmp_any_less(s));
        }
        if v.cmp_all_greater_equal(s) {
            prop_assert!(v.cmp_any_greater_equal(s));
        }
    }

    /// Magnitude comparison against a scalar agrees with comparing the
    /// computed magnitude directly.
    #[test]
    fn scalar_ordering_matches_magnitude(a in prop::array::uniform2(-100.0f32..100.0),
                                         s in 0.0f32..200.0) {
        let v = Vec2f::new(a);
        prop_assert_eq!(v < s, v.magnitude() < s);
        prop_assert_eq!(v > s, v.magnitude() > s);
    }
}

#[test]
fn integral_vectors_compare_exactly() {
    let a = Vector::new([1u32, 2, 3]);
    let b = Vector::new([1u32, 2, 3]);
    assert!(a == b);
    assert!(a.cmp_all_less_equal(b));
    assert!(!a.cmp_any_greater(b));
    // scalar rhs uses the squared magnitude for equality (1 + 4 + 9)
    assert!(a == 14u32);
}
