//! Packed path equivalence tests
//!
//! Drives the generic `Vector<f32, 4>` path and the packed `F32x4` path
//! with the same seeded random inputs and checks that every operation
//! agrees within floating-point tolerance. Behavioral equivalence of the
//! two paths is the contract that lets callers swap one for the other.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vega_math::{F32x4, InvSqrtParams, Vec4f};

const CASES: usize = 1_000;
const RELATIVE_TOLERANCE: f32 = 1e-5;

fn assert_close(a: f32, b: f32, context: &str) {
    assert_close_at_scale(a, b, a.abs().max(b.abs()), context);
}

// Reductions that cancel (a dot product near zero built from large
// summands, say) must be judged at the scale of their operands, not of
// the cancelled result.
fn assert_close_at_scale(a: f32, b: f32, scale: f32, context: &str) {
    if a == b {
        return;
    }
    let diff = (a - b).abs();
    assert!(
        diff / scale.max(1.0) < RELATIVE_TOLERANCE,
        "{context}: {a} vs {b} (diff {diff})"
    );
}

fn assert_lanes_close(generic: Vec4f, packed: F32x4, context: &str) {
    let p = packed.to_array();
    for i in 0..4 {
        assert_close(generic[i], p[i], context);
    }
}

fn random_lanes(rng: &mut StdRng) -> [f32; 4] {
    [
        rng.gen_range(-100.0f32..100.0),
        rng.gen_range(-100.0f32..100.0),
        rng.gen_range(-100.0f32..100.0),
        rng.gen_range(-100.0f32..100.0),
    ]
}

#[test]
fn arithmetic_matches_generic_path() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    for _ in 0..CASES {
        let (a, b) = (random_lanes(&mut rng), random_lanes(&mut rng));
        let (va, vb) = (Vec4f::new(a), Vec4f::new(b));
        let (pa, pb) = (F32x4::new(a), F32x4::new(b));

        assert_lanes_close(va + vb, pa + pb, "add");
        assert_lanes_close(va - vb, pa - pb, "sub");
        assert_lanes_close(va * vb, pa * pb, "mul");
        assert_lanes_close(va / vb, pa / pb, "div");
        assert_lanes_close(-va, -pa, "neg");

        let s = rng.gen_range(0.5f32..4.0);
        assert_lanes_close(va * s, pa * s, "scalar mul");
        assert_lanes_close(va + s, pa + s, "scalar add");
    }
}

#[test]
fn geometry_matches_generic_path() {
    let mut rng = StdRng::seed_from_u64(0xD07);
    for _ in 0..CASES {
        let (a, b) = (random_lanes(&mut rng), random_lanes(&mut rng));
        let (va, vb) = (Vec4f::new(a), Vec4f::new(b));
        let (pa, pb) = (F32x4::new(a), F32x4::new(b));

        let dot_scale = va.magnitude() * vb.magnitude();
        assert_close_at_scale(va.dot(&vb), pa.dot(pb), dot_scale, "dot");
        assert_close(va.square_magnitude(), pa.square_magnitude(), "square magnitude");
        assert_close(va.magnitude(), pa.magnitude(), "magnitude");
        let sum_scale = va.abs().element_sum::<f32>();
        assert_close_at_scale(va.element_sum::<f32>(), pa.element_sum(), sum_scale, "element sum");
        assert_close(va.min_element(), pa.min_element(), "min element");
        assert_close(va.max_element(), pa.max_element(), "max element");

        if va.square_magnitude() > 1e-3 {
            assert_lanes_close(va.normalized(), pa.normalized(), "normalize");
        }
    }
}

#[test]
fn cancelling_reductions_agree_at_operand_scale() {
    // summands near 1e4 cancelling to ~1e1: the generic left fold and the
    // packed pairwise sum round differently, but only at operand scale
    let a = [9876.543f32, -9871.221, 1.25, -0.5];
    let b = [1.000123f32, 1.000321, 2.0, 4.0];
    let (va, vb) = (Vec4f::new(a), Vec4f::new(b));
    let (pa, pb) = (F32x4::new(a), F32x4::new(b));

    let dot_scale = va.magnitude() * vb.magnitude();
    assert_close_at_scale(va.dot(&vb), pa.dot(pb), dot_scale, "cancelling dot");
    let sum_scale = va.abs().element_sum::<f32>();
    assert_close_at_scale(
        va.element_sum::<f32>(),
        pa.element_sum(),
        sum_scale,
        "cancelling sum",
    );
}

#[test]
fn fast_normalization_matches_within_estimate_tolerance() {
    let mut rng = StdRng::seed_from_u64(0xFA57);
    let params = InvSqrtParams::default();
    for _ in 0..CASES {
        let a = random_lanes(&mut rng);
        let va = Vec4f::new(a);
        if va.square_magnitude() < 1e-3 {
            continue;
        }
        let exact = va.normalized();
        let packed = F32x4::new(a).normalized_fast(params).to_array();
        for i in 0..4 {
            // one Newton refinement leaves roughly three decimal digits
            assert!(
                (exact[i] - packed[i]).abs() < 2e-3,
                "fast normalize lane {i}: {} vs {}",
                exact[i],
                packed[i]
            );
        }
    }
}

#[test]
fn comparisons_match_generic_path() {
    let mut rng = StdRng::seed_from_u64(0xC0DE);
    for _ in 0..CASES {
        let (a, b) = (random_lanes(&mut rng), random_lanes(&mut rng));
        let (va, vb) = (Vec4f::new(a), Vec4f::new(b));
        let (pa, pb) = (F32x4::new(a), F32x4::new(b));

        assert_eq!(va.cmp_all_less(vb), pa.cmp_all_less(pb), "all less");
        assert_eq!(va.cmp_any_less(vb), pa.cmp_any_less(pb), "any less");
        assert_eq!(va.cmp_all_greater(vb), pa.cmp_all_greater(pb), "all greater");
        assert_eq!(va.cmp_any_equal(vb), pa.cmp_any_equal(pb), "any equal");

        // scalar comparisons go through the magnitude on both paths;
        // skip thresholds inside the rounding gap between the two sums
        let s = rng.gen_range(0.0f32..250.0);
        if (va.magnitude() - s).abs() > 1e-3 {
            assert_eq!(va < s, pa < s, "scalar less");
            assert_eq!(va > s, pa > s, "scalar greater");
        }
    }
}

#[test]
fn lerp_and_clamp_match_generic_path() {
    let mut rng = StdRng::seed_from_u64(0x1E2);
    for _ in 0..CASES {
        let (a, b) = (random_lanes(&mut rng), random_lanes(&mut rng));
        let t = rng.gen_range(0.0f32..1.0);
        let (va, vb) = (Vec4f::new(a), Vec4f::new(b));
        let (pa, pb) = (F32x4::new(a), F32x4::new(b));

        assert_lanes_close(va.lerp(vb, t), pa.lerp(pb, t), "lerp");
        assert_lanes_close(va.clamp(-10.0f32, 10.0f32), pa.clamp(-10.0, 10.0), "clamp");
        assert_lanes_close(va.min_with(vb), pa.min(pb), "min");
        assert_lanes_close(va.max_with(vb), pa.max(pb), "max");
    }
}

#[test]
fn conversions_round_trip() {
    let mut rng = StdRng::seed_from_u64(0x0F);
    for _ in 0..CASES {
        let a = random_lanes(&mut rng);
        let packed = F32x4::from(Vec4f::new(a));
        let back: Vec4f = packed.into();
        assert_eq!(back.to_array(), a);
        let arr: [f32; 4] = packed.into();
        assert_eq!(arr, a);
    }
}

#[test]
fn mask_reductions_agree_with_lanes() {
    let v = F32x4::new([1.0, -2.0, 3.0, -4.0]);
    let mask = v.gt_mask(0.0);
    assert_eq!(mask.to_array(), [true, false, true, false]);
    assert!(mask.any());
    assert!(!mask.all());
    assert!(!mask.none());
    let selected = F32x4::select(mask, v, -v);
    assert_eq!(selected.to_array(), [1.0, 2.0, 3.0, 4.0]);
}
