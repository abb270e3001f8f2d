//! Algebraic properties of vector operations.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use proptest::prelude::*;
use vecalg::*;

// Small enough that no product or sum below can overflow.
const INT: std::ops::Range<i32> = -1000..1000;
const FLOAT: std::ops::Range<f64> = -100.0..100.0;

fn ivec3() -> impl Strategy<Value = Vec3i> {
    (INT, INT, INT).prop_map(|(x, y, z)| vec3(x, y, z))
}

fn dvec3() -> impl Strategy<Value = Vec3d> {
    (FLOAT, FLOAT, FLOAT).prop_map(|(x, y, z)| vec3(x, y, z))
}

fn ivec4() -> impl Strategy<Value = Vec4i> {
    (INT, INT, INT, INT).prop_map(|(x, y, z, w)| vec4(x, y, z, w))
}

proptest! {
    #[test]
    fn splat_fills_every_component(s in any::<i64>()) {
        let v = Vector::<i64, 7>::splat(s);
        prop_assert!(v.as_slice().iter().all(|&e| e == s));
    }

    #[test]
    fn flattening_preserves_order(a in ivec4(), b in INT) {
        let v = Vector::<i32, 5>::new((a.xy(), b, a.zw()));
        prop_assert_eq!(v, [a.x, a.y, b, a.z, a.w]);
    }

    #[test]
    fn dot_is_symmetric(a in ivec3(), b in ivec3()) {
        prop_assert_eq!(a.dot(b), b.dot(a));
    }

    #[test]
    fn dot_is_bilinear(a in ivec3(), b in ivec3(), c in ivec3(), k in -10..10) {
        prop_assert_eq!((a + b).dot(c), a.dot(c) + b.dot(c));
        prop_assert_eq!((a * k).dot(c), k * a.dot(c));
    }

    #[test]
    fn float_dot_is_bilinear(a in dvec3(), b in dvec3(), c in dvec3(), k in FLOAT) {
        // Rounding error is bounded relative to the sum of the absolute products.
        let scale = a.map(f64::abs).dot(b.map(f64::abs) + c.map(f64::abs));
        assert_abs_diff_eq!(a.dot(b + c), a.dot(b) + a.dot(c), epsilon = scale * 1e-12);

        let scale = a.map(f64::abs).dot(b.map(f64::abs)) * k.abs();
        assert_abs_diff_eq!((a * k).dot(b), k * a.dot(b), epsilon = scale * 1e-12);
    }

    #[test]
    fn float_dot_is_symmetric(a in dvec3(), b in dvec3()) {
        prop_assert_eq!(a.dot(b), b.dot(a));
    }

    #[test]
    fn cross_anticommutes(a in ivec3(), b in ivec3()) {
        prop_assert_eq!(a.cross(b), -b.cross(a));
    }

    #[test]
    fn cross_is_orthogonal(a in ivec3(), b in ivec3()) {
        let c = a.cross(b).cast::<i64>();
        prop_assert_eq!(c.dot(a.cast::<i64>()), 0);
        prop_assert_eq!(c.dot(b.cast::<i64>()), 0);
    }

    #[test]
    fn float_cross_anticommutes(a in dvec3(), b in dvec3()) {
        assert_relative_eq!(a.cross(b), -b.cross(a));
    }

    #[test]
    fn scalar_multiplication_commutes(v in ivec3(), k in INT) {
        prop_assert_eq!(k * v, v * k);
    }

    #[test]
    fn float_scalar_multiplication_commutes(v in dvec3(), k in FLOAT) {
        prop_assert_eq!(k * v, v * k);
        prop_assert_eq!(k * v.zyx(), v.zyx() * k);
    }

    #[test]
    fn int_float_promotes(v in ivec3(), w in dvec3()) {
        let sum = v + w;
        let _: &Vec3d = &sum;
        prop_assert_eq!(sum, v.cast::<f64>() + w);
    }

    #[test]
    fn swizzle_reverses(v in ivec4()) {
        let mut w = v;
        w.swizzle_assign::<pattern::WZYX>();
        prop_assert_eq!(w, [v.w, v.z, v.y, v.x]);
        w.swizzle_assign::<pattern::WZYX>();
        prop_assert_eq!(w, v);
    }

    #[test]
    fn permutation_write_then_read(v in ivec4(), a in ivec3()) {
        let mut w = v;
        w.ywx_mut().set(a);
        prop_assert_eq!(w.ywx(), a);
        prop_assert_eq!(w.z, v.z);
    }

    #[test]
    fn compound_assignment_matches_binary(v in ivec3(), w in ivec3()) {
        let mut sum = v;
        sum += w;
        prop_assert_eq!(sum, v + w);

        let mut diff = v;
        diff -= w.zxy();
        prop_assert_eq!(diff, v - w.zxy());
    }
}
