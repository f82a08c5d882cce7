use approx::assert_relative_eq;

use super::*;
use crate::curve::{Curve, Exponential, Linear, Smoothstep, Square};

/// Curve that fails the test if it is ever evaluated.
struct Unreachable;

impl Curve<f64> for Unreachable {
    fn transform(&self, _t: f64) -> f64 {
        panic!("curve evaluated");
    }

    fn inv_transform(&self, _v: f64) -> f64 {
        panic!("curve inverted");
    }
}

#[test]
fn lerp_hits_endpoints_exactly() {
    let curves: Vec<Box<dyn Curve<f64>>> = vec![
        Box::new(Linear),
        Box::new(Square),
        Box::new(Smoothstep),
        Box::new(Exponential::try_new(4.).unwrap()),
    ];
    for curve in curves {
        assert_eq!(lerp(0., -3., 7., &curve), -3.);
        // transform(1) may be one ulp off 1 for normalized curves
        assert_relative_eq!(lerp(1., -3., 7., &curve), 7., epsilon = 1e-12);
    }
}

#[test]
fn lerp_out_of_range_returns_endpoints_without_evaluation() {
    assert_eq!(lerp(-0.5, 2., 9., &Unreachable), 2.);
    assert_eq!(lerp(1.5, 2., 9., &Unreachable), 9.);
}

#[test]
fn lerp_blends_with_transformed_weight() {
    assert_relative_eq!(lerp(0.5, 0., 10., &Square), 2.5);
    assert_relative_eq!(lerp(0.5, 10., 0., &Square), 7.5);
    // Descending ranges work the same way
    assert_relative_eq!(lerp(0.25, 1., -1., &Linear), 0.5);
}

#[test]
fn inverse_lerp_hits_boundaries() {
    assert_eq!(inverse_lerp(2., 2., 9., &Square), 0.);
    assert_eq!(inverse_lerp(9., 2., 9., &Square), 1.);
    assert_eq!(inverse_lerp(0., 2., 9., &Unreachable), 0.);
    assert_eq!(inverse_lerp(10., 2., 9., &Unreachable), 1.);
}

#[test]
fn inverse_lerp_undoes_lerp() {
    let curve = Exponential::try_new(2.).unwrap();
    for i in 0..=10 {
        let t = i as f64 / 10.;
        let v = lerp(t, 5., 25., &curve);
        assert_relative_eq!(inverse_lerp(v, 5., 25., &curve), t, epsilon = 1e-9);
    }
}

#[test]
fn inverse_lerp_degenerate_range_clamps() {
    // v == start == end divides 0 by 0; NaN clamps low.
    assert_eq!(inverse_lerp(5., 5., 5., &Unreachable), 0.);
    // Positive and negative infinities clamp to their ends.
    assert_eq!(inverse_lerp(7., 5., 5., &Unreachable), 1.);
    assert_eq!(inverse_lerp(3., 5., 5., &Unreachable), 0.);
}

#[test]
fn remap_identity_round_trip() {
    for i in 0..=10 {
        let v = i as f64 / 10.;
        assert_relative_eq!(remap(v, 0., 1., 0., 1., &Linear, &Linear), v);
    }
}

#[test]
fn remap_crosses_spaces_with_different_shapes() {
    // Undo a square bias on the input, apply it again on a wider output.
    let v = remap(0.25, 0., 1., 0., 100., &Square, &Square);
    assert_relative_eq!(v, 25., epsilon = 1e-9);

    let linear = remap(3., 1., 5., 10., 30., &Linear, &Linear);
    assert_relative_eq!(linear, 20., epsilon = 1e-9);
}
