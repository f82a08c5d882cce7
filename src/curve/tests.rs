use approx::assert_relative_eq;

use super::*;

/// Dense sample of the unit interval, endpoints included.
fn samples() -> impl Iterator<Item = f64> {
    (0..=100).map(|i| i as f64 / 100.)
}

fn assert_anchored<C: Curve<f64>>(curve: &C) {
    assert_relative_eq!(curve.transform(0.), 0., epsilon = 1e-9);
    assert_relative_eq!(curve.transform(1.), 1., epsilon = 1e-9);
}

fn assert_round_trip<C: Curve<f64>>(curve: &C, epsilon: f64) {
    for t in samples() {
        let v = curve.transform(t);
        assert_relative_eq!(curve.inv_transform(v), t, epsilon = epsilon);
    }
}

fn assert_monotonic<C: Curve<f64>>(curve: &C) {
    for (t0, t1) in samples().zip(samples().skip(1)) {
        assert!(
            curve.transform(t0) <= curve.transform(t1),
            "not monotonic between {} and {}",
            t0,
            t1
        );
    }
}

fn closed_form_curves() -> Vec<BoxedCurve<f64>> {
    vec![
        Box::new(Linear),
        Box::new(Square),
        Box::new(Cube),
        Box::new(Exponential::try_new(4.).unwrap()),
        Box::new(Exponential::try_new(-3.).unwrap()),
        Box::new(Logarithmic::try_new(9.).unwrap()),
        Box::new(SineInOut),
        Box::new(SineOut),
        Box::new(SineIn),
        Box::new(CircleIn),
        Box::new(CircleOut),
        Box::new(Superellipse::try_new(2.5, 1.5).unwrap()),
        Box::new(Catenary),
        Box::new(Gaussian::try_new(2.).unwrap()),
        Box::new(Logistic::try_new(10., 0.5).unwrap()),
        Box::new(Logistic::try_new(6., 0.25).unwrap()),
    ]
}

#[test]
fn closed_form_anchors_and_round_trips() {
    for curve in closed_form_curves() {
        assert_anchored(&curve);
        assert_round_trip(&curve, 1e-9);
    }
}

#[test]
fn closed_form_monotonic() {
    for curve in closed_form_curves() {
        assert_monotonic(&curve);
    }
}

#[test]
fn bisection_round_trips() {
    assert_anchored(&Smoothstep);
    assert_anchored(&Smootherstep);
    assert_round_trip(&Smoothstep, 2e-5);
    assert_round_trip(&Smootherstep, 2e-5);
    assert_monotonic(&Smoothstep);
    assert_monotonic(&Smootherstep);
}

#[test]
fn bisection_never_leaves_unit_interval() {
    for t in samples() {
        let v = inverse_by_bisection(&Smootherstep, t);
        assert!((0. ..=1.).contains(&v));
    }
}

#[test]
fn superellipse_two_two_is_circle_in() {
    let lame = Superellipse::try_new(2., 2.).unwrap();
    for t in samples() {
        assert_relative_eq!(lame.transform(t), CircleIn.transform(t), epsilon = 1e-9);
    }
}

#[test]
fn exponential_rejects_zero_rate() {
    assert!(Exponential::<f64>::try_new(0.).is_err());
}

#[test]
fn logarithmic_rejects_degenerate_rates() {
    assert!(Logarithmic::<f64>::try_new(0.).is_err());
    assert!(Logarithmic::<f64>::try_new(-1.).is_err());
    assert!(Logarithmic::<f64>::try_new(-2.).is_err());
    assert!(Logarithmic::<f64>::try_new(-0.5).is_ok());
}

#[test]
fn logistic_rejects_degenerate_parameters() {
    assert!(Logistic::<f64>::try_new(-1., 0.5).is_err());
    assert!(Logistic::<f64>::try_new(0., 0.5).is_err());
    assert!(Logistic::<f64>::try_new(10., 0.).is_err());
    assert!(Logistic::<f64>::try_new(10., 1.).is_err());
}

#[test]
fn superellipse_rejects_non_positive_exponents() {
    assert!(Superellipse::<f64>::try_new(0., 2.).is_err());
    assert!(Superellipse::<f64>::try_new(2., -1.).is_err());
}

#[test]
fn compound_of_squares_is_fourth_power() {
    let compound: Compound<f64> = Compound::new(vec![Box::new(Square), Box::new(Square)]);
    for t in samples() {
        assert_relative_eq!(compound.transform(t), (t * t) * (t * t), epsilon = 1e-12);
    }
    assert_round_trip(&compound, 1e-9);
    assert_monotonic(&compound);
}

#[test]
fn compound_inverts_in_reverse_order() {
    let compound: Compound<f64> = Compound::new(vec![
        Box::new(Square),
        Box::new(Exponential::try_new(3.).unwrap()),
    ]);
    let v = compound.transform(0.6);
    let expected = Square.inv_transform(Exponential::try_new(3.).unwrap().inv_transform(v));
    assert_relative_eq!(compound.inv_transform(v), expected, epsilon = 1e-12);
}

#[test]
fn reflected_square_matches_complement() {
    let reflected = Reflected::new(Square);
    assert_relative_eq!(reflected.transform(0.3), 1. - 0.7 * 0.7, epsilon = 1e-12);
    assert_anchored(&reflected);
    assert_round_trip(&reflected, 1e-9);
    assert_monotonic(&reflected);
}

#[test]
fn reflected_boundary_skips_child() {
    struct EdgePanics;
    impl Curve<f64> for EdgePanics {
        fn transform(&self, t: f64) -> f64 {
            assert!(t > 0., "child evaluated at 0");
            t
        }
        fn inv_transform(&self, v: f64) -> f64 {
            assert!(v > 0., "child inverted at 0");
            v
        }
    }
    let reflected = Reflected::new(EdgePanics);
    assert_relative_eq!(reflected.transform(1.), 1.);
    assert_relative_eq!(reflected.inv_transform(1.), 1.);
}

#[test]
fn piecewise_linear_interpolates_between_stops() {
    let curve = PiecewiseLinear::try_new(vec![(0.25, 0.3), (0.5, 0.6), (0.75, 0.9)]).unwrap();
    assert_relative_eq!(curve.transform(0.375), 0.45, epsilon = 1e-12);
    assert_relative_eq!(curve.transform(0.625), 0.75, epsilon = 1e-12);
    assert_relative_eq!(curve.transform(0.25), 0.3, epsilon = 1e-12);
    assert_anchored(&curve);
    assert_monotonic(&curve);
}

#[test]
fn piecewise_linear_inverse_is_exact() {
    let curve = PiecewiseLinear::try_new(vec![(0.2, 0.5), (0.6, 0.7)]).unwrap();
    assert_round_trip(&curve, 1e-12);
    assert_relative_eq!(curve.inv_transform(0.5), 0.2, epsilon = 1e-12);
    assert_relative_eq!(curve.inv_transform(0.6), 0.4, epsilon = 1e-12);
}

#[test]
fn piecewise_linear_uses_first_stop_as_lower_anchor() {
    // Stops deliberately not collinear with the origin, so a scan that
    // ignores the first stop would interpolate from (0,0) and miss.
    let curve = PiecewiseLinear::try_new(vec![(0.2, 0.8), (0.9, 0.95)]).unwrap();
    let w: f64 = (0.55 - 0.2) / (0.9 - 0.2);
    assert_relative_eq!(
        curve.transform(0.55),
        (1. - w) * 0.8 + w * 0.95,
        epsilon = 1e-12
    );
}

#[test]
fn piecewise_linear_rejects_malformed_stops() {
    assert!(PiecewiseLinear::<f64>::try_new(vec![(0.5, 0.5), (0.25, 0.75)]).is_err());
    assert!(PiecewiseLinear::<f64>::try_new(vec![(0.25, 0.75), (0.5, 0.5)]).is_err());
    assert!(PiecewiseLinear::<f64>::try_new(vec![(0., 0.5)]).is_err());
    assert!(PiecewiseLinear::<f64>::try_new(vec![(0.5, 1.)]).is_err());
    assert!(PiecewiseLinear::<f64>::try_new(vec![(0.25, 0.3), (0.5, 0.6)]).is_ok());
}

#[test]
fn curves_work_with_f32() {
    let curve = Exponential::<f32>::try_new(4.).unwrap();
    assert_relative_eq!(curve.transform(0.), 0., epsilon = 1e-5);
    assert_relative_eq!(curve.transform(1.), 1., epsilon = 1e-5);
    assert_relative_eq!(curve.inv_transform(curve.transform(0.3)), 0.3, epsilon = 1e-5);
}
