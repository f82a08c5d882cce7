use crate::misc::FloatingPoint;

use super::Curve;

/// Number of halving steps. Bounds the parameter error by 2⁻¹⁶ ≈ 1.5e-5.
const ITERATIONS: usize = 16;

/// Numerically inverts a monotonic curve by fixed-iteration binary search
/// over `t ∈ [0, 1]`.
///
/// Runs exactly 16 halving steps with no convergence check, so
/// the cost is constant and the result is within 2⁻¹⁶ of the true parameter.
/// Used by curves without a closed-form inverse.
///
/// # Example
/// ```
/// use shaping::prelude::*;
/// use approx::assert_relative_eq;
///
/// let v = Smoothstep.transform(0.3);
/// assert_relative_eq!(inverse_by_bisection(&Smoothstep, v), 0.3, epsilon = 2e-5);
/// ```
pub fn inverse_by_bisection<T: FloatingPoint, C: Curve<T> + ?Sized>(curve: &C, v: T) -> T {
    let half = T::from_f64(0.5).unwrap();
    let mut t = half;
    let mut step = T::from_f64(0.25).unwrap();
    for _ in 0..ITERATIONS {
        if curve.transform(t) > v {
            t -= step;
        } else {
            t += step;
        }
        step *= half;
    }
    t
}
