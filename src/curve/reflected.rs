use crate::misc::FloatingPoint;

use super::Curve;

/// Reflection of a curve through the center of the unit square,
/// `v = 1 - f(1 - t)`, turning an ease-in into the matching ease-out.
///
/// The reflection of a monotonic increasing curve anchored at (0,0) and
/// (1,1) is again monotonic increasing with the same anchors. The child is
/// never evaluated at exactly 0, where some curves are degenerate; the
/// boundary returns 1 directly.
///
/// # Example
/// ```
/// use shaping::prelude::*;
/// use approx::assert_relative_eq;
///
/// let reflected = Reflected::new(Square);
/// assert_relative_eq!(reflected.transform(0.3), 1. - 0.7 * 0.7, epsilon = 1e-12);
/// ```
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reflected<C> {
    curve: C,
}

impl<C> Reflected<C> {
    pub fn new(curve: C) -> Self {
        Self { curve }
    }

    pub fn curve(&self) -> &C {
        &self.curve
    }
}

impl<T: FloatingPoint, C: Curve<T>> Curve<T> for Reflected<C> {
    fn transform(&self, t: T) -> T {
        let u = T::one() - t;
        if u > T::zero() {
            T::one() - self.curve.transform(u)
        } else {
            T::one()
        }
    }

    fn inv_transform(&self, v: T) -> T {
        let w = T::one() - v;
        if w > T::zero() {
            T::one() - self.curve.inv_transform(T::one() - w)
        } else {
            T::one()
        }
    }
}
