use itertools::Itertools;

use crate::misc::FloatingPoint;

use super::Curve;

/// Piecewise-linear curve through a list of `(t, v)` stops, implicitly
/// anchored by (0,0) and (1,1) at the ends.
///
/// Stops must be strictly ascending in both coordinates and lie inside the
/// open unit square. [`Self::new_unchecked`] performs no validation; a
/// malformed stop list produces unspecified results.
///
/// Both coordinates ascend together, so the inverse is the same bracketing
/// scan run over the value coordinate, which is exact where a numerical
/// fallback would only be accurate to the bisection step.
///
/// # Example
/// ```
/// use shaping::prelude::*;
/// use approx::assert_relative_eq;
///
/// let curve = PiecewiseLinear::try_new(vec![(0.25, 0.3), (0.5, 0.6), (0.75, 0.9)]).unwrap();
/// assert_relative_eq!(curve.transform(0.375), 0.45, epsilon = 1e-12);
/// assert_relative_eq!(curve.transform(0.), 0.);
/// assert_relative_eq!(curve.transform(1.), 1.);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PiecewiseLinear<T: FloatingPoint> {
    stops: Vec<(T, T)>,
}

impl<T: FloatingPoint> PiecewiseLinear<T> {
    /// Try to create a piecewise-linear curve through the given stops.
    /// # Failures
    /// - if any stop lies outside the open unit square
    /// - if the stops are not strictly ascending in both coordinates
    pub fn try_new(stops: Vec<(T, T)>) -> anyhow::Result<Self> {
        for &(t, v) in stops.iter() {
            if t <= T::zero() || t >= T::one() || v <= T::zero() || v >= T::one() {
                anyhow::bail!("Stops must lie strictly inside the unit square");
            }
        }
        if stops
            .iter()
            .tuple_windows()
            .any(|(a, b)| b.0 <= a.0 || b.1 <= a.1)
        {
            anyhow::bail!("Stops must be strictly ascending in both coordinates");
        }
        Ok(Self::new_unchecked(stops))
    }

    /// Create a piecewise-linear curve without validating the stops.
    pub fn new_unchecked(stops: Vec<(T, T)>) -> Self {
        Self { stops }
    }

    pub fn stops(&self) -> &[(T, T)] {
        &self.stops
    }
}

impl<T: FloatingPoint> Curve<T> for PiecewiseLinear<T> {
    fn transform(&self, t: T) -> T {
        let mut lower = (T::zero(), T::zero());
        let mut upper = (T::one(), T::one());
        for &(st, sv) in self.stops.iter() {
            if st > t {
                upper = (st, sv);
                break;
            }
            lower = (st, sv);
        }
        let w = (t - lower.0) / (upper.0 - lower.0);
        (T::one() - w) * lower.1 + w * upper.1
    }

    fn inv_transform(&self, v: T) -> T {
        let mut lower = (T::zero(), T::zero());
        let mut upper = (T::one(), T::one());
        for &(st, sv) in self.stops.iter() {
            if sv > v {
                upper = (st, sv);
                break;
            }
            lower = (st, sv);
        }
        let w = (v - lower.1) / (upper.1 - lower.1);
        (T::one() - w) * lower.0 + w * upper.0
    }
}
