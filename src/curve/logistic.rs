use crate::misc::FloatingPoint;

use super::Curve;

/// Logistic sigmoid `σ(x) = 1 / (1 + e^(-x))` evaluated at
/// `x = (t - midpoint) * rate`, rescaled so the endpoints land exactly on
/// 0 and 1.
///
/// `rate` controls the steepness of the transition, `midpoint` is the
/// parameter where the curve crosses its halfway value.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Logistic<T: FloatingPoint> {
    rate: T,
    midpoint: T,
    offset: T,
    scale: T,
}

impl<T: FloatingPoint> Logistic<T> {
    /// Try to create a logistic curve.
    /// # Failures
    /// - if the rate is not positive
    /// - if the midpoint is outside the open interval (0, 1)
    ///
    /// # Example
    /// ```
    /// use shaping::prelude::*;
    /// use approx::assert_relative_eq;
    ///
    /// let curve = Logistic::try_new(10., 0.5).unwrap();
    /// assert_relative_eq!(curve.transform(0.), 0.);
    /// assert_relative_eq!(curve.transform(1.), 1., epsilon = 1e-12);
    /// assert_relative_eq!(curve.transform(0.5), 0.5, epsilon = 1e-12);
    /// ```
    pub fn try_new(rate: T, midpoint: T) -> anyhow::Result<Self> {
        if rate <= T::zero() {
            anyhow::bail!("Logistic rate must be positive");
        }
        if midpoint <= T::zero() || midpoint >= T::one() {
            anyhow::bail!("Logistic midpoint must lie strictly between 0 and 1");
        }
        Ok(Self::new_unchecked(rate, midpoint))
    }

    /// Create a logistic curve without validating the parameters.
    pub fn new_unchecked(rate: T, midpoint: T) -> Self {
        let lo = sigmoid(-midpoint * rate);
        let hi = sigmoid((T::one() - midpoint) * rate);
        Self {
            rate,
            midpoint,
            offset: lo,
            scale: T::one() / (hi - lo),
        }
    }

    pub fn rate(&self) -> T {
        self.rate
    }

    pub fn midpoint(&self) -> T {
        self.midpoint
    }
}

impl<T: FloatingPoint> Curve<T> for Logistic<T> {
    fn transform(&self, t: T) -> T {
        let x = (t - self.midpoint) * self.rate;
        (sigmoid(x) - self.offset) * self.scale
    }

    fn inv_transform(&self, v: T) -> T {
        let w = v / self.scale + self.offset;
        logit(w) / self.rate + self.midpoint
    }
}

/// Standard logistic function with unit maximum, unit rate and zero midpoint.
fn sigmoid<T: FloatingPoint>(x: T) -> T {
    T::one() / (T::one() + (-x).exp())
}

/// Inverse of [`sigmoid`].
fn logit<T: FloatingPoint>(v: T) -> T {
    -(T::one() / v - T::one()).ln()
}
