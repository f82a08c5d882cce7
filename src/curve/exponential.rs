use crate::misc::FloatingPoint;

use super::Curve;

/// Exponential ease, `v = (e^(tk) - 1) / (e^k - 1)`.
///
/// Positive rates bias toward the start of the range, negative rates toward
/// the end. The normalization scale is computed once at construction so that
/// `transform(1) = 1` exactly.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exponential<T: FloatingPoint> {
    rate: T,
    scale: T,
}

impl<T: FloatingPoint> Exponential<T> {
    /// Try to create an exponential curve with the given rate.
    /// # Failures
    /// - if the rate is zero
    ///
    /// # Example
    /// ```
    /// use shaping::prelude::*;
    /// use approx::assert_relative_eq;
    ///
    /// let curve = Exponential::try_new(4.).unwrap();
    /// assert_relative_eq!(curve.transform(0.), 0.);
    /// assert_relative_eq!(curve.transform(1.), 1., epsilon = 1e-12);
    /// assert_relative_eq!(curve.inv_transform(curve.transform(0.3)), 0.3, epsilon = 1e-12);
    /// ```
    pub fn try_new(rate: T) -> anyhow::Result<Self> {
        if rate == T::zero() {
            anyhow::bail!("Exponential rate must be non-zero");
        }
        Ok(Self::new_unchecked(rate))
    }

    /// Create an exponential curve without validating the rate.
    /// A zero rate divides by zero in the normalization scale.
    pub fn new_unchecked(rate: T) -> Self {
        Self {
            rate,
            scale: T::one() / rate.exp_m1(),
        }
    }

    pub fn rate(&self) -> T {
        self.rate
    }
}

impl<T: FloatingPoint> Curve<T> for Exponential<T> {
    fn transform(&self, t: T) -> T {
        (t * self.rate).exp_m1() * self.scale
    }

    fn inv_transform(&self, v: T) -> T {
        (v / self.scale).ln_1p() / self.rate
    }
}
