use crate::misc::FloatingPoint;

use super::Curve;

/// Right half of a Gaussian bump centered at `t = 1`, rescaled to the unit
/// square: `v = (e^(-x²/2) - e^(-k²/2)) / (1 - e^(-k²/2))` with `x = k(t - 1)`.
///
/// Larger `|k|` makes the takeoff flatter and the approach to 1 steeper.
/// The offset (the raw value at `t = 0`) and the scale are precomputed at
/// construction so the range is exactly `[0, 1]`.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gaussian<T: FloatingPoint> {
    rate: T,
    offset: T,
    scale: T,
}

impl<T: FloatingPoint> Gaussian<T> {
    /// Try to create a Gaussian curve with the given rate.
    /// # Failures
    /// - if the rate is zero
    ///
    /// # Example
    /// ```
    /// use shaping::prelude::*;
    /// use approx::assert_relative_eq;
    ///
    /// let curve = Gaussian::try_new(2.).unwrap();
    /// assert_relative_eq!(curve.transform(0.), 0.);
    /// assert_relative_eq!(curve.transform(1.), 1., epsilon = 1e-12);
    /// ```
    pub fn try_new(rate: T) -> anyhow::Result<Self> {
        if rate == T::zero() {
            anyhow::bail!("Gaussian rate must be non-zero");
        }
        Ok(Self::new_unchecked(rate))
    }

    /// Create a Gaussian curve without validating the rate.
    pub fn new_unchecked(rate: T) -> Self {
        let half = T::from_f64(0.5).unwrap();
        let offset = (-rate * rate * half).exp();
        Self {
            rate,
            offset,
            scale: T::one() / (T::one() - offset),
        }
    }

    pub fn rate(&self) -> T {
        self.rate
    }
}

impl<T: FloatingPoint> Curve<T> for Gaussian<T> {
    fn transform(&self, t: T) -> T {
        let half = T::from_f64(0.5).unwrap();
        let x = self.rate * (t - T::one());
        ((-half * x * x).exp() - self.offset) * self.scale
    }

    fn inv_transform(&self, v: T) -> T {
        let two = T::from_f64(2.0).unwrap();
        let w = v / self.scale + self.offset;
        // Rounding can push w a hair above 1 at the top of the range,
        // which would feed a negative argument to the square root.
        let x = (w.ln() * -two).max(T::zero()).sqrt();
        T::one() - x / self.rate
    }
}
