use crate::misc::FloatingPoint;

use super::Curve;

/// Logarithmic ease, `v = ln(1 + tk) / ln(1 + k)`.
///
/// The inverse of [`Exponential`](super::Exponential) shape-wise: positive
/// rates bias toward the end of the range.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Logarithmic<T: FloatingPoint> {
    rate: T,
    scale: T,
}

impl<T: FloatingPoint> Logarithmic<T> {
    /// Try to create a logarithmic curve with the given rate.
    /// # Failures
    /// - if the rate is zero
    /// - if the rate is less than or equal to -1, where `ln(1 + tk)` leaves
    ///   the real domain
    pub fn try_new(rate: T) -> anyhow::Result<Self> {
        if rate == T::zero() || rate <= -T::one() {
            anyhow::bail!("Logarithmic rate must be non-zero and greater than -1");
        }
        Ok(Self::new_unchecked(rate))
    }

    /// Create a logarithmic curve without validating the rate.
    pub fn new_unchecked(rate: T) -> Self {
        Self {
            rate,
            scale: T::one() / rate.ln_1p(),
        }
    }

    pub fn rate(&self) -> T {
        self.rate
    }
}

impl<T: FloatingPoint> Curve<T> for Logarithmic<T> {
    fn transform(&self, t: T) -> T {
        (t * self.rate).ln_1p() * self.scale
    }

    fn inv_transform(&self, v: T) -> T {
        (v / self.scale).exp_m1() / self.rate
    }
}
