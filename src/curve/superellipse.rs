use crate::misc::FloatingPoint;

use super::Curve;

/// Superellipse (Lamé curve) quadrant, `v = 1 - (1 - tⁿ)^(1/m)`.
///
/// The exponents control the sharpness of each corner; `n = m = 2` is the
/// unit circle quadrant, equal to [`CircleIn`](super::CircleIn). The
/// reciprocal exponents are precomputed at construction.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Superellipse<T: FloatingPoint> {
    n: T,
    m: T,
    n_inv: T,
    m_inv: T,
}

impl<T: FloatingPoint> Superellipse<T> {
    /// Try to create a superellipse curve with the given exponents.
    /// # Failures
    /// - if either exponent is not positive
    pub fn try_new(n: T, m: T) -> anyhow::Result<Self> {
        if n <= T::zero() || m <= T::zero() {
            anyhow::bail!("Superellipse exponents must be positive");
        }
        Ok(Self::new_unchecked(n, m))
    }

    /// Create a superellipse curve without validating the exponents.
    pub fn new_unchecked(n: T, m: T) -> Self {
        Self {
            n,
            m,
            n_inv: T::one() / n,
            m_inv: T::one() / m,
        }
    }
}

impl<T: FloatingPoint> Curve<T> for Superellipse<T> {
    fn transform(&self, t: T) -> T {
        if t < T::one() {
            T::one() - (T::one() - t.powf(self.n)).powf(self.m_inv)
        } else {
            T::one()
        }
    }

    fn inv_transform(&self, v: T) -> T {
        if v < T::one() {
            let w = T::one() - v;
            (T::one() - w.powf(self.m)).powf(self.n_inv)
        } else {
            T::one()
        }
    }
}
