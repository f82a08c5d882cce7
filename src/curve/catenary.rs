use crate::misc::FloatingPoint;

use super::Curve;

/// Catenary ease-in, the hanging-chain curve rescaled to the unit square:
/// `v = (cosh(t) - 1) / (cosh(1) - 1)`.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catenary;

impl<T: FloatingPoint> Curve<T> for Catenary {
    fn transform(&self, t: T) -> T {
        (t.cosh() - T::one()) / (T::one().cosh() - T::one())
    }

    fn inv_transform(&self, v: T) -> T {
        (v * (T::one().cosh() - T::one()) + T::one()).acosh()
    }
}
