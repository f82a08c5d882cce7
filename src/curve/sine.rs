use crate::misc::FloatingPoint;

use super::Curve;

/// Sinusoidal ease-in-out, a half sine period mapped onto the unit square.
/// The first derivative vanishes at both endpoints.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SineInOut;

impl<T: FloatingPoint> Curve<T> for SineInOut {
    fn transform(&self, t: T) -> T {
        let half = T::from_f64(0.5).unwrap();
        (((t - half) * T::pi()).sin() + T::one()) * half
    }

    fn inv_transform(&self, v: T) -> T {
        let two = T::from_f64(2.0).unwrap();
        (v * two - T::one()).asin() / T::pi() + T::from_f64(0.5).unwrap()
    }
}

/// Sinusoidal ease-out, a quarter sine period. The first derivative
/// vanishes at `t = 1`.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SineOut;

impl<T: FloatingPoint> Curve<T> for SineOut {
    fn transform(&self, t: T) -> T {
        (t * T::frac_pi_2()).sin()
    }

    fn inv_transform(&self, v: T) -> T {
        v.asin() / T::frac_pi_2()
    }
}

/// Sinusoidal ease-in, a quarter sine period. The first derivative
/// vanishes at `t = 0`.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SineIn;

impl<T: FloatingPoint> Curve<T> for SineIn {
    fn transform(&self, t: T) -> T {
        ((t - T::one()) * T::frac_pi_2()).sin() + T::one()
    }

    fn inv_transform(&self, v: T) -> T {
        (v - T::one()).asin() / T::frac_pi_2() + T::one()
    }
}
