use crate::misc::FloatingPoint;

use super::Curve;

/// Circular ease-in, the lower-right quarter of the unit circle:
/// `v = 1 - √(1 - t²)`.
///
/// The branch at `t = 1` keeps the square root away from tiny negative
/// arguments produced by rounding.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CircleIn;

impl<T: FloatingPoint> Curve<T> for CircleIn {
    fn transform(&self, t: T) -> T {
        if t < T::one() {
            T::one() - (T::one() - t * t).sqrt()
        } else {
            T::one()
        }
    }

    fn inv_transform(&self, v: T) -> T {
        if v < T::one() {
            let w = v - T::one();
            (T::one() - w * w).sqrt()
        } else {
            T::one()
        }
    }
}

/// Circular ease-out, the upper-left quarter of the unit circle:
/// `v = √(t(2 - t))`.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CircleOut;

impl<T: FloatingPoint> Curve<T> for CircleOut {
    fn transform(&self, t: T) -> T {
        (t * (T::from_f64(2.0).unwrap() - t)).sqrt()
    }

    fn inv_transform(&self, v: T) -> T {
        T::one() - (T::one() - v * v).sqrt()
    }
}
