use crate::misc::FloatingPoint;

use super::Curve;

/// Identity curve, `v = t`.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Linear;

impl<T: FloatingPoint> Curve<T> for Linear {
    fn transform(&self, t: T) -> T {
        t
    }

    fn inv_transform(&self, v: T) -> T {
        v
    }
}

/// Quadratic ease-in, `v = t²`.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square;

impl<T: FloatingPoint> Curve<T> for Square {
    fn transform(&self, t: T) -> T {
        t * t
    }

    fn inv_transform(&self, v: T) -> T {
        v.sqrt()
    }
}

/// Cubic ease-in, `v = t³`.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cube;

impl<T: FloatingPoint> Curve<T> for Cube {
    fn transform(&self, t: T) -> T {
        t * t * t
    }

    fn inv_transform(&self, v: T) -> T {
        v.powf(T::one() / T::from_f64(3.0).unwrap())
    }
}
