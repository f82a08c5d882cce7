use crate::misc::FloatingPoint;

use super::{inverse_by_bisection, Curve};

/// Cubic Hermite smoothstep, `v = t²(3 - 2t)`.
/// The first derivative vanishes at both endpoints.
///
/// The cubic has no convenient closed-form inverse, so `inv_transform`
/// falls back to [`inverse_by_bisection`].
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Smoothstep;

impl<T: FloatingPoint> Curve<T> for Smoothstep {
    fn transform(&self, t: T) -> T {
        let two = T::from_f64(2.0).unwrap();
        let three = T::from_f64(3.0).unwrap();
        t * t * (three - two * t)
    }

    fn inv_transform(&self, v: T) -> T {
        inverse_by_bisection(self, v)
    }
}

/// Quintic smootherstep, `v = t³(t(6t - 15) + 10)`.
/// The first and second derivatives vanish at both endpoints.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Smootherstep;

impl<T: FloatingPoint> Curve<T> for Smootherstep {
    fn transform(&self, t: T) -> T {
        let six = T::from_f64(6.0).unwrap();
        let ten = T::from_f64(10.0).unwrap();
        let fifteen = T::from_f64(15.0).unwrap();
        t * t * t * (t * (t * six - fifteen) + ten)
    }

    fn inv_transform(&self, v: T) -> T {
        inverse_by_bisection(self, v)
    }
}
