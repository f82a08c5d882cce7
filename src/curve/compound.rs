use crate::misc::FloatingPoint;

use super::{BoxedCurve, Curve};

/// Sequential composition of curves.
///
/// `transform` threads the parameter through the children in list order,
/// `inv_transform` threads the value through them in reverse order. No
/// clamping happens between stages, so children that leave `[0, 1]` in the
/// interior feed raw values into the next stage; composing curves that each
/// map the unit interval onto itself keeps the compound anchored at 0 and 1.
///
/// # Example
/// ```
/// use shaping::prelude::*;
/// use approx::assert_relative_eq;
///
/// let compound: Compound<f64> = Compound::new(vec![Box::new(Square), Box::new(Square)]);
/// assert_relative_eq!(compound.transform(0.5), 0.5_f64.powi(4));
/// ```
pub struct Compound<T: FloatingPoint> {
    curves: Vec<BoxedCurve<T>>,
}

impl<T: FloatingPoint> Compound<T> {
    pub fn new(curves: Vec<BoxedCurve<T>>) -> Self {
        Self { curves }
    }

    pub fn curves(&self) -> &[BoxedCurve<T>] {
        &self.curves
    }
}

impl<T: FloatingPoint> Curve<T> for Compound<T> {
    fn transform(&self, t: T) -> T {
        self.curves.iter().fold(t, |t, c| c.transform(t))
    }

    fn inv_transform(&self, v: T) -> T {
        self.curves.iter().rev().fold(v, |v, c| c.inv_transform(v))
    }
}
