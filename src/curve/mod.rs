use crate::misc::FloatingPoint;

pub mod bisection;
pub mod catenary;
pub mod circle;
pub mod compound;
pub mod exponential;
pub mod gaussian;
pub mod logarithmic;
pub mod logistic;
pub mod piecewise;
pub mod polynomial;
pub mod reflected;
pub mod sine;
pub mod smoothstep;
pub mod superellipse;

pub use bisection::*;
pub use catenary::*;
pub use circle::*;
pub use compound::*;
pub use exponential::*;
pub use gaussian::*;
pub use logarithmic::*;
pub use logistic::*;
pub use piecewise::*;
pub use polynomial::*;
pub use reflected::*;
pub use sine::*;
pub use smoothstep::*;
pub use superellipse::*;

/// Monotonic mapping of the unit interval onto itself,
/// anchored so that `transform(0) = 0` and `transform(1) = 1`.
///
/// Both functions are only defined for inputs in `[0, 1]` and perform no
/// bounds checking. Callers that cannot guarantee the range must clamp
/// beforehand; the [`lerp`](crate::prelude::lerp) and
/// [`inverse_lerp`](crate::prelude::inverse_lerp) wrappers already do.
///
/// `inv_transform` must satisfy `inv_transform(transform(t)) ≈ t` for all
/// `t` in `[0, 1]`, up to floating point error and, for curves inverted
/// numerically, bisection precision.
pub trait Curve<T: FloatingPoint> {
    /// Evaluates the curve at parameter `t`.
    fn transform(&self, t: T) -> T;

    /// Recovers the parameter `t` that maps to value `v`.
    fn inv_transform(&self, v: T) -> T;
}

/// Owned, type-erased curve usable as a child of [`Compound`].
pub type BoxedCurve<T> = Box<dyn Curve<T> + Send + Sync>;

impl<T: FloatingPoint, C: Curve<T> + ?Sized> Curve<T> for &C {
    fn transform(&self, t: T) -> T {
        (**self).transform(t)
    }

    fn inv_transform(&self, v: T) -> T {
        (**self).inv_transform(v)
    }
}

impl<T: FloatingPoint, C: Curve<T> + ?Sized> Curve<T> for Box<C> {
    fn transform(&self, t: T) -> T {
        (**self).transform(t)
    }

    fn inv_transform(&self, v: T) -> T {
        (**self).inv_transform(v)
    }
}

#[cfg(test)]
mod tests;
