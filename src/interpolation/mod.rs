use crate::curve::Curve;
use crate::misc::FloatingPoint;

/// Interpolates between `start` and `end` with the weight shaped by `curve`.
///
/// `t` is clamped to `[0, 1]` before the curve is evaluated: out-of-range
/// parameters return the corresponding endpoint exactly, without touching
/// the curve.
///
/// # Example
/// ```
/// use shaping::prelude::*;
/// use approx::assert_relative_eq;
///
/// assert_relative_eq!(lerp(0.5, 10., 20., &Linear), 15.);
/// assert_relative_eq!(lerp(0.5, 10., 20., &Square), 12.5);
/// assert_relative_eq!(lerp(-1., 10., 20., &Square), 10.);
/// ```
pub fn lerp<T, C>(t: T, start: T, end: T, curve: &C) -> T
where
    T: FloatingPoint,
    C: Curve<T> + ?Sized,
{
    if t < T::zero() {
        return start;
    }
    if t > T::one() {
        return end;
    }
    let w = curve.transform(t);
    (T::one() - w) * start + w * end
}

/// Recovers the shaped parameter that [`lerp`] would map to `v`.
///
/// The normalized position `(v - start) / (end - start)` is clamped to
/// `[0, 1]` before `inv_transform` is called. When `end == start` the
/// quotient is not finite; it is clamped like any other out-of-range value,
/// with NaN mapping to 0.
///
/// # Example
/// ```
/// use shaping::prelude::*;
/// use approx::assert_relative_eq;
///
/// assert_relative_eq!(inverse_lerp(12.5, 10., 20., &Square), 0.5);
/// assert_relative_eq!(inverse_lerp(10., 10., 20., &Square), 0.);
/// assert_relative_eq!(inverse_lerp(20., 10., 20., &Square), 1.);
/// ```
pub fn inverse_lerp<T, C>(v: T, start: T, end: T, curve: &C) -> T
where
    T: FloatingPoint,
    C: Curve<T> + ?Sized,
{
    let t = (v - start) / (end - start);
    // NaN from a zero-width range fails this comparison and clamps low.
    if !(t >= T::zero()) {
        return T::zero();
    }
    if t > T::one() {
        return T::one();
    }
    curve.inv_transform(t)
}

/// Converts `v` from one interpolation space to another, with independently
/// shaped input and output ranges.
///
/// [`inverse_lerp`] with `curve_in` recovers the parameter inside
/// `[istart, iend]`, then [`lerp`] with `curve_out` maps it into
/// `[ostart, oend]`.
///
/// # Example
/// ```
/// use shaping::prelude::*;
/// use approx::assert_relative_eq;
///
/// // Change of range only
/// assert_relative_eq!(remap(5., 0., 10., 0., 100., &Linear, &Linear), 50.);
/// // Identity round trip
/// assert_relative_eq!(remap(0.3, 0., 1., 0., 1., &Linear, &Linear), 0.3);
/// ```
pub fn remap<T, I, O>(
    v: T,
    istart: T,
    iend: T,
    ostart: T,
    oend: T,
    curve_in: &I,
    curve_out: &O,
) -> T
where
    T: FloatingPoint,
    I: Curve<T> + ?Sized,
    O: Curve<T> + ?Sized,
{
    lerp(
        inverse_lerp(v, istart, iend, curve_in),
        ostart,
        oend,
        curve_out,
    )
}

#[cfg(test)]
mod tests;
