use nalgebra::RealField;
use num_traits::ToPrimitive;

/// Trait for floating point scalar types (f32, f64)
/// used as the parameter and value type of every curve
pub trait FloatingPoint: RealField + ToPrimitive + Copy {}

impl FloatingPoint for f32 {}
impl FloatingPoint for f64 {}
