use nalgebra::{convert, RealField};
use num_traits::ToPrimitive;

/// Trait for floating point types (f32, f64)
/// Mainly used to identify the scalar field of the nalgebra types flowing through the crate
pub trait FloatingPoint: RealField + ToPrimitive + Copy {
    /// Convert an `f64` literal (tolerances, defaults) into the scalar type.
    fn from_literal(value: f64) -> Self {
        convert(value)
    }

    /// Convert radians to degrees.
    fn to_degrees(self) -> Self {
        self * Self::from_literal(180.) / Self::pi()
    }
}

impl FloatingPoint for f32 {}
impl FloatingPoint for f64 {}
