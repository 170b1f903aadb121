use core::fmt::{Debug, Display};
use num_traits::Float;

/// Trait for the floating-point samples flowing through the estimators.
///
/// Implemented for `f32` and `f64`. Besides the arithmetic from
/// [`num_traits::Float`], it provides the infallible conversions the
/// pipeline needs: time-stamp deltas (`i64` ticks), buffer lengths and
/// literal constants.
pub trait FloatScalar: Float + Copy + PartialEq + Debug + Display + Default {
    /// Convert an elapsed number of time-stamp ticks into a scalar.
    fn from_ticks(ticks: i64) -> Self;

    /// Convert a sample count into a scalar.
    fn from_count(count: usize) -> Self;

    /// Convert an `f64` constant, rounding to the nearest representable value.
    fn constant(value: f64) -> Self;
}

macro_rules! impl_float_scalar {
    ($($t:ty),*) => {
        $(
            impl FloatScalar for $t {
                #[inline] fn from_ticks(ticks: i64) -> $t { ticks as $t }
                #[inline] fn from_count(count: usize) -> $t { count as $t }
                #[inline] fn constant(value: f64) -> $t { value as $t }
            }
        )*
    };
}

impl_float_scalar!(f32, f64);
