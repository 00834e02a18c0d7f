//! Scalar trait for matrix entries.
//!
//! The engine is generic over the entry type the same way the rest of the
//! numeric stack is generic over its algebraic structures. Here the only
//! structures of interest are IEEE floating-point fields, so the trait is a
//! thin extension of [`num_traits::Float`].

use std::fmt::{Debug, Display};

use num_traits::Float;

/// A floating-point type usable as a matrix entry.
///
/// Zero tests throughout the engine are exact comparisons against
/// `Scalar::zero()`, never tolerance bands.
pub trait Scalar: Float + Debug + Display + Send + Sync + 'static {
    /// Converts an `f64` constant into this scalar type.
    ///
    /// Used for literal constants (parsing, display rounding); the
    /// conversion may lose precision for `f32`.
    fn from_f64(value: f64) -> Self;
}

impl Scalar for f32 {
    #[allow(clippy::cast_possible_truncation)]
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Scalar for f64 {
    fn from_f64(value: f64) -> Self {
        value
    }
}
