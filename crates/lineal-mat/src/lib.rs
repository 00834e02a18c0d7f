//! # lineal-mat
//!
//! Dense matrix container for the Lineal engine.
//!
//! This crate provides:
//! - A row-major dense matrix generic over a floating-point [`Scalar`]
//! - In-place row operations used by the elimination routines
//! - Factories for the three kinds of elementary row-operation matrices
//!
//! Matrices are immutable by convention at the engine boundary: operations
//! take references and return fresh values, so callers never observe
//! in-place mutation of their inputs.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dense;
pub mod elementary;
pub mod scalar;

pub use dense::Matrix;
pub use scalar::Scalar;
