//! # lineal-strassen
//!
//! Divide-and-conquer matrix multiplication for the Lineal engine.
//!
//! This crate provides:
//! - Zero-padding of rectangular operands to a common square power-of-two
//!   size, with the crop dimensions of the true product
//! - Strassen's seven-product recursion, falling back to the direct triple
//!   loop below a size threshold
//!
//! The recursion reads its quadrants through index-range views into the
//! operand buffers; only the sum and difference temporaries feeding the
//! seven sub-products are materialized.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod pad;
pub mod strassen;

pub use pad::{pad_for_multiply, Padded};
pub use strassen::{strassen, DEFAULT_THRESHOLD};

#[cfg(test)]
mod proptests;
