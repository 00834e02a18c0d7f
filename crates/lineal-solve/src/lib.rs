//! # lineal-solve
//!
//! Elimination routines for the Lineal engine.
//!
//! This crate provides:
//! - Gauss-Jordan elimination of an augmented system `[A | B]`, driven
//!   entirely by left-multiplied elementary matrices whose product is
//!   accumulated as an inverse candidate
//! - Classical echelon routines (rank, determinant, inverse) that are
//!   deliberately independent of the elementary-matrix driver
//!
//! All pivot tests compare exactly against zero. Near-singular matrices are
//! therefore treated as regular; see the crate-level documentation of the
//! umbrella crate for the resulting limitation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::float_cmp)]

pub mod echelon;
pub mod gauss_jordan;

pub use echelon::{determinant, inverse, rank, row_echelon};
pub use gauss_jordan::{gauss_jordan, Elimination};
