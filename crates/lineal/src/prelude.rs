//! Prelude module for convenient imports.

pub use lineal_mat::{Matrix, Scalar};

pub use crate::error::LinealError;
pub use crate::ops::{determinant, inverse, multiply, multiply_with_threshold, solve, Solution};
pub use crate::text::{parse_matrix, ParseMatrixError};
