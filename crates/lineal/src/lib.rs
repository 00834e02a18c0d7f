//! # Lineal
//!
//! A small numeric engine for dense real matrices.
//!
//! Lineal multiplies matrices with Strassen's divide-and-conquer algorithm
//! and solves linear systems, inverts matrices, and computes ranks via
//! Gauss-Jordan elimination expressed as an explicit product of elementary
//! row-operation matrices.
//!
//! The public surface is the four operations in [`ops`]:
//! [`ops::multiply`], [`ops::solve`], [`ops::inverse`], and
//! [`ops::determinant`]. Each call is an independent, reentrant computation
//! over its inputs; nothing is cached or retained between calls.
//!
//! # Quick start
//!
//! ```
//! use lineal::prelude::*;
//!
//! let a: Matrix<f64> = Matrix::from_rows(vec![vec![2.0, 1.0], vec![1.0, 3.0]]);
//! let b = Matrix::from_rows(vec![vec![5.0], vec![7.0]]);
//!
//! match solve(&a, &b)? {
//!     Solution::Unique(x) => assert!((x[(0, 0)] - 1.6).abs() < 1e-9),
//!     Solution::Degenerate { rank, .. } => panic!("unexpected rank {rank}"),
//! }
//! # Ok::<(), lineal::LinealError>(())
//! ```
//!
//! # Numerical policy
//!
//! All pivot and entry tests during elimination compare exactly against
//! zero; there is no tolerance band. Extremely ill-conditioned but
//! technically non-singular matrices are therefore handled like any other
//! input, and their results may be inaccurate. This is a documented
//! limitation, not a special case.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use lineal_mat as mat;
pub use lineal_solve as solver;
pub use lineal_strassen as strassen;

pub mod error;
pub mod ops;
pub mod prelude;
pub mod text;

pub use error::LinealError;
pub use ops::Solution;
