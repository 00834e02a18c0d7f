//! The four facade operations.
//!
//! Shape validation happens here, before any arithmetic; the algorithm
//! crates below assume well-formed operands.

use lineal_mat::{Matrix, Scalar};
use lineal_solve::{echelon, gauss_jordan};
use lineal_strassen::{pad_for_multiply, strassen, DEFAULT_THRESHOLD};

use crate::error::LinealError;

/// Outcome of [`solve`].
#[derive(Clone, Debug, PartialEq)]
pub enum Solution<T> {
    /// The system has full rank; `X` is its unique solution.
    Unique(Matrix<T>),
    /// The computed rank is below the number of unknowns. `x` is whatever
    /// the elimination produced and must not be presented as definitive.
    Degenerate {
        /// Right-hand-side columns after elimination.
        x: Matrix<T>,
        /// Rank of the coefficient matrix.
        rank: usize,
    },
}

impl<T> Solution<T> {
    /// Returns true when the system was rank-deficient.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Solution::Degenerate { .. })
    }

    /// The produced columns, reliable or not.
    #[must_use]
    pub fn x(&self) -> &Matrix<T> {
        match self {
            Solution::Unique(x) | Solution::Degenerate { x, .. } => x,
        }
    }
}

/// Multiplies two matrices with the default recursion threshold.
///
/// # Errors
///
/// `ShapeMismatch` when `cols(a) != rows(b)`.
pub fn multiply<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, LinealError> {
    multiply_with_threshold(a, b, DEFAULT_THRESHOLD)
}

/// Multiplies two matrices, recursing down to the given threshold.
///
/// The operands are zero-padded to a common square power-of-two size,
/// multiplied with Strassen's algorithm, and the product is cropped back to
/// `(rows(a), cols(b))`.
///
/// # Errors
///
/// `ShapeMismatch` when `cols(a) != rows(b)`.
pub fn multiply_with_threshold<T: Scalar>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    threshold: usize,
) -> Result<Matrix<T>, LinealError> {
    if a.num_cols() != b.num_rows() {
        return Err(LinealError::ShapeMismatch(format!(
            "cannot multiply {}x{} by {}x{}",
            a.num_rows(),
            a.num_cols(),
            b.num_rows(),
            b.num_cols()
        )));
    }

    let padded = pad_for_multiply(a, b);
    let product = strassen(&padded.a, &padded.b, threshold);
    Ok(product.submatrix(0, 0, padded.out_rows, padded.out_cols))
}

/// Solves `A·X = B` by Gauss-Jordan elimination.
///
/// Rank deficiency is not an error: the result is tagged
/// [`Solution::Degenerate`] and still carries the columns the elimination
/// produced.
///
/// # Errors
///
/// `ShapeMismatch` when A is not square or B has a different row count.
pub fn solve<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Solution<T>, LinealError> {
    if !a.is_square() {
        return Err(LinealError::ShapeMismatch(format!(
            "solve requires a square coefficient matrix, got {}x{}",
            a.num_rows(),
            a.num_cols()
        )));
    }
    if b.num_rows() != a.num_rows() {
        return Err(LinealError::ShapeMismatch(format!(
            "right-hand side has {} rows, expected {}",
            b.num_rows(),
            a.num_rows()
        )));
    }

    let elimination = gauss_jordan(a, b);
    if elimination.rank < a.num_rows() {
        Ok(Solution::Degenerate {
            x: elimination.solution,
            rank: elimination.rank,
        })
    } else {
        Ok(Solution::Unique(elimination.solution))
    }
}

/// Inverts a square matrix.
///
/// # Errors
///
/// `ShapeMismatch` when A is not square, `SingularMatrix` when A has no
/// inverse.
pub fn inverse<T: Scalar>(a: &Matrix<T>) -> Result<Matrix<T>, LinealError> {
    if !a.is_square() {
        return Err(LinealError::ShapeMismatch(format!(
            "inverse requires a square matrix, got {}x{}",
            a.num_rows(),
            a.num_cols()
        )));
    }

    echelon::inverse(a).ok_or(LinealError::SingularMatrix)
}

/// Determinant of a square matrix, rounded to four decimal digits.
///
/// # Errors
///
/// `ShapeMismatch` when A is not square.
pub fn determinant<T: Scalar>(a: &Matrix<T>) -> Result<T, LinealError> {
    if !a.is_square() {
        return Err(LinealError::ShapeMismatch(format!(
            "determinant requires a square matrix, got {}x{}",
            a.num_rows(),
            a.num_cols()
        )));
    }

    let scale = T::from_f64(1.0e4);
    Ok((echelon::determinant(a) * scale).round() / scale)
}
