//! Classical elimination routines.
//!
//! Rank, determinant, and inverse are computed here by plain in-place row
//! reduction, independently of the elementary-matrix driver in
//! [`crate::gauss_jordan`]. The independence is part of the observable
//! behavior: the solver reports the rank computed here, never a count of
//! the pivots it found itself.

use lineal_mat::{Matrix, Scalar};

/// Forward elimination with first-non-zero partial pivoting.
///
/// Returns the row-echelon form and the rank (number of pivots).
#[must_use]
pub fn row_echelon<T: Scalar>(a: &Matrix<T>) -> (Matrix<T>, usize) {
    let mut m = a.clone();
    let mut pivot_row = 0;
    let mut pivot_col = 0;

    while pivot_row < m.num_rows() && pivot_col < m.num_cols() {
        // First non-zero entry at or below the pivot row
        let mut found = pivot_row;
        while found < m.num_rows() && m[(found, pivot_col)] == T::zero() {
            found += 1;
        }

        if found == m.num_rows() {
            // No pivot in this column
            pivot_col += 1;
            continue;
        }

        m.swap_rows(pivot_row, found);

        let inv = m[(pivot_row, pivot_col)].recip();
        m.scale_row(pivot_row, inv);

        for row in pivot_row + 1..m.num_rows() {
            if m[(row, pivot_col)] != T::zero() {
                let factor = -m[(row, pivot_col)];
                m.add_scaled_row(row, pivot_row, factor);
            }
        }

        pivot_row += 1;
        pivot_col += 1;
    }

    (m, pivot_row)
}

/// Rank of a matrix: the number of pivots of its row-echelon form.
#[must_use]
pub fn rank<T: Scalar>(a: &Matrix<T>) -> usize {
    row_echelon(a).1
}

/// Reduced row-echelon form: forward elimination plus back-substitution.
fn rref<T: Scalar>(a: &Matrix<T>) -> (Matrix<T>, usize) {
    let (mut m, rank) = row_echelon(a);

    for pivot_row in (0..rank).rev() {
        // Find pivot column (the first rank rows each have one)
        let mut pivot_col = 0;
        for col in 0..m.num_cols() {
            if m[(pivot_row, col)] != T::zero() {
                pivot_col = col;
                break;
            }
        }

        for row in 0..pivot_row {
            if m[(row, pivot_col)] != T::zero() {
                let factor = -m[(row, pivot_col)];
                m.add_scaled_row(row, pivot_row, factor);
            }
        }
    }

    (m, rank)
}

/// Determinant by forward elimination, tracking the sign of the row swaps.
///
/// Returns the raw value; any display rounding belongs to the caller.
///
/// # Panics
///
/// Panics if the matrix is not square.
#[must_use]
pub fn determinant<T: Scalar>(a: &Matrix<T>) -> T {
    assert!(a.is_square(), "determinant requires a square matrix");
    let n = a.num_rows();

    let mut m = a.clone();
    let mut det = T::one();

    for col in 0..n {
        let mut pivot_row = col;
        while pivot_row < n && m[(pivot_row, col)] == T::zero() {
            pivot_row += 1;
        }

        if pivot_row == n {
            return T::zero();
        }

        if pivot_row != col {
            m.swap_rows(col, pivot_row);
            det = -det;
        }

        let pivot = m[(col, col)];
        det = det * pivot;

        let inv = pivot.recip();
        for row in col + 1..n {
            if m[(row, col)] != T::zero() {
                let factor = -(m[(row, col)] * inv);
                m.add_scaled_row(row, col, factor);
            }
        }
    }

    det
}

/// Inverse by Gauss-Jordan reduction of `[A | I]`.
///
/// Singularity is decided by the rank of A alone: the rows of `[A | I]`
/// are always linearly independent, so a rank taken from the augmented
/// matrix would find its missing pivots in the identity columns and never
/// drop below n. Returns `None` when rank(A) < n. Deliberately does not
/// reuse the transform accumulated by [`crate::gauss_jordan`].
///
/// # Panics
///
/// Panics if the matrix is not square.
#[must_use]
pub fn inverse<T: Scalar>(a: &Matrix<T>) -> Option<Matrix<T>> {
    assert!(a.is_square(), "inverse requires a square matrix");
    let n = a.num_rows();

    if rank(a) < n {
        return None;
    }

    let (reduced, _) = rref(&a.augment(&Matrix::identity(n)));
    Some(reduced.submatrix(0, n, n, n))
}
