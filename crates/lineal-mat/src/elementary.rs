//! Elementary row-operation matrices.
//!
//! Each builder returns an n×n matrix equal to the identity except for one
//! structural change. Left-multiplying the result onto any n-row matrix
//! performs the corresponding row operation on it.
//!
//! Swap and add-multiple matrices are always invertible; a scale matrix is
//! invertible exactly when the scalar is non-zero. No builder validates its
//! scalar: the elimination driver only requests `scale` with the reciprocal
//! of a pivot it has already checked against zero.

use crate::dense::Matrix;
use crate::scalar::Scalar;

/// Matrix that exchanges rows `i` and `j`.
#[must_use]
pub fn swap<T: Scalar>(n: usize, i: usize, j: usize) -> Matrix<T> {
    let mut e = Matrix::identity(n);
    e.swap_rows(i, j);
    e
}

/// Matrix that multiplies row `i` by `scalar`.
#[must_use]
pub fn scale<T: Scalar>(n: usize, i: usize, scalar: T) -> Matrix<T> {
    let mut e = Matrix::identity(n);
    e[(i, i)] = scalar;
    e
}

/// Matrix that adds `scalar` times row `src` to row `target`.
#[must_use]
pub fn add_multiple<T: Scalar>(n: usize, target: usize, src: usize, scalar: T) -> Matrix<T> {
    let mut e = Matrix::identity(n);
    e[(target, src)] = scalar;
    e
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix<f64> {
        Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]])
    }

    #[test]
    fn test_swap_left_multiplication() {
        let m = swap(3, 0, 2).mm(&sample());
        assert_eq!(m.row(0), &[5.0, 6.0]);
        assert_eq!(m.row(1), &[3.0, 4.0]);
        assert_eq!(m.row(2), &[1.0, 2.0]);
    }

    #[test]
    fn test_scale_left_multiplication() {
        let m = scale(3, 1, 0.5).mm(&sample());
        assert_eq!(m.row(0), &[1.0, 2.0]);
        assert_eq!(m.row(1), &[1.5, 2.0]);
        assert_eq!(m.row(2), &[5.0, 6.0]);
    }

    #[test]
    fn test_add_multiple_left_multiplication() {
        let m = add_multiple(3, 2, 0, -5.0).mm(&sample());
        assert_eq!(m.row(0), &[1.0, 2.0]);
        assert_eq!(m.row(1), &[3.0, 4.0]);
        assert_eq!(m.row(2), &[0.0, -4.0]);
    }

    #[test]
    fn test_swap_is_self_inverse() {
        let e: Matrix<f64> = swap(4, 1, 3);
        assert_eq!(e.mm(&e), Matrix::identity(4));
    }

    #[test]
    fn test_add_multiple_inverse_negates_scalar() {
        let e: Matrix<f64> = add_multiple(3, 2, 1, 7.0);
        let e_inv: Matrix<f64> = add_multiple(3, 2, 1, -7.0);
        assert_eq!(e.mm(&e_inv), Matrix::identity(3));
    }
}
