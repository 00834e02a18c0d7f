//! Strassen's seven-product recursion.

use lineal_mat::{Matrix, Scalar};

/// Side length at or below which the direct triple loop is used.
pub const DEFAULT_THRESHOLD: usize = 64;

/// Multiplies two square power-of-two matrices with Strassen's algorithm.
///
/// Sizes at or below `threshold` are handled by the direct triple loop;
/// larger operands are split into quadrants and recombined from the seven
/// Strassen sub-products. The preconditions (square, equal, power-of-two
/// side length) are guaranteed by [`crate::pad_for_multiply`] and are not
/// re-checked here.
#[must_use]
pub fn strassen<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>, threshold: usize) -> Matrix<T> {
    debug_assert!(a.is_square() && b.is_square());
    debug_assert_eq!(a.num_rows(), b.num_rows());
    debug_assert!(a.num_rows().is_power_of_two());

    recurse(View::full(a), View::full(b), threshold)
}

/// Square index-range view into a matrix. Quadrant splitting moves the
/// origin and halves the side instead of copying entries.
#[derive(Clone, Copy)]
struct View<'a, T> {
    m: &'a Matrix<T>,
    row: usize,
    col: usize,
    n: usize,
}

impl<'a, T: Scalar> View<'a, T> {
    fn full(m: &'a Matrix<T>) -> Self {
        Self {
            m,
            row: 0,
            col: 0,
            n: m.num_rows(),
        }
    }

    fn at(&self, i: usize, j: usize) -> T {
        self.m[(self.row + i, self.col + j)]
    }

    /// Quadrant `(qi, qj)` with `qi`, `qj` in {0, 1}.
    fn quadrant(&self, qi: usize, qj: usize) -> Self {
        let mid = self.n / 2;
        Self {
            m: self.m,
            row: self.row + qi * mid,
            col: self.col + qj * mid,
            n: mid,
        }
    }

    /// Entry-wise sum as an owned matrix.
    fn add(&self, other: &Self) -> Matrix<T> {
        let mut out = Matrix::zeros(self.n, self.n);
        for i in 0..self.n {
            for j in 0..self.n {
                out[(i, j)] = self.at(i, j) + other.at(i, j);
            }
        }
        out
    }

    /// Entry-wise difference as an owned matrix.
    fn sub(&self, other: &Self) -> Matrix<T> {
        let mut out = Matrix::zeros(self.n, self.n);
        for i in 0..self.n {
            for j in 0..self.n {
                out[(i, j)] = self.at(i, j) - other.at(i, j);
            }
        }
        out
    }
}

fn mul_direct<T: Scalar>(a: View<'_, T>, b: View<'_, T>) -> Matrix<T> {
    let n = a.n;
    let mut out = Matrix::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            let mut sum = T::zero();
            for k in 0..n {
                sum = sum + a.at(i, k) * b.at(k, j);
            }
            out[(i, j)] = sum;
        }
    }
    out
}

fn recurse<T: Scalar>(a: View<'_, T>, b: View<'_, T>, threshold: usize) -> Matrix<T> {
    let n = a.n;
    if n <= threshold {
        return mul_direct(a, b);
    }

    let (a11, a12) = (a.quadrant(0, 0), a.quadrant(0, 1));
    let (a21, a22) = (a.quadrant(1, 0), a.quadrant(1, 1));
    let (b11, b12) = (b.quadrant(0, 0), b.quadrant(0, 1));
    let (b21, b22) = (b.quadrant(1, 0), b.quadrant(1, 1));

    // M1 = (A11+A22)(B11+B22)
    let s1 = a11.add(&a22);
    let s2 = b11.add(&b22);
    let m1 = recurse(View::full(&s1), View::full(&s2), threshold);
    // M2 = (A21+A22) B11
    let s3 = a21.add(&a22);
    let m2 = recurse(View::full(&s3), b11, threshold);
    // M3 = A11 (B12-B22)
    let s4 = b12.sub(&b22);
    let m3 = recurse(a11, View::full(&s4), threshold);
    // M4 = A22 (B21-B11)
    let s5 = b21.sub(&b11);
    let m4 = recurse(a22, View::full(&s5), threshold);
    // M5 = (A11+A12) B22
    let s6 = a11.add(&a12);
    let m5 = recurse(View::full(&s6), b22, threshold);
    // M6 = (A21-A11)(B11+B12)
    let s7 = a21.sub(&a11);
    let s8 = b11.add(&b12);
    let m6 = recurse(View::full(&s7), View::full(&s8), threshold);
    // M7 = (A12-A22)(B21+B22)
    let s9 = a12.sub(&a22);
    let s10 = b21.add(&b22);
    let m7 = recurse(View::full(&s9), View::full(&s10), threshold);

    let c11 = &(&(&m1 + &m4) - &m5) + &m7;
    let c12 = &m3 + &m5;
    let c21 = &m2 + &m4;
    let c22 = &(&(&m1 - &m2) + &m3) + &m6;

    let mid = n / 2;
    let mut c = Matrix::zeros(n, n);
    c.set_block(0, 0, &c11);
    c.set_block(0, mid, &c12);
    c.set_block(mid, 0, &c21);
    c.set_block(mid, mid, &c22);
    c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
    fn sample(n: usize, offset: i64) -> Matrix<f64> {
        Matrix::from_rows(
            (0..n)
                .map(|i| {
                    (0..n)
                        .map(|j| (((i * n + j) as i64 + offset) % 17 - 8) as f64)
                        .collect()
                })
                .collect(),
        )
    }

    #[test]
    fn test_base_case_matches_direct_product() {
        let a = sample(4, 1);
        let b = sample(4, 5);
        assert_eq!(strassen(&a, &b, 64), a.mm(&b));
    }

    #[test]
    fn test_full_recursion_2x2() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]]);
        // Threshold 1 forces one full level of recursion.
        let c = strassen(&a, &b, 1);
        assert_eq!(c, Matrix::from_rows(vec![vec![19.0, 22.0], vec![43.0, 50.0]]));
    }

    #[test]
    fn test_every_threshold_agrees_with_direct() {
        let n = 8;
        let a = sample(n, 3);
        let b = sample(n, 11);
        let expected = a.mm(&b);
        for threshold in 1..=n {
            let c = strassen(&a, &b, threshold);
            for i in 0..n {
                for j in 0..n {
                    assert!((c[(i, j)] - expected[(i, j)]).abs() < 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_identity_is_neutral() {
        let a = sample(8, 7);
        let id = Matrix::identity(8);
        assert_eq!(strassen(&a, &id, 2), a);
        assert_eq!(strassen(&id, &a, 2), a);
    }
}
