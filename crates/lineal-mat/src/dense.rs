//! Dense matrix stored in row-major order.
//!
//! The container is deliberately small: the multiplication and elimination
//! crates build everything else out of indexing, block copies, and the three
//! in-place row operations.

use std::fmt;
use std::ops::{Add, Index, IndexMut, Sub};

use crate::scalar::Scalar;

/// Dense matrix in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    /// Matrix entries in row-major order.
    data: Vec<T>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl<T: Scalar> Matrix<T> {
    /// Creates a new matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![T::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates a matrix from a 2D vector.
    ///
    /// # Panics
    ///
    /// Panics if the rows are empty or have unequal lengths.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        assert!(!rows.is_empty(), "matrix needs at least one row");
        let num_rows = rows.len();
        let num_cols = rows[0].len();
        assert!(num_cols > 0, "matrix needs at least one column");
        for row in &rows {
            assert_eq!(row.len(), num_cols, "rows must have equal lengths");
        }
        Self {
            data: rows.into_iter().flatten().collect(),
            num_rows,
            num_cols,
        }
    }

    /// Creates an n×n identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Matrix-matrix multiply: C = A * B, by the direct triple loop.
    ///
    /// # Panics
    ///
    /// Panics if the inner dimensions do not match.
    #[must_use]
    pub fn mm(&self, other: &Self) -> Self {
        assert_eq!(self.num_cols, other.num_rows);

        let mut result = Self::zeros(self.num_rows, other.num_cols);
        for i in 0..self.num_rows {
            for j in 0..other.num_cols {
                let mut sum = T::zero();
                for k in 0..self.num_cols {
                    sum = sum + self[(i, k)] * other[(k, j)];
                }
                result[(i, j)] = sum;
            }
        }
        result
    }

    /// Horizontal concatenation `[self | other]`.
    ///
    /// # Panics
    ///
    /// Panics if the row counts differ.
    #[must_use]
    pub fn augment(&self, other: &Self) -> Self {
        assert_eq!(self.num_rows, other.num_rows);

        let mut result = Self::zeros(self.num_rows, self.num_cols + other.num_cols);
        for i in 0..self.num_rows {
            for j in 0..self.num_cols {
                result[(i, j)] = self[(i, j)];
            }
            for j in 0..other.num_cols {
                result[(i, self.num_cols + j)] = other[(i, j)];
            }
        }
        result
    }

    /// Copies `num_rows × num_cols` entries starting at `(row, col)` into a
    /// fresh matrix.
    #[must_use]
    pub fn submatrix(&self, row: usize, col: usize, num_rows: usize, num_cols: usize) -> Self {
        assert!(row + num_rows <= self.num_rows);
        assert!(col + num_cols <= self.num_cols);

        let mut result = Self::zeros(num_rows, num_cols);
        for i in 0..num_rows {
            for j in 0..num_cols {
                result[(i, j)] = self[(row + i, col + j)];
            }
        }
        result
    }

    /// Writes `block` into this matrix with its top-left corner at
    /// `(row, col)`.
    pub fn set_block(&mut self, row: usize, col: usize, block: &Self) {
        assert!(row + block.num_rows <= self.num_rows);
        assert!(col + block.num_cols <= self.num_cols);

        for i in 0..block.num_rows {
            for j in 0..block.num_cols {
                self[(row + i, col + j)] = block[(i, j)];
            }
        }
    }

    /// Swaps two rows in-place.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.num_cols;
        let j_start = j * self.num_cols;
        for k in 0..self.num_cols {
            self.data.swap(i_start + k, j_start + k);
        }
    }

    /// Scales a row by a scalar.
    pub fn scale_row(&mut self, row: usize, scale: T) {
        for k in 0..self.num_cols {
            self[(row, k)] = self[(row, k)] * scale;
        }
    }

    /// Adds a scaled row to another: row[target] += scale * row[source].
    pub fn add_scaled_row(&mut self, target: usize, source: usize, scale: T) {
        for k in 0..self.num_cols {
            let val = self[(source, k)] * scale;
            self[(target, k)] = self[(target, k)] + val;
        }
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.num_cols + col]
    }
}

impl<T: Scalar> Add for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, other: Self) -> Matrix<T> {
        assert_eq!(self.num_rows, other.num_rows);
        assert_eq!(self.num_cols, other.num_cols);

        Matrix {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| a + b)
                .collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }
}

impl<T: Scalar> Sub for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, other: Self) -> Matrix<T> {
        assert_eq!(self.num_rows, other.num_rows);
        assert_eq!(self.num_cols, other.num_cols);

        Matrix {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| a - b)
                .collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }
}

impl<T: Scalar> fmt::Display for Matrix<T> {
    /// Rows on separate lines, entries space-separated with four decimals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.num_rows {
            if i > 0 {
                writeln!(f)?;
            }
            for j in 0..self.num_cols {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:.4}", self[(i, j)])?;
            }
        }
        Ok(())
    }
}
