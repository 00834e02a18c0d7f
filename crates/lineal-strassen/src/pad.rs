//! Zero-padding of multiplication operands.

use lineal_mat::{Matrix, Scalar};

/// Operands padded to a common square power-of-two size, together with the
/// dimensions the product must be cropped to.
#[derive(Debug, Clone)]
pub struct Padded<T> {
    /// Left operand, zero-extended to n×n.
    pub a: Matrix<T>,
    /// Right operand, zero-extended to n×n.
    pub b: Matrix<T>,
    /// Row count of the true product (rows of the original left operand).
    pub out_rows: usize,
    /// Column count of the true product (columns of the original right
    /// operand).
    pub out_cols: usize,
}

/// Pads `a` and `b` to the smallest common square power-of-two size.
///
/// Compatibility of the inner dimensions is the caller's responsibility;
/// the padder only looks at extents. All padding entries are zero, so
/// multiplying the padded pair and cropping to `(out_rows, out_cols)`
/// yields exactly the product of the original operands.
#[must_use]
pub fn pad_for_multiply<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Padded<T> {
    let extent = a
        .num_rows()
        .max(a.num_cols())
        .max(b.num_rows())
        .max(b.num_cols());
    let n = extent.next_power_of_two();

    let mut a_pad = Matrix::zeros(n, n);
    a_pad.set_block(0, 0, a);
    let mut b_pad = Matrix::zeros(n, n);
    b_pad.set_block(0, 0, b);

    Padded {
        a: a_pad,
        b: b_pad,
        out_rows: a.num_rows(),
        out_cols: b.num_cols(),
    }
}
