//! Property-based tests for padded Strassen multiplication.

use proptest::prelude::*;

use lineal_mat::Matrix;

use crate::{pad_for_multiply, strassen};

// Strategy for matrix dimensions small enough for exhaustive thresholds
fn dim() -> impl Strategy<Value = usize> {
    1usize..=9
}

// Strategy for a rows×cols matrix with small integer-valued entries
fn matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix<f64>> {
    proptest::collection::vec(
        proptest::collection::vec((-50i32..=50).prop_map(f64::from), cols),
        rows,
    )
    .prop_map(Matrix::from_rows)
}

/// Pads, multiplies, and crops back to the true product shape.
fn padded_product(a: &Matrix<f64>, b: &Matrix<f64>, threshold: usize) -> Matrix<f64> {
    let padded = pad_for_multiply(a, b);
    let full = strassen(&padded.a, &padded.b, threshold);
    full.submatrix(0, 0, padded.out_rows, padded.out_cols)
}

proptest! {
    #[test]
    fn square_product_matches_triple_loop_for_any_threshold(
        (n, seed) in dim().prop_flat_map(|n| (Just(n), (matrix(n, n), matrix(n, n)))),
    ) {
        let (a, b) = seed;
        let expected = a.mm(&b);
        for threshold in 1..=n {
            let c = padded_product(&a, &b, threshold);
            prop_assert_eq!(c.num_rows(), n);
            prop_assert_eq!(c.num_cols(), n);
            for i in 0..n {
                for j in 0..n {
                    prop_assert!((c[(i, j)] - expected[(i, j)]).abs() < 1e-9);
                }
            }
        }
    }

    #[test]
    fn rectangular_product_has_cropped_shape(
        (r1, inner, c2) in (dim(), dim(), dim()),
    ) {
        let a = Matrix::zeros(r1, inner);
        let b = Matrix::zeros(inner, c2);
        let c = padded_product(&a, &b, 1);
        prop_assert_eq!(c.num_rows(), r1);
        prop_assert_eq!(c.num_cols(), c2);
    }

    #[test]
    fn rectangular_product_matches_triple_loop(
        ((a, b), threshold) in (dim(), dim(), dim())
            .prop_flat_map(|(r1, inner, c2)| (matrix(r1, inner), matrix(inner, c2)))
            .prop_flat_map(|(a, b)| {
                let n = a.num_rows().max(a.num_cols()).max(b.num_cols());
                ((Just(a), Just(b)), 1..=n)
            }),
    ) {
        let expected = a.mm(&b);
        let c = padded_product(&a, &b, threshold);
        prop_assert_eq!(c.num_rows(), expected.num_rows());
        prop_assert_eq!(c.num_cols(), expected.num_cols());
        for i in 0..c.num_rows() {
            for j in 0..c.num_cols() {
                prop_assert!((c[(i, j)] - expected[(i, j)]).abs() < 1e-9);
            }
        }
    }
}
