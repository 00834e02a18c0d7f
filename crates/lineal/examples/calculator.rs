//! Matrix calculator walkthrough using Lineal
//!
//! Run with: cargo run --example calculator

use lineal::prelude::*;

fn main() {
    example_1_solve();
    example_2_inverse_and_determinant();
    example_3_multiplication();
    example_4_degenerate_system();
}

/// Example 1: Solving a linear system from text input
fn example_1_solve() {
    println!("── Solving A·X = B ──");
    let a: Matrix<f64> = parse_matrix("2 1; 1 3").expect("well-formed input");
    let b: Matrix<f64> = parse_matrix("5; 7").expect("well-formed input");

    match solve(&a, &b).expect("shapes match") {
        Solution::Unique(x) => println!("X =\n{x}\n"),
        Solution::Degenerate { rank, .. } => {
            println!("system is degenerate: rank {rank} < {}\n", a.num_rows());
        }
    }
}

/// Example 2: Inverse and determinant
fn example_2_inverse_and_determinant() {
    println!("── Inverse and determinant ──");
    let a: Matrix<f64> = parse_matrix("1 2; 3 4").expect("well-formed input");

    println!("det(A) = {}", determinant(&a).expect("square"));
    match inverse(&a) {
        Ok(inv) => println!("A⁻¹ =\n{inv}\n"),
        Err(LinealError::SingularMatrix) => println!("A is singular\n"),
        Err(e) => println!("error: {e}\n"),
    }
}

/// Example 3: Strassen multiplication with a forced full recursion
fn example_3_multiplication() {
    println!("── Multiplication ──");
    let a: Matrix<f64> = parse_matrix("1 2; 3 4").expect("well-formed input");
    let b: Matrix<f64> = parse_matrix("5 6; 7 8").expect("well-formed input");

    let c = multiply_with_threshold(&a, &b, 1).expect("inner dimensions match");
    println!("A·B =\n{c}\n");
}

/// Example 4: A rank-deficient system is reported, not thrown
fn example_4_degenerate_system() {
    println!("── Degenerate system ──");
    let a: Matrix<f64> = parse_matrix("1 1; 1 1").expect("well-formed input");
    let b: Matrix<f64> = parse_matrix("2; 2").expect("well-formed input");

    match solve(&a, &b).expect("shapes match") {
        Solution::Unique(x) => println!("X =\n{x}\n"),
        Solution::Degenerate { x, rank } => {
            println!(
                "rank {rank} < {}: infinitely many or no solutions; elimination produced\n{x}\n",
                a.num_rows()
            );
        }
    }
}
