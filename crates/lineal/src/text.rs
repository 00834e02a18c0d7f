//! Text boundary of the engine.
//!
//! The presentation layer exchanges matrices as text: rows separated by
//! `;`, entries within a row by whitespace. Parsing failures surface here,
//! before the core is ever reached, so the operations in [`crate::ops`]
//! only see well-formed matrices. Formatting for display goes through the
//! `Display` impl of [`Matrix`], which prints four decimals to match the
//! determinant rounding of the facade.

use std::str::FromStr;

use thiserror::Error;

use lineal_mat::{Matrix, Scalar};

/// Invalid input format: the text could not be parsed into a matrix.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseMatrixError {
    /// The input contains no entries at all.
    #[error("empty matrix input")]
    Empty,

    /// An entry could not be parsed as a number.
    #[error("invalid entry {token:?} in row {row}")]
    InvalidEntry {
        /// Zero-based row index.
        row: usize,
        /// The offending token.
        token: String,
    },

    /// A row has a different number of entries than the first row.
    #[error("row {row} has {found} entries, expected {expected}")]
    RaggedRows {
        /// Zero-based row index.
        row: usize,
        /// Entry count of the first row.
        expected: usize,
        /// Entry count of the offending row.
        found: usize,
    },
}

/// Parses matrix text such as `"2 1; 1 3"`.
///
/// # Errors
///
/// [`ParseMatrixError`] when the input is empty, contains an unparseable
/// entry, or has rows of unequal length.
pub fn parse_matrix<T: Scalar>(input: &str) -> Result<Matrix<T>, ParseMatrixError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseMatrixError::Empty);
    }

    let mut rows: Vec<Vec<T>> = Vec::new();
    for (row_index, row_text) in trimmed.split(';').enumerate() {
        let mut row = Vec::new();
        for token in row_text.split_whitespace() {
            let value = f64::from_str(token).map_err(|_| ParseMatrixError::InvalidEntry {
                row: row_index,
                token: token.to_string(),
            })?;
            row.push(T::from_f64(value));
        }

        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(ParseMatrixError::RaggedRows {
                    row: row_index,
                    expected: first.len(),
                    found: row.len(),
                });
            }
        } else if row.is_empty() {
            return Err(ParseMatrixError::Empty);
        }

        rows.push(row);
    }

    Ok(Matrix::from_rows(rows))
}
