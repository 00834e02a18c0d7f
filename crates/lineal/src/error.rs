//! Error taxonomy of the facade operations.

use thiserror::Error;

/// Errors surfaced by the operations in [`crate::ops`].
///
/// Both variants are detected before or during computation and propagate
/// immediately; no partial results escape. A rank-deficient solve is NOT an
/// error — it is reported through [`crate::Solution::Degenerate`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LinealError {
    /// Operand dimensions are incompatible with the requested operation.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// The matrix has no inverse.
    #[error("matrix is singular")]
    SingularMatrix,
}
