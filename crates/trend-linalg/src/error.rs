use thiserror::Error;

/// Failure of a matrix operation or root search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// A matrix was requested with a zero dimension.
    #[error("matrix dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    /// Storage length does not match the requested shape.
    #[error("storage of length {len} cannot hold a {rows}x{cols} matrix")]
    StorageMismatch { rows: usize, cols: usize, len: usize },

    /// Multiplication of incompatible shapes.
    #[error("cannot multiply {left_rows}x{left_cols} by {right_rows}x{right_cols}")]
    ShapeMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    /// Inversion of a non-square matrix.
    #[error("matrix is not square ({rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },

    /// No nonzero pivot during Gauss-Jordan elimination.
    #[error("matrix is singular")]
    Singular,

    /// The zero polynomial has every number as a root; there is nothing
    /// meaningful to return.
    #[error("every number is a root of the zero polynomial")]
    AllNumbersAreRoots,

    /// The root iteration did not bring every residual below tolerance.
    #[error("root finding did not converge after {0} iterations")]
    NoConvergence(u32),
}
