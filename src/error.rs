//! Error types for matrix operations.
//!
//! Every fallible operation in the crate returns [`Result`], failing fast
//! without touching the receiver.

use thiserror::Error;

/// Main error type for matrix operations.
///
/// # Examples
///
/// ```
/// use nnmatrix::error::MatrixError;
///
/// let err = MatrixError::ShapeMismatch {
///     op: "add",
///     left: (2, 2),
///     right: (3, 2),
/// };
/// assert!(err.to_string().contains("(2,2) vs (3,2)"));
/// ```
#[derive(Debug, Error)]
pub enum MatrixError {
    /// Operand shapes violate the operation's dimensional contract.
    #[error("Can't {op} matrices with incompatible dimensions ({},{}) vs ({},{})", left.0, left.1, right.0, right.1)]
    ShapeMismatch {
        /// Operation name (e.g. "multiply", "add")
        op: &'static str,
        /// Shape of the receiver as (rows, cols)
        left: (usize, usize),
        /// Shape of the argument as (rows, cols)
        right: (usize, usize),
    },

    /// Element index outside the matrix extents.
    #[error("Index ({row},{col}) out of range for {rows}x{cols} matrix")]
    OutOfRange {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Row count of the matrix
        rows: usize,
        /// Column count of the matrix
        cols: usize,
    },

    /// A literal row has a different length than the first row.
    #[error("Row {row} has {actual} elements, expected {expected}")]
    RaggedRows {
        /// Index of the offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        actual: usize,
    },

    /// Flat buffer length doesn't equal rows * cols.
    #[error("Data length must equal rows * cols: expected {expected}, got {actual}")]
    DataLength {
        /// rows * cols
        expected: usize,
        /// Provided buffer length
        actual: usize,
    },

    /// rows * cols doesn't fit in `usize`.
    #[error("Matrix shape {rows}x{cols} overflows the addressable element count")]
    ShapeOverflow {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },

    /// I/O error while saving, loading or printing (including truncated input).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MatrixError {
    /// Builds a [`MatrixError::ShapeMismatch`] for `op`.
    pub(crate) fn shape_mismatch(
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    ) -> Self {
        MatrixError::ShapeMismatch { op, left, right }
    }
}

/// Number of elements in a `rows x cols` matrix.
pub(crate) fn element_count(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols)
        .ok_or(MatrixError::ShapeOverflow { rows, cols })
}

/// Convenience type alias for matrix results.
pub type Result<T> = std::result::Result<T, MatrixError>;
