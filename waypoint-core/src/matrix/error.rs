use thiserror::Error;

/// Errors from [`crate::DistanceMatrix::from_rows`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistanceMatrixError {
    /// No rows were supplied.
    #[error("distance matrix must contain at least one row")]
    Empty,
    /// A row's length differs from the number of rows.
    #[error("distance matrix row {row} has {found} entries, expected {expected}")]
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// Required row length.
        expected: usize,
        /// Actual row length.
        found: usize,
    },
    /// A node's cost to itself was not zero.
    #[error("distance matrix diagonal entry {index} is {value}, expected 0")]
    NonZeroDiagonal {
        /// Node whose self-cost is non-zero.
        index: usize,
        /// The offending cost.
        value: u64,
    },
}
