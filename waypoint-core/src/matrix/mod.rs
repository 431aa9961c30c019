//! Pairwise travel costs between coordinates.
//!
//! A [`DistanceMatrix`] stores whole-metre costs in row-major order. It is
//! built once per solve, either by a [`DistanceMatrixProvider`] such as
//! [`GeodesicDistanceProvider`] or from explicit rows, and is never mutated
//! afterwards. Entries are directed: `get(i, j)` need not equal `get(j, i)`.

mod error;
mod geodesic;
mod provider;

pub use error::DistanceMatrixError;
pub use geodesic::{GeodesicDistanceProvider, geodesic_metres};
pub use provider::DistanceMatrixProvider;

/// Square matrix of directed travel costs in metres.
///
/// The diagonal is always zero.
///
/// # Examples
/// ```
/// use waypoint_core::DistanceMatrix;
///
/// # fn main() -> Result<(), waypoint_core::DistanceMatrixError> {
/// let matrix = DistanceMatrix::from_rows(vec![vec![0, 12], vec![15, 0]])?;
/// assert_eq!(matrix.size(), 2);
/// assert_eq!(matrix.get(0, 1), Some(12));
/// assert_eq!(matrix.get(1, 0), Some(15));
/// assert_eq!(matrix.get(2, 0), None);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    size: usize,
    cells: Vec<u64>,
}

impl DistanceMatrix {
    /// Build a matrix by measuring every ordered pair of `items`.
    ///
    /// `measure` is never called for an item paired with itself; those cells
    /// are zero.
    pub fn from_pairwise<T, F>(items: &[T], mut measure: F) -> Self
    where
        F: FnMut(&T, &T) -> u64,
    {
        let size = items.len();
        let mut cells = Vec::with_capacity(size.saturating_mul(size));
        for (from, origin) in items.iter().enumerate() {
            for (to, destination) in items.iter().enumerate() {
                cells.push(if from == to {
                    0
                } else {
                    measure(origin, destination)
                });
            }
        }
        Self { size, cells }
    }

    /// Build a matrix from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns [`DistanceMatrixError`] when `rows` is empty, not square, or
    /// has a non-zero diagonal entry.
    pub fn from_rows(rows: Vec<Vec<u64>>) -> Result<Self, DistanceMatrixError> {
        let size = rows.len();
        if size == 0 {
            return Err(DistanceMatrixError::Empty);
        }
        let mut cells = Vec::with_capacity(size.saturating_mul(size));
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(DistanceMatrixError::NotSquare {
                    row: index,
                    expected: size,
                    found: row.len(),
                });
            }
            match row.get(index).copied() {
                Some(0) => {}
                Some(value) => return Err(DistanceMatrixError::NonZeroDiagonal { index, value }),
                None => {
                    return Err(DistanceMatrixError::NotSquare {
                        row: index,
                        expected: size,
                        found: row.len(),
                    });
                }
            }
            cells.extend(row);
        }
        Ok(Self { size, cells })
    }

    /// Number of nodes covered by the matrix.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Whether the matrix covers no nodes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Cost of travelling from `from` to `to`, or `None` if either index is
    /// outside the matrix.
    #[must_use]
    pub fn get(&self, from: usize, to: usize) -> Option<u64> {
        self.row(from).and_then(|row| row.get(to)).copied()
    }

    /// Outgoing costs from `from`.
    #[must_use]
    pub fn row(&self, from: usize) -> Option<&[u64]> {
        if from >= self.size {
            return None;
        }
        let start = from.checked_mul(self.size)?;
        self.cells.get(start..start.checked_add(self.size)?)
    }

    /// Iterate over the rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[u64]> {
        // `chunks_exact` panics on a zero chunk size.
        self.cells.chunks_exact(self.size.max(1))
    }

    /// Copy the matrix out as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u64>> {
        self.rows().map(<[u64]>::to_vec).collect()
    }
}
