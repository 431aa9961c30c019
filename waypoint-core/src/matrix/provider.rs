//! Distance-matrix provider trait.

use crate::{Coordinate, InvalidInputError};

use super::DistanceMatrix;

/// Produce pairwise travel costs for a list of coordinates.
///
/// Implementers must return a square `n×n` matrix where `n ==
/// coordinates.len()`, with `matrix.get(i, j)` the cost of travelling from
/// `coordinates[i]` to `coordinates[j]` and a zero diagonal.
///
/// # Examples
///
/// ```rust
/// use waypoint_core::{
///     Coordinate, DistanceMatrix, DistanceMatrixProvider, InvalidInputError,
///     validate_coordinates,
/// };
///
/// struct UnitProvider;
///
/// impl DistanceMatrixProvider for UnitProvider {
///     fn distance_matrix(
///         &self,
///         coordinates: &[Coordinate],
///     ) -> Result<DistanceMatrix, InvalidInputError> {
///         validate_coordinates(coordinates)?;
///         Ok(DistanceMatrix::from_pairwise(coordinates, |_, _| 1))
///     }
/// }
///
/// let matrix = UnitProvider.distance_matrix(&[Coordinate::new(0.0, 0.0)])?;
/// assert_eq!(matrix.size(), 1);
/// # Ok::<(), InvalidInputError>(())
/// ```
pub trait DistanceMatrixProvider {
    /// Return the cost matrix for `coordinates`.
    ///
    /// # Errors
    ///
    /// Implementations must return [`InvalidInputError::Empty`] when
    /// `coordinates` is empty and a range error for any coordinate outside
    /// valid latitude/longitude bounds.
    fn distance_matrix(
        &self,
        coordinates: &[Coordinate],
    ) -> Result<DistanceMatrix, InvalidInputError>;
}

impl<P> DistanceMatrixProvider for &P
where
    P: DistanceMatrixProvider + ?Sized,
{
    fn distance_matrix(
        &self,
        coordinates: &[Coordinate],
    ) -> Result<DistanceMatrix, InvalidInputError> {
        (**self).distance_matrix(coordinates)
    }
}
