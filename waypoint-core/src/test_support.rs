//! Test-only fixtures and providers shared by unit and behaviour tests.
//!
//! Gated behind the `test-support` feature (and `cfg(test)`).

use crate::{Coordinate, DistanceMatrix, DistanceMatrixProvider, InvalidInputError};

/// Three waypoints around Hyderabad; the depot sits to the north-west.
///
/// Node 2 is closer to the depot than node 1.
#[must_use]
pub fn hyderabad_waypoints() -> Vec<Coordinate> {
    vec![
        Coordinate::new(17.528_241, 78.387_817),
        Coordinate::new(17.385, 78.4867),
        Coordinate::new(17.4065, 78.4772),
    ]
}

/// Two points on opposite sides of the globe along the equator.
#[must_use]
pub fn antipodal_pair() -> Vec<Coordinate> {
    vec![Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 180.0)]
}

/// A [`DistanceMatrixProvider`] returning a fixed, pre-defined matrix.
///
/// Coordinates are validated as usual, then the stored matrix is returned
/// verbatim whatever their positions. Callers keep the number of coordinates
/// equal to the matrix size.
///
/// # Examples
///
/// ```rust
/// use waypoint_core::{Coordinate, DistanceMatrixProvider};
/// use waypoint_core::test_support::FixedMatrixProvider;
///
/// let provider = FixedMatrixProvider::from_rows(vec![vec![0, 7], vec![7, 0]]);
/// let matrix = provider.distance_matrix(&[
///     Coordinate::new(0.0, 0.0),
///     Coordinate::new(1.0, 1.0),
/// ])?;
/// assert_eq!(matrix.get(0, 1), Some(7));
/// # Ok::<(), waypoint_core::InvalidInputError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FixedMatrixProvider {
    matrix: DistanceMatrix,
}

impl FixedMatrixProvider {
    /// Wrap an existing matrix.
    #[must_use]
    pub const fn new(matrix: DistanceMatrix) -> Self {
        Self { matrix }
    }

    /// Build from nested rows for convenience in fixtures.
    ///
    /// # Panics
    ///
    /// Panics if `rows` do not form a valid matrix.
    #[must_use]
    #[expect(
        clippy::expect_used,
        reason = "fixture construction fails loudly on malformed test data"
    )]
    pub fn from_rows(rows: Vec<Vec<u64>>) -> Self {
        Self::new(DistanceMatrix::from_rows(rows).expect("fixture rows must form a valid matrix"))
    }

    /// Coordinates matching the matrix size, all at the origin.
    #[must_use]
    pub fn placeholder_coordinates(&self) -> Vec<Coordinate> {
        vec![Coordinate::new(0.0, 0.0); self.matrix.size()]
    }
}

impl DistanceMatrixProvider for FixedMatrixProvider {
    fn distance_matrix(
        &self,
        coordinates: &[Coordinate],
    ) -> Result<DistanceMatrix, InvalidInputError> {
        crate::validate_coordinates(coordinates)?;
        Ok(self.matrix.clone())
    }
}
