//! Ellipsoidal distance matrices.
//!
//! Distances come from `geo`'s [`Geodesic`] metric (Karney's algorithm on the
//! WGS84 ellipsoid), which converges for coincident and antipodal points
//! alike. Each distance is truncated to whole metres.

use geo::{Distance, Geodesic, Point};
use log::debug;

use crate::{Coordinate, InvalidInputError, validate_coordinates};

use super::{DistanceMatrix, DistanceMatrixProvider};

/// Builds distance matrices from WGS84 geodesic distances.
///
/// # Examples
/// ```
/// use waypoint_core::{Coordinate, DistanceMatrixProvider, GeodesicDistanceProvider};
///
/// let coordinates = [Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0)];
/// let matrix = GeodesicDistanceProvider.distance_matrix(&coordinates)?;
/// // One degree of longitude along the equator.
/// assert_eq!(matrix.get(0, 1), Some(111_319));
/// # Ok::<(), waypoint_core::InvalidInputError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct GeodesicDistanceProvider;

impl DistanceMatrixProvider for GeodesicDistanceProvider {
    fn distance_matrix(
        &self,
        coordinates: &[Coordinate],
    ) -> Result<DistanceMatrix, InvalidInputError> {
        validate_coordinates(coordinates)?;
        let points: Vec<Point<f64>> = coordinates.iter().map(Coordinate::to_point).collect();
        let matrix = DistanceMatrix::from_pairwise(&points, |origin, destination| {
            geodesic_metres(*origin, *destination)
        });
        debug!(
            "built {size}x{size} geodesic distance matrix",
            size = matrix.size()
        );
        Ok(matrix)
    }
}

/// Geodesic distance between two points, truncated to whole metres.
#[must_use]
pub fn geodesic_metres(origin: Point<f64>, destination: Point<f64>) -> u64 {
    truncate_metres(Geodesic.distance(origin, destination))
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "geodesic distances are finite, non-negative and bounded by half the meridian; truncation to whole metres is intended"
)]
const fn truncate_metres(metres: f64) -> u64 {
    metres as u64
}
