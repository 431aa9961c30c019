//! Geographic coordinates accepted by the router.
//!
//! Coordinates are WGS84 `(latitude, longitude)` pairs in degrees. They are
//! plain values: construction never fails, and range checks happen once per
//! solve through [`validate_coordinates`] so the error can name the offending
//! position in the caller's list.

use std::ops::RangeInclusive;

use geo::Point;
use thiserror::Error;

/// Inclusive range of valid latitudes in degrees.
pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;

/// Inclusive range of valid longitudes in degrees.
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// A WGS84 position expressed as latitude and longitude in degrees.
///
/// With the `serde` feature the value is encoded as a two-element array
/// `[latitude, longitude]`, matching the request and response payloads.
///
/// # Examples
/// ```
/// use waypoint_core::Coordinate;
///
/// let hyderabad = Coordinate::new(17.385, 78.4867);
/// assert!(hyderabad.is_valid());
/// assert_eq!(hyderabad.to_point().x(), 78.4867);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[f64; 2]", into = "[f64; 2]"))]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Construct a coordinate from latitude and longitude in degrees.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Whether both components fall inside their valid ranges.
    ///
    /// Non-finite components are never valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        LATITUDE_RANGE.contains(&self.latitude) && LONGITUDE_RANGE.contains(&self.longitude)
    }

    /// Convert into a `geo` point (`x = longitude`, `y = latitude`).
    #[must_use]
    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(coordinate: Coordinate) -> Self {
        [coordinate.latitude, coordinate.longitude]
    }
}

/// Errors raised when the coordinate list cannot be routed.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidInputError {
    /// No coordinates were supplied.
    #[error("at least one coordinate is required")]
    Empty,
    /// A latitude fell outside `[-90, 90]` or was not finite.
    #[error("coordinate {index} has latitude {latitude}, expected a value in [-90, 90]")]
    LatitudeOutOfRange {
        /// Position of the coordinate in the input list.
        index: usize,
        /// The rejected latitude.
        latitude: f64,
    },
    /// A longitude fell outside `[-180, 180]` or was not finite.
    #[error("coordinate {index} has longitude {longitude}, expected a value in [-180, 180]")]
    LongitudeOutOfRange {
        /// Position of the coordinate in the input list.
        index: usize,
        /// The rejected longitude.
        longitude: f64,
    },
}

/// Check that `coordinates` is non-empty and every entry is in range.
///
/// The first offending coordinate is reported; latitude is checked before
/// longitude.
///
/// # Examples
/// ```
/// use waypoint_core::{Coordinate, InvalidInputError, validate_coordinates};
///
/// assert_eq!(validate_coordinates(&[]), Err(InvalidInputError::Empty));
/// assert!(validate_coordinates(&[Coordinate::new(0.0, 0.0)]).is_ok());
/// ```
pub fn validate_coordinates(coordinates: &[Coordinate]) -> Result<(), InvalidInputError> {
    if coordinates.is_empty() {
        return Err(InvalidInputError::Empty);
    }
    for (index, coordinate) in coordinates.iter().enumerate() {
        if !LATITUDE_RANGE.contains(&coordinate.latitude) {
            return Err(InvalidInputError::LatitudeOutOfRange {
                index,
                latitude: coordinate.latitude,
            });
        }
        if !LONGITUDE_RANGE.contains(&coordinate.longitude) {
            return Err(InvalidInputError::LongitudeOutOfRange {
                index,
                longitude: coordinate.longitude,
            });
        }
    }
    Ok(())
}
