//! Routes produced by a solve.
//!
//! Aggregates the ordered node indices with the distance travelled.

use crate::Coordinate;

/// An ordered sequence of node indices starting at the depot.
///
/// Closed routes repeat the depot as their final node.
///
/// # Examples
/// ```
/// use waypoint_core::{Coordinate, Route};
///
/// let route = Route::new(vec![0, 2, 1, 0], 42, true);
/// assert_eq!(route.visits(), &[0, 2, 1]);
///
/// let input = [
///     Coordinate::new(0.0, 0.0),
///     Coordinate::new(1.0, 0.0),
///     Coordinate::new(2.0, 0.0),
/// ];
/// let waypoints = route.waypoints(&input).expect("indices within input");
/// assert_eq!(waypoints.len(), 4);
/// assert_eq!(waypoints[1], Coordinate::new(2.0, 0.0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    nodes: Vec<usize>,
    total_distance: u64,
    closed: bool,
}

impl Route {
    /// Construct a route from its nodes and total distance in metres.
    #[must_use]
    pub const fn new(nodes: Vec<usize>, total_distance: u64, closed: bool) -> Self {
        Self {
            nodes,
            total_distance,
            closed,
        }
    }

    /// Every node in travel order, including a closing depot.
    #[must_use]
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Each visited node once, without the closing depot.
    #[must_use]
    pub fn visits(&self) -> &[usize] {
        if self.closed {
            self.nodes.split_last().map_or(&[], |(_, rest)| rest)
        } else {
            &self.nodes
        }
    }

    /// Total distance travelled in metres.
    #[must_use]
    pub const fn total_distance(&self) -> u64 {
        self.total_distance
    }

    /// Whether the route returns to the depot.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of nodes in travel order.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the route has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Translate the route back into the caller's coordinates.
    ///
    /// Returns `None` if a node index falls outside `coordinates`.
    #[must_use]
    pub fn waypoints(&self, coordinates: &[Coordinate]) -> Option<Vec<Coordinate>> {
        self.nodes
            .iter()
            .map(|&node| coordinates.get(node).copied())
            .collect()
    }
}
