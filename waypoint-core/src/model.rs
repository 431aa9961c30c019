//! The routing model evaluated by route constructors.
//!
//! A [`RoutingModel`] couples a [`DistanceMatrix`] with a single vehicle that
//! starts at [`DEPOT`] and a bounded cumulative [`DistanceDimension`]. It holds
//! no search logic: constructors ask it for arc costs, extend running totals
//! through [`RoutingModel::extend`] and may check finished routes with
//! [`RoutingModel::is_feasible`] and [`RoutingModel::cost`].
//!
//! The dimension has no slack and its cumulative value is zero at the depot,
//! so the cumul at any position is the sum of the arcs travelled so far and
//! the route's span equals its final cumul.

use crate::DistanceMatrix;

/// Index of the node every route starts from.
pub const DEPOT: usize = 0;

/// Number of vehicles routed per solve.
pub const VEHICLE_COUNT: usize = 1;

/// Default upper bound on the total distance travelled, in metres.
pub const DEFAULT_MAX_DISTANCE_M: u64 = 3_000_000;

/// Default weight applied to the route span in the objective.
pub const DEFAULT_SPAN_COST_COEFFICIENT: u64 = 100;

/// Bounded cumulative distance tracked along a route.
///
/// # Examples
/// ```
/// use waypoint_core::DistanceDimension;
///
/// let dimension = DistanceDimension::default();
/// assert_eq!(dimension.extend(2_999_000, 1_000), Some(3_000_000));
/// assert_eq!(dimension.extend(2_999_000, 1_001), None);
/// assert_eq!(dimension.objective(10, 10), 1_010);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceDimension {
    /// Largest cumulative distance allowed anywhere on the route, in metres.
    pub max_cumulative: u64,
    /// Multiplier applied to the route span in the objective.
    pub span_cost_coefficient: u64,
}

impl Default for DistanceDimension {
    fn default() -> Self {
        Self {
            max_cumulative: DEFAULT_MAX_DISTANCE_M,
            span_cost_coefficient: DEFAULT_SPAN_COST_COEFFICIENT,
        }
    }
}

impl DistanceDimension {
    /// Add an arc to a running cumul, returning `None` if the result would
    /// exceed the bound.
    #[must_use]
    pub const fn extend(&self, cumul: u64, arc: u64) -> Option<u64> {
        match cumul.checked_add(arc) {
            Some(next) if next <= self.max_cumulative => Some(next),
            _ => None,
        }
    }

    /// Whether `cumul` respects the bound.
    #[must_use]
    pub const fn admits(&self, cumul: u64) -> bool {
        cumul <= self.max_cumulative
    }

    /// Objective value: total arc cost plus the weighted span.
    #[must_use]
    pub const fn objective(&self, arc_total: u64, span: u64) -> u64 {
        arc_total.saturating_add(self.span_cost_coefficient.saturating_mul(span))
    }
}

/// Single-vehicle routing problem over a complete directed graph.
///
/// When `return_to_depot` is set, a complete route over more than one node
/// ends with an arc back to [`DEPOT`]; otherwise it is an open path.
///
/// # Examples
/// ```
/// use waypoint_core::{DistanceDimension, DistanceMatrix, RoutingModel};
///
/// # fn main() -> Result<(), waypoint_core::DistanceMatrixError> {
/// let matrix = DistanceMatrix::from_rows(vec![
///     vec![0, 5, 9],
///     vec![5, 0, 3],
///     vec![9, 3, 0],
/// ])?;
/// let model = RoutingModel::new(matrix, DistanceDimension::default(), false);
/// assert!(model.is_feasible(&[0, 1, 2]));
/// assert_eq!(model.cost(&[0, 1, 2]), Some(8 + 100 * 8));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingModel {
    matrix: DistanceMatrix,
    dimension: DistanceDimension,
    return_to_depot: bool,
}

impl RoutingModel {
    /// Assemble a model from its matrix and dimension.
    #[must_use]
    pub const fn new(
        matrix: DistanceMatrix,
        dimension: DistanceDimension,
        return_to_depot: bool,
    ) -> Self {
        Self {
            matrix,
            dimension,
            return_to_depot,
        }
    }

    /// Number of nodes, depot included.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.matrix.size()
    }

    /// The start node.
    #[must_use]
    pub const fn depot(&self) -> usize {
        DEPOT
    }

    /// Number of vehicles, always one.
    #[must_use]
    pub const fn vehicle_count(&self) -> usize {
        VEHICLE_COUNT
    }

    /// The underlying cost matrix.
    #[must_use]
    pub const fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    /// The bounded distance dimension.
    #[must_use]
    pub const fn dimension(&self) -> DistanceDimension {
        self.dimension
    }

    /// Whether complete routes close back at the depot.
    #[must_use]
    pub const fn returns_to_depot(&self) -> bool {
        self.return_to_depot
    }

    /// Whether a complete route ends with a closing arc to the depot.
    ///
    /// A single-node route never closes: there is no self-arc to travel.
    #[must_use]
    pub const fn closes_route(&self) -> bool {
        self.return_to_depot && self.node_count() > 1
    }

    /// Cost of the arc from `from` to `to`.
    #[must_use]
    pub fn arc_cost(&self, from: usize, to: usize) -> Option<u64> {
        self.matrix.get(from, to)
    }

    /// Travel from `from` to `to` with `cumul` metres already covered.
    ///
    /// Returns the new cumul, or `None` if either node is unknown or the bound
    /// would be exceeded.
    #[must_use]
    pub fn extend(&self, cumul: u64, from: usize, to: usize) -> Option<u64> {
        self.dimension.extend(cumul, self.arc_cost(from, to)?)
    }

    /// Unbounded cumul at each position of `route`.
    ///
    /// The first entry is zero. Returns `None` for an unknown node or on
    /// overflow.
    #[must_use]
    pub fn cumulative_distances(&self, route: &[usize]) -> Option<Vec<u64>> {
        let Some(&first) = route.first() else {
            return Some(Vec::new());
        };
        if first >= self.node_count() {
            return None;
        }
        let mut cumuls = Vec::with_capacity(route.len());
        let mut cumul = 0_u64;
        cumuls.push(cumul);
        for pair in route.windows(2) {
            let &[from, to] = pair else {
                return None;
            };
            cumul = cumul.checked_add(self.arc_cost(from, to)?)?;
            cumuls.push(cumul);
        }
        Some(cumuls)
    }

    /// Final cumul of `route`, i.e. its span.
    #[must_use]
    pub fn span(&self, route: &[usize]) -> Option<u64> {
        self.cumulative_distances(route)
            .map(|cumuls| cumuls.last().copied().unwrap_or(0))
    }

    /// Objective value of `route`: arc costs plus the weighted span.
    ///
    /// Returns `None` if the route references an unknown node.
    #[must_use]
    pub fn cost(&self, route: &[usize]) -> Option<u64> {
        let arc_total = route.windows(2).try_fold(0_u64, |total, pair| {
            let &[from, to] = pair else {
                return None;
            };
            Some(total.saturating_add(self.arc_cost(from, to)?))
        })?;
        let span = self.span(route)?;
        Some(self.dimension.objective(arc_total, span))
    }

    /// Whether `route` is a complete, bounded route for this model.
    ///
    /// A feasible route starts at the depot, visits every node exactly once,
    /// ends with the closing depot arc exactly when [`Self::closes_route`]
    /// holds, and never lets its cumul exceed the bound.
    #[must_use]
    pub fn is_feasible(&self, route: &[usize]) -> bool {
        if route.first() != Some(&DEPOT) {
            return false;
        }
        let visits = if self.closes_route() {
            match route.split_last() {
                Some((&DEPOT, rest)) => rest,
                _ => return false,
            }
        } else {
            route
        };
        if !self.is_permutation(visits) {
            return false;
        }
        self.cumulative_distances(route)
            .is_some_and(|cumuls| cumuls.iter().all(|&cumul| self.dimension.admits(cumul)))
    }

    fn is_permutation(&self, visits: &[usize]) -> bool {
        if visits.len() != self.node_count() {
            return false;
        }
        let mut seen = vec![false; self.node_count()];
        visits.iter().all(|&node| match seen.get_mut(node) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        })
    }
}
