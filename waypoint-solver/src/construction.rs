//! Cheapest-arc construction over a [`RoutingModel`].
//!
//! The partial route starts at the depot. Each step prices the arc from the
//! route's current end to every unvisited node and appends the cheapest,
//! keeping the lowest index on ties. The distance dimension is checked as a
//! running total: if the cheapest arc would push the cumul past the bound,
//! every other arc would too, so construction stops stranded.

use log::{debug, warn};
use waypoint_core::RoutingModel;

/// A complete route produced by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Construction {
    pub(crate) nodes: Vec<usize>,
    pub(crate) total_distance: u64,
    pub(crate) closed: bool,
    pub(crate) insertions_evaluated: u64,
}

/// Construction halted because no arc kept the cumul within the bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Stranded {
    pub(crate) placed: usize,
    pub(crate) remaining: usize,
    pub(crate) stranded_at: usize,
    pub(crate) insertions_evaluated: u64,
}

/// Grows a single route over a borrowed model.
pub(crate) struct CheapestArcConstruction<'a> {
    model: &'a RoutingModel,
    visited: Vec<bool>,
    nodes: Vec<usize>,
    cumul: u64,
    insertions_evaluated: u64,
}

impl<'a> CheapestArcConstruction<'a> {
    pub(crate) fn new(model: &'a RoutingModel) -> Self {
        let node_count = model.node_count();
        Self {
            model,
            visited: vec![false; node_count],
            nodes: Vec::with_capacity(node_count.saturating_add(1)),
            cumul: 0,
            insertions_evaluated: 0,
        }
    }

    /// Run construction to completion.
    pub(crate) fn run(mut self) -> Result<Construction, Stranded> {
        let depot = self.model.depot();
        let node_count = self.model.node_count();
        if node_count == 0 {
            warn!("routing model has no nodes; returning an empty route");
            debug_assert!(false, "routing model has no nodes");
            return Ok(self.finish(false));
        }
        self.place(depot);

        while self.nodes.len() < node_count {
            let current = self.current();
            let Some((next, arc)) = self.cheapest_unvisited(current) else {
                return Err(self.stranded());
            };
            let Some(cumul) = self.model.dimension().extend(self.cumul, arc) else {
                debug!(
                    "cheapest arc {current}->{next} ({arc} m) exceeds the {bound} m bound at cumul {cumul} m",
                    bound = self.model.dimension().max_cumulative,
                    cumul = self.cumul,
                );
                return Err(self.stranded());
            };
            debug!("placed node {next} after {current}: arc {arc} m, cumul {cumul} m");
            self.cumul = cumul;
            self.place(next);
        }

        if self.model.closes_route() {
            let current = self.current();
            let Some(cumul) = self.model.extend(self.cumul, current, depot) else {
                debug!(
                    "closing arc {current}->{depot} exceeds the {bound} m bound at cumul {cumul} m",
                    bound = self.model.dimension().max_cumulative,
                    cumul = self.cumul,
                );
                return Err(self.stranded());
            };
            debug!("closed route at depot {depot}: cumul {cumul} m");
            self.cumul = cumul;
            self.nodes.push(depot);
            return Ok(self.finish(true));
        }
        Ok(self.finish(false))
    }

    fn current(&self) -> usize {
        self.nodes.last().copied().unwrap_or_else(|| self.model.depot())
    }

    fn place(&mut self, node: usize) {
        if let Some(flag) = self.visited.get_mut(node) {
            *flag = true;
        }
        self.nodes.push(node);
    }

    fn cheapest_unvisited(&mut self, from: usize) -> Option<(usize, u64)> {
        let model = self.model;
        let row = model.matrix().row(from)?;
        let mut best: Option<(usize, u64)> = None;
        for (candidate, &arc) in row.iter().enumerate() {
            if self.visited.get(candidate).copied().unwrap_or(true) {
                continue;
            }
            self.insertions_evaluated += 1;
            // Strict comparison keeps the lowest index among equal costs.
            if best.is_none_or(|(_, best_arc)| arc < best_arc) {
                best = Some((candidate, arc));
            }
        }
        best
    }

    fn stranded(&self) -> Stranded {
        Stranded {
            placed: self.nodes.len(),
            remaining: self.model.node_count().saturating_sub(self.nodes.len()),
            stranded_at: self.current(),
            insertions_evaluated: self.insertions_evaluated,
        }
    }

    fn finish(self, closed: bool) -> Construction {
        Construction {
            nodes: self.nodes,
            total_distance: self.cumul,
            closed,
            insertions_evaluated: self.insertions_evaluated,
        }
    }
}
