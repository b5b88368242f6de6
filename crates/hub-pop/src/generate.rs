//! Weighted stochastic population generation.
//!
//! # Determinism
//!
//! Agent `i` draws its mode and home node from `AgentRng::new(seed, i)`
//! (golden-ratio seed mixing), so the generated population is a pure
//! function of `(graph, hub, tram stops, weights, seed, count)` — no matter
//! how many threads plan the routes afterwards.

use rand::distributions::{Distribution, WeightedIndex};

use hub_core::{AgentId, AgentRng, CostParams, NodeId, TravelMode};
use hub_graph::CityGraph;

use crate::agent::Agent;
use crate::error::{PopError, PopResult};

// ── ModeWeights ───────────────────────────────────────────────────────────────

/// Relative mode-assignment weights.  Non-negative, need not sum to one —
/// normalization happens inside the weighted draw.  All-zero weights are a
/// configuration error, never a silent default.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeWeights {
    pub walk:  f64,
    pub cycle: f64,
    pub drive: f64,
    pub tram:  f64,
}

impl ModeWeights {
    /// Weights in [`TravelMode::ALL`] order.
    pub fn as_array(&self) -> [f64; 4] {
        [self.walk, self.cycle, self.drive, self.tram]
    }
}

impl Default for ModeWeights {
    /// Equal weight for every mode.
    fn default() -> Self {
        Self { walk: 1.0, cycle: 1.0, drive: 1.0, tram: 1.0 }
    }
}

// ── PopulationGenerator ───────────────────────────────────────────────────────

/// Synthesizes a routed population against one frozen graph.
///
/// Construction validates the configuration (hub membership, weight
/// normalizability) so that [`generate`](Self::generate) itself cannot fail
/// — its only per-agent "failure" is the expected `Unreachable` status.
pub struct PopulationGenerator<'g> {
    graph:      &'g CityGraph,
    hub:        NodeId,
    /// Every node reachable from the hub ignoring mode restrictions.
    /// Non-empty: always contains the hub itself.
    component:  Vec<NodeId>,
    /// Resolved tram-stop nodes; empty on a baseline run.
    tram_stops: Vec<NodeId>,
    params:     CostParams,
    dist:       WeightedIndex<f64>,
    seed:       u64,
}

impl<'g> PopulationGenerator<'g> {
    pub fn new(
        graph:      &'g CityGraph,
        hub:        NodeId,
        tram_stops: Vec<NodeId>,
        weights:    &ModeWeights,
        params:     CostParams,
        seed:       u64,
    ) -> PopResult<Self> {
        if !graph.contains(hub) {
            return Err(PopError::HubNotInGraph(hub));
        }
        // Rejects all-zero, negative, and NaN weights.
        let dist = WeightedIndex::new(weights.as_array())?;
        let component = graph.component_of(hub);

        Ok(Self { graph, hub, component, tram_stops, params, dist, seed })
    }

    /// Nodes in the hub's connected component.
    pub fn component(&self) -> &[NodeId] {
        &self.component
    }

    /// Produce `count` agents, each already in its terminal routing status.
    pub fn generate(&self, count: usize) -> Vec<Agent> {
        let mut agents: Vec<Agent> = (0..count)
            .map(|i| self.spawn(AgentId::from_index(i)))
            .collect();

        self.plan_all(&mut agents);
        agents
    }

    /// Draw one agent's mode and home node from its own RNG stream.
    fn spawn(&self, id: AgentId) -> Agent {
        let mut rng = AgentRng::new(self.seed, id);

        let mode = TravelMode::ALL[self.dist.sample(rng.inner())];

        // Tram riders start at a tram stop when the scenario provides any;
        // everyone else is seeded uniformly within the hub's component.
        let home = if mode == TravelMode::Tram && !self.tram_stops.is_empty() {
            self.tram_stops[rng.gen_range(0..self.tram_stops.len())]
        } else {
            self.component[rng.gen_range(0..self.component.len())]
        };

        Agent::new(id, home, self.hub, mode)
    }

    /// Route every agent.  Reads the frozen graph only; each agent writes
    /// its own fields, so the pass parallelizes with no ordering between
    /// agents.
    fn plan_all(&self, agents: &mut [Agent]) {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            agents
                .par_iter_mut()
                .for_each(|a| a.plan(self.graph, &self.params));
        }

        #[cfg(not(feature = "parallel"))]
        for a in agents.iter_mut() {
            a.plan(self.graph, &self.params);
        }
    }
}
