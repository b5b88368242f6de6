//! The agent: one synthetic traveller heading for the hub.

use hub_core::{AgentId, CostParams, NodeId, TravelMode};
use hub_graph::{CityGraph, ModeCost, Route, shortest_path};

// ── AgentStatus ───────────────────────────────────────────────────────────────

/// Terminal routing outcome for one agent.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AgentStatus {
    /// A route to the hub exists; `route` and `total_distance_m` are set.
    Active,
    /// No feasible path under the agent's mode.  `route` is empty and
    /// `total_distance_m` carries no meaning.
    Unreachable,
}

impl AgentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AgentStatus::Active      => "active",
            AgentStatus::Unreachable => "unreachable",
        }
    }
}

// ── Agent ─────────────────────────────────────────────────────────────────────

/// One member of the synthetic population.
///
/// Created by the generator, mutated exactly once by [`plan`](Agent::plan),
/// read-only afterward.  Invariant maintained by `plan`:
/// `status == Unreachable ⇔ route.is_empty() for a non-trivial origin`, and
/// an unreachable agent's distance is never read by the aggregator.
#[derive(Clone, Debug)]
pub struct Agent {
    pub id:   AgentId,
    pub home: NodeId,
    pub hub:  NodeId,

    /// The mode the agent ends up travelling by.  May differ from the mode
    /// it was assigned: a tram agent with no tram path walks instead.
    pub mode: TravelMode,

    /// Ordered node sequence from home to hub; empty when unreachable.
    pub route: Vec<NodeId>,

    /// Physical route length in metres.  Meaningful only when `Active`.
    pub total_distance_m: f64,

    pub status: AgentStatus,
}

impl Agent {
    /// A freshly spawned, not-yet-routed agent.
    pub fn new(id: AgentId, home: NodeId, hub: NodeId, mode: TravelMode) -> Self {
        Self {
            id,
            home,
            hub,
            mode,
            route: Vec::new(),
            total_distance_m: 0.0,
            status: AgentStatus::Active,
        }
    }

    /// `true` if the agent reached the hub.
    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.status == AgentStatus::Active
    }

    /// Plan this agent's route to the hub.
    ///
    /// On failure, a tram agent downgrades to walk and retries **once**; any
    /// other mode (and a failed walk retry) ends `Unreachable`.  Either way
    /// the agent lands in a terminal status — an unreachable destination is
    /// a normal outcome, never an error.
    pub fn plan(&mut self, graph: &CityGraph, params: &CostParams) {
        let cost = ModeCost::for_mode(self.mode, params);
        match shortest_path(graph, self.home, self.hub, &cost) {
            Some(route) => self.accept(route),
            None if self.mode == TravelMode::Tram => {
                // Tram fallback: no tram path, so this agent walks.
                self.mode = TravelMode::Walk;
                let walk = ModeCost::for_mode(TravelMode::Walk, params);
                match shortest_path(graph, self.home, self.hub, &walk) {
                    Some(route) => self.accept(route),
                    None        => self.mark_unreachable(),
                }
            }
            None => self.mark_unreachable(),
        }
    }

    fn accept(&mut self, route: Route) {
        self.route = route.nodes;
        self.total_distance_m = route.total_length_m;
        self.status = AgentStatus::Active;
    }

    fn mark_unreachable(&mut self) {
        self.route.clear();
        self.total_distance_m = 0.0;
        self.status = AgentStatus::Unreachable;
    }
}
