//! Infrastructure scenarios: a declared chain of stops turned into tram
//! edges on a working copy of the graph.
//!
//! Stop *names* are geocoded to coordinates by an external collaborator
//! before a [`ScenarioSpec`] is built; this module only resolves coordinates
//! (or raw node ids) to graph nodes and inserts the edges.  The baseline
//! graph is never touched — the caller passes the scenario's own builder
//! copy.

use hub_core::{GeoPoint, NodeId};

use crate::error::{GraphError, GraphResult};
use crate::graph::{CityGraph, CityGraphBuilder, EdgeAttrs};

/// Default tram segment length (metres) when a config omits it.
pub const DEFAULT_EDGE_LENGTH_M: f64 = 300.0;

// ── StopRef ───────────────────────────────────────────────────────────────────

/// A reference to one stop in a scenario chain: either a graph node directly
/// or a coordinate to be snapped to its nearest node.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum StopRef {
    Node(NodeId),
    Point(GeoPoint),
}

impl std::fmt::Display for StopRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StopRef::Node(n)  => write!(f, "node {n}"),
            StopRef::Point(p) => write!(f, "point {p}"),
        }
    }
}

// ── ScenarioSpec ──────────────────────────────────────────────────────────────

/// One declared infrastructure change: an ordered stop chain plus the length
/// assigned to each inserted tram segment.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioSpec {
    /// Consecutive pairs become bidirectional tram edges.
    pub stops: Vec<StopRef>,

    /// Length (metres) of every inserted segment.
    #[cfg_attr(feature = "serde", serde(default = "default_edge_length"))]
    pub edge_length_m: f64,
}

#[cfg(feature = "serde")]
fn default_edge_length() -> f64 {
    DEFAULT_EDGE_LENGTH_M
}

impl ScenarioSpec {
    pub fn new(stops: Vec<StopRef>, edge_length_m: f64) -> Self {
        Self { stops, edge_length_m }
    }

    /// A scenario that changes nothing (empty stop chain).
    pub fn none() -> Self {
        Self {
            stops: Vec::new(),
            edge_length_m: DEFAULT_EDGE_LENGTH_M,
        }
    }
}

// ── Stop resolution ───────────────────────────────────────────────────────────

/// Resolve one stop against the frozen graph.
///
/// A `Node` must be in bounds; a `Point` snaps to the nearest positioned
/// node.  Failure is a configuration error, never silently skipped.
pub fn resolve_stop(graph: &CityGraph, stop: &StopRef) -> GraphResult<NodeId> {
    match *stop {
        StopRef::Node(n) => {
            if graph.contains(n) {
                Ok(n)
            } else {
                Err(GraphError::NodeNotFound(n))
            }
        }
        StopRef::Point(p) => graph
            .nearest_node(p)
            .ok_or_else(|| GraphError::UnresolvableStop { stop: stop.to_string() }),
    }
}

/// Resolve a whole stop chain, in order.
pub fn resolve_stops(graph: &CityGraph, stops: &[StopRef]) -> GraphResult<Vec<NodeId>> {
    stops.iter().map(|s| resolve_stop(graph, s)).collect()
}

// ── Scenario application ──────────────────────────────────────────────────────

/// Apply `spec` to `builder`, resolving stops against the frozen `baseline`.
///
/// Inserts a bidirectional tram edge of `spec.edge_length_m` between each
/// consecutive resolved pair, so the applied chain is end-to-end connected.
/// Fewer than two stops is a no-op.  Returns the resolved stop nodes — the
/// population generator spawns tram agents there, and the rendering
/// collaborator draws the line between them.
///
/// Node IDs are identical between `baseline` and `builder` because the
/// builder is a clone of the graph `baseline` was frozen from; resolution
/// against the frozen side is what lets this run before the scenario copy
/// itself is frozen.
pub fn apply_scenario(
    builder:  &mut CityGraphBuilder,
    spec:     &ScenarioSpec,
    baseline: &CityGraph,
) -> GraphResult<Vec<NodeId>> {
    let resolved = resolve_stops(baseline, &spec.stops)?;

    for pair in resolved.windows(2) {
        builder.add_edge(pair[0], pair[1], EdgeAttrs::tram(spec.edge_length_m));
    }
    Ok(resolved)
}
