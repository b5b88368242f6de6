//! Shortest-path search over the frozen city graph.
//!
//! Binary-heap Dijkstra over the CSR arrays, parameterized by a
//! [`ModeCost`].  An unreachable destination is a **normal outcome**,
//! expressed as `None` — never an error and never a panic — so the caller's
//! fallback policy is a visible branch rather than a caught exception.
//!
//! The search tracks mode cost for ordering but the returned
//! [`Route::total_length_m`] is an independent re-sum of physical edge
//! lengths along the winning path: a drive agent's "distance" stays metres,
//! not hours.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use hub_core::{EdgeId, NodeId};

use crate::cost::ModeCost;
use crate::graph::CityGraph;

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a successful routing query.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Visited nodes in order, from source to destination inclusive.
    /// A trivial source-equals-destination route holds the single node.
    pub nodes: Vec<NodeId>,

    /// Physical length of the route in metres — the sum of `length_m` over
    /// the traversed edges, independent of the mode cost.
    pub total_length_m: f64,

    /// Accumulated mode cost.  Comparable only within one mode.
    pub total_cost: f64,
}

impl Route {
    /// `true` if the source and destination were the same node.
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() <= 1
    }
}

// ── Heap entry ────────────────────────────────────────────────────────────────

/// Min-heap key: mode cost with `NodeId` tie-breaking for determinism.
///
/// Costs are finite and non-NaN by construction (positive lengths, positive
/// speeds), so `total_cmp` gives a proper total order.
#[derive(Copy, Clone)]
struct HeapEntry {
    cost: f64,
    node: NodeId,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.node.cmp(&other.node))
    }
}

// ── Dijkstra ──────────────────────────────────────────────────────────────────

/// Minimum-cost path from `from` to `to` under the given mode cost.
///
/// Returns `None` when no path exists — a disconnected destination, or one
/// only reachable over edges the mode cannot traverse.  Out-of-graph
/// endpoints also yield `None`; validating the hub up front is the driver's
/// job.  The search always terminates: it visits each node at most once
/// profitably and stops when the heap drains.
pub fn shortest_path(
    graph: &CityGraph,
    from:  NodeId,
    to:    NodeId,
    cost:  &ModeCost,
) -> Option<Route> {
    if !graph.contains(from) || !graph.contains(to) {
        return None;
    }
    if from == to {
        return Some(Route {
            nodes: vec![from],
            total_length_m: 0.0,
            total_cost: 0.0,
        });
    }

    let n = graph.node_count();
    // best[v] = best known mode cost to reach v.
    let mut best = vec![f64::INFINITY; n];
    // prev_edge[v] = edge that reached v on the best path.
    let mut prev_edge: Vec<Option<EdgeId>> = vec![None; n];

    best[from.index()] = 0.0;

    // Reverse makes the max-heap behave as a min-heap.
    let mut heap = BinaryHeap::new();
    heap.push(Reverse(HeapEntry { cost: 0.0, node: from }));

    while let Some(Reverse(HeapEntry { cost: reached, node })) = heap.pop() {
        if node == to {
            return Some(reconstruct(graph, &prev_edge, from, to, reached));
        }

        // Skip stale heap entries.
        if reached > best[node.index()] {
            continue;
        }

        for edge in graph.out_edges(node) {
            let Some(step) = cost.edge_cost(&graph.edge_attrs[edge.index()]) else {
                continue; // impassable for this mode
            };
            let neighbor = graph.edge_to[edge.index()];
            let new_cost = reached + step;

            if new_cost < best[neighbor.index()] {
                best[neighbor.index()] = new_cost;
                prev_edge[neighbor.index()] = Some(edge);
                heap.push(Reverse(HeapEntry { cost: new_cost, node: neighbor }));
            }
        }
    }

    None
}

/// Walk `prev_edge` back from the destination, collecting the node sequence
/// and summing physical lengths.
fn reconstruct(
    graph:     &CityGraph,
    prev_edge: &[Option<EdgeId>],
    from:      NodeId,
    to:        NodeId,
    total_cost: f64,
) -> Route {
    let mut edges = Vec::new();
    let mut cur = to;
    while let Some(e) = prev_edge[cur.index()] {
        edges.push(e);
        cur = graph.edge_from[e.index()];
    }
    debug_assert_eq!(cur, from, "route reconstruction must reach the source");
    edges.reverse();

    let total_length_m = edges
        .iter()
        .map(|e| graph.edge_attrs[e.index()].length_m)
        .sum();

    let mut nodes = Vec::with_capacity(edges.len() + 1);
    nodes.push(from);
    nodes.extend(edges.iter().map(|e| graph.edge_to[e.index()]));

    Route { nodes, total_length_m, total_cost }
}
