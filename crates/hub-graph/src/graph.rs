//! City network representation: mutable builder and frozen CSR graph.
//!
//! # Data layout
//!
//! The frozen graph uses **Compressed Sparse Row (CSR)** format for outgoing
//! edges.  Given a `NodeId n`, its outgoing edges occupy the slice:
//!
//! ```text
//! edge_attrs[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! The edge arrays (`edge_from`, `edge_to`, `edge_attrs`) are sorted by
//! source node and indexed by `EdgeId`, so Dijkstra's inner loop is a
//! contiguous memory scan.  The graph is logically undirected — every road
//! is stored as two directed edges — which keeps the search loop free of
//! direction special-casing while still permitting one-way test fixtures.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `(lat, lon)` to the nearest `NodeId` among
//! nodes that carry coordinates.  Used to resolve scenario stop coordinates
//! to graph nodes.

use std::collections::VecDeque;

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use hub_core::{EdgeId, GeoPoint, NodeId};

// ── Road classification ───────────────────────────────────────────────────────

/// Road class of an edge, following the usual highway taxonomy.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RoadClass {
    Motorway,
    MotorwayLink,
    Trunk,
    Primary,
    Secondary,
    Tertiary,
    Residential,
    Service,
    Path,
}

impl RoadClass {
    /// Classes unsafe for cycling — cycle-mode cost treats these edges as
    /// impassable.
    #[inline]
    pub fn is_high_speed(self) -> bool {
        matches!(
            self,
            RoadClass::Motorway | RoadClass::MotorwayLink | RoadClass::Trunk
        )
    }

    /// Classes subject to congestion scaling during peak traffic.
    #[inline]
    pub fn is_major(self) -> bool {
        matches!(
            self,
            RoadClass::Motorway
                | RoadClass::MotorwayLink
                | RoadClass::Trunk
                | RoadClass::Primary
                | RoadClass::Secondary
        )
    }
}

// ── Edge attributes ───────────────────────────────────────────────────────────

/// Attributes carried by every directed edge.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeAttrs {
    /// Physical length in metres.  Always positive.
    pub length_m: f64,

    /// Road class, when known.  Edges without a class (e.g. tram tracks)
    /// are never congestion-scaled and never forbidden to cyclists.
    pub road_class: Option<RoadClass>,

    /// Posted/observed speed in km/h, when known.  Drive-mode cost falls
    /// back to the configured default when absent.
    pub speed_kph: Option<f64>,

    /// Set on edges inserted by a tramline scenario.
    pub is_tram: bool,
}

impl EdgeAttrs {
    /// A plain road edge of the given length with no class or speed data.
    pub fn new(length_m: f64) -> Self {
        Self {
            length_m,
            road_class: None,
            speed_kph: None,
            is_tram: false,
        }
    }

    /// A tram edge of the given length, as inserted by scenario application.
    pub fn tram(length_m: f64) -> Self {
        Self {
            length_m,
            road_class: None,
            speed_kph: None,
            is_tram: true,
        }
    }

    pub fn with_class(mut self, class: RoadClass) -> Self {
        self.road_class = Some(class);
        self
    }

    pub fn with_speed(mut self, speed_kph: f64) -> Self {
        self.speed_kph = Some(speed_kph);
        self
    }
}

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a `[lat, lon]` point with the
/// associated `NodeId`.
#[derive(Clone)]
struct NodeEntry {
    point: [f64; 2], // [lat, lon]
    id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    /// Squared Euclidean distance in lat/lon space — sufficient for
    /// nearest-node queries within a single city.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── CityGraphBuilder ──────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
struct RawEdge {
    from:  NodeId,
    to:    NodeId,
    attrs: EdgeAttrs,
}

/// The mutable phase of the graph lifecycle.
///
/// Accepts nodes and edges in any order; scenario application and traffic
/// adjustment mutate the builder in place.  `Clone` gives a scenario its
/// working copy without touching the baseline.  Call
/// [`freeze`](Self::freeze) to produce the immutable [`CityGraph`] used for
/// route planning.  Node IDs are sequential from zero and survive both
/// `clone()` and `freeze()` unchanged.
#[derive(Clone, Debug, Default)]
pub struct CityGraphBuilder {
    node_pos:  Vec<Option<GeoPoint>>,
    raw_edges: Vec<RawEdge>,
}

impl CityGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for the expected number of nodes and undirected edges.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            node_pos:  Vec::with_capacity(nodes),
            raw_edges: Vec::with_capacity(edges * 2),
        }
    }

    /// Add a node with coordinates and return its `NodeId`.
    pub fn add_node(&mut self, pos: GeoPoint) -> NodeId {
        let id = NodeId::from_index(self.node_pos.len());
        self.node_pos.push(Some(pos));
        id
    }

    /// Add a node without coordinates.  Such nodes route normally but are
    /// invisible to nearest-node resolution.
    pub fn add_bare_node(&mut self) -> NodeId {
        let id = NodeId::from_index(self.node_pos.len());
        self.node_pos.push(None);
        id
    }

    /// Add an undirected road: two directed edges sharing `attrs`.
    ///
    /// Parallel edges between the same node pair are allowed (multigraph) —
    /// a tramline scenario may well add a tram edge alongside an existing
    /// street.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, attrs: EdgeAttrs) {
        debug_assert!(attrs.length_m > 0.0, "edge length must be positive");
        self.raw_edges.push(RawEdge { from: a, to: b, attrs });
        self.raw_edges.push(RawEdge { from: b, to: a, attrs });
    }

    /// Add a single directed edge.  Mostly useful for one-way test fixtures.
    pub fn add_directed_edge(&mut self, from: NodeId, to: NodeId, attrs: EdgeAttrs) {
        debug_assert!(attrs.length_m > 0.0, "edge length must be positive");
        self.raw_edges.push(RawEdge { from, to, attrs });
    }

    /// Coordinates of a node added earlier, if it has any.
    pub fn node_pos(&self, id: NodeId) -> Option<GeoPoint> {
        self.node_pos[id.index()]
    }

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    /// Number of **directed** edges (twice the undirected road count).
    pub fn edge_count(&self) -> usize {
        self.raw_edges.len()
    }

    /// Mutable access to every directed edge's attributes, used by the
    /// traffic transform.
    pub fn edge_attrs_mut(&mut self) -> impl Iterator<Item = &mut EdgeAttrs> {
        self.raw_edges.iter_mut().map(|e| &mut e.attrs)
    }

    /// Consume the builder and produce the frozen [`CityGraph`].
    ///
    /// Time complexity: O(E log E) for the edge sort + O(N log N) for the
    /// R-tree bulk load.
    pub fn freeze(self) -> CityGraph {
        let node_count = self.node_pos.len();
        let edge_count = self.raw_edges.len();

        // Sort edges by source node for CSR construction.  The sort is
        // stable so parallel edges keep their insertion order, which keeps
        // route reconstruction deterministic.
        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| e.from.0);

        let edge_from:  Vec<NodeId>    = raw.iter().map(|e| e.from).collect();
        let edge_to:    Vec<NodeId>    = raw.iter().map(|e| e.to).collect();
        let edge_attrs: Vec<EdgeAttrs> = raw.iter().map(|e| e.attrs).collect();

        // CSR row pointer.
        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        // Bulk-load the R-tree over positioned nodes only.
        let entries: Vec<NodeEntry> = self
            .node_pos
            .iter()
            .enumerate()
            .filter_map(|(i, pos)| {
                pos.map(|p| NodeEntry {
                    point: [p.lat, p.lon],
                    id: NodeId::from_index(i),
                })
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        CityGraph {
            node_pos: self.node_pos,
            node_out_start,
            edge_from,
            edge_to,
            edge_attrs,
            spatial_idx,
        }
    }
}

// ── CityGraph ─────────────────────────────────────────────────────────────────

/// The frozen city graph: CSR adjacency plus a nearest-node spatial index.
///
/// Immutable by construction — there is no `&mut self` method on this type,
/// so sharing `&CityGraph` across planner threads is safe with no further
/// coordination.  Array fields are `pub` for direct indexed access on hot
/// paths; construct via [`CityGraphBuilder::freeze`].
pub struct CityGraph {
    /// Coordinates of each node, when known.  Indexed by `NodeId`.
    pub node_pos: Vec<Option<GeoPoint>>,

    /// CSR row pointer.  Outgoing edges of node `n` are at EdgeIds
    /// `node_out_start[n] .. node_out_start[n+1]`.  Length = node_count + 1.
    pub node_out_start: Vec<u32>,

    /// Source node of each directed edge.  Redundant with CSR but required
    /// for route reconstruction.
    pub edge_from: Vec<NodeId>,

    /// Destination node of each directed edge.
    pub edge_to: Vec<NodeId>,

    /// Attributes of each directed edge.
    pub edge_attrs: Vec<EdgeAttrs>,

    spatial_idx: RTree<NodeEntry>,
}

impl CityGraph {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    /// `true` if `node` is a valid node of this graph.
    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.node_pos.len()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing edges from `node`.
    ///
    /// A contiguous index range — no heap allocation.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(EdgeId::from_index)
    }

    /// Out-degree of `node`.
    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The nearest positioned node to `pos`, or `None` if no node carries
    /// coordinates.
    pub fn nearest_node(&self, pos: GeoPoint) -> Option<NodeId> {
        self.spatial_idx
            .nearest_neighbor(&[pos.lat, pos.lon])
            .map(|e| e.id)
    }

    // ── Connectivity ──────────────────────────────────────────────────────

    /// All nodes in the connected component of `origin`, ignoring
    /// mode-specific restrictions (every edge is traversable).
    ///
    /// Returned in breadth-first discovery order; `origin` is always first.
    /// Agents must be seeded from the hub's component — anything outside it
    /// is unreachable by construction.
    pub fn component_of(&self, origin: NodeId) -> Vec<NodeId> {
        let mut seen = vec![false; self.node_count()];
        let mut queue = VecDeque::new();
        let mut component = Vec::new();

        seen[origin.index()] = true;
        queue.push_back(origin);

        while let Some(node) = queue.pop_front() {
            component.push(node);
            for edge in self.out_edges(node) {
                let next = self.edge_to[edge.index()];
                if !seen[next.index()] {
                    seen[next.index()] = true;
                    queue.push_back(next);
                }
            }
        }
        component
    }
}
