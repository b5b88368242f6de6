//! `hub-graph` — city network, cost model, routing, and scenario mutation.
//!
//! # Two-phase graph lifecycle
//!
//! ```text
//! CityGraphBuilder          CityGraph (frozen)
//! ──────────────────        ─────────────────────────────
//! add_node / add_edge   →   CSR adjacency (read-only)
//! apply_scenario            nearest-node R-tree
//! adjust_for_traffic        connected-component queries
//!        │                  shortest-path search
//!        └── freeze() ──────────────┘
//! ```
//!
//! All mutation (scenario application, traffic adjustment) happens on the
//! builder; `freeze()` is the happens-before boundary after which any number
//! of threads may plan routes against the immutable [`CityGraph`].  This
//! makes parallel planning safe by construction rather than by ordering
//! convention.
//!
//! # Modules
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`graph`]    | `CityGraphBuilder`, `CityGraph`, `EdgeAttrs`, `RoadClass` |
//! | [`cost`]     | `ModeCost` — per-mode edge cost, resolved once per agent |
//! | [`router`]   | binary-heap Dijkstra returning `Option<Route>`          |
//! | [`scenario`] | `ScenarioSpec`, stop resolution, tram-edge insertion    |
//! | [`traffic`]  | `TrafficLevel`, congestion length scaling               |

pub mod cost;
pub mod error;
pub mod graph;
pub mod router;
pub mod scenario;
pub mod traffic;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cost::ModeCost;
pub use error::{GraphError, GraphResult};
pub use graph::{CityGraph, CityGraphBuilder, EdgeAttrs, RoadClass};
pub use router::{Route, shortest_path};
pub use scenario::{ScenarioSpec, StopRef, apply_scenario, resolve_stop, resolve_stops};
pub use traffic::{TrafficLevel, adjust_for_traffic};
