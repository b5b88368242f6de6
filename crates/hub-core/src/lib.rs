//! `hub-core` — foundational types for the hubsim accessibility simulator.
//!
//! This crate is a dependency of every other `hub-*` crate.  It intentionally
//! has no `hub-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                        |
//! |--------------|-------------------------------------------------|
//! | [`ids`]      | `AgentId`, `NodeId`, `EdgeId`                   |
//! | [`geo`]      | `GeoPoint`, haversine distance                  |
//! | [`mode`]     | `TravelMode` enum                               |
//! | [`params`]   | `CostParams` — tunable cost-model constants     |
//! | [`rng`]      | `AgentRng` (per-agent), `SimRng` (global)       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod geo;
pub mod ids;
pub mod mode;
pub mod params;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::GeoPoint;
pub use ids::{AgentId, EdgeId, NodeId};
pub use mode::TravelMode;
pub use params::CostParams;
pub use rng::{AgentRng, SimRng};
