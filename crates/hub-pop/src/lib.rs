//! `hub-pop` — agents and population generation.
//!
//! An [`Agent`] is created by the [`PopulationGenerator`], routed exactly
//! once (including the tram→walk fallback), and read-only afterward.  The
//! generator's output is therefore always a population in terminal status:
//! every agent is either `Active` with a route or `Unreachable` with none.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                          |
//! |------------|-------------------------------------------------|
//! | `parallel` | Route planning runs on Rayon's thread pool.     |
//! | `serde`    | Serde derives on `ModeWeights` and agent types. |

pub mod agent;
pub mod error;
pub mod generate;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use agent::{Agent, AgentStatus};
pub use error::{PopError, PopResult};
pub use generate::{ModeWeights, PopulationGenerator};
