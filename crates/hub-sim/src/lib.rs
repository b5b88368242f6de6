//! `hub-sim` — one-shot baseline/scenario comparison runs.
//!
//! # Run shape
//!
//! ```text
//! RunConfig + CityGraphBuilder
//!   │
//!   ├─ clone → traffic-adjust → freeze ─────────────→ baseline graph
//!   │                │
//!   │                └─ clone → apply scenario → freeze → scenario graph
//!   │
//!   ├─ resolve hub (fatal on failure)
//!   │
//!   ├─ baseline:  generate → plan → aggregate ─→ RunOutcome
//!   └─ scenario:  generate → plan → aggregate ─→ RunOutcome
//! ```
//!
//! The two population runs are independent (separate frozen graphs) and run
//! concurrently under the `parallel` feature.  Configuration errors —
//! unresolvable hub or scenario stop, degenerate mode weights — abort the
//! whole run with no partial output; an individual unreachable agent is
//! always just a statistic.

pub mod config;
pub mod driver;
pub mod error;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::RunConfig;
pub use driver::{AccessMap, ComparisonOutcome, RunOutcome, run};
pub use error::{SimError, SimResult};
