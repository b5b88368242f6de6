//! `hub-stats` — reduction of a routed population into accessibility
//! metrics.
//!
//! The reduction is a commutative, associative fold: summaries can be
//! accumulated in any order, or per mode in parallel, and merged — the
//! result is the same `Stats` either way.  Unreachable agents are counted
//! but their distances never enter any average; a subset with zero
//! reachable agents reports `None` for avg/min/max rather than zero or
//! infinity.

pub mod aggregate;


pub use aggregate::{DistanceSummary, Stats};
