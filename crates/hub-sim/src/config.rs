//! Top-level run configuration.
//!
//! The struct is the serde contract front-ends build against; actually
//! persisting or editing config files is their business, not ours.

use serde::{Deserialize, Serialize};

use hub_core::CostParams;
use hub_graph::{ScenarioSpec, StopRef, TrafficLevel};
use hub_pop::ModeWeights;

/// Everything one comparison run needs besides the graph itself.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunConfig {
    /// City identifier, passed through to the external network loader.
    /// Opaque to the simulation.
    pub city: String,

    /// The common destination.  A coordinate is snapped to its nearest
    /// graph node; failure to resolve is fatal for the whole run.
    pub hub: StopRef,

    /// Population size for each of the two runs.
    pub agent_count: usize,

    /// Relative mode-assignment weights.
    #[serde(default)]
    pub weights: ModeWeights,

    /// The infrastructure change under evaluation.
    pub scenario: ScenarioSpec,

    /// Traffic regime applied to both runs.
    #[serde(default)]
    pub traffic: TrafficLevel,

    /// Master RNG seed.  The same seed reproduces both populations exactly,
    /// and both runs draw the same per-agent streams — the comparison is
    /// paired, not two unrelated samples.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Cost-model constants.
    #[serde(default)]
    pub cost: CostParams,
}

fn default_seed() -> u64 {
    42
}
