//! Congestion transform: longer effective lengths on major roads at peak.
//!
//! Applied to the builder once, before `freeze()` — never re-applied
//! mid-run, and never after any route has been planned.  Agents and routes
//! are untouched; only edge lengths change.

use hub_core::CostParams;

use crate::graph::CityGraphBuilder;

/// Recognized traffic regimes.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TrafficLevel {
    /// Off-peak: the graph is used as-is.
    #[default]
    Normal,
    /// Peak: major-road lengths are scaled by the congestion factor.
    Congested,
}

impl std::fmt::Display for TrafficLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TrafficLevel::Normal    => "normal",
            TrafficLevel::Congested => "congested",
        })
    }
}

/// Scale the length of every major-road edge by `params.congestion_factor`
/// when `level` is [`Congested`](TrafficLevel::Congested).
///
/// The predicate reads the edge's top-level `road_class` attribute, so it
/// selects real edges on any graph that classifies its roads.  Unclassified
/// edges (tram tracks included) are never scaled.
pub fn adjust_for_traffic(
    builder: &mut CityGraphBuilder,
    level:   TrafficLevel,
    params:  &CostParams,
) {
    if level != TrafficLevel::Congested {
        return;
    }
    for attrs in builder.edge_attrs_mut() {
        if attrs.road_class.is_some_and(|c| c.is_major()) {
            attrs.length_m *= params.congestion_factor;
        }
    }
}
