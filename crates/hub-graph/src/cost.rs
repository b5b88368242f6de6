//! Mode-dependent edge cost model.
//!
//! Each travel mode maps edge attributes to a traversal cost with its own
//! rule.  The mode is resolved to a [`ModeCost`] variant **once per agent**,
//! so the search loop dispatches on a four-way enum match instead of
//! re-interpreting the mode on every edge relaxation.
//!
//! `None` means the edge is impassable for the mode — the search simply
//! never relaxes it.  There is no infinity sentinel anywhere.
//!
//! # Cost units
//!
//! Walk/cycle/tram costs are metre-denominated; drive cost is a time proxy
//! (metres over km/h).  Costs are therefore only comparable *within* one
//! mode, which is all Dijkstra needs.  Reported distances are always the
//! physical length re-summed by the router, never the cost.

use hub_core::{CostParams, TravelMode};

use crate::graph::EdgeAttrs;

/// The edge-cost rule for one travel mode, with its constants resolved from
/// [`CostParams`] at construction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ModeCost {
    /// Cost = physical length.
    Walk,
    /// Cost = length × factor; high-speed road classes are impassable.
    Cycle { length_factor: f64 },
    /// Cost = length / speed, falling back to the configured default speed.
    Drive { default_speed_kph: f64 },
    /// Flat cost on tram-tagged edges; everything else is impassable.
    Tram { edge_cost: f64 },
}

impl ModeCost {
    /// Resolve the cost rule for `mode` from explicit parameters.
    pub fn for_mode(mode: TravelMode, params: &CostParams) -> Self {
        match mode {
            TravelMode::Walk => ModeCost::Walk,
            TravelMode::Cycle => ModeCost::Cycle {
                length_factor: params.cycle_length_factor,
            },
            TravelMode::Drive => ModeCost::Drive {
                default_speed_kph: params.default_drive_speed_kph,
            },
            TravelMode::Tram => ModeCost::Tram {
                edge_cost: params.tram_edge_cost,
            },
        }
    }

    /// Traversal cost of one edge, or `None` if the edge is impassable.
    ///
    /// Pure — called once per edge relaxation during the search.
    #[inline]
    pub fn edge_cost(&self, attrs: &EdgeAttrs) -> Option<f64> {
        match *self {
            ModeCost::Walk => Some(attrs.length_m),

            ModeCost::Cycle { length_factor } => {
                if attrs.road_class.is_some_and(|c| c.is_high_speed()) {
                    None
                } else {
                    Some(attrs.length_m * length_factor)
                }
            }

            ModeCost::Drive { default_speed_kph } => {
                let speed = attrs.speed_kph.unwrap_or(default_speed_kph);
                Some(attrs.length_m / speed)
            }

            ModeCost::Tram { edge_cost } => {
                if attrs.is_tram {
                    Some(edge_cost)
                } else {
                    None
                }
            }
        }
    }
}
