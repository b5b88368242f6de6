//! Tunable cost-model constants.
//!
//! Every constant the cost model and traffic transform depend on lives in
//! one explicit struct passed down from the run configuration, so tests can
//! vary them instead of fighting embedded literals.

/// Cost-model and traffic-transform parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CostParams {
    /// Assumed speed (km/h) for drive-mode edges with no speed attribute.
    pub default_drive_speed_kph: f64,

    /// Multiplier applied to edge length for cycle-mode cost.
    pub cycle_length_factor: f64,

    /// Flat per-edge cost of a tram-tagged edge.  Kept small so tram routes
    /// win whenever a tram path exists at all.
    pub tram_edge_cost: f64,

    /// Length multiplier applied to major roads during congested periods.
    pub congestion_factor: f64,
}

impl Default for CostParams {
    fn default() -> Self {
        Self {
            default_drive_speed_kph: 30.0,
            cycle_length_factor:     1.1,
            tram_edge_cost:          0.1,
            congestion_factor:       1.5,
        }
    }
}
