//! Travel mode enum shared across all hubsim crates.
//!
//! Unlike a general digital twin, every agent here always travels by a
//! concrete mode — there is no "stationary" variant.  Each mode carries its
//! own edge-cost rule, resolved once per agent in `hub-graph::cost`.

/// The means by which an agent travels to the hub.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TravelMode {
    /// On foot.  Cost = physical edge length.
    Walk,
    /// Bicycle.  Penalized length; high-speed roads are forbidden.
    Cycle,
    /// Private car.  Time-proxy cost (length over speed).
    Drive,
    /// Tram.  Near-free on tram-tagged edges, impassable elsewhere.
    Tram,
}

impl TravelMode {
    /// All modes in a fixed order.  The position of a mode in this array is
    /// its [`index`](Self::index) — per-mode stats arrays rely on this.
    pub const ALL: [TravelMode; 4] = [
        TravelMode::Walk,
        TravelMode::Cycle,
        TravelMode::Drive,
        TravelMode::Tram,
    ];

    /// Position of this mode in [`ALL`](Self::ALL).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            TravelMode::Walk  => 0,
            TravelMode::Cycle => 1,
            TravelMode::Drive => 2,
            TravelMode::Tram  => 3,
        }
    }

    /// Human-readable label, used as CSV/JSON column value.
    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Walk  => "walk",
            TravelMode::Cycle => "cycle",
            TravelMode::Drive => "drive",
            TravelMode::Tram  => "tram",
        }
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
