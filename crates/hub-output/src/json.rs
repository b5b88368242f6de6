//! The persisted JSON result shape.
//!
//! ```json
//! {
//!   "total_agents": 50,
//!   "unreachable": 3,
//!   "avg_distance": 812.4,
//!   "min_distance": 0.0,
//!   "max_distance": 2710.0,
//!   "modes": {
//!     "walk": { "count": 20, "reachable_count": 19, "unreachable": 1, ... }
//!   }
//! }
//! ```
//!
//! `avg/min/max` are `null` whenever the corresponding reachable subset is
//! empty.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;

use hub_stats::{DistanceSummary, Stats};

use crate::error::OutputResult;

/// Per-mode block of the result shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModeStatsJson {
    pub count:           usize,
    pub reachable_count: usize,
    pub unreachable:     usize,
    pub avg_distance:    Option<f64>,
    pub min_distance:    Option<f64>,
    pub max_distance:    Option<f64>,
}

impl ModeStatsJson {
    fn from_summary(s: &DistanceSummary) -> Self {
        Self {
            count:           s.total,
            reachable_count: s.reachable_count(),
            unreachable:     s.unreachable,
            avg_distance:    s.avg_m(),
            min_distance:    s.min_m(),
            max_distance:    s.max_m(),
        }
    }
}

/// The whole-run result shape consumed by reporting front-ends.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsJson {
    pub total_agents: usize,
    pub unreachable:  usize,
    pub avg_distance: Option<f64>,
    pub min_distance: Option<f64>,
    pub max_distance: Option<f64>,
    /// Keyed by mode label; `BTreeMap` keeps the serialized order stable.
    pub modes: BTreeMap<&'static str, ModeStatsJson>,
}

impl StatsJson {
    pub fn from_stats(stats: &Stats) -> Self {
        Self {
            total_agents: stats.overall.total,
            unreachable:  stats.overall.unreachable,
            avg_distance: stats.overall.avg_m(),
            min_distance: stats.overall.min_m(),
            max_distance: stats.overall.max_m(),
            modes: stats
                .modes()
                .map(|(mode, s)| (mode.as_str(), ModeStatsJson::from_summary(s)))
                .collect(),
        }
    }
}

/// Serialize `stats` to `path` as pretty-printed JSON.
pub fn write_stats_json(path: &Path, stats: &Stats) -> OutputResult<()> {
    let file = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(file, &StatsJson::from_stats(stats))?;
    Ok(())
}
