//! `hub-output` — exports one run's results for reporting collaborators.
//!
//! Three files per run directory:
//!
//! | File             | Contents                                     |
//! |------------------|----------------------------------------------|
//! | `agents.csv`     | One row per agent (mode, status, distance)   |
//! | `access_map.csv` | `node_id, distance_m` for reachable homes    |
//! | `stats.json`     | The aggregate result shape                   |
//!
//! Undefined numeric fields (no reachable agents) are an empty CSV cell or
//! a JSON `null` — never zero, never infinity, so downstream comparisons
//! cannot mistake "no data" for "zero metres".

pub mod csv;
pub mod error;
pub mod json;
pub mod row;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use csv::CsvReport;
pub use error::{OutputError, OutputResult};
pub use json::{ModeStatsJson, StatsJson, write_stats_json};
pub use row::AgentResultRow;
