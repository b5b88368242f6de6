//! CSV output backend.
//!
//! Creates two files in the configured run directory:
//! - `agents.csv`
//! - `access_map.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use rustc_hash::FxHashMap;

use hub_core::NodeId;
use hub_pop::Agent;

use crate::error::OutputResult;
use crate::row::AgentResultRow;

/// Writes one run's per-agent results and access map to CSV files.
pub struct CsvReport {
    agents:   Writer<File>,
    access:   Writer<File>,
    finished: bool,
}

impl CsvReport {
    /// Open (or create) the two CSV files in `dir` and write the headers.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut agents = Writer::from_path(dir.join("agents.csv"))?;
        agents.write_record(["agent_id", "mode", "status", "home_node", "distance_m"])?;

        let mut access = Writer::from_path(dir.join("access_map.csv"))?;
        access.write_record(["node_id", "distance_m"])?;

        Ok(Self {
            agents,
            access,
            finished: false,
        })
    }

    /// Append one row per agent, in the order given.
    pub fn write_agents(&mut self, agents: &[Agent]) -> OutputResult<()> {
        for agent in agents {
            let row = AgentResultRow::from_agent(agent);
            self.agents.write_record(&[
                row.agent_id.to_string(),
                row.mode.to_string(),
                row.status.to_string(),
                row.home_node.to_string(),
                row.distance_m.map(|d| d.to_string()).unwrap_or_default(),
            ])?;
        }
        Ok(())
    }

    /// Write the `home node → distance` map, sorted by node id so the file
    /// is deterministic regardless of hash-map iteration order.
    pub fn write_access_map(&mut self, map: &FxHashMap<NodeId, f64>) -> OutputResult<()> {
        let mut entries: Vec<(NodeId, f64)> = map.iter().map(|(&n, &d)| (n, d)).collect();
        entries.sort_by_key(|&(n, _)| n);

        for (node, distance) in entries {
            self.access
                .write_record(&[node.to_string(), distance.to_string()])?;
        }
        Ok(())
    }

    /// Flush both files.  Idempotent — safe to call more than once.
    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.agents.flush()?;
        self.access.flush()?;
        Ok(())
    }
}
