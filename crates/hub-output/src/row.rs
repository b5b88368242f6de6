//! Plain data row types written by the CSV backend.

use hub_pop::Agent;

/// One agent's terminal outcome as a flat row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentResultRow {
    pub agent_id:   u32,
    /// Terminal mode — a tram agent that fell back reports `"walk"`.
    pub mode:       &'static str,
    pub status:     &'static str,
    pub home_node:  u32,
    /// `None` (empty cell) for unreachable agents.
    pub distance_m: Option<f64>,
}

impl AgentResultRow {
    pub fn from_agent(agent: &Agent) -> Self {
        Self {
            agent_id:   agent.id.0,
            mode:       agent.mode.as_str(),
            status:     agent.status.as_str(),
            home_node:  agent.home.0,
            distance_m: agent.is_reachable().then_some(agent.total_distance_m),
        }
    }
}
