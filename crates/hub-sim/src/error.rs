//! Simulation-run error type.

use thiserror::Error;

use hub_graph::GraphError;
use hub_pop::PopError;

/// Fatal configuration errors for a whole run.
///
/// Everything here aborts before any result is produced.  Expected per-agent
/// outcomes (unreachable destinations, tram→walk fallback) never surface as
/// errors at any level.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("graph configuration error: {0}")]
    Graph(#[from] GraphError),

    #[error("population configuration error: {0}")]
    Population(#[from] PopError),
}

pub type SimResult<T> = Result<T, SimError>;
