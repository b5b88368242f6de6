//! Graph-subsystem error type.

use thiserror::Error;

use hub_core::NodeId;

/// Errors produced by `hub-graph`.
///
/// Note that an agent failing to reach the hub is **not** an error — the
/// router expresses that as `None`.  These variants are configuration
/// failures that abort the whole run.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("node {0} is not in the graph")]
    NodeNotFound(NodeId),

    #[error("stop {stop} cannot be resolved to a graph node")]
    UnresolvableStop { stop: String },
}

pub type GraphResult<T> = Result<T, GraphError>;
