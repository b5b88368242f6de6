//! Population-subsystem error type.

use thiserror::Error;

use hub_core::NodeId;

/// Errors produced by `hub-pop`.  All of these are configuration errors
/// that abort the run — an individual agent with no feasible path is a
/// status, not an error.
#[derive(Debug, Error)]
pub enum PopError {
    #[error("hub node {0} is not in the graph")]
    HubNotInGraph(NodeId),

    #[error("invalid mode weights: {0}")]
    InvalidWeights(#[from] rand::distributions::WeightedError),
}

pub type PopResult<T> = Result<T, PopError>;
