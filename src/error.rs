//! Error types for the graph algorithms.
//!
//! Edge and vertex *mutations* report failure through their boolean return value;
//! the algorithm entry points validate their arguments and return [`GraphError`].

use thiserror::Error;

use crate::{Node, NumNodes};

/// Error type for algorithm entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// No vertex carries the given label.
    #[error("unknown vertex label: {0:?}")]
    UnknownLabel(String),
    /// A vertex index is not in `0..number_of_nodes`.
    #[error("node {node} is out of range for a graph with {number_of_nodes} nodes")]
    NodeOutOfRange { node: Node, number_of_nodes: NumNodes },
    /// The algorithm requires a weighted graph.
    #[error("graph is not weighted")]
    NotWeighted,
}

/// Result type for algorithm entry points.
pub type Result<T> = std::result::Result<T, GraphError>;
