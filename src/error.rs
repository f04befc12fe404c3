/*!
# Errors

Every mutation and algorithm on the graph shares one failure vocabulary,
[`GraphError`]. Operations fail fast: precondition checks run before any
work and a failing operation never leaves partial results behind. The
variant is the contract; the display text is advisory.

Violated internal invariants are programming faults, not errors, and are
guarded with `debug_assert!` instead of a variant.
*/

use serde::Serialize;
use thiserror::Error;

use crate::node::NodeId;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Failure kinds shared by mutations and algorithms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GraphError {
    /// A referenced node id is not present in the graph.
    #[error("node `{id}` does not exist")]
    NodeNotFound { id: NodeId },

    /// The referenced edge is not present in the graph.
    #[error("edge ({source}, {target}) does not exist")]
    EdgeNotFound { r#source: NodeId, target: NodeId },

    /// Source and target must be distinct for this operation.
    #[error("source and target must be distinct")]
    InvalidPair,

    /// The operation is not defined for this kind of graph.
    #[error("operation requires {requires}")]
    NotApplicable { requires: &'static str },

    /// The operation is only defined on connected graphs.
    #[error("graph is not connected")]
    Disconnected,

    /// The graph contains no nodes.
    #[error("graph is empty")]
    EmptyGraph,

    /// The target is unreachable from the source.
    #[error("no path from `{source}` to `{target}`")]
    NoPathExists { r#source: NodeId, target: NodeId },

    /// The graph admits neither an Eulerian circuit nor an Eulerian path.
    #[error("graph has no Eulerian path")]
    NoEulerianPath,
}

impl GraphError {
    pub fn node_not_found(id: impl Into<NodeId>) -> Self {
        Self::NodeNotFound { id: id.into() }
    }

    pub fn edge_not_found(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self::EdgeNotFound {
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn no_path(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self::NoPathExists {
            source: source.into(),
            target: target.into(),
        }
    }
}
