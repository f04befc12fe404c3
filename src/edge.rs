/*!
# Edge Representation

An edge joins two node ids and carries a weight. [`WeightedEdge`] is both
the in-memory value algorithms hand around and the wire record snapshots
serialize, so its field names (`source`, `target`, `weight`) are part of the
snapshot format.

For undirected graphs `(u, v)` and `(v, u)` denote the same edge; edge
iteration reports each one once, in its stored orientation. "Normalizing"
an edge swaps the endpoints into ascending id order, which is how edge
lists canonicalize undirected edges.
*/

use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::node::NodeId;

/// Edge weight. Non-negative; doubles as the capacity in flow problems.
pub type Weight = f64;

/// Weight assumed when a caller or a snapshot omits one.
pub const DEFAULT_WEIGHT: Weight = 1.0;

fn default_weight() -> Weight {
    DEFAULT_WEIGHT
}

/// Rounds a reported total or distance to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// An edge `source -> target` with its weight.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub source: NodeId,
    pub target: NodeId,
    #[serde(default = "default_weight")]
    pub weight: Weight,
}

impl WeightedEdge {
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>, weight: Weight) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }

    /// Returns the edge with endpoints in ascending id order.
    pub fn normalized(self) -> Self {
        if self.is_normalized() {
            self
        } else {
            self.reverse()
        }
    }

    /// True if `source <= target`.
    pub fn is_normalized(&self) -> bool {
        self.source <= self.target
    }

    /// True if both endpoints coincide.
    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }

    /// Returns the edge with endpoints swapped.
    pub fn reverse(self) -> Self {
        Self {
            source: self.target,
            target: self.source,
            weight: self.weight,
        }
    }

    /// Sort key for the canonical `(source, target)` edge order.
    pub(crate) fn endpoints(&self) -> (&NodeId, &NodeId) {
        (&self.source, &self.target)
    }
}

impl Display for WeightedEdge {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "({}, {}, {})", self.source, self.target, self.weight)
    }
}

impl Debug for WeightedEdge {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(self, f)
    }
}

impl From<(&str, &str, Weight)> for WeightedEdge {
    fn from((source, target, weight): (&str, &str, Weight)) -> Self {
        Self::new(source, target, weight)
    }
}

/// How `try_add_edge` orients a new edge in a directed graph.
///
/// Undirected graphs ignore the direction entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeDirection {
    /// Insert `source -> target` only.
    Forward,
    /// Insert `target -> source` only.
    Reverse,
    /// Insert both orientations as two edges.
    #[default]
    Both,
}
