/*!
# Bipartition

Tests whether the node set splits into two classes with every edge
crossing between them.

The check proposes a coloring first and validates it afterwards: a
breadth-first walk from the smallest id of every component assigns
alternating colors, ignoring conflicts, and a final sweep over all edges
decides whether the proposal is legal. Edge directions play no role, and
a self-loop makes the graph non-bipartite outright.
*/

use std::collections::VecDeque;

use fxhash::FxHashMap;
use serde::Serialize;

use crate::{
    error::{GraphError, Result},
    model::GraphModel,
    node::NodeId,
};

/// The two color classes of a legal 2-coloring, each in ascending order.
/// The smallest id of every component sits in `left`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bipartition {
    pub left: Vec<NodeId>,
    pub right: Vec<NodeId>,
}

/// Bipartiteness testing.
///
/// # Examples
/// ```
/// use graphpad::{algo::BipartiteTest, prelude::*};
///
/// let mut graph = GraphModel::new(false);
/// for id in ["hub", "a", "b"] {
///     graph.try_add_node(id, Position::default());
/// }
/// graph.try_add_edge("hub", "a", 1.0, EdgeDirection::default()).unwrap();
/// graph.try_add_edge("hub", "b", 1.0, EdgeDirection::default()).unwrap();
///
/// let split = graph.bipartition().unwrap().unwrap();
/// assert_eq!(split.left, ["a", "b"]);
/// assert_eq!(split.right, ["hub"]);
/// ```
pub trait BipartiteTest {
    /// The two color classes, or `Ok(None)` when no legal 2-coloring
    /// exists. Only an empty graph is an error.
    fn bipartition(&self) -> Result<Option<Bipartition>>;

    /// Convenience wrapper around [`BipartiteTest::bipartition`].
    fn is_bipartite(&self) -> Result<bool> {
        Ok(self.bipartition()?.is_some())
    }
}

impl BipartiteTest for GraphModel {
    fn bipartition(&self) -> Result<Option<Bipartition>> {
        if self.is_empty() {
            return Err(GraphError::EmptyGraph);
        }

        let color = propose_two_coloring(self);

        // the proposal is only legal if every edge crosses the classes
        let legal = self
            .edges()
            .all(|edge| color[&edge.source] != color[&edge.target]);
        if !legal {
            return Ok(None);
        }

        let mut left = Vec::new();
        let mut right = Vec::new();
        for id in self.ordered_nodes() {
            if color[id] {
                right.push(id.clone());
            } else {
                left.push(id.clone());
            }
        }
        Ok(Some(Bipartition { left, right }))
    }
}

/// Breadth-first alternating coloring that ignores conflicts; the caller
/// validates the result. Colors every node, component by component, in
/// canonical start order.
fn propose_two_coloring(graph: &GraphModel) -> FxHashMap<&NodeId, bool> {
    let view = graph.undirected_adjacency();
    let mut color: FxHashMap<&NodeId, bool> = FxHashMap::default();

    for start in graph.ordered_nodes() {
        if color.contains_key(start) {
            continue;
        }
        color.insert(start, false);
        let mut queue = VecDeque::from([start]);
        while let Some(u) = queue.pop_front() {
            let side = color[u];
            if let Some(neighbors) = view.get(&u) {
                for &v in neighbors {
                    if !color.contains_key(v) {
                        color.insert(v, !side);
                        queue.push_back(v);
                    }
                }
            }
        }
    }
    color
}
