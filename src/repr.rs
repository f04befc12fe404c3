/*!
# Canonical Representations

One graph, three classic textbook views, built together so they are
guaranteed to describe the same structure:

- **Adjacency matrix**: `n x n` weights over the nodes in ascending id
  order, `0` where no edge exists. Symmetric for undirected graphs.
- **Adjacency list**: for every node its neighbors with weights, ascending
  by neighbor id.
- **Edge list**: every edge once. Directed graphs keep arc orientation;
  undirected edges appear with their endpoints in ascending order.

The node order of the matrix is published in `nodes`, so row and column
indices stay interpretable after the graph changes.
*/

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    edge::{Weight, WeightedEdge},
    error::{GraphError, Result},
    model::GraphModel,
    node::NodeId,
};

/// One adjacency-list entry: a neighbor and the connecting weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjacencyEntry {
    pub node: NodeId,
    pub weight: Weight,
}

/// The three canonical representations of one graph.
///
/// # Examples
/// ```
/// use graphpad::{prelude::*, repr::Representations};
///
/// let mut graph = GraphModel::new(false);
/// graph.try_add_node("a", Position::default());
/// graph.try_add_node("b", Position::default());
/// graph.try_add_edge("b", "a", 2.0, EdgeDirection::default()).unwrap();
///
/// let repr = Representations::build(&graph).unwrap();
/// assert_eq!(repr.nodes, ["a", "b"]);
/// assert_eq!(repr.adjacency_matrix, [[0.0, 2.0], [2.0, 0.0]]);
/// assert_eq!(repr.edge_list, [WeightedEdge::new("a", "b", 2.0)]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Representations {
    pub nodes: Vec<NodeId>,
    pub adjacency_matrix: Vec<Vec<Weight>>,
    pub adjacency_list: BTreeMap<NodeId, Vec<AdjacencyEntry>>,
    pub edge_list: Vec<WeightedEdge>,
    pub is_directed: bool,
}

impl Representations {
    /// Builds all three views; fails only on an empty graph.
    pub fn build(graph: &GraphModel) -> Result<Self> {
        if graph.is_empty() {
            return Err(GraphError::EmptyGraph);
        }

        let nodes: Vec<NodeId> = graph.ordered_nodes().cloned().collect();

        let adjacency_matrix = nodes
            .iter()
            .map(|u| {
                nodes
                    .iter()
                    .map(|v| graph.edge_weight(u, v).unwrap_or(0.0))
                    .collect()
            })
            .collect();

        let adjacency_list = nodes
            .iter()
            .map(|u| {
                let mut entries: Vec<AdjacencyEntry> = graph
                    .neighbors_of(u)
                    .map(|(v, weight)| AdjacencyEntry {
                        node: v.clone(),
                        weight,
                    })
                    .collect();
                entries.sort_by(|a, b| a.node.cmp(&b.node));
                (u.clone(), entries)
            })
            .collect();

        let edge_list = if graph.is_directed() {
            graph.ordered_edges()
        } else {
            let mut edges: Vec<WeightedEdge> =
                graph.edges().map(WeightedEdge::normalized).collect();
            edges.sort_by(|a, b| a.endpoints().cmp(&b.endpoints()));
            edges
        };

        Ok(Self {
            nodes,
            adjacency_matrix,
            adjacency_list,
            edge_list,
            is_directed: graph.is_directed(),
        })
    }
}
