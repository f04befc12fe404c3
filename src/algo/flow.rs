/*!
# Maximum Flow

Edmonds-Karp over the directed graph, treating each edge weight as a
capacity.

The residual network is a dense matrix over the canonically indexed nodes.
Every round runs a breadth-first search for a shortest augmenting path,
walks the predecessor chain to find the bottleneck, and moves that much
flow; the sum of bottlenecks is the maximum flow value. Afterwards each
original edge's net flow falls out of the difference between its capacity
and its residual.
*/

use std::collections::VecDeque;

use fxhash::FxHashMap;
use serde::Serialize;

use crate::{
    edge::round2,
    error::{GraphError, Result},
    model::GraphModel,
    node::NodeId,
};

/// Residual capacities below this are treated as exhausted.
const EPS: f64 = 1e-9;

/// One edge of a flow assignment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowEdge {
    pub source: NodeId,
    pub target: NodeId,
    pub flow: f64,
    pub capacity: f64,
}

/// A maximum flow: its value and every edge carrying positive net flow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaximumFlow {
    pub max_flow: f64,
    pub edges: Vec<FlowEdge>,
}

/// Maximum-flow computation.
///
/// # Examples
/// ```
/// use graphpad::{algo::NetworkFlow, prelude::*};
///
/// let mut graph = GraphModel::new(true);
/// for id in ["A", "B", "C"] {
///     graph.try_add_node(id, Position::default());
/// }
/// graph.try_add_edge("A", "B", 5.0, EdgeDirection::Forward).unwrap();
/// graph.try_add_edge("B", "C", 3.0, EdgeDirection::Forward).unwrap();
/// graph.try_add_edge("A", "C", 2.0, EdgeDirection::Forward).unwrap();
///
/// let flow = graph.max_flow("A", "C").unwrap();
/// assert_eq!(flow.max_flow, 5.0);
/// ```
pub trait NetworkFlow {
    /// Maximum flow from `source` to `sink`. Defined on directed graphs
    /// only; source and sink must be distinct existing nodes.
    fn max_flow(&self, source: &str, sink: &str) -> Result<MaximumFlow>;
}

impl NetworkFlow for GraphModel {
    fn max_flow(&self, source: &str, sink: &str) -> Result<MaximumFlow> {
        let ids: Vec<NodeId> = self.ordered_nodes().cloned().collect();
        let s = match ids.binary_search_by(|id| id.as_str().cmp(source)) {
            Ok(i) => i,
            Err(_) => return Err(GraphError::node_not_found(source)),
        };
        let t = match ids.binary_search_by(|id| id.as_str().cmp(sink)) {
            Ok(i) => i,
            Err(_) => return Err(GraphError::node_not_found(sink)),
        };
        if s == t {
            return Err(GraphError::InvalidPair);
        }
        if !self.is_directed() {
            return Err(GraphError::NotApplicable {
                requires: "a directed graph",
            });
        }

        let n = ids.len();
        let index: FxHashMap<&str, usize> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.as_str(), i))
            .collect();

        let mut capacity = vec![vec![0.0_f64; n]; n];
        for edge in self.edges() {
            if let (Some(&u), Some(&v)) = (
                index.get(edge.source.as_str()),
                index.get(edge.target.as_str()),
            ) {
                capacity[u][v] = edge.weight;
            }
        }
        let mut residual = capacity.clone();

        let mut value = 0.0;
        let mut predecessor = vec![usize::MAX; n];
        while bfs_augmenting_path(&residual, s, t, &mut predecessor) {
            let mut bottleneck = f64::INFINITY;
            let mut v = t;
            while v != s {
                let u = predecessor[v];
                bottleneck = bottleneck.min(residual[u][v]);
                v = u;
            }

            let mut v = t;
            while v != s {
                let u = predecessor[v];
                residual[u][v] -= bottleneck;
                residual[v][u] += bottleneck;
                v = u;
            }
            value += bottleneck;
        }

        let mut edges = Vec::new();
        for edge in self.ordered_edges() {
            if let (Some(&u), Some(&v)) = (
                index.get(edge.source.as_str()),
                index.get(edge.target.as_str()),
            ) {
                let flow = capacity[u][v] - residual[u][v];
                if flow > EPS {
                    edges.push(FlowEdge {
                        source: edge.source,
                        target: edge.target,
                        flow: round2(flow),
                        capacity: edge.weight,
                    });
                }
            }
        }

        Ok(MaximumFlow {
            max_flow: round2(value),
            edges,
        })
    }
}

/// Shortest augmenting path by hop count; fills `predecessor` and reports
/// whether the sink was reached.
fn bfs_augmenting_path(
    residual: &[Vec<f64>],
    s: usize,
    t: usize,
    predecessor: &mut [usize],
) -> bool {
    predecessor.fill(usize::MAX);
    predecessor[s] = s;
    let mut queue = VecDeque::from([s]);
    while let Some(u) = queue.pop_front() {
        if u == t {
            return true;
        }
        for (v, &rest) in residual[u].iter().enumerate() {
            if rest > EPS && predecessor[v] == usize::MAX {
                predecessor[v] = u;
                queue.push_back(v);
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{edge::EdgeDirection, testing::build_graph};

    fn bottleneck_graph() -> GraphModel {
        build_graph(
            true,
            &[("A", 0.0, 0.0), ("B", 1.0, 0.0), ("C", 2.0, 0.0)],
            &[("A", "B", 5.0), ("B", "C", 3.0), ("A", "C", 2.0)],
        )
    }

    #[test]
    fn flow_finds_both_routes() {
        let flow = bottleneck_graph().max_flow("A", "C").unwrap();
        assert_eq!(flow.max_flow, 5.0);

        let by_pair: Vec<(&str, &str, f64, f64)> = flow
            .edges
            .iter()
            .map(|e| (e.source.as_str(), e.target.as_str(), e.flow, e.capacity))
            .collect();
        assert_eq!(
            by_pair,
            [
                ("A", "B", 3.0, 5.0),
                ("A", "C", 2.0, 2.0),
                ("B", "C", 3.0, 3.0),
            ]
        );
    }

    #[test]
    fn saturated_edges_bound_the_value() {
        // classic diamond with a cross edge
        let graph = build_graph(
            true,
            &[
                ("s", 0.0, 0.0),
                ("a", 1.0, 0.0),
                ("b", 1.0, 1.0),
                ("t", 2.0, 0.0),
            ],
            &[
                ("s", "a", 10.0),
                ("s", "b", 10.0),
                ("a", "b", 2.0),
                ("a", "t", 4.0),
                ("b", "t", 9.0),
            ],
        );
        let flow = graph.max_flow("s", "t").unwrap();
        assert_eq!(flow.max_flow, 13.0);

        // conservation at the inner nodes
        for node in ["a", "b"] {
            let incoming: f64 = flow
                .edges
                .iter()
                .filter(|e| e.target == node)
                .map(|e| e.flow)
                .sum();
            let outgoing: f64 = flow
                .edges
                .iter()
                .filter(|e| e.source == node)
                .map(|e| e.flow)
                .sum();
            assert!((incoming - outgoing).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_flow_reports_no_edges() {
        // t has no incoming edge
        let graph = build_graph(
            true,
            &[("s", 0.0, 0.0), ("x", 1.0, 0.0), ("t", 2.0, 0.0)],
            &[("s", "x", 4.0), ("t", "x", 4.0)],
        );
        let flow = graph.max_flow("s", "t").unwrap();
        assert_eq!(flow.max_flow, 0.0);
        assert!(flow.edges.is_empty());
    }

    #[test]
    fn guards_run_in_order() {
        let graph = bottleneck_graph();
        assert_eq!(
            graph.max_flow("Z", "C"),
            Err(GraphError::node_not_found("Z"))
        );
        assert_eq!(
            graph.max_flow("A", "Z"),
            Err(GraphError::node_not_found("Z"))
        );
        assert_eq!(graph.max_flow("A", "A"), Err(GraphError::InvalidPair));

        let undirected = build_graph(
            false,
            &[("A", 0.0, 0.0), ("B", 1.0, 0.0)],
            &[("A", "B", 1.0)],
        );
        assert_eq!(
            undirected.max_flow("A", "B"),
            Err(GraphError::NotApplicable {
                requires: "a directed graph"
            })
        );
        // a missing node outranks the directedness check
        assert_eq!(
            undirected.max_flow("A", "Z"),
            Err(GraphError::node_not_found("Z"))
        );
    }

    #[test]
    fn antiparallel_arcs_keep_separate_capacities() {
        let mut graph = build_graph(
            true,
            &[("A", 0.0, 0.0), ("B", 1.0, 0.0)],
            &[("A", "B", 3.0)],
        );
        graph
            .try_add_edge("B", "A", 7.0, EdgeDirection::Forward)
            .unwrap();

        let forward = graph.max_flow("A", "B").unwrap();
        assert_eq!(forward.max_flow, 3.0);
        let backward = graph.max_flow("B", "A").unwrap();
        assert_eq!(backward.max_flow, 7.0);
    }

    #[test]
    fn fractional_capacities_round_in_the_report() {
        let graph = build_graph(
            true,
            &[("A", 0.0, 0.0), ("B", 1.0, 0.0), ("C", 2.0, 0.0)],
            &[("A", "B", 0.1), ("B", "C", 0.2)],
        );
        let flow = graph.max_flow("A", "C").unwrap();
        assert_eq!(flow.max_flow, 0.1);
        assert_eq!(flow.edges.len(), 2);
        assert_eq!(flow.edges[0].flow, 0.1);
    }
}
