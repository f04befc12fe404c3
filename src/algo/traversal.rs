/*!
# Traversal

Breadth-first and depth-first search with a deterministic visiting order,
plus the ASCII rendering of the traversal tree.

Neighbor order follows the board, not insertion history: a node's
neighbors are ranked by position, top row first (`y`), then left to right
(`x`), with the id deciding exact coordinate ties. Two traversals of an
unchanged graph therefore produce identical sequences.

[`Bfs`] and [`Dfs`] are lazy iterators yielding each visited node together
with the node that discovered it; [`Traverse`] wraps them into the
plain-sequence and tree operations.
*/

use std::collections::VecDeque;

use fxhash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::{
    error::{GraphError, Result},
    model::GraphModel,
    node::NodeId,
};

/// Which discipline drives a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalKind {
    Bfs,
    Dfs,
}

/// One visited node with the node that discovered it (`None` for the
/// start).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovery {
    pub node: NodeId,
    pub parent: Option<NodeId>,
}

/// Neighbors of `u` in visiting order: position `(y, x)`, id on ties.
fn ordered_neighbors(graph: &GraphModel, u: &str) -> Vec<NodeId> {
    let mut neighbors: Vec<NodeId> = graph.neighbors_of(u).map(|(v, _)| v.clone()).collect();
    neighbors.sort_by(|a, b| {
        let pa = graph.position_of(a).unwrap_or_default();
        let pb = graph.position_of(b).unwrap_or_default();
        pa.order_key().cmp(&pb.order_key()).then_with(|| a.cmp(b))
    });
    neighbors
}

/// Breadth-first discovery sequence over a borrowed graph.
///
/// Nodes are marked visited when enqueued. A missing start yields an
/// empty sequence; [`Traverse::bfs`] turns that case into an error.
pub struct Bfs<'a> {
    graph: &'a GraphModel,
    visited: FxHashSet<NodeId>,
    queue: VecDeque<Discovery>,
}

impl<'a> Bfs<'a> {
    pub fn new(graph: &'a GraphModel, start: &str) -> Self {
        let mut visited = FxHashSet::default();
        let mut queue = VecDeque::new();
        if graph.contains_node(start) {
            visited.insert(start.to_owned());
            queue.push_back(Discovery {
                node: start.to_owned(),
                parent: None,
            });
        }
        Self { graph, visited, queue }
    }
}

impl Iterator for Bfs<'_> {
    type Item = Discovery;

    fn next(&mut self) -> Option<Discovery> {
        let discovery = self.queue.pop_front()?;
        for v in ordered_neighbors(self.graph, &discovery.node) {
            if self.visited.insert(v.clone()) {
                self.queue.push_back(Discovery {
                    node: v,
                    parent: Some(discovery.node.clone()),
                });
            }
        }
        Some(discovery)
    }
}

/// Depth-first pre-order discovery sequence.
///
/// Nodes are marked visited when popped, not when pushed, so the order
/// matches a recursive pre-order walk even when a node waits on the stack
/// under several parents; the parent reported is the one that actually
/// reached it first.
pub struct Dfs<'a> {
    graph: &'a GraphModel,
    visited: FxHashSet<NodeId>,
    stack: Vec<Discovery>,
}

impl<'a> Dfs<'a> {
    pub fn new(graph: &'a GraphModel, start: &str) -> Self {
        let stack = if graph.contains_node(start) {
            vec![Discovery {
                node: start.to_owned(),
                parent: None,
            }]
        } else {
            Vec::new()
        };
        Self {
            graph,
            visited: FxHashSet::default(),
            stack,
        }
    }
}

impl Iterator for Dfs<'_> {
    type Item = Discovery;

    fn next(&mut self) -> Option<Discovery> {
        loop {
            let discovery = self.stack.pop()?;
            if !self.visited.insert(discovery.node.clone()) {
                continue;
            }
            for v in ordered_neighbors(self.graph, &discovery.node)
                .into_iter()
                .rev()
            {
                if !self.visited.contains(&v) {
                    self.stack.push(Discovery {
                        node: v,
                        parent: Some(discovery.node.clone()),
                    });
                }
            }
            return Some(discovery);
        }
    }
}

/// Deterministic traversal over the board's neighbor order.
///
/// # Examples
/// ```
/// use graphpad::{algo::*, prelude::*};
///
/// let mut graph = GraphModel::new(false);
/// graph.try_add_node("A", Position::new(100.0, 100.0));
/// graph.try_add_node("B", Position::new(300.0, 100.0));
/// graph.try_add_node("C", Position::new(200.0, 250.0));
/// graph.try_add_edge("A", "B", 1.0, EdgeDirection::default()).unwrap();
/// graph.try_add_edge("B", "C", 2.0, EdgeDirection::default()).unwrap();
/// graph.try_add_edge("C", "A", 1.5, EdgeDirection::default()).unwrap();
///
/// assert_eq!(graph.bfs("A").unwrap(), ["A", "B", "C"]);
/// assert_eq!(
///     graph.traversal_tree("A", TraversalKind::Bfs).unwrap(),
///     "A\n    ├── B\n    └── C",
/// );
/// ```
pub trait Traverse {
    /// Nodes reachable from `start` in breadth-first order.
    fn bfs(&self, start: &str) -> Result<Vec<NodeId>>;

    /// Nodes reachable from `start` in depth-first pre-order.
    fn dfs(&self, start: &str) -> Result<Vec<NodeId>>;

    /// ASCII drawing of the tree the traversal induces: each visited node
    /// hangs under the node that discovered it, siblings in visiting
    /// order.
    fn traversal_tree(&self, start: &str, kind: TraversalKind) -> Result<String>;
}

impl Traverse for GraphModel {
    fn bfs(&self, start: &str) -> Result<Vec<NodeId>> {
        if !self.contains_node(start) {
            return Err(GraphError::node_not_found(start));
        }
        Ok(Bfs::new(self, start).map(|d| d.node).collect())
    }

    fn dfs(&self, start: &str) -> Result<Vec<NodeId>> {
        if !self.contains_node(start) {
            return Err(GraphError::node_not_found(start));
        }
        Ok(Dfs::new(self, start).map(|d| d.node).collect())
    }

    fn traversal_tree(&self, start: &str, kind: TraversalKind) -> Result<String> {
        if !self.contains_node(start) {
            return Err(GraphError::node_not_found(start));
        }
        let discoveries: Vec<Discovery> = match kind {
            TraversalKind::Bfs => Bfs::new(self, start).collect(),
            TraversalKind::Dfs => Dfs::new(self, start).collect(),
        };
        Ok(render_tree(start, &discoveries))
    }
}

/// Renders the discovery tree with box-drawing connectors. The root line
/// is bare but counts as a last child, so its subtree indents by four
/// spaces.
fn render_tree(start: &str, discoveries: &[Discovery]) -> String {
    let mut children: FxHashMap<&str, Vec<&str>> = FxHashMap::default();
    for discovery in discoveries {
        if let Some(parent) = &discovery.parent {
            children
                .entry(parent.as_str())
                .or_default()
                .push(discovery.node.as_str());
        }
    }

    let mut lines = Vec::new();
    let mut stack: Vec<(&str, String, bool)> = vec![(start, String::new(), true)];
    while let Some((node, prefix, is_last)) = stack.pop() {
        if prefix.is_empty() {
            lines.push(node.to_owned());
        } else {
            let connector = if is_last { "└── " } else { "├── " };
            lines.push(format!("{prefix}{connector}{node}"));
        }
        if let Some(kids) = children.get(node) {
            let extension = if is_last { "    " } else { "│   " };
            let child_prefix = format!("{prefix}{extension}");
            for (i, kid) in kids.iter().enumerate().rev() {
                stack.push((kid, child_prefix.clone(), i + 1 == kids.len()));
            }
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        edge::EdgeDirection,
        testing::{build_graph, random_connected, triangle},
    };
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    /// A above, B and C in the middle row, D at the bottom.
    fn diamond() -> GraphModel {
        build_graph(
            false,
            &[
                ("A", 200.0, 0.0),
                ("B", 100.0, 100.0),
                ("C", 300.0, 100.0),
                ("D", 100.0, 200.0),
            ],
            &[("A", "B", 1.0), ("A", "C", 1.0), ("B", "D", 1.0)],
        )
    }

    #[test]
    fn bfs_visits_level_by_level() {
        assert_eq!(triangle(false).bfs("A").unwrap(), ["A", "B", "C"]);
        assert_eq!(diamond().bfs("A").unwrap(), ["A", "B", "C", "D"]);
    }

    #[test]
    fn dfs_dives_before_widening() {
        assert_eq!(diamond().dfs("A").unwrap(), ["A", "B", "D", "C"]);
    }

    #[test]
    fn neighbor_order_follows_positions_then_ids() {
        // y decides first, x within a row
        let graph = build_graph(
            false,
            &[
                ("s", 0.0, 0.0),
                ("low", 10.0, 500.0),
                ("right", 400.0, 100.0),
                ("left", 50.0, 100.0),
            ],
            &[("s", "low", 1.0), ("s", "right", 1.0), ("s", "left", 1.0)],
        );
        assert_eq!(graph.bfs("s").unwrap(), ["s", "left", "right", "low"]);

        // identical coordinates fall back to the id order
        let graph = build_graph(
            false,
            &[("s", 0.0, 0.0), ("y", 100.0, 100.0), ("x", 100.0, 100.0)],
            &[("s", "y", 1.0), ("s", "x", 1.0)],
        );
        assert_eq!(graph.bfs("s").unwrap(), ["s", "x", "y"]);
    }

    #[test]
    fn only_reachable_nodes_appear() {
        let graph = build_graph(
            true,
            &[("A", 0.0, 0.0), ("B", 100.0, 0.0), ("C", 200.0, 0.0)],
            &[("A", "B", 1.0)],
        );
        assert_eq!(graph.bfs("A").unwrap(), ["A", "B"]);
        // arcs are not walked backwards
        assert_eq!(graph.bfs("B").unwrap(), ["B"]);
        assert_eq!(graph.dfs("C").unwrap(), ["C"]);
    }

    #[test]
    fn unknown_start_is_an_error() {
        let graph = triangle(false);
        assert_eq!(graph.bfs("Z"), Err(GraphError::node_not_found("Z")));
        assert_eq!(graph.dfs("Z"), Err(GraphError::node_not_found("Z")));
        assert_eq!(
            graph.traversal_tree("Z", TraversalKind::Dfs),
            Err(GraphError::node_not_found("Z"))
        );
    }

    #[test]
    fn discoveries_carry_their_parents() {
        let discoveries: Vec<Discovery> = Bfs::new(&diamond(), "A").collect();
        assert_eq!(discoveries[0].parent, None);
        assert_eq!(discoveries[1].parent.as_deref(), Some("A"));
        assert_eq!(discoveries[3].parent.as_deref(), Some("B"));
    }

    #[test]
    fn bfs_tree_rendering() {
        let tree = triangle(false).traversal_tree("A", TraversalKind::Bfs).unwrap();
        assert_eq!(tree, "A\n    ├── B\n    └── C");

        let tree = diamond().traversal_tree("A", TraversalKind::Bfs).unwrap();
        assert_eq!(
            tree,
            "A\n    ├── B\n    │   └── D\n    └── C"
        );
    }

    #[test]
    fn dfs_tree_rendering() {
        let tree = triangle(false).traversal_tree("A", TraversalKind::Dfs).unwrap();
        assert_eq!(tree, "A\n    └── B\n        └── C");
    }

    #[test]
    fn single_node_tree_is_just_the_root() {
        let graph = build_graph(false, &[("A", 0.0, 0.0)], &[]);
        assert_eq!(graph.traversal_tree("A", TraversalKind::Bfs).unwrap(), "A");
    }

    #[test]
    fn repeated_runs_are_identical() {
        let rng = &mut Pcg64::seed_from_u64(7);
        let graph = random_connected(rng, 30, 40);
        let start = "n00";

        assert_eq!(graph.bfs(start).unwrap(), graph.bfs(start).unwrap());
        assert_eq!(graph.dfs(start).unwrap(), graph.dfs(start).unwrap());

        // both disciplines cover the same reachable set
        let bfs_set = graph.bfs(start).unwrap().into_iter().sorted().collect_vec();
        let dfs_set = graph.dfs(start).unwrap().into_iter().sorted().collect_vec();
        assert_eq!(bfs_set, dfs_set);
        assert_eq!(bfs_set.len(), graph.order());
    }

    #[test]
    fn directed_graphs_ignore_mirrored_neighbors() {
        let mut graph = triangle(true);
        // A -> B -> C -> A cycle; BFS from B walks the arcs only
        assert_eq!(graph.bfs("B").unwrap(), ["B", "C", "A"]);

        graph.try_add_edge("B", "A", 1.0, EdgeDirection::Forward).unwrap();
        assert_eq!(graph.bfs("B").unwrap(), ["B", "A", "C"]);
    }
}
