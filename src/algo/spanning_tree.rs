/*!
# Minimum Spanning Trees

Prim and Kruskal over undirected connected graphs. Both report the tree
edge set and the summed weight; the totals always agree, while the edge
sets may differ when equal weights admit several minimum trees.

Preconditions are checked up front in a fixed order: an empty graph, then
directedness, then connectivity. Self-loops can never join two components
and are skipped.
*/

use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

use fxhash::{FxHashMap, FxHashSet};
use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::{
    edge::{round2, WeightedEdge},
    error::{GraphError, Result},
    model::GraphModel,
    node::NodeId,
};

/// A spanning tree: `n - 1` edges and their total weight (two decimals).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanningTree {
    pub edges: Vec<WeightedEdge>,
    pub total_weight: f64,
}

/// Minimum-spanning-tree construction.
///
/// # Examples
/// ```
/// use graphpad::{algo::SpanningTrees, prelude::*};
///
/// let mut graph = GraphModel::new(false);
/// for id in ["A", "B", "C"] {
///     graph.try_add_node(id, Position::default());
/// }
/// graph.try_add_edge("A", "B", 1.0, EdgeDirection::default()).unwrap();
/// graph.try_add_edge("B", "C", 2.0, EdgeDirection::default()).unwrap();
/// graph.try_add_edge("C", "A", 1.5, EdgeDirection::default()).unwrap();
///
/// let prim = graph.prim_mst().unwrap();
/// let kruskal = graph.kruskal_mst().unwrap();
/// assert_eq!(prim.total_weight, 2.5);
/// assert_eq!(prim.total_weight, kruskal.total_weight);
/// ```
pub trait SpanningTrees {
    /// Grows the tree from the smallest node id, always attaching the
    /// cheapest edge leaving the tree.
    fn prim_mst(&self) -> Result<SpanningTree>;

    /// Scans edges by ascending weight (canonical edge order on ties) and
    /// keeps those joining two components.
    fn kruskal_mst(&self) -> Result<SpanningTree>;
}

fn check_applicable(graph: &GraphModel) -> Result<()> {
    if graph.is_empty() {
        return Err(GraphError::EmptyGraph);
    }
    if graph.is_directed() {
        return Err(GraphError::NotApplicable {
            requires: "an undirected graph",
        });
    }
    if !graph.is_connected() {
        return Err(GraphError::Disconnected);
    }
    Ok(())
}

impl SpanningTrees for GraphModel {
    fn prim_mst(&self) -> Result<SpanningTree> {
        check_applicable(self)?;
        let start = match self.ordered_nodes().next() {
            Some(id) => id.clone(),
            None => return Err(GraphError::EmptyGraph),
        };

        let mut in_tree: FxHashSet<NodeId> = FxHashSet::default();
        let mut heap: BinaryHeap<Reverse<(OrderedFloat<f64>, NodeId, NodeId)>> = BinaryHeap::new();
        let mut edges = Vec::new();
        let mut total = 0.0;

        in_tree.insert(start.clone());
        for (v, weight) in self.neighbors_of(&start) {
            heap.push(Reverse((OrderedFloat(weight), start.clone(), v.clone())));
        }

        while let Some(Reverse((OrderedFloat(weight), u, v))) = heap.pop() {
            if !in_tree.insert(v.clone()) {
                continue;
            }
            total += weight;
            edges.push(WeightedEdge::new(u, v.clone(), weight));
            for (next, next_weight) in self.neighbors_of(&v) {
                if !in_tree.contains(next) {
                    heap.push(Reverse((OrderedFloat(next_weight), v.clone(), next.clone())));
                }
            }
        }

        // connectivity was checked, so the tree spans everything
        debug_assert_eq!(in_tree.len(), self.order());
        Ok(SpanningTree {
            edges,
            total_weight: round2(total),
        })
    }

    fn kruskal_mst(&self) -> Result<SpanningTree> {
        check_applicable(self)?;

        let index: FxHashMap<NodeId, usize> = self
            .ordered_nodes()
            .cloned()
            .enumerate()
            .map(|(i, id)| (id, i))
            .collect();

        // canonical order first, stable sort by weight on top
        let mut candidates = self.ordered_edges();
        candidates.sort_by(|a, b| OrderedFloat(a.weight).cmp(&OrderedFloat(b.weight)));

        let mut components = DisjointSets::new(index.len());
        let mut edges = Vec::new();
        let mut total = 0.0;

        for edge in candidates {
            if edge.is_loop() {
                continue;
            }
            let (u, v) = match (
                index.get(edge.source.as_str()),
                index.get(edge.target.as_str()),
            ) {
                (Some(&u), Some(&v)) => (u, v),
                _ => continue,
            };
            if components.union(u, v) {
                total += edge.weight;
                edges.push(edge);
            }
        }

        Ok(SpanningTree {
            edges,
            total_weight: round2(total),
        })
    }
}

/// Union-find with path halving and union by rank.
struct DisjointSets {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSets {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Merges the sets of `a` and `b`; false if they were one already.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            Ordering::Less => self.parent[ra] = rb,
            Ordering::Greater => self.parent[rb] = ra,
            Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        true
    }
}
