/*!
Single-pair shortest paths on non-negative weights (Dijkstra with a binary
min-heap and lazy deletion).
*/

use std::{cmp::Reverse, collections::BinaryHeap};

use fxhash::FxHashMap;
use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::{
    edge::round2,
    error::{GraphError, Result},
    model::GraphModel,
    node::NodeId,
};

/// A cheapest route and its total weight, rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath {
    pub path: Vec<NodeId>,
    pub distance: f64,
}

/// Weighted shortest-path queries.
///
/// # Examples
/// ```
/// use graphpad::{algo::ShortestPaths, prelude::*};
///
/// let mut graph = GraphModel::new(false);
/// for id in ["A", "B", "C"] {
///     graph.try_add_node(id, Position::default());
/// }
/// graph.try_add_edge("A", "B", 4.0, EdgeDirection::default()).unwrap();
/// graph.try_add_edge("A", "C", 1.0, EdgeDirection::default()).unwrap();
/// graph.try_add_edge("C", "B", 2.0, EdgeDirection::default()).unwrap();
///
/// let found = graph.shortest_path("A", "B").unwrap();
/// assert_eq!(found.path, ["A", "C", "B"]);
/// assert_eq!(found.distance, 3.0);
/// ```
pub trait ShortestPaths {
    /// Cheapest path from `source` to `target` by summed edge weight.
    /// Directed graphs only walk arcs forwards. A node reaches itself
    /// via the empty path of distance zero.
    fn shortest_path(&self, source: &str, target: &str) -> Result<ShortestPath>;
}

impl ShortestPaths for GraphModel {
    fn shortest_path(&self, source: &str, target: &str) -> Result<ShortestPath> {
        if !self.contains_node(source) {
            return Err(GraphError::node_not_found(source));
        }
        if !self.contains_node(target) {
            return Err(GraphError::node_not_found(target));
        }
        if source == target {
            return Ok(ShortestPath {
                path: vec![source.to_owned()],
                distance: 0.0,
            });
        }

        let mut dist: FxHashMap<NodeId, f64> = FxHashMap::default();
        let mut prev: FxHashMap<NodeId, NodeId> = FxHashMap::default();
        let mut heap: BinaryHeap<Reverse<(OrderedFloat<f64>, NodeId)>> = BinaryHeap::new();

        dist.insert(source.to_owned(), 0.0);
        heap.push(Reverse((OrderedFloat(0.0), source.to_owned())));

        while let Some(Reverse((OrderedFloat(d), u))) = heap.pop() {
            if u == target {
                break;
            }
            // lazy deletion: skip heap entries a cheaper relaxation obsoleted
            if dist.get(&u).is_some_and(|&best| d > best) {
                continue;
            }
            for (v, weight) in self.neighbors_of(&u) {
                debug_assert!(weight >= 0.0, "Dijkstra requires non-negative weights");
                let candidate = d + weight;
                if dist.get(v).map_or(true, |&best| candidate < best) {
                    dist.insert(v.clone(), candidate);
                    prev.insert(v.clone(), u.clone());
                    heap.push(Reverse((OrderedFloat(candidate), v.clone())));
                }
            }
        }

        let Some(&total) = dist.get(target) else {
            return Err(GraphError::no_path(source, target));
        };

        let mut path = vec![target.to_owned()];
        let mut current = target;
        while let Some(parent) = prev.get(current) {
            path.push(parent.clone());
            current = parent;
        }
        path.reverse();
        debug_assert_eq!(path.first().map(String::as_str), Some(source));

        Ok(ShortestPath {
            path,
            distance: round2(total),
        })
    }
}
