/*!
# Graph Model

[`GraphModel`] is the mutable state everything else in the crate reads: a
set of string-identified nodes with board positions, joined by weighted
edges, the whole graph either directed or undirected.

## Representation

Adjacency is a nested hash map `source -> target -> slot`. Undirected
graphs store every edge twice, once per endpoint, with the half that was
not the insertion orientation flagged as the mirror. That keeps neighbor
lookups symmetric while [`GraphModel::edges`] can still report each edge
exactly once, in its stored orientation. Self-loops occupy a single slot.

Mutations validate first and fail fast: an operation that returns an error
has not touched the graph. Node ids must be non-empty; edge weights must be
non-negative (a violation is a caller bug, checked with `debug_assert!`).

## Canonical order

Hash maps make plain iteration order arbitrary. Whenever order is
observable, [`GraphModel::ordered_nodes`] and [`GraphModel::ordered_edges`]
provide the canonical ascending-id order that representations, snapshots,
and deterministic algorithm starts rely on.
*/

use std::collections::VecDeque;

use fxhash::{FxHashMap, FxHashSet};
use itertools::Itertools;
use log::debug;
use serde::Serialize;

use crate::{
    edge::{EdgeDirection, Weight, WeightedEdge},
    error::{GraphError, Result},
    node::{NodeId, Position},
};

/// One stored adjacency cell.
#[derive(Debug, Clone, Copy, PartialEq)]
struct EdgeSlot {
    weight: Weight,
    /// True on the second half of an undirected edge.
    mirrored: bool,
}

/// A mutable labeled graph: positioned nodes and weighted edges.
#[derive(Debug, Clone, Default)]
pub struct GraphModel {
    directed: bool,
    adjacency: FxHashMap<NodeId, FxHashMap<NodeId, EdgeSlot>>,
    positions: FxHashMap<NodeId, Position>,
    num_edges: usize,
}

impl GraphModel {
    /// Creates an empty graph of the given kind.
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            ..Default::default()
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of nodes.
    pub fn order(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges. Undirected edges count once.
    pub fn size(&self) -> usize {
        self.num_edges
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    pub fn position_of(&self, id: &str) -> Option<Position> {
        self.positions.get(id).copied()
    }

    /// Inserts a node at `position`; false if the id is empty or taken.
    pub fn try_add_node(&mut self, id: &str, position: Position) -> bool {
        if id.is_empty() || self.adjacency.contains_key(id) {
            return false;
        }
        self.adjacency.insert(id.to_owned(), FxHashMap::default());
        self.positions.insert(id.to_owned(), position);
        debug!("added node `{id}` at ({}, {})", position.x, position.y);
        true
    }

    /// Removes a node and every edge incident to it; false if absent.
    pub fn try_remove_node(&mut self, id: &str) -> bool {
        let Some(row) = self.adjacency.remove(id) else {
            return false;
        };
        self.positions.remove(id);
        // every slot in the removed row is one incident edge
        self.num_edges -= row.len();

        if self.directed {
            // incoming edges live in other rows
            for other in self.adjacency.values_mut() {
                if other.remove(id).is_some() {
                    self.num_edges -= 1;
                }
            }
        } else {
            for neighbor in row.keys() {
                if let Some(other) = self.adjacency.get_mut(neighbor) {
                    other.remove(id);
                }
            }
        }
        debug!("removed node `{id}`");
        true
    }

    /// Inserts or re-weights an edge between existing nodes.
    ///
    /// For directed graphs `direction` selects which orientation(s) to
    /// insert; undirected graphs ignore it. Re-adding an existing edge
    /// overwrites its weight and keeps its stored orientation.
    pub fn try_add_edge(
        &mut self,
        u: &str,
        v: &str,
        weight: Weight,
        direction: EdgeDirection,
    ) -> Result<()> {
        debug_assert!(weight >= 0.0, "edge weights must be non-negative");
        if !self.contains_node(u) {
            return Err(GraphError::node_not_found(u));
        }
        if !self.contains_node(v) {
            return Err(GraphError::node_not_found(v));
        }

        if self.directed {
            match direction {
                EdgeDirection::Forward => self.insert_directed(u, v, weight),
                EdgeDirection::Reverse => self.insert_directed(v, u, weight),
                EdgeDirection::Both => {
                    self.insert_directed(u, v, weight);
                    self.insert_directed(v, u, weight);
                }
            }
        } else {
            self.insert_undirected(u, v, weight);
        }
        debug!("added edge ({u}, {v}) with weight {weight}");
        Ok(())
    }

    /// Removes the edge `(u, v)`; for undirected graphs either endpoint
    /// order refers to the same edge.
    pub fn remove_edge(&mut self, u: &str, v: &str) -> Result<()> {
        if !self.contains_node(u) {
            return Err(GraphError::node_not_found(u));
        }
        if !self.contains_node(v) {
            return Err(GraphError::node_not_found(v));
        }
        if !self.has_edge(u, v) {
            return Err(GraphError::edge_not_found(u, v));
        }

        if let Some(row) = self.adjacency.get_mut(u) {
            row.remove(v);
        }
        if !self.directed && u != v {
            if let Some(row) = self.adjacency.get_mut(v) {
                row.remove(u);
            }
        }
        self.num_edges -= 1;
        debug!("removed edge ({u}, {v})");
        Ok(())
    }

    /// Moves a node on the board.
    pub fn update_position(&mut self, id: &str, x: f64, y: f64) -> Result<()> {
        match self.positions.get_mut(id) {
            Some(position) => {
                *position = Position::new(x, y);
                Ok(())
            }
            None => Err(GraphError::node_not_found(id)),
        }
    }

    /// Applies computed positions in bulk, e.g. a layout result.
    /// Ids unknown to the graph are skipped.
    pub fn set_positions<I>(&mut self, positions: I)
    where
        I: IntoIterator<Item = (NodeId, Position)>,
    {
        for (id, position) in positions {
            if let Some(slot) = self.positions.get_mut(&id) {
                *slot = position;
            }
        }
    }

    /// Removes all nodes and edges. The graph kind survives.
    pub fn clear(&mut self) {
        self.adjacency.clear();
        self.positions.clear();
        self.num_edges = 0;
        debug!("cleared graph");
    }

    /// Switches between directed and undirected, rebuilding the edge set.
    ///
    /// Undirected to directed keeps each edge as the single arc of its
    /// stored orientation. Directed to undirected collapses arcs sharing
    /// an endpoint pair into one edge; the replay runs in canonical edge
    /// order, so the arc with the larger source decides the weight.
    pub fn retype(&mut self, directed: bool) {
        if self.directed == directed {
            return;
        }

        let mut rebuilt = GraphModel::new(directed);
        rebuilt.adjacency = self
            .adjacency
            .keys()
            .map(|id| (id.clone(), FxHashMap::default()))
            .collect();
        rebuilt.positions = self.positions.clone();

        for edge in self.ordered_edges() {
            if directed {
                rebuilt.insert_directed(&edge.source, &edge.target, edge.weight);
            } else {
                rebuilt.insert_undirected(&edge.source, &edge.target, edge.weight);
            }
        }

        debug!("retyped graph, directed={directed}");
        *self = rebuilt;
    }

    fn slot_mut(&mut self, u: &str, v: &str) -> Option<&mut EdgeSlot> {
        self.adjacency.get_mut(u)?.get_mut(v)
    }

    fn insert_half(&mut self, from: &str, to: &str, slot: EdgeSlot) {
        if let Some(row) = self.adjacency.get_mut(from) {
            row.insert(to.to_owned(), slot);
        }
    }

    fn insert_directed(&mut self, u: &str, v: &str, weight: Weight) {
        if let Some(slot) = self.slot_mut(u, v) {
            slot.weight = weight;
            return;
        }
        self.insert_half(u, v, EdgeSlot { weight, mirrored: false });
        self.num_edges += 1;
    }

    fn insert_undirected(&mut self, u: &str, v: &str, weight: Weight) {
        if let Some(slot) = self.slot_mut(u, v) {
            // existing edge: re-weight both halves, keep the orientation
            slot.weight = weight;
            if u != v {
                if let Some(back) = self.slot_mut(v, u) {
                    back.weight = weight;
                }
            }
            return;
        }
        self.insert_half(u, v, EdgeSlot { weight, mirrored: false });
        if u != v {
            self.insert_half(v, u, EdgeSlot { weight, mirrored: true });
        }
        self.num_edges += 1;
    }

    /// Iterates node ids in arbitrary order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.adjacency.keys()
    }

    /// Node ids in canonical ascending order.
    pub fn ordered_nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.adjacency.keys().sorted()
    }

    /// Neighbors of `u` with the connecting weights, arbitrary order.
    /// For directed graphs these are the out-neighbors. Unknown ids
    /// yield nothing.
    pub fn neighbors_of<'a>(&'a self, u: &str) -> impl Iterator<Item = (&'a NodeId, Weight)> + 'a {
        self.adjacency
            .get(u)
            .into_iter()
            .flat_map(|row| row.iter().map(|(v, slot)| (v, slot.weight)))
    }

    /// Neighbor count of `u` (out-degree for directed graphs).
    pub fn degree_of(&self, u: &str) -> usize {
        self.adjacency.get(u).map_or(0, |row| row.len())
    }

    /// Weight of the edge `(u, v)`, if present.
    pub fn edge_weight(&self, u: &str, v: &str) -> Option<Weight> {
        self.adjacency.get(u)?.get(v).map(|slot| slot.weight)
    }

    pub fn has_edge(&self, u: &str, v: &str) -> bool {
        self.adjacency
            .get(u)
            .is_some_and(|row| row.contains_key(v))
    }

    /// Iterates every edge once in its stored orientation, arbitrary order.
    pub fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.adjacency.iter().flat_map(|(u, row)| {
            row.iter()
                .filter(|(_, slot)| !slot.mirrored)
                .map(move |(v, slot)| WeightedEdge::new(u.clone(), v.clone(), slot.weight))
        })
    }

    /// Edges in canonical `(source, target)` order.
    pub fn ordered_edges(&self) -> Vec<WeightedEdge> {
        self.edges()
            .sorted_by(|a, b| a.endpoints().cmp(&b.endpoints()))
            .collect()
    }

    /// Edge density: edges present over edges possible, 0 for graphs with
    /// fewer than two nodes.
    pub fn density(&self) -> f64 {
        let n = self.order();
        if n <= 1 {
            return 0.0;
        }
        let pairs = (n * (n - 1)) as f64;
        let m = self.size() as f64;
        if self.directed {
            m / pairs
        } else {
            2.0 * m / pairs
        }
    }

    /// True if every node reaches every other, ignoring edge directions.
    /// The empty graph counts as disconnected.
    pub fn is_connected(&self) -> bool {
        let Some(start) = self.adjacency.keys().next() else {
            return false;
        };
        let view = self.undirected_adjacency();
        let mut visited: FxHashSet<&NodeId> = FxHashSet::default();
        let mut queue = VecDeque::from([start]);
        visited.insert(start);
        while let Some(u) = queue.pop_front() {
            if let Some(neighbors) = view.get(&u) {
                for &v in neighbors {
                    if visited.insert(v) {
                        queue.push_back(v);
                    }
                }
            }
        }
        visited.len() == self.order()
    }

    /// Direction-blind adjacency over every node. For directed graphs each
    /// arc is usable both ways; lists may repeat a neighbor when
    /// antiparallel arcs exist, which the traversal-style consumers
    /// tolerate.
    pub(crate) fn undirected_adjacency(&self) -> FxHashMap<&NodeId, Vec<&NodeId>> {
        let mut view: FxHashMap<&NodeId, Vec<&NodeId>> =
            self.adjacency.keys().map(|u| (u, Vec::new())).collect();
        for (u, row) in &self.adjacency {
            for v in row.keys() {
                if let Some(list) = view.get_mut(&u) {
                    list.push(v);
                }
                if self.directed {
                    if let Some(list) = view.get_mut(&v) {
                        list.push(u);
                    }
                }
            }
        }
        view
    }

    /// Aggregate figures reported alongside the full-state read.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            order: self.order(),
            size: self.size(),
            density: self.density(),
            is_connected: self.is_connected(),
        }
    }

    /// Full-state read: nodes with positions, edges, stats, all in
    /// canonical order.
    pub fn view(&self) -> GraphView {
        let nodes = self
            .ordered_nodes()
            .map(|id| {
                let position = self.position_of(id).unwrap_or_default();
                NodeView {
                    id: id.clone(),
                    x: position.x,
                    y: position.y,
                }
            })
            .collect();
        GraphView {
            nodes,
            edges: self.ordered_edges(),
            stats: self.stats(),
            is_directed: self.directed,
        }
    }
}

/// Aggregate graph statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GraphStats {
    pub order: usize,
    pub size: usize,
    pub density: f64,
    pub is_connected: bool,
}

/// One node of a [`GraphView`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeView {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
}

/// Everything a renderer needs to draw the board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphView {
    pub nodes: Vec<NodeView>,
    pub edges: Vec<WeightedEdge>,
    pub stats: GraphStats,
    pub is_directed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::DEFAULT_POSITION;

    fn ids(nodes: impl IntoIterator<Item = &'static str>) -> Vec<NodeId> {
        nodes.into_iter().map(str::to_owned).collect()
    }

    #[test]
    fn node_insertion_rules() {
        let mut graph = GraphModel::new(false);
        assert!(graph.try_add_node("a", Position::new(1.0, 2.0)));
        assert!(!graph.try_add_node("a", Position::new(9.0, 9.0)));
        assert!(!graph.try_add_node("", DEFAULT_POSITION));

        assert_eq!(graph.order(), 1);
        assert!(graph.contains_node("a"));
        assert_eq!(graph.position_of("a"), Some(Position::new(1.0, 2.0)));
        assert_eq!(graph.position_of("b"), None);
    }

    #[test]
    fn undirected_edges_are_symmetric_and_count_once() {
        let mut graph = GraphModel::new(false);
        graph.try_add_node("a", DEFAULT_POSITION);
        graph.try_add_node("b", DEFAULT_POSITION);
        graph.try_add_edge("a", "b", 2.0, EdgeDirection::default()).unwrap();

        assert_eq!(graph.size(), 1);
        assert!(graph.has_edge("a", "b"));
        assert!(graph.has_edge("b", "a"));
        assert_eq!(graph.edge_weight("b", "a"), Some(2.0));
        assert_eq!(graph.ordered_edges(), vec![WeightedEdge::new("a", "b", 2.0)]);

        // re-adding from the other side only re-weights
        graph.try_add_edge("b", "a", 7.0, EdgeDirection::default()).unwrap();
        assert_eq!(graph.size(), 1);
        assert_eq!(graph.edge_weight("a", "b"), Some(7.0));
        assert_eq!(graph.ordered_edges(), vec![WeightedEdge::new("a", "b", 7.0)]);
    }

    #[test]
    fn directed_edge_directions() {
        let mut graph = GraphModel::new(true);
        for id in ["a", "b", "c"] {
            graph.try_add_node(id, DEFAULT_POSITION);
        }

        graph.try_add_edge("a", "b", 1.0, EdgeDirection::Forward).unwrap();
        graph.try_add_edge("b", "c", 1.0, EdgeDirection::Reverse).unwrap();
        graph.try_add_edge("a", "c", 1.0, EdgeDirection::Both).unwrap();

        assert!(graph.has_edge("a", "b"));
        assert!(!graph.has_edge("b", "a"));
        assert!(graph.has_edge("c", "b"));
        assert!(!graph.has_edge("b", "c"));
        assert!(graph.has_edge("a", "c") && graph.has_edge("c", "a"));
        assert_eq!(graph.size(), 4);
    }

    #[test]
    fn missing_endpoints_are_rejected() {
        let mut graph = GraphModel::new(false);
        graph.try_add_node("a", DEFAULT_POSITION);

        assert_eq!(
            graph.try_add_edge("a", "b", 1.0, EdgeDirection::default()),
            Err(GraphError::node_not_found("b"))
        );
        assert_eq!(
            graph.remove_edge("x", "a"),
            Err(GraphError::node_not_found("x"))
        );
        assert_eq!(graph.size(), 0);
    }

    #[test]
    fn edge_removal() {
        let mut graph = GraphModel::new(false);
        graph.try_add_node("a", DEFAULT_POSITION);
        graph.try_add_node("b", DEFAULT_POSITION);
        graph.try_add_edge("a", "b", 1.0, EdgeDirection::default()).unwrap();

        // undirected removal works from either endpoint
        graph.remove_edge("b", "a").unwrap();
        assert_eq!(graph.size(), 0);
        assert!(!graph.has_edge("a", "b"));
        assert_eq!(
            graph.remove_edge("a", "b"),
            Err(GraphError::edge_not_found("a", "b"))
        );

        let mut graph = GraphModel::new(true);
        graph.try_add_node("a", DEFAULT_POSITION);
        graph.try_add_node("b", DEFAULT_POSITION);
        graph.try_add_edge("a", "b", 1.0, EdgeDirection::Both).unwrap();

        // directed removal only drops the named orientation
        graph.remove_edge("a", "b").unwrap();
        assert!(!graph.has_edge("a", "b"));
        assert!(graph.has_edge("b", "a"));
        assert_eq!(graph.size(), 1);
    }

    #[test]
    fn node_removal_cascades_to_edges() {
        let mut graph = GraphModel::new(true);
        for id in ["a", "b", "c"] {
            graph.try_add_node(id, DEFAULT_POSITION);
        }
        graph.try_add_edge("a", "b", 1.0, EdgeDirection::Forward).unwrap();
        graph.try_add_edge("c", "a", 1.0, EdgeDirection::Forward).unwrap();
        graph.try_add_edge("a", "a", 1.0, EdgeDirection::Forward).unwrap();
        graph.try_add_edge("b", "c", 1.0, EdgeDirection::Forward).unwrap();

        assert!(graph.try_remove_node("a"));
        assert!(!graph.try_remove_node("a"));

        assert_eq!(graph.order(), 2);
        assert_eq!(graph.size(), 1);
        assert!(graph.has_edge("b", "c"));
        assert_eq!(graph.position_of("a"), None);
    }

    #[test]
    fn self_loops() {
        let mut graph = GraphModel::new(false);
        graph.try_add_node("a", DEFAULT_POSITION);
        graph.try_add_edge("a", "a", 3.0, EdgeDirection::default()).unwrap();

        assert_eq!(graph.size(), 1);
        assert_eq!(graph.degree_of("a"), 1);
        assert_eq!(graph.edge_weight("a", "a"), Some(3.0));

        graph.remove_edge("a", "a").unwrap();
        assert_eq!(graph.size(), 0);
    }

    #[test]
    fn canonical_orders() {
        let mut graph = GraphModel::new(false);
        for id in ["c", "a", "b"] {
            graph.try_add_node(id, DEFAULT_POSITION);
        }
        graph.try_add_edge("c", "a", 1.0, EdgeDirection::default()).unwrap();
        graph.try_add_edge("b", "a", 1.0, EdgeDirection::default()).unwrap();

        assert_eq!(graph.ordered_nodes().cloned().collect::<Vec<_>>(), ids(["a", "b", "c"]));
        assert_eq!(
            graph.ordered_edges(),
            vec![
                WeightedEdge::new("b", "a", 1.0),
                WeightedEdge::new("c", "a", 1.0),
            ]
        );
    }

    #[test]
    fn density_and_connectivity() {
        let mut graph = GraphModel::new(false);
        assert_eq!(graph.density(), 0.0);
        assert!(!graph.is_connected());

        graph.try_add_node("a", DEFAULT_POSITION);
        assert_eq!(graph.density(), 0.0);
        assert!(graph.is_connected());

        graph.try_add_node("b", DEFAULT_POSITION);
        graph.try_add_node("c", DEFAULT_POSITION);
        graph.try_add_edge("a", "b", 1.0, EdgeDirection::default()).unwrap();
        assert!(!graph.is_connected());
        assert!((graph.density() - 1.0 / 3.0).abs() < 1e-12);

        graph.try_add_edge("b", "c", 1.0, EdgeDirection::default()).unwrap();
        assert!(graph.is_connected());

        // a one-way arc still connects weakly
        let mut graph = GraphModel::new(true);
        graph.try_add_node("a", DEFAULT_POSITION);
        graph.try_add_node("b", DEFAULT_POSITION);
        graph.try_add_edge("a", "b", 1.0, EdgeDirection::Forward).unwrap();
        assert!(graph.is_connected());
        assert_eq!(graph.density(), 0.5);
    }

    #[test]
    fn retype_round_trip() {
        let mut graph = GraphModel::new(false);
        for id in ["a", "b", "c"] {
            graph.try_add_node(id, DEFAULT_POSITION);
        }
        graph.try_add_edge("a", "b", 1.0, EdgeDirection::default()).unwrap();
        graph.try_add_edge("c", "b", 2.0, EdgeDirection::default()).unwrap();

        let before = graph.ordered_edges();
        graph.retype(true);
        assert!(graph.is_directed());
        // stored orientations survive as single arcs
        assert_eq!(graph.ordered_edges(), before);
        assert!(graph.has_edge("a", "b"));
        assert!(!graph.has_edge("b", "a"));

        graph.retype(false);
        assert!(!graph.is_directed());
        assert_eq!(graph.ordered_edges(), before);
        assert!(graph.has_edge("b", "a"));
    }

    #[test]
    fn retype_collapses_antiparallel_arcs() {
        let mut graph = GraphModel::new(true);
        graph.try_add_node("a", DEFAULT_POSITION);
        graph.try_add_node("b", DEFAULT_POSITION);
        graph.try_add_edge("a", "b", 1.0, EdgeDirection::Forward).unwrap();
        graph.try_add_edge("b", "a", 5.0, EdgeDirection::Forward).unwrap();

        graph.retype(false);
        assert_eq!(graph.size(), 1);
        // canonical replay order makes the (b, a) weight the survivor
        assert_eq!(graph.edge_weight("a", "b"), Some(5.0));
    }

    #[test]
    fn clear_keeps_the_graph_kind() {
        let mut graph = GraphModel::new(true);
        graph.try_add_node("a", DEFAULT_POSITION);
        graph.try_add_node("b", DEFAULT_POSITION);
        graph.try_add_edge("a", "b", 1.0, EdgeDirection::Forward).unwrap();

        graph.clear();
        assert!(graph.is_empty());
        assert_eq!(graph.size(), 0);
        assert!(graph.is_directed());

        // clearing an already empty graph changes nothing
        graph.clear();
        assert!(graph.is_empty());
        assert!(graph.is_directed());
    }

    #[test]
    fn position_updates() {
        let mut graph = GraphModel::new(false);
        graph.try_add_node("a", DEFAULT_POSITION);

        graph.update_position("a", 10.0, 20.0).unwrap();
        assert_eq!(graph.position_of("a"), Some(Position::new(10.0, 20.0)));
        assert_eq!(
            graph.update_position("b", 0.0, 0.0),
            Err(GraphError::node_not_found("b"))
        );

        graph.set_positions(vec![
            ("a".to_owned(), Position::new(1.0, 1.0)),
            ("ghost".to_owned(), Position::new(2.0, 2.0)),
        ]);
        assert_eq!(graph.position_of("a"), Some(Position::new(1.0, 1.0)));
        assert!(!graph.contains_node("ghost"));
    }

    #[test]
    fn view_reports_canonical_state() {
        let mut graph = GraphModel::new(false);
        graph.try_add_node("b", Position::new(5.0, 6.0));
        graph.try_add_node("a", Position::new(1.0, 2.0));
        graph.try_add_edge("b", "a", 2.0, EdgeDirection::default()).unwrap();

        let view = graph.view();
        assert_eq!(view.nodes.len(), 2);
        assert_eq!(view.nodes[0].id, "a");
        assert_eq!((view.nodes[0].x, view.nodes[0].y), (1.0, 2.0));
        assert_eq!(view.edges, vec![WeightedEdge::new("b", "a", 2.0)]);
        assert!(!view.is_directed);
        assert_eq!(view.stats.order, 2);
        assert_eq!(view.stats.size, 1);
        assert!(view.stats.is_connected);
        assert_eq!(view.stats.density, 1.0);
    }
}
