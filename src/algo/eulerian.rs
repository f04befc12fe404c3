/*!
# Eulerian Circuits and Paths

Classification and construction of walks using every edge exactly once.

A connected graph admits an Eulerian **circuit** when every node has even
degree (directed: in-degree equals out-degree everywhere), and an Eulerian
**path** when exactly two nodes have odd degree (directed: one node with
one surplus out-edge, one with one surplus in-edge, the rest balanced).
The circuit starts at the smallest node id, the path at its forced start.

Construction is an iterative Hierholzer walk that always leaves a node
through the smallest unused neighbor id, so the same graph always yields
the same trail. Callers pick a label under which the result is reported;
historically the board offered "Fleury" and "Hierholzer" as separate
routes, but both ran into the same construction, and that is now explicit.
*/

use fxhash::FxHashMap;
use serde::Serialize;

use crate::{
    edge::WeightedEdge,
    error::{GraphError, Result},
    model::GraphModel,
    node::NodeId,
};

/// Label a trail is reported under. Purely presentational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EulerianAlgorithm {
    Fleury,
    Hierholzer,
}

/// A walk using every edge exactly once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EulerianTrail {
    /// Visited nodes; one more entry than edges, first equals last for
    /// circuits.
    pub nodes: Vec<NodeId>,
    /// The edges in traversal orientation.
    pub edges: Vec<(NodeId, NodeId)>,
    pub is_circuit: bool,
    pub algorithm: EulerianAlgorithm,
}

/// Eulerian walk construction.
pub trait EulerianWalks {
    /// Classifies the graph and builds the full trail, reported under
    /// `algorithm`. Fails with [`GraphError::EmptyGraph`] on a node-less
    /// graph and [`GraphError::NoEulerianPath`] when no walk covers every
    /// edge (no edges at all, disconnected, or bad degrees).
    fn eulerian_trail(&self, algorithm: EulerianAlgorithm) -> Result<EulerianTrail>;
}

impl EulerianWalks for GraphModel {
    fn eulerian_trail(&self, algorithm: EulerianAlgorithm) -> Result<EulerianTrail> {
        if self.is_empty() {
            return Err(GraphError::EmptyGraph);
        }
        if self.size() == 0 || !self.is_connected() {
            return Err(GraphError::NoEulerianPath);
        }

        let edges = self.ordered_edges();
        let (start, is_circuit) = classify(self, &edges)?;
        let nodes = hierholzer(self, &edges, start);
        // connected and well-classified, so the walk consumed everything
        debug_assert_eq!(nodes.len(), edges.len() + 1);

        let trail_edges = nodes
            .windows(2)
            .map(|pair| (pair[0].clone(), pair[1].clone()))
            .collect();
        Ok(EulerianTrail {
            nodes,
            edges: trail_edges,
            is_circuit,
            algorithm,
        })
    }
}

/// Picks the start node and decides circuit versus path, or rejects.
/// Expects a connected graph with at least one edge, which also means
/// every node has an incident edge.
fn classify<'a>(
    graph: &'a GraphModel,
    edges: &[WeightedEdge],
) -> Result<(&'a NodeId, bool)> {
    if graph.is_directed() {
        let mut out_deg: FxHashMap<&str, i64> = FxHashMap::default();
        let mut in_deg: FxHashMap<&str, i64> = FxHashMap::default();
        for edge in edges {
            *out_deg.entry(edge.source.as_str()).or_insert(0) += 1;
            *in_deg.entry(edge.target.as_str()).or_insert(0) += 1;
        }

        let mut path_start: Option<&NodeId> = None;
        let mut path_end_seen = false;
        for id in graph.ordered_nodes() {
            let out = out_deg.get(id.as_str()).copied().unwrap_or(0);
            let into = in_deg.get(id.as_str()).copied().unwrap_or(0);
            match out - into {
                0 => {}
                1 if path_start.is_none() => path_start = Some(id),
                -1 if !path_end_seen => path_end_seen = true,
                _ => return Err(GraphError::NoEulerianPath),
            }
        }
        match (path_start, path_end_seen) {
            (None, false) => Ok((smallest_node(graph)?, true)),
            (Some(start), true) => Ok((start, false)),
            _ => Err(GraphError::NoEulerianPath),
        }
    } else {
        let mut degree: FxHashMap<&str, usize> = FxHashMap::default();
        for edge in edges {
            // a self-loop adds two to its node
            *degree.entry(edge.source.as_str()).or_insert(0) += 1;
            *degree.entry(edge.target.as_str()).or_insert(0) += 1;
        }

        let odd: Vec<&NodeId> = graph
            .ordered_nodes()
            .filter(|id| degree.get(id.as_str()).copied().unwrap_or(0) % 2 == 1)
            .collect();
        match odd.len() {
            0 => Ok((smallest_node(graph)?, true)),
            2 => Ok((odd[0], false)),
            _ => Err(GraphError::NoEulerianPath),
        }
    }
}

fn smallest_node(graph: &GraphModel) -> Result<&NodeId> {
    graph.ordered_nodes().next().ok_or(GraphError::EmptyGraph)
}

/// Iterative Hierholzer: walk greedily along the smallest unused edge,
/// backtrack when stuck, emit nodes in finish order and reverse.
fn hierholzer(graph: &GraphModel, edges: &[WeightedEdge], start: &NodeId) -> Vec<NodeId> {
    // per-node incidence (neighbor, edge id), ascending; undirected edges
    // are usable from both endpoints but share one id
    let mut incidence: FxHashMap<&str, Vec<(&str, usize)>> = FxHashMap::default();
    for (eid, edge) in edges.iter().enumerate() {
        incidence
            .entry(edge.source.as_str())
            .or_default()
            .push((edge.target.as_str(), eid));
        if !graph.is_directed() && !edge.is_loop() {
            incidence
                .entry(edge.target.as_str())
                .or_default()
                .push((edge.source.as_str(), eid));
        }
    }
    for list in incidence.values_mut() {
        list.sort_unstable();
    }

    let mut used = vec![false; edges.len()];
    let mut cursor: FxHashMap<&str, usize> = FxHashMap::default();
    let mut stack: Vec<&str> = vec![start.as_str()];
    let mut trail: Vec<NodeId> = Vec::with_capacity(edges.len() + 1);

    while let Some(&u) = stack.last() {
        let list = incidence.get(u).map(|l| l.as_slice()).unwrap_or_default();
        let position = cursor.entry(u).or_insert(0);
        let mut next = None;
        while *position < list.len() {
            let (v, eid) = list[*position];
            *position += 1;
            if !used[eid] {
                next = Some((v, eid));
                break;
            }
        }
        match next {
            Some((v, eid)) => {
                used[eid] = true;
                stack.push(v);
            }
            None => {
                trail.push(u.to_owned());
                stack.pop();
            }
        }
    }

    trail.reverse();
    trail
}
