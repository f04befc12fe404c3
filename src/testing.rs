//! Shared graph builders for the test modules.

use rand::Rng;

use crate::{edge::EdgeDirection, model::GraphModel, node::Position};

/// Builds a graph from positioned nodes and weighted edges. Edges in a
/// directed graph take the listed orientation.
pub(crate) fn build_graph(
    directed: bool,
    nodes: &[(&str, f64, f64)],
    edges: &[(&str, &str, f64)],
) -> GraphModel {
    let mut graph = GraphModel::new(directed);
    for &(id, x, y) in nodes {
        assert!(graph.try_add_node(id, Position::new(x, y)));
    }
    for &(u, v, w) in edges {
        graph
            .try_add_edge(u, v, w, EdgeDirection::Forward)
            .unwrap();
    }
    graph
}

/// The walkthrough triangle: `A` and `B` in the top row, `C` below.
pub(crate) fn triangle(directed: bool) -> GraphModel {
    build_graph(
        directed,
        &[("A", 100.0, 100.0), ("B", 300.0, 100.0), ("C", 200.0, 250.0)],
        &[("A", "B", 1.0), ("B", "C", 2.0), ("C", "A", 1.5)],
    )
}

/// Random connected undirected graph: a spanning path plus `extra` random
/// edges. Weights are small integers so totals compare exactly.
pub(crate) fn random_connected<R: Rng>(rng: &mut R, n: usize, extra: usize) -> GraphModel {
    let ids: Vec<String> = (0..n).map(|i| format!("n{i:02}")).collect();

    let mut graph = GraphModel::new(false);
    for id in &ids {
        graph.try_add_node(
            id,
            Position::new(rng.random_range(0.0..800.0), rng.random_range(0.0..600.0)),
        );
    }
    for pair in ids.windows(2) {
        let weight = rng.random_range(1..20) as f64;
        graph
            .try_add_edge(&pair[0], &pair[1], weight, EdgeDirection::Forward)
            .unwrap();
    }
    for _ in 0..extra {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        if u != v {
            let weight = rng.random_range(1..20) as f64;
            graph
                .try_add_edge(&ids[u], &ids[v], weight, EdgeDirection::Forward)
                .unwrap();
        }
    }
    graph
}
