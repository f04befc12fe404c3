/*!
`graphpad` is the core of an interactive graph board: a mutable graph model
whose nodes are user-named and placed on a canvas, the classic algorithm
suite run against it (traversal, shortest paths, spanning trees, Eulerian
trails, maximum flow, bipartiteness), and JSON snapshot persistence.

# Representation

**Nodes** are non-empty strings chosen by the user. The label is the
identity, and ascending label order is the canonical order used whenever a
deterministic sequence is needed. Every node owns a
[`Position`](crate::node::Position) on the 800x600 board.

**Edges** carry a non-negative `f64` weight. A model is directed or
undirected as a whole:

- in a **directed** model, `(u, v)` and `(v, u)` are distinct arcs,
- in an **undirected** model, both orientations name the same edge; storage
  keeps a mirrored entry per side so neighbor lookups stay cheap, while
  counts and iteration see each edge once.

Positions are not just decoration: traversals visit neighbors top to
bottom, then left to right, so the picture on the board dictates the
BFS/DFS order.

# Design

Algorithms are traits implemented on [`GraphModel`](crate::model::GraphModel)
itself, such as `graph.bfs("a")` or `graph.shortest_path("a", "b")`. Each
checks its preconditions against the borrowed model and returns a
serializable result or a [`GraphError`](crate::error::GraphError); nothing
mutates the model but the mutation methods themselves. Configurable
machinery like the spring layout follows the builder pattern instead.

# Usage

The submodules you probably want to interact with:
- [`prelude`] re-exports the model, node and edge types, and the errors,
- [`algo`] holds the algorithm traits,
- [`layout`] computes circular and force-directed node placements,
- [`repr`] converts a model into adjacency-matrix, adjacency-list, and
  edge-list form,
- [`io`] reads and writes snapshot documents and manages the saved-snapshot
  folder.

In most use-cases, `use graphpad::{prelude::*, algo::*};` suffices for your
needs.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod io;
pub mod layout;
pub mod model;
pub mod node;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

/// `graphpad::prelude` includes the graph model, node and edge definitions,
/// and the error types.
pub mod prelude {
    pub use super::{edge::*, error::*, model::*, node::*};
}
