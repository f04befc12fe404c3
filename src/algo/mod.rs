/*!
# Graph Algorithms

The algorithm suite on top of [`GraphModel`](crate::model::GraphModel).
Each family lives in its own module and is exposed as an extension trait on
the model, and everything is re-exported here, so you can simply do:
```rust
use graphpad::algo::*;
```
and call `graph.bfs(..)`, `graph.shortest_path(..)`, `graph.prim_mst()` and
friends directly. Algorithms never mutate the graph; results are owned
values that stay valid after further edits.
*/

mod bipartite;
mod eulerian;
mod flow;
mod shortest_path;
mod spanning_tree;
mod traversal;

pub use bipartite::*;
pub use eulerian::*;
pub use flow::*;
pub use shortest_path::*;
pub use spanning_tree::*;
pub use traversal::*;
