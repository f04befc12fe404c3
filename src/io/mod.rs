/*!
# IO

Persistence for the board. A graph is saved as one JSON snapshot document
holding the node list (ids plus positions), the edge list, and the
direction flag.

- [`snapshot`] defines the document ([`GraphSnapshot`]) and generic
  reader/writer helpers over any [`Read`](std::io::Read) /
  [`Write`](std::io::Write).
- [`store`] manages a flat folder of named snapshot files
  ([`SnapshotStore`]).

Snapshots are captured in canonical order (nodes and edges ascending), so
saving an unchanged graph twice produces identical documents. Reading is
lenient and repairs what it can; see [`GraphSnapshot::restore`].
*/

pub mod snapshot;
pub mod store;

use std::io;

use thiserror::Error;

pub use snapshot::*;
pub use store::*;

/// Errors from snapshot persistence.
///
/// Kept separate from [`GraphError`](crate::error::GraphError) so callers
/// can tell environment failures apart from graph-level ones.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io failure: {0}")]
    Io(#[from] io::Error),
    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid snapshot name `{0}`")]
    InvalidName(String),
    #[error("no snapshot named `{0}`")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
