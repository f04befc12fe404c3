/*!
# Node Representation

Nodes carry caller-assigned string labels since the board lets users name
vertices freely. The label doubles as the node's identity: ids are unique,
non-empty, and totally ordered, and the ascending id order is the canonical
order used by representations, deterministic algorithm starts, and snapshots.

Every node additionally stores a [`Position`] on the board. Positions are
pure display state for most of the crate, with one exception: traversals
rank a node's neighbors by position (top to bottom, then left to right), so
the picture on the board dictates the visiting order.
*/

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Node identifier. Unique, non-empty, ordered lexicographically.
pub type NodeId = String;

/// Where nodes land when no position is given (the board center).
pub const DEFAULT_POSITION: Position = Position { x: 400.0, y: 300.0 };

/// A position on the board, in pixels from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Key for the traversal neighbor ordering: row first, then column.
    pub(crate) fn order_key(&self) -> (OrderedFloat<f64>, OrderedFloat<f64>) {
        (OrderedFloat(self.y), OrderedFloat(self.x))
    }
}

impl Default for Position {
    fn default() -> Self {
        DEFAULT_POSITION
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}
