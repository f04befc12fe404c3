/*!
# Snapshot Documents

One graph serializes to one JSON document:

```json
{
    "nodes": [{ "id": "a", "x": 400.0, "y": 300.0 }],
    "edges": [{ "source": "a", "target": "b", "weight": 1.0 }],
    "is_directed": false
}
```

Every field past the ids is optional on the way in: missing coordinates
fall back to the board center, missing weights to 1, and a missing
`is_directed` to undirected.
*/

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::{
    edge::{EdgeDirection, WeightedEdge},
    model::GraphModel,
    node::{NodeId, Position, DEFAULT_POSITION},
};

use super::Result;

fn default_x() -> f64 {
    DEFAULT_POSITION.x
}

fn default_y() -> f64 {
    DEFAULT_POSITION.y
}

/// One node entry in a snapshot document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    #[serde(default = "default_x")]
    pub x: f64,
    #[serde(default = "default_y")]
    pub y: f64,
}

/// The serialized form of a whole graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub edges: Vec<WeightedEdge>,
    #[serde(default)]
    pub is_directed: bool,
}

impl GraphSnapshot {
    /// Captures the full state of `graph`, nodes and edges ascending.
    pub fn capture(graph: &GraphModel) -> Self {
        Self {
            nodes: graph
                .ordered_nodes()
                .map(|id| {
                    let position = graph.position_of(id).unwrap_or_default();
                    NodeRecord {
                        id: id.clone(),
                        x: position.x,
                        y: position.y,
                    }
                })
                .collect(),
            edges: graph.ordered_edges(),
            is_directed: graph.is_directed(),
        }
    }

    /// Rebuilds a model from the document.
    ///
    /// Restoring is lenient: duplicate or empty node ids are dropped,
    /// endpoints that never appear in `nodes` are created at the board
    /// center, and edges that still cannot be inserted (or carry a
    /// negative weight) are skipped. Every repair logs at `warn`.
    pub fn restore(&self) -> GraphModel {
        let mut graph = GraphModel::new(self.is_directed);
        for record in &self.nodes {
            if !graph.try_add_node(&record.id, Position::new(record.x, record.y)) {
                warn!("snapshot: dropped duplicate or empty node id `{}`", record.id);
            }
        }
        for edge in &self.edges {
            if edge.weight < 0.0 {
                warn!("snapshot: skipped edge {edge} with negative weight");
                continue;
            }
            for endpoint in [&edge.source, &edge.target] {
                if !graph.contains_node(endpoint)
                    && graph.try_add_node(endpoint, DEFAULT_POSITION)
                {
                    warn!("snapshot: edge {edge} names unknown node `{endpoint}`, created at center");
                }
            }
            if let Err(err) = graph.try_add_edge(
                &edge.source,
                &edge.target,
                edge.weight,
                EdgeDirection::Forward,
            ) {
                warn!("snapshot: skipped edge {edge}: {err}");
            }
        }
        graph
    }

    /// Ids of all nodes in the document, in document order.
    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.iter().map(|record| &record.id)
    }
}

/// Writes `snapshot` as pretty-printed JSON.
///
/// # Errors
/// Returns an error if serialization or the underlying writer fails.
pub fn write_snapshot<W>(snapshot: &GraphSnapshot, writer: W) -> Result<()>
where
    W: Write,
{
    serde_json::to_writer_pretty(writer, snapshot)?;
    Ok(())
}

/// Reads a snapshot document from JSON.
///
/// # Errors
/// Returns an error if the input is not a valid snapshot document.
pub fn read_snapshot<R>(reader: R) -> Result<GraphSnapshot>
where
    R: Read,
{
    Ok(serde_json::from_reader(reader)?)
}

/// Writes `snapshot` to a file through a buffered writer.
///
/// # Errors
/// Returns an error if the file cannot be created or writing fails.
pub fn write_snapshot_file<P>(snapshot: &GraphSnapshot, path: P) -> Result<()>
where
    P: AsRef<Path>,
{
    write_snapshot(snapshot, BufWriter::new(File::create(path)?))
}

/// Reads a snapshot from a file through a buffered reader.
///
/// # Errors
/// Returns an error if the file cannot be opened or its contents are not
/// a valid snapshot document.
pub fn read_snapshot_file<P>(path: P) -> Result<GraphSnapshot>
where
    P: AsRef<Path>,
{
    read_snapshot(BufReader::new(File::open(path)?))
}
