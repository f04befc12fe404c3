/*!
# Layouts

Position assignment for the whole board. Layouts are pure: they compute a
fresh position per node and leave applying them to the caller (usually via
[`GraphModel::set_positions`](crate::model::GraphModel::set_positions)).

Both layouts work in the unit square and map the result into the fixed
800x600 viewport with `((x + 1) * 400, (y + 1) * 300)`, so a full run
always lands inside the board.
*/

use std::f64::consts::TAU;

use fxhash::FxHashMap;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::{
    error::{GraphError, Result},
    model::GraphModel,
    node::{NodeId, Position},
};

const VIEW_WIDTH: f64 = 800.0;
const VIEW_HEIGHT: f64 = 600.0;

/// Maps coordinates in `[-1, 1]` onto the viewport.
fn to_viewport(x: f64, y: f64) -> Position {
    Position::new((x + 1.0) * (VIEW_WIDTH / 2.0), (y + 1.0) * (VIEW_HEIGHT / 2.0))
}

/// Places the nodes on a circle in canonical id order, starting at the
/// right and going clockwise on screen. A single node lands center.
pub fn circular(graph: &GraphModel) -> Result<Vec<(NodeId, Position)>> {
    if graph.is_empty() {
        return Err(GraphError::EmptyGraph);
    }
    let n = graph.order();
    if n == 1 {
        return Ok(graph
            .ordered_nodes()
            .map(|id| (id.clone(), to_viewport(0.0, 0.0)))
            .collect());
    }
    Ok(graph
        .ordered_nodes()
        .enumerate()
        .map(|(i, id)| {
            let angle = TAU * i as f64 / n as f64;
            (id.clone(), to_viewport(angle.cos(), angle.sin()))
        })
        .collect())
}

/// Seeded Fruchterman-Reingold spring embedding.
///
/// Every round applies pairwise repulsion (`k^2 / d`) and spring
/// attraction along edges (`d^2 / k`), caps the movement by a linearly
/// cooling temperature, and finally rescales the drawing around its
/// centroid to fill the viewport. Runs are deterministic: the same graph,
/// parameters, and seed give the same picture.
///
/// # Examples
/// ```
/// use graphpad::{layout::SpringLayout, prelude::*};
///
/// let mut graph = GraphModel::new(false);
/// graph.try_add_node("a", Position::default());
/// graph.try_add_node("b", Position::default());
/// graph.try_add_edge("a", "b", 1.0, EdgeDirection::default()).unwrap();
///
/// let positions = SpringLayout::new().iterations(80).run(&graph).unwrap();
/// assert_eq!(positions.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct SpringLayout {
    iterations: usize,
    optimal_distance: f64,
    seed: u64,
}

impl Default for SpringLayout {
    /// The board's parameters: 50 iterations, unit optimal distance,
    /// seed 42.
    fn default() -> Self {
        Self {
            iterations: 50,
            optimal_distance: 1.0,
            seed: 42,
        }
    }
}

impl SpringLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of relaxation rounds.
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the ideal edge length in unit-square coordinates.
    pub fn optimal_distance(mut self, k: f64) -> Self {
        self.optimal_distance = k;
        self
    }

    /// Seeds the initial random placement.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Runs the embedding over all nodes.
    pub fn run(&self, graph: &GraphModel) -> Result<Vec<(NodeId, Position)>> {
        if graph.is_empty() {
            return Err(GraphError::EmptyGraph);
        }

        let ids: Vec<NodeId> = graph.ordered_nodes().cloned().collect();
        let n = ids.len();
        if let [only] = ids.as_slice() {
            return Ok(vec![(only.clone(), to_viewport(0.0, 0.0))]);
        }

        let mut rng = Pcg64::seed_from_u64(self.seed);
        let mut pos: Vec<(f64, f64)> = (0..n)
            .map(|_| (rng.random_range(0.0..1.0), rng.random_range(0.0..1.0)))
            .collect();

        // springs ignore direction and multiplicity
        let index: FxHashMap<&str, usize> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.as_str(), i))
            .collect();
        let springs: Vec<(usize, usize)> = graph
            .edges()
            .filter(|e| !e.is_loop())
            .filter_map(|e| {
                Some((
                    *index.get(e.source.as_str())?,
                    *index.get(e.target.as_str())?,
                ))
            })
            .collect();

        let k = self.optimal_distance;
        let mut temperature = 0.1;
        let cooling = temperature / (self.iterations as f64 + 1.0);

        for _ in 0..self.iterations {
            let mut disp = vec![(0.0_f64, 0.0_f64); n];

            for i in 0..n {
                for j in (i + 1)..n {
                    let dx = pos[i].0 - pos[j].0;
                    let dy = pos[i].1 - pos[j].1;
                    let dist = (dx * dx + dy * dy).sqrt().max(1e-4);
                    let repulse = k * k / dist;
                    disp[i].0 += dx / dist * repulse;
                    disp[i].1 += dy / dist * repulse;
                    disp[j].0 -= dx / dist * repulse;
                    disp[j].1 -= dy / dist * repulse;
                }
            }

            for &(i, j) in &springs {
                let dx = pos[i].0 - pos[j].0;
                let dy = pos[i].1 - pos[j].1;
                let dist = (dx * dx + dy * dy).sqrt().max(1e-4);
                let attract = dist * dist / k;
                disp[i].0 -= dx / dist * attract;
                disp[i].1 -= dy / dist * attract;
                disp[j].0 += dx / dist * attract;
                disp[j].1 += dy / dist * attract;
            }

            for i in 0..n {
                let (dx, dy) = disp[i];
                let length = (dx * dx + dy * dy).sqrt().max(1e-4);
                let step = length.min(temperature);
                pos[i].0 += dx / length * step;
                pos[i].1 += dy / length * step;
            }
            temperature -= cooling;
        }

        // center on the centroid and stretch to [-1, 1]
        let cx = pos.iter().map(|p| p.0).sum::<f64>() / n as f64;
        let cy = pos.iter().map(|p| p.1).sum::<f64>() / n as f64;
        let mut spread = 0.0_f64;
        for p in &pos {
            spread = spread.max((p.0 - cx).abs()).max((p.1 - cy).abs());
        }
        if spread < 1e-9 {
            spread = 1.0;
        }

        Ok(ids
            .into_iter()
            .zip(pos)
            .map(|(id, (x, y))| (id, to_viewport((x - cx) / spread, (y - cy) / spread)))
            .collect())
    }
}
