use std::collections::BTreeMap;
use std::fmt::Debug;
use num_traits::{Float, Zero};
use serde::Serialize;

use crate::graph::{Graph, VertexId};
use crate::{Error, Result};

/// Distance and predecessor tables produced by a single-source query
#[derive(Debug, Clone)]
pub struct ShortestPathResult<V, W>
where
    V: VertexId,
    W: Float + Zero + Debug + Copy,
{
    /// Minimal cumulative weight from the source; infinity if unreachable
    pub distances: BTreeMap<V, W>,

    /// Vertex each best distance was reached from; `None` for the source and unreached vertices
    pub predecessors: BTreeMap<V, Option<V>>,

    /// Source vertex
    pub source: V,
}

/// A concrete route from a start to an end vertex
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath<V, W> {
    /// Vertices from start to end, both inclusive
    pub vertices: Vec<V>,

    /// Sum of the edge weights along `vertices`
    pub distance: W,
}

impl<V, W> ShortestPathResult<V, W>
where
    V: VertexId,
    W: Float + Zero + Debug + Copy,
{
    /// Distance to `vertex`, or `None` if it is unknown or unreachable
    pub fn distance(&self, vertex: &V) -> Option<W> {
        self.distances
            .get(vertex)
            .copied()
            .filter(|distance| !distance.is_infinite())
    }

    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.distance(vertex).is_some()
    }

    /// Number of vertices reachable from the source, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|d| !d.is_infinite()).count()
    }

    /// Reconstructs the route from the source to `target`.
    ///
    /// Walks the predecessor table backwards from `target` and reverses the
    /// walk. Unknown targets yield [`Error::UnknownVertex`], targets with
    /// infinite distance yield [`Error::Unreachable`].
    pub fn path_to(&self, target: &V) -> Result<ShortestPath<V, W>> {
        let distance = *self
            .distances
            .get(target)
            .ok_or_else(|| Error::unknown_vertex(target))?;

        if distance.is_infinite() {
            return Err(Error::Unreachable {
                start: format!("{:?}", self.source),
                end: format!("{:?}", target),
            });
        }

        let mut vertices = Vec::new();
        let mut current = Some(target.clone());
        while let Some(vertex) = current {
            // A chain longer than the graph can only come from a corrupted table
            if vertices.len() >= self.distances.len() {
                return Err(Error::AlgorithmError(format!(
                    "predecessor chain from {:?} does not terminate",
                    target
                )));
            }
            current = self.predecessors.get(&vertex).cloned().flatten();
            vertices.push(vertex);
        }
        vertices.reverse();

        if vertices.first() != Some(&self.source) {
            return Err(Error::AlgorithmError(format!(
                "predecessor chain from {:?} ends at {:?} instead of the source {:?}",
                target,
                vertices.first(),
                self.source
            )));
        }

        Ok(ShortestPath { vertices, distance })
    }
}

/// Trait for single-source shortest path engines
pub trait ShortestPathEngine<V, W, G>
where
    V: VertexId,
    W: Float + Zero + Debug + Copy,
    G: Graph<V, W>,
{
    /// Compute shortest distances and predecessors from `start` to every vertex
    fn compute_distances(&self, graph: &G, start: &V) -> Result<ShortestPathResult<V, W>>;

    /// Get the name of the engine
    fn name(&self) -> &'static str;

    /// Get the shortest route from `start` to `end` together with its total weight.
    ///
    /// Both endpoints are checked before any work is done. An unreachable `end`
    /// is reported as [`Error::Unreachable`].
    fn shortest_path(&self, graph: &G, start: &V, end: &V) -> Result<ShortestPath<V, W>> {
        if !graph.has_vertex(start) {
            return Err(Error::unknown_vertex(start));
        }
        if !graph.has_vertex(end) {
            return Err(Error::unknown_vertex(end));
        }

        let result = self.compute_distances(graph, start)?;
        result.path_to(end)
    }
}
