use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::Result;

/// Label of a vertex. Any ordered, cloneable value works (strings, integers, ...)
pub trait VertexId: Ord + Clone + Debug {}

impl<T> VertexId for T where T: Ord + Clone + Debug {}

/// Trait representing a weighted undirected graph
pub trait Graph<V, W>: Debug
where
    V: VertexId,
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph, each undirected pair counted once
    fn edge_count(&self) -> usize;

    /// Returns an iterator over all vertices in ascending order
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Returns the neighbours of a vertex together with the connecting edge weight.
    ///
    /// Fails with [`crate::Error::UnknownVertex`] if the vertex was never added.
    fn neighbors(&self, vertex: &V) -> Result<Box<dyn Iterator<Item = (&V, W)> + '_>>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &V) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, a: &V, b: &V) -> bool;

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, a: &V, b: &V) -> Option<W>;
}

/// Trait for mutable graph operations
pub trait MutableGraph<V, W>: Graph<V, W>
where
    V: VertexId,
    W: Float + Zero + Debug + Copy,
{
    /// Adds a vertex if it is not present yet. Returns whether it was inserted.
    fn add_vertex(&mut self, vertex: V) -> bool;

    /// Adds an undirected edge, creating missing endpoints.
    ///
    /// A previous weight between the same pair is overwritten. Negative or NaN
    /// weights are rejected with [`crate::Error::InvalidWeight`] and leave the
    /// graph untouched.
    fn add_edge(&mut self, a: V, b: V, weight: W) -> Result<()>;
}
