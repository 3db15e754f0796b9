use crate::graph::traits::{Graph, MutableGraph, VertexId};
use crate::{Error, Result};
use num_traits::{Float, ToPrimitive, Zero};
use std::collections::BTreeMap;
use std::fmt::Debug;

/// An undirected weighted graph stored as symmetric adjacency maps
///
/// Both maps are ordered by vertex id, so neighbour iteration and therefore
/// every shortest-path query is deterministic for a given graph.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<V, W>
where
    V: VertexId,
    W: Float + Zero + Debug + Copy,
{
    /// vertex -> {neighbour -> weight}; always symmetric
    adjacency: BTreeMap<V, BTreeMap<V, W>>,
}

impl<V, W> Default for UndirectedGraph<V, W>
where
    V: VertexId,
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> UndirectedGraph<V, W>
where
    V: VertexId,
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty undirected graph
    pub fn new() -> Self {
        UndirectedGraph {
            adjacency: BTreeMap::new(),
        }
    }

    /// Builds a graph from `(a, b, weight)` triples.
    ///
    /// Every weight is checked before anything is inserted, so an invalid edge
    /// anywhere in the input yields an error and no graph.
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, V, W)>,
    {
        let edges: Vec<(V, V, W)> = edges.into_iter().collect();
        for (a, b, weight) in &edges {
            check_weight(a, b, *weight)?;
        }

        let mut graph = Self::new();
        for (a, b, weight) in edges {
            graph.add_edge(a, b, weight)?;
        }
        Ok(graph)
    }

    /// Checks that every stored edge has a mirror with the same weight
    pub fn is_symmetric(&self) -> bool {
        self.adjacency.iter().all(|(a, neighbours)| {
            neighbours.iter().all(|(b, weight)| {
                self.adjacency
                    .get(b)
                    .and_then(|back| back.get(a))
                    .map_or(false, |w| w == weight)
            })
        })
    }
}

fn check_weight<V, W>(a: &V, b: &V, weight: W) -> Result<()>
where
    V: VertexId,
    W: Float + Zero + Debug + Copy,
{
    if weight.is_nan() || weight < W::zero() {
        log::warn!("rejecting edge {:?} - {:?} with weight {:?}", a, b, weight);
        return Err(Error::InvalidWeight {
            from: format!("{:?}", a),
            to: format!("{:?}", b),
            weight: weight.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(())
}

impl<V, W> Graph<V, W> for UndirectedGraph<V, W>
where
    V: VertexId,
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        // Each pair is stored twice except self-loops; count it from its smaller end.
        self.adjacency
            .iter()
            .map(|(a, neighbours)| neighbours.keys().filter(|b| a <= *b).count())
            .sum()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.adjacency.keys())
    }

    fn neighbors(&self, vertex: &V) -> Result<Box<dyn Iterator<Item = (&V, W)> + '_>> {
        match self.adjacency.get(vertex) {
            Some(neighbours) => Ok(Box::new(neighbours.iter().map(|(v, w)| (v, *w)))),
            None => Err(Error::unknown_vertex(vertex)),
        }
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn has_edge(&self, a: &V, b: &V) -> bool {
        self.get_edge_weight(a, b).is_some()
    }

    fn get_edge_weight(&self, a: &V, b: &V) -> Option<W> {
        self.adjacency.get(a).and_then(|neighbours| neighbours.get(b)).copied()
    }
}

impl<V, W> MutableGraph<V, W> for UndirectedGraph<V, W>
where
    V: VertexId,
    W: Float + Zero + Debug + Copy,
{
    fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, BTreeMap::new());
        true
    }

    fn add_edge(&mut self, a: V, b: V, weight: W) -> Result<()> {
        check_weight(&a, &b, weight)?;

        self.adjacency
            .entry(a.clone())
            .or_default()
            .insert(b.clone(), weight);
        self.adjacency.entry(b).or_default().insert(a, weight);
        Ok(())
    }
}
