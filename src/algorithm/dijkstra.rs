use std::collections::BTreeMap;
use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::{Graph, VertexId};
use crate::algorithm::{ShortestPathEngine, ShortestPathResult};
use crate::data_structures::Frontier;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with lazy deletion
///
/// The frontier may hold several entries for one vertex; an entry whose
/// distance is larger than the recorded one is stale and skipped on pop, so no
/// decrease-key operation is needed. Requires non-negative weights, which
/// [`crate::graph::MutableGraph::add_edge`] enforces.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra engine instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<V, W, G> ShortestPathEngine<V, W, G> for Dijkstra
where
    V: VertexId,
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_distances(&self, graph: &G, start: &V) -> Result<ShortestPathResult<V, W>> {
        if !graph.has_vertex(start) {
            return Err(Error::unknown_vertex(start));
        }

        // Initialize distances and predecessors
        let mut distances: BTreeMap<V, W> = graph
            .vertices()
            .map(|v| (v.clone(), W::infinity()))
            .collect();
        let mut predecessors: BTreeMap<V, Option<V>> =
            graph.vertices().map(|v| (v.clone(), None)).collect();

        // Distance to start is 0
        distances.insert(start.clone(), W::zero());

        let mut frontier = Frontier::new();
        frontier.push(start.clone(), W::zero());

        let mut settled = 0usize;
        let mut stale = 0usize;

        while let Some((u, dist_u)) = frontier.pop() {
            let recorded = distances.get(&u).copied().unwrap_or_else(W::infinity);
            if dist_u > recorded {
                log::trace!("skipping stale entry {:?} at {:?}", u, dist_u);
                stale += 1;
                continue;
            }
            settled += 1;

            for (v, weight) in graph.neighbors(&u)? {
                let candidate = dist_u + weight;
                let current = distances.get(v).copied().unwrap_or_else(W::infinity);

                if candidate < current {
                    distances.insert(v.clone(), candidate);
                    predecessors.insert(v.clone(), Some(u.clone()));
                    frontier.push(v.clone(), candidate);
                }
            }
        }

        log::debug!(
            "dijkstra from {:?}: {} vertices, {} settled, {} stale entries skipped",
            start,
            graph.vertex_count(),
            settled,
            stale
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source: start.clone(),
        })
    }
}
