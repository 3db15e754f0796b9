use crate::graph::{MutableGraph, UndirectedGraph};
use crate::Result;
use ordered_float::OrderedFloat;
use rand::prelude::*;

/// Name of the window at `floor`/`window` (both 1-based), e.g. `F2W3`
pub fn window_label(floor: usize, window: usize) -> String {
    format!("F{}W{}", floor, window)
}

/// Generates the facade grid a window-cleaning robot moves on.
///
/// Windows are named with [`window_label`]. Adjacent windows on the same floor
/// are joined with `horizontal` cost, windows directly above each other with
/// `vertical` cost.
pub fn generate_window_grid(
    floors: usize,
    windows: usize,
    horizontal: f64,
    vertical: f64,
) -> Result<UndirectedGraph<String, OrderedFloat<f64>>> {
    let mut graph = UndirectedGraph::new();

    for floor in 1..=floors {
        for window in 1..=windows {
            let current = window_label(floor, window);
            graph.add_vertex(current.clone());

            // Horizontal movement
            if window < windows {
                let right = window_label(floor, window + 1);
                graph.add_edge(current.clone(), right, OrderedFloat(horizontal))?;
            }
            // Vertical movement between floors
            if floor < floors {
                let above = window_label(floor + 1, window);
                graph.add_edge(current, above, OrderedFloat(vertical))?;
            }
        }
    }

    Ok(graph)
}

/// Generates a random connected graph on vertices `0..n`.
///
/// A random spanning tree guarantees connectivity, then `extra_edges` further
/// edges are sampled uniformly (self-loops skipped). Weights are drawn from
/// `1.0..=max_weight`.
pub fn generate_random_connected<R: Rng>(
    n: usize,
    extra_edges: usize,
    max_weight: f64,
    rng: &mut R,
) -> Result<UndirectedGraph<usize, OrderedFloat<f64>>> {
    let max_weight = max_weight.max(1.0);
    let mut graph = UndirectedGraph::new();
    if n == 0 {
        return Ok(graph);
    }
    graph.add_vertex(0);

    // Attach every new vertex to a random earlier one
    for v in 1..n {
        let u = rng.gen_range(0..v);
        let weight = OrderedFloat(rng.gen_range(1.0..=max_weight));
        graph.add_edge(u, v, weight)?;
    }

    if n > 1 {
        for _ in 0..extra_edges {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            if u != v {
                let weight = OrderedFloat(rng.gen_range(1.0..=max_weight));
                graph.add_edge(u, v, weight)?;
            }
        }
    }

    Ok(graph)
}

/// Generates a random graph on `0..n` with roughly `edge_factor * n` edges.
///
/// Unlike [`generate_random_connected`] the result may fall apart into several
/// components, which makes it useful for exercising unreachable targets.
pub fn generate_random<R: Rng>(
    n: usize,
    edge_factor: f64,
    rng: &mut R,
) -> Result<UndirectedGraph<usize, OrderedFloat<f64>>> {
    let mut graph = UndirectedGraph::new();
    for v in 0..n {
        graph.add_vertex(v);
    }
    if n < 2 {
        return Ok(graph);
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = OrderedFloat(rng.gen_range(1.0..100.0));
            graph.add_edge(u, v, weight)?;
        }
    }

    Ok(graph)
}
