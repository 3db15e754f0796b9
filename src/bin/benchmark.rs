use std::env;
use std::time::{Duration, Instant};
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::SeedableRng;
use path_planning::algorithm::{dijkstra::Dijkstra, ShortestPathEngine};
use path_planning::graph::generators::generate_random_connected;
use path_planning::graph::{Graph, UndirectedGraph};

/// Configuration for the benchmark run
#[derive(Debug, Clone)]
struct BenchmarkConfig {
    /// Graph sizes (vertex counts) to test
    sizes: Vec<usize>,
    /// Extra edges per vertex on top of the spanning tree
    edge_factor: f64,
    /// Seed for graph generation
    seed: u64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            sizes: vec![1_000, 10_000, 50_000, 100_000],
            edge_factor: 2.0,
            seed: 42,
        }
    }
}

impl BenchmarkConfig {
    /// Positional `[edge_factor] [seed] [sizes...]`
    fn from_args(args: &[String]) -> Self {
        let defaults = Self::default();
        let sizes: Vec<usize> = args.iter().skip(3).filter_map(|a| a.parse().ok()).collect();

        Self {
            edge_factor: args.get(1).and_then(|a| a.parse().ok()).unwrap_or(defaults.edge_factor),
            seed: args.get(2).and_then(|a| a.parse().ok()).unwrap_or(defaults.seed),
            sizes: if sizes.is_empty() { defaults.sizes } else { sizes },
        }
    }
}

// Function to benchmark the engine on a graph
fn benchmark_engine<E>(name: &str, engine: &E, graph: &UndirectedGraph<usize, OrderedFloat<f64>>, source: usize) -> Result<Duration, path_planning::Error>
where
    E: ShortestPathEngine<usize, OrderedFloat<f64>, UndirectedGraph<usize, OrderedFloat<f64>>>
{
    println!("Running {} on graph with {} vertices...", name, graph.vertex_count());

    let start = Instant::now();
    let result = engine.compute_distances(graph, &source)?;
    let duration = start.elapsed();

    println!("  - Found {} reachable vertices in {:?}", result.reachable_count(), duration);

    Ok(duration)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = BenchmarkConfig::from_args(&args);

    println!("=====================================================");
    println!("Benchmark: Dijkstra on random connected graphs");
    println!("Edge factor: {} extra edges per vertex (on average)", config.edge_factor);
    println!("=====================================================");

    let dijkstra = Dijkstra::new();
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut results = Vec::new();

    for &size in &config.sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let extra_edges = (size as f64 * config.edge_factor) as usize;
        let graph = generate_random_connected(size, extra_edges, 100.0, &mut rng)?;
        let source = 0; // Use vertex 0 as source

        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let duration = benchmark_engine("Dijkstra", &dijkstra, &graph, source)?;
        results.push((size, graph.edge_count(), duration));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<10} | {:<15}", "Vertices", "Edges", "Dijkstra (ms)");
    println!("-----------------------------------------------------");

    for (size, edges, duration) in &results {
        println!("{:<10} | {:<10} | {:<15.2}", size, edges, duration.as_secs_f64() * 1000.0);
    }

    Ok(())
}
