use ordered_float::OrderedFloat;
use path_planning::graph::generators::{generate_window_grid, window_label};
use path_planning::{Dijkstra, ShortestPath, ShortestPathEngine, UndirectedGraph};
use std::env;
use std::fmt::Display;

/// Configuration for the window-cleaning scenario
#[derive(Debug, Clone)]
pub struct CleanerConfig {
    pub floors: usize,
    pub windows: usize,
    pub horizontal_cost: f64,
    pub vertical_cost: f64,
    pub json: bool,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            floors: 4,
            windows: 3,
            horizontal_cost: 1.0,
            vertical_cost: 2.0,
            json: false,
        }
    }
}

impl CleanerConfig {
    /// Positional `[floors] [windows] [horizontal_cost] [vertical_cost]`, plus `--json` anywhere
    fn from_args(args: &[String]) -> Self {
        let defaults = Self::default();
        let json = args.iter().any(|a| a == "--json");
        let positional: Vec<&String> = args.iter().skip(1).filter(|a| *a != "--json").collect();

        Self {
            floors: positional.first().and_then(|a| a.parse().ok()).unwrap_or(defaults.floors),
            windows: positional.get(1).and_then(|a| a.parse().ok()).unwrap_or(defaults.windows),
            horizontal_cost: positional
                .get(2)
                .and_then(|a| a.parse().ok())
                .unwrap_or(defaults.horizontal_cost),
            vertical_cost: positional
                .get(3)
                .and_then(|a| a.parse().ok())
                .unwrap_or(defaults.vertical_cost),
            json,
        }
    }
}

fn format_path<V: Display>(path: &ShortestPath<V, OrderedFloat<f64>>) -> String {
    let names: Vec<String> = path.vertices.iter().map(|v| v.to_string()).collect();
    format!("[{}]", names.join(", "))
}

fn run_small_example(dijkstra: &Dijkstra) -> Result<(), Box<dyn std::error::Error>> {
    let graph = UndirectedGraph::from_edges(vec![
        ("A", "B", OrderedFloat(1.0)),
        ("A", "C", OrderedFloat(4.0)),
        ("B", "C", OrderedFloat(2.0)),
        ("B", "D", OrderedFloat(5.0)),
        ("C", "D", OrderedFloat(1.0)),
    ])?;

    let path = dijkstra.shortest_path(&graph, &"A", &"D")?;
    println!(
        "Shortest path from A to D: {} with total distance: {}",
        format_path(&path),
        path.distance
    );
    Ok(())
}

fn run_window_grid(
    dijkstra: &Dijkstra,
    config: &CleanerConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let graph = generate_window_grid(
        config.floors,
        config.windows,
        config.horizontal_cost,
        config.vertical_cost,
    )?;

    // Bottom-left to top-right
    let start = window_label(1, 1);
    let end = window_label(config.floors, config.windows);

    let path = dijkstra.shortest_path(&graph, &start, &end)?;
    if config.json {
        println!("{}", serde_json::to_string_pretty(&path)?);
    } else {
        println!(
            "Robot cleaning path from {} to {}: {} with total cost: {}",
            start,
            end,
            format_path(&path),
            path.distance
        );
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = CleanerConfig::from_args(&args);
    log::info!("window cleaner configuration: {:?}", config);

    let dijkstra = Dijkstra::new();
    if !config.json {
        run_small_example(&dijkstra)?;
    }
    run_window_grid(&dijkstra, &config)?;

    Ok(())
}
