//! Path Planning - single-source shortest paths over weighted undirected graphs
//!
//! The crate provides an undirected graph with non-negative edge weights and a
//! priority-queue driven Dijkstra engine that computes distance and predecessor
//! tables from a start vertex and reconstructs the concrete route to any target.
//!
//! ```
//! use path_planning::{Dijkstra, ShortestPathEngine, UndirectedGraph};
//! use path_planning::graph::MutableGraph;
//! use ordered_float::OrderedFloat;
//!
//! let mut graph = UndirectedGraph::new();
//! graph.add_edge("A", "B", OrderedFloat(1.0)).unwrap();
//! graph.add_edge("B", "C", OrderedFloat(2.0)).unwrap();
//!
//! let path = Dijkstra::new().shortest_path(&graph, &"A", &"C").unwrap();
//! assert_eq!(path.vertices, vec!["A", "B", "C"]);
//! assert_eq!(path.distance, OrderedFloat(3.0));
//! ```

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{dijkstra::Dijkstra, ShortestPath, ShortestPathEngine, ShortestPathResult};
/// Re-export main types for convenient use
pub use graph::undirected::UndirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("Invalid edge weight {weight} between {from} and {to}")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("No path from {start} to {end}")]
    Unreachable { start: String, end: String },

    #[error("Algorithm execution error: {0}")]
    AlgorithmError(String),
}

impl Error {
    pub(crate) fn unknown_vertex<V: std::fmt::Debug>(vertex: &V) -> Self {
        Error::UnknownVertex(format!("{:?}", vertex))
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
