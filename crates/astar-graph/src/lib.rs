//! Weighted graphs and A* shortest-path search.
//!
//! This crate provides a small pathfinding primitive:
//!
//! - **Graph**: in-memory weighted adjacency structure over any hashable node type
//! - **A\***: best-first search guided by a caller-supplied heuristic
//! - **Path reconstruction**: turn a predecessor map into an ordered route
//! - **Dijkstra**: the zero-heuristic special case, used as a reference
//!
//! The open set is a binary min-heap keyed by `(f_score, insertion order)`, so
//! ties on `f_score` always resolve to the node discovered first and results are
//! reproducible run to run.
//!
//! # Example
//!
//! ```
//! use astar_graph::{shortest_path, Euclidean, Graph};
//!
//! let mut graph = Graph::new();
//! graph.add_edge((0, 0), (1, 1), 1.5).unwrap();
//! graph.add_edge((1, 1), (2, 2), 1.5).unwrap();
//! graph.add_edge((0, 0), (2, 2), 5.0).unwrap();
//!
//! let path = shortest_path(&graph, (0, 0), (2, 2), &Euclidean::new())
//!     .unwrap()
//!     .expect("goal is reachable");
//! assert_eq!(path.nodes, vec![(0, 0), (1, 1), (2, 2)]);
//! assert_eq!(path.cost, 3.0);
//! ```

pub mod algorithms;
pub mod models;

// Re-export main types
pub use algorithms::astar::{
    astar, astar_with_config, AStarConfig, SearchOutcome, SearchStats, SearchTree,
};
pub use algorithms::dijkstra::{dijkstra, dijkstra_distances};
pub use algorithms::heuristic::{Chebyshev, Euclidean, Heuristic, Manhattan, Zero};
pub use algorithms::path::{
    path_cost, reconstruct_path, shortest_path, shortest_path_with_config, Path,
};
pub use models::graph::Graph;
pub use models::node::{Node, Planar};

/// Graph and search error types.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// Node has no adjacency entry.
    #[error("Missing node: {0} has no adjacency entry")]
    MissingNode(String),

    /// No weight recorded for the ordered pair.
    #[error("Missing edge: no weight recorded from {from} to {to}")]
    MissingEdge { from: String, to: String },

    /// Predecessor chain broken before reaching the start node.
    #[error("Missing predecessor for {0}")]
    MissingPredecessor(String),

    /// Edge weight is NaN or infinite.
    #[error("Invalid weight: {0} is not a finite distance")]
    InvalidWeight(f64),

    /// Search hit the configured expansion cap before settling the goal.
    #[error("Expansion limit reached after {0} expansions")]
    ExpansionLimit(usize),
}

impl GraphError {
    pub(crate) fn missing_node<N: std::fmt::Debug>(node: &N) -> Self {
        GraphError::MissingNode(format!("{:?}", node))
    }

    pub(crate) fn missing_edge<N: std::fmt::Debug>(from: &N, to: &N) -> Self {
        GraphError::MissingEdge {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }

    pub(crate) fn missing_predecessor<N: std::fmt::Debug>(node: &N) -> Self {
        GraphError::MissingPredecessor(format!("{:?}", node))
    }
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
