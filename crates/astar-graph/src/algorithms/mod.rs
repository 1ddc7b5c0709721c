//! Search algorithms.
//!
//! This module provides shortest-path search over a [`Graph`](crate::Graph):
//! - [`astar`]: A* best-first search
//! - [`dijkstra`]: zero-heuristic search and single-source distances
//! - [`heuristic`]: distance estimates for guiding A*
//! - [`path`]: path reconstruction and costing
//! - [`frontier`]: deterministic open-set priority queue

pub mod astar;
pub mod dijkstra;
pub mod frontier;
pub mod heuristic;
pub mod path;

pub use astar::{astar, astar_with_config, AStarConfig, SearchOutcome, SearchStats, SearchTree};
pub use dijkstra::{dijkstra, dijkstra_distances};
pub use heuristic::{Chebyshev, Euclidean, Heuristic, Manhattan, Zero};
pub use path::{path_cost, reconstruct_path, shortest_path, shortest_path_with_config, Path};
