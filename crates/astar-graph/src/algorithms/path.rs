//! Path reconstruction.
//!
//! Turns the predecessor map left by a search into an ordered route and
//! prices routes against a graph.

use std::collections::HashMap;

use super::astar::{astar_with_config, AStarConfig, SearchOutcome};
use super::heuristic::Heuristic;
use crate::models::{Graph, Node};
use crate::{GraphError, Result};

/// Shortest path with its total cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<N> {
    /// Nodes from start to goal inclusive.
    pub nodes: Vec<N>,
    /// Sum of the directed edge weights along `nodes`.
    pub cost: f64,
}

impl<N> Path<N> {
    /// Number of nodes on the path.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the path has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Reconstruct the route from `start` to `goal` by walking predecessors.
///
/// Fails with [`GraphError::MissingPredecessor`] if the chain breaks before
/// reaching `start`, which happens when reconstructing after a search that did
/// not find the goal.
pub fn reconstruct_path<N: Node>(
    came_from: &HashMap<N, N>,
    start: &N,
    goal: &N,
) -> Result<Vec<N>> {
    let mut path = vec![goal.clone()];
    let mut current = goal;

    // Walk back to start
    while current != start {
        current = came_from
            .get(current)
            .ok_or_else(|| GraphError::missing_predecessor(current))?;
        path.push(current.clone());

        // A cycle in the map can never reach start.
        if path.len() > came_from.len() + 1 {
            return Err(GraphError::missing_predecessor(start));
        }
    }

    path.reverse();
    Ok(path)
}

/// Total weight of consecutive directed edges along `path`.
pub fn path_cost<N: Node>(graph: &Graph<N>, path: &[N]) -> Result<f64> {
    path.windows(2)
        .map(|pair| graph.weight(&pair[0], &pair[1]))
        .sum()
}

/// Shortest path from `start` to `goal`, or `None` if unreachable.
///
/// # Example
///
/// ```
/// use astar_graph::{shortest_path, Graph, Zero};
///
/// let graph = Graph::from_edges([("a", "b", 1.0), ("b", "c", 1.0), ("a", "c", 3.0)]).unwrap();
/// let path = shortest_path(&graph, "a", "c", &Zero).unwrap().unwrap();
/// assert_eq!(path.nodes, vec!["a", "b", "c"]);
/// ```
pub fn shortest_path<N, H>(
    graph: &Graph<N>,
    start: N,
    goal: N,
    heuristic: &H,
) -> Result<Option<Path<N>>>
where
    N: Node,
    H: Heuristic<N> + ?Sized,
{
    shortest_path_with_config(graph, start, goal, heuristic, &AStarConfig::default())
}

/// Shortest path with configuration.
pub fn shortest_path_with_config<N, H>(
    graph: &Graph<N>,
    start: N,
    goal: N,
    heuristic: &H,
    config: &AStarConfig,
) -> Result<Option<Path<N>>>
where
    N: Node,
    H: Heuristic<N> + ?Sized,
{
    let tree = match astar_with_config(graph, &start, &goal, heuristic, config)? {
        SearchOutcome::Found(tree) => tree,
        SearchOutcome::NotFound => return Ok(None),
    };

    let cost = tree.goal_cost();
    let nodes = reconstruct_path(tree.came_from(), &start, &goal)?;
    Ok(Some(Path { nodes, cost }))
}
