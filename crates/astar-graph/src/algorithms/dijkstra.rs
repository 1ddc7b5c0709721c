//! Dijkstra's algorithm.
//!
//! The goal-directed variant is A* with the [`Zero`] heuristic. The
//! single-source variant runs until the frontier is empty and reports the
//! settled distance of every reachable node.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::astar::{astar, SearchOutcome};
use super::frontier::Frontier;
use super::heuristic::Zero;
use crate::models::{Graph, Node};
use crate::Result;

/// Dijkstra search from `start` to `goal`.
pub fn dijkstra<N: Node>(graph: &Graph<N>, start: &N, goal: &N) -> Result<SearchOutcome<N>> {
    astar(graph, start, goal, &Zero)
}

/// Shortest distance from `start` to every reachable node.
///
/// Every settled node is expanded, so a reachable node without an adjacency
/// entry fails with [`GraphError::MissingNode`](crate::GraphError::MissingNode).
pub fn dijkstra_distances<N: Node>(graph: &Graph<N>, start: &N) -> Result<HashMap<N, f64>> {
    let mut frontier = Frontier::new();
    let mut settled: HashSet<N> = HashSet::new();
    let mut dist: HashMap<N, f64> = HashMap::new();

    dist.insert(start.clone(), 0.0);
    frontier.push(start.clone(), 0.0);

    while let Some(entry) = frontier.pop() {
        let u = entry.node;
        if !settled.insert(u.clone()) {
            continue;
        }

        let cost_u = entry.f_score;
        for v in graph.neighbors(&u)? {
            if settled.contains(v) {
                continue;
            }
            let new_dist = cost_u + graph.weight(&u, v)?;
            if dist.get(v).map_or(true, |&d| new_dist < d) {
                dist.insert(v.clone(), new_dist);
                frontier.push(v.clone(), new_dist);
            }
        }
    }

    debug!("Dijkstra from {:?} settled {} nodes", start, settled.len());
    Ok(dist)
}
