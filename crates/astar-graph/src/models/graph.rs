//! Weighted adjacency graph.
//!
//! Storage layout:
//! - `nodes`: explicitly registered vertices
//! - `adjacency[n]`: neighbors of `n` in insertion order
//! - `weights[(a, b)]`: distance of the directed pair `a -> b`
//!
//! [`Graph::add_edge`] writes both directions, so the graph is undirected under
//! normal use. Weights are still keyed by ordered pair and a single direction
//! can be overridden with [`Graph::set_weight`].

use std::collections::{HashMap, HashSet};

use super::node::Node;
use crate::{GraphError, Result};

/// Weighted graph over arbitrary hashable nodes.
#[derive(Debug, Clone)]
pub struct Graph<N: Node> {
    nodes: HashSet<N>,
    adjacency: HashMap<N, Vec<N>>,
    weights: HashMap<(N, N), f64>,
}

impl<N: Node> Default for Graph<N> {
    fn default() -> Self {
        Self {
            nodes: HashSet::new(),
            adjacency: HashMap::new(),
            weights: HashMap::new(),
        }
    }
}

impl<N: Node> Graph<N> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with room for `num_nodes` vertices.
    pub fn with_capacity(num_nodes: usize) -> Self {
        Self {
            nodes: HashSet::with_capacity(num_nodes),
            adjacency: HashMap::with_capacity(num_nodes),
            weights: HashMap::new(),
        }
    }

    /// Create a graph from undirected weighted edges.
    ///
    /// # Example
    ///
    /// ```
    /// use astar_graph::Graph;
    ///
    /// let graph = Graph::from_edges([("a", "b", 1.0), ("b", "c", 2.0)]).unwrap();
    /// assert_eq!(graph.edge_count(), 4);
    /// assert_eq!(graph.weight(&"c", &"b").unwrap(), 2.0);
    /// ```
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, N, f64)>,
    {
        let mut graph = Self::new();
        for (a, b, distance) in edges {
            graph.add_edge(a, b, distance)?;
        }
        Ok(graph)
    }

    /// Register a node.
    ///
    /// Returns true if the node was not already present. Re-adding is a no-op.
    pub fn add_node(&mut self, value: N) -> bool {
        self.nodes.insert(value)
    }

    /// Add an undirected edge.
    ///
    /// Records `a -> b` and `b -> a` with the same distance and appends each
    /// endpoint to the other's neighbor list. Endpoints need not be registered
    /// with [`add_node`](Self::add_node); appearing in the adjacency map is
    /// enough for search to treat them as present.
    ///
    /// Negative finite distances are stored, but search assumes non-negative
    /// weights for optimality.
    pub fn add_edge(&mut self, a: N, b: N, distance: f64) -> Result<()> {
        check_weight(distance)?;
        self.insert_directed(a.clone(), b.clone(), distance);
        self.insert_directed(b, a, distance);
        Ok(())
    }

    /// Add a single directed entry `from -> to`.
    pub fn add_directed_edge(&mut self, from: N, to: N, distance: f64) -> Result<()> {
        check_weight(distance)?;
        self.insert_directed(from, to, distance);
        Ok(())
    }

    /// Overwrite the distance of an existing directed pair.
    ///
    /// Only `from -> to` changes; the reverse direction and the adjacency lists
    /// are left untouched.
    pub fn set_weight(&mut self, from: &N, to: &N, distance: f64) -> Result<()> {
        check_weight(distance)?;
        match self.weights.get_mut(&(from.clone(), to.clone())) {
            Some(w) => {
                *w = distance;
                Ok(())
            }
            None => Err(GraphError::missing_edge(from, to)),
        }
    }

    fn insert_directed(&mut self, from: N, to: N, distance: f64) {
        self.adjacency
            .entry(from.clone())
            .or_default()
            .push(to.clone());
        self.weights.insert((from, to), distance);
    }

    /// Neighbors of a node in insertion order.
    ///
    /// Fails with [`GraphError::MissingNode`] when the node has no adjacency
    /// entry, including nodes registered via `add_node` that never got an edge.
    pub fn neighbors(&self, node: &N) -> Result<&[N]> {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::missing_node(node))
    }

    /// Distance recorded for the directed pair `from -> to`.
    pub fn weight(&self, from: &N, to: &N) -> Result<f64> {
        self.weights
            .get(&(from.clone(), to.clone()))
            .copied()
            .ok_or_else(|| GraphError::missing_edge(from, to))
    }

    /// Check if the node is registered or has an adjacency entry.
    pub fn contains_node(&self, node: &N) -> bool {
        self.nodes.contains(node) || self.adjacency.contains_key(node)
    }

    /// Explicitly registered nodes, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.iter()
    }

    /// Number of explicitly registered nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed weight entries.
    pub fn edge_count(&self) -> usize {
        self.weights.len()
    }

    /// Check if the graph has no nodes and no edges.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.adjacency.is_empty()
    }
}

fn check_weight(distance: f64) -> Result<()> {
    if distance.is_finite() {
        Ok(())
    } else {
        Err(GraphError::InvalidWeight(distance))
    }
}
