//! A* best-first search.
//!
//! Expands nodes in order of `f = g + h`, where `g` is the best known cost from
//! the start and `h` is the heuristic estimate to the goal. Each node is closed
//! at most once; once closed its `g` is final.
//!
//! With non-negative weights and a consistent heuristic the first time the goal
//! is popped its cost is optimal. Termination only needs a finite graph: the
//! closed set grows by one node per expansion.

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use super::frontier::Frontier;
use super::heuristic::Heuristic;
use crate::models::{Graph, Node};
use crate::{GraphError, Result};

/// A* configuration.
#[derive(Debug, Clone, Default)]
pub struct AStarConfig {
    /// Maximum number of nodes to expand before giving up.
    pub max_expansions: Option<usize>,
}

impl AStarConfig {
    /// Create new A* configuration (unbounded).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the expansion cap.
    pub fn with_max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = Some(max);
        self
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes moved to the closed set.
    pub expanded: usize,
    /// Neighbor scores improved (or first set).
    pub relaxed: usize,
    /// Frontier pushes, including the start node.
    pub pushed: usize,
}

/// Predecessors and scores left behind by a successful search.
#[derive(Debug, Clone)]
pub struct SearchTree<N: Node> {
    goal: N,
    came_from: HashMap<N, N>,
    g_score: HashMap<N, f64>,
    stats: SearchStats,
}

impl<N: Node> SearchTree<N> {
    /// The goal node this search settled.
    pub fn goal(&self) -> &N {
        &self.goal
    }

    /// Predecessor map along the best known paths.
    pub fn came_from(&self) -> &HashMap<N, N> {
        &self.came_from
    }

    /// Predecessor of a node, if one was recorded.
    pub fn predecessor(&self, node: &N) -> Option<&N> {
        self.came_from.get(node)
    }

    /// Best known cost from the start to `node`.
    ///
    /// Final for closed nodes and the goal, tentative for the rest of the
    /// open set.
    pub fn g_score(&self, node: &N) -> Option<f64> {
        self.g_score.get(node).copied()
    }

    /// Cost of the shortest path to the goal.
    pub fn goal_cost(&self) -> f64 {
        self.g_score.get(&self.goal).copied().unwrap_or(0.0)
    }

    /// Search counters.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Consume the tree, keeping only the predecessor map.
    pub fn into_came_from(self) -> HashMap<N, N> {
        self.came_from
    }
}

/// Result of a search that did not fail.
#[derive(Debug, Clone)]
pub enum SearchOutcome<N: Node> {
    /// Goal settled.
    Found(SearchTree<N>),
    /// Open set exhausted without reaching the goal.
    NotFound,
}

impl<N: Node> SearchOutcome<N> {
    /// Check if the goal was reached.
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    /// The search tree, if the goal was reached.
    pub fn tree(&self) -> Option<&SearchTree<N>> {
        match self {
            SearchOutcome::Found(tree) => Some(tree),
            SearchOutcome::NotFound => None,
        }
    }

    /// Convert into an `Option`.
    pub fn into_tree(self) -> Option<SearchTree<N>> {
        match self {
            SearchOutcome::Found(tree) => Some(tree),
            SearchOutcome::NotFound => None,
        }
    }
}

/// A* search from `start` to `goal`.
///
/// # Arguments
///
/// * `graph` - Graph to search; must not change during the call
/// * `start` - Start node
/// * `goal` - Goal node (may equal `start`)
/// * `heuristic` - Estimate of remaining cost, assumed admissible
///
/// # Returns
///
/// [`SearchOutcome::Found`] with the predecessor map, or
/// [`SearchOutcome::NotFound`] if the goal is unreachable.
///
/// # Errors
///
/// [`GraphError::MissingNode`] when an expanded node has no adjacency entry and
/// [`GraphError::MissingEdge`] when a neighbor has no recorded weight.
pub fn astar<N, H>(
    graph: &Graph<N>,
    start: &N,
    goal: &N,
    heuristic: &H,
) -> Result<SearchOutcome<N>>
where
    N: Node,
    H: Heuristic<N> + ?Sized,
{
    astar_with_config(graph, start, goal, heuristic, &AStarConfig::default())
}

/// A* search with configuration.
///
/// Additionally fails with [`GraphError::ExpansionLimit`] when
/// `config.max_expansions` nodes have been expanded without settling the goal.
pub fn astar_with_config<N, H>(
    graph: &Graph<N>,
    start: &N,
    goal: &N,
    heuristic: &H,
    config: &AStarConfig,
) -> Result<SearchOutcome<N>>
where
    N: Node,
    H: Heuristic<N> + ?Sized,
{
    debug!("A* search from {:?} to {:?}", start, goal);

    let mut frontier = Frontier::new();
    let mut closed: HashSet<N> = HashSet::new();
    let mut came_from: HashMap<N, N> = HashMap::new();
    let mut g_score: HashMap<N, f64> = HashMap::new();
    let mut stats = SearchStats::default();

    g_score.insert(start.clone(), 0.0);
    frontier.push(start.clone(), heuristic.estimate(start, goal));
    stats.pushed += 1;

    while let Some(entry) = frontier.pop() {
        let current = entry.node;

        // Superseded entry for a node already expanded.
        if closed.contains(&current) {
            continue;
        }

        if &current == goal {
            debug!(
                "A* reached {:?} after {} expansions (cost {})",
                goal,
                stats.expanded,
                g_score.get(goal).copied().unwrap_or(0.0)
            );
            return Ok(SearchOutcome::Found(SearchTree {
                goal: current,
                came_from,
                g_score,
                stats,
            }));
        }

        if let Some(max) = config.max_expansions {
            if stats.expanded >= max {
                debug!("A* gave up after {} expansions", stats.expanded);
                return Err(GraphError::ExpansionLimit(max));
            }
        }

        let current_g = g_score
            .get(&current)
            .copied()
            .ok_or_else(|| GraphError::missing_node(&current))?;
        trace!("expanding {:?} (g={}, f={})", current, current_g, entry.f_score);

        for neighbor in graph.neighbors(&current)? {
            if closed.contains(neighbor) {
                continue;
            }

            let tentative_g = current_g + graph.weight(&current, neighbor)?;
            let improves = match g_score.get(neighbor) {
                Some(&known) => tentative_g < known,
                None => true,
            };

            if improves {
                came_from.insert(neighbor.clone(), current.clone());
                g_score.insert(neighbor.clone(), tentative_g);
                let f_score = tentative_g + heuristic.estimate(neighbor, goal);
                frontier.push(neighbor.clone(), f_score);
                stats.relaxed += 1;
                stats.pushed += 1;
            }
        }

        closed.insert(current);
        stats.expanded += 1;
    }

    debug!(
        "A* exhausted open set after {} expansions, {:?} unreachable",
        stats.expanded, goal
    );
    Ok(SearchOutcome::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::heuristic::{Euclidean, Zero};

    fn make_line_graph(n: u32) -> Graph<u32> {
        // 0 - 1 - 2 - ... - n-1, unit weights
        Graph::from_edges((0..n - 1).map(|i| (i, i + 1, 1.0))).unwrap()
    }

    #[test]
    fn test_astar_line_graph() {
        let graph = make_line_graph(5);
        let tree = astar(&graph, &0, &4, &Zero).unwrap().into_tree().unwrap();

        assert_eq!(tree.goal_cost(), 4.0);
        assert_eq!(tree.predecessor(&4), Some(&3));
        assert_eq!(tree.predecessor(&1), Some(&0));
        assert_eq!(tree.predecessor(&0), None);
        assert_eq!(tree.stats().expanded, 4);
    }

    #[test]
    fn test_astar_start_is_goal() {
        let mut graph: Graph<&str> = Graph::new();
        graph.add_node("only");

        // Goal test happens before neighbor lookup.
        let tree = astar(&graph, &"only", &"only", &Zero)
            .unwrap()
            .into_tree()
            .unwrap();
        assert!(tree.came_from().is_empty());
        assert_eq!(tree.goal_cost(), 0.0);
        assert_eq!(tree.stats().expanded, 0);
    }

    #[test]
    fn test_astar_unreachable() {
        let mut graph = make_line_graph(3);
        graph.add_node(99);

        let outcome = astar(&graph, &0, &99, &Zero).unwrap();
        assert!(!outcome.is_found());
        assert!(outcome.tree().is_none());
    }

    #[test]
    fn test_astar_start_without_edges() {
        let mut graph = make_line_graph(3);
        graph.add_node(42);

        let result = astar(&graph, &42, &0, &Zero);
        assert_eq!(result.unwrap_err(), GraphError::MissingNode("42".into()));
    }

    #[test]
    fn test_astar_directed_edges() {
        let mut graph = Graph::new();
        graph.add_directed_edge("a", "b", 1.0).unwrap();
        graph.add_directed_edge("b", "c", 1.0).unwrap();
        graph.add_directed_edge("a", "c", 5.0).unwrap();

        // "c" has no outgoing entry, but the goal is never expanded.

        let tree = astar(&graph, &"a", &"c", &Zero).unwrap().into_tree().unwrap();
        assert_eq!(tree.goal_cost(), 2.0);
    }

    #[test]
    fn test_astar_prefers_cheaper_detour() {
        // 0 --10-- 2, 0 --1-- 1 --1-- 2
        let graph = Graph::from_edges([(0, 2, 10.0), (0, 1, 1.0), (1, 2, 1.0)]).unwrap();
        let tree = astar(&graph, &0, &2, &Zero).unwrap().into_tree().unwrap();

        assert_eq!(tree.goal_cost(), 2.0);
        assert_eq!(tree.predecessor(&2), Some(&1));
    }

    #[test]
    fn test_astar_equal_cost_tie_is_deterministic() {
        // Two routes of cost 2; the neighbor discovered first wins.
        let graph =
            Graph::from_edges([("s", "a", 1.0), ("s", "b", 1.0), ("a", "t", 1.0), ("b", "t", 1.0)])
                .unwrap();

        for _ in 0..20 {
            let tree = astar(&graph, &"s", &"t", &Zero).unwrap().into_tree().unwrap();
            assert_eq!(tree.predecessor(&"t"), Some(&"a"));
        }
    }

    #[test]
    fn test_astar_heuristic_prunes_expansions() {
        // 11x11 grid with unit edges.
        let mut graph = Graph::new();
        for x in 0..11i32 {
            for y in 0..11i32 {
                if x + 1 < 11 {
                    graph.add_edge((x, y), (x + 1, y), 1.0).unwrap();
                }
                if y + 1 < 11 {
                    graph.add_edge((x, y), (x, y + 1), 1.0).unwrap();
                }
            }
        }

        let guided = astar(&graph, &(0, 5), &(10, 5), &Euclidean::new())
            .unwrap()
            .into_tree()
            .unwrap();
        let blind = astar(&graph, &(0, 5), &(10, 5), &Zero)
            .unwrap()
            .into_tree()
            .unwrap();

        assert_eq!(guided.goal_cost(), 10.0);
        assert_eq!(blind.goal_cost(), 10.0);
        assert!(guided.stats().expanded < blind.stats().expanded);
    }

    #[test]
    fn test_astar_expansion_limit() {
        let graph = make_line_graph(10);
        let config = AStarConfig::new().with_max_expansions(3);

        let result = astar_with_config(&graph, &0, &9, &Zero, &config);
        assert_eq!(result.unwrap_err(), GraphError::ExpansionLimit(3));

        // Enough budget to settle the goal.
        let config = AStarConfig::new().with_max_expansions(9);
        let outcome = astar_with_config(&graph, &0, &9, &Zero, &config).unwrap();
        assert!(outcome.is_found());
    }

    #[test]
    fn test_astar_closure_heuristic() {
        let graph = make_line_graph(6);
        let h = |a: &u32, b: &u32| (*b as f64 - *a as f64).abs();

        let tree = astar(&graph, &5, &0, &h).unwrap().into_tree().unwrap();
        assert_eq!(tree.goal_cost(), 5.0);
        assert_eq!(tree.stats().expanded, 5);
    }
}
