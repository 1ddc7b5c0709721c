//! Weight Sensitivity Example
//!
//! Builds a five-node graph and shows how changing edge weights moves the
//! shortest route between (0,0) and (2,2):
//! - Initial weights route through (1,1)
//! - Raising (0,0)-(1,1) moves the route through (1,0)
//! - Raising (0,0)-(1,0) moves it again through (0,1)
//!
//! Run with: `cargo run -p astar-graph --example weight_sensitivity`
//! Set `RUST_LOG=astar_graph=trace` to see each expansion.

use astar_graph::{shortest_path, Euclidean, Graph, GraphError, Path};
use tracing_subscriber::EnvFilter;

type Point = (i32, i32);

fn print_route(label: &str, path: Option<Path<Point>>) {
    match path {
        Some(path) => {
            let route = path
                .nodes
                .iter()
                .map(|p| format!("{:?}", p))
                .collect::<Vec<_>>()
                .join(" -> ");
            println!("{:<28} {} (cost {:.2})", label, route, path.cost);
        }
        None => println!("{:<28} no route", label),
    }
}

/// Overwrite both directions of an edge.
fn reweight(graph: &mut Graph<Point>, a: Point, b: Point, distance: f64) -> Result<(), GraphError> {
    graph.set_weight(&a, &b, distance)?;
    graph.set_weight(&b, &a, distance)
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== A* Weight Sensitivity Demo ===\n");

    let mut graph = Graph::new();
    for node in [(0, 0), (1, 1), (1, 0), (0, 1), (2, 2)] {
        graph.add_node(node);
    }
    graph.add_edge((0, 0), (1, 1), 1.5)?;
    graph.add_edge((0, 0), (0, 1), 1.2)?;
    graph.add_edge((0, 0), (1, 0), 1.0)?;
    graph.add_edge((1, 0), (2, 2), 2.0)?;
    graph.add_edge((0, 1), (2, 2), 2.0)?;
    graph.add_edge((1, 1), (2, 2), 1.5)?;

    let heuristic = Euclidean::new();
    let (start, goal) = ((0, 0), (2, 2));

    print_route("initial weights:", shortest_path(&graph, start, goal, &heuristic)?);

    reweight(&mut graph, (0, 0), (1, 1), 2.0)?;
    print_route("(0,0)-(1,1) = 2.0:", shortest_path(&graph, start, goal, &heuristic)?);

    reweight(&mut graph, (0, 0), (1, 0), 1.3)?;
    print_route("(0,0)-(1,0) = 1.3:", shortest_path(&graph, start, goal, &heuristic)?);

    graph.add_node((9, 9));
    print_route("unreachable (9,9):", shortest_path(&graph, start, (9, 9), &heuristic)?);

    Ok(())
}
