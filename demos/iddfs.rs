//! Iterative deepening on a small binary tree.
//!
//! Run with `cargo run --example iddfs`.

use u_search::graph::Digraph;
use u_search::search::iddfs;

fn main() {
    let mut graph = Digraph::new(7);
    graph.add_edge(0, 1);
    graph.add_edge(0, 2);
    graph.add_edge(1, 3);
    graph.add_edge(1, 4);
    graph.add_edge(2, 5);
    graph.add_edge(2, 6);

    let (src, target, max_depth) = (0, 6, 3);
    match iddfs(&graph, src, target, max_depth) {
        Some(path) => {
            println!("Target is reachable from source within max depth. Path: {path:?}")
        }
        None => println!("Target is NOT reachable from source within max depth"),
    }
}
