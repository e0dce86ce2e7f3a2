//! Adjacency-list directed graph.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A directed multigraph stored as successor lists keyed by vertex id.
///
/// Successors keep insertion order and repeated edges are kept. A vertex
/// with no outgoing edges has no entry; [`successors`](Self::successors)
/// reports an empty slice for it. `vertex_count` is informational and is
/// not used to bound vertex ids.
///
/// # Examples
///
/// ```
/// use u_search::graph::Digraph;
///
/// let mut g = Digraph::new(3);
/// g.add_edge(0, 2);
/// g.add_edge(0, 1);
/// g.add_edge(0, 2);
/// assert_eq!(g.successors(0), &[2, 1, 2]);
/// assert!(g.successors(1).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Digraph {
    vertex_count: usize,
    adjacency: HashMap<usize, Vec<usize>>,
}

impl Digraph {
    /// Creates an empty graph with the declared number of vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            adjacency: HashMap::new(),
        }
    }

    /// Builds a graph from an edge list, inserting edges in order.
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Self {
        let mut graph = Self::new(vertex_count);
        for &(u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Appends `v` to the successors of `u`, creating the list on first use.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        self.adjacency.entry(u).or_default().push(v);
    }

    /// Direct successors of `v` in insertion order.
    pub fn successors(&self, v: usize) -> &[usize] {
        self.adjacency.get(&v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Declared number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Total number of edges, counting repeats.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Vertices that have at least one outgoing edge, in ascending order.
    pub fn vertices_with_edges(&self) -> Vec<usize> {
        let mut vertices: Vec<usize> = self.adjacency.keys().copied().collect();
        vertices.sort_unstable();
        vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        let g = Digraph::new(5);
        assert_eq!(g.vertex_count(), 5);
        assert_eq!(g.edge_count(), 0);
        assert!(g.successors(0).is_empty());
        assert!(g.vertices_with_edges().is_empty());
    }

    #[test]
    fn test_insertion_order_and_duplicates() {
        let mut g = Digraph::new(4);
        g.add_edge(1, 3);
        g.add_edge(1, 0);
        g.add_edge(1, 3);
        assert_eq!(g.successors(1), &[3, 0, 3]);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn test_ids_beyond_declared_count() {
        let mut g = Digraph::new(2);
        g.add_edge(10, 20);
        assert_eq!(g.successors(10), &[20]);
        assert_eq!(g.vertex_count(), 2);
    }

    #[test]
    fn test_from_edges() {
        let g = Digraph::from_edges(7, &[(0, 1), (0, 2), (1, 3), (2, 6)]);
        assert_eq!(g.successors(0), &[1, 2]);
        assert_eq!(g.vertices_with_edges(), vec![0, 1, 2]);
        assert!(g.successors(6).is_empty());
    }

    #[test]
    fn test_json_keeps_successor_order() {
        let g = Digraph::from_edges(3, &[(0, 2), (0, 1), (2, 0)]);
        let json = serde_json::to_string(&g).expect("serialize");
        let back: Digraph = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.successors(0), &[2, 1]);
        assert_eq!(back, g);
    }
}
