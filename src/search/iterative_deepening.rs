//! Iterative-deepening depth-first search (IDDFS).
//!
//! # Algorithm
//!
//! Run depth-limited search with budgets `0, 1, ..., max_depth - 1`, each
//! time from a fresh empty path, and return the first path found. Because
//! budgets grow one edge at a time, the result uses the fewest edges among
//! all paths shorter than `max_depth` edges.
//!
//! # Complexity
//!
//! Shallow vertices are re-explored at every budget, so time is exponential
//! in the solution depth for branching graphs. Memory stays proportional to
//! the depth.
//!
//! # Reference
//!
//! Korf, R.E. (1985). "Depth-first iterative-deepening: An optimal admissible
//! tree search", *Artificial Intelligence* 27(1), 97-109.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::depth_limited::search;
use crate::graph::Digraph;

/// Result of an iterative-deepening run with search statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IddfsOutcome {
    /// Path from source to target, or `None` when not found.
    pub path: Option<Vec<usize>>,
    /// Depth budget at which the path was found.
    pub depth: Option<usize>,
    /// Number of depth budgets tried.
    pub depths_tried: usize,
    /// Vertices pushed across all depth-limited passes.
    pub nodes_visited: usize,
}

impl IddfsOutcome {
    /// Returns `true` if a path was found.
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }
}

/// Finds a path from `src` to `target` with the fewest edges, if one exists
/// with fewer than `max_depth` edges.
///
/// `max_depth` is an **exclusive** bound: the budgets tried are
/// `0..max_depth`, so a target `k` edges away needs `max_depth > k`, and
/// `max_depth == 0` never finds anything, not even `src == target`.
///
/// Returns `None` when no budget below `max_depth` reaches the target. This
/// is an ordinary outcome, not an error.
///
/// # Examples
///
/// ```
/// use u_search::graph::Digraph;
/// use u_search::search::iddfs;
///
/// let g = Digraph::from_edges(7, &[(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (2, 6)]);
/// assert_eq!(iddfs(&g, 0, 6, 3), Some(vec![0, 2, 6]));
/// assert_eq!(iddfs(&g, 0, 6, 2), None);
/// ```
pub fn iddfs(graph: &Digraph, src: usize, target: usize, max_depth: usize) -> Option<Vec<usize>> {
    iddfs_with_stats(graph, src, target, max_depth).path
}

/// Like [`iddfs`], but also reports the depth reached and the work done.
pub fn iddfs_with_stats(
    graph: &Digraph,
    src: usize,
    target: usize,
    max_depth: usize,
) -> IddfsOutcome {
    let mut nodes_visited = 0usize;

    for depth in 0..max_depth {
        trace!("iddfs {src} -> {target}: trying depth {depth}");
        let mut path = Vec::new();
        if search(graph, src, target, depth, &mut path, &mut nodes_visited) {
            debug!(
                "iddfs {src} -> {target}: found at depth {depth} after {nodes_visited} vertices"
            );
            return IddfsOutcome {
                path: Some(path),
                depth: Some(depth),
                depths_tried: depth + 1,
                nodes_visited,
            };
        }
    }

    debug!("iddfs {src} -> {target}: not found below depth {max_depth}");
    IddfsOutcome {
        path: None,
        depth: None,
        depths_tried: max_depth,
        nodes_visited,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary_tree() -> Digraph {
        Digraph::from_edges(7, &[(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (2, 6)])
    }

    #[test]
    fn test_reachable() {
        assert_eq!(iddfs(&binary_tree(), 0, 6, 3), Some(vec![0, 2, 6]));
    }

    #[test]
    fn test_bound_is_exclusive() {
        // Vertex 6 is two edges away: only depth 0 is tried with max_depth 1.
        assert_eq!(iddfs(&binary_tree(), 0, 6, 1), None);
        assert_eq!(iddfs(&binary_tree(), 0, 6, 2), None);
    }

    #[test]
    fn test_missing_vertex() {
        assert_eq!(iddfs(&binary_tree(), 0, 99, 5), None);
    }

    #[test]
    fn test_zero_max_depth_finds_nothing() {
        assert_eq!(iddfs(&binary_tree(), 0, 0, 0), None);
        assert_eq!(iddfs(&binary_tree(), 0, 0, 1), Some(vec![0]));
    }

    #[test]
    fn test_prefers_fewest_edges() {
        // DLS alone at depth 3 would return 0→1→2→3; IDDFS finds 0→3 first.
        let g = Digraph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (0, 3)]);
        assert_eq!(iddfs(&g, 0, 3, 4), Some(vec![0, 3]));
    }

    #[test]
    fn test_stats_found() {
        let outcome = iddfs_with_stats(&binary_tree(), 0, 6, 3);
        assert!(outcome.is_found());
        assert_eq!(outcome.depth, Some(2));
        assert_eq!(outcome.depths_tried, 3);
        // depth 0: {0}; depth 1: {0, 1, 2}; depth 2: {0, 1, 3, 4, 2, 5, 6}
        assert_eq!(outcome.nodes_visited, 11);
    }

    #[test]
    fn test_stats_not_found() {
        let outcome = iddfs_with_stats(&binary_tree(), 0, 99, 5);
        assert!(!outcome.is_found());
        assert_eq!(outcome.depth, None);
        assert_eq!(outcome.depths_tried, 5);
    }

    #[test]
    fn test_cyclic_graph() {
        let g = Digraph::from_edges(3, &[(0, 1), (1, 0), (1, 2)]);
        assert_eq!(iddfs(&g, 0, 2, 5), Some(vec![0, 1, 2]));
        assert_eq!(iddfs(&g, 2, 0, 5), None);
    }
}
