//! Depth-limited depth-first search.
//!
//! # Algorithm
//!
//! Starting at `src`, push the vertex onto the path. If it is the target the
//! search succeeds and the path is left in place. If the remaining depth
//! budget is zero the vertex is popped and the branch fails. Otherwise each
//! successor is searched in graph order with one less unit of budget; the
//! first success ends the search. A vertex whose successors all fail is
//! popped before its parent moves on.
//!
//! The recursion is unrolled onto an explicit frame stack, so deep budgets
//! do not grow the call stack. The path discipline is unchanged: a vertex is
//! pushed before it is examined and popped only when its branch fails.
//!
//! Vertices are not marked visited; cycles are bounded by the depth budget
//! alone, and a vertex may appear more than once on the path.

use crate::graph::Digraph;

/// A vertex whose successors are being explored.
#[derive(Debug, Clone, Copy)]
struct Frame {
    vertex: usize,
    /// Depth budget at this vertex; always positive for a stacked frame.
    remaining: usize,
    /// Index of the next successor to try.
    next: usize,
}

/// Searches for `target` from `src`, descending at most `max_depth` edges.
///
/// On success returns `true` and leaves the found path (from `src` to
/// `target` inclusive) appended to `path`. On failure returns `false` and
/// leaves `path` exactly as it was on entry.
///
/// # Examples
///
/// ```
/// use u_search::graph::Digraph;
/// use u_search::search::depth_limited_search;
///
/// let g = Digraph::from_edges(3, &[(0, 1), (1, 2)]);
///
/// let mut path = Vec::new();
/// assert!(!depth_limited_search(&g, 0, 2, 1, &mut path));
/// assert!(path.is_empty());
///
/// assert!(depth_limited_search(&g, 0, 2, 2, &mut path));
/// assert_eq!(path, vec![0, 1, 2]);
/// ```
pub fn depth_limited_search(
    graph: &Digraph,
    src: usize,
    target: usize,
    max_depth: usize,
    path: &mut Vec<usize>,
) -> bool {
    let mut visited = 0;
    search(graph, src, target, max_depth, path, &mut visited)
}

/// Depth-limited search that also counts the vertices it pushes.
pub(super) fn search(
    graph: &Digraph,
    src: usize,
    target: usize,
    max_depth: usize,
    path: &mut Vec<usize>,
    visited: &mut usize,
) -> bool {
    let base = path.len();

    *visited += 1;
    path.push(src);
    if src == target {
        return true;
    }
    if max_depth == 0 {
        path.pop();
        return false;
    }

    let mut frames = vec![Frame {
        vertex: src,
        remaining: max_depth,
        next: 0,
    }];

    while let Some(frame) = frames.last_mut() {
        let Some(&child) = graph.successors(frame.vertex).get(frame.next) else {
            // All successors failed: backtrack.
            frames.pop();
            path.pop();
            continue;
        };
        frame.next += 1;
        let remaining = frame.remaining - 1;

        *visited += 1;
        path.push(child);
        if child == target {
            return true;
        }
        if remaining == 0 {
            path.pop();
            continue;
        }
        frames.push(Frame {
            vertex: child,
            remaining,
            next: 0,
        });
    }

    debug_assert_eq!(path.len(), base);
    false
}
