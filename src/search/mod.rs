//! Bounded depth-first search over a [`Digraph`](crate::graph::Digraph).
//!
//! - [`depth_limited_search`] — Depth-first search with a fixed edge budget
//! - [`iddfs`] — Iterative deepening over increasing budgets, fewest edges first

mod depth_limited;
mod iterative_deepening;

pub use depth_limited::depth_limited_search;
pub use iterative_deepening::{iddfs, iddfs_with_stats, IddfsOutcome};
