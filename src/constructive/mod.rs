//! Constructive heuristics for building initial tours.
//!
//! - [`random_tour`] — Uniformly random permutation by sampling without replacement, O(n²)

mod random;

pub use random::random_tour;
