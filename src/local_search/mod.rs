//! Local search for improving tours.
//!
//! - [`swap_neighbors`] / [`SwapPairs`] — Pairwise-swap neighborhood, eager or lazy
//! - [`best_neighbor`] / [`best_swap`] — First strict minimum over a neighborhood
//! - [`hill_climb`] — Steepest-descent hill climbing to a local optimum

mod config;
mod hill_climb;
mod swap;

pub use config::HillClimbConfig;
pub use hill_climb::{hill_climb, hill_climb_from, hill_climb_with_rng, HillClimbResult};
pub use swap::{best_neighbor, best_swap, swap_neighbors, SwapMove, SwapPairs};
