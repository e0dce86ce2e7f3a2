//! # u-search
//!
//! Discrete search routines: a hill-climbing local search for the
//! travelling salesman problem and an iterative-deepening depth-first
//! search over directed graphs.
//!
//! ## Modules
//!
//! - [`distance`] — Dense travel-cost matrix
//! - [`models`] — Tour (permutation of cities)
//! - [`evaluation`] — Cyclic tour length
//! - [`constructive`] — Random starting tours
//! - [`local_search`] — Swap neighborhood and hill climbing
//! - [`graph`] — Adjacency-list directed graph
//! - [`search`] — Depth-limited search and iterative deepening
//! - [`error`] — Error type

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod graph;
pub mod local_search;
pub mod models;
pub mod search;

pub use error::SearchError;

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_models_are_send_sync() {
        assert_send_sync::<distance::CostMatrix>();
        assert_send_sync::<models::Tour>();
        assert_send_sync::<graph::Digraph>();
        assert_send_sync::<local_search::HillClimbResult>();
        assert_send_sync::<search::IddfsOutcome>();
        assert_send_sync::<SearchError>();
    }
}
