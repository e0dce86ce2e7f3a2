//! Directed graph model for bounded search.

mod digraph;

pub use digraph::Digraph;
