//! Domain model types for tour search.
//!
//! A [`Tour`] is a permutation of city indices visited cyclically.

mod tour;

pub use tour::Tour;
