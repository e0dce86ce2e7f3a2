//! Travel-cost matrices.
//!
//! Provides a dense cost matrix for tour evaluation.

mod matrix;

pub use matrix::CostMatrix;
