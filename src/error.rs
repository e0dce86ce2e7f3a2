//! Error type shared by the search routines.

use std::fmt;

/// Errors reported by model construction and the hill-climbing solver.
///
/// An unreachable target in [`iddfs`](crate::search::iddfs) is not an
/// error; it is reported as `None`.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// The model is malformed (non-square matrix, negative cost, size mismatch).
    InvalidModel {
        /// Human-readable description of the defect.
        reason: String,
    },
    /// A city sequence is not a permutation of `0..n`.
    InvalidTour {
        /// Human-readable description of the defect.
        reason: String,
    },
    /// Fewer than two cities: no swap neighborhood exists.
    DegenerateInput {
        /// Number of cities in the instance.
        city_count: usize,
    },
}

impl SearchError {
    pub(crate) fn invalid_model(reason: impl Into<String>) -> Self {
        Self::InvalidModel {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_tour(reason: impl Into<String>) -> Self {
        Self::InvalidTour {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidModel { reason } => write!(f, "invalid model: {reason}"),
            Self::InvalidTour { reason } => write!(f, "invalid tour: {reason}"),
            Self::DegenerateInput { city_count } => write!(
                f,
                "degenerate input: hill climbing needs at least 2 cities, got {city_count}"
            ),
        }
    }
}

impl std::error::Error for SearchError {}
