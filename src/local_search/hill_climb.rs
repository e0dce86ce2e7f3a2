//! Steepest-descent hill climbing for the TSP.
//!
//! # Algorithm
//!
//! 1. Start from a uniformly random tour (or a caller-supplied one).
//! 2. Find the best swap neighbor of the current tour.
//! 3. If it is strictly shorter, move to it and repeat from 2.
//! 4. Otherwise stop: the current tour is a local optimum.
//!
//! There are no restarts and no non-improving moves, so the result is a
//! local optimum of the swap neighborhood, not necessarily a global one.
//! The loop always terminates because every accepted move strictly
//! shortens the tour and there are finitely many tours.

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::config::HillClimbConfig;
use super::swap::{best_swap, SwapPairs};
use crate::constructive::random_tour;
use crate::distance::CostMatrix;
use crate::error::SearchError;
use crate::evaluation::TourEvaluator;
use crate::models::Tour;

/// Result of a hill-climbing run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HillClimbResult {
    /// The locally optimal tour.
    pub tour: Tour,
    /// Length of `tour`.
    pub length: f64,
    /// Length of the starting tour.
    pub initial_length: f64,
    /// Number of improving moves adopted.
    pub iterations: usize,
    /// Number of neighbor lengths computed.
    pub evaluations: usize,
    /// Seed of the starting tour, if it was drawn from a seeded generator.
    pub seed: Option<u64>,
}

/// Runs hill climbing from a random starting tour.
///
/// Fails with [`SearchError::DegenerateInput`] when the matrix has fewer
/// than two cities.
///
/// # Examples
///
/// ```
/// use u_search::distance::CostMatrix;
/// use u_search::local_search::{hill_climb, HillClimbConfig};
///
/// let cm = CostMatrix::from_rows(vec![
///     vec![0.0, 400.0, 500.0, 300.0],
///     vec![400.0, 0.0, 300.0, 500.0],
///     vec![500.0, 300.0, 0.0, 400.0],
///     vec![300.0, 500.0, 400.0, 0.0],
/// ])
/// .expect("valid");
///
/// let result = hill_climb(&cm, &HillClimbConfig::default()).expect("4 cities");
/// assert_eq!(result.length, 1400.0);
/// assert!(result.length <= result.initial_length);
/// ```
pub fn hill_climb(
    costs: &CostMatrix,
    config: &HillClimbConfig,
) -> Result<HillClimbResult, SearchError> {
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut result = hill_climb_with_rng(costs, &mut rng)?;
    result.seed = Some(seed);
    Ok(result)
}

/// Runs hill climbing from a tour drawn from `rng`.
pub fn hill_climb_with_rng<R: Rng + ?Sized>(
    costs: &CostMatrix,
    rng: &mut R,
) -> Result<HillClimbResult, SearchError> {
    ensure_climbable(costs.size())?;
    let initial = random_tour(costs.size(), rng);
    Ok(climb(costs, initial))
}

/// Runs hill climbing from the given starting tour.
///
/// Fails with [`SearchError::InvalidModel`] if the tour and the matrix
/// disagree on the number of cities.
pub fn hill_climb_from(costs: &CostMatrix, initial: Tour) -> Result<HillClimbResult, SearchError> {
    if initial.len() != costs.size() {
        return Err(SearchError::invalid_model(format!(
            "tour has {} cities but the cost matrix has {}",
            initial.len(),
            costs.size()
        )));
    }
    ensure_climbable(costs.size())?;
    Ok(climb(costs, initial))
}

fn ensure_climbable(city_count: usize) -> Result<(), SearchError> {
    if city_count < 2 {
        return Err(SearchError::DegenerateInput { city_count });
    }
    Ok(())
}

fn climb(costs: &CostMatrix, initial: Tour) -> HillClimbResult {
    let mut evaluator = TourEvaluator::new(costs);
    let neighborhood_size = SwapPairs::total(initial.len());

    let initial_length = evaluator.length(&initial);
    let mut current = initial;
    let mut current_length = initial_length;
    let mut iterations = 0usize;
    let mut evaluations = 0usize;

    debug!(
        "hill climb start: {} cities ({}), initial length {initial_length}",
        current.len(),
        if costs.is_symmetric(1e-10) {
            "symmetric"
        } else {
            "asymmetric"
        }
    );

    while let Some(mv) = best_swap(&mut evaluator, &current) {
        evaluations += neighborhood_size;
        if mv.length >= current_length || mv.length.is_nan() {
            break;
        }
        trace!(
            "move {}: swap ({}, {}) {current_length} -> {}",
            iterations + 1,
            mv.i,
            mv.j,
            mv.length
        );
        current = current.swapped(mv.i, mv.j);
        current_length = mv.length;
        iterations += 1;
    }

    debug!("hill climb done: {iterations} moves, {evaluations} evaluations, length {current_length}");

    HillClimbResult {
        tour: current,
        length: current_length,
        initial_length,
        iterations,
        evaluations,
        seed: None,
    }
}
