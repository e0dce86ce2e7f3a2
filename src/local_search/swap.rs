//! Pairwise-swap neighborhood.
//!
//! # Algorithm
//!
//! The neighbors of a tour are all tours obtained by exchanging the cities
//! at two distinct positions `i < j`. For `n` cities there are `n(n-1)/2`
//! of them, enumerated by ascending `i`, then ascending `j`.
//!
//! The best neighbor is the first one, in enumeration order, whose length is
//! strictly smaller than every neighbor before it. Every neighbor is
//! evaluated; ties keep the earlier neighbor so results are reproducible.
//!
//! # Complexity
//!
//! O(n²) neighbors, each priced in O(n): O(n³) per neighborhood scan.

use crate::distance::CostMatrix;
use crate::evaluation::{tour_length, TourEvaluator};
use crate::models::Tour;

/// Lazy iterator over the swap positions `(i, j)` with `i < j < n`.
///
/// Yields pairs in ascending `i`, then ascending `j`. Build a new one with
/// [`SwapPairs::new`] to restart the sequence.
///
/// # Examples
///
/// ```
/// use u_search::local_search::SwapPairs;
///
/// let pairs: Vec<_> = SwapPairs::new(3).collect();
/// assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
/// ```
#[derive(Debug, Clone)]
pub struct SwapPairs {
    n: usize,
    i: usize,
    j: usize,
}

impl SwapPairs {
    /// Creates the pair sequence for a tour of `n` cities.
    pub fn new(n: usize) -> Self {
        Self { n, i: 0, j: 1 }
    }

    /// Total number of pairs, `n(n-1)/2`.
    pub fn total(n: usize) -> usize {
        n * n.saturating_sub(1) / 2
    }
}

impl Iterator for SwapPairs {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.j >= self.n {
            self.i += 1;
            self.j = self.i + 1;
            if self.j >= self.n {
                return None;
            }
        }
        let pair = (self.i, self.j);
        self.j += 1;
        Some(pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.i + 1 >= self.n {
            0
        } else {
            // Rest of row i, plus all later rows.
            let rest_of_row = self.n.saturating_sub(self.j);
            let later = self.n - self.i - 1;
            rest_of_row + later * later.saturating_sub(1) / 2
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SwapPairs {}

/// A swap move together with the length of the tour it produces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwapMove {
    /// First position (`i < j`).
    pub i: usize,
    /// Second position.
    pub j: usize,
    /// Length of the tour after the swap.
    pub length: f64,
}

/// Materializes every swap neighbor of `tour`.
///
/// The tour itself is never included. Each neighbor is a fresh tour.
///
/// # Examples
///
/// ```
/// use u_search::models::Tour;
/// use u_search::local_search::swap_neighbors;
///
/// let neighbors = swap_neighbors(&Tour::identity(4));
/// assert_eq!(neighbors.len(), 6);
/// assert_eq!(neighbors[0].cities(), &[1, 0, 2, 3]);
/// ```
pub fn swap_neighbors(tour: &Tour) -> Vec<Tour> {
    SwapPairs::new(tour.len())
        .map(|(i, j)| tour.swapped(i, j))
        .collect()
}

/// Scans `neighbors` and returns the index and length of the best one.
///
/// Every neighbor is evaluated. The first neighbor reaching the minimum wins
/// (comparison is strict `<`). Returns `None` if `neighbors` is empty.
pub fn best_neighbor(costs: &CostMatrix, neighbors: &[Tour]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, neighbor) in neighbors.iter().enumerate() {
        let length = tour_length(costs, neighbor.cities());
        if best.is_none_or(|(_, best_length)| length < best_length) {
            best = Some((idx, length));
        }
    }
    best
}

/// Finds the best swap move of `tour` without materializing its neighbors.
///
/// Selects the same move as `best_neighbor(costs, &swap_neighbors(tour))`.
/// Returns `None` for tours with fewer than two cities.
pub fn best_swap(evaluator: &mut TourEvaluator<'_>, tour: &Tour) -> Option<SwapMove> {
    let mut best: Option<SwapMove> = None;
    for (i, j) in SwapPairs::new(tour.len()) {
        let length = evaluator.swapped_length(tour, i, j);
        if best.is_none_or(|b| length < b.length) {
            best = Some(SwapMove { i, j, length });
        }
    }
    best
}
