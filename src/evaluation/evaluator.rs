//! Cyclic tour-length evaluation.

use crate::distance::CostMatrix;
use crate::models::Tour;

/// Computes the closed-tour cost of visiting `cities` in order.
///
/// Sums `cost[cities[i - 1]][cities[i]]` for every position `i`, where
/// position `-1` wraps to the last city. The result therefore has exactly
/// `cities.len()` terms, one of which closes the cycle. An empty sequence
/// costs `0`.
///
/// Indices are not validated; callers pass permutations of `0..cm.size()`.
///
/// # Examples
///
/// ```
/// use u_search::distance::CostMatrix;
/// use u_search::evaluation::tour_length;
///
/// let cm = CostMatrix::from_rows(vec![
///     vec![0.0, 1.0, 9.0],
///     vec![9.0, 0.0, 2.0],
///     vec![4.0, 9.0, 0.0],
/// ])
/// .expect("valid");
/// // 0→1 (1) + 1→2 (2) + 2→0 (4)
/// assert_eq!(tour_length(&cm, &[0, 1, 2]), 7.0);
/// ```
pub fn tour_length(cm: &CostMatrix, cities: &[usize]) -> f64 {
    let Some(&last) = cities.last() else {
        return 0.0;
    };
    let mut length = 0.0;
    let mut prev = last;
    for &city in cities {
        length += cm.get(prev, city);
        prev = city;
    }
    length
}

/// Evaluates tours against a fixed cost matrix.
///
/// Besides plain evaluation it can price a swap move without allocating a
/// new tour, by applying the swap to a scratch buffer and recomputing the
/// full cycle.
pub struct TourEvaluator<'a> {
    costs: &'a CostMatrix,
    scratch: Vec<usize>,
}

impl<'a> TourEvaluator<'a> {
    /// Creates a new evaluator over the given matrix.
    pub fn new(costs: &'a CostMatrix) -> Self {
        Self {
            costs,
            scratch: Vec::with_capacity(costs.size()),
        }
    }

    /// The matrix this evaluator reads.
    pub fn costs(&self) -> &'a CostMatrix {
        self.costs
    }

    /// Length of the closed tour.
    pub fn length(&self, tour: &Tour) -> f64 {
        tour_length(self.costs, tour.cities())
    }

    /// Length of `tour` with positions `i` and `j` exchanged.
    ///
    /// Equals `self.length(&tour.swapped(i, j))` bit for bit.
    pub fn swapped_length(&mut self, tour: &Tour, i: usize, j: usize) -> f64 {
        self.scratch.clear();
        self.scratch.extend_from_slice(tour.cities());
        self.scratch.swap(i, j);
        tour_length(self.costs, &self.scratch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_cities() -> CostMatrix {
        CostMatrix::from_rows(vec![
            vec![0.0, 400.0, 500.0, 300.0],
            vec![400.0, 0.0, 300.0, 500.0],
            vec![500.0, 300.0, 0.0, 400.0],
            vec![300.0, 500.0, 400.0, 0.0],
        ])
        .expect("valid")
    }

    #[test]
    fn test_tour_length_includes_wraparound() {
        let cm = four_cities();
        // 0→1 400 + 1→2 300 + 2→3 400 + 3→0 300
        assert!((tour_length(&cm, &[0, 1, 2, 3]) - 1400.0).abs() < 1e-10);
        // 0→2 500 + 2→1 300 + 1→3 500 + 3→0 300
        assert!((tour_length(&cm, &[0, 2, 1, 3]) - 1600.0).abs() < 1e-10);
    }

    #[test]
    fn test_tour_length_asymmetric_direction() {
        let mut cm = CostMatrix::new(2);
        cm.set(0, 1, 10.0);
        cm.set(1, 0, 15.0);
        assert_eq!(tour_length(&cm, &[0, 1]), 25.0);
        assert_eq!(tour_length(&cm, &[1, 0]), 25.0);
    }

    #[test]
    fn test_tour_length_degenerate() {
        let mut cm = CostMatrix::new(1);
        cm.set(0, 0, 7.0);
        assert_eq!(tour_length(&cm, &[]), 0.0);
        // Single city: the only term is the self-loop.
        assert_eq!(tour_length(&cm, &[0]), 7.0);
    }

    #[test]
    fn test_counts_exactly_n_terms() {
        // Every off-diagonal cost is 1, so the length equals the number of terms.
        let n = 6;
        let mut cm = CostMatrix::new(n);
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    cm.set(i, j, 1.0);
                }
            }
        }
        assert_eq!(tour_length(&cm, &[5, 3, 1, 0, 2, 4]), n as f64);
    }

    #[test]
    fn test_swapped_length_matches_swapped_tour() {
        let cm = four_cities();
        let mut eval = TourEvaluator::new(&cm);
        let tour = Tour::new(vec![0, 2, 1, 3]).expect("valid");
        for i in 0..4 {
            for j in (i + 1)..4 {
                assert_eq!(eval.swapped_length(&tour, i, j), eval.length(&tour.swapped(i, j)));
            }
        }
    }
}
