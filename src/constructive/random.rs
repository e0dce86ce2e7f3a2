//! Random tour construction.
//!
//! Builds a starting tour by repeatedly drawing a city uniformly at random
//! from those not yet placed. Every permutation is equally likely.
//!
//! # Complexity
//!
//! O(n²) because each draw removes from the middle of the remaining list.

use rand::Rng;

use crate::models::Tour;

/// Draws a uniformly random tour over `n` cities.
///
/// Consumes exactly `n` values from `rng`, so a seeded generator yields a
/// reproducible tour.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_search::constructive::random_tour;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let tour = random_tour(5, &mut rng);
/// let mut sorted = tour.cities().to_vec();
/// sorted.sort_unstable();
/// assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
/// ```
pub fn random_tour<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Tour {
    let mut remaining: Vec<usize> = (0..n).collect();
    let mut cities = Vec::with_capacity(n);
    while !remaining.is_empty() {
        let pick = rng.random_range(0..remaining.len());
        cities.push(remaining.remove(pick));
    }
    Tour::from_permutation(cities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_random_tour_is_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in 0..12 {
            let tour = random_tour(n, &mut rng);
            assert!(Tour::new(tour.cities().to_vec()).is_ok());
            assert_eq!(tour.len(), n);
        }
    }

    #[test]
    fn test_random_tour_seeded_is_reproducible() {
        let a = random_tour(8, &mut StdRng::seed_from_u64(99));
        let b = random_tour(8, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_tour_covers_all_orders() {
        // 3 cities have 6 orders; 600 draws should hit each of them.
        let mut rng = StdRng::seed_from_u64(1);
        let seen: HashSet<Vec<usize>> = (0..600)
            .map(|_| random_tour(3, &mut rng).into_cities())
            .collect();
        assert_eq!(seen.len(), 6);
    }
}
