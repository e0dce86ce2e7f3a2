//! Tour type.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// A cyclic visiting order: a permutation of the city indices `0..n`.
///
/// The closing leg from the last city back to the first is implied.
/// Operations that change the order return a new tour.
///
/// # Examples
///
/// ```
/// use u_search::models::Tour;
///
/// let tour = Tour::new(vec![2, 0, 1]).expect("permutation");
/// assert_eq!(tour.len(), 3);
/// assert_eq!(tour.swapped(0, 2).cities(), &[1, 0, 2]);
/// assert!(Tour::new(vec![0, 0, 1]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Tour {
    cities: Vec<usize>,
}

impl Tour {
    /// Creates a tour, checking that `cities` is a permutation of `0..cities.len()`.
    pub fn new(cities: Vec<usize>) -> Result<Self, SearchError> {
        let n = cities.len();
        let mut seen = vec![false; n];
        for &city in &cities {
            if city >= n {
                return Err(SearchError::invalid_tour(format!(
                    "city {city} out of range for {n} cities"
                )));
            }
            if seen[city] {
                return Err(SearchError::invalid_tour(format!("city {city} repeated")));
            }
            seen[city] = true;
        }
        Ok(Self { cities })
    }

    /// Wraps a sequence already known to be a permutation.
    pub(crate) fn from_permutation(cities: Vec<usize>) -> Self {
        debug_assert!(Self::new(cities.clone()).is_ok());
        Self { cities }
    }

    /// The identity tour `0, 1, ..., n-1`.
    pub fn identity(n: usize) -> Self {
        Self {
            cities: (0..n).collect(),
        }
    }

    /// Returns the cities in visit order.
    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns `true` if the tour visits no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Returns a new tour with the cities at positions `i` and `j` exchanged.
    ///
    /// # Panics
    ///
    /// Panics if either position is out of bounds.
    pub fn swapped(&self, i: usize, j: usize) -> Self {
        let mut cities = self.cities.clone();
        cities.swap(i, j);
        Self { cities }
    }

    /// Returns the tour rotated left by `k` positions.
    ///
    /// A rotation describes the same cycle, so it has the same length.
    pub fn rotated(&self, k: usize) -> Self {
        let mut cities = self.cities.clone();
        if !cities.is_empty() {
            let k = k % cities.len();
            cities.rotate_left(k);
        }
        Self { cities }
    }

    /// Consumes the tour, returning the city sequence.
    pub fn into_cities(self) -> Vec<usize> {
        self.cities
    }
}

impl TryFrom<Vec<usize>> for Tour {
    type Error = SearchError;

    fn try_from(cities: Vec<usize>) -> Result<Self, Self::Error> {
        Self::new(cities)
    }
}

impl From<Tour> for Vec<usize> {
    fn from(tour: Tour) -> Self {
        tour.cities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let t = Tour::new(vec![3, 1, 0, 2]).expect("valid");
        assert_eq!(t.cities(), &[3, 1, 0, 2]);
        assert_eq!(t.len(), 4);
        assert!(!t.is_empty());
    }

    #[test]
    fn test_new_out_of_range() {
        let err = Tour::new(vec![0, 3, 1]).unwrap_err();
        assert!(matches!(err, SearchError::InvalidTour { .. }));
    }

    #[test]
    fn test_new_repeated() {
        assert!(Tour::new(vec![1, 1]).is_err());
    }

    #[test]
    fn test_empty_tour() {
        let t = Tour::new(Vec::new()).expect("empty permutation");
        assert!(t.is_empty());
        assert!(t.rotated(3).is_empty());
    }

    #[test]
    fn test_swapped_leaves_original() {
        let t = Tour::identity(4);
        let s = t.swapped(1, 3);
        assert_eq!(t.cities(), &[0, 1, 2, 3]);
        assert_eq!(s.cities(), &[0, 3, 2, 1]);
    }

    #[test]
    fn test_rotated() {
        let t = Tour::identity(4);
        assert_eq!(t.rotated(1).cities(), &[1, 2, 3, 0]);
        assert_eq!(t.rotated(6).cities(), &[2, 3, 0, 1]);
    }

    #[test]
    fn test_deserialize_rejects_non_permutation() {
        let ok: Tour = serde_json::from_str("[1, 0, 2]").expect("permutation");
        assert_eq!(ok.into_cities(), vec![1, 0, 2]);
        assert!(serde_json::from_str::<Tour>("[1, 1, 2]").is_err());
    }
}
