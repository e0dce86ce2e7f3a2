//! Dense travel-cost matrix.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// A dense n×n travel-cost matrix stored in row-major order.
///
/// `get(i, j)` is the cost of travelling from city `i` to city `j`. The
/// matrix may be asymmetric; the diagonal is only read for a one-city tour.
///
/// Deserialization applies the same checks as [`from_rows`](Self::from_rows):
/// `data` must hold `size * size` non-negative costs.
///
/// # Examples
///
/// ```
/// use u_search::distance::CostMatrix;
///
/// let cm = CostMatrix::from_rows(vec![
///     vec![0.0, 4.0, 5.0],
///     vec![4.0, 0.0, 3.0],
///     vec![5.0, 3.0, 0.0],
/// ])
/// .expect("square, non-negative");
/// assert_eq!(cm.size(), 3);
/// assert_eq!(cm.get(1, 2), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CostMatrixRepr")]
pub struct CostMatrix {
    data: Vec<f64>,
    size: usize,
}

/// Unchecked wire form of [`CostMatrix`].
#[derive(Deserialize)]
struct CostMatrixRepr {
    data: Vec<f64>,
    size: usize,
}

impl TryFrom<CostMatrixRepr> for CostMatrix {
    type Error = SearchError;

    fn try_from(repr: CostMatrixRepr) -> Result<Self, Self::Error> {
        let CostMatrixRepr { data, size } = repr;
        if Some(data.len()) != size.checked_mul(size) {
            return Err(SearchError::invalid_model(format!(
                "{} costs given for a {size}x{size} matrix",
                data.len()
            )));
        }
        check_costs(&data, size)?;
        Ok(Self { data, size })
    }
}

fn check_costs(data: &[f64], size: usize) -> Result<(), SearchError> {
    match data.iter().position(|&c| c.is_nan() || c < 0.0) {
        Some(k) => Err(SearchError::invalid_model(format!(
            "cost[{}][{}] = {} is not a non-negative number",
            k / size,
            k % size,
            data[k]
        ))),
        None => Ok(()),
    }
}

impl CostMatrix {
    /// Creates a cost matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Creates a cost matrix from nested rows.
    ///
    /// Fails with [`SearchError::InvalidModel`] if any row length differs from
    /// the number of rows, or if a cost is negative or NaN.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, SearchError> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(SearchError::invalid_model(format!(
                    "row {i} has {} entries, expected {size}",
                    row.len()
                )));
            }
            data.extend(row);
        }
        check_costs(&data, size)?;
        Ok(Self { data, size })
    }

    /// Creates a cost matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the cost from city `from` to city `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the cost from city `from` to city `to`.
    pub fn set(&mut self, from: usize, to: usize, cost: f64) {
        self.data[from * self.size + to] = cost;
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}
