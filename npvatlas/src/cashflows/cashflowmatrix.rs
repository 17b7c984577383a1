use serde::{Deserialize, Serialize};

use crate::utils::errors::{AtlasError, Result};

/// # CashflowMatrix
/// Monthly cash flows of every simulation path, stored month-major:
/// the block for month `k` holds paths `0..n_paths` contiguously.
///
/// ## Example
/// ```
/// use npvatlas::prelude::*;
/// let matrix = CashflowMatrix::from_values(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
/// assert_eq!(matrix.get(1, 0).unwrap(), 4.0);
/// assert_eq!(matrix.month(0).unwrap(), &[1.0, 2.0, 3.0]);
/// assert_eq!(matrix.path(2).collect::<Vec<_>>(), vec![3.0, 6.0]);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CashflowMatrix {
    n_months: usize,
    n_paths: usize,
    values: Vec<f64>,
}

impl CashflowMatrix {
    pub fn from_values(n_months: usize, n_paths: usize, values: Vec<f64>) -> Result<Self> {
        if values.len() != n_months * n_paths {
            return Err(AtlasError::InvalidValueErr(format!(
                "{} values do not fill a {} x {} matrix",
                values.len(),
                n_months,
                n_paths
            )));
        }
        Ok(CashflowMatrix {
            n_months,
            n_paths,
            values,
        })
    }

    /// Assembles a matrix from one `n_paths` block per month.
    pub fn from_month_blocks(n_paths: usize, blocks: Vec<Vec<f64>>) -> Result<Self> {
        let n_months = blocks.len();
        let mut values = Vec::with_capacity(n_months * n_paths);
        for (month, block) in blocks.into_iter().enumerate() {
            if block.len() != n_paths {
                return Err(AtlasError::InvalidValueErr(format!(
                    "month {} has {} paths, expected {}",
                    month,
                    block.len(),
                    n_paths
                )));
            }
            values.extend(block);
        }
        CashflowMatrix::from_values(n_months, n_paths, values)
    }

    pub fn n_months(&self) -> usize {
        self.n_months
    }

    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, month: usize, path: usize) -> Result<f64> {
        if month >= self.n_months || path >= self.n_paths {
            return Err(AtlasError::NotFoundErr(format!(
                "cash flow at month {} path {}",
                month, path
            )));
        }
        Ok(self.values[month * self.n_paths + path])
    }

    pub fn month(&self, month: usize) -> Result<&[f64]> {
        if month >= self.n_months {
            return Err(AtlasError::NotFoundErr(format!("month {}", month)));
        }
        let start = month * self.n_paths;
        Ok(&self.values[start..start + self.n_paths])
    }

    /// Cash flows of one path in month order.
    pub fn path(&self, path: usize) -> impl Iterator<Item = f64> + '_ {
        self.values
            .iter()
            .skip(path)
            .step_by(self.n_paths.max(1))
            .take(if path < self.n_paths { self.n_months } else { 0 })
            .copied()
    }

    /// Element-wise sum of two matrices of the same shape.
    pub fn try_add(&self, other: &CashflowMatrix) -> Result<CashflowMatrix> {
        if self.n_months != other.n_months || self.n_paths != other.n_paths {
            return Err(AtlasError::InvalidValueErr(format!(
                "cannot add a {} x {} matrix to a {} x {} matrix",
                other.n_months, other.n_paths, self.n_months, self.n_paths
            )));
        }
        let values = self
            .values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| a + b)
            .collect();
        CashflowMatrix::from_values(self.n_months, self.n_paths, values)
    }
}
