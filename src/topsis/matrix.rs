//! Decision matrix and the per-stage TOPSIS transforms.
//!
//! Each stage takes a matrix by reference and returns a fresh one, so the
//! caller's input is never mutated and every intermediate can be inspected.

use serde::{Deserialize, Serialize};

use super::types::Direction;
use crate::error::{McdaError, Result};
use crate::guard::guarded_divide;

/// A dense `n_alternatives × n_criteria` matrix in row-major order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionMatrix {
    rows: Vec<Vec<f64>>,
    n_criteria: usize,
}

impl DecisionMatrix {
    /// Builds a matrix from rows, inferring the criterion count from the
    /// first row.
    ///
    /// Returns `InvalidInput` if rows have differing lengths.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n_criteria = rows.first().map_or(0, Vec::len);
        Self::with_criteria(rows, n_criteria)
    }

    /// Builds a matrix whose rows must all have exactly `n_criteria` entries.
    ///
    /// An empty row set is valid and keeps the declared width.
    pub fn with_criteria(rows: Vec<Vec<f64>>, n_criteria: usize) -> Result<Self> {
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != n_criteria) {
            return Err(McdaError::invalid(format!(
                "row {i} has {} values, expected {n_criteria}",
                row.len()
            )));
        }
        Ok(Self { rows, n_criteria })
    }

    /// Builds a matrix from fixed-width rows. Infallible since every row has
    /// exactly `K` entries.
    pub fn from_arrays<const K: usize, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = [f64; K]>,
    {
        Self {
            rows: rows.into_iter().map(|r| r.to_vec()).collect(),
            n_criteria: K,
        }
    }

    /// An empty matrix with the given width.
    pub fn empty(n_criteria: usize) -> Self {
        Self {
            rows: Vec::new(),
            n_criteria,
        }
    }

    /// Number of rows (alternatives).
    pub fn n_alternatives(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (criteria).
    pub fn n_criteria(&self) -> usize {
        self.n_criteria
    }

    /// Returns `true` when there are no alternatives.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row `i`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.rows[i]
    }

    /// All rows.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Value at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.rows[i][j]
    }

    /// Iterates over column `j`.
    pub fn column(&self, j: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(move |r| r[j])
    }

    /// Returns `true` if every entry is finite.
    pub fn is_finite(&self) -> bool {
        self.rows.iter().flatten().all(|v| v.is_finite())
    }

    /// Euclidean norm of every column: `sqrt(sum_i x_ij^2)`.
    pub fn column_norms(&self) -> Vec<f64> {
        (0..self.n_criteria)
            .map(|j| self.column(j).map(|v| v * v).sum::<f64>().sqrt())
            .collect()
    }

    /// Vector normalization: divides each column by its Euclidean norm.
    ///
    /// A zero-norm column (all zeros) is divided by 1 and stays all zeros.
    pub fn normalized(&self) -> DecisionMatrix {
        let norms = self.column_norms();
        self.map_columns(|j, v| guarded_divide(v, norms[j]))
    }

    /// Multiplies column `j` by `weights[j]`.
    ///
    /// `weights` must have `n_criteria` entries; the engine checks this
    /// before calling.
    pub fn weighted(&self, weights: &[f64]) -> DecisionMatrix {
        debug_assert_eq!(weights.len(), self.n_criteria);
        self.map_columns(|j, v| v * weights[j])
    }

    /// Ideal best and worst vectors for the given directions.
    ///
    /// For a `Max` column the best is the column maximum and the worst is
    /// the column minimum; `Min` columns are reversed. On an empty matrix
    /// both vectors are all zeros.
    pub fn ideal_vectors(&self, directions: &[Direction]) -> IdealVectors {
        debug_assert_eq!(directions.len(), self.n_criteria);
        let mut best = vec![0.0; self.n_criteria];
        let mut worst = vec![0.0; self.n_criteria];
        if self.is_empty() {
            return IdealVectors { best, worst };
        }

        for (j, dir) in directions.iter().enumerate() {
            let hi = self.column(j).fold(f64::NEG_INFINITY, f64::max);
            let lo = self.column(j).fold(f64::INFINITY, f64::min);
            match dir {
                Direction::Max => {
                    best[j] = hi;
                    worst[j] = lo;
                }
                Direction::Min => {
                    best[j] = lo;
                    worst[j] = hi;
                }
            }
        }

        IdealVectors { best, worst }
    }

    fn map_columns<F: Fn(usize, f64) -> f64>(&self, f: F) -> DecisionMatrix {
        let rows = self
            .rows
            .iter()
            .map(|row| row.iter().enumerate().map(|(j, &v)| f(j, v)).collect())
            .collect();
        DecisionMatrix {
            rows,
            n_criteria: self.n_criteria,
        }
    }
}

/// Per-criterion ideal best and worst values of a weighted matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealVectors {
    /// Most preferred value of each column.
    pub best: Vec<f64>,
    /// Least preferred value of each column.
    pub worst: Vec<f64>,
}

/// Euclidean distance between a row and an ideal vector.
pub fn separation(row: &[f64], ideal: &[f64]) -> f64 {
    row.iter()
        .zip(ideal)
        .map(|(v, t)| (v - t) * (v - t))
        .sum::<f64>()
        .sqrt()
}
