//! TOPSIS pipeline execution.
//!
//! [`TopsisEngine`] runs the full pipeline:
//! normalize → weight → ideal vectors → separations → closeness → sort.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::matrix::{separation, DecisionMatrix, IdealVectors};
use super::types::Direction;
use crate::error::{McdaError, Result};
use crate::guard::guarded_divide;

/// Distances of one alternative to the two ideal vectors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Separation {
    /// Distance to the ideal best vector.
    pub best: f64,
    /// Distance to the ideal worst vector.
    pub worst: f64,
}

impl Separation {
    /// Closeness coefficient `worst / (best + worst)`.
    ///
    /// When both distances are zero the denominator is replaced by 1, so the
    /// coefficient is `0.0`.
    pub fn closeness(self) -> f64 {
        guarded_divide(self.worst, self.best + self.worst)
    }
}

/// Every intermediate of one TOPSIS evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopsisOutcome {
    /// Weighted, normalized matrix. Weights are applied after scaling by
    /// their maximum.
    pub weighted: DecisionMatrix,

    /// Ideal best/worst vectors of `weighted`.
    pub ideal: IdealVectors,

    /// Separation measures, one per alternative (input order).
    pub separations: Vec<Separation>,

    /// Closeness coefficients, one per alternative (input order).
    pub scores: Vec<f64>,

    /// Alternative indices sorted by score descending. Ties keep input order.
    pub order: Vec<usize>,
}

impl TopsisOutcome {
    fn empty(n_criteria: usize) -> Self {
        Self {
            weighted: DecisionMatrix::empty(n_criteria),
            ideal: IdealVectors {
                best: vec![0.0; n_criteria],
                worst: vec![0.0; n_criteria],
            },
            separations: Vec::new(),
            scores: Vec::new(),
            order: Vec::new(),
        }
    }

    /// Index of the top-ranked alternative, or `None` for empty input.
    pub fn best(&self) -> Option<usize> {
        self.order.first().copied()
    }
}

/// Executes TOPSIS on a decision matrix.
///
/// # Usage
///
/// ```
/// use u_mcda::topsis::{DecisionMatrix, Direction, TopsisEngine};
///
/// let matrix = DecisionMatrix::from_rows(vec![
///     vec![250.0, 16.0],
///     vec![200.0, 16.0],
///     vec![300.0, 32.0],
/// ]).unwrap();
///
/// let outcome = TopsisEngine::evaluate(
///     &matrix,
///     &[0.5, 0.5],
///     &[Direction::Min, Direction::Max],
/// ).unwrap();
///
/// assert_eq!(outcome.scores.len(), 3);
/// assert!(outcome.scores.iter().all(|s| (0.0..=1.0).contains(s)));
/// ```
pub struct TopsisEngine;

impl TopsisEngine {
    /// Runs the pipeline and returns every intermediate.
    ///
    /// An empty matrix short-circuits to an empty outcome. Otherwise
    /// `weights` and `directions` must each have one entry per criterion,
    /// checked before any arithmetic.
    pub fn evaluate(
        matrix: &DecisionMatrix,
        weights: &[f64],
        directions: &[Direction],
    ) -> Result<TopsisOutcome> {
        if matrix.is_empty() {
            return Ok(TopsisOutcome::empty(matrix.n_criteria()));
        }
        check_lengths(matrix.n_criteria(), weights, directions)?;

        let weighted = matrix.normalized().weighted(&unit_scaled(weights));
        let ideal = weighted.ideal_vectors(directions);

        let separations: Vec<Separation> = weighted
            .rows()
            .iter()
            .map(|row| Separation {
                best: separation(row, &ideal.best),
                worst: separation(row, &ideal.worst),
            })
            .collect();

        let scores: Vec<f64> = separations.iter().map(|s| s.closeness()).collect();
        let order = rank_order(&scores);

        debug!(
            alternatives = matrix.n_alternatives(),
            criteria = matrix.n_criteria(),
            best = order.first().copied(),
            "topsis evaluated"
        );

        Ok(TopsisOutcome {
            weighted,
            ideal,
            separations,
            scores,
            order,
        })
    }

    /// Returns only the closeness coefficients, in input order.
    pub fn closeness(
        matrix: &DecisionMatrix,
        weights: &[f64],
        directions: &[Direction],
    ) -> Result<Vec<f64>> {
        Self::evaluate(matrix, weights, directions).map(|o| o.scores)
    }
}

/// Shorthand for [`TopsisEngine::closeness`].
pub fn closeness(
    matrix: &DecisionMatrix,
    weights: &[f64],
    directions: &[Direction],
) -> Result<Vec<f64>> {
    TopsisEngine::closeness(matrix, weights, directions)
}

/// Indices sorted by score descending.
///
/// The sort is stable: equal scores keep their input order. Incomparable
/// values (`NaN`) compare as equal.
pub fn rank_order(scores: &[f64]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..scores.len()).collect();
    indices.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    indices
}

/// Divides every weight by the largest one.
///
/// Closeness is invariant under a common weight factor. The scaled weights
/// lie in `[0, 1]`, so separation squares stay finite for finite input. An
/// all-zero vector is left unchanged.
fn unit_scaled(weights: &[f64]) -> Vec<f64> {
    let max = weights.iter().copied().fold(0.0, f64::max);
    weights.iter().map(|&w| guarded_divide(w, max)).collect()
}

pub(crate) fn check_lengths(
    n_criteria: usize,
    weights: &[f64],
    directions: &[Direction],
) -> Result<()> {
    if weights.len() != n_criteria {
        return Err(McdaError::invalid(format!(
            "weights has {} entries, expected {n_criteria}",
            weights.len()
        )));
    }
    if directions.len() != n_criteria {
        return Err(McdaError::invalid(format!(
            "directions has {} entries, expected {n_criteria}",
            directions.len()
        )));
    }
    Ok(())
}
