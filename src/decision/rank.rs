//! Ranking alternatives with TOPSIS.

use tracing::debug;

use super::config::{validate_weights, RankingConfig};
use super::types::{Alternative, Criterion, RankedAlternative};
use crate::error::{McdaError, Result};
use crate::topsis::{check_lengths, DecisionMatrix, Direction, TopsisEngine};

/// Builds the decision matrix in [`Criterion::COLUMNS`] order.
pub fn decision_matrix(alternatives: &[Alternative]) -> DecisionMatrix {
    DecisionMatrix::from_arrays(alternatives.iter().map(|a| a.parameters.to_array()))
}

/// Ranks alternatives by TOPSIS closeness, best first.
///
/// `weights` and `directions` are in [`Criterion::COLUMNS`] order
/// (`base_cost`, `risk`, `availability`). Empty input returns an empty
/// vector. Otherwise both slices must have exactly three entries, or
/// `InvalidInput` is returned before any computation.
///
/// Equal scores keep their input order. The input is not modified.
///
/// # Example
///
/// ```
/// use u_mcda::decision::{rank, Alternative};
/// use u_mcda::topsis::Direction::{Max, Min};
///
/// let alternatives = vec![
///     Alternative::new("A", 8000.0, 0.1, 0.99),
///     Alternative::new("B", 12000.0, 0.05, 0.999),
/// ];
/// let ranked = rank(&alternatives, &[0.4, 0.2, 0.4], &[Min, Min, Max]).unwrap();
/// assert_eq!(ranked[0].name(), "A");
/// ```
pub fn rank(
    alternatives: &[Alternative],
    weights: &[f64],
    directions: &[Direction],
) -> Result<Vec<RankedAlternative>> {
    if alternatives.is_empty() {
        return Ok(Vec::new());
    }

    let outcome = TopsisEngine::evaluate(&decision_matrix(alternatives), weights, directions)?;

    Ok(outcome
        .order
        .iter()
        .map(|&i| RankedAlternative {
            alternative: alternatives[i].clone(),
            score: outcome.scores[i],
        })
        .collect())
}

/// [`rank`] with the boundary checks the worker applies before computing.
///
/// In addition to the length checks, rejects non-finite parameter values
/// and negative or non-finite weights.
pub fn rank_checked(
    alternatives: &[Alternative],
    weights: &[f64],
    directions: &[Direction],
) -> Result<Vec<RankedAlternative>> {
    if alternatives.is_empty() {
        return Ok(Vec::new());
    }
    check_lengths(Criterion::COLUMNS.len(), weights, directions)?;
    validate_weights(weights)?;
    if let Some(bad) = alternatives.iter().find(|a| !a.parameters.is_finite()) {
        return Err(McdaError::invalid(format!(
            "alternative `{}` has a non-finite parameter",
            bad.name
        )));
    }

    debug!(alternatives = alternatives.len(), "ranking validated input");
    rank(alternatives, weights, directions)
}

/// Ranks with a validated [`RankingConfig`].
pub fn rank_with(
    alternatives: &[Alternative],
    config: &RankingConfig,
) -> Result<Vec<RankedAlternative>> {
    config.validate()?;
    rank_checked(alternatives, &config.weights(), &config.directions())
}
