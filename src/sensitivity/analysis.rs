//! Weight-perturbation stability analysis.
//!
//! [`SensitivityAnalyzer::analyze`] perturbs one weight at a time by
//! `±delta` and reports whether the top-ranked alternative survives.
//! [`SensitivityAnalyzer::sample`] perturbs all weights at once with random
//! factors and reports how often each alternative wins.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::SensitivityConfig;
use crate::decision::{decision_matrix, validate_weights, Alternative, RankingConfig};
use crate::error::{McdaError, Result};
use crate::topsis::{CriterionSpec, DecisionMatrix, Direction, TopsisEngine};

/// Outcome of re-ranking with one weight perturbed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Perturbation {
    /// Index of the perturbed criterion.
    pub criterion: usize,

    /// Multiplier applied to that criterion's weight (`1 ± delta`).
    pub factor: f64,

    /// Top-ranked alternative after the perturbation.
    pub winner: Option<usize>,

    /// Whether the winner differs from the baseline winner.
    pub winner_changed: bool,

    /// Absolute change of the baseline winner's score.
    pub score_shift: f64,
}

/// One-at-a-time stability report.
///
/// Field names follow the remote service's sensitivity report
/// (`stability_index`, `is_robust`, `critical_vectors`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StabilityReport {
    /// Top-ranked alternative under the unperturbed weights.
    pub baseline_winner: Option<usize>,

    /// Fraction of perturbations that kept the baseline winner.
    /// `1.0` when nothing was tested.
    pub stability_index: f64,

    /// `true` iff no perturbation changed the winner.
    pub is_robust: bool,

    /// Names of criteria whose perturbation changed the winner, in
    /// criterion order.
    pub critical_vectors: Vec<String>,

    /// Every perturbation tested, criterion-major, `+delta` before `-delta`.
    pub perturbations: Vec<Perturbation>,
}

/// Random-perturbation sensitivity report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampledSensitivity {
    /// Number of weight vectors evaluated.
    pub samples: usize,

    /// Top-ranked alternative under the unperturbed weights.
    pub baseline_winner: Option<usize>,

    /// Share of samples in which the baseline winner stayed on top.
    pub winner_retention: f64,

    /// Share of samples won by each alternative (input order).
    pub win_frequency: Vec<f64>,

    /// Mean score of each alternative across samples (input order).
    pub mean_scores: Vec<f64>,
}

/// Runs sensitivity analyses over a decision matrix.
///
/// # Usage
///
/// ```
/// use u_mcda::decision::{Alternative, RankingConfig};
/// use u_mcda::sensitivity::{SensitivityAnalyzer, SensitivityConfig};
///
/// let alternatives = vec![
///     Alternative::new("A", 8000.0, 0.1, 0.99),
///     Alternative::new("B", 12000.0, 0.05, 0.999),
/// ];
/// let report = SensitivityAnalyzer::analyze_alternatives(
///     &alternatives,
///     &RankingConfig::default(),
///     &SensitivityConfig::default(),
/// ).unwrap();
///
/// assert!(report.is_robust);
/// assert!(report.critical_vectors.is_empty());
/// ```
pub struct SensitivityAnalyzer;

impl SensitivityAnalyzer {
    /// One-at-a-time analysis: each weight is scaled by `1 + delta` and then
    /// by `1 - delta`, the others held fixed, and the matrix re-ranked.
    pub fn analyze(
        matrix: &DecisionMatrix,
        criteria: &[CriterionSpec],
        config: &SensitivityConfig,
    ) -> Result<StabilityReport> {
        let (weights, directions) = prepare(matrix, criteria, config)?;
        let baseline = TopsisEngine::evaluate(matrix, &weights, &directions)?;
        let baseline_winner = baseline.best();

        let jobs: Vec<(usize, f64)> = (0..criteria.len())
            .flat_map(|j| [(j, 1.0 + config.delta), (j, 1.0 - config.delta)])
            .collect();

        let perturbations = if matrix.is_empty() {
            Vec::new()
        } else {
            map_jobs(&jobs, config.parallel, |&(j, factor)| {
                let mut w = weights.clone();
                w[j] *= factor;
                let outcome = TopsisEngine::evaluate(matrix, &w, &directions)?;
                let winner = outcome.best();
                let score_shift = baseline_winner
                    .map_or(0.0, |b| (outcome.scores[b] - baseline.scores[b]).abs());
                Ok(Perturbation {
                    criterion: j,
                    factor,
                    winner,
                    winner_changed: winner != baseline_winner,
                    score_shift,
                })
            })?
        };

        let changed = perturbations.iter().filter(|p| p.winner_changed).count();
        let stability_index = if perturbations.is_empty() {
            1.0
        } else {
            (perturbations.len() - changed) as f64 / perturbations.len() as f64
        };

        let critical_vectors: Vec<String> = criteria
            .iter()
            .enumerate()
            .filter(|(j, _)| {
                perturbations
                    .iter()
                    .any(|p| p.criterion == *j && p.winner_changed)
            })
            .map(|(_, c)| c.name.clone())
            .collect();

        debug!(
            tested = perturbations.len(),
            changed,
            stability_index,
            "one-at-a-time sensitivity complete"
        );

        Ok(StabilityReport {
            baseline_winner,
            stability_index,
            is_robust: changed == 0,
            critical_vectors,
            perturbations,
        })
    }

    /// [`analyze`](Self::analyze) over domain alternatives.
    pub fn analyze_alternatives(
        alternatives: &[Alternative],
        ranking: &RankingConfig,
        config: &SensitivityConfig,
    ) -> Result<StabilityReport> {
        ranking.validate()?;
        Self::analyze(&decision_matrix(alternatives), &ranking.criteria, config)
    }

    /// Random analysis: draws `samples` weight vectors where every weight is
    /// independently scaled by a uniform factor in `[1 - delta, 1 + delta]`,
    /// re-ranks each, and counts winners.
    pub fn sample(
        matrix: &DecisionMatrix,
        criteria: &[CriterionSpec],
        config: &SensitivityConfig,
    ) -> Result<SampledSensitivity> {
        let (weights, directions) = prepare(matrix, criteria, config)?;
        let n = matrix.n_alternatives();
        let baseline_winner = TopsisEngine::evaluate(matrix, &weights, &directions)?.best();

        if n == 0 {
            return Ok(SampledSensitivity {
                samples: 0,
                baseline_winner,
                winner_retention: 1.0,
                win_frequency: Vec::new(),
                mean_scores: Vec::new(),
            });
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        // Draw sequentially so a seed reproduces the same vectors regardless
        // of how they are evaluated.
        let (lo, hi) = (1.0 - config.delta, 1.0 + config.delta);
        let draws: Vec<Vec<f64>> = (0..config.samples)
            .map(|_| {
                weights
                    .iter()
                    .map(|w| w * rng.random_range(lo..=hi))
                    .collect()
            })
            .collect();

        let results = map_jobs(&draws, config.parallel, |w| {
            TopsisEngine::evaluate(matrix, w, &directions).map(|o| (o.best(), o.scores))
        })?;

        let mut wins = vec![0usize; n];
        let mut score_sums = vec![0.0f64; n];
        for (winner, scores) in &results {
            if let Some(w) = winner {
                wins[*w] += 1;
            }
            for (sum, s) in score_sums.iter_mut().zip(scores) {
                *sum += s;
            }
        }

        let total = results.len() as f64;
        let retained = baseline_winner.map_or(0, |b| wins[b]);

        debug!(
            samples = results.len(),
            retained,
            "sampled sensitivity complete"
        );

        Ok(SampledSensitivity {
            samples: results.len(),
            baseline_winner,
            winner_retention: retained as f64 / total,
            win_frequency: wins.iter().map(|&c| c as f64 / total).collect(),
            mean_scores: score_sums.iter().map(|s| s / total).collect(),
        })
    }
}

fn prepare(
    matrix: &DecisionMatrix,
    criteria: &[CriterionSpec],
    config: &SensitivityConfig,
) -> Result<(Vec<f64>, Vec<Direction>)> {
    config.validate()?;
    if criteria.len() != matrix.n_criteria() {
        return Err(McdaError::invalid(format!(
            "{} criteria given for a matrix with {} columns",
            criteria.len(),
            matrix.n_criteria()
        )));
    }
    let weights: Vec<f64> = criteria.iter().map(|c| c.weight).collect();
    validate_weights(&weights)?;
    let directions = criteria.iter().map(|c| c.direction).collect();
    Ok((weights, directions))
}

#[cfg(feature = "parallel")]
fn map_jobs<J, R, F>(jobs: &[J], parallel: bool, f: F) -> Result<Vec<R>>
where
    J: Sync,
    R: Send,
    F: Fn(&J) -> Result<R> + Sync + Send,
{
    use rayon::prelude::*;

    if parallel {
        jobs.par_iter().map(f).collect()
    } else {
        jobs.iter().map(f).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn map_jobs<J, R, F>(jobs: &[J], _parallel: bool, f: F) -> Result<Vec<R>>
where
    F: Fn(&J) -> Result<R>,
{
    jobs.iter().map(f).collect()
}
