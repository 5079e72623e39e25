//! Ranking configuration.
//!
//! [`RankingConfig`] holds the weight and direction of each of the three
//! domain criteria.

use serde::{Deserialize, Serialize};

use super::types::Criterion;
use crate::error::{McdaError, Result};
use crate::topsis::{CriterionSpec, Direction};

/// Weights and directions for the cost/risk/availability criteria.
///
/// # Defaults
///
/// ```
/// use u_mcda::decision::{Criterion, RankingConfig};
///
/// let config = RankingConfig::default();
/// assert_eq!(config.weights(), vec![0.4, 0.2, 0.4]);
/// assert!((config.weight(Criterion::Risk) - 0.2).abs() < 1e-15);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_mcda::decision::{Criterion, RankingConfig};
/// use u_mcda::topsis::Direction;
///
/// let config = RankingConfig::default()
///     .with_weight(Criterion::BaseCost, 0.6)
///     .with_direction(Criterion::Availability, Direction::Max);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingConfig {
    /// One spec per criterion, in [`Criterion::COLUMNS`] order.
    pub criteria: Vec<CriterionSpec>,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self::from_weights([0.4, 0.2, 0.4])
    }
}

impl RankingConfig {
    /// Builds a config with the given weights (column order) and each
    /// criterion's natural direction.
    pub fn from_weights(weights: [f64; 3]) -> Self {
        let criteria = Criterion::COLUMNS
            .iter()
            .zip(weights)
            .map(|(&c, w)| CriterionSpec::new(c.name(), w.max(0.0), c.default_direction()))
            .collect();
        Self { criteria }
    }

    /// Equal weight on every criterion.
    pub fn equal() -> Self {
        Self::from_weights([1.0 / 3.0; 3])
    }

    /// Sets one criterion's weight. Negative weights clamp to 0.
    pub fn with_weight(mut self, criterion: Criterion, weight: f64) -> Self {
        if let Some(spec) = self.spec_mut(criterion) {
            spec.weight = weight.max(0.0);
        }
        self
    }

    /// Sets one criterion's direction.
    pub fn with_direction(mut self, criterion: Criterion, direction: Direction) -> Self {
        if let Some(spec) = self.spec_mut(criterion) {
            spec.direction = direction;
        }
        self
    }

    /// Weight of one criterion (0 if absent).
    pub fn weight(&self, criterion: Criterion) -> f64 {
        self.spec(criterion).map_or(0.0, |s| s.weight)
    }

    /// Weights in column order.
    pub fn weights(&self) -> Vec<f64> {
        self.criteria.iter().map(|c| c.weight).collect()
    }

    /// Directions in column order.
    pub fn directions(&self) -> Vec<Direction> {
        self.criteria.iter().map(|c| c.direction).collect()
    }

    /// Weights rescaled to sum to 1.
    ///
    /// Purely cosmetic: TOPSIS scores do not depend on the weight sum.
    /// All-zero weights are returned unchanged.
    pub fn normalized_weights(&self) -> Vec<f64> {
        let sum: f64 = self.criteria.iter().map(|c| c.weight).sum();
        if sum > 0.0 {
            self.criteria.iter().map(|c| c.weight / sum).collect()
        } else {
            self.weights()
        }
    }

    /// Validates the configuration.
    ///
    /// Requires exactly one spec per domain criterion, in column order, with
    /// finite non-negative weights.
    pub fn validate(&self) -> Result<()> {
        if self.criteria.len() != Criterion::COLUMNS.len() {
            return Err(McdaError::invalid(format!(
                "expected {} criteria, got {}",
                Criterion::COLUMNS.len(),
                self.criteria.len()
            )));
        }
        for (spec, column) in self.criteria.iter().zip(Criterion::COLUMNS) {
            if spec.name != column.name() {
                return Err(McdaError::invalid(format!(
                    "criterion `{}` found where `{}` was expected",
                    spec.name,
                    column.name()
                )));
            }
        }
        validate_weights(&self.weights())
    }

    fn spec(&self, criterion: Criterion) -> Option<&CriterionSpec> {
        self.criteria.iter().find(|s| s.name == criterion.name())
    }

    fn spec_mut(&mut self, criterion: Criterion) -> Option<&mut CriterionSpec> {
        self.criteria.iter_mut().find(|s| s.name == criterion.name())
    }
}

/// Rejects negative or non-finite weights.
pub(crate) fn validate_weights(weights: &[f64]) -> Result<()> {
    if let Some((j, w)) = weights
        .iter()
        .enumerate()
        .find(|(_, w)| !w.is_finite() || **w < 0.0)
    {
        return Err(McdaError::invalid(format!(
            "weight {j} must be finite and non-negative, got {w}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RankingConfig::default();
        assert_eq!(config.criteria.len(), 3);
        assert_eq!(
            config.directions(),
            vec![Direction::Min, Direction::Min, Direction::Max]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = RankingConfig::equal()
            .with_weight(Criterion::Availability, 0.9)
            .with_direction(Criterion::Risk, Direction::Max);
        assert!((config.weight(Criterion::Availability) - 0.9).abs() < 1e-15);
        assert_eq!(config.criteria[1].direction, Direction::Max);
    }

    #[test]
    fn test_negative_weight_clamped() {
        let config = RankingConfig::default().with_weight(Criterion::BaseCost, -1.0);
        assert_eq!(config.weight(Criterion::BaseCost), 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_wrong_count() {
        let mut config = RankingConfig::default();
        config.criteria.pop();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_misordered() {
        let mut config = RankingConfig::default();
        config.criteria.swap(0, 2);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("availability"));
    }

    #[test]
    fn test_validate_rejects_nan_weight() {
        let mut config = RankingConfig::default();
        config.criteria[0].weight = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_normalized_weights() {
        let config = RankingConfig::from_weights([2.0, 1.0, 1.0]);
        let w = config.normalized_weights();
        assert!((w[0] - 0.5).abs() < 1e-15);
        assert!((w.iter().sum::<f64>() - 1.0).abs() < 1e-15);

        let zero = RankingConfig::from_weights([0.0; 3]);
        assert_eq!(zero.normalized_weights(), vec![0.0; 3]);
    }
}
