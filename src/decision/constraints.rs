//! Hard constraints applied before ranking.

use serde::{Deserialize, Serialize};

use super::types::Alternative;

/// Budget and availability floor from a decision specification.
///
/// Alternatives outside the limits are screened out before ranking rather
/// than penalized inside TOPSIS.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Inclusive upper bound on `base_cost`.
    pub max_cost: f64,
    /// Inclusive lower bound on `availability`.
    pub min_availability: f64,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            max_cost: f64::INFINITY,
            min_availability: 0.0,
        }
    }
}

impl Constraints {
    pub fn new(max_cost: f64, min_availability: f64) -> Self {
        Self {
            max_cost,
            min_availability,
        }
    }

    /// Returns `true` if the alternative satisfies both limits.
    pub fn admits(&self, alternative: &Alternative) -> bool {
        let p = &alternative.parameters;
        p.base_cost <= self.max_cost && p.availability >= self.min_availability
    }

    /// Clones the admitted alternatives, preserving order.
    pub fn filter(&self, alternatives: &[Alternative]) -> Vec<Alternative> {
        alternatives
            .iter()
            .filter(|a| self.admits(a))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<Alternative> {
        vec![
            Alternative::new("cheap-flaky", 5_000.0, 0.3, 0.90),
            Alternative::new("mid", 9_000.0, 0.1, 0.99),
            Alternative::new("premium", 15_000.0, 0.02, 0.9999),
        ]
    }

    #[test]
    fn test_default_admits_everything() {
        let c = Constraints::default();
        assert_eq!(c.filter(&options()).len(), 3);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let c = Constraints::new(9_000.0, 0.99);
        let kept = c.filter(&options());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "mid");
    }

    #[test]
    fn test_order_preserved() {
        let c = Constraints::new(20_000.0, 0.95);
        let names: Vec<String> = c.filter(&options()).into_iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["mid", "premium"]);
    }

    #[test]
    fn test_nan_never_admitted() {
        let c = Constraints::default();
        assert!(!c.admits(&Alternative::new("nan", f64::NAN, 0.1, 0.9)));
    }
}
