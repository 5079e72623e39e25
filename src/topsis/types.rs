//! Criterion direction and per-criterion configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{McdaError, Result};

/// Whether higher or lower values of a criterion are preferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Higher is better (e.g. availability).
    Max,
    /// Lower is better (e.g. cost, risk).
    Min,
}

impl Direction {
    /// Returns the wire string (`"max"` or `"min"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Max => "max",
            Direction::Min => "min",
        }
    }

    /// Parses a list of wire strings, failing on the first unknown entry.
    ///
    /// ```
    /// use u_mcda::topsis::Direction;
    ///
    /// let dirs = Direction::parse_all(&["min", "MAX"]).unwrap();
    /// assert_eq!(dirs, vec![Direction::Min, Direction::Max]);
    /// assert!(Direction::parse_all(&["up"]).is_err());
    /// ```
    pub fn parse_all<S: AsRef<str>>(types: &[S]) -> Result<Vec<Direction>> {
        types.iter().map(|s| s.as_ref().parse()).collect()
    }
}

impl FromStr for Direction {
    type Err = McdaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "max" => Ok(Direction::Max),
            "min" => Ok(Direction::Min),
            other => Err(McdaError::invalid(format!(
                "unknown criterion direction `{other}` (expected `max` or `min`)"
            ))),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One criterion column: its label, weight, and preferred direction.
///
/// Weights are not required to sum to 1. Scaling every weight by the same
/// factor scales every separation by that factor and leaves the closeness
/// coefficients unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionSpec {
    /// Label used in reports (e.g. `critical_vectors`).
    pub name: String,
    /// Non-negative importance weight.
    pub weight: f64,
    /// Optimization direction.
    pub direction: Direction,
}

impl CriterionSpec {
    /// Creates a criterion spec.
    pub fn new(name: impl Into<String>, weight: f64, direction: Direction) -> Self {
        Self {
            name: name.into(),
            weight,
            direction,
        }
    }

    /// A criterion where higher values are preferred.
    pub fn max(name: impl Into<String>, weight: f64) -> Self {
        Self::new(name, weight, Direction::Max)
    }

    /// A criterion where lower values are preferred.
    pub fn min(name: impl Into<String>, weight: f64) -> Self {
        Self::new(name, weight, Direction::Min)
    }
}
