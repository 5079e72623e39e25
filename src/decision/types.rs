//! Domain entities: alternatives, their criteria columns, and ranked output.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::topsis::Direction;

/// The three measured parameters of an alternative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    pub base_cost: f64,
    pub risk: f64,
    pub availability: f64,
}

impl Parameters {
    pub fn new(base_cost: f64, risk: f64, availability: f64) -> Self {
        Self {
            base_cost,
            risk,
            availability,
        }
    }

    /// Value of one criterion column.
    pub fn value(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::BaseCost => self.base_cost,
            Criterion::Risk => self.risk,
            Criterion::Availability => self.availability,
        }
    }

    /// Values in [`Criterion::COLUMNS`] order.
    pub fn to_array(&self) -> [f64; 3] {
        Criterion::COLUMNS.map(|c| self.value(c))
    }

    /// Returns `true` if all three values are finite.
    pub fn is_finite(&self) -> bool {
        self.base_cost.is_finite() && self.risk.is_finite() && self.availability.is_finite()
    }
}

/// A decision alternative.
///
/// Names are labels only; duplicates are ranked as distinct rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub name: String,
    pub parameters: Parameters,
}

impl Alternative {
    pub fn new(name: impl Into<String>, base_cost: f64, risk: f64, availability: f64) -> Self {
        Self {
            name: name.into(),
            parameters: Parameters::new(base_cost, risk, availability),
        }
    }
}

/// A criterion column of the decision domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    BaseCost,
    Risk,
    Availability,
}

impl Criterion {
    /// Column order of the decision matrix built by [`rank`](super::rank).
    pub const COLUMNS: [Criterion; 3] = [
        Criterion::BaseCost,
        Criterion::Risk,
        Criterion::Availability,
    ];

    /// Column order of worker and service payloads: cost, availability, risk.
    pub const WIRE_COLUMNS: [Criterion; 3] = [
        Criterion::BaseCost,
        Criterion::Availability,
        Criterion::Risk,
    ];

    /// Position in [`COLUMNS`](Self::COLUMNS).
    pub fn column_index(self) -> usize {
        match self {
            Criterion::BaseCost => 0,
            Criterion::Risk => 1,
            Criterion::Availability => 2,
        }
    }

    /// Position in [`WIRE_COLUMNS`](Self::WIRE_COLUMNS).
    pub fn wire_index(self) -> usize {
        match self {
            Criterion::BaseCost => 0,
            Criterion::Availability => 1,
            Criterion::Risk => 2,
        }
    }

    /// Field name, also used as the criterion label in reports.
    pub fn name(self) -> &'static str {
        match self {
            Criterion::BaseCost => "base_cost",
            Criterion::Risk => "risk",
            Criterion::Availability => "availability",
        }
    }

    /// Natural direction: cost and risk are minimized, availability
    /// maximized.
    pub fn default_direction(self) -> Direction {
        match self {
            Criterion::BaseCost | Criterion::Risk => Direction::Min,
            Criterion::Availability => Direction::Max,
        }
    }

    /// Default directions in column order.
    pub fn default_directions() -> [Direction; 3] {
        Self::COLUMNS.map(Criterion::default_direction)
    }

    /// Default directions in wire order (`min`, `max`, `min`).
    pub fn wire_directions() -> [Direction; 3] {
        Self::WIRE_COLUMNS.map(Criterion::default_direction)
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An alternative with its TOPSIS closeness coefficient.
///
/// Its rank is its position in the vector returned by
/// [`rank`](super::rank). Serialized flat, with the score under
/// `topsis_score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    #[serde(flatten)]
    pub alternative: Alternative,

    /// Closeness coefficient in `[0, 1]`; 1 is ideal.
    #[serde(rename = "topsis_score", alias = "score")]
    pub score: f64,
}

impl RankedAlternative {
    pub fn name(&self) -> &str {
        &self.alternative.name
    }

    pub fn parameters(&self) -> &Parameters {
        &self.alternative.parameters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_order() {
        let p = Parameters::new(100.0, 0.2, 0.9);
        assert_eq!(p.to_array(), [100.0, 0.2, 0.9]);
    }

    #[test]
    fn test_default_directions() {
        assert_eq!(
            Criterion::default_directions(),
            [Direction::Min, Direction::Min, Direction::Max]
        );
    }

    #[test]
    fn test_column_and_wire_indices() {
        for (i, c) in Criterion::COLUMNS.iter().enumerate() {
            assert_eq!(c.column_index(), i);
        }
        for (i, c) in Criterion::WIRE_COLUMNS.iter().enumerate() {
            assert_eq!(c.wire_index(), i);
        }
        assert_eq!(
            Criterion::wire_directions(),
            [Direction::Min, Direction::Max, Direction::Min]
        );
    }

    #[test]
    fn test_criterion_names() {
        let names: Vec<&str> = Criterion::COLUMNS.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["base_cost", "risk", "availability"]);
        assert_eq!(Criterion::Risk.to_string(), "risk");
    }

    #[test]
    fn test_non_finite_detected() {
        assert!(Parameters::new(1.0, 0.1, 0.9).is_finite());
        assert!(!Parameters::new(f64::NAN, 0.1, 0.9).is_finite());
        assert!(!Parameters::new(1.0, f64::INFINITY, 0.9).is_finite());
    }

    #[test]
    fn test_ranked_serializes_flat() {
        let r = RankedAlternative {
            alternative: Alternative::new("A", 8000.0, 0.1, 0.99),
            score: 0.5,
        };
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["name"], "A");
        assert_eq!(v["parameters"]["base_cost"], 8000.0);
        assert_eq!(v["topsis_score"], 0.5);
    }

    #[test]
    fn test_ranked_accepts_score_alias() {
        let json = r#"{
            "name": "B",
            "parameters": {"base_cost": 1.0, "risk": 0.1, "availability": 0.9},
            "score": 0.25
        }"#;
        let r: RankedAlternative = serde_json::from_str(json).unwrap();
        assert_eq!(r.name(), "B");
        assert!((r.score - 0.25).abs() < 1e-15);
    }
}
