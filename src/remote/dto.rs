//! Wire types of the remote decision service.
//!
//! These mirror the service's JSON. Optional sections default when absent
//! and unknown fields are ignored, so older or newer payloads still decode.
//! Nothing here is used by the ranking engine directly; see
//! [`super::adapter`] for conversions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::decision::{Alternative, Constraints};
use crate::worker::TopsisRequest;

/// Scoring method requested from the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Topsis,
    Ahp,
}

/// Full decision specification submitted for a recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionSpec {
    pub domain: String,
    pub goal: String,
    #[serde(default)]
    pub constraints: Constraints,
    #[serde(default)]
    pub preferences: Vec<String>,
    pub options: Vec<Alternative>,
    /// Weights in payload order: cost, availability, risk.
    pub weights: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<Algorithm>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
}

/// Metric triple attached to a remote ranked option.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionMetrics {
    pub cost: f64,
    pub availability: f64,
    pub risk: f64,
}

/// One ranked option as returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteRankedOption {
    pub option: String,
    pub topsis_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_pareto_optimal: Option<bool>,
    pub metrics: OptionMetrics,
}

/// Monte Carlo draws for one option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationDistribution {
    #[serde(default)]
    pub cost_dist: Vec<f64>,
    #[serde(default)]
    pub availability_dist: Vec<f64>,
    #[serde(default)]
    pub risk_dist: Vec<f64>,
    pub expected: OptionMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionSimulation {
    pub option: String,
    pub simulation: SimulationDistribution,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimulationResults {
    #[serde(default)]
    pub ranked_options: Vec<RemoteRankedOption>,
    #[serde(default)]
    pub sensitivity: BTreeMap<String, f64>,
}

/// Stability report computed by the service.
///
/// Extra keys are kept verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityReport {
    pub stability_index: f64,
    pub is_robust: bool,
    #[serde(default)]
    pub critical_vectors: Vec<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CorrelationRisk {
    High,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correlation {
    pub pair: (String, String),
    pub coefficient: f64,
    pub risk: CorrelationRisk,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChaosReport {
    pub variance_score: f64,
    pub stability_index: f64,
    #[serde(default)]
    pub bottlenecks: Vec<String>,
    #[serde(default)]
    pub stressed_top_option: Option<String>,
    #[serde(default)]
    pub fragility_score: Option<f64>,
    #[serde(default)]
    pub is_strategic_trap: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaEvaluation {
    pub top_choice: String,
    #[serde(default)]
    pub scores: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusReport {
    pub agreement_ratio: f64,
    #[serde(default)]
    pub divergence_points: Vec<String>,
    #[serde(default)]
    pub consensus_score: Option<f64>,
    #[serde(default)]
    pub is_polarized: Option<bool>,
    #[serde(default)]
    pub persona_evaluations: Option<BTreeMap<String, PersonaEvaluation>>,
}

/// Recommendation returned by the service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionResults {
    pub id: Option<i64>,
    pub strategy: Option<String>,
    pub domain: Option<String>,
    pub ranked_options: Vec<RemoteRankedOption>,
    pub simulations: Vec<OptionSimulation>,
    pub options: Vec<Alternative>,
    pub simulation_results: Option<SimulationResults>,
    /// Weights in payload order: cost, availability, risk.
    pub weights: Option<Vec<f64>>,
    pub sensitivity: Option<SensitivityReport>,
    pub correlations: Vec<Correlation>,
    pub narrative: Option<String>,
    pub chaos_report: Option<ChaosReport>,
    pub consensus_report: Option<ConsensusReport>,
}

/// Body of the service's recalculation endpoint. It carries the same fields
/// as a worker request.
pub type RecalculateRequest = TopsisRequest;

/// Response of the service's recalculation endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecalculateResponse {
    #[serde(default)]
    pub ranked_options: Vec<RemoteRankedOption>,
}

/// A point of the cost/availability/risk/score manifold chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifoldPoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option: Option<String>,
    pub cost: f64,
    pub availability: f64,
    pub risk: f64,
    pub topsis: f64,
}
