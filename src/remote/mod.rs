//! Payloads of the remote decision service.
//!
//! The service produces the full recommendation (simulations, correlations,
//! chaos and consensus reports). This module only types its JSON and bridges
//! the parts that overlap with local ranking:
//!
//! - [`DecisionResults::rerank`]: re-score returned options under new weights
//!   without a round trip
//! - [`DecisionSpec::rank_locally`]: constraint screening plus local TOPSIS
//! - [`RecalculateRequest`]: body for the service's recalculation endpoint
//! - [`ManifoldPoint`]: cost/availability/risk/score projection

mod adapter;
mod dto;

pub use dto::{
    Algorithm, ChaosReport, ConsensusReport, Correlation, CorrelationRisk, DecisionResults,
    DecisionSpec, ManifoldPoint, OptionMetrics, OptionSimulation, PersonaEvaluation,
    RecalculateRequest, RecalculateResponse, RemoteRankedOption, SensitivityReport,
    SimulationDistribution, SimulationResults,
};
