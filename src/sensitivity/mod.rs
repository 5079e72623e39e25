//! Weight sensitivity and ranking stability.
//!
//! Checks whether the top-ranked alternative changes under small changes to
//! the criteria weights.
//!
//! - [`SensitivityAnalyzer::analyze`]: one weight at a time, `w * (1 ± delta)`;
//!   yields `stability_index`, `is_robust`, and `critical_vectors`
//! - [`SensitivityAnalyzer::sample`]: all weights at once with seeded random
//!   factors; yields per-alternative win frequencies
//!
//! The one-at-a-time report mirrors the shape of the remote decision
//! service's sensitivity report. It is a local approximation computed from
//! the TOPSIS engine, not a reproduction of the service's algorithm.

mod analysis;
mod config;

pub use analysis::{Perturbation, SampledSensitivity, SensitivityAnalyzer, StabilityReport};
pub use config::SensitivityConfig;
