//! Sensitivity analysis configuration.

use serde::{Deserialize, Serialize};

use crate::error::{McdaError, Result};

/// Configuration for weight-perturbation analysis.
///
/// # Defaults
///
/// ```
/// use u_mcda::sensitivity::SensitivityConfig;
///
/// let config = SensitivityConfig::default();
/// assert!((config.delta - 0.1).abs() < 1e-15);
/// assert_eq!(config.samples, 200);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_mcda::sensitivity::SensitivityConfig;
///
/// let config = SensitivityConfig::default()
///     .with_delta(0.05)
///     .with_samples(500)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityConfig {
    /// Relative perturbation applied to a weight: `w * (1 ± delta)`.
    ///
    /// Must lie in `(0, 1]`.
    pub delta: f64,

    /// Number of random weight vectors drawn by
    /// [`SensitivityAnalyzer::sample`](super::SensitivityAnalyzer::sample).
    pub samples: usize,

    /// Whether to re-rank perturbations in parallel using rayon.
    ///
    /// Has no effect unless the `parallel` feature is enabled.
    pub parallel: bool,

    /// Random seed for reproducible sampling.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for SensitivityConfig {
    fn default() -> Self {
        Self {
            delta: 0.1,
            samples: 200,
            parallel: true,
            seed: None,
        }
    }
}

impl SensitivityConfig {
    /// Sets the relative perturbation, clamped to `[0, 1]`.
    pub fn with_delta(mut self, delta: f64) -> Self {
        self.delta = delta.clamp(0.0, 1.0);
        self
    }

    /// Sets the number of random samples.
    pub fn with_samples(mut self, n: usize) -> Self {
        self.samples = n;
        self
    }

    /// Enables or disables parallel re-ranking.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for interactive use: ±5%, 100 samples.
    pub fn quick() -> Self {
        Self {
            delta: 0.05,
            samples: 100,
            ..Self::default()
        }
    }

    /// Preset for reports: ±20%, 2000 samples.
    pub fn thorough() -> Self {
        Self {
            delta: 0.2,
            samples: 2000,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.delta > 0.0 && self.delta <= 1.0) {
            return Err(McdaError::invalid(format!(
                "delta must lie in (0, 1], got {}",
                self.delta
            )));
        }
        if self.samples == 0 {
            return Err(McdaError::invalid("samples must be at least 1"));
        }
        Ok(())
    }
}
