//! Conversions between service payloads and local ranking types.

use tracing::debug;

use super::dto::{
    DecisionResults, DecisionSpec, ManifoldPoint, OptionMetrics, RecalculateRequest,
    RemoteRankedOption, SensitivityReport,
};
use crate::decision::{
    from_wire_order, rank_checked, Alternative, Criterion, RankedAlternative,
};
use crate::error::Result;
use crate::guard::guarded_divide;
use crate::pareto::pareto_flags;
use crate::sensitivity::StabilityReport;
use crate::topsis::Direction;

impl From<&RemoteRankedOption> for RankedAlternative {
    fn from(remote: &RemoteRankedOption) -> Self {
        let m = remote.metrics;
        Self {
            alternative: Alternative::new(
                remote.option.clone(),
                m.cost,
                m.risk,
                m.availability,
            ),
            score: remote.topsis_score,
        }
    }
}

impl From<&RankedAlternative> for RemoteRankedOption {
    fn from(ranked: &RankedAlternative) -> Self {
        let p = ranked.parameters();
        Self {
            option: ranked.name().to_owned(),
            topsis_score: ranked.score,
            is_pareto_optimal: None,
            metrics: OptionMetrics {
                cost: p.base_cost,
                availability: p.availability,
                risk: p.risk,
            },
        }
    }
}

impl From<&RankedAlternative> for ManifoldPoint {
    fn from(ranked: &RankedAlternative) -> Self {
        let p = ranked.parameters();
        Self {
            option: Some(ranked.name().to_owned()),
            cost: p.base_cost,
            availability: p.availability,
            risk: p.risk,
            topsis: ranked.score,
        }
    }
}

impl From<&StabilityReport> for SensitivityReport {
    fn from(report: &StabilityReport) -> Self {
        Self {
            stability_index: report.stability_index,
            is_robust: report.is_robust,
            critical_vectors: report.critical_vectors.clone(),
            extra: Default::default(),
        }
    }
}

/// The service report carries no per-perturbation detail, so the local
/// report has no baseline winner and no perturbations.
impl From<&SensitivityReport> for StabilityReport {
    fn from(report: &SensitivityReport) -> Self {
        Self {
            baseline_winner: None,
            stability_index: report.stability_index,
            is_robust: report.is_robust,
            critical_vectors: report.critical_vectors.clone(),
            perturbations: Vec::new(),
        }
    }
}

impl DecisionResults {
    /// Ranked options as local rows, in the order the service returned them.
    pub fn ranked_alternatives(&self) -> Vec<RankedAlternative> {
        self.ranked_options.iter().map(RankedAlternative::from).collect()
    }

    /// The alternatives to re-rank: the ranked options when present,
    /// otherwise the submitted options.
    pub fn alternatives(&self) -> Vec<Alternative> {
        if self.ranked_options.is_empty() {
            return self.options.clone();
        }
        self.ranked_option_rows()
    }

    /// Re-ranks locally under new weights without a service round trip.
    ///
    /// `weights` and `directions` are in
    /// [`Criterion::COLUMNS`](crate::decision::Criterion::COLUMNS) order.
    pub fn rerank(
        &self,
        weights: &[f64],
        directions: &[Direction],
    ) -> Result<Vec<RankedAlternative>> {
        let alternatives = self.alternatives();
        debug!(n = alternatives.len(), "re-ranking service results locally");
        rank_checked(&alternatives, weights, directions)
    }

    /// Marks each ranked option with its Pareto status.
    pub fn mark_pareto(&mut self, directions: &[Direction]) -> Result<()> {
        let flags = pareto_flags(&self.ranked_option_rows(), directions)?;
        for (option, flag) in self.ranked_options.iter_mut().zip(flags) {
            option.is_pareto_optimal = Some(flag);
        }
        Ok(())
    }

    /// Manifold chart points for the ranked options.
    pub fn manifold(&self) -> Vec<ManifoldPoint> {
        self.ranked_options
            .iter()
            .map(|r| ManifoldPoint::from(&RankedAlternative::from(r)))
            .collect()
    }

    /// Builds the service recalculation request for new weights.
    ///
    /// `weights` and `directions` are in column order, as for
    /// [`rerank`](Self::rerank); the request carries them in payload order.
    /// Weights are scaled to sum to 1 (left as-is when they sum to 0).
    pub fn recalculate_request(
        &self,
        weights: &[f64],
        directions: &[Direction],
    ) -> Result<RecalculateRequest> {
        RecalculateRequest::from_columns(self.alternatives(), &normalize(weights), directions)
    }

    fn ranked_option_rows(&self) -> Vec<Alternative> {
        self.ranked_options
            .iter()
            .map(|r| RankedAlternative::from(r).alternative)
            .collect()
    }
}

impl DecisionSpec {
    /// Ranks the admissible options locally with the default directions.
    ///
    /// Options outside the constraints are dropped before ranking. The
    /// payload-order weights are reordered into column order first.
    pub fn rank_locally(&self) -> Result<Vec<RankedAlternative>> {
        let admitted = self.constraints.filter(&self.options);
        debug!(
            submitted = self.options.len(),
            admitted = admitted.len(),
            "ranking decision spec locally"
        );
        if admitted.is_empty() {
            return Ok(Vec::new());
        }
        let weights = from_wire_order("weights", &self.weights)?;
        rank_checked(&admitted, &weights, &Criterion::default_directions())
    }

    /// Builds a recalculation request for this spec's options and weights,
    /// with the default directions in payload order.
    pub fn recalculate_request(&self) -> RecalculateRequest {
        RecalculateRequest::new(
            self.options.clone(),
            normalize(&self.weights),
            &Criterion::wire_directions(),
        )
    }
}

fn normalize(weights: &[f64]) -> Vec<f64> {
    let total: f64 = weights.iter().sum();
    weights.iter().map(|&w| guarded_divide(w, total)).collect()
}
