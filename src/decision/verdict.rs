//! Head-to-head comparison of the two top-ranked alternatives.

use serde::{Deserialize, Serialize};

use super::types::RankedAlternative;
use crate::guard::guarded_divide;

/// Score lead above which the leader is considered dominant.
pub const DOMINANT_MARGIN: f64 = 0.15;

/// Percentage by which the runner-up must be both costlier and less risky
/// for the pair to count as a cost/risk tradeoff.
pub const TRADEOFF_THRESHOLD_PCT: f64 = 10.0;

/// How the leader relates to the runner-up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Verdict {
    /// Fewer than two alternatives.
    Insufficient,

    /// The leader's score exceeds the runner-up's by more than
    /// [`DOMINANT_MARGIN`].
    DominantLead { margin: f64 },

    /// The runner-up is safer but costs more, both beyond
    /// [`TRADEOFF_THRESHOLD_PCT`].
    EfficientTradeoff {
        /// Runner-up cost above the leader's, as a percentage of it.
        cost_premium_pct: f64,
        /// Runner-up risk below the leader's, as a percentage of it.
        risk_reduction_pct: f64,
    },

    /// Neither of the above.
    Marginal,
}

/// Classifies the first two entries of a ranking (best first).
///
/// A zero cost or risk on the leader is divided by 1 instead.
pub fn compare_leaders(ranked: &[RankedAlternative]) -> Verdict {
    let [top, second, ..] = ranked else {
        return Verdict::Insufficient;
    };

    let margin = top.score - second.score;
    if margin > DOMINANT_MARGIN {
        return Verdict::DominantLead { margin };
    }

    let (a, b) = (top.parameters(), second.parameters());
    let cost_premium_pct = guarded_divide(b.base_cost - a.base_cost, a.base_cost) * 100.0;
    let risk_reduction_pct = guarded_divide(a.risk - b.risk, a.risk) * 100.0;
    if cost_premium_pct > TRADEOFF_THRESHOLD_PCT && risk_reduction_pct > TRADEOFF_THRESHOLD_PCT {
        return Verdict::EfficientTradeoff {
            cost_premium_pct,
            risk_reduction_pct,
        };
    }

    Verdict::Marginal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::{rank, Alternative};
    use crate::topsis::Direction::{Max, Min};

    fn ranked(rows: &[(&str, f64, f64, f64, f64)]) -> Vec<RankedAlternative> {
        rows.iter()
            .map(|&(name, cost, risk, avail, score)| RankedAlternative {
                alternative: Alternative::new(name, cost, risk, avail),
                score,
            })
            .collect()
    }

    #[test]
    fn test_insufficient() {
        assert_eq!(compare_leaders(&[]), Verdict::Insufficient);
        let one = ranked(&[("A", 1.0, 0.1, 0.9, 0.0)]);
        assert_eq!(compare_leaders(&one), Verdict::Insufficient);
    }

    #[test]
    fn test_dominant_lead() {
        let r = ranked(&[("A", 1.0, 0.1, 0.9, 0.8), ("B", 2.0, 0.05, 0.9, 0.3)]);
        match compare_leaders(&r) {
            Verdict::DominantLead { margin } => assert!((margin - 0.5).abs() < 1e-12),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_efficient_tradeoff_on_fixture() {
        let alts = vec![
            Alternative::new("A", 8000.0, 0.1, 0.99),
            Alternative::new("B", 12000.0, 0.05, 0.999),
        ];
        let r = rank(&alts, &[0.4, 0.2, 0.4], &[Min, Min, Max]).unwrap();
        match compare_leaders(&r) {
            Verdict::EfficientTradeoff {
                cost_premium_pct,
                risk_reduction_pct,
            } => {
                assert!((cost_premium_pct - 50.0).abs() < 1e-9);
                assert!((risk_reduction_pct - 50.0).abs() < 1e-9);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_marginal() {
        let r = ranked(&[("A", 100.0, 0.1, 0.9, 0.55), ("B", 105.0, 0.05, 0.9, 0.5)]);
        assert_eq!(compare_leaders(&r), Verdict::Marginal);
    }

    #[test]
    fn test_zero_leader_cost_is_finite() {
        let r = ranked(&[("A", 0.0, 0.0, 0.9, 0.5), ("B", 10.0, 0.0, 0.9, 0.45)]);
        assert_eq!(compare_leaders(&r), Verdict::Marginal);
    }
}
