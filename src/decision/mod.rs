//! Decision domain: alternatives with cost, risk, and availability.
//!
//! Fixes the three criterion columns of the decision domain on top of the
//! generic [`crate::topsis`] engine and provides the main entry point,
//! [`rank`].
//!
//! # Key Types
//!
//! - [`Alternative`], [`Parameters`]: Input rows
//! - [`RankedAlternative`]: Output rows, best first
//! - [`Criterion`]: The fixed column order `base_cost`, `risk`, `availability`,
//!   and the payload order used by workers and the service
//! - [`RankingConfig`]: Weights and directions with validation
//! - [`Constraints`]: Budget and availability screening
//! - [`Verdict`]: Head-to-head classification of the top two

mod config;
mod constraints;
mod rank;
mod types;
mod verdict;
mod wire;

pub use config::RankingConfig;
pub(crate) use config::validate_weights;
pub use constraints::Constraints;
pub use rank::{decision_matrix, rank, rank_checked, rank_with};
pub use types::{Alternative, Criterion, Parameters, RankedAlternative};
pub use verdict::{compare_leaders, Verdict, DOMINANT_MARGIN, TRADEOFF_THRESHOLD_PCT};
pub use wire::{from_wire_order, to_wire_order};
