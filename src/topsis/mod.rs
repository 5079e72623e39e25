//! TOPSIS: Technique for Order Preference by Similarity to Ideal Solution.
//!
//! Ranks alternatives by their relative closeness to an ideal-best vector
//! versus an ideal-worst vector across weighted, vector-normalized criteria.
//! Works for any number of criteria; the domain layer in
//! [`crate::decision`] fixes the three cost/risk/availability columns.
//!
//! # Key Types
//!
//! - [`DecisionMatrix`]: Row-per-alternative numeric matrix with stage transforms
//! - [`Direction`], [`CriterionSpec`]: Per-criterion configuration
//! - [`TopsisEngine`]: Runs the pipeline, returning a [`TopsisOutcome`]
//!
//! # Degenerate input
//!
//! Zero-norm columns and zero total separation are resolved by substituting
//! a divisor of 1 (see [`crate::guard`]). A zero-norm column therefore stays
//! all zeros instead of being normalized; this keeps `NaN` out of the scores
//! but is not textbook TOPSIS.
//!
//! # References
//!
//! - Hwang & Yoon (1981), *Multiple Attribute Decision Making: Methods and Applications*

mod engine;
mod matrix;
mod types;

pub use engine::{closeness, rank_order, Separation, TopsisEngine, TopsisOutcome};
pub(crate) use engine::check_lengths;
pub use matrix::{separation, DecisionMatrix, IdealVectors};
pub use types::{CriterionSpec, Direction};
