//! Multi-criteria decision ranking.
//!
//! Ranks alternatives described by cost, risk, and availability with TOPSIS
//! and checks how stable the ranking is:
//!
//! - **TOPSIS**: Vector normalization, weighting, ideal/anti-ideal vectors,
//!   and relative closeness over a generic decision matrix.
//! - **Decision domain**: Alternatives with `base_cost`, `risk`, and
//!   `availability`, weight configuration, and constraint screening.
//! - **Pareto**: Non-dominated fronts over the same matrix.
//! - **Sensitivity**: One-at-a-time weight perturbation and seeded random
//!   weight sampling.
//! - **Worker**: A single-request/single-response message protocol, served
//!   by a background thread or exported to WebAssembly.
//! - **Remote**: Typed payloads of the decision service with local re-ranking.
//!
//! # Quick Start
//!
//! ```
//! use u_mcda::decision::{rank, Alternative};
//! use u_mcda::topsis::Direction::{Max, Min};
//!
//! let ranked = rank(
//!     &[
//!         Alternative::new("A", 8000.0, 0.1, 0.99),
//!         Alternative::new("B", 12000.0, 0.05, 0.999),
//!     ],
//!     &[0.4, 0.2, 0.4],
//!     &[Min, Min, Max],
//! )
//! .unwrap();
//!
//! assert_eq!(ranked[0].name(), "A");
//! ```
//!
//! # Features
//!
//! - `parallel`: run sensitivity perturbations on rayon
//! - `wasm`: export the worker protocol with wasm-bindgen

pub mod decision;
pub mod error;
pub mod guard;
pub mod pareto;
pub mod remote;
pub mod sensitivity;
pub mod topsis;
pub mod worker;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{McdaError, Result};
