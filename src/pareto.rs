//! Pareto screening of alternatives.
//!
//! An alternative is Pareto-optimal when no other alternative is at least
//! as good on every criterion and strictly better on one. Directions are
//! respected: `Max` columns prefer larger values, `Min` columns smaller.
//!
//! # Algorithms
//!
//! - [`fronts`]: Fast non-dominated sorting (Deb et al., 2002)
//! - [`pareto_optimal`]: Front-0 membership flags
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"

use serde::{Deserialize, Serialize};

use crate::decision::{decision_matrix, Alternative};
use crate::error::{McdaError, Result};
use crate::topsis::{DecisionMatrix, Direction};

/// Result of non-dominated sorting.
///
/// Each element of `ranks` corresponds to the alternative at the same
/// index. Rank 0 is the Pareto front.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParetoFronts {
    /// Front index for each alternative (0 = non-dominated).
    pub ranks: Vec<usize>,

    /// Indices grouped by front: `fronts[0]` holds the rank-0 indices.
    pub fronts: Vec<Vec<usize>>,
}

/// Dominance comparison result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// Left dominates right.
    Left,
    /// Right dominates left.
    Right,
    /// Neither dominates the other (including identical rows).
    Neither,
}

/// Compares two rows for Pareto dominance under the given directions.
pub fn dominance(a: &[f64], b: &[f64], directions: &[Direction]) -> Dominance {
    let mut a_better_in_some = false;
    let mut b_better_in_some = false;

    for ((&va, &vb), dir) in a.iter().zip(b).zip(directions) {
        let (better, worse) = match dir {
            Direction::Max => (va > vb, vb > va),
            Direction::Min => (va < vb, vb < va),
        };
        if better {
            a_better_in_some = true;
        } else if worse {
            b_better_in_some = true;
        }
    }

    match (a_better_in_some, b_better_in_some) {
        (true, false) => Dominance::Left,
        (false, true) => Dominance::Right,
        _ => Dominance::Neither,
    }
}

/// Fast non-dominated sorting of the matrix rows.
///
/// # Complexity
///
/// O(k * n²) where k = number of criteria, n = number of alternatives
///
/// # Example
///
/// ```
/// use u_mcda::pareto::fronts;
/// use u_mcda::topsis::{DecisionMatrix, Direction};
///
/// let m = DecisionMatrix::from_rows(vec![
///     vec![1.0, 5.0],
///     vec![3.0, 3.0],
///     vec![5.0, 1.0],
///     vec![4.0, 4.0], // dominated by the second row
/// ]).unwrap();
///
/// let result = fronts(&m, &[Direction::Min, Direction::Min]).unwrap();
/// assert_eq!(result.ranks, vec![0, 0, 0, 1]);
/// ```
pub fn fronts(matrix: &DecisionMatrix, directions: &[Direction]) -> Result<ParetoFronts> {
    if directions.len() != matrix.n_criteria() {
        return Err(McdaError::invalid(format!(
            "directions has {} entries, expected {}",
            directions.len(),
            matrix.n_criteria()
        )));
    }

    let n = matrix.n_alternatives();
    if n == 0 {
        return Ok(ParetoFronts {
            ranks: Vec::new(),
            fronts: Vec::new(),
        });
    }

    let mut domination_count = vec![0usize; n];
    let mut dominates: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut ranks = vec![0usize; n];

    for i in 0..n {
        for j in (i + 1)..n {
            match dominance(matrix.row(i), matrix.row(j), directions) {
                Dominance::Left => {
                    dominates[i].push(j);
                    domination_count[j] += 1;
                }
                Dominance::Right => {
                    dominates[j].push(i);
                    domination_count[i] += 1;
                }
                Dominance::Neither => {}
            }
        }
    }

    let front_0: Vec<usize> = (0..n).filter(|&i| domination_count[i] == 0).collect();
    let mut fronts = Vec::new();
    let mut current = front_0;

    while !current.is_empty() {
        let mut next_front = Vec::new();
        for &i in &current {
            for &j in &dominates[i] {
                domination_count[j] -= 1;
                if domination_count[j] == 0 {
                    ranks[j] = fronts.len() + 1;
                    next_front.push(j);
                }
            }
        }
        fronts.push(current);
        current = next_front;
    }

    Ok(ParetoFronts { ranks, fronts })
}

/// Front-0 membership for each row.
pub fn pareto_optimal(matrix: &DecisionMatrix, directions: &[Direction]) -> Result<Vec<bool>> {
    Ok(fronts(matrix, directions)?
        .ranks
        .into_iter()
        .map(|r| r == 0)
        .collect())
}

/// Pareto flags for domain alternatives, in input order.
pub fn pareto_flags(alternatives: &[Alternative], directions: &[Direction]) -> Result<Vec<bool>> {
    pareto_optimal(&decision_matrix(alternatives), directions)
}
