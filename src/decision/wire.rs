//! Conversion between the matrix column order and the payload order.
//!
//! [`rank`](super::rank) and the rest of the direct API take per-criterion
//! values in [`Criterion::COLUMNS`] order (`base_cost`, `risk`,
//! `availability`). Worker messages and service payloads carry them in
//! [`Criterion::WIRE_COLUMNS`] order (cost, availability, risk).

use super::types::Criterion;
use crate::error::{McdaError, Result};

/// Reorders payload values (weights or directions) into column order.
pub fn from_wire_order<T: Clone>(label: &str, values: &[T]) -> Result<Vec<T>> {
    reorder(label, values, Criterion::COLUMNS, Criterion::wire_index)
}

/// Reorders column-order values into payload order.
pub fn to_wire_order<T: Clone>(label: &str, values: &[T]) -> Result<Vec<T>> {
    reorder(label, values, Criterion::WIRE_COLUMNS, Criterion::column_index)
}

fn reorder<T: Clone>(
    label: &str,
    values: &[T],
    target: [Criterion; 3],
    source_index: fn(Criterion) -> usize,
) -> Result<Vec<T>> {
    if values.len() != target.len() {
        return Err(McdaError::invalid(format!(
            "{label} has {} entries, expected {}",
            values.len(),
            target.len()
        )));
    }
    Ok(target
        .iter()
        .map(|&c| values[source_index(c)].clone())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topsis::Direction::{Max, Min};

    #[test]
    fn test_from_wire_order() {
        let weights = from_wire_order("weights", &[0.4, 0.4, 0.2]).unwrap();
        assert_eq!(weights, vec![0.4, 0.2, 0.4]);
        let dirs = from_wire_order("directions", &[Min, Max, Min]).unwrap();
        assert_eq!(dirs, vec![Min, Min, Max]);
    }

    #[test]
    fn test_to_wire_order() {
        let weights = to_wire_order("weights", &[0.25, 0.125, 0.625]).unwrap();
        assert_eq!(weights, vec![0.25, 0.625, 0.125]);
        let back = from_wire_order("weights", &weights).unwrap();
        assert_eq!(back, vec![0.25, 0.125, 0.625]);
    }

    #[test]
    fn test_wrong_length_rejected() {
        let err = from_wire_order("weights", &[0.5, 0.5]).unwrap_err();
        assert!(matches!(err, McdaError::InvalidInput(_)));
        assert!(err.to_string().contains("weights has 2 entries"));
        assert!(to_wire_order("directions", &[Min; 4]).is_err());
    }
}
