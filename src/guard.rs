//! Divide-by-zero guards for degenerate TOPSIS input.
//!
//! Two places in the pipeline can divide by zero: column normalization when
//! every value in a column is zero, and the closeness coefficient when an
//! alternative sits on both ideal vectors at once. Both substitute a
//! fallback divisor instead of producing `NaN`/`Infinity`.

/// Divisor substituted when a guarded denominator is exactly zero.
pub const FALLBACK_DIVISOR: f64 = 1.0;

/// Divides `numerator` by `denominator`, using `fallback_divisor` when the
/// denominator is exactly zero.
///
/// Only an exact zero triggers the fallback. Tiny non-zero denominators are
/// divided through unchanged.
///
/// # Example
///
/// ```
/// use u_mcda::guard::safe_divide;
///
/// assert_eq!(safe_divide(3.0, 2.0, 1.0), 1.5);
/// assert_eq!(safe_divide(3.0, 0.0, 1.0), 3.0);
/// ```
#[inline]
pub fn safe_divide(numerator: f64, denominator: f64, fallback_divisor: f64) -> f64 {
    if denominator == 0.0 {
        numerator / fallback_divisor
    } else {
        numerator / denominator
    }
}

/// [`safe_divide`] with [`FALLBACK_DIVISOR`].
#[inline]
pub fn guarded_divide(numerator: f64, denominator: f64) -> f64 {
    safe_divide(numerator, denominator, FALLBACK_DIVISOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_division() {
        assert!((safe_divide(1.0, 4.0, 1.0) - 0.25).abs() < 1e-15);
    }

    #[test]
    fn test_zero_denominator_uses_fallback() {
        assert_eq!(safe_divide(5.0, 0.0, 1.0), 5.0);
        assert_eq!(safe_divide(5.0, 0.0, 2.0), 2.5);
    }

    #[test]
    fn test_negative_zero_denominator() {
        assert_eq!(safe_divide(5.0, -0.0, 1.0), 5.0);
    }

    #[test]
    fn test_zero_over_zero_is_zero() {
        assert_eq!(guarded_divide(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_tiny_denominator_not_guarded() {
        let r = guarded_divide(1.0, 1e-300);
        assert!(r > 1e299);
    }
}
