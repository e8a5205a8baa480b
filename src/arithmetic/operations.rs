// ============================================================================
// Variadic Operations
// Left-to-right folds of a leading operand over trailing operands
// ============================================================================

use super::errors::{CalcError, CalcResult};

/// Returns `first` plus every operand in `rest`, summed left to right.
///
/// # Example
/// ```
/// use calculator::arithmetic::add;
///
/// assert_eq!(add(0.0, &[1.0, 2.0, 3.0, 4.0, 5.0]), 15.0);
/// assert_eq!(add(7.5, &[]), 7.5);
/// ```
#[inline]
pub fn add(first: f64, rest: &[f64]) -> f64 {
    rest.iter().fold(first, |acc, &x| acc + x)
}

/// Returns `first` minus every operand in `rest`, left-associative.
///
/// `subtract(a, &[b, c])` is `(a - b) - c`.
#[inline]
pub fn subtract(first: f64, rest: &[f64]) -> f64 {
    rest.iter().fold(first, |acc, &x| acc - x)
}

/// Returns `first` multiplied by every operand in `rest`, left to right.
#[inline]
pub fn multiply(first: f64, rest: &[f64]) -> f64 {
    rest.iter().fold(first, |acc, &x| acc * x)
}

/// Divides `first` by every operand in `rest`, left to right.
///
/// Evaluation stops at the first divisor equal to zero; no partial
/// quotient is returned. With no divisors `first` is returned unchanged.
///
/// # Errors
/// Returns `DivisionByZero` carrying the index of the first zero divisor.
///
/// # Example
/// ```
/// use calculator::arithmetic::{divide, CalcError};
///
/// assert_eq!(divide(240.0, &[1.0, 2.0, 3.0, 4.0, 5.0]), Ok(2.0));
/// assert_eq!(
///     divide(240.0, &[1.0, 2.0, 3.0, 4.0, 0.0]),
///     Err(CalcError::DivisionByZero { position: 4 })
/// );
/// ```
pub fn divide(first: f64, rest: &[f64]) -> CalcResult<f64> {
    rest.iter()
        .enumerate()
        .try_fold(first, |acc, (position, &divisor)| {
            // -0.0 compares equal to 0.0
            if divisor == 0.0 {
                tracing::debug!(position, dividend = acc, "rejected zero divisor");
                Err(CalcError::DivisionByZero { position })
            } else {
                Ok(acc / divisor)
            }
        })
}

/// Returns the principal (non-negative) square root of `x`.
///
/// `NaN` is passed through as `NaN`, matching IEEE-754.
///
/// # Errors
/// Returns `InvalidDomain` when `x` is negative, including negative infinity.
///
/// # Example
/// ```
/// use calculator::arithmetic::sqrt;
///
/// assert_eq!(sqrt(1024.0), Ok(32.0));
/// assert!(sqrt(-12.0).is_err());
/// ```
pub fn sqrt(x: f64) -> CalcResult<f64> {
    if x < 0.0 {
        tracing::debug!(radicand = x, "rejected negative radicand");
        return Err(CalcError::InvalidDomain { radicand: x });
    }
    Ok(x.sqrt())
}
