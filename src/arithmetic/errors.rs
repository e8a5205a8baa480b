// ============================================================================
// Arithmetic Errors
// Error types for the variadic floating-point operations
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur during an arithmetic operation.
///
/// Every variant identifies the operand that caused the failure.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalcError {
    /// A divisor was exactly zero (`0.0` or `-0.0`)
    #[error("division by zero: divisor at position {position} is 0")]
    DivisionByZero {
        /// Zero-based index of the divisor within the trailing operands
        position: usize,
    },
    /// The radicand of a square root was negative
    #[error("invalid domain: negative number {radicand} has no real square root")]
    InvalidDomain {
        /// The rejected input
        radicand: f64,
    },
}

impl CalcError {
    /// The numeric value a two-part `(value, error)` API would pair with this error.
    ///
    /// Always `NaN`: a failed operation has no meaningful result.
    #[inline]
    pub const fn sentinel(&self) -> f64 {
        f64::NAN
    }
}

/// Result type alias for arithmetic operations
pub type CalcResult<T> = Result<T, CalcError>;
