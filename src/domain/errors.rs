// ============================================================================
// Calculation Errors
// ============================================================================

use super::operation::Operation;
use crate::arithmetic::CalcError;

/// Errors raised while building or evaluating a [`Calculation`](super::Calculation).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalculationError {
    /// The operation name did not match any known operation
    #[error("unknown operation: {0:?}")]
    UnknownOperation(String),
    /// A fixed-arity operation received trailing operands
    #[error("{operation} takes a single operand, got {count}")]
    UnexpectedOperands {
        /// The operation that rejected its operands
        operation: Operation,
        /// Total number of operands supplied
        count: usize,
    },
    /// The operation itself failed
    #[error(transparent)]
    Arithmetic(#[from] CalcError),
}
