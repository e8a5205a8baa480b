// ============================================================================
// Calculation
// An operation bundled with its operands, built up front and evaluated later
// ============================================================================

use super::errors::CalculationError;
use super::operation::Operation;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A deferred arithmetic computation.
///
/// # Example
/// ```
/// use calculator::domain::{Calculation, Operation};
///
/// let calc = Calculation::new(Operation::Divide, 240.0)
///     .with_operands([1.0, 2.0, 3.0, 4.0, 5.0]);
/// assert_eq!(calc.evaluate(), Ok(2.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Calculation {
    /// The operation to apply
    pub operation: Operation,

    /// The leading operand (the dividend, minuend, radicand, ...)
    pub first: f64,

    /// Trailing operands, applied left to right
    #[cfg_attr(feature = "serde", serde(default))]
    pub rest: Vec<f64>,
}

impl Calculation {
    /// Create a calculation with a single operand
    pub fn new(operation: Operation, first: f64) -> Self {
        Self {
            operation,
            first,
            rest: Vec::new(),
        }
    }

    /// Builder method: Append one trailing operand
    pub fn with_operand(mut self, operand: f64) -> Self {
        self.rest.push(operand);
        self
    }

    /// Builder method: Append trailing operands in order
    pub fn with_operands(mut self, operands: impl IntoIterator<Item = f64>) -> Self {
        self.rest.extend(operands);
        self
    }

    // ========================================================================
    // Presets
    // ========================================================================

    /// Sum of `operands`, starting from zero
    pub fn sum(operands: impl IntoIterator<Item = f64>) -> Self {
        Self::new(Operation::Add, 0.0).with_operands(operands)
    }

    /// Product of `operands`, starting from one
    pub fn product(operands: impl IntoIterator<Item = f64>) -> Self {
        Self::new(Operation::Multiply, 1.0).with_operands(operands)
    }

    /// Total number of operands, including `first`
    pub fn operand_count(&self) -> usize {
        1 + self.rest.len()
    }

    /// Checks that the operand count suits the operation.
    pub fn validate(&self) -> Result<(), CalculationError> {
        if !self.operation.is_variadic() && !self.rest.is_empty() {
            return Err(CalculationError::UnexpectedOperands {
                operation: self.operation,
                count: self.operand_count(),
            });
        }
        Ok(())
    }

    /// Validates and then computes the result.
    ///
    /// Evaluating the same calculation repeatedly always yields the same result.
    pub fn evaluate(&self) -> Result<f64, CalculationError> {
        if let Err(err) = self.validate() {
            tracing::debug!(operation = %self.operation, %err, "invalid calculation");
            return Err(err);
        }

        tracing::trace!(
            operation = %self.operation,
            operands = self.operand_count(),
            "evaluating calculation"
        );

        self.operation.apply(self.first, &self.rest)
    }
}
