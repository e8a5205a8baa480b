// ============================================================================
// Operation
// Named arithmetic operations and dispatch to the arithmetic module
// ============================================================================

use super::errors::CalculationError;
use crate::arithmetic;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the five supported arithmetic operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Operation {
    /// `first + rest[0] + rest[1] + ...`
    Add,
    /// `first - rest[0] - rest[1] - ...`
    Subtract,
    /// `first * rest[0] * rest[1] * ...`
    Multiply,
    /// `first / rest[0] / rest[1] / ...`, failing on a zero divisor
    Divide,
    /// Principal square root of a single operand
    Sqrt,
}

impl Operation {
    /// All operations, in declaration order
    pub const ALL: [Operation; 5] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Sqrt,
    ];

    /// Canonical lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Sqrt => "sqrt",
        }
    }

    /// Conventional mathematical symbol
    pub const fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
            Operation::Sqrt => "√",
        }
    }

    /// Whether the operation accepts trailing operands
    pub const fn is_variadic(self) -> bool {
        !matches!(self, Operation::Sqrt)
    }

    /// Whether the operation can fail for some input
    pub const fn is_fallible(self) -> bool {
        matches!(self, Operation::Divide | Operation::Sqrt)
    }

    /// Applies the operation to `first` followed by `rest`.
    ///
    /// # Errors
    /// - `UnexpectedOperands` if `Sqrt` is given trailing operands
    /// - `Arithmetic` if the underlying operation fails
    ///
    /// # Example
    /// ```
    /// use calculator::domain::Operation;
    ///
    /// assert_eq!(Operation::Multiply.apply(1.0, &[1.0, 2.0, 3.0, 4.0, 5.0]), Ok(120.0));
    /// assert!(Operation::Divide.apply(1.0, &[0.0]).is_err());
    /// ```
    pub fn apply(self, first: f64, rest: &[f64]) -> Result<f64, CalculationError> {
        let value = match self {
            Operation::Add => arithmetic::add(first, rest),
            Operation::Subtract => arithmetic::subtract(first, rest),
            Operation::Multiply => arithmetic::multiply(first, rest),
            Operation::Divide => arithmetic::divide(first, rest)?,
            Operation::Sqrt => {
                if !rest.is_empty() {
                    return Err(CalculationError::UnexpectedOperands {
                        operation: self,
                        count: rest.len() + 1,
                    });
                }
                arithmetic::sqrt(first)?
            },
        };
        Ok(value)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = CalculationError;

    /// Parses a name (case-insensitive), symbol, or short alias.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "add" | "+" => Ok(Operation::Add),
            "subtract" | "sub" | "-" => Ok(Operation::Subtract),
            "multiply" | "mul" | "*" | "x" => Ok(Operation::Multiply),
            "divide" | "div" | "/" | "÷" => Ok(Operation::Divide),
            "sqrt" | "√" => Ok(Operation::Sqrt),
            _ => Err(CalculationError::UnknownOperation(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arithmetic::CalcError;

    #[test]
    fn test_parse_names_and_symbols() {
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>().unwrap(), op);
            assert_eq!(op.symbol().parse::<Operation>().unwrap(), op);
        }

        assert_eq!("  Divide ".parse::<Operation>().unwrap(), Operation::Divide);
        assert_eq!("MUL".parse::<Operation>().unwrap(), Operation::Multiply);
        assert_eq!("÷".parse::<Operation>().unwrap(), Operation::Divide);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "pow".parse::<Operation>(),
            Err(CalculationError::UnknownOperation("pow".to_string()))
        );
        assert!("".parse::<Operation>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Operation::Subtract.to_string(), "subtract");
        assert_eq!(Operation::Sqrt.to_string(), "sqrt");
    }

    #[test]
    fn test_classification() {
        assert!(Operation::Add.is_variadic());
        assert!(!Operation::Sqrt.is_variadic());
        assert!(!Operation::Multiply.is_fallible());
        assert!(Operation::Divide.is_fallible());
        assert!(Operation::Sqrt.is_fallible());
    }

    #[test]
    fn test_apply_dispatch() {
        let rest = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(Operation::Add.apply(0.0, &rest), Ok(15.0));
        assert_eq!(Operation::Subtract.apply(0.0, &rest), Ok(-15.0));
        assert_eq!(Operation::Multiply.apply(1.0, &rest), Ok(120.0));
        assert_eq!(Operation::Divide.apply(240.0, &rest), Ok(2.0));
        assert_eq!(Operation::Sqrt.apply(1024.0, &[]), Ok(32.0));
    }

    #[test]
    fn test_apply_errors() {
        assert_eq!(
            Operation::Divide.apply(240.0, &[1.0, 0.0]),
            Err(CalculationError::Arithmetic(CalcError::DivisionByZero {
                position: 1
            }))
        );
        assert_eq!(
            Operation::Sqrt.apply(-4.0, &[]),
            Err(CalculationError::Arithmetic(CalcError::InvalidDomain {
                radicand: -4.0
            }))
        );
        assert_eq!(
            Operation::Sqrt.apply(4.0, &[9.0]),
            Err(CalculationError::UnexpectedOperands {
                operation: Operation::Sqrt,
                count: 2,
            })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_lowercase_names() {
        let json = serde_json::to_string(&Operation::Multiply).unwrap();
        assert_eq!(json, "\"multiply\"");

        let op: Operation = serde_json::from_str("\"sqrt\"").unwrap();
        assert_eq!(op, Operation::Sqrt);
    }
}
