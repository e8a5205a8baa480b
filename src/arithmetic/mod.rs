// ============================================================================
// Arithmetic Module
// Variadic floating-point operations with explicit error results
// ============================================================================
//
// This module provides:
// - add / subtract / multiply: infallible left-to-right folds
// - divide: fail-fast on the first zero divisor
// - sqrt: principal square root, rejecting negative input
// - CalcError: the two failure kinds, each naming the offending operand
//
// Every operation is a pure function over IEEE-754 doubles. No rounding is
// performed and no state is shared, so calls may run concurrently.

mod errors;
mod operations;

pub use errors::{CalcError, CalcResult};
pub use operations::{add, divide, multiply, sqrt, subtract};
