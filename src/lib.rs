// ============================================================================
// Calculator Library
// Variadic floating-point arithmetic with explicit error results
// ============================================================================

//! # Calculator
//!
//! Basic arithmetic over `f64` where every operation takes a leading operand
//! followed by any number of trailing operands, folded left to right.
//!
//! ## Features
//!
//! - **Variadic operations**: `add`, `subtract`, `multiply`, `divide` over slices
//! - **Explicit failures**: `divide` and `sqrt` return [`CalcResult`](arithmetic::CalcResult)
//!   naming the offending operand instead of panicking
//! - **Pure and stateless**: safe to call from any number of threads
//! - **Deferred calculations**: [`Calculation`](domain::Calculation) bundles an
//!   [`Operation`](domain::Operation) with its operands (serializable with `serde`)
//!
//! ## Example
//!
//! ```rust
//! use calculator::prelude::*;
//!
//! assert_eq!(add(0.0, &[1.0, 2.0, 3.0, 4.0, 5.0]), 15.0);
//! assert_eq!(subtract(0.0, &[1.0, 2.0, 3.0, 4.0, 5.0]), -15.0);
//! assert_eq!(multiply(1.0, &[1.0, 2.0, 3.0, 4.0, 5.0]), 120.0);
//! assert_eq!(divide(240.0, &[1.0, 2.0, 3.0, 4.0, 5.0]), Ok(2.0));
//! assert_eq!(sqrt(1024.0), Ok(32.0));
//!
//! match divide(240.0, &[1.0, 2.0, 3.0, 4.0, 0.0]) {
//!     Ok(_) => unreachable!(),
//!     Err(err) => println!("{}", err), // division by zero: divisor at position 4 is 0
//! }
//!
//! let op: Operation = "div".parse().unwrap();
//! assert_eq!(Calculation::new(op, 1.0).with_operand(0.5).evaluate(), Ok(2.0));
//! ```

pub mod arithmetic;
pub mod domain;

#[cfg(feature = "logging")]
pub mod logging;

// Re-exports for convenience
pub mod prelude {
    pub use crate::arithmetic::{add, divide, multiply, sqrt, subtract, CalcError, CalcResult};
    pub use crate::domain::{Calculation, CalculationError, Operation};
}
