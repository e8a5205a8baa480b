// ============================================================================
// Domain Module
// Named operations and deferred calculations built on the arithmetic module
// ============================================================================

mod calculation;
mod errors;
mod operation;

pub use calculation::Calculation;
pub use errors::CalculationError;
pub use operation::Operation;
