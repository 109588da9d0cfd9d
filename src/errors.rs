//! Error types with diagnostic codes using miette
//!
//! Every failure here is a local, pure-function failure: nothing is mutated
//! before an error is returned, so callers can substitute a default and move on.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

/// Shorthand used throughout the crate
pub type Result<T, E = GeometryError> = std::result::Result<T, E>;

/// Errors raised by vector algebra, shape construction and configuration
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// An operand had zero magnitude where a direction was required.
    #[error("division by zero in {operation}: operand has zero magnitude")]
    #[diagnostic(
        code(plotmath::vector::divide_by_zero),
        help("a zero vector has no direction; check the operand before normalizing")
    )]
    DivideByZero { operation: &'static str },

    /// A shape was built from inputs that cannot describe it.
    #[error("degenerate {shape}: {reason}")]
    #[diagnostic(code(plotmath::shape::degenerate_input))]
    DegenerateInput { shape: &'static str, reason: String },

    /// A configuration scalar (unit, step, radius...) was rejected.
    #[error("invalid {what}: {source}")]
    #[diagnostic(code(plotmath::numeric::invalid))]
    InvalidNumber {
        what: &'static str,
        #[source]
        source: NumericError,
    },
}

impl GeometryError {
    pub(crate) fn degenerate(shape: &'static str, reason: impl Into<String>) -> Self {
        GeometryError::DegenerateInput {
            shape,
            reason: reason.into(),
        }
    }
}

impl From<NumericError> for GeometryError {
    fn from(source: NumericError) -> Self {
        GeometryError::InvalidNumber {
            what: "value",
            source,
        }
    }
}
