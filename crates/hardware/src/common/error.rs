//! Transaction error definitions.
//!
//! This module defines the error taxonomy for the transaction protocol:
//! 1. **Malformed Payload:** A word buffer whose shape or width metadata violates
//!    the one-shot-word contract. Fatal for the run.
//! 2. **Unsupported Command:** A command code outside the defined set. Fatal for
//!    the transaction and surfaced to the caller; the clock is never advanced.
//! 3. **Division by Zero:** A remainder request with a zero divisor. Fails the
//!    offending transaction only; the driver records it and continues.
//!
//! An incorrect arithmetic result is not an error: the driver records it as a
//! failed verification outcome.

use thiserror::Error;

/// Errors raised while decoding or dispatching a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionError {
    /// The word buffer does not match the 3-slot request / 4-slot response shape,
    /// or its width metadata indicates a partial-width access.
    #[error("malformed payload: {reason}")]
    MalformedPayload {
        /// Human-readable description of the shape violation.
        reason: String,
    },

    /// The command code is outside the defined set {0, 1, 2, 3}.
    #[error("unsupported command code {0}")]
    UnsupportedCommand(i32),

    /// A remainder operation was requested with a zero divisor.
    #[error("division by zero: {dividend} % 0 is undefined")]
    DivisionByZero {
        /// The dividend of the rejected operation.
        dividend: i32,
    },
}

impl TransactionError {
    /// Returns `true` if this error aborts the whole run rather than a single
    /// transaction.
    pub const fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::MalformedPayload { .. } | Self::UnsupportedCommand(_)
        )
    }

    /// Stable machine-readable code for the external response contract.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MalformedPayload { .. } => "malformed_payload",
            Self::UnsupportedCommand(_) => "unsupported_command",
            Self::DivisionByZero { .. } => "division_by_zero",
        }
    }
}
