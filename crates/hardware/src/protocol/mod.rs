//! Transaction protocol: commands and the payload exchanged per call.
//!
//! This module defines the externally observable protocol contract:
//! 1. **Commands:** The four arithmetic operations and their wire codes.
//! 2. **Payload:** The tagged request/response value mutated in place by the
//!    target, plus the word-frame codec preserving the original buffer shape
//!    at the boundary.

/// Command enumeration and wire codes.
pub mod command;

/// Payload structure and word-frame codec.
pub mod payload;

pub use command::Command;
pub use payload::{Frame, Payload, REQUEST_WORDS, RESPONSE_WORDS};
