//! Common types shared across the co-simulator.
//!
//! This module provides the building blocks used by every other component:
//! 1. **Simulated Time:** A strong duration type and the monotone clock it advances.
//! 2. **Error Handling:** The transaction error taxonomy surfaced to callers.

/// Transaction error definitions.
pub mod error;

/// Simulated time and clock types.
pub mod time;

pub use error::TransactionError;
pub use time::{SimClock, SimTime};
