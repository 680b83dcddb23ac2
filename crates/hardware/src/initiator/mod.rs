//! Software-side initiator: transaction scenarios and the verification driver.
//!
//! The initiator originates transactions: it holds an ordered scenario of test
//! cases, issues them one at a time over the transport channel, and verifies
//! each returned result against its expectation.

/// Verification driver.
pub mod driver;

/// Transaction records and scenarios.
pub mod scenario;

pub use driver::Initiator;
pub use scenario::{Scenario, TransactionRecord};
