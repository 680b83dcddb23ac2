//! Transaction-level hardware/software co-simulation library.
//!
//! This crate models a software-side initiator issuing arithmetic commands to a
//! hardware-side target over a blocking transport channel, with the following:
//! 1. **Protocol:** Command encoding and the fixed-shape request/response payload.
//! 2. **Target:** Command dispatch, the four arithmetic operations, and per-operation
//!    simulated latency.
//! 3. **Channel:** The synchronous transport seam binding one initiator to one target.
//! 4. **Initiator:** A data-driven verification driver running ordered transaction
//!    sequences against expected results.
//! 5. **Simulation:** Top-level wiring, configuration, and the verification report.

/// Common types (simulated time, clock, transaction errors).
pub mod common;
/// Simulator configuration (defaults, latency table, general options).
pub mod config;
/// Transport channel trait and the direct initiator-to-target binding.
pub mod channel;
/// Initiator driver and transaction scenarios.
pub mod initiator;
/// Command and payload encoding.
pub mod protocol;
/// Verification report (per-transaction outcomes plus total elapsed time).
pub mod report;
/// Top-level simulator wiring.
pub mod sim;
/// Target dispatcher and per-command dispatch statistics.
pub mod target;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Verification report produced by a run.
pub use crate::report::Report;
/// Top-level simulator; construct with `Simulator::new` and call `run`.
pub use crate::sim::Simulator;
