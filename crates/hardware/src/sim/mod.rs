//! Top-level simulation wiring.

/// Simulator type owning initiator, channel, and clock.
pub mod simulator;

pub use simulator::Simulator;
