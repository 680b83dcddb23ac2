//! Hardware-side target: command dispatch and statistics.
//!
//! The target decodes a payload's command, executes the matching arithmetic
//! operation, advances simulated time by that operation's latency, and writes
//! the result back into the payload.

/// Command dispatcher and the four arithmetic units.
pub mod dispatcher;

/// Per-command dispatch counters.
pub mod stats;

pub use dispatcher::Target;
pub use stats::DispatchStats;
